//! Crate-wide error type.
//!
//! Duplicate-key variants carry the colliding identifier and render the
//! exact messages surfaced to callers of `add`. Backing-store connectivity
//! failures pass through unchanged as [`AppError::Database`].

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AppError {
    /// A station with the same internal identifier is already stored.
    #[error("A station already exists with station Id \"{station_id}\".")]
    DuplicateStationId { station_id: Uuid },

    /// A station with the same externally-supplied identifier is already
    /// stored.
    #[error("A station already exists with external station Id \"{external_station_id}\".")]
    DuplicateExternalStationId { external_station_id: String },

    /// A stored row could not be mapped back onto the domain model.
    #[error("invalid stored station record: {0}")]
    InvalidRecord(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn duplicate_station_id(station_id: Uuid) -> Self {
        Self::DuplicateStationId { station_id }
    }

    pub fn duplicate_external_station_id(external_station_id: impl Into<String>) -> Self {
        Self::DuplicateExternalStationId {
            external_station_id: external_station_id.into(),
        }
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_station_id_message() {
        let station_id = Uuid::parse_str("25769c6c-d34d-4bfe-ba98-e0ee856f3e7a").unwrap();
        let err = AppError::duplicate_station_id(station_id);

        assert_eq!(
            err.to_string(),
            "A station already exists with station Id \"25769c6c-d34d-4bfe-ba98-e0ee856f3e7a\"."
        );
    }

    #[test]
    fn test_duplicate_external_station_id_message() {
        let err = AppError::duplicate_external_station_id("12");

        assert_eq!(
            err.to_string(),
            "A station already exists with external station Id \"12\"."
        );
    }
}
