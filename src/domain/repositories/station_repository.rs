//! Repository trait for station data access.

use crate::domain::entities::Station;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for the station registry.
///
/// Provides insert-once semantics with duplicate rejection on two unique
/// keys, plus keyed and bulk retrieval.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteStationRepository`] - SQLx/SQLite implementation
/// - [`crate::infrastructure::persistence::InMemoryStationRepository`] - in-memory test double
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_station.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StationRepository: Send + Sync {
    /// Persists a fully-formed station, including all nested value objects,
    /// as one atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateStationId`] if a station with the same
    /// `station_id` is already stored, [`AppError::DuplicateExternalStationId`]
    /// if one with the same `external_station_id` is. When both keys collide
    /// at once, the `station_id` collision is the one reported.
    ///
    /// Returns [`AppError::Database`] on backing-store errors.
    async fn add(&self, station: Station) -> Result<(), AppError>;

    /// Finds a station by its internal identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Station))` if found, fully reconstructed
    /// - `Ok(None)` if not found — absence is a normal outcome, not an error
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on backing-store errors.
    async fn find_by_station_id(&self, station_id: Uuid) -> Result<Option<Station>, AppError>;

    /// Finds a station by the identifier assigned by the external system.
    ///
    /// The lookup is an exact, case-sensitive string match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on backing-store errors.
    async fn find_by_external_station_id(
        &self,
        external_station_id: &str,
    ) -> Result<Option<Station>, AppError>;

    /// Returns every stored station in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on backing-store errors.
    async fn find_all(&self) -> Result<Vec<Station>, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // The mock is what consumers (ingestion, services) test against; make
    // sure it stays usable as a trait object.
    #[tokio::test]
    async fn test_mock_repository_as_trait_object() {
        let mut mock = MockStationRepository::new();
        mock.expect_find_by_station_id()
            .times(1)
            .returning(|_| Ok(None));

        let repo: Box<dyn StationRepository> = Box::new(mock);
        let found = repo.find_by_station_id(Uuid::new_v4()).await.unwrap();

        assert!(found.is_none());
    }
}
