//! Station aggregate and its nested value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A bike-share dock location.
///
/// The aggregate root of the registry. A station is identified internally by
/// `station_id` and externally by `station_external_data.external_station_id`;
/// both are unique across all stored stations. The nested value objects are
/// owned exclusively by the station — they have no independent lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub station_id: Uuid,
    pub station_detail: StationDetail,
    pub station_external_data: StationExternalData,
    pub location: Location,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Station {
    /// Creates a fully-formed station. All fields are supplied at
    /// construction; there is no partial state.
    pub fn new(
        station_id: Uuid,
        station_detail: StationDetail,
        station_external_data: StationExternalData,
        location: Location,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            station_id,
            station_detail,
            station_external_data,
            location,
            created_at,
            updated_at,
        }
    }

    /// Convenience accessor for the externally-supplied identifier.
    pub fn external_station_id(&self) -> &str {
        &self.station_external_data.external_station_id
    }
}

/// Descriptive detail of a station: display name and dock type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDetail {
    pub name: String,
    pub station_type: StationType,
}

impl StationDetail {
    pub fn new(name: String, station_type: StationType) -> Self {
        Self { name, station_type }
    }
}

/// Kind of dock installed at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationType {
    Bike,
    ElectricBike,
}

impl StationType {
    /// Stable storage representation, also used by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            StationType::Bike => "bike",
            StationType::ElectricBike => "electric_bike",
        }
    }
}

impl fmt::Display for StationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored station type label is not recognised.
#[derive(Debug, thiserror::Error)]
#[error("unknown station type \"{0}\"")]
pub struct ParseStationTypeError(String);

impl FromStr for StationType {
    type Err = ParseStationTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bike" => Ok(StationType::Bike),
            "electric_bike" => Ok(StationType::ElectricBike),
            other => Err(ParseStationTypeError(other.to_string())),
        }
    }
}

/// Identifiers assigned by the upstream data source.
///
/// `nearby_external_station_ids` is an ordered list; entries may repeat and
/// carry no uniqueness constraint of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationExternalData {
    pub external_station_id: String,
    pub nearby_external_station_ids: Vec<String>,
}

impl StationExternalData {
    pub fn new(external_station_id: String, nearby_external_station_ids: Vec<String>) -> Self {
        Self {
            external_station_id,
            nearby_external_station_ids,
        }
    }
}

/// Physical placement of a station.
///
/// `address_number` is genuinely optional — some stations sit on stretches of
/// road with no house number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub address_number: Option<String>,
    pub district_code: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub zip_code: String,
}

impl Location {
    pub fn new(
        address: String,
        address_number: Option<String>,
        district_code: i32,
        latitude: f64,
        longitude: f64,
        zip_code: String,
    ) -> Self {
        Self {
            address,
            address_number,
            district_code,
            latitude,
            longitude,
            zip_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_station(station_id: Uuid) -> Station {
        Station::new(
            station_id,
            StationDetail::new(
                "01 - C/ GRAN VIA CORTS CATALANES 760".to_string(),
                StationType::Bike,
            ),
            StationExternalData::new(
                "1".to_string(),
                vec![
                    "24".to_string(),
                    "369".to_string(),
                    "387".to_string(),
                    "426".to_string(),
                ],
            ),
            Location::new(
                "Gran Via Corts Catalanes".to_string(),
                Some("760".to_string()),
                1,
                41.397952,
                2.180042,
                "08013".to_string(),
            ),
            Utc::now(),
            Utc::now(),
        )
    }

    #[test]
    fn test_station_creation() {
        let station_id = Uuid::new_v4();
        let station = sample_station(station_id);

        assert_eq!(station.station_id, station_id);
        assert_eq!(station.external_station_id(), "1");
        assert_eq!(
            station.station_detail.name,
            "01 - C/ GRAN VIA CORTS CATALANES 760"
        );
        assert_eq!(station.station_detail.station_type, StationType::Bike);
        assert_eq!(station.location.district_code, 1);
        assert_eq!(station.location.address_number.as_deref(), Some("760"));
    }

    #[test]
    fn test_location_without_address_number() {
        let location = Location::new(
            "Gran Via Corts Catalanes".to_string(),
            None,
            1,
            41.397952,
            2.180042,
            "08013".to_string(),
        );

        assert!(location.address_number.is_none());
    }

    #[test]
    fn test_nearby_external_station_ids_preserve_order() {
        let data = StationExternalData::new(
            "7".to_string(),
            vec!["3".to_string(), "1".to_string(), "3".to_string()],
        );

        // Order matters, duplicates are allowed.
        assert_eq!(data.nearby_external_station_ids, vec!["3", "1", "3"]);
    }

    #[test]
    fn test_station_type_round_trips_through_storage_label() {
        for station_type in [StationType::Bike, StationType::ElectricBike] {
            let parsed: StationType = station_type.as_str().parse().unwrap();
            assert_eq!(parsed, station_type);
        }
    }

    #[test]
    fn test_station_type_rejects_unknown_label() {
        let err = "scooter".parse::<StationType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown station type \"scooter\"");
    }
}
