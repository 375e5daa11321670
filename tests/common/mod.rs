#![allow(dead_code)]

use chrono::Utc;
use station_registry::prelude::*;
use uuid::Uuid;

/// Fully-populated station fixture. Field values follow the Barcelona
/// bike-share records the registry was built for.
pub fn station(station_id: Uuid, external_station_id: &str) -> Station {
    station_with_location(station_id, external_station_id, default_location())
}

pub fn station_with_location(
    station_id: Uuid,
    external_station_id: &str,
    location: Location,
) -> Station {
    Station::new(
        station_id,
        StationDetail::new(
            "01 - C/ GRAN VIA CORTS CATALANES 760".to_string(),
            StationType::Bike,
        ),
        StationExternalData::new(
            external_station_id.to_string(),
            vec![
                "24".to_string(),
                "369".to_string(),
                "387".to_string(),
                "426".to_string(),
            ],
        ),
        location,
        Utc::now(),
        Utc::now(),
    )
}

pub fn default_location() -> Location {
    Location::new(
        "Gran Via Corts Catalanes".to_string(),
        Some("760".to_string()),
        1,
        41.397952,
        2.180042,
        "08013".to_string(),
    )
}

pub fn location_without_address_number() -> Location {
    Location::new(
        "Gran Via Corts Catalanes".to_string(),
        None,
        1,
        41.397952,
        2.180042,
        "08013".to_string(),
    )
}
