//! In-memory implementation of the station repository.
//!
//! Backs consumer tests that do not want a database on the table, and serves
//! as the reference for the persistence contract: same duplicate rules, same
//! messages, same insertion-order guarantee as the SQLx implementation.

use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::Station;
use crate::domain::repositories::StationRepository;
use crate::error::AppError;

/// Station repository held entirely in process memory.
#[derive(Default)]
pub struct InMemoryStationRepository {
    // Vec keeps insertion order; the lock is never held across an await.
    stations: Mutex<Vec<Station>>,
}

impl InMemoryStationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StationRepository for InMemoryStationRepository {
    async fn add(&self, station: Station) -> Result<(), AppError> {
        let mut stations = self.stations.lock().expect("station store poisoned");

        // station_id is checked before external_station_id so a double
        // collision reports the internal key, matching the SQLx backend.
        if stations.iter().any(|s| s.station_id == station.station_id) {
            return Err(AppError::duplicate_station_id(station.station_id));
        }

        if stations
            .iter()
            .any(|s| s.external_station_id() == station.external_station_id())
        {
            return Err(AppError::duplicate_external_station_id(
                station.external_station_id(),
            ));
        }

        stations.push(station);
        Ok(())
    }

    async fn find_by_station_id(&self, station_id: Uuid) -> Result<Option<Station>, AppError> {
        let stations = self.stations.lock().expect("station store poisoned");

        Ok(stations.iter().find(|s| s.station_id == station_id).cloned())
    }

    async fn find_by_external_station_id(
        &self,
        external_station_id: &str,
    ) -> Result<Option<Station>, AppError> {
        let stations = self.stations.lock().expect("station store poisoned");

        Ok(stations
            .iter()
            .find(|s| s.external_station_id() == external_station_id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Station>, AppError> {
        let stations = self.stations.lock().expect("station store poisoned");

        Ok(stations.clone())
    }
}
