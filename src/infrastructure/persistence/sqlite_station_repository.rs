//! SQLx implementation of the station repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{
    Location, Station, StationDetail, StationExternalData, StationType,
};
use crate::domain::repositories::StationRepository;
use crate::error::AppError;
use crate::utils::db_error::{StationUniqueKey, station_unique_violation};

const STATION_COLUMNS: &str = "station_id, name, station_type, external_station_id, \
     nearby_external_station_ids, address, address_number, district_code, \
     latitude, longitude, zip_code, created_at, updated_at";

/// SQLx-backed repository for station storage and retrieval.
///
/// Uniqueness is enforced by the unique indexes on `station_id` and
/// `external_station_id`: `add` issues a single `INSERT` and translates the
/// resulting constraint violation, so there is no check-then-insert window
/// for concurrent writers to race through. Insertion order is materialised
/// by the autoincrement `id` column and `find_all` orders by it explicitly.
pub struct SqliteStationRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Maps an insert failure onto the domain error, keeping anything that is
    /// not a recognised unique violation as a plain database error.
    ///
    /// A station_id collision takes precedence in reporting. SQLite does not
    /// check unique indexes in a defined order, so when the engine reports
    /// the external_station_id index the stored station_id is consulted to
    /// decide which key actually collided.
    async fn translate_insert_error(&self, e: sqlx::Error, station: &Station) -> AppError {
        match station_unique_violation(&e) {
            Some(StationUniqueKey::StationId) => {
                AppError::duplicate_station_id(station.station_id)
            }
            Some(StationUniqueKey::ExternalStationId) => {
                if self.station_id_exists(station.station_id).await.unwrap_or(false) {
                    AppError::duplicate_station_id(station.station_id)
                } else {
                    AppError::duplicate_external_station_id(station.external_station_id())
                }
            }
            None => AppError::Database(e),
        }
    }

    async fn station_id_exists(&self, station_id: Uuid) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM stations WHERE station_id = ?)",
        )
        .bind(station_id.to_string())
        .fetch_one(self.pool.as_ref())
        .await
    }
}

#[async_trait]
impl StationRepository for SqliteStationRepository {
    async fn add(&self, station: Station) -> Result<(), AppError> {
        let nearby_ids =
            serde_json::to_string(&station.station_external_data.nearby_external_station_ids)?;

        let insert = format!("INSERT INTO stations ({STATION_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)");
        let result = sqlx::query(&insert)
            .bind(station.station_id.to_string())
            .bind(&station.station_detail.name)
            .bind(station.station_detail.station_type.as_str())
            .bind(&station.station_external_data.external_station_id)
            .bind(&nearby_ids)
            .bind(&station.location.address)
            .bind(station.location.address_number.as_deref())
            .bind(station.location.district_code)
            .bind(station.location.latitude)
            .bind(station.location.longitude)
            .bind(&station.location.zip_code)
            .bind(station.created_at)
            .bind(station.updated_at)
            .execute(self.pool.as_ref())
            .await;

        match result {
            Ok(_) => {
                tracing::debug!(
                    station_id = %station.station_id,
                    external_station_id = %station.external_station_id(),
                    "station added"
                );
                Ok(())
            }
            Err(e) => Err(self.translate_insert_error(e, &station).await),
        }
    }

    async fn find_by_station_id(&self, station_id: Uuid) -> Result<Option<Station>, AppError> {
        let select = format!("SELECT {STATION_COLUMNS} FROM stations WHERE station_id = ?");
        let row = sqlx::query_as::<_, StationRow>(&select)
            .bind(station_id.to_string())
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Station::try_from).transpose()
    }

    async fn find_by_external_station_id(
        &self,
        external_station_id: &str,
    ) -> Result<Option<Station>, AppError> {
        let select =
            format!("SELECT {STATION_COLUMNS} FROM stations WHERE external_station_id = ?");
        let row = sqlx::query_as::<_, StationRow>(&select)
            .bind(external_station_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Station::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Station>, AppError> {
        let select = format!("SELECT {STATION_COLUMNS} FROM stations ORDER BY id");
        let rows = sqlx::query_as::<_, StationRow>(&select)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(Station::try_from).collect()
    }
}

/// Flat row shape of the `stations` table.
///
/// `station_id` is stored as hyphenated text and the nearby-ids list as a
/// JSON array, so reconstruction can fail on a corrupt row; those failures
/// surface as [`AppError::InvalidRecord`].
#[derive(sqlx::FromRow)]
struct StationRow {
    station_id: String,
    name: String,
    station_type: String,
    external_station_id: String,
    nearby_external_station_ids: String,
    address: String,
    address_number: Option<String>,
    district_code: i32,
    latitude: f64,
    longitude: f64,
    zip_code: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<StationRow> for Station {
    type Error = AppError;

    fn try_from(row: StationRow) -> Result<Self, AppError> {
        let station_id = Uuid::parse_str(&row.station_id)
            .map_err(|e| AppError::invalid_record(format!("station_id: {e}")))?;

        let station_type: StationType = row
            .station_type
            .parse()
            .map_err(|e| AppError::invalid_record(format!("station_type: {e}")))?;

        let nearby_external_station_ids: Vec<String> =
            serde_json::from_str(&row.nearby_external_station_ids)
                .map_err(|e| AppError::invalid_record(format!("nearby_external_station_ids: {e}")))?;

        Ok(Station::new(
            station_id,
            StationDetail::new(row.name, station_type),
            StationExternalData::new(row.external_station_id, nearby_external_station_ids),
            Location::new(
                row.address,
                row.address_number,
                row.district_code,
                row.latitude,
                row.longitude,
                row.zip_code,
            ),
            row.created_at,
            row.updated_at,
        ))
    }
}
