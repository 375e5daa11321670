//! Classification of backing-store unique-violation errors.
//!
//! SQLite does not expose constraint names through the driver, so the
//! violated key is recovered from the error message, which names the table
//! and column (`UNIQUE constraint failed: stations.station_id`).

/// Unique key of the `stations` table that an insert collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationUniqueKey {
    StationId,
    ExternalStationId,
}

/// Returns the unique key violated by `e`, or `None` when `e` is not a
/// unique violation on a known station key.
pub fn station_unique_violation(e: &sqlx::Error) -> Option<StationUniqueKey> {
    let Some(db_err) = e.as_database_error() else {
        return None;
    };

    if !db_err.is_unique_violation() {
        return None;
    }

    classify_message(db_err.message())
}

fn classify_message(message: &str) -> Option<StationUniqueKey> {
    // The engine reports a single violated index per failure; which one it
    // picks when both keys collide is undefined, so precedence is resolved
    // by the repository, not here.
    if message.contains("stations.station_id") {
        Some(StationUniqueKey::StationId)
    } else if message.contains("stations.external_station_id") {
        Some(StationUniqueKey::ExternalStationId)
    } else {
        None
    }
}
