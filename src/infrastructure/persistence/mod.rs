//! Repository implementations.
//!
//! - [`SqliteStationRepository`] - durable storage via SQLx
//! - [`InMemoryStationRepository`] - process-local test double
//! - [`pool`] - pool construction and migrations

pub mod in_memory_station_repository;
pub mod pool;
pub mod sqlite_station_repository;

pub use in_memory_station_repository::InMemoryStationRepository;
pub use sqlite_station_repository::SqliteStationRepository;
