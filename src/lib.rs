//! # Station Registry
//!
//! Persistence layer for bike-share station records, built with SQLx.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Station entities and the repository trait
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLx and in-memory repositories
//!
//! ## Persistence contract
//!
//! The [`domain::repositories::StationRepository`] trait provides insert-once
//! storage of [`domain::entities::Station`] aggregates with duplicate
//! rejection on two unique keys (the internal station id and the external
//! system's station id), keyed lookup with explicit not-found results, and
//! insertion-ordered listing. Uniqueness is enforced by database constraints,
//! not application-level checks, so concurrent writers cannot race past the
//! duplicate detection.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults to sqlite://stations.db
//! export DATABASE_URL="sqlite://stations.db"
//! ```
//!
//! ```no_run
//! use station_registry::config;
//! use station_registry::domain::repositories::StationRepository;
//! use station_registry::infrastructure::persistence::{SqliteStationRepository, pool};
//! use std::sync::Arc;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = config::load_from_env()?;
//! let pool = pool::connect(&config).await?;
//! let repository = SqliteStationRepository::new(Arc::new(pool));
//!
//! let stations = repository.find_all().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! Integration tests in `tests/repository_station.rs` run against throwaway
//! SQLx test databases; the in-memory repository covers the same contract
//! without touching disk.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{
        Location, Station, StationDetail, StationExternalData, StationType,
    };
    pub use crate::domain::repositories::StationRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{
        InMemoryStationRepository, SqliteStationRepository,
    };
}
