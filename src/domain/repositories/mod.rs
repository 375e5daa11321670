//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod station_repository;

pub use station_repository::StationRepository;

#[cfg(test)]
pub use station_repository::MockStationRepository;
