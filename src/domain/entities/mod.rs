//! Domain entities for the station registry.

pub mod station;

pub use station::{Location, Station, StationDetail, StationExternalData, StationType};
