//! Infrastructure layer: concrete adapters for the domain's ports.

pub mod persistence;
