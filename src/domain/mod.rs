//! Domain layer: entities and repository traits.
//!
//! This layer has no knowledge of the persistence substrate. Concrete
//! repository implementations live in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
