//! Domain layer types and invariants.

pub mod error;
pub mod resource;
pub mod tags;
