//! Core processing building blocks: crop/layout parameters, the per-image
//! crop pipeline, and sheet assembly. These are internal primitives consumed
//! by the high-level `api` module.
pub mod params;
pub mod processing;
