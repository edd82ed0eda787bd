//! # Domain Models
//!
//! Configuration models, shared constants and the feature slice registry.
//! Depends on `serde` only: no I/O, networking, or analysis logic lives here.

pub mod config;
pub mod constants;
pub mod registry;
