//! Shared type definitions for the harvest farm calculator.
//!
//! This crate is the single source of truth for the value shapes passed
//! into the calculator: plants, crop entries, farms, and the ambient
//! growing conditions for a calculation call. All types are plain,
//! caller-owned, immutable value objects with serde derives.
//!
//! # Modules
//!
//! - [`enums`] -- Enumeration types (exposure levels)
//! - [`structs`] -- Core value structs (plants, crops, farms, environment)

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::Exposure;
pub use structs::{CropEntry, Environment, FactorResponse, FactorSensitivity, Farm, Plant};
