//! Enumeration types for the harvest farm calculator.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Exposure
// ---------------------------------------------------------------------------

/// The condition level of an environmental factor during a growing period.
///
/// The same three-level scale applies to every factor: a sunny week is
/// `Exposure::High` for sun, a sheltered plot is `Exposure::Low` for wind.
/// Serialized with lowercase labels (`"low"`, `"medium"`, `"high"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exposure {
    /// Below-normal level of the factor.
    Low,
    /// Normal level of the factor.
    Medium,
    /// Above-normal level of the factor.
    High,
}
