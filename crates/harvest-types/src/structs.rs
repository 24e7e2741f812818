//! Core value structs for the harvest farm calculator.
//!
//! Covers the plant catalogue shape ([`Plant`], [`FactorResponse`],
//! [`FactorSensitivity`]), the farm composition ([`CropEntry`], [`Farm`]),
//! and the per-call growing conditions ([`Environment`]).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::Exposure;

// ---------------------------------------------------------------------------
// FactorResponse
// ---------------------------------------------------------------------------

/// A plant's yield response to a single environmental factor.
///
/// Each field is a signed percentage delta applied to the baseline yield
/// when the factor is at that level. A value of `-50` halves the yield,
/// `0` leaves it unchanged, `50` adds half again.
///
/// Every level carries a value, so a declared response can never be
/// missing a label for the observed conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorResponse {
    /// Percentage delta when the factor is [`Exposure::Low`].
    pub low: i32,
    /// Percentage delta when the factor is [`Exposure::Medium`].
    pub medium: i32,
    /// Percentage delta when the factor is [`Exposure::High`].
    pub high: i32,
}

impl FactorResponse {
    /// Return the percentage delta for the given exposure level.
    pub const fn percent_for(&self, level: Exposure) -> i32 {
        match level {
            Exposure::Low => self.low,
            Exposure::Medium => self.medium,
            Exposure::High => self.high,
        }
    }
}

// ---------------------------------------------------------------------------
// FactorSensitivity
// ---------------------------------------------------------------------------

/// The set of environmental factors a plant responds to.
///
/// A factor the plant does not care about is structurally absent (`None`)
/// rather than probed for at calculation time. The default value declares
/// no sensitivity at all: such a plant always produces its baseline yield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorSensitivity {
    /// Response to sun exposure, if the plant is sun-sensitive.
    #[serde(default)]
    pub sun: Option<FactorResponse>,
    /// Response to wind exposure, if the plant is wind-sensitive.
    #[serde(default)]
    pub wind: Option<FactorResponse>,
}

// ---------------------------------------------------------------------------
// Plant
// ---------------------------------------------------------------------------

/// Static description of a crop type.
///
/// Describes what one unit of the crop yields, costs, and sells for, plus
/// how its yield responds to growing conditions. Plants are immutable
/// catalogue data supplied entirely by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    /// Display name of the crop (e.g. `"corn"`).
    pub name: String,
    /// Baseline yield per planted unit, before environmental adjustment.
    pub base_yield: Decimal,
    /// Cost per planted unit.
    pub costs: Decimal,
    /// Sale price per unit of yield.
    pub sale_price: Decimal,
    /// Environmental sensitivity. Defaults to insensitive.
    #[serde(default)]
    pub sensitivity: FactorSensitivity,
}

impl Plant {
    /// Create a plant with no environmental sensitivity.
    pub fn new(name: &str, base_yield: Decimal, costs: Decimal, sale_price: Decimal) -> Self {
        Self {
            name: String::from(name),
            base_yield,
            costs,
            sale_price,
            sensitivity: FactorSensitivity::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// CropEntry / Farm
// ---------------------------------------------------------------------------

/// A plant paired with the number of units planted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropEntry {
    /// The crop type planted.
    pub plant: Plant,
    /// How many units are planted. Zero is valid and totals to zero.
    pub num_crops: u32,
}

/// A farm: the collection of crop entries aggregated for totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Farm {
    /// The planted crops.
    pub crops: Vec<CropEntry>,
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Ambient growing conditions for a single calculation call.
///
/// Conditions are supplied per call, never stored on a [`Plant`]. A factor
/// left as `None` was not observed and contributes no adjustment, making
/// the "no adjustment" path a first-class value: [`Environment::default`]
/// leaves every yield at its baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Observed sun exposure, if any.
    #[serde(default)]
    pub sun: Option<Exposure>,
    /// Observed wind exposure, if any.
    #[serde(default)]
    pub wind: Option<Exposure>,
}

impl Environment {
    /// Conditions with only sun exposure observed.
    pub const fn sun_only(level: Exposure) -> Self {
        Self {
            sun: Some(level),
            wind: None,
        }
    }

    /// Conditions with only wind exposure observed.
    pub const fn wind_only(level: Exposure) -> Self {
        Self {
            sun: None,
            wind: Some(level),
        }
    }
}
