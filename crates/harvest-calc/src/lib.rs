//! Yield, cost, revenue, and profit calculations for the harvest farm
//! simulation.
//!
//! This crate is a stateless function library: given plants, crop entries,
//! and observed growing conditions from [`harvest_types`], it returns
//! exact [`Decimal`](rust_decimal::Decimal) figures. All operations are
//! pure, read caller-owned values, and are safe to call from any number of
//! threads.
//!
//! # Modules
//!
//! - [`error`] -- Error types for farm calculations.
//! - [`policy`] -- The factor combination policy: how multiple applicable
//!   environmental adjustments merge into one yield multiplier.
//! - [`yields`] -- Per-plant yield adjustment, per-crop scaling, and the
//!   farm-level yield rollup.
//! - [`profit`] -- Cost, revenue, and profit calculations with farm-level
//!   rollups.
//!
//! # Example
//!
//! ```
//! use harvest_calc::{CalcError, total_profit};
//! use harvest_types::{CropEntry, Environment, Farm, Plant};
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), CalcError> {
//! let farm = Farm {
//!     crops: vec![CropEntry {
//!         plant: Plant::new("corn", Decimal::from(3), Decimal::ONE, Decimal::from(3)),
//!         num_crops: 10,
//!     }],
//! };
//! let profit = total_profit(&farm, Environment::default())?;
//! assert_eq!(profit, Decimal::from(80));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod policy;
pub mod profit;
pub mod yields;

// Re-export primary operations and types at crate root.
pub use error::CalcError;
pub use policy::{CombinePolicy, combined_multiplier};
pub use profit::{crop_costs, crop_profit, crop_revenue, total_costs, total_profit, total_revenue};
pub use yields::{crop_yield, plant_yield, plant_yield_with_policy, total_yield};
