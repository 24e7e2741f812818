//! Cost, revenue, and profit calculations, from single crop entries up to
//! farm-level rollups.
//!
//! Costs depend only on how many units were planted; revenue and profit
//! depend on the environment through the adjusted yield. Profit can be
//! negative when costs exceed revenue.

use rust_decimal::Decimal;
use tracing::debug;

use harvest_types::{CropEntry, Environment, Farm};

use crate::error::CalcError;
use crate::yields::crop_yield;

/// Compute the cost of a crop entry: planted units times per-unit cost.
///
/// Environmental conditions never affect costs.
///
/// # Errors
///
/// Returns [`CalcError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn crop_costs(entry: &CropEntry) -> Result<Decimal, CalcError> {
    Decimal::from(entry.num_crops)
        .checked_mul(entry.plant.costs)
        .ok_or(CalcError::ArithmeticOverflow)
}

/// Compute the revenue of a crop entry: adjusted yield times sale price.
///
/// # Errors
///
/// Returns [`CalcError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn crop_revenue(entry: &CropEntry, env: Environment) -> Result<Decimal, CalcError> {
    let entry_yield = crop_yield(entry, env)?;
    entry_yield
        .checked_mul(entry.plant.sale_price)
        .ok_or(CalcError::ArithmeticOverflow)
}

/// Compute the profit of a crop entry: revenue minus costs.
///
/// # Errors
///
/// Returns [`CalcError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn crop_profit(entry: &CropEntry, env: Environment) -> Result<Decimal, CalcError> {
    let revenue = crop_revenue(entry, env)?;
    let costs = crop_costs(entry)?;
    revenue
        .checked_sub(costs)
        .ok_or(CalcError::ArithmeticOverflow)
}

/// Compute the total cost across all crop entries of a farm.
///
/// # Errors
///
/// Returns [`CalcError::EmptyFarm`] if the farm has no crop entries, or
/// [`CalcError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn total_costs(farm: &Farm) -> Result<Decimal, CalcError> {
    sum_over_farm(farm, crop_costs)
}

/// Compute the total revenue across all crop entries of a farm.
///
/// # Errors
///
/// Returns [`CalcError::EmptyFarm`] if the farm has no crop entries, or
/// [`CalcError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn total_revenue(farm: &Farm, env: Environment) -> Result<Decimal, CalcError> {
    sum_over_farm(farm, |entry| crop_revenue(entry, env))
}

/// Compute the total profit across all crop entries of a farm.
///
/// # Errors
///
/// Returns [`CalcError::EmptyFarm`] if the farm has no crop entries, or
/// [`CalcError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn total_profit(farm: &Farm, env: Environment) -> Result<Decimal, CalcError> {
    let total = sum_over_farm(farm, |entry| crop_profit(entry, env))?;
    debug!(crops = farm.crops.len(), %total, "Computed farm profit total");
    Ok(total)
}

/// Sum a per-entry calculation over every crop entry of a farm.
fn sum_over_farm<F>(farm: &Farm, per_entry: F) -> Result<Decimal, CalcError>
where
    F: Fn(&CropEntry) -> Result<Decimal, CalcError>,
{
    if farm.crops.is_empty() {
        return Err(CalcError::EmptyFarm);
    }

    farm.crops.iter().try_fold(Decimal::ZERO, |acc, entry| {
        let value = per_entry(entry)?;
        acc.checked_add(value).ok_or(CalcError::ArithmeticOverflow)
    })
}
