//! Yield calculations: per-plant adjustment, per-crop scaling, and the
//! farm-level rollup.
//!
//! All functions are pure and never mutate their inputs. Environmental
//! conditions are passed explicitly; [`Environment::default`] is the
//! first-class "no adjustment" value.

use rust_decimal::Decimal;
use tracing::debug;

use harvest_types::{CropEntry, Environment, Farm, Plant};

use crate::error::CalcError;
use crate::policy::{CombinePolicy, combined_multiplier};

/// Compute the environment-adjusted yield of one plant unit under the
/// default combination policy.
///
/// `plant.base_yield * multiplier`, where the multiplier combines the
/// applicable factor adjustments (see [`CombinePolicy`]).
///
/// # Errors
///
/// Returns [`CalcError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn plant_yield(plant: &Plant, env: Environment) -> Result<Decimal, CalcError> {
    plant_yield_with_policy(plant, env, CombinePolicy::default())
}

/// Compute the environment-adjusted yield of one plant unit under an
/// explicit combination policy.
///
/// # Errors
///
/// Returns [`CalcError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn plant_yield_with_policy(
    plant: &Plant,
    env: Environment,
    policy: CombinePolicy,
) -> Result<Decimal, CalcError> {
    let multiplier = combined_multiplier(&plant.sensitivity, env, policy)?;
    plant
        .base_yield
        .checked_mul(multiplier)
        .ok_or(CalcError::ArithmeticOverflow)
}

/// Compute the total yield of a crop entry: planted units times the
/// adjusted per-unit yield.
///
/// # Errors
///
/// Returns [`CalcError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn crop_yield(entry: &CropEntry, env: Environment) -> Result<Decimal, CalcError> {
    let per_unit = plant_yield(&entry.plant, env)?;
    Decimal::from(entry.num_crops)
        .checked_mul(per_unit)
        .ok_or(CalcError::ArithmeticOverflow)
}

/// Compute the total yield across all crop entries of a farm.
///
/// # Errors
///
/// Returns [`CalcError::EmptyFarm`] if the farm has no crop entries, or
/// [`CalcError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn total_yield(farm: &Farm, env: Environment) -> Result<Decimal, CalcError> {
    if farm.crops.is_empty() {
        return Err(CalcError::EmptyFarm);
    }

    let total = farm.crops.iter().try_fold(Decimal::ZERO, |acc, entry| {
        let entry_yield = crop_yield(entry, env)?;
        acc.checked_add(entry_yield)
            .ok_or(CalcError::ArithmeticOverflow)
    })?;

    debug!(crops = farm.crops.len(), %total, "Computed farm yield total");
    Ok(total)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use harvest_types::{Exposure, FactorResponse, FactorSensitivity};
    use rust_decimal_macros::dec;

    use super::*;

    fn corn(base_yield: Decimal) -> Plant {
        Plant::new("corn", base_yield, dec!(1), dec!(3))
    }

    fn sun_sensitive(mut plant: Plant) -> Plant {
        plant.sensitivity.sun = Some(FactorResponse {
            low: -50,
            medium: 0,
            high: 50,
        });
        plant
    }

    fn wind_sensitive(mut plant: Plant) -> Plant {
        plant.sensitivity.wind = Some(FactorResponse {
            low: 0,
            medium: -20,
            high: -50,
        });
        plant
    }

    #[test]
    fn yield_without_conditions_is_baseline() {
        let plant = corn(dec!(30));
        assert_eq!(plant_yield(&plant, Environment::default()).unwrap(), dec!(30));
    }

    #[test]
    fn yield_with_sun_low() {
        let plant = sun_sensitive(corn(dec!(30)));
        let env = Environment::sun_only(Exposure::Low);
        assert_eq!(plant_yield(&plant, env).unwrap(), dec!(15));
    }

    #[test]
    fn yield_with_wind_high() {
        let plant = wind_sensitive(corn(dec!(30)));
        let env = Environment::wind_only(Exposure::High);
        assert_eq!(plant_yield(&plant, env).unwrap(), dec!(15));
    }

    #[test]
    fn yield_with_sun_and_wind_lets_wind_win() {
        // Sun low would halve the yield, but wind medium (-20) replaces it:
        // 30 * 0.8 = 24 under the default policy.
        let plant = wind_sensitive(sun_sensitive(corn(dec!(30))));
        let env = Environment {
            sun: Some(Exposure::Low),
            wind: Some(Exposure::Medium),
        };
        assert_eq!(plant_yield(&plant, env).unwrap(), dec!(24));
    }

    #[test]
    fn yield_with_sun_and_wind_under_multiply() {
        // 30 * 0.5 * 0.8 = 12 when the factors compound.
        let plant = wind_sensitive(sun_sensitive(corn(dec!(30))));
        let env = Environment {
            sun: Some(Exposure::Low),
            wind: Some(Exposure::Medium),
        };
        let result = plant_yield_with_policy(&plant, env, CombinePolicy::Multiply);
        assert_eq!(result.unwrap(), dec!(12));
    }

    #[test]
    fn crop_yield_scales_by_count() {
        let entry = CropEntry {
            plant: corn(dec!(3)),
            num_crops: 10,
        };
        assert_eq!(crop_yield(&entry, Environment::default()).unwrap(), dec!(30));
    }

    #[test]
    fn total_yield_sums_entries() {
        let farm = Farm {
            crops: vec![
                CropEntry {
                    plant: corn(dec!(3)),
                    num_crops: 5,
                },
                CropEntry {
                    plant: Plant::new("pumpkin", dec!(4), dec!(2), dec!(4)),
                    num_crops: 2,
                },
            ],
        };
        assert_eq!(total_yield(&farm, Environment::default()).unwrap(), dec!(23));
    }

    #[test]
    fn total_yield_with_zero_counts_is_zero() {
        let farm = Farm {
            crops: vec![CropEntry {
                plant: corn(dec!(3)),
                num_crops: 0,
            }],
        };
        assert_eq!(total_yield(&farm, Environment::default()).unwrap(), dec!(0));
    }

    #[test]
    fn total_yield_over_empty_farm_fails() {
        let farm = Farm::default();
        assert_eq!(
            total_yield(&farm, Environment::default()),
            Err(CalcError::EmptyFarm)
        );
    }

    #[test]
    fn yield_calls_are_idempotent() {
        let plant = wind_sensitive(sun_sensitive(corn(dec!(30))));
        let env = Environment {
            sun: Some(Exposure::Low),
            wind: Some(Exposure::Medium),
        };
        let first = plant_yield(&plant, env).unwrap();
        let second = plant_yield(&plant, env).unwrap();
        assert_eq!(first, second);
    }
}
