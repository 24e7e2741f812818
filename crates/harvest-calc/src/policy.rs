//! Factor combination policy: how multiple applicable environmental
//! adjustments are merged into a single yield multiplier.
//!
//! A factor is *applicable* only when the environment observed a level for
//! it **and** the plant declares a response to it. Factors are always
//! considered in a fixed order: sun first, then wind.
//!
//! Historically the calculator let each applicable factor overwrite the
//! multiplier instead of compounding it, so when both sun and wind applied,
//! wind's adjustment silently won. That rule is kept available (and is the
//! default) as [`CombinePolicy::LastApplicableWins`]; the compounding
//! alternative is [`CombinePolicy::Multiply`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use harvest_types::{Environment, FactorSensitivity};

use crate::error::CalcError;

/// Named rule for combining multiple applicable factor adjustments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinePolicy {
    /// Each applicable factor replaces the multiplier. With both sun and
    /// wind applicable, wind determines the result and sun is discarded.
    #[default]
    LastApplicableWins,
    /// All applicable factor multipliers compound multiplicatively.
    Multiply,
}

/// Convert a signed percentage delta into a yield multiplier.
///
/// A delta of `-50` becomes `0.5`, `0` becomes `1`, `50` becomes `1.5`:
/// `(percent + 100) / 100` in exact decimal arithmetic.
fn factor_multiplier(percent: i32) -> Result<Decimal, CalcError> {
    let shifted = i64::from(percent)
        .checked_add(100)
        .ok_or(CalcError::ArithmeticOverflow)?;
    Decimal::from(shifted)
        .checked_div(Decimal::ONE_HUNDRED)
        .ok_or(CalcError::ArithmeticOverflow)
}

/// Compute the combined yield multiplier for a plant's sensitivity under
/// the observed conditions.
///
/// Inapplicable factors contribute nothing: with no observed conditions,
/// or a plant with no declared responses, the multiplier is `1`.
///
/// # Errors
///
/// Returns [`CalcError::ArithmeticOverflow`] if checked arithmetic fails.
pub fn combined_multiplier(
    sensitivity: &FactorSensitivity,
    env: Environment,
    policy: CombinePolicy,
) -> Result<Decimal, CalcError> {
    // Fixed evaluation order: sun, then wind.
    let applicable = [
        env.sun
            .and_then(|level| sensitivity.sun.map(|r| r.percent_for(level))),
        env.wind
            .and_then(|level| sensitivity.wind.map(|r| r.percent_for(level))),
    ];

    let mut factor = Decimal::ONE;
    for percent in applicable.into_iter().flatten() {
        let multiplier = factor_multiplier(percent)?;
        factor = match policy {
            CombinePolicy::LastApplicableWins => multiplier,
            CombinePolicy::Multiply => factor
                .checked_mul(multiplier)
                .ok_or(CalcError::ArithmeticOverflow)?,
        };
    }
    Ok(factor)
}
