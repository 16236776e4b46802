use crate::config::constant::COST_DECIMALS;

/// Round to the nearest `decimals`-place decimal of the exact binary value,
/// ties to even (`0.125` becomes `0.12`). Infinite and NaN values pass
/// through unchanged.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Costs are reported with two decimals.
pub fn round_cost(value: f64) -> f64 {
    round_to(value, COST_DECIMALS)
}
