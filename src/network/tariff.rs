use crate::config::constant::{BASE_RATE, RATE_STEP, WEIGHT_INCREMENT, WEIGHT_THRESHOLD};

/// Per-km delivery rate for a truck carrying `weight`.
///
/// Up to the threshold the base rate applies; above it, every started
/// increment adds one rate step (`10 + 8 * ceil((w - 5) / 5)`).
pub fn cost_rate_per_km(weight: f64) -> f64 {
    if weight <= WEIGHT_THRESHOLD {
        return BASE_RATE;
    }
    let extra = ((weight - WEIGHT_THRESHOLD) / WEIGHT_INCREMENT).ceil();
    BASE_RATE + extra * RATE_STEP
}

/// Rate for running empty between centers.
pub fn empty_rate() -> f64 {
    cost_rate_per_km(0.0)
}
