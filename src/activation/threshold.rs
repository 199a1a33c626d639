use crate::model::weights::WeightVector;

/// Pre-activation `z = w1*x1 + w2*x2 + bias`.
///
/// The summation order is fixed so trajectories are bit-for-bit reproducible.
pub fn weighted_sum(weights: &WeightVector, x1: f64, x2: f64) -> f64 {
    weights.w1 * x1 + weights.w2 * x2 + weights.bias
}

/// Heaviside step activation. `z == 0` maps to class `1`.
pub fn step(z: f64) -> u8 {
    if z >= 0.0 { 1 } else { 0 }
}
