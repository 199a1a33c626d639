use crate::{dataset::sample::Sample, model::weights::WeightVector};

/// The classic error-driven perceptron update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerceptronRule {
    pub learning_rate: f64,
}

impl PerceptronRule {
    pub fn new(learning_rate: f64) -> PerceptronRule {
        PerceptronRule { learning_rate }
    }

    /// Applies `weights += lr * error * (x1, x2, 1)`. Does nothing when
    /// `error == 0`. Returns whether the weights changed.
    pub fn step(&self, weights: &mut WeightVector, sample: &Sample, error: i8) -> bool {
        if error == 0 {
            return false;
        }
        weights.apply_delta(self.learning_rate * error as f64, sample.x1, sample.x2);
        true
    }
}
