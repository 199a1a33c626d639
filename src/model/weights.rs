use serde::{Serialize, Deserialize};

use crate::activation::threshold::{step, weighted_sum};

/// The perceptron's learnable state: one weight per feature plus a bias.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightVector {
    pub w1: f64,
    pub w2: f64,
    pub bias: f64,
}

impl WeightVector {
    /// All-zero weights; every training run starts here.
    pub fn zeros() -> WeightVector {
        WeightVector::default()
    }

    /// Classifies a point with the current weights.
    pub fn predict(&self, x1: f64, x2: f64) -> u8 {
        step(weighted_sum(self, x1, x2))
    }

    /// Adds `scale * (x1, x2, 1)` to the weights.
    pub fn apply_delta(&mut self, scale: f64, x1: f64, x2: f64) {
        self.w1 += scale * x1;
        self.w2 += scale * x2;
        self.bias += scale;
    }

    /// Solves the decision boundary `w1*x1 + w2*x2 + bias = 0` for `x2`.
    ///
    /// Returns `None` when `w2 == 0`: the boundary is then vertical (or absent
    /// when `w1` is also zero) and cannot be expressed as a function of `x1`.
    pub fn boundary_x2(&self, x1: f64) -> Option<f64> {
        if self.w2 == 0.0 {
            None
        } else {
            Some(-(self.w1 * x1 + self.bias) / self.w2)
        }
    }

    /// Solves the decision boundary for `x1`, the counterpart of `boundary_x2`.
    pub fn boundary_x1(&self, x2: f64) -> Option<f64> {
        if self.w1 == 0.0 {
            None
        } else {
            Some(-(self.w2 * x2 + self.bias) / self.w1)
        }
    }
}
