use serde::{Serialize, Deserialize};

/// One labeled two-feature point plus the result of its latest evaluation.
///
/// `x1`, `x2` and `target` never change. `output` and `error` are overwritten
/// each time the engine evaluates the sample and read `(0, 0)` until then.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// 1-based display position inside its dataset.
    pub row: usize,
    pub x1: f64,
    pub x2: f64,
    /// Expected class, `0` or `1`.
    pub target: u8,
    /// Class predicted on the latest evaluation.
    pub output: u8,
    /// `target - output`: one of `-1`, `0`, `1`.
    pub error: i8,
}

impl Sample {
    pub fn new(row: usize, x1: f64, x2: f64, target: u8) -> Sample {
        Sample { row, x1, x2, target, output: 0, error: 0 }
    }

    /// Stores the outcome of an evaluation and returns the signed error.
    pub fn record(&mut self, output: u8) -> i8 {
        self.output = output;
        self.error = self.target as i8 - output as i8;
        self.error
    }

    /// Back to the unevaluated default.
    pub fn clear(&mut self) {
        self.output = 0;
        self.error = 0;
    }
}
