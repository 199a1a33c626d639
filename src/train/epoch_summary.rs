use serde::{Serialize, Deserialize};

use crate::model::weights::WeightVector;

/// Outcome of one completed pass over the dataset.
///
/// The engine appends one `EpochSummary` to the run's history at every epoch
/// boundary, so a presentation layer can chart error against epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochSummary {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Sum of `|error|` over the pass; `0` means the epoch converged.
    pub total_abs_error: u32,
    /// Weights at the end of the pass.
    pub weights: WeightVector,
}
