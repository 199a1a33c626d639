use crate::dataset::sample::Sample;
use crate::error::{Error, Result};

/// A named, ordered, fixed-length sequence of samples.
///
/// Duplicate points are allowed. A dataset is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    samples: Vec<Sample>,
}

impl Dataset {
    /// Builds a dataset from `(x1, x2, target)` triples, numbering rows from 1.
    ///
    /// Fails with `InvalidParameter` if `points` is empty, a target is not
    /// `0` or `1`, or a coordinate is NaN or infinite.
    pub fn new(name: impl Into<String>, points: &[(f64, f64, u8)]) -> Result<Dataset> {
        if points.is_empty() {
            return Err(Error::invalid("samples", "dataset must not be empty"));
        }
        let samples = points.iter()
            .enumerate()
            .map(|(i, &(x1, x2, target))| {
                if target > 1 {
                    return Err(Error::invalid("target", target));
                }
                if !(x1.is_finite() && x2.is_finite()) {
                    return Err(Error::invalid("point", format!("({x1}, {x2})")));
                }
                Ok(Sample::new(i + 1, x1, x2, target))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Dataset { name: name.into(), samples })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Never true for a dataset built through `new`.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub(crate) fn sample_mut(&mut self, index: usize) -> &mut Sample {
        &mut self.samples[index]
    }

    /// Resets every sample's `output`/`error` to `(0, 0)`.
    pub fn clear_evaluations(&mut self) {
        self.samples.iter_mut().for_each(Sample::clear);
    }

    /// Sum of `|error|` over all samples as last evaluated.
    pub fn total_abs_error(&self) -> u32 {
        self.samples.iter().map(|s| s.error.unsigned_abs() as u32).sum()
    }

    /// `true` when every sample currently has `error == 0`.
    pub fn all_correct(&self) -> bool {
        self.samples.iter().all(|s| s.error == 0)
    }
}
