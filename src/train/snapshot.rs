use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::dataset::sample::Sample;
use crate::error::{Error, Result};
use crate::model::weights::WeightVector;
use crate::train::run::TrainingRun;
use crate::train::status::Status;

/// Full outbound state of a run, handed to observers after every mutation.
///
/// Carries numbers and state only; formatting and drawing are up to the
/// consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSnapshot {
    pub dataset: String,
    pub learning_rate: f64,
    pub animation_speed: f64,
    pub weights: WeightVector,
    pub epoch: usize,
    pub current_sample_index: usize,
    pub max_epochs: usize,
    pub status: Status,
    pub samples: Vec<Sample>,
}

impl RunSnapshot {
    pub fn of(run: &TrainingRun) -> RunSnapshot {
        RunSnapshot {
            dataset: run.dataset.name().to_owned(),
            learning_rate: run.learning_rate(),
            animation_speed: run.animation_speed,
            weights: run.weights,
            epoch: run.epoch,
            current_sample_index: run.current_sample_index,
            max_epochs: run.max_epochs,
            status: run.status,
            samples: run.dataset.samples().to_vec(),
        }
    }
}

/// The one-shot export record.
///
/// `converged` is a point-in-time check (every sample currently has
/// `error == 0`), which can differ from `status == Converged` mid-epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub dataset: String,
    pub weights: WeightVector,
    pub epoch: usize,
    pub learning_rate: f64,
    pub samples: Vec<Sample>,
    pub converged: bool,
}

impl SnapshotRecord {
    pub fn of(run: &TrainingRun) -> SnapshotRecord {
        SnapshotRecord {
            dataset: run.dataset.name().to_owned(),
            weights: run.weights,
            epoch: run.epoch,
            learning_rate: run.learning_rate(),
            samples: run.dataset.samples().to_vec(),
            converged: run.dataset.all_correct(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the record to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
