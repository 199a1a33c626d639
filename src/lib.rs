pub mod error;
pub mod activation;
pub mod dataset;
pub mod model;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use dataset::{get_dataset, list_datasets, Dataset, Sample};
pub use model::weights::WeightVector;
pub use optim::perceptron::PerceptronRule;
pub use train::{
    Engine, EngineConfig, EpochSummary, RunObserver, RunSnapshot, SnapshotRecord, Status,
    StepReport, TickOutcome, TickToken, TrainingRun,
};
