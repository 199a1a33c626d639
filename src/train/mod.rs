pub mod engine;
pub mod engine_config;
pub mod epoch_summary;
pub mod observer;
pub mod run;
pub mod snapshot;
pub mod status;

pub use engine::{Engine, StepReport, TickOutcome, TickToken};
pub use engine_config::EngineConfig;
pub use epoch_summary::EpochSummary;
pub use observer::RunObserver;
pub use run::TrainingRun;
pub use snapshot::{RunSnapshot, SnapshotRecord};
pub use status::Status;
