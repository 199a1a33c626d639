use std::time::Duration;

use tracing::{debug, trace};

use crate::activation::threshold::{step, weighted_sum};
use crate::dataset::builtin::get_dataset;
use crate::dataset::dataset::Dataset;
use crate::error::{require_positive, Result};
use crate::train::engine_config::EngineConfig;
use crate::train::epoch_summary::EpochSummary;
use crate::train::observer::RunObserver;
use crate::train::run::TrainingRun;
use crate::train::snapshot::{RunSnapshot, SnapshotRecord};
use crate::train::status::Status;

// ---------------------------------------------------------------------------
// Step and tick results
// ---------------------------------------------------------------------------

/// What a single sample evaluation did.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    /// Index of the evaluated sample.
    pub index: usize,
    /// Weighted sum before activation.
    pub z: f64,
    pub output: u8,
    pub error: i8,
    /// `true` when the weights were changed by this step.
    pub updated: bool,
    /// Set when this step closed an epoch.
    pub epoch_completed: Option<EpochSummary>,
}

/// Handle for one scheduled auto-step chain.
///
/// Issued by `Engine::start`. `pause`, `reset` and a single `step` taken while
/// training invalidate every token issued before them, so a tick that was already queued becomes a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// A step ran and the run is still training; schedule the next tick
    /// after `delay`.
    Continue { token: TickToken, delay: Duration },
    /// A step ran and the run reached a terminal status.
    Finished(Status),
    /// The token is stale or the run is not training; nothing happened.
    Discarded,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Drives `TrainingRun`s through the perceptron learning algorithm.
///
/// The engine holds configuration and observers only. All learned state lives
/// in the `TrainingRun` the caller owns, and operations on a run must be
/// sequenced by that caller.
pub struct Engine {
    config: EngineConfig,
    observers: Vec<Box<dyn RunObserver>>,
}

impl Default for Engine {
    fn default() -> Self {
        Engine { config: EngineConfig::default(), observers: Vec::new() }
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Engine> {
        config.validate()?;
        Ok(Engine { config, observers: Vec::new() })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registers a hook that receives a snapshot after every mutation.
    pub fn add_observer(&mut self, observer: impl RunObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn with_observer(mut self, observer: impl RunObserver + 'static) -> Self {
        self.add_observer(observer);
        self
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Builds a fresh run over the named built-in dataset.
    pub fn load(&self, dataset_name: &str, learning_rate: f64) -> Result<TrainingRun> {
        let dataset = get_dataset(dataset_name)?;
        self.load_dataset(dataset, learning_rate)
    }

    /// Builds a fresh run over a caller-supplied dataset.
    pub fn load_dataset(&self, dataset: Dataset, learning_rate: f64) -> Result<TrainingRun> {
        let learning_rate = require_positive("learning_rate", learning_rate)?;
        debug!(dataset = dataset.name(), learning_rate, "loaded training run");
        let run = TrainingRun::new(dataset, learning_rate, self.config.max_epochs);
        self.emit(&run);
        Ok(run)
    }

    /// `Ready | Paused -> Training`. Returns the token the caller's scheduler
    /// passes to `tick`. On a run that is already training, returns the live
    /// token without changing anything; on a terminal run, does nothing.
    pub fn start(&self, run: &mut TrainingRun) -> TickToken {
        match run.status {
            Status::Ready | Status::Paused => {
                run.status = Status::Training;
                run.generation += 1;
                debug!(epoch = run.epoch, "training started");
                self.emit(run);
            }
            Status::Training | Status::Converged | Status::MaxEpochsReached => {}
        }
        TickToken { generation: run.generation }
    }

    /// `Training -> Paused`; no-op in any other state.
    pub fn pause(&self, run: &mut TrainingRun) {
        if run.status != Status::Training {
            return;
        }
        run.status = Status::Paused;
        run.generation += 1;
        debug!(epoch = run.epoch, index = run.current_sample_index, "training paused");
        self.emit(run);
    }

    /// Evaluates exactly one sample and leaves the run paused for inspection,
    /// unless the step ended the run. Returns `None` on a terminal run.
    pub fn step(&self, run: &mut TrainingRun) -> Option<StepReport> {
        if run.status.is_terminal() {
            return None;
        }
        let was_training = run.status == Status::Training;
        let report = self.advance(run);
        if !run.status.is_terminal() {
            run.status = Status::Paused;
            if was_training {
                run.generation += 1;
            }
        }
        self.emit(run);
        Some(report)
    }

    /// Zeroes weights and counters, clears sample outputs and returns to
    /// `Ready`. With `dataset_name`, switches dataset first; an unknown name
    /// leaves the run untouched.
    pub fn reset(&self, run: &mut TrainingRun, dataset_name: Option<&str>) -> Result<()> {
        if let Some(name) = dataset_name {
            run.dataset = get_dataset(name)?;
        }
        run.reinitialize();
        debug!(dataset = run.dataset.name(), "training run reset");
        self.emit(run);
        Ok(())
    }

    /// Applies to updates made from the next step on.
    pub fn set_learning_rate(&self, run: &mut TrainingRun, learning_rate: f64) -> Result<()> {
        run.rule.learning_rate = require_positive("learning_rate", learning_rate)?;
        self.emit(run);
        Ok(())
    }

    pub fn set_animation_speed(&self, run: &mut TrainingRun, multiplier: f64) -> Result<()> {
        run.animation_speed = require_positive("animation_speed", multiplier)?;
        self.emit(run);
        Ok(())
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    /// Pause between auto-steps: `base_delay_ms / animation_speed`.
    pub fn tick_delay(&self, run: &TrainingRun) -> Duration {
        let secs = self.config.base_delay_ms as f64 / run.animation_speed / 1000.0;
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }

    /// One scheduled auto-step.
    ///
    /// Discarded when `token` predates the latest start/pause/reset or when
    /// the run is no longer training.
    pub fn tick(&self, run: &mut TrainingRun, token: TickToken) -> TickOutcome {
        if token.generation != run.generation || run.status != Status::Training {
            trace!(token = token.generation, live = run.generation, "stale tick discarded");
            return TickOutcome::Discarded;
        }
        self.advance(run);
        self.emit(run);
        if run.status.is_terminal() {
            TickOutcome::Finished(run.status)
        } else {
            TickOutcome::Continue { token, delay: self.tick_delay(run) }
        }
    }

    /// Starts the run and ticks it without pacing until it stops training.
    pub fn run_to_end(&self, run: &mut TrainingRun) -> Status {
        let token = self.start(run);
        while let TickOutcome::Continue { .. } = self.tick(run, token) {}
        run.status
    }

    // ── Inspection ────────────────────────────────────────────────────────

    pub fn snapshot(&self, run: &TrainingRun) -> RunSnapshot {
        RunSnapshot::of(run)
    }

    pub fn export_snapshot(&self, run: &TrainingRun) -> SnapshotRecord {
        SnapshotRecord::of(run)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// The learning rule: evaluate `dataset[index]`, update on error, advance
    /// the cursor and settle the epoch at the end of a pass.
    fn advance(&self, run: &mut TrainingRun) -> StepReport {
        let index = run.current_sample_index;
        let sample = run.dataset.sample_mut(index);

        let z = weighted_sum(&run.weights, sample.x1, sample.x2);
        let output = step(z);
        let error = sample.record(output);
        let updated = run.rule.step(&mut run.weights, sample, error);

        trace!(
            epoch = run.epoch,
            row = sample.row,
            z,
            output,
            error,
            w1 = run.weights.w1,
            w2 = run.weights.w2,
            bias = run.weights.bias,
            "sample evaluated"
        );

        run.current_sample_index += 1;
        let epoch_completed = if run.current_sample_index == run.dataset.len() {
            Some(self.finish_epoch(run))
        } else {
            None
        };

        StepReport { index, z, output, error, updated, epoch_completed }
    }

    fn finish_epoch(&self, run: &mut TrainingRun) -> EpochSummary {
        run.current_sample_index = 0;
        run.epoch += 1;

        let summary = EpochSummary {
            epoch: run.epoch,
            total_abs_error: run.dataset.total_abs_error(),
            weights: run.weights,
        };
        run.history.push(summary);

        if summary.total_abs_error == 0 {
            run.status = Status::Converged;
            debug!(epoch = run.epoch, "training converged");
        } else if run.epoch >= run.max_epochs {
            run.status = Status::MaxEpochsReached;
            debug!(
                epoch = run.epoch,
                total_abs_error = summary.total_abs_error,
                "max epochs reached without convergence"
            );
        }
        summary
    }

    fn emit(&self, run: &TrainingRun) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = RunSnapshot::of(run);
        for observer in &self.observers {
            observer.notify(&snapshot);
        }
    }
}
