use crate::dataset::dataset::Dataset;
use crate::model::weights::WeightVector;
use crate::optim::perceptron::PerceptronRule;
use crate::train::epoch_summary::EpochSummary;
use crate::train::status::Status;

/// One attempt to fit a `WeightVector` to a `Dataset`.
///
/// A run is owned by a single caller and mutated only through `Engine`
/// commands. Between steps `current_sample_index < dataset.len()` always holds.
#[derive(Debug, Clone)]
pub struct TrainingRun {
    pub(crate) dataset: Dataset,
    pub(crate) rule: PerceptronRule,
    pub(crate) weights: WeightVector,
    pub(crate) epoch: usize,
    pub(crate) current_sample_index: usize,
    pub(crate) max_epochs: usize,
    pub(crate) status: Status,
    pub(crate) animation_speed: f64,
    /// Bumped whenever scheduled ticks must be invalidated.
    pub(crate) generation: u64,
    pub(crate) history: Vec<EpochSummary>,
}

impl TrainingRun {
    pub(crate) fn new(dataset: Dataset, learning_rate: f64, max_epochs: usize) -> TrainingRun {
        let mut run = TrainingRun {
            dataset,
            rule: PerceptronRule::new(learning_rate),
            weights: WeightVector::zeros(),
            epoch: 0,
            current_sample_index: 0,
            max_epochs,
            status: Status::Ready,
            animation_speed: 1.0,
            generation: 0,
            history: Vec::new(),
        };
        run.dataset.clear_evaluations();
        run
    }

    /// Returns the run to its freshly loaded state. Learning rate, animation
    /// speed and the tick generation counter survive.
    pub(crate) fn reinitialize(&mut self) {
        self.weights = WeightVector::zeros();
        self.epoch = 0;
        self.current_sample_index = 0;
        self.status = Status::Ready;
        self.history.clear();
        self.dataset.clear_evaluations();
        self.generation += 1;
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn learning_rate(&self) -> f64 {
        self.rule.learning_rate
    }

    pub fn weights(&self) -> WeightVector {
        self.weights
    }

    /// Completed passes over the dataset.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    /// Index of the sample the next step evaluates.
    pub fn current_sample_index(&self) -> usize {
        self.current_sample_index
    }

    pub fn max_epochs(&self) -> usize {
        self.max_epochs
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn animation_speed(&self) -> f64 {
        self.animation_speed
    }

    /// One entry per completed epoch, oldest first.
    pub fn history(&self) -> &[EpochSummary] {
        &self.history
    }
}
