use serde::{Serialize, Deserialize};

/// Lifecycle of a training run.
///
/// `Ready -> Training <-> Paused -> {Converged | MaxEpochsReached}`, and any
/// state returns to `Ready` on reset. Terminal states are only entered at an
/// epoch boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ready,
    Training,
    Paused,
    Converged,
    MaxEpochsReached,
}

impl Status {
    /// `true` for `Converged` and `MaxEpochsReached`; no step runs until reset.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Converged | Status::MaxEpochsReached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_converged_and_exhausted_are_terminal() {
        assert!(Status::Converged.is_terminal());
        assert!(Status::MaxEpochsReached.is_terminal());
        for s in [Status::Ready, Status::Training, Status::Paused] {
            assert!(!s.is_terminal());
        }
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Status::MaxEpochsReached).unwrap();
        assert_eq!(json, "\"max_epochs_reached\"");
    }
}
