use std::sync::mpsc;

use crate::train::snapshot::RunSnapshot;

/// Hook invoked with the run's state after every engine mutation.
///
/// Presentation extras (highlighting the current row, redrawing the
/// boundary, progress text) hang off this rather than the engine itself.
pub trait RunObserver {
    fn notify(&self, snapshot: &RunSnapshot);
}

impl<F> RunObserver for F
where
    F: Fn(&RunSnapshot),
{
    fn notify(&self, snapshot: &RunSnapshot) {
        self(snapshot)
    }
}

/// Forwards snapshots over a channel. A dropped receiver is ignored: the
/// engine keeps running and the remaining observers still fire.
impl RunObserver for mpsc::Sender<RunSnapshot> {
    fn notify(&self, snapshot: &RunSnapshot) {
        if self.send(snapshot.clone()).is_err() {
            tracing::trace!("snapshot receiver dropped");
        }
    }
}
