use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use super::TerminationCondition;

/// A [`TerminationCondition`] driven by a flag which may be raised from another thread.
///
/// Clones share the same flag, so a clone can be handed to whoever decides to cancel the search.
#[derive(Clone, Debug, Default)]
pub struct Cancellation {
    cancelled: Arc<AtomicBool>,
}

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing flag, e.g. one registered with an OS signal handler.
    pub fn from_flag(cancelled: Arc<AtomicBool>) -> Self {
        Self { cancelled }
    }

    /// Requests that every search polling this condition stops.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl TerminationCondition for Cancellation {
    fn should_stop(&mut self) -> bool {
        self.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelling_a_clone_stops_the_original() {
        let mut cancellation = Cancellation::new();
        let handle = cancellation.clone();

        assert!(!cancellation.should_stop());
        handle.cancel();
        assert!(cancellation.should_stop());
    }
}
