//! A [`TerminationCondition`] is polled by the search engine at every node and at every round of
//! propagation. It indicates when the search should give up, even though it has not concluded
//! yet; the most common example is [`TimeBudget`].
//!
//! Termination is cooperative: the engine never stops halfway through a domain update, so an
//! interrupted search always reports a consistent incumbent or no schedule at all.

mod cancellation;
mod combinator;
mod indefinite;
mod node_budget;
mod time_budget;

pub use cancellation::Cancellation;
pub use combinator::Combinator;
pub use indefinite::Indefinite;
pub use node_budget::NodeBudget;
pub use time_budget::TimeBudget;

/// Determines when the search engine should stop looking for (better) schedules.
pub trait TerminationCondition {
    /// Returns `true` when the search should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called every time the engine opens a search node.
    fn node_has_been_explored(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn node_has_been_explored(&mut self) {
        if let Some(t) = self {
            t.node_has_been_explored()
        }
    }
}

impl<T: TerminationCondition + ?Sized> TerminationCondition for &mut T {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }

    fn node_has_been_explored(&mut self) {
        (**self).node_has_been_explored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_condition_never_stops() {
        let mut condition: Option<NodeBudget> = None;
        condition.node_has_been_explored();

        assert!(!condition.should_stop());
    }

    #[test]
    fn present_condition_is_forwarded() {
        let mut condition = Some(NodeBudget::new(1));
        assert!(!condition.should_stop());

        condition.node_has_been_explored();
        assert!(condition.should_stop());
    }
}
