use std::ops::ControlFlow;

use crate::results::Schedule;

/// Called with every schedule which improves on the best one found so far.
///
/// Returning [`ControlFlow::Break`] stops the search; the last schedule is then reported as not
/// proven optimal.
pub trait SolutionCallback {
    fn on_solution_callback(&mut self, schedule: &Schedule) -> ControlFlow<()>;
}

impl<T> SolutionCallback for T
where
    T: FnMut(&Schedule) -> ControlFlow<()>,
{
    fn on_solution_callback(&mut self, schedule: &Schedule) -> ControlFlow<()> {
        (self)(schedule)
    }
}
