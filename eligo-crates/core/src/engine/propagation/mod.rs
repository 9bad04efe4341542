//! Constraint propagation over the job domains.
//!
//! The set of constraint kinds is small and closed, so constraints are a tagged [`Constraint`]
//! list which a single [`Propagator`] evaluates until no domain changes any more.
mod constraint;
mod inconsistency;
mod propagator;
mod task_interval;

pub(crate) use constraint::fixed_tasks;
pub(crate) use constraint::Constraint;
pub(crate) use inconsistency::Inconsistency;
pub(crate) use propagator::PropagationOutcome;
pub(crate) use propagator::Propagator;
pub(crate) use task_interval::Task;
