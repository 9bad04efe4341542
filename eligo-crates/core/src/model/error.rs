use thiserror::Error;

#[cfg(doc)]
use crate::model::Problem;

/// Errors raised when constructing a [`Problem`] from malformed input.
///
/// These are rejected before any solving is attempted; the caller is expected to collect the
/// input again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputError {
    /// The problem has no machines to schedule on.
    #[error("The number of machines must be positive.")]
    NoMachines,
    /// A job has a duration which is zero or negative.
    #[error("Job {job} has a non-positive duration ({duration}).")]
    NonPositiveDuration { job: usize, duration: i64 },
    /// A job does not list any machine it can run on.
    #[error("Job {job} must have at least one allowed machine.")]
    EmptyEligibleSet { job: usize },
    /// A job lists a machine which does not exist.
    #[error(
        "Job {job} is allowed on machine {machine}, but only machines 0..{num_machines} exist."
    )]
    MachineOutOfRange {
        job: usize,
        machine: usize,
        num_machines: usize,
    },
    /// The sum of all durations (the scheduling horizon) does not fit in the time representation.
    #[error("The total duration of all jobs is too large to be represented.")]
    HorizonOverflow,
}
