use thiserror::Error;

use crate::model::InvalidInputError;
use crate::model::JobId;

/// Errors which prevent a solve invocation from producing a [`ScheduleResult`].
///
/// Proven infeasibility and timeouts are results, not errors.
///
/// [`ScheduleResult`]: crate::results::ScheduleResult
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    /// A job was left without any machine while building its domains.
    #[error("Job {job} has no machine left to run on.")]
    EmptyDomain { job: JobId },
}
