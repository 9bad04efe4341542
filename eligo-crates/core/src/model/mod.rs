//! The problem model: jobs with a fixed processing duration and the set of machines they are
//! allowed to run on.
//!
//! A [`Problem`] is validated once on construction and is read-only afterwards; every solve
//! invocation works on its own domains derived from it.
mod error;
mod ids;
mod problem;

pub use error::InvalidInputError;
pub use ids::JobId;
pub use ids::MachineId;
pub use problem::Job;
pub use problem::Problem;
