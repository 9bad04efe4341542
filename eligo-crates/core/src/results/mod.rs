//! The outcome of a solve invocation and the schedules it reports.
mod extraction;
mod schedule;
mod schedule_result;

pub(crate) use extraction::extract_schedule;
pub use schedule::Schedule;
pub use schedule::ScheduleViolation;
pub use schedule::ScheduledJob;
pub use schedule_result::ScheduleResult;
pub use schedule_result::SolveStatus;
