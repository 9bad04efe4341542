use std::fmt::Display;

use thiserror::Error;

use crate::model::JobId;
use crate::model::MachineId;
use crate::model::Problem;

/// The machine and time slot of one job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScheduledJob {
    pub job: JobId,
    pub machine: MachineId,
    pub start: i64,
    /// Equal to `start` plus the duration of the job.
    pub end: i64,
}

/// A complete schedule: every job with its machine, start and end, and the resulting makespan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    makespan: i64,
    /// Ordered by job identifier.
    jobs: Vec<ScheduledJob>,
}

impl Schedule {
    /// Creates a schedule whose makespan is the latest end among `jobs`.
    pub fn new(mut jobs: Vec<ScheduledJob>) -> Self {
        jobs.sort_by_key(|scheduled| scheduled.job);
        let makespan = jobs.iter().map(|scheduled| scheduled.end).max().unwrap_or(0);

        Schedule { makespan, jobs }
    }

    pub(crate) fn from_parts(makespan: i64, jobs: Vec<ScheduledJob>) -> Self {
        Schedule { makespan, jobs }
    }

    pub fn makespan(&self) -> i64 {
        self.makespan
    }

    /// The scheduled jobs in ascending job identifier order.
    pub fn jobs(&self) -> &[ScheduledJob] {
        &self.jobs
    }

    pub fn job(&self, job: JobId) -> Option<&ScheduledJob> {
        self.jobs
            .binary_search_by_key(&job, |scheduled| scheduled.job)
            .ok()
            .map(|position| &self.jobs[position])
    }

    /// The jobs running on `machine`, in order of their start time.
    pub fn jobs_on(&self, machine: MachineId) -> Vec<ScheduledJob> {
        let mut on_machine = self
            .jobs
            .iter()
            .filter(|scheduled| scheduled.machine == machine)
            .copied()
            .collect::<Vec<_>>();
        on_machine.sort_by_key(|scheduled| (scheduled.start, scheduled.job));
        on_machine
    }

    /// Checks the schedule against `problem` without relying on the search: every job appears
    /// once, on an eligible machine, with `end == start + duration` and `start >= 0`; jobs on the
    /// same machine do not overlap; and the makespan equals the latest end.
    pub fn verify(&self, problem: &Problem) -> Result<(), ScheduleViolation> {
        if self.jobs.len() != problem.num_jobs() {
            return Err(ScheduleViolation::WrongJobCount {
                expected: problem.num_jobs(),
                actual: self.jobs.len(),
            });
        }

        for (expected, scheduled) in problem.job_ids().zip(&self.jobs) {
            if scheduled.job != expected {
                return Err(ScheduleViolation::MissingJob { job: expected });
            }

            let job = problem.job(expected);
            if !job.is_eligible_for(scheduled.machine) {
                return Err(ScheduleViolation::NotEligible {
                    job: expected,
                    machine: scheduled.machine,
                });
            }
            if scheduled.start < 0 {
                return Err(ScheduleViolation::NegativeStart {
                    job: expected,
                    start: scheduled.start,
                });
            }
            if scheduled.end - scheduled.start != job.duration() {
                return Err(ScheduleViolation::DurationMismatch {
                    job: expected,
                    start: scheduled.start,
                    end: scheduled.end,
                    duration: job.duration(),
                });
            }
        }

        for machine in problem.machines() {
            let on_machine = self.jobs_on(machine);
            for pair in on_machine.windows(2) {
                if pair[0].end > pair[1].start {
                    return Err(ScheduleViolation::Overlap {
                        machine,
                        first: pair[0].job,
                        second: pair[1].job,
                    });
                }
            }
        }

        let actual = self.jobs.iter().map(|scheduled| scheduled.end).max().unwrap_or(0);
        if actual != self.makespan {
            return Err(ScheduleViolation::MakespanMismatch {
                reported: self.makespan,
                actual,
            });
        }

        Ok(())
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for scheduled in &self.jobs {
            writeln!(
                f,
                "Job {} | Machine {} | Start {} | End {}",
                scheduled.job, scheduled.machine, scheduled.start, scheduled.end
            )?;
        }
        write!(f, "Total makespan: {}", self.makespan)
    }
}

/// A reason why a [`Schedule`] is not a valid solution of a [`Problem`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleViolation {
    #[error("The schedule contains {actual} jobs, but the problem has {expected}.")]
    WrongJobCount { expected: usize, actual: usize },
    #[error("Job {job} is missing from the schedule.")]
    MissingJob { job: JobId },
    #[error("Job {job} is assigned to machine {machine}, which it is not allowed on.")]
    NotEligible { job: JobId, machine: MachineId },
    #[error("Job {job} starts at negative time {start}.")]
    NegativeStart { job: JobId, start: i64 },
    #[error("Job {job} runs from {start} to {end}, but its duration is {duration}.")]
    DurationMismatch {
        job: JobId,
        start: i64,
        end: i64,
        duration: i64,
    },
    #[error("Jobs {first} and {second} overlap on machine {machine}.")]
    Overlap {
        machine: MachineId,
        first: JobId,
        second: JobId,
    },
    #[error("The reported makespan is {reported}, but the last job ends at {actual}.")]
    MakespanMismatch { reported: i64, actual: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(job: u32, machine: u32, start: i64, end: i64) -> ScheduledJob {
        ScheduledJob {
            job: JobId::new(job),
            machine: MachineId::new(machine),
            start,
            end,
        }
    }

    fn problem() -> Problem {
        Problem::new(2, [(3, vec![0, 1]), (2, vec![1]), (2, vec![0, 1])]).expect("valid input")
    }

    #[test]
    fn valid_schedule_passes_verification() {
        let schedule = Schedule::new(vec![
            scheduled(2, 1, 2, 4),
            scheduled(0, 0, 0, 3),
            scheduled(1, 1, 0, 2),
        ]);

        assert_eq!(schedule.makespan(), 4);
        assert_eq!(schedule.jobs()[0].job, JobId::new(0));
        assert_eq!(schedule.verify(&problem()), Ok(()));
    }

    #[test]
    fn overlapping_jobs_are_reported() {
        let schedule = Schedule::new(vec![
            scheduled(0, 0, 0, 3),
            scheduled(1, 1, 0, 2),
            scheduled(2, 1, 1, 3),
        ]);

        assert_eq!(
            schedule.verify(&problem()),
            Err(ScheduleViolation::Overlap {
                machine: MachineId::new(1),
                first: JobId::new(1),
                second: JobId::new(2),
            })
        );
    }

    #[test]
    fn ineligible_machine_is_reported() {
        let schedule = Schedule::new(vec![
            scheduled(0, 0, 0, 3),
            scheduled(1, 0, 3, 5),
            scheduled(2, 1, 0, 2),
        ]);

        assert_eq!(
            schedule.verify(&problem()),
            Err(ScheduleViolation::NotEligible {
                job: JobId::new(1),
                machine: MachineId::new(0),
            })
        );
    }

    #[test]
    fn wrong_duration_is_reported() {
        let schedule = Schedule::new(vec![
            scheduled(0, 0, 0, 2),
            scheduled(1, 1, 0, 2),
            scheduled(2, 1, 2, 4),
        ]);

        assert!(matches!(
            schedule.verify(&problem()),
            Err(ScheduleViolation::DurationMismatch { duration: 3, .. })
        ));
    }

    #[test]
    fn inconsistent_makespan_is_reported() {
        let schedule = Schedule::from_parts(
            3,
            vec![
                scheduled(0, 0, 0, 3),
                scheduled(1, 1, 0, 2),
                scheduled(2, 1, 2, 4),
            ],
        );

        assert_eq!(
            schedule.verify(&problem()),
            Err(ScheduleViolation::MakespanMismatch {
                reported: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn display_lists_every_job_and_the_makespan() {
        let schedule = Schedule::new(vec![scheduled(0, 1, 0, 3), scheduled(1, 0, 0, 2)]);

        assert_eq!(
            schedule.to_string(),
            "Job 0 | Machine 1 | Start 0 | End 3\nJob 1 | Machine 0 | Start 0 | End 2\nTotal makespan: 3"
        );
    }
}
