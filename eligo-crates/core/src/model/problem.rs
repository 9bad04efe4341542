use itertools::Itertools;

use super::InvalidInputError;
use super::JobId;
use super::MachineId;
use crate::containers::KeyedVec;

/// A job: a non-preemptive processing duration and the machines it may run on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    duration: i64,
    /// Sorted in ascending order and free of duplicates.
    eligible_machines: Vec<MachineId>,
}

impl Job {
    pub fn duration(&self) -> i64 {
        self.duration
    }

    pub fn eligible_machines(&self) -> &[MachineId] {
        &self.eligible_machines
    }

    pub fn is_eligible_for(&self, machine: MachineId) -> bool {
        self.eligible_machines.binary_search(&machine).is_ok()
    }
}

/// An instance of parallel-machine makespan minimisation with eligibility restrictions.
///
/// # Example
/// ```rust
/// # use eligo_core::model::Problem;
/// let problem = Problem::new(2, [(5, vec![0]), (3, vec![1])]).expect("valid input");
///
/// assert_eq!(problem.num_jobs(), 2);
/// assert_eq!(problem.total_duration(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct Problem {
    num_machines: usize,
    jobs: KeyedVec<JobId, Job>,
    total_duration: i64,
}

impl Problem {
    /// Creates a problem from a machine count and a list of `(duration, eligible machines)` pairs;
    /// the position of a pair in the list becomes the [`JobId`] of that job.
    ///
    /// Duplicate machines in an eligible list are collapsed.
    pub fn new<Jobs, Machines>(
        num_machines: usize,
        jobs: Jobs,
    ) -> Result<Problem, InvalidInputError>
    where
        Jobs: IntoIterator<Item = (i64, Machines)>,
        Machines: IntoIterator<Item = usize>,
    {
        if num_machines == 0 {
            return Err(InvalidInputError::NoMachines);
        }

        let mut total_duration: i64 = 0;
        let mut validated = KeyedVec::default();

        for (job, (duration, machines)) in jobs.into_iter().enumerate() {
            if duration <= 0 {
                return Err(InvalidInputError::NonPositiveDuration { job, duration });
            }

            let eligible_machines = machines
                .into_iter()
                .map(|machine| {
                    if machine >= num_machines {
                        Err(InvalidInputError::MachineOutOfRange {
                            job,
                            machine,
                            num_machines,
                        })
                    } else {
                        Ok(MachineId::new(machine as u32))
                    }
                })
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .sorted()
                .dedup()
                .collect::<Vec<_>>();

            if eligible_machines.is_empty() {
                return Err(InvalidInputError::EmptyEligibleSet { job });
            }

            total_duration = total_duration
                .checked_add(duration)
                .ok_or(InvalidInputError::HorizonOverflow)?;

            let _ = validated.push(Job {
                duration,
                eligible_machines,
            });
        }

        Ok(Problem {
            num_machines,
            jobs: validated,
            total_duration,
        })
    }

    /// Creates a problem in which every job may run on every machine.
    pub fn unrestricted(
        num_machines: usize,
        durations: impl IntoIterator<Item = i64>,
    ) -> Result<Problem, InvalidInputError> {
        Problem::new(
            num_machines,
            durations
                .into_iter()
                .map(|duration| (duration, 0..num_machines)),
        )
    }

    pub fn num_machines(&self) -> usize {
        self.num_machines
    }

    pub fn num_jobs(&self) -> usize {
        self.jobs.len()
    }

    /// The sum of all durations; also the scheduling horizon.
    pub fn total_duration(&self) -> i64 {
        self.total_duration
    }

    pub fn job(&self, job: JobId) -> &Job {
        &self.jobs[job]
    }

    pub fn duration(&self, job: JobId) -> i64 {
        self.jobs[job].duration
    }

    /// The jobs in ascending identifier order.
    pub fn jobs(&self) -> impl Iterator<Item = (JobId, &Job)> + '_ {
        self.jobs.enumerate()
    }

    pub fn job_ids(&self) -> impl Iterator<Item = JobId> {
        self.jobs.keys()
    }

    pub fn machines(&self) -> impl Iterator<Item = MachineId> {
        (0..self.num_machines as u32).map(MachineId::new)
    }
}
