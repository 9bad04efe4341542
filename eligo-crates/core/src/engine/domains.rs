use fixedbitset::FixedBitSet;
use log::debug;

use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::eligo_assert_moderate;
use crate::eligo_assert_simple;
use crate::engine::propagation::Inconsistency;
use crate::model::JobId;
use crate::model::MachineId;
use crate::model::Problem;
use crate::SolveError;

/// A closed interval `[lower_bound, upper_bound]` of time points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct IntervalDomain {
    pub(crate) lower_bound: i64,
    pub(crate) upper_bound: i64,
}

impl IntervalDomain {
    pub(crate) fn new(lower_bound: i64, upper_bound: i64) -> Self {
        IntervalDomain {
            lower_bound,
            upper_bound,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lower_bound > self.upper_bound
    }
}

/// The machines a job can still be assigned to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MachineDomain {
    machines: FixedBitSet,
    size: usize,
}

impl MachineDomain {
    fn new(num_machines: usize, eligible: &[MachineId]) -> Self {
        let mut machines = FixedBitSet::with_capacity(num_machines);
        for machine in eligible {
            machines.insert(machine.index());
        }
        let size = machines.count_ones(..);

        MachineDomain { machines, size }
    }

    pub(crate) fn contains(&self, machine: MachineId) -> bool {
        self.machines.contains(machine.index())
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The machine of a singleton domain.
    pub(crate) fn fixed_value(&self) -> Option<MachineId> {
        if self.size == 1 {
            self.machines.ones().next().map(MachineId::create_from_index)
        } else {
            None
        }
    }

    /// The machines in ascending identifier order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = MachineId> + '_ {
        self.machines.ones().map(MachineId::create_from_index)
    }

    fn remove(&mut self, machine: MachineId) -> bool {
        let removed = self.machines.contains(machine.index());
        if removed {
            self.machines.set(machine.index(), false);
            self.size -= 1;
        }
        removed
    }

    fn restore(&mut self, machine: MachineId) {
        eligo_assert_simple!(!self.machines.contains(machine.index()));
        self.machines.insert(machine.index());
        self.size += 1;
    }
}

/// A record of the value a bound had before it was tightened.
#[derive(Clone, Copy, Debug)]
enum DomainChange {
    StartLowerBound { job: JobId, previous: i64 },
    StartUpperBound { job: JobId, previous: i64 },
    EndLowerBound { job: JobId, previous: i64 },
    EndUpperBound { job: JobId, previous: i64 },
    MachineRemoved { job: JobId, machine: MachineId },
}

/// The start, end and machine domains of every job during one solve invocation.
///
/// Domains only shrink through the setters below; every change is recorded on a [`Trail`] so that
/// [`Domains::synchronise`] can restore the exact domains of an earlier checkpoint.
#[derive(Clone, Debug)]
pub(crate) struct Domains {
    start: KeyedVec<JobId, IntervalDomain>,
    end: KeyedVec<JobId, IntervalDomain>,
    machines: KeyedVec<JobId, MachineDomain>,
    trail: Trail<DomainChange>,
}

impl Domains {
    /// Creates the initial domains: the horizon is the sum of all durations, a job with duration
    /// `d` starts in `[0, horizon - d]`, ends in `[d, horizon]` and may use any eligible machine.
    pub(crate) fn build(problem: &Problem) -> Result<Domains, SolveError> {
        let horizon = problem.total_duration();

        let mut start = KeyedVec::default();
        let mut end = KeyedVec::default();
        let mut machines = KeyedVec::default();

        for (job_id, job) in problem.jobs() {
            let machine_domain =
                MachineDomain::new(problem.num_machines(), job.eligible_machines());
            if machine_domain.is_empty() {
                return Err(SolveError::EmptyDomain { job: job_id });
            }

            let _ = start.push(IntervalDomain::new(0, horizon - job.duration()));
            let _ = end.push(IntervalDomain::new(job.duration(), horizon));
            let _ = machines.push(machine_domain);
        }

        debug!(
            "Built domains for {} jobs on {} machines with horizon {horizon}",
            problem.num_jobs(),
            problem.num_machines()
        );

        Ok(Domains {
            start,
            end,
            machines,
            trail: Trail::default(),
        })
    }

    pub(crate) fn machines(&self, job: JobId) -> &MachineDomain {
        &self.machines[job]
    }

    /// Earliest start time.
    pub(crate) fn est(&self, job: JobId) -> i64 {
        self.start[job].lower_bound
    }

    /// Latest start time.
    pub(crate) fn lst(&self, job: JobId) -> i64 {
        self.start[job].upper_bound
    }

    /// Earliest completion time.
    pub(crate) fn ect(&self, job: JobId) -> i64 {
        self.end[job].lower_bound
    }

    /// Latest completion time.
    pub(crate) fn lct(&self, job: JobId) -> i64 {
        self.end[job].upper_bound
    }

    pub(crate) fn fixed_machine(&self, job: JobId) -> Option<MachineId> {
        self.machines[job].fixed_value()
    }

    pub(crate) fn is_fixed_to(&self, job: JobId, machine: MachineId) -> bool {
        self.fixed_machine(job) == Some(machine)
    }

    pub(crate) fn all_machines_fixed(&self) -> bool {
        self.machines.iter().all(|domain| domain.size() == 1)
    }

    pub(crate) fn set_start_lower_bound(
        &mut self,
        job: JobId,
        value: i64,
    ) -> Result<bool, Inconsistency> {
        let domain = &mut self.start[job];
        if value <= domain.lower_bound {
            return Ok(false);
        }

        self.trail.push(DomainChange::StartLowerBound {
            job,
            previous: domain.lower_bound,
        });
        domain.lower_bound = value;

        check_interval(job, domain)
    }

    pub(crate) fn set_start_upper_bound(
        &mut self,
        job: JobId,
        value: i64,
    ) -> Result<bool, Inconsistency> {
        let domain = &mut self.start[job];
        if value >= domain.upper_bound {
            return Ok(false);
        }

        self.trail.push(DomainChange::StartUpperBound {
            job,
            previous: domain.upper_bound,
        });
        domain.upper_bound = value;

        check_interval(job, domain)
    }

    pub(crate) fn set_end_lower_bound(
        &mut self,
        job: JobId,
        value: i64,
    ) -> Result<bool, Inconsistency> {
        let domain = &mut self.end[job];
        if value <= domain.lower_bound {
            return Ok(false);
        }

        self.trail.push(DomainChange::EndLowerBound {
            job,
            previous: domain.lower_bound,
        });
        domain.lower_bound = value;

        check_interval(job, domain)
    }

    pub(crate) fn set_end_upper_bound(
        &mut self,
        job: JobId,
        value: i64,
    ) -> Result<bool, Inconsistency> {
        let domain = &mut self.end[job];
        if value >= domain.upper_bound {
            return Ok(false);
        }

        self.trail.push(DomainChange::EndUpperBound {
            job,
            previous: domain.upper_bound,
        });
        domain.upper_bound = value;

        check_interval(job, domain)
    }

    /// Removes `machine` from the machine domain of `job`.
    pub(crate) fn remove_machine(
        &mut self,
        job: JobId,
        machine: MachineId,
    ) -> Result<bool, Inconsistency> {
        if !self.machines[job].remove(machine) {
            return Ok(false);
        }

        self.trail
            .push(DomainChange::MachineRemoved { job, machine });

        if self.machines[job].is_empty() {
            Err(Inconsistency::EmptyMachineDomain { job })
        } else {
            Ok(true)
        }
    }

    /// Restricts the machine domain of `job` to `machine` alone.
    pub(crate) fn fix_machine(
        &mut self,
        job: JobId,
        machine: MachineId,
    ) -> Result<bool, Inconsistency> {
        if !self.machines[job].contains(machine) {
            return Err(Inconsistency::EmptyMachineDomain { job });
        }

        let others = self.machines[job]
            .iter()
            .filter(|other| *other != machine)
            .collect::<Vec<_>>();

        let mut changed = false;
        for other in others {
            changed |= self.remove_machine(job, other)?;
        }

        Ok(changed)
    }

    pub(crate) fn new_checkpoint(&mut self) {
        self.trail.new_checkpoint();
    }

    pub(crate) fn checkpoint(&self) -> usize {
        self.trail.get_checkpoint()
    }

    /// Undoes every change made after checkpoint `checkpoint` was the current one.
    pub(crate) fn synchronise(&mut self, checkpoint: usize) {
        for change in self.trail.synchronise(checkpoint) {
            match change {
                DomainChange::StartLowerBound { job, previous } => {
                    eligo_assert_moderate!(previous <= self.start[job].lower_bound);
                    self.start[job].lower_bound = previous;
                }
                DomainChange::StartUpperBound { job, previous } => {
                    eligo_assert_moderate!(previous >= self.start[job].upper_bound);
                    self.start[job].upper_bound = previous;
                }
                DomainChange::EndLowerBound { job, previous } => {
                    eligo_assert_moderate!(previous <= self.end[job].lower_bound);
                    self.end[job].lower_bound = previous;
                }
                DomainChange::EndUpperBound { job, previous } => {
                    eligo_assert_moderate!(previous >= self.end[job].upper_bound);
                    self.end[job].upper_bound = previous;
                }
                DomainChange::MachineRemoved { job, machine } => {
                    self.machines[job].restore(machine);
                }
            }
        }
    }

    /// Compares the domains of two snapshots, ignoring their trails.
    pub(crate) fn same_domains_as(&self, other: &Domains) -> bool {
        self.start == other.start && self.end == other.end && self.machines == other.machines
    }
}

fn check_interval(job: JobId, domain: &IntervalDomain) -> Result<bool, Inconsistency> {
    if domain.is_empty() {
        Err(Inconsistency::EmptyTimeDomain { job })
    } else {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains(num_machines: usize, jobs: Vec<(i64, Vec<usize>)>) -> Domains {
        let problem = Problem::new(num_machines, jobs).expect("valid input");
        Domains::build(&problem).expect("non-empty domains")
    }

    /// Returns whether every domain of `narrowed` lies within the corresponding domain of `wider`.
    fn is_subset_of(narrowed: &Domains, wider: &Domains) -> bool {
        let within = |inner: IntervalDomain, outer: IntervalDomain| {
            outer.lower_bound <= inner.lower_bound && inner.upper_bound <= outer.upper_bound
        };

        narrowed.start.keys().all(|job| {
            within(narrowed.start[job], wider.start[job])
                && within(narrowed.end[job], wider.end[job])
                && narrowed.machines[job]
                    .iter()
                    .all(|machine| wider.machines[job].contains(machine))
        })
    }

    #[test]
    fn initial_domains_are_derived_from_the_horizon() {
        let domains = domains(2, vec![(3, vec![0, 1]), (4, vec![1])]);
        let first = JobId::new(0);
        let second = JobId::new(1);

        assert_eq!((domains.est(first), domains.lst(first)), (0, 4));
        assert_eq!((domains.ect(first), domains.lct(first)), (3, 7));
        assert_eq!((domains.est(second), domains.lst(second)), (0, 3));
        assert_eq!((domains.ect(second), domains.lct(second)), (4, 7));

        assert_eq!(domains.machines(first).size(), 2);
        assert_eq!(domains.fixed_machine(second), Some(MachineId::new(1)));
    }

    #[test]
    fn weaker_bounds_are_ignored() {
        let mut domains = domains(1, vec![(2, vec![0]), (2, vec![0])]);
        let job = JobId::new(0);

        assert_eq!(domains.set_start_lower_bound(job, 0), Ok(false));
        assert_eq!(domains.set_end_upper_bound(job, 10), Ok(false));
        assert_eq!(domains.set_start_lower_bound(job, 1), Ok(true));
        assert_eq!(domains.est(job), 1);
    }

    #[test]
    fn crossing_bounds_are_inconsistent() {
        let mut domains = domains(1, vec![(2, vec![0]), (2, vec![0])]);
        let job = JobId::new(0);

        assert_eq!(
            domains.set_start_lower_bound(job, 3),
            Err(Inconsistency::EmptyTimeDomain { job })
        );
    }

    #[test]
    fn removing_the_last_machine_is_inconsistent() {
        let mut domains = domains(2, vec![(1, vec![0, 1])]);
        let job = JobId::new(0);

        assert_eq!(domains.remove_machine(job, MachineId::new(1)), Ok(true));
        assert_eq!(domains.remove_machine(job, MachineId::new(1)), Ok(false));
        assert_eq!(
            domains.remove_machine(job, MachineId::new(0)),
            Err(Inconsistency::EmptyMachineDomain { job })
        );
    }

    #[test]
    fn fixing_a_machine_removes_the_others() {
        let mut domains = domains(3, vec![(1, vec![0, 1, 2])]);
        let job = JobId::new(0);

        assert_eq!(domains.fix_machine(job, MachineId::new(1)), Ok(true));
        assert_eq!(domains.fixed_machine(job), Some(MachineId::new(1)));
        assert!(domains.all_machines_fixed());
    }

    #[test]
    fn synchronise_restores_the_checkpointed_domains() {
        let mut domains = domains(2, vec![(2, vec![0, 1]), (3, vec![0, 1])]);
        let job = JobId::new(1);
        let root = domains.clone();

        let level = domains.checkpoint();
        domains.new_checkpoint();
        let _ = domains.fix_machine(job, MachineId::new(0));
        let _ = domains.set_start_lower_bound(job, 1);
        let _ = domains.set_end_upper_bound(job, 4);

        assert!(is_subset_of(&domains, &root));
        assert!(!domains.same_domains_as(&root));

        domains.synchronise(level);
        assert!(domains.same_domains_as(&root));
    }
}
