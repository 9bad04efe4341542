use log::trace;

use super::tie_breaking::InOrderTieBreaker;
use crate::engine::DisjunctiveIndex;
use crate::engine::Domains;
use crate::model::JobId;
use crate::model::MachineId;

/// Selects the job with the fewest remaining machines among the jobs which are not fixed yet.
///
/// Ties go to the smallest job identifier.
pub(crate) fn select_job(domains: &Domains, jobs: impl Iterator<Item = JobId>) -> Option<JobId> {
    let mut tie_breaker = InOrderTieBreaker::default();

    jobs.filter(|&job| domains.fixed_machine(job).is_none())
        .for_each(|job| tie_breaker.consider(job, domains.machines(job).size()));

    tie_breaker.select()
}

/// The machines to create children for when branching on `job`, in ascending order.
///
/// With `symmetry_breaking`, a machine is left out when an earlier machine in the list is
/// interchangeable with it; the subtree of the earlier machine contains a mirror image of every
/// schedule in the subtree of the later one.
pub(crate) fn branch_machines(
    job: JobId,
    index: &DisjunctiveIndex,
    domains: &Domains,
    symmetry_breaking: bool,
) -> Vec<MachineId> {
    let candidates = domains.machines(job).iter();
    if !symmetry_breaking {
        return candidates.collect();
    }

    let mut representatives: Vec<MachineId> = Vec::new();
    for machine in candidates {
        if let Some(&representative) = representatives
            .iter()
            .find(|&&representative| interchangeable(representative, machine, index, domains))
        {
            trace!("{machine:?} is interchangeable with {representative:?} for {job:?}");
            continue;
        }
        representatives.push(machine);
    }

    representatives
}

/// Two machines are interchangeable when neither has a job fixed to it and every job can either
/// use both of them or neither.
fn interchangeable(
    first: MachineId,
    second: MachineId,
    index: &DisjunctiveIndex,
    domains: &Domains,
) -> bool {
    let is_unused = |machine: MachineId| {
        index
            .candidate_jobs(machine)
            .iter()
            .all(|&job| !domains.is_fixed_to(job, machine))
    };

    let same_membership = |machine: MachineId| {
        index.candidate_jobs(machine).iter().all(|&job| {
            domains.machines(job).contains(first) == domains.machines(job).contains(second)
        })
    };

    is_unused(first) && is_unused(second) && same_membership(first) && same_membership(second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Problem;

    fn setup(
        num_machines: usize,
        jobs: Vec<(i64, Vec<usize>)>,
    ) -> (Problem, DisjunctiveIndex, Domains) {
        let problem = Problem::new(num_machines, jobs).expect("valid input");
        let index = DisjunctiveIndex::new(&problem);
        let domains = Domains::build(&problem).expect("non-empty domains");
        (problem, index, domains)
    }

    #[test]
    fn most_constrained_job_is_selected() {
        let (problem, _, domains) = setup(
            3,
            vec![(1, vec![0, 1, 2]), (1, vec![1, 2]), (1, vec![0, 2])],
        );

        assert_eq!(select_job(&domains, problem.job_ids()), Some(JobId::new(1)));
    }

    #[test]
    fn fixed_jobs_are_not_selected() {
        let (problem, _, mut domains) = setup(2, vec![(1, vec![0]), (1, vec![0, 1])]);
        assert_eq!(select_job(&domains, problem.job_ids()), Some(JobId::new(1)));

        let _ = domains
            .fix_machine(JobId::new(1), MachineId::new(1))
            .expect("eligible");
        assert_eq!(select_job(&domains, problem.job_ids()), None);
    }

    #[test]
    fn identical_empty_machines_are_branched_on_once() {
        let (_, index, domains) = setup(3, vec![(2, vec![0, 1, 2]), (1, vec![0, 1, 2])]);

        let machines = branch_machines(JobId::new(0), &index, &domains, true);
        assert_eq!(machines, vec![MachineId::new(0)]);

        let machines = branch_machines(JobId::new(0), &index, &domains, false);
        assert_eq!(machines.len(), 3);
    }

    #[test]
    fn machines_differing_in_eligibility_are_kept() {
        let (_, index, domains) = setup(3, vec![(2, vec![0, 1, 2]), (1, vec![0, 1])]);

        let machines = branch_machines(JobId::new(0), &index, &domains, true);
        assert_eq!(machines, vec![MachineId::new(0), MachineId::new(2)]);
    }

    #[test]
    fn machines_holding_jobs_are_kept() {
        let (_, index, mut domains) = setup(2, vec![(2, vec![0, 1]), (1, vec![0, 1])]);
        let _ = domains
            .fix_machine(JobId::new(1), MachineId::new(0))
            .expect("eligible");

        let machines = branch_machines(JobId::new(0), &index, &domains, true);
        assert_eq!(machines, vec![MachineId::new(0), MachineId::new(1)]);
    }
}
