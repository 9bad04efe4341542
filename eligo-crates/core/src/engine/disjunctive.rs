use crate::containers::KeyedVec;
use crate::model::JobId;
use crate::model::MachineId;
use crate::model::Problem;

/// For every machine, the jobs which are eligible for it, and for every job, the machines it is
/// eligible for; both in ascending identifier order.
///
/// The index is derived once from the [`Problem`] and never changes during search. Which of these
/// candidates are still possible at a node is answered by the domains.
#[derive(Clone, Debug)]
pub(crate) struct DisjunctiveIndex {
    machine_candidates: KeyedVec<MachineId, Vec<JobId>>,
    job_candidates: KeyedVec<JobId, Vec<MachineId>>,
}

impl DisjunctiveIndex {
    pub(crate) fn new(problem: &Problem) -> Self {
        let mut machine_candidates: KeyedVec<MachineId, Vec<JobId>> =
            problem.machines().map(|_| Vec::new()).collect();

        let job_candidates = problem
            .jobs()
            .map(|(job_id, job)| {
                for &machine in job.eligible_machines() {
                    machine_candidates[machine].push(job_id);
                }
                job.eligible_machines().to_vec()
            })
            .collect();

        DisjunctiveIndex {
            machine_candidates,
            job_candidates,
        }
    }

    pub(crate) fn machines(&self) -> impl Iterator<Item = MachineId> {
        self.machine_candidates.keys()
    }

    /// The jobs which may be assigned to `machine`.
    pub(crate) fn candidate_jobs(&self, machine: MachineId) -> &[JobId] {
        &self.machine_candidates[machine]
    }

    /// The machines `job` may be assigned to.
    pub(crate) fn candidate_machines(&self, job: JobId) -> &[MachineId] {
        &self.job_candidates[job]
    }

    /// Every pair of distinct jobs sharing `machine`, with the smaller identifier first.
    pub(crate) fn pairs_on(&self, machine: MachineId) -> impl Iterator<Item = (JobId, JobId)> + '_ {
        let jobs = self.candidate_jobs(machine);
        jobs.iter().enumerate().flat_map(move |(position, &first)| {
            jobs[position + 1..].iter().map(move |&second| (first, second))
        })
    }
}
