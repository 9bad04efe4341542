use super::Schedule;
use super::ScheduledJob;
use crate::containers::KeyedVec;
use crate::engine::Domains;
use crate::model::JobId;
use crate::model::MachineId;
use crate::model::Problem;

/// Reads the schedule of a node in which every job is fixed to a machine.
///
/// The jobs of a machine are sequenced by their propagated earliest start (ties by identifier)
/// and packed from time 0, so the makespan is the largest machine load. Returns `None` if some job
/// still has more than one machine.
pub(crate) fn extract_schedule(problem: &Problem, domains: &Domains) -> Option<Schedule> {
    let mut per_machine: KeyedVec<MachineId, Vec<JobId>> =
        problem.machines().map(|_| Vec::new()).collect();

    for job in problem.job_ids() {
        per_machine[domains.fixed_machine(job)?].push(job);
    }

    let mut slots: KeyedVec<JobId, Option<ScheduledJob>> =
        problem.job_ids().map(|_| None).collect();
    let mut makespan = 0;

    for (machine, jobs) in per_machine.enumerate() {
        let mut sequence = jobs.clone();
        sequence.sort_by_key(|&job| (domains.est(job), job));

        let mut time = 0;
        for job in sequence {
            let end = time + problem.duration(job);
            slots[job] = Some(ScheduledJob {
                job,
                machine,
                start: time,
                end,
            });
            time = end;
        }
        makespan = makespan.max(time);
    }

    let jobs = slots.iter().copied().collect::<Option<Vec<_>>>()?;
    Some(Schedule::from_parts(makespan, jobs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machines_are_packed_in_order_of_earliest_start() {
        let problem =
            Problem::new(2, [(3, vec![0, 1]), (2, vec![0]), (4, vec![1])]).expect("valid");
        let mut domains = Domains::build(&problem).expect("non-empty domains");
        let _ = domains
            .fix_machine(JobId::new(0), MachineId::new(0))
            .expect("eligible");
        let _ = domains
            .set_start_lower_bound(JobId::new(0), 2)
            .expect("consistent");

        let schedule = extract_schedule(&problem, &domains).expect("all machines fixed");

        assert_eq!(schedule.makespan(), 5);
        assert_eq!(schedule.job(JobId::new(1)).map(|s| s.start), Some(0));
        assert_eq!(schedule.job(JobId::new(0)).map(|s| s.start), Some(2));
        assert_eq!(schedule.job(JobId::new(2)).map(|s| s.end), Some(4));
        assert_eq!(schedule.verify(&problem), Ok(()));
    }

    #[test]
    fn unfixed_jobs_have_no_schedule() {
        let problem = Problem::unrestricted(2, [1, 1]).expect("valid");
        let domains = Domains::build(&problem).expect("non-empty domains");

        assert!(extract_schedule(&problem, &domains).is_none());
    }
}
