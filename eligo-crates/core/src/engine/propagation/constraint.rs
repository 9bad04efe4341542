use super::task_interval::find_task_intervals;
use super::task_interval::is_overloaded;
use super::Inconsistency;
use super::Task;
use crate::engine::DisjunctiveIndex;
use crate::engine::Domains;
use crate::model::JobId;
use crate::model::MachineId;
use crate::model::Problem;

/// The constraint kinds of the model.
///
/// Every constraint reports whether it changed a domain, or the [`Inconsistency`] it ran into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Constraint {
    /// `end == start + duration`.
    DurationLink { job: JobId, duration: i64 },
    /// Two jobs sharing an eligible machine do not overlap if both end up on it.
    DisjunctivePair {
        machine: MachineId,
        first: JobId,
        second: JobId,
    },
    /// Removes the machines a job no longer fits on.
    DomainSingleton { job: JobId },
    /// Overload checking and edge finding over the jobs fixed to a machine.
    MachineLoad { machine: MachineId },
}

impl Constraint {
    pub(crate) fn propagate(
        &self,
        problem: &Problem,
        index: &DisjunctiveIndex,
        domains: &mut Domains,
    ) -> Result<bool, Inconsistency> {
        match *self {
            Constraint::DurationLink { job, duration } => {
                propagate_duration(job, duration, domains)
            }
            Constraint::DisjunctivePair {
                machine,
                first,
                second,
            } => propagate_pair(machine, first, second, domains),
            Constraint::DomainSingleton { job } => {
                propagate_machine_domain(job, problem, index, domains)
            }
            Constraint::MachineLoad { machine } => {
                propagate_machine_load(machine, problem, index, domains)
            }
        }
    }
}

fn propagate_duration(
    job: JobId,
    duration: i64,
    domains: &mut Domains,
) -> Result<bool, Inconsistency> {
    let mut changed = false;

    changed |= domains.set_end_lower_bound(job, domains.est(job) + duration)?;
    changed |= domains.set_start_lower_bound(job, domains.ect(job) - duration)?;
    changed |= domains.set_start_upper_bound(job, domains.lct(job) - duration)?;
    changed |= domains.set_end_upper_bound(job, domains.lst(job) + duration)?;

    Ok(changed)
}

fn propagate_pair(
    machine: MachineId,
    first: JobId,
    second: JobId,
    domains: &mut Domains,
) -> Result<bool, Inconsistency> {
    if !domains.machines(first).contains(machine) || !domains.machines(second).contains(machine) {
        return Ok(false);
    }

    let first_can_precede = domains.ect(first) <= domains.lst(second);
    let second_can_precede = domains.ect(second) <= domains.lst(first);

    match (
        domains.is_fixed_to(first, machine),
        domains.is_fixed_to(second, machine),
    ) {
        (true, true) => match (first_can_precede, second_can_precede) {
            (false, false) => Err(Inconsistency::Overlap { machine }),
            (true, false) => order(first, second, domains),
            (false, true) => order(second, first, domains),
            (true, true) => Ok(false),
        },
        // A candidate which cannot be ordered with a job already on the machine cannot join it.
        (true, false) if !first_can_precede && !second_can_precede => {
            domains.remove_machine(second, machine)
        }
        (false, true) if !first_can_precede && !second_can_precede => {
            domains.remove_machine(first, machine)
        }
        _ => Ok(false),
    }
}

/// Posts `before` ends no later than `after` starts.
fn order(before: JobId, after: JobId, domains: &mut Domains) -> Result<bool, Inconsistency> {
    let mut changed = domains.set_start_lower_bound(after, domains.ect(before))?;
    changed |= domains.set_end_upper_bound(before, domains.lst(after))?;
    Ok(changed)
}

fn propagate_machine_domain(
    job: JobId,
    problem: &Problem,
    index: &DisjunctiveIndex,
    domains: &mut Domains,
) -> Result<bool, Inconsistency> {
    let machine_domain = domains.machines(job);
    if machine_domain.is_empty() {
        return Err(Inconsistency::EmptyMachineDomain { job });
    }
    if machine_domain.size() == 1 {
        return Ok(false);
    }

    let candidates = machine_domain.iter().collect::<Vec<_>>();

    let mut changed = false;
    for machine in candidates {
        // Removing an earlier candidate may have fixed the job to this machine already.
        let mut tasks = fixed_tasks(machine, problem, index, domains);
        tasks.retain(|task| task.job != job);
        tasks.push(task_of(job, problem, domains));

        if is_overloaded(&tasks) {
            changed |= domains.remove_machine(job, machine)?;
        }
    }

    Ok(changed)
}

fn propagate_machine_load(
    machine: MachineId,
    problem: &Problem,
    index: &DisjunctiveIndex,
    domains: &mut Domains,
) -> Result<bool, Inconsistency> {
    let tasks = fixed_tasks(machine, problem, index, domains);
    if tasks.len() < 2 {
        return Ok(false);
    }

    let mut changed = false;
    for interval in find_task_intervals(&tasks) {
        if interval.is_overloaded() {
            return Err(Inconsistency::Overload { machine });
        }

        for task in tasks.iter().filter(|task| !interval.contains(task.job)) {
            if interval.must_run_before(task) {
                changed |=
                    domains.set_start_lower_bound(task.job, interval.lower + interval.processing)?;
            }
            if interval.must_run_after(task) {
                changed |=
                    domains.set_end_upper_bound(task.job, interval.upper - interval.processing)?;
            }
        }
    }

    Ok(changed)
}

fn task_of(job: JobId, problem: &Problem, domains: &Domains) -> Task {
    Task {
        job,
        est: domains.est(job),
        lct: domains.lct(job),
        duration: problem.duration(job),
    }
}

/// The jobs whose machine domain is exactly `{machine}`.
pub(crate) fn fixed_tasks(
    machine: MachineId,
    problem: &Problem,
    index: &DisjunctiveIndex,
    domains: &Domains,
) -> Vec<Task> {
    index
        .candidate_jobs(machine)
        .iter()
        .filter(|&&job| domains.is_fixed_to(job, machine))
        .map(|&job| task_of(job, problem, domains))
        .collect()
}
