use crate::engine::propagation::fixed_tasks;
use crate::engine::DisjunctiveIndex;
use crate::engine::Domains;
use crate::model::MachineId;
use crate::model::Problem;

/// `ceil(total duration / number of machines)`: no schedule balances the load better.
pub(crate) fn load_balance_bound(problem: &Problem) -> i64 {
    let num_machines = i64::try_from(problem.num_machines()).unwrap_or(i64::MAX);
    let total = problem.total_duration();

    total / num_machines + i64::from(total % num_machines != 0)
}

/// A lower bound on the makespan of every schedule within the current domains.
///
/// It is the largest of the load balance bound, the latest earliest completion time, and for
/// every machine the earliest start among its fixed jobs plus their summed duration.
pub(crate) fn lower_bound(
    problem: &Problem,
    index: &DisjunctiveIndex,
    domains: &Domains,
    load_balance_bound: i64,
) -> i64 {
    let latest_completion = problem
        .job_ids()
        .map(|job| domains.ect(job))
        .max()
        .unwrap_or(0);

    let machine_bound = index
        .machines()
        .map(|machine| machine_bound(machine, problem, index, domains))
        .max()
        .unwrap_or(0);

    load_balance_bound.max(latest_completion).max(machine_bound)
}

fn machine_bound(
    machine: MachineId,
    problem: &Problem,
    index: &DisjunctiveIndex,
    domains: &Domains,
) -> i64 {
    let tasks = fixed_tasks(machine, problem, index, domains);

    let Some(earliest_start) = tasks.iter().map(|task| task.est).min() else {
        return 0;
    };
    tasks
        .iter()
        .fold(earliest_start, |bound, task| bound.saturating_add(task.duration))
}
