use itertools::Itertools;

use crate::model::JobId;

/// The time window of a job fixed to a machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Task {
    pub(crate) job: JobId,
    /// Earliest start time.
    pub(crate) est: i64,
    /// Latest completion time.
    pub(crate) lct: i64,
    pub(crate) duration: i64,
}

/// The tasks whose windows lie within `[lower, upper]`, where `lower` is the earliest start and
/// `upper` the latest completion among them.
#[derive(Clone, Debug)]
pub(crate) struct TaskInterval {
    pub(crate) lower: i64,
    pub(crate) upper: i64,
    /// The summed duration of the tasks.
    pub(crate) processing: i64,
    jobs: Vec<JobId>,
}

impl TaskInterval {
    fn from_window(tasks: &[Task], lower: i64, upper: i64) -> Option<TaskInterval> {
        let members = tasks
            .iter()
            .filter(|task| task.est >= lower && task.lct <= upper)
            .collect::<Vec<_>>();

        if members.is_empty() {
            return None;
        }

        Some(TaskInterval {
            lower: members.iter().map(|task| task.est).min()?,
            upper: members.iter().map(|task| task.lct).max()?,
            processing: members.iter().map(|task| task.duration).sum(),
            jobs: members.iter().map(|task| task.job).collect(),
        })
    }

    /// There is not enough room in the window to execute every task in it.
    pub(crate) fn is_overloaded(&self) -> bool {
        self.processing > self.upper - self.lower
    }

    pub(crate) fn contains(&self, job: JobId) -> bool {
        self.jobs.contains(&job)
    }

    /// `task` cannot run before or in between the tasks of the interval, so the whole interval
    /// runs before it.
    pub(crate) fn must_run_before(&self, task: &Task) -> bool {
        self.processing + task.duration > self.upper - task.est.min(self.lower)
    }

    /// `task` cannot run after or in between the tasks of the interval, so the whole interval runs
    /// after it.
    pub(crate) fn must_run_after(&self, task: &Task) -> bool {
        self.processing + task.duration > task.lct.max(self.upper) - self.lower
    }
}

/// Enumerates the task intervals spanned by an earliest start and a latest completion time of the
/// given tasks.
pub(crate) fn find_task_intervals(tasks: &[Task]) -> Vec<TaskInterval> {
    let ests = tasks.iter().map(|task| task.est).sorted().dedup().collect_vec();
    let lcts = tasks.iter().map(|task| task.lct).sorted().dedup().collect_vec();

    ests.iter()
        .cartesian_product(lcts.iter())
        .filter(|(lower, upper)| lower < upper)
        .filter_map(|(&lower, &upper)| TaskInterval::from_window(tasks, lower, upper))
        .unique_by(|interval| (interval.lower, interval.upper))
        .collect()
}

/// Returns whether some window of the given tasks holds more work than fits in it.
pub(crate) fn is_overloaded(tasks: &[Task]) -> bool {
    find_task_intervals(tasks)
        .iter()
        .any(TaskInterval::is_overloaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(job: u32, est: i64, lct: i64, duration: i64) -> Task {
        Task {
            job: JobId::new(job),
            est,
            lct,
            duration,
        }
    }

    #[test]
    fn intervals_are_spanned_by_their_members() {
        let tasks = [task(0, 0, 4, 2), task(1, 2, 8, 3)];
        let intervals = find_task_intervals(&tasks);

        assert_eq!(intervals.len(), 3);
        assert!(intervals.iter().any(|interval| {
            interval.lower == 0 && interval.upper == 8 && interval.processing == 5
        }));
    }

    #[test]
    fn overload_is_detected_in_an_inner_window() {
        let fits = [task(0, 0, 10, 3), task(1, 0, 10, 3), task(2, 2, 6, 2)];
        assert!(!is_overloaded(&fits));

        let overloaded = [task(0, 2, 6, 3), task(1, 2, 6, 2), task(2, 0, 20, 1)];
        assert!(is_overloaded(&overloaded));
    }

    #[test]
    fn task_which_cannot_go_first_runs_after_the_interval() {
        let interval = TaskInterval::from_window(&[task(0, 0, 4, 4)], 0, 4).expect("one member");
        let late = task(1, 0, 10, 3);

        assert!(interval.must_run_before(&late));
        assert!(!interval.must_run_after(&late));
        assert!(!interval.contains(late.job));
    }
}
