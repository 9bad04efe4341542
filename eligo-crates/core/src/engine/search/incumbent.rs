use crate::eligo_assert_simple;
use crate::results::Schedule;

/// The best schedule found so far in a solve invocation.
///
/// Its makespan only ever decreases.
#[derive(Clone, Debug, Default)]
pub(crate) struct Incumbent {
    best: Option<Schedule>,
}

impl Incumbent {
    pub(crate) fn makespan(&self) -> Option<i64> {
        self.best.as_ref().map(Schedule::makespan)
    }

    /// Whether a schedule with the given makespan would replace the incumbent.
    pub(crate) fn is_improved_by(&self, makespan: i64) -> bool {
        self.makespan().map_or(true, |best| makespan < best)
    }

    pub(crate) fn install(&mut self, schedule: Schedule) {
        eligo_assert_simple!(
            self.is_improved_by(schedule.makespan()),
            "the incumbent may only improve: {:?} -> {}",
            self.makespan(),
            schedule.makespan()
        );
        self.best = Some(schedule);
    }

    pub(crate) fn into_schedule(self) -> Option<Schedule> {
        self.best
    }
}
