use std::fmt::Display;

use super::Schedule;

/// The result of a solve invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduleResult {
    /// The search space was exhausted; no schedule has a smaller makespan.
    Optimal(Schedule),
    /// A schedule was found, but the search stopped before proving it optimal.
    FeasibleNotProven(Schedule),
    /// The search space was exhausted without finding a schedule.
    Infeasible,
    /// The search stopped before finding any schedule. This says nothing about feasibility.
    TimedOutNoSolution,
}

impl ScheduleResult {
    pub fn status(&self) -> SolveStatus {
        match self {
            ScheduleResult::Optimal(_) => SolveStatus::Optimal,
            ScheduleResult::FeasibleNotProven(_) => SolveStatus::FeasibleNotProven,
            ScheduleResult::Infeasible => SolveStatus::Infeasible,
            ScheduleResult::TimedOutNoSolution => SolveStatus::TimedOutNoSolution,
        }
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            ScheduleResult::Optimal(schedule) | ScheduleResult::FeasibleNotProven(schedule) => {
                Some(schedule)
            }
            ScheduleResult::Infeasible | ScheduleResult::TimedOutNoSolution => None,
        }
    }

    pub fn makespan(&self) -> Option<i64> {
        self.schedule().map(Schedule::makespan)
    }
}

/// The status part of a [`ScheduleResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    Optimal,
    FeasibleNotProven,
    Infeasible,
    TimedOutNoSolution,
}

impl Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SolveStatus::Optimal => "OPTIMAL",
            SolveStatus::FeasibleNotProven => "FEASIBLE",
            SolveStatus::Infeasible => "INFEASIBLE",
            SolveStatus::TimedOutNoSolution => "UNKNOWN",
        };
        write!(f, "{text}")
    }
}
