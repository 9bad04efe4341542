use std::ops::ControlFlow;
use std::time::Instant;

use log::debug;
use log::info;
use log::warn;

use super::SearchMode;
use super::SolutionCallback;
use super::SolveError;
use super::SolverOptions;
use crate::engine::search::SearchConclusion;
use crate::engine::search::SearchEngine;
use crate::engine::termination::TerminationCondition;
use crate::engine::SolverStatistics;
use crate::model::Problem;
#[cfg(doc)]
use crate::results::ScheduleResult::FeasibleNotProven;
use crate::results::Schedule;
use crate::results::ScheduleResult;
use crate::statistics::should_log_statistics;
use crate::statistics::StatisticLogger;

/// Minimises the makespan of a [`Problem`].
///
/// Every call to [`Solver::solve`] starts from fresh domains and an empty incumbent; the solver
/// only keeps the statistics of the last invocation.
///
/// # Example
/// ```rust
/// # use eligo_core::model::Problem;
/// # use eligo_core::termination::Indefinite;
/// # use eligo_core::results::ScheduleResult;
/// # use eligo_core::Solver;
/// let problem = Problem::new(2, [(5, vec![0]), (3, vec![1])]).expect("valid input");
///
/// let mut solver = Solver::default();
/// let result = solver.solve(&problem, &mut Indefinite).expect("domains can be built");
///
/// assert!(matches!(result, ScheduleResult::Optimal(_)));
/// assert_eq!(result.makespan(), Some(5));
/// ```
#[derive(Debug, Default)]
pub struct Solver {
    options: SolverOptions,
    statistics: SolverStatistics,
}

impl Solver {
    pub fn with_options(options: SolverOptions) -> Self {
        Solver {
            options,
            statistics: SolverStatistics::default(),
        }
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Searches for a schedule with minimal makespan until the search space is exhausted or
    /// `termination` triggers.
    pub fn solve(
        &mut self,
        problem: &Problem,
        termination: &mut impl TerminationCondition,
    ) -> Result<ScheduleResult, SolveError> {
        self.solve_with_callback(problem, termination, |_: &Schedule| {
            ControlFlow::Continue(())
        })
    }

    /// Like [`Solver::solve`], but calls `callback` with every improving schedule; a
    /// [`ControlFlow::Break`] stops the search with a [`FeasibleNotProven`] result.
    pub fn solve_with_callback(
        &mut self,
        problem: &Problem,
        termination: &mut impl TerminationCondition,
        mut callback: impl SolutionCallback,
    ) -> Result<ScheduleResult, SolveError> {
        let started_at = Instant::now();
        self.statistics = SolverStatistics::default();

        if problem.num_jobs() == 0 {
            warn!("The problem has no jobs; the empty schedule is optimal");
            return Ok(ScheduleResult::Optimal(Schedule::new(Vec::new())));
        }

        if self.options.search_mode == SearchMode::FirstFeasible {
            warn!("Stopping at the first schedule; it will not be proven optimal");
        }

        info!(
            "Scheduling {} jobs on {} machines with horizon {}",
            problem.num_jobs(),
            problem.num_machines(),
            problem.total_duration()
        );

        let mut engine = SearchEngine::new(problem, self.options)?;
        let conclusion = engine.run(termination, &mut callback);

        self.statistics.search = engine.statistics();
        self.statistics.time_spent_in_search = started_at.elapsed();
        debug!("Final search state: {:?}", engine.node_state());

        let result = match (conclusion, engine.into_best_schedule()) {
            (SearchConclusion::Exhausted, Some(schedule)) => ScheduleResult::Optimal(schedule),
            (SearchConclusion::Exhausted, None) => ScheduleResult::Infeasible,
            (SearchConclusion::Interrupted | SearchConclusion::Stopped, Some(schedule)) => {
                ScheduleResult::FeasibleNotProven(schedule)
            }
            (SearchConclusion::Interrupted | SearchConclusion::Stopped, None) => {
                ScheduleResult::TimedOutNoSolution
            }
        };

        info!(
            "Search concluded with status {} and makespan {:?}",
            result.status(),
            result.makespan()
        );

        Ok(result)
    }

    /// The number of search nodes opened by the last solve invocation.
    pub fn num_nodes(&self) -> u64 {
        self.statistics.search.num_nodes
    }

    /// Logs the statistics of the last solve invocation, if statistic logging is configured.
    ///
    /// Search counters are logged under their own name, followed by `solve_time` in seconds.
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::default());
        }
    }
}
