use std::time::Duration;

use crate::create_statistics_struct;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// The statistics of a single solve invocation.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SolverStatistics {
    pub(crate) search: SearchStatistics,
    /// Wall-clock time spent between building the domains and reaching a conclusion.
    pub(crate) time_spent_in_search: Duration,
}

impl SolverStatistics {
    pub(crate) fn log(&self, statistic_logger: StatisticLogger) {
        self.search.log(statistic_logger.clone());
        Statistic::log(
            &self.time_spent_in_search.as_secs_f64(),
            statistic_logger.attach_to_prefix("solve_time"),
        );
    }
}

create_statistics_struct!(
    /// Counters of the branch-and-bound search
    SearchStatistics {
        /// The number of search nodes which have been opened
        num_nodes: u64,
        /// The number of nodes which were split into children
        num_branches: u64,
        /// The number of nodes whose lower bound could not beat the incumbent
        num_prunes_by_bound: u64,
        /// The number of nodes in which propagation found an inconsistency
        num_prunes_by_infeasibility: u64,
        /// The number of improving schedules
        num_solutions: u64,
        /// The deepest level reached in the search tree
        peak_depth: u64,
        /// The number of passes over the constraint list
        num_propagation_rounds: u64,
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_without_a_configured_sink_is_silent() {
        let statistics = SolverStatistics {
            search: SearchStatistics {
                num_nodes: 3,
                ..SearchStatistics::default()
            },
            time_spent_in_search: Duration::from_millis(5),
        };

        statistics.log(StatisticLogger::default());
        assert_eq!(statistics.search.num_nodes, 3);
    }
}
