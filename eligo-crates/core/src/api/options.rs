/// Whether the search keeps improving after the first schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SearchMode {
    /// Keep improving the incumbent until the search space is exhausted, which proves it optimal.
    #[default]
    Optimise,
    /// Stop at the first schedule; it is reported without a proof of optimality.
    FirstFeasible,
}

/// The options of a [`Solver`].
///
/// [`Solver`]: crate::Solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    pub search_mode: SearchMode,
    /// Skip candidate machines which are interchangeable with a machine already branched on.
    pub symmetry_breaking: bool,
    /// Add overload checking and edge finding over the jobs fixed to each machine.
    pub edge_finding: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            search_mode: SearchMode::Optimise,
            symmetry_breaking: true,
            edge_finding: true,
        }
    }
}
