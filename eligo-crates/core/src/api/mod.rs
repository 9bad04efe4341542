mod error;
mod options;
mod solution_callback;
mod solver;

pub use error::SolveError;
pub use options::SearchMode;
pub use options::SolverOptions;
pub use solution_callback::SolutionCallback;
pub use solver::Solver;
