//! The solving engine: per-solve domains, the disjunctive index, propagation, branch-and-bound
//! search and the conditions under which it stops.
pub(crate) mod disjunctive;
pub(crate) mod domains;
pub(crate) mod propagation;
pub(crate) mod search;
pub(crate) mod solver_statistics;
pub mod termination;

pub(crate) use disjunctive::DisjunctiveIndex;
pub(crate) use domains::Domains;
pub(crate) use solver_statistics::SolverStatistics;
