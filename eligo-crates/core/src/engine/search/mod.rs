//! Depth-first branch-and-bound over machine assignments.
//!
//! A node fixes one more job to a machine, propagates, and is either pruned, solved or split into
//! one child per remaining candidate machine of the most constrained job. The order of jobs on a
//! machine is left to propagation and to the sequencing of a solved node.
mod bounds;
mod brancher;
mod engine;
mod incumbent;
mod node_state;
mod search_stack;
mod tie_breaking;

pub(crate) use engine::SearchConclusion;
pub(crate) use engine::SearchEngine;
pub(crate) use node_state::NodeState;
