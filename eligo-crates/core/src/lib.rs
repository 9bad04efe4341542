//! # Eligo
//! Eligo is an exact scheduler for identical parallel machines with eligibility restrictions: every
//! job has a duration and a set of machines it may run on, and the goal is a schedule with minimal
//! makespan (written `P|M_j|C_max`).
//!
//! The scheduler combines constraint propagation over start and end times and machine domains with
//! a depth-first branch-and-bound search over machine assignments. When the search space is
//! exhausted the best schedule found is proven optimal; if a [`TerminationCondition`] stops the
//! search earlier, the best schedule so far is reported without that proof.
//!
//! # Formulating a problem
//! A [`Problem`] is built from the number of machines and, for every job, its duration together
//! with the indices of its eligible machines. The input is validated once, when the problem is
//! constructed.
//!
//! ```rust
//! # use eligo_core::model::Problem;
//! // Three machines; job 1 may only run on machine 2.
//! let problem = Problem::new(3, [(4, vec![0, 1]), (2, vec![2]), (3, vec![0, 1, 2])])
//!     .expect("the input is valid");
//!
//! assert_eq!(problem.num_jobs(), 3);
//! assert_eq!(problem.total_duration(), 9);
//! ```
//!
//! # Solving
//! The [`Solver`] minimises the makespan. Every solve call takes a [`TerminationCondition`] which
//! bounds the search, such as a [`TimeBudget`] or [`Indefinite`] when no bound is needed.
//!
//! ```rust
//! # use eligo_core::model::Problem;
//! # use eligo_core::results::ScheduleResult;
//! # use eligo_core::termination::TimeBudget;
//! # use eligo_core::Solver;
//! # use std::time::Duration;
//! let problem = Problem::unrestricted(2, [3, 3, 2, 2, 2]).expect("the input is valid");
//!
//! let mut solver = Solver::default();
//! let mut termination = TimeBudget::starting_now(Duration::from_secs(10));
//! let result = solver.solve(&problem, &mut termination).expect("domains can be built");
//!
//! if let ScheduleResult::Optimal(schedule) = result {
//!     assert_eq!(schedule.makespan(), 6);
//!     assert!(schedule.verify(&problem).is_ok());
//! }
//! ```
//!
//! Every improving schedule can be observed through [`Solver::solve_with_callback`]; returning
//! [`std::ops::ControlFlow::Break`] from the callback stops the search.
//!
//! [`Problem`]: crate::model::Problem
//! [`TerminationCondition`]: crate::termination::TerminationCondition
//! [`TimeBudget`]: crate::termination::TimeBudget
//! [`Indefinite`]: crate::termination::Indefinite
mod eligo_asserts;

pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub mod model;
pub mod results;
pub mod statistics;

pub use convert_case;

// The API is declared as a private module with public use, so that its contents are exported
// directly from the crate root.
mod api;

pub use api::*;
pub use engine::termination;

#[doc(hidden)]
pub mod asserts {
    pub use crate::eligo_asserts::*;
}
