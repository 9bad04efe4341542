use log::trace;

use super::Constraint;
use super::Inconsistency;
use crate::engine::solver_statistics::SearchStatistics;
use crate::engine::termination::TerminationCondition;
use crate::engine::DisjunctiveIndex;
use crate::engine::Domains;
use crate::model::Problem;

/// How a call to [`Propagator::propagate`] ended without finding an inconsistency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PropagationOutcome {
    /// No constraint can tighten a domain any further.
    FixedPoint,
    /// The termination condition triggered between two rounds.
    Interrupted,
}

/// Evaluates the constraints of the model until none of them changes a domain.
#[derive(Clone, Debug)]
pub(crate) struct Propagator {
    constraints: Vec<Constraint>,
}

impl Propagator {
    /// Creates the constraint list of `problem`; the machine load constraints are only added when
    /// `edge_finding` is set.
    pub(crate) fn new(problem: &Problem, index: &DisjunctiveIndex, edge_finding: bool) -> Self {
        let mut constraints = problem
            .jobs()
            .map(|(job, details)| Constraint::DurationLink {
                job,
                duration: details.duration(),
            })
            .collect::<Vec<_>>();

        constraints.extend(
            problem
                .job_ids()
                .filter(|&job| index.candidate_machines(job).len() > 1)
                .map(|job| Constraint::DomainSingleton { job }),
        );

        for machine in index.machines() {
            constraints.extend(
                index
                    .pairs_on(machine)
                    .map(|(first, second)| Constraint::DisjunctivePair {
                        machine,
                        first,
                        second,
                    }),
            );
        }

        if edge_finding {
            constraints.extend(
                index
                    .machines()
                    .filter(|&machine| index.candidate_jobs(machine).len() > 1)
                    .map(|machine| Constraint::MachineLoad { machine }),
            );
        }

        Propagator { constraints }
    }

    pub(crate) fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Runs every constraint in rounds until a round changes nothing.
    ///
    /// The termination condition is polled before each round, never in the middle of one.
    pub(crate) fn propagate(
        &self,
        problem: &Problem,
        index: &DisjunctiveIndex,
        domains: &mut Domains,
        termination: &mut impl TerminationCondition,
        statistics: &mut SearchStatistics,
    ) -> Result<PropagationOutcome, Inconsistency> {
        loop {
            if termination.should_stop() {
                return Ok(PropagationOutcome::Interrupted);
            }

            statistics.num_propagation_rounds += 1;

            let mut changed = false;
            for constraint in &self.constraints {
                changed |= constraint
                    .propagate(problem, index, domains)
                    .inspect_err(|inconsistency| {
                        trace!("{constraint:?} failed with {inconsistency:?}");
                    })?;
            }

            if !changed {
                return Ok(PropagationOutcome::FixedPoint);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::termination::Indefinite;
    use crate::engine::termination::TimeBudget;
    use crate::model::JobId;
    use crate::model::MachineId;

    fn setup(num_machines: usize, jobs: Vec<(i64, Vec<usize>)>) -> (Problem, DisjunctiveIndex) {
        let problem = Problem::new(num_machines, jobs).expect("valid input");
        let index = DisjunctiveIndex::new(&problem);
        (problem, index)
    }

    #[test]
    fn constraint_list_covers_every_kind() {
        let (problem, index) = setup(2, vec![(1, vec![0, 1]), (2, vec![0]), (3, vec![0, 1])]);

        let with_edge_finding = Propagator::new(&problem, &index, true);
        let without_edge_finding = Propagator::new(&problem, &index, false);

        // 3 duration links, 2 domain singletons, 3 pairs on machine 0, 1 pair on machine 1
        assert_eq!(without_edge_finding.num_constraints(), 9);
        // plus one machine load per machine
        assert_eq!(with_edge_finding.num_constraints(), 11);
    }

    #[test]
    fn fixed_point_orders_jobs_on_a_single_machine() {
        let (problem, index) = setup(1, vec![(2, vec![0]), (3, vec![0])]);
        let propagator = Propagator::new(&problem, &index, true);
        let mut domains = Domains::build(&problem).expect("non-empty domains");
        let mut statistics = SearchStatistics::default();

        // makespan at most 5 leaves no slack at all
        let first = JobId::new(0);
        let second = JobId::new(1);
        let _ = domains.set_start_lower_bound(second, 1).expect("consistent");

        let outcome =
            propagator.propagate(&problem, &index, &mut domains, &mut Indefinite, &mut statistics);

        assert_eq!(outcome, Ok(PropagationOutcome::FixedPoint));
        assert_eq!(domains.est(first), 0);
        assert_eq!(domains.lct(first), 2);
        assert_eq!(domains.est(second), 2);
        assert!(statistics.num_propagation_rounds >= 2);
    }

    #[test]
    fn inconsistency_is_reported() {
        let (problem, index) = setup(1, vec![(2, vec![0]), (3, vec![0])]);
        let propagator = Propagator::new(&problem, &index, true);
        let mut domains = Domains::build(&problem).expect("non-empty domains");
        let mut statistics = SearchStatistics::default();

        for job in [JobId::new(0), JobId::new(1)] {
            let _ = domains.set_end_upper_bound(job, 4).expect("consistent");
        }

        let outcome =
            propagator.propagate(&problem, &index, &mut domains, &mut Indefinite, &mut statistics);

        assert_eq!(
            outcome,
            Err(Inconsistency::Overlap {
                machine: MachineId::new(0)
            })
        );
    }

    #[test]
    fn expired_budget_interrupts_before_the_first_round() {
        let (problem, index) = setup(1, vec![(2, vec![0])]);
        let propagator = Propagator::new(&problem, &index, true);
        let mut domains = Domains::build(&problem).expect("non-empty domains");
        let mut statistics = SearchStatistics::default();
        let mut termination = TimeBudget::starting_now(std::time::Duration::ZERO);

        let outcome =
            propagator.propagate(&problem, &index, &mut domains, &mut termination, &mut statistics);

        assert_eq!(outcome, Ok(PropagationOutcome::Interrupted));
        assert_eq!(statistics.num_propagation_rounds, 0);
    }
}
