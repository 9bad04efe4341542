use log::debug;
use log::trace;

use super::bounds::load_balance_bound;
use super::bounds::lower_bound;
use super::brancher::branch_machines;
use super::brancher::select_job;
use super::incumbent::Incumbent;
use super::search_stack::Decision;
use super::search_stack::SearchStack;
use super::NodeState;
use crate::eligo_assert_advanced;
use crate::eligo_assert_moderate;
use crate::eligo_assert_simple;
use crate::engine::propagation::PropagationOutcome;
use crate::engine::propagation::Propagator;
use crate::engine::solver_statistics::SearchStatistics;
use crate::engine::termination::TerminationCondition;
use crate::engine::DisjunctiveIndex;
use crate::engine::Domains;
use crate::model::Problem;
use crate::results::extract_schedule;
use crate::results::Schedule;
use crate::SearchMode;
use crate::SolutionCallback;
use crate::SolveError;
use crate::SolverOptions;

/// Why the search loop returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SearchConclusion {
    /// Every node has been pruned, solved or branched on.
    Exhausted,
    /// The termination condition triggered.
    Interrupted,
    /// A schedule was found and no further improvement was requested.
    Stopped,
}

/// Marks that the termination condition triggered while a node was being processed.
#[derive(Clone, Copy, Debug)]
struct Interrupted;

/// Depth-first branch-and-bound over the machine assignment of every job.
///
/// The engine owns the domains of one solve invocation. Descending into a child opens a trail
/// checkpoint and returning from it restores the parent's domains exactly, so the memory used is
/// linear in the depth of the tree.
#[derive(Debug)]
pub(crate) struct SearchEngine<'problem> {
    problem: &'problem Problem,
    index: DisjunctiveIndex,
    propagator: Propagator,
    domains: Domains,
    options: SolverOptions,
    load_balance_bound: i64,
    incumbent: Incumbent,
    stack: SearchStack,
    node_state: NodeState,
    stop_requested: bool,
    statistics: SearchStatistics,
}

impl<'problem> SearchEngine<'problem> {
    pub(crate) fn new(
        problem: &'problem Problem,
        options: SolverOptions,
    ) -> Result<Self, SolveError> {
        let index = DisjunctiveIndex::new(problem);
        let propagator = Propagator::new(problem, &index, options.edge_finding);
        let domains = Domains::build(problem)?;

        debug!(
            "Created {} constraints over {} jobs",
            propagator.num_constraints(),
            problem.num_jobs()
        );

        Ok(SearchEngine {
            problem,
            index,
            propagator,
            domains,
            options,
            load_balance_bound: load_balance_bound(problem),
            incumbent: Incumbent::default(),
            stack: SearchStack::default(),
            node_state: NodeState::Open,
            stop_requested: false,
            statistics: SearchStatistics::default(),
        })
    }

    pub(crate) fn node_state(&self) -> NodeState {
        self.node_state
    }

    pub(crate) fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    pub(crate) fn into_best_schedule(self) -> Option<Schedule> {
        self.incumbent.into_schedule()
    }

    /// Explores the search tree until it is exhausted, the termination condition triggers, or a
    /// schedule is found after which the search should not continue.
    ///
    /// On return the domains are back in the state they were built in.
    pub(crate) fn run(
        &mut self,
        termination: &mut impl TerminationCondition,
        callback: &mut impl SolutionCallback,
    ) -> SearchConclusion {
        let initial_domains = self.domains.clone();
        let root_level = self.domains.checkpoint();

        self.domains.new_checkpoint();
        let conclusion = match self.open_node(root_level, termination, callback) {
            Ok(_) => self.explore(termination, callback),
            Err(Interrupted) => SearchConclusion::Interrupted,
        };

        if self.domains.checkpoint() > root_level {
            self.domains.synchronise(root_level);
        }
        self.stack.clear();

        eligo_assert_simple!(
            self.domains.same_domains_as(&initial_domains),
            "the domains were not restored after the search"
        );

        if conclusion == SearchConclusion::Exhausted {
            self.node_state = if self.incumbent.makespan().is_some() {
                NodeState::ExhaustedOptimal
            } else {
                NodeState::ExhaustedInfeasible
            };
        }

        debug!(
            "Search ended ({conclusion:?}) after {} nodes, best makespan {:?}",
            self.statistics.num_nodes,
            self.incumbent.makespan()
        );

        conclusion
    }

    fn explore(
        &mut self,
        termination: &mut impl TerminationCondition,
        callback: &mut impl SolutionCallback,
    ) -> SearchConclusion {
        loop {
            if self.stop_requested {
                return SearchConclusion::Stopped;
            }
            if termination.should_stop() {
                return SearchConclusion::Interrupted;
            }

            let Some(Decision { job, machine }) = self.stack.next_decision() else {
                match self.stack.pop_frame() {
                    Some(restore_to) => {
                        self.domains.synchronise(restore_to);
                        continue;
                    }
                    None => return SearchConclusion::Exhausted,
                }
            };

            let parent_level = self.domains.checkpoint();
            self.domains.new_checkpoint();
            trace!("Assigning {job:?} to {machine:?}");

            if let Err(inconsistency) = self.domains.fix_machine(job, machine) {
                trace!("Pruned: {inconsistency:?}");
                self.statistics.num_prunes_by_infeasibility += 1;
                self.domains.synchronise(parent_level);
                continue;
            }

            if self.open_node(parent_level, termination, callback).is_err() {
                return SearchConclusion::Interrupted;
            }
        }
    }

    /// Processes the node whose domains are current, and returns to `parent_level` unless the node
    /// branched.
    fn open_node(
        &mut self,
        parent_level: usize,
        termination: &mut impl TerminationCondition,
        callback: &mut impl SolutionCallback,
    ) -> Result<NodeState, Interrupted> {
        self.node_state = NodeState::Open;
        self.statistics.num_nodes += 1;
        self.statistics.peak_depth = self.statistics.peak_depth.max(self.stack.depth() as u64);

        let state = self.evaluate_node(parent_level, termination, callback)?;
        termination.node_has_been_explored();

        if state != NodeState::Branched {
            self.domains.synchronise(parent_level);
        }
        self.node_state = state;

        Ok(state)
    }

    fn evaluate_node(
        &mut self,
        parent_level: usize,
        termination: &mut impl TerminationCondition,
        callback: &mut impl SolutionCallback,
    ) -> Result<NodeState, Interrupted> {
        if let Some(best) = self.incumbent.makespan() {
            for job in self.problem.job_ids() {
                if self.domains.set_end_upper_bound(job, best - 1).is_err() {
                    trace!("Pruned: {job:?} cannot end before the incumbent makespan {best}");
                    self.statistics.num_prunes_by_bound += 1;
                    return Ok(NodeState::Pruned);
                }
            }
        }

        self.node_state = NodeState::Propagating;
        match self.propagator.propagate(
            self.problem,
            &self.index,
            &mut self.domains,
            termination,
            &mut self.statistics,
        ) {
            Ok(PropagationOutcome::FixedPoint) => {}
            Ok(PropagationOutcome::Interrupted) => return Err(Interrupted),
            Err(inconsistency) => {
                trace!("Pruned: {inconsistency:?}");
                self.statistics.num_prunes_by_infeasibility += 1;
                return Ok(NodeState::Pruned);
            }
        }

        let bound = lower_bound(
            self.problem,
            &self.index,
            &self.domains,
            self.load_balance_bound,
        );
        if !self.incumbent.is_improved_by(bound) {
            trace!("Pruned: lower bound {bound} does not improve the incumbent");
            self.statistics.num_prunes_by_bound += 1;
            return Ok(NodeState::Pruned);
        }

        if self.domains.all_machines_fixed() {
            self.install_solution(bound, callback);
            return Ok(NodeState::Solved);
        }

        let job = select_job(&self.domains, self.problem.job_ids())
            .expect("a job without a fixed machine remains");
        let machines = branch_machines(
            job,
            &self.index,
            &self.domains,
            self.options.symmetry_breaking,
        );
        eligo_assert_moderate!(!machines.is_empty());

        trace!("Branching on {job:?} over {machines:?}");
        self.stack.push_frame(
            parent_level,
            machines
                .into_iter()
                .map(|machine| Decision { job, machine }),
        );
        self.statistics.num_branches += 1;

        Ok(NodeState::Branched)
    }

    fn install_solution(&mut self, bound: i64, callback: &mut impl SolutionCallback) {
        let schedule = extract_schedule(self.problem, &self.domains)
            .expect("every job is fixed to a machine in a solved node");

        eligo_assert_simple!(schedule.makespan() <= bound);
        eligo_assert_advanced!(
            schedule.verify(self.problem).is_ok(),
            "extracted an invalid schedule: {:?}",
            schedule.verify(self.problem)
        );

        self.statistics.num_solutions += 1;
        debug!(
            "Found a schedule with makespan {} after {} nodes",
            schedule.makespan(),
            self.statistics.num_nodes
        );

        let flow = callback.on_solution_callback(&schedule);
        self.incumbent.install(schedule);

        if flow.is_break() || self.options.search_mode == SearchMode::FirstFeasible {
            self.stop_requested = true;
        }
    }
}
