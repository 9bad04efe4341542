/// The state of the node the search engine is working on, or the final state of the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum NodeState {
    /// The node awaits its objective bound and propagation.
    Open,
    Propagating,
    /// The lower bound cannot beat the incumbent, or propagation found an inconsistency.
    Pruned,
    /// Children have been pushed for every candidate machine of the selected job.
    Branched,
    /// Every job is fixed to a machine; the node produced an improving schedule.
    Solved,
    /// The tree is exhausted and the incumbent is optimal.
    ExhaustedOptimal,
    /// The tree is exhausted without any schedule being found.
    ExhaustedInfeasible,
}
