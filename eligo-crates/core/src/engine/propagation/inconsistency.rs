use crate::model::JobId;
use crate::model::MachineId;

/// The reason why propagation proved that the current node contains no schedule.
///
/// An inconsistency only ever causes a backtrack; it is not reported to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Inconsistency {
    /// The start or end domain of a job became empty.
    EmptyTimeDomain { job: JobId },
    /// No machine is left for a job.
    EmptyMachineDomain { job: JobId },
    /// Two jobs fixed to the same machine cannot be ordered without overlapping.
    Overlap { machine: MachineId },
    /// The jobs fixed to a machine need more time than their time windows leave.
    Overload { machine: MachineId },
}
