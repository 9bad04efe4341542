use crate::model::JobId;
use crate::model::MachineId;

/// Fix `job` to `machine`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Decision {
    pub(crate) job: JobId,
    pub(crate) machine: MachineId,
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    /// Where the decisions of this frame begin in the entries.
    first_entry: usize,
    /// The checkpoint the domains return to once every decision of the frame has been tried.
    restore_to: usize,
}

/// The pending decisions of every node on the current path, one frame per node.
///
/// Decisions are handed out in the order in which they were given to [`SearchStack::push_frame`].
#[derive(Clone, Debug, Default)]
pub(crate) struct SearchStack {
    entries: Vec<Decision>,
    frames: Vec<Frame>,
}

impl SearchStack {
    pub(crate) fn push_frame(
        &mut self,
        restore_to: usize,
        decisions: impl DoubleEndedIterator<Item = Decision>,
    ) {
        self.frames.push(Frame {
            first_entry: self.entries.len(),
            restore_to,
        });
        self.entries.extend(decisions.rev());
    }

    /// The next untried decision of the innermost frame.
    pub(crate) fn next_decision(&mut self) -> Option<Decision> {
        let frame = self.frames.last()?;
        if self.entries.len() > frame.first_entry {
            self.entries.pop()
        } else {
            None
        }
    }

    /// Removes the innermost frame and returns the checkpoint to restore.
    pub(crate) fn pop_frame(&mut self) -> Option<usize> {
        let frame = self.frames.pop()?;
        self.entries.truncate(frame.first_entry);
        Some(frame.restore_to)
    }

    /// The number of frames, which is the depth of the next node to be opened.
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(job: u32, machine: u32) -> Decision {
        Decision {
            job: JobId::new(job),
            machine: MachineId::new(machine),
        }
    }

    #[test]
    fn decisions_come_out_in_the_given_order() {
        let mut stack = SearchStack::default();
        stack.push_frame(0, [decision(0, 0), decision(0, 1)].into_iter());

        assert_eq!(stack.next_decision(), Some(decision(0, 0)));
        assert_eq!(stack.next_decision(), Some(decision(0, 1)));
        assert_eq!(stack.next_decision(), None);
        assert_eq!(stack.pop_frame(), Some(0));
        assert_eq!(stack.pop_frame(), None);
    }

    #[test]
    fn inner_frames_shadow_outer_decisions() {
        let mut stack = SearchStack::default();
        stack.push_frame(0, [decision(0, 0), decision(0, 1)].into_iter());
        let _ = stack.next_decision();
        stack.push_frame(1, [decision(1, 2)].into_iter());

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.next_decision(), Some(decision(1, 2)));
        assert_eq!(stack.next_decision(), None);
        assert_eq!(stack.pop_frame(), Some(1));
        assert_eq!(stack.next_decision(), Some(decision(0, 1)));
    }
}
