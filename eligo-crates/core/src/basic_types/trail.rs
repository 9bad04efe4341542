use std::iter::Rev;
use std::vec::Drain;

use crate::eligo_assert_simple;

/// A stack of undo records grouped by checkpoint.
///
/// Every search node opens a checkpoint before its domains are narrowed; returning to the parent
/// drains the records pushed since then, most recent first, so that the caller can restore the
/// exact values the parent saw.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    current_checkpoint: usize,
    /// At index i is the position where the i-th checkpoint ends (exclusive) on the trail
    trail_delimiter: Vec<usize>,
    trail: Vec<T>,
}

// Implemented by hand to avoid imposing `Default` on `T`.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            current_checkpoint: 0,
            trail_delimiter: Vec::new(),
            trail: Vec::new(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn new_checkpoint(&mut self) {
        self.current_checkpoint += 1;
        self.trail_delimiter.push(self.trail.len());
    }

    pub(crate) fn get_checkpoint(&self) -> usize {
        self.current_checkpoint
    }

    /// Removes every record pushed after `new_checkpoint` was opened and hands them back in
    /// reverse order of insertion.
    pub(crate) fn synchronise(&mut self, new_checkpoint: usize) -> Rev<Drain<'_, T>> {
        eligo_assert_simple!(
            new_checkpoint < self.current_checkpoint,
            "cannot synchronise to checkpoint {new_checkpoint} from {}",
            self.current_checkpoint
        );

        let new_trail_len = self.trail_delimiter[new_checkpoint];

        self.current_checkpoint = new_checkpoint;
        self.trail_delimiter.truncate(new_checkpoint);
        self.trail.drain(new_trail_len..).rev()
    }

    pub(crate) fn push(&mut self, elem: T) {
        self.trail.push(elem)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.trail.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synchronising_to_root_drains_everything() {
        let mut trail = Trail::default();

        trail.new_checkpoint();
        trail.push(1);
        let _ = trail.synchronise(0);

        assert_eq!(trail.len(), 0);
        assert_eq!(trail.get_checkpoint(), 0);
    }

    #[test]
    fn records_before_the_checkpoint_survive() {
        let mut trail = Trail::default();
        trail.push('a');

        trail.new_checkpoint();
        trail.push('b');
        trail.new_checkpoint();
        trail.push('c');

        let drained = trail.synchronise(1).collect::<Vec<_>>();

        assert_eq!(drained, vec!['c']);
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.get_checkpoint(), 1);
    }

    #[test]
    fn drained_records_come_back_most_recent_first() {
        let mut trail = Trail::default();
        trail.new_checkpoint();
        trail.push(10);
        trail.push(20);
        trail.new_checkpoint();
        trail.push(30);

        let drained = trail.synchronise(0).collect::<Vec<_>>();
        assert_eq!(drained, vec![30, 20, 10]);
    }
}
