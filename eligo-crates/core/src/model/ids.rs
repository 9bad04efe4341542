use std::fmt::Debug;
use std::fmt::Display;

use crate::containers::StorageKey;

/// The identifier of a job; the ordinal of the job in the input list.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobId {
    pub id: u32,
}

impl JobId {
    pub fn new(id: u32) -> Self {
        JobId { id }
    }
}

impl StorageKey for JobId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        JobId { id: index as u32 }
    }
}

impl Debug for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "j{}", self.id)
    }
}

impl Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// The identifier of a machine, in `0..num_machines`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MachineId {
    pub id: u32,
}

impl MachineId {
    pub fn new(id: u32) -> Self {
        MachineId { id }
    }
}

impl StorageKey for MachineId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        MachineId { id: index as u32 }
    }
}

impl Debug for MachineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "m{}", self.id)
    }
}

impl Display for MachineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
