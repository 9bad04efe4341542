//! Contains containers which are used by the engine.
mod keyed_vec;

pub use keyed_vec::*;
