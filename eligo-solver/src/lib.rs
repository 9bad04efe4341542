//! The Eligo scheduler; see [`eligo_core`] for the library documentation.
pub use eligo_core::*;
