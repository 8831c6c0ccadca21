//! Shared test sources for randkit.

mod source;

pub use source::{FixedSource, SequenceSource};
