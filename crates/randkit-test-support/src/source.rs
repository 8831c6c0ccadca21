//! Deterministic `EntropySource` implementations for tests.

use randkit_core::source::EntropySource;

/// A source that always returns the same value. Suitable for tests that pin
/// a single draw.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub f64);

impl EntropySource for FixedSource {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// A source that returns values from a predetermined sequence. Panics if the
/// sequence is exhausted. Used in tests that need specific, repeatable draws
/// or that assert how many draws an operation took.
#[derive(Debug)]
pub struct SequenceSource {
    values: Vec<f64>,
    index: usize,
}

impl SequenceSource {
    /// Create a new `SequenceSource` with the given values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of draws taken so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl EntropySource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
