//! Entropy source abstraction.
//!
//! In production the adapter draws from the thread-local generator. For
//! reproducible runs a seeded generator is injected, and tests inject stubs.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Anything able to produce a uniform `f64` in `[0.0, 1.0)` on demand.
///
/// The adapter never checks the returned value. A source that strays outside
/// the half-open unit interval gets out-of-range results back, and thread
/// safety is entirely up to the implementation.
pub trait EntropySource {
    /// Draw the next uniform float in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Production source that delegates to `rand`'s thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSource;

impl EntropySource for SystemSource {
    fn next_f64(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Adapts any `rand` generator into an [`EntropySource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    inner: R,
}

impl<R: RngCore> RngSource<R> {
    /// Wrap an existing generator.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Unwrap the underlying generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RngCore> EntropySource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

/// Reproducible source backed by `StdRng`.
pub type SeededSource = RngSource<StdRng>;

impl SeededSource {
    /// Create with a specific seed. Equal seeds yield equal draw sequences.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}
