//! The random adapter.
//!
//! [`Random`] turns the single primitive of an [`EntropySource`] into bounded
//! floats, inclusive integers, coin flips, and picks from slices or strings.
//! It holds nothing but its source, so every result is a pure function of the
//! draw and the arguments.

use tracing::debug;

use crate::error::RandomError;
use crate::source::{EntropySource, SystemSource};

/// How `number_in_range` treats its bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bounds {
    /// Both bounds are numbers; scale the draw into them.
    Numeric { min: f64, max: f64 },
    /// At least one bound is NaN; hand back the raw draw.
    Fallback,
}

impl Bounds {
    fn classify(min: f64, max: f64) -> Self {
        if min.is_nan() || max.is_nan() {
            Self::Fallback
        } else {
            Self::Numeric { min, max }
        }
    }
}

/// Whole, in-order bounds take the same offset-then-clamp path as
/// `integer_in_range`. Anything else gets the plain floor arithmetic.
#[allow(clippy::float_cmp)]
fn rounded_in(u: f64, min: f64, max: f64) -> f64 {
    let whole = min.trunc() == min && max.trunc() == max;
    if whole && min <= max {
        let width = max - min;
        (min + (u * (width + 1.0)).floor().min(width)).min(max)
    } else {
        (u * (max - min + 1.0) + min).floor()
    }
}

/// Random value generator built on an injected [`EntropySource`].
///
/// Each successful call consumes exactly one draw. Calls that are rejected
/// up front (inverted integer range, empty selection) consume none.
///
/// The adapter adds no synchronization. Sharing it across threads is only as
/// safe as the source it wraps.
#[derive(Debug, Clone, Default)]
pub struct Random<S = SystemSource> {
    source: S,
}

impl Random<SystemSource> {
    /// Create an adapter bound to the thread-local system generator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: SystemSource,
        }
    }
}

impl<S: EntropySource> Random<S> {
    /// Create an adapter over the given source.
    ///
    /// Pass `&mut source` to keep ownership at the call site.
    #[must_use]
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Give back the wrapped source.
    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }

    /// One unmodified draw from the source, nominally in `[0.0, 1.0)`.
    pub fn uniform_float(&mut self) -> f64 {
        self.source.next_f64()
    }

    /// Alias of [`Random::uniform_float`].
    pub fn value(&mut self) -> f64 {
        self.uniform_float()
    }

    /// `number_in_range(0.0, 1.0, false)`.
    pub fn number(&mut self) -> f64 {
        self.number_in_range(0.0, 1.0, false)
    }

    /// Scale one draw `u` into the given bounds.
    ///
    /// - If either bound is NaN, `u` is returned as is.
    /// - Unrounded: `u * (max - min) + min`, uniform in `[min, max)`.
    /// - Rounded: `floor(u * (max - min + 1) + min)`. When both bounds are
    ///   whole and `min <= max` the offset is floored and clamped before `min`
    ///   is added, so the result is a whole number in `[min, max]` and matches
    ///   `integer_in_range` for the same draw.
    ///
    /// Bounds with `max < min` are not rejected; the plain arithmetic applies
    /// and the range guarantees above no longer hold.
    pub fn number_in_range(&mut self, min: f64, max: f64, rounded: bool) -> f64 {
        let u = self.uniform_float();
        match Bounds::classify(min, max) {
            Bounds::Fallback => {
                debug!(min, max, "non-numeric bound, returning raw draw");
                u
            }
            Bounds::Numeric { min, max } if rounded => rounded_in(u, min, max),
            Bounds::Numeric { min, max } => u * (max - min) + min,
        }
    }

    /// A uniform integer in `[min, max]`, both ends inclusive.
    ///
    /// Equal to `floor(u * (max - min + 1) + min)`, clamped to `max` so that
    /// float rounding on very wide ranges stays inside the bounds. The whole
    /// `i64` range is accepted.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvertedRange` if `max < min`. No draw is taken.
    pub fn integer_in_range(&mut self, min: i64, max: i64) -> Result<i64, RandomError> {
        if max < min {
            debug!(min, max, "rejecting inverted integer range");
            return Err(RandomError::InvertedRange { min, max });
        }
        let offset = self.offset_up_to(max.abs_diff(min));
        Ok(min.saturating_add_unsigned(offset))
    }

    /// A uniform integer in `[0, max]`, both ends inclusive.
    pub fn unsigned_integer_up_to(&mut self, max: u64) -> u64 {
        self.offset_up_to(max)
    }

    /// `true` when the draw is strictly below one half.
    pub fn boolean(&mut self) -> bool {
        self.uniform_float() < 0.5
    }

    /// A uniformly chosen element, or `None` for an empty slice.
    pub fn pick_item<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let last = u64::try_from(items.len().checked_sub(1)?).ok()?;
        let index = self.unsigned_integer_up_to(last);
        usize::try_from(index).ok().and_then(|i| items.get(i))
    }

    /// A uniformly chosen `char` of `text`, or `None` for an empty string.
    pub fn pick_character(&mut self, text: &str) -> Option<char> {
        let chars: Vec<char> = text.chars().collect();
        self.pick_item(&chars).copied()
    }

    /// `floor(u * (width + 1))`, never above `width`.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn offset_up_to(&mut self, width: u64) -> u64 {
        let u = self.uniform_float();
        let scaled = (u * (width as f64 + 1.0)).floor();
        // Float-to-int casts saturate, so a stray negative draw lands on 0.
        (scaled as u64).min(width)
    }
}
