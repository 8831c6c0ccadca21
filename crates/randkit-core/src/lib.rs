//! randkit core: a small random-value surface over an injected source.
//!
//! Application code talks to [`Random`]; where the draws come from is
//! decided once, at construction, by the [`EntropySource`] it is given.
//!
//! ```
//! use randkit_core::{Random, SeededSource};
//!
//! let mut random = Random::with_source(SeededSource::seeded(7));
//! let die = random.integer_in_range(1, 6).unwrap();
//! assert!((1..=6).contains(&die));
//! assert!(random.pick_item(&["rock", "paper", "scissors"]).is_some());
//! ```

pub mod config;
pub mod error;
pub mod random;
pub mod source;

pub use config::{ConfiguredSource, SourceConfig};
pub use error::RandomError;
pub use random::Random;
pub use source::{EntropySource, RngSource, SeededSource, SystemSource};
