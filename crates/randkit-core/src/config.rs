//! Source configuration.
//!
//! Decides, once at construction, whether draws come from the system
//! generator or from a seeded one.

use serde::Deserialize;
use tracing::debug;

use crate::error::RandomError;
use crate::random::Random;
use crate::source::{EntropySource, SeededSource, SystemSource};

/// Environment variable holding an optional `u64` seed.
pub const SEED_ENV_VAR: &str = "RANDKIT_SEED";

/// Which entropy source to bind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Seed for a reproducible source. `None` selects the system source.
    pub seed: Option<u64>,
}

impl SourceConfig {
    /// Configuration with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Read the configuration from `RANDKIT_SEED`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::Config` if the variable is set but is not a
    /// valid `u64`.
    pub fn from_env() -> Result<Self, RandomError> {
        Self::from_seed_var(std::env::var(SEED_ENV_VAR).ok().as_deref())
    }

    /// Interpret the raw value of the seed variable. Unset or blank means
    /// no seed.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::Config` if `raw` is not blank and not a `u64`.
    pub fn from_seed_var(raw: Option<&str>) -> Result<Self, RandomError> {
        let seed = match raw.map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(value.parse::<u64>().map_err(|e| {
                RandomError::Config(format!("{SEED_ENV_VAR} must be a valid u64: {e}"))
            })?),
        };
        Ok(Self { seed })
    }

    /// Build the configured source.
    #[must_use]
    pub fn build(&self) -> ConfiguredSource {
        match self.seed {
            Some(seed) => {
                debug!(seed, "binding seeded entropy source");
                ConfiguredSource::Seeded(SeededSource::seeded(seed))
            }
            None => {
                debug!("binding system entropy source");
                ConfiguredSource::System(SystemSource)
            }
        }
    }
}

/// A source chosen at runtime by [`SourceConfig`].
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    /// Thread-local system generator.
    System(SystemSource),
    /// Reproducible generator.
    Seeded(SeededSource),
}

impl EntropySource for ConfiguredSource {
    fn next_f64(&mut self) -> f64 {
        match self {
            Self::System(source) => source.next_f64(),
            Self::Seeded(source) => source.next_f64(),
        }
    }
}

impl Random<ConfiguredSource> {
    /// Create an adapter bound to whatever `config` selects.
    #[must_use]
    pub fn from_config(config: &SourceConfig) -> Self {
        Self::with_source(config.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_or_blank_seed_selects_system_source() {
        assert_eq!(SourceConfig::from_seed_var(None), Ok(SourceConfig::default()));
        assert_eq!(SourceConfig::from_seed_var(Some("  ")), Ok(SourceConfig::default()));
        assert!(matches!(
            SourceConfig::default().build(),
            ConfiguredSource::System(_)
        ));
    }

    #[test]
    fn test_numeric_seed_is_parsed() {
        assert_eq!(
            SourceConfig::from_seed_var(Some(" 1234 ")),
            Ok(SourceConfig::seeded(1234))
        );
    }

    #[test]
    fn test_invalid_seed_returns_config_error() {
        match SourceConfig::from_seed_var(Some("-7")) {
            Err(RandomError::Config(msg)) => {
                assert!(msg.starts_with("RANDKIT_SEED must be a valid u64"), "{msg}");
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_seeded_config_matches_seeded_source() {
        let mut configured = SourceConfig::seeded(99).build();
        let mut direct = SeededSource::seeded(99);
        for _ in 0..16 {
            assert_eq!(configured.next_f64().to_bits(), direct.next_f64().to_bits());
        }
    }

    #[test]
    fn test_from_config_is_reproducible() {
        let config = SourceConfig::seeded(5);
        let mut a = Random::from_config(&config);
        let mut b = Random::from_config(&config);
        for _ in 0..16 {
            assert_eq!(a.integer_in_range(1, 100), b.integer_in_range(1, 100));
        }
    }

    #[test]
    fn test_deserializes_from_json() {
        let config: SourceConfig = serde_json::from_str(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(config, SourceConfig::seeded(42));

        let empty: SourceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.seed, None);

        assert!(serde_json::from_str::<SourceConfig>(r#"{ "sead": 1 }"#).is_err());
    }
}
