//! Tracking configuration.

use serde::{Deserialize, Serialize};

use nametrack_core::{DEFAULT_ADDRESS_PREFIX, TrackingResult, parse_prefix, validate_denom};

pub const ENV_EXEMPT_DENOM: &str = "NAMETRACK_EXEMPT_DENOM";
pub const ENV_ADDRESS_PREFIX: &str = "NAMETRACK_ADDRESS_PREFIX";

const DEFAULT_EXEMPT_DENOM: &str = "uluna";

/// Chain parameters the hooks need beyond their collaborators.
///
/// Every replica must run with the same values; they are part of the state
/// transition, not a local preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Native denomination never charged stability tax.
    pub exempt_denom: String,
    /// Bech32 prefix of account addresses found in event attributes.
    pub address_prefix: String,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            exempt_denom: DEFAULT_EXEMPT_DENOM.to_string(),
            address_prefix: DEFAULT_ADDRESS_PREFIX.to_string(),
        }
    }
}

impl TrackingConfig {
    /// Load from `NAMETRACK_*` environment variables, defaulting unset ones.
    pub fn from_env() -> TrackingResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> TrackingResult<Self> {
        let defaults = Self::default();
        let read = |key: &str, default: String| {
            lookup(key).unwrap_or_else(|| {
                tracing::debug!(key, %default, "not set; using default");
                default
            })
        };

        let config = Self {
            exempt_denom: read(ENV_EXEMPT_DENOM, defaults.exempt_denom),
            address_prefix: read(ENV_ADDRESS_PREFIX, defaults.address_prefix),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TrackingResult<()> {
        validate_denom(&self.exempt_denom)?;
        parse_prefix(&self.address_prefix)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use nametrack_core::TrackingError;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_values_fall_back_to_defaults() {
        let config = TrackingConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, TrackingConfig::default());
        assert_eq!(config.exempt_denom, "uluna");
        assert_eq!(config.address_prefix, "terra");
    }

    #[test]
    fn overrides_are_validated() {
        let config = TrackingConfig::from_lookup(lookup(&[
            (ENV_EXEMPT_DENOM, "ustake"),
            (ENV_ADDRESS_PREFIX, "cosmos"),
        ]))
        .unwrap();
        assert_eq!(config.exempt_denom, "ustake");
        assert_eq!(config.address_prefix, "cosmos");

        let err = TrackingConfig::from_lookup(lookup(&[(ENV_EXEMPT_DENOM, "X")])).unwrap_err();
        assert!(matches!(err, TrackingError::InvalidDenom(_)));

        let err = TrackingConfig::from_lookup(lookup(&[(ENV_ADDRESS_PREFIX, "Terra1")])).unwrap_err();
        assert!(matches!(err, TrackingError::InvalidAddress(_)));
    }
}
