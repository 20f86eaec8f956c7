use super::BoundedRankedIndex;
use crate::builder::RankedIndexBuilder;
use crate::config::{
    ConfigError, ConfigInstance, IntoConfig, IntoPolicyKind, PolicyKind,
};
use crate::policy::{Lrfu, Tally, ValuePolicy};
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Ranked index built from a configuration.
///
/// The policy is only known at runtime, hence it lives behind a trait
/// object and values are always [`Tally`](../policy/struct.Tally.html).
pub type DynRankedIndex<K> =
    BoundedRankedIndex<K, Tally<K>, Box<dyn ValuePolicy<K, Tally<K>>>>;

/// Configuration format for
/// [`BoundedRankedIndex`](../struct.BoundedRankedIndex.html).
///
/// This configuration format is composed of three key/value fields that
/// must be present:
/// - `id = "RankedIndexConfig"`,
/// - `capacity = <int>`, the maximum number of ranked values, at least 1,
/// - `policy.kind = <string>`, one of the [`PolicyKind`] variants
/// (`"Frequency"`, `"Lru"` or `"Lrfu"`). The `"Lrfu"` policy additionally
/// requires a `policy.exponent = <float>` field strictly greater than 0.
///
/// ```
/// use ranked_index::config::RankedIndexConfig;
///
/// let config_str = "
/// id = 'RankedIndexConfig'
/// capacity = 10
/// policy.kind = 'Frequency'
/// ";
/// let index = RankedIndexConfig::from_string(config_str)
///     .unwrap()
///     .build::<String>();
/// assert_eq!(index.capacity(), 10);
/// ```
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct RankedIndexConfig {
    #[allow(dead_code)]
    id: String,
    capacity: usize,
    policy: PolicyKind,
}

impl RankedIndexConfig {
    pub fn new(capacity: usize, policy: PolicyKind) -> Self {
        RankedIndexConfig {
            id: String::from(Self::id()),
            capacity,
            policy,
        }
    }

    /// Read a configuration from a toml string.
    pub fn from_string(s: &str) -> Result<Self, ConfigError> {
        let value: toml::Value = toml::from_str(s)?;
        Self::from_toml(&value)
    }

    /// Read a configuration from a toml file.
    pub fn from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path)?;
        Self::from_string(s.as_str())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// Build the ranked index described by this configuration.
    ///
    /// ## Panics
    ///
    /// If the configuration was not obtained from
    /// [`from_toml()`](../config/trait.ConfigInstance.html#tymethod.from_toml)
    /// and holds a capacity of 0 or an invalid
    /// [`Lrfu`](../policy/struct.Lrfu.html) exponent.
    pub fn build<K: 'static + Eq + Hash + Clone>(self) -> DynRankedIndex<K> {
        BoundedRankedIndex::new(self.capacity, self.policy.into_policy())
    }
}

impl ConfigInstance for RankedIndexConfig {
    fn id() -> &'static str {
        "RankedIndexConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let table = match value {
            toml::Value::Table(t) => t,
            _ => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Ranked index configuration must be a toml table.",
                )))
            }
        };

        match table.get("id").and_then(|id| id.as_str()) {
            Some(id) if id == Self::id() => {}
            Some(id) => {
                return Err(ConfigError::ConfigFormatError(format!(
                    "Invalid configuration id: {}. Expected: {}.",
                    id,
                    Self::id()
                )))
            }
            None => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Configuration must have a string 'id' field.",
                )))
            }
        }

        let config: RankedIndexConfig = value.clone().try_into()?;

        if config.capacity == 0 {
            return Err(ConfigError::ConfigFormatError(format!(
                "Invalid RankedIndexConfig: capacity must be at least 1.\n{}",
                value
            )));
        }
        if let PolicyKind::Lrfu(exponent) = config.policy {
            if !Lrfu::is_valid_exponent(exponent) {
                return Err(ConfigError::ConfigFormatError(format!(
                    "Invalid Lrfu exponent {}: must be finite and greater than 0.",
                    exponent
                )));
            }
        }
        Ok(config)
    }
}

impl<K, V, P: IntoPolicyKind> IntoConfig<RankedIndexConfig>
    for RankedIndexBuilder<K, V, P>
{
    fn as_config(&self) -> RankedIndexConfig {
        RankedIndexConfig::new(self.capacity, self.policy.as_kind())
    }
}
