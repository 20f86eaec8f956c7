//! Module to instantiate a ranked index from a configuration file.
//!
//! Configuration file/strings are a way to instantiate ranked indexes
//! ranked by one of the stock [policies](../policy/index.html).
//! They describe indexes using the [`toml`](https://toml.io/en/)
//! format:
//! ```
//! use ranked_index::config::RankedIndexConfig;
//!
//! let config_str = "
//! id='RankedIndexConfig'
//! capacity=3
//! policy.kind='Lrfu'
//! policy.exponent=2.0
//! ";
//! let mut index = RankedIndexConfig::from_string(config_str)
//!     .unwrap()
//!     .build::<u64>();
//! assert!(index.update_and_rank(7));
//! assert_eq!(index.capacity(), 3);
//! ```
//!
//! See [`RankedIndexConfig`] for the description of each field.

/// Trait used to instantiate a configuration object from a toml
/// configuration.
///
/// The resulting configuration object obtained with the
/// [`from_toml()`](trait.ConfigInstance.html#tymethod.from_toml) method
/// can later be used to create a ranked index after checking that the
/// parsed configuration was valid.
pub trait ConfigInstance {
    /// The value of the `id` field identifying this configuration.
    fn id() -> &'static str;

    /// Method to create this configuration from a parsed toml
    /// [`toml::Value`].
    ///
    /// This method returns either Self on success to parse input toml into
    /// a valid configuration or an Error describing what went wrong.
    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError>
    where
        Self: Sized;
}

/// Builders that can be converted into a configuration object.
pub trait IntoConfig<C: ConfigInstance> {
    fn as_config(&self) -> C;
}

mod error;
pub use error::ConfigError;
pub use crate::policy::config::{IntoPolicyKind, PolicyKind};
pub use crate::ranked::config::{DynRankedIndex, RankedIndexConfig};
