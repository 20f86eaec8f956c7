#[allow(clippy::module_inception)]
mod ranked;
pub use ranked::BoundedRankedIndex;
mod rank;
pub(crate) mod builder;
#[cfg(feature = "config")]
pub(crate) mod config;
