#[allow(clippy::module_inception)]
mod profiler;
pub use profiler::{Profiler, ProfilerOutputKind};
mod stats;
use stats::Stats;
mod rank;
pub(crate) mod builder;
