//! Builder pattern to assemble ranked indexes.
//!
//! A builder holds the parameters of a ranked index and can be consumed
//! with the [`Build`] trait to produce it.
//! Builders can be chained to wrap the index they build, for instance into
//! a [`Profiler`](../struct.Profiler.html):
//!
//! ```
//! use ranked_index::Rank;
//! use ranked_index::builder::{Build, RankedIndexBuilder};
//! use ranked_index::policy::Frequency;
//! use ranked_index::ProfilerOutputKind;
//!
//! let mut c = RankedIndexBuilder::new(10, Frequency::new())
//!     .profile("example", ProfilerOutputKind::None)
//!     .build();
//! c.update_and_rank("a");
//! assert_eq!(c.entered_stats(), 1);
//! ```

/// Consume a builder into the container it describes.
pub trait Build<C> {
    fn build(self) -> C;
}

pub use crate::profiler::builder::ProfilerBuilder;
pub use crate::ranked::builder::RankedIndexBuilder;
