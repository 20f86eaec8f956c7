use super::{Profiler, ProfilerOutputKind};
use crate::builder::Build;
use std::marker::PhantomData;

/// `Profiler` builder.
///
/// This builder wraps the ranked index spawned by another builder into a
/// [`Profiler`](../struct.Profiler.html).
/// It is obtained with
/// [`RankedIndexBuilder::profile()`](struct.RankedIndexBuilder.html#method.profile).
pub struct ProfilerBuilder<C, B: Build<C>> {
    name: String,
    output: ProfilerOutputKind,
    builder: B,
    unused: PhantomData<C>,
}

impl<C, B: Build<C>> ProfilerBuilder<C, B> {
    pub fn new(name: &str, output: ProfilerOutputKind, builder: B) -> Self {
        ProfilerBuilder {
            name: String::from(name),
            output,
            builder,
            unused: PhantomData,
        }
    }
}

impl<C, B: Build<C> + Clone> Clone for ProfilerBuilder<C, B> {
    fn clone(&self) -> Self {
        ProfilerBuilder {
            name: self.name.clone(),
            output: self.output.clone(),
            builder: self.builder.clone(),
            unused: PhantomData,
        }
    }
}

impl<C, B: Build<C>> Build<Profiler<C>> for ProfilerBuilder<C, B> {
    fn build(self) -> Profiler<C> {
        Profiler::new(self.name.as_str(), self.output, self.builder.build())
    }
}
