use super::Stats;
use std::fs::File;
use std::io::Write;

macro_rules! write_it {
    ($struct:expr, $field:ident, $prefix:ident, $out:ident) => {
        let (n, time) = $struct.$field.read();
        writeln!($out, "{}{} {} {}", $prefix, stringify!($field), n, time)?;
    };
}

/// Possible ways of printing output stats when a `Profiler` is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfilerOutputKind {
    /// No output is printed.
    None,
    /// Output is printed to stdout.
    Stdout,
    /// Output is printed to a file of the given name.
    File(String),
}

/// [`Rank`](trait.Rank.html) wrapper collecting updates, rank lookups and
/// statistics about methods access time.
///
/// The resulting profiled statistics is dumped when the [`Profiler`] is
/// dropped. The destination where to write the dump is specified by a
/// [`ProfilerOutputKind`] enum. It can be either `stdout`, a file or
/// nothing. Each statistic is written on its own line as:
/// `<name> <statistic> <count> <nanoseconds>`.
///
/// When using the [`Profiler`] wrapper, the following events are counted:
/// * The number of calls and time spent in methods
/// [`update_and_rank()`](trait.Rank.html#tymethod.update_and_rank),
/// [`ranked_at()`](trait.Rank.html#tymethod.ranked_at) and
/// [`get()`](trait.Rank.html#tymethod.get),
/// * `created`: updates of a key seen for the first time,
/// * `entered`: updates after which the key is ranked,
/// * `rejected`: updates after which the key is not ranked,
/// * `evicted`: updates that pushed another key out of a full ranking,
/// * `invalid_index`: calls to
/// [`ranked_at()`](trait.Rank.html#tymethod.ranked_at) past the ranked
/// values.
///
/// Everything is counted in an atomic type such that statistics can be
/// collected from methods borrowing the wrapper immutably.
///
/// ## Examples
///
/// ```
/// use ranked_index::{BoundedRankedIndex, Profiler, ProfilerOutputKind, Rank};
/// use ranked_index::policy::Frequency;
///
/// // Build an index:
/// let c = BoundedRankedIndex::new(1, Frequency::new());
///
/// // Wrap it into a profiler.
/// let mut c = Profiler::new("example", ProfilerOutputKind::None, c);
///
/// c.update_and_rank("first");
/// c.update_and_rank("second");
/// c.update_and_rank("second");
/// assert_eq!(c.update_and_rank_stats().0, 3);
/// assert_eq!(c.created_stats(), 2);
/// assert_eq!(c.entered_stats(), 2);
/// assert_eq!(c.rejected_stats(), 1);
/// assert_eq!(c.evicted_stats(), 1);
///
/// // Look past the ranked values.
/// assert!(c.ranked_at(1).is_err());
/// assert_eq!(c.invalid_index_stats(), 1);
/// ```
pub struct Profiler<R> {
    pub(super) inner: R,
    pub(super) name: String,
    pub(super) output: ProfilerOutputKind,
    pub(super) stats: Stats,
}

impl<R> Drop for Profiler<R> {
    fn drop(&mut self) {
        match &self.output {
            ProfilerOutputKind::None => {}
            ProfilerOutputKind::Stdout => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                if let Err(e) = self.write_stats(&mut out) {
                    eprintln!("Failed to write profiler stats.\n{:?}", e);
                }
            }
            ProfilerOutputKind::File(s) => match File::create(s) {
                Ok(mut f) => {
                    if let Err(e) = self.write_stats(&mut f) {
                        println!(
                            "Failed to write profiler stats to file: {}.\n{:?}",
                            s, e
                        )
                    }
                }
                Err(e) => {
                    println!(
                        "Failed to open file for writing: {}.\n{:?}",
                        s, e
                    )
                }
            },
        }
    }
}

impl<R> Profiler<R> {
    /// Wrap a ranked index into a `Profiler`.
    pub fn new(name: &str, output: ProfilerOutputKind, inner: R) -> Self {
        Profiler {
            inner,
            name: String::from(name),
            output,
            stats: Stats::new(),
        }
    }

    /// Get the wrapped ranked index.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Write one line per statistic in `out`.
    pub fn write_stats<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let mut prefix = self.name.clone();
        prefix.push(' ');
        write_it!(self.stats, update_and_rank, prefix, out);
        write_it!(self.stats, ranked_at, prefix, out);
        write_it!(self.stats, get, prefix, out);
        write_it!(self.stats, created, prefix, out);
        write_it!(self.stats, entered, prefix, out);
        write_it!(self.stats, rejected, prefix, out);
        write_it!(self.stats, evicted, prefix, out);
        write_it!(self.stats, invalid_index, prefix, out);
        Ok(())
    }

    /// Reset every statistic to 0.
    pub fn reset(&mut self) {
        self.stats.reset()
    }

    /// Get a summary of (0) the number of
    /// [`update_and_rank()`](trait.Rank.html#tymethod.update_and_rank)
    /// method calls and (1) the total time spent in nanoseconds in these
    /// calls.
    pub fn update_and_rank_stats(&self) -> (u64, u64) {
        self.stats.update_and_rank.read()
    }

    /// Get a summary of (0) the number of
    /// [`ranked_at()`](trait.Rank.html#tymethod.ranked_at) method calls
    /// and (1) the total time spent in nanoseconds in these calls.
    pub fn ranked_at_stats(&self) -> (u64, u64) {
        self.stats.ranked_at.read()
    }

    /// Get a summary of (0) the number of
    /// [`get()`](trait.Rank.html#tymethod.get) method calls
    /// and (1) the total time spent in nanoseconds in these calls.
    pub fn get_stats(&self) -> (u64, u64) {
        self.stats.get.read()
    }

    /// Number of updates of keys seen for the first time.
    pub fn created_stats(&self) -> u64 {
        self.stats.created.read().0
    }

    /// Number of updates after which the key was ranked.
    pub fn entered_stats(&self) -> u64 {
        self.stats.entered.read().0
    }

    /// Number of updates after which the key was not ranked.
    pub fn rejected_stats(&self) -> u64 {
        self.stats.rejected.read().0
    }

    /// Number of updates that pushed a value out of the ranking.
    pub fn evicted_stats(&self) -> u64 {
        self.stats.evicted.read().0
    }

    /// Number of rank lookups past the ranked values.
    pub fn invalid_index_stats(&self) -> u64 {
        self.stats.invalid_index.read().0
    }
}
