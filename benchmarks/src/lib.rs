#[macro_use]
extern crate clap;
use clap::{Arg, ArgMatches, Command};
use rand::random;
use ranked_index::policy::{Frequency, Lrfu, Lru, Tally, ValuePolicy};
use ranked_index::{BoundedRankedIndex, Rank};
use std::time::Instant;

/// Policies that can be benchmarked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PolicyArg {
    Frequency,
    Lru,
    Lrfu(f32),
}

impl PolicyArg {
    pub fn name(&self) -> &'static str {
        match self {
            PolicyArg::Frequency => "frequency",
            PolicyArg::Lru => "lru",
            PolicyArg::Lrfu(_) => "lrfu",
        }
    }
}

/// Distribution of the keys fed to the benchmarked index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyPattern {
    /// Every key is equally likely.
    Uniform,
    /// Key `k` is drawn with a probability decreasing with `k`.
    Skewed,
}

impl KeyPattern {
    /// Draw a key in `[0, num_keys)`.
    pub fn next(&self, num_keys: u64) -> u64 {
        match self {
            KeyPattern::Uniform => random::<u64>() % num_keys,
            // Minimum of two uniform draws.
            KeyPattern::Skewed => {
                let a = random::<u64>() % num_keys;
                let b = random::<u64>() % num_keys;
                a.min(b)
            }
        }
    }
}

pub struct RankBenchmarkArgs {
    pub capacity: usize,
    pub keys: u64,
    pub updates: u64,
    pub policy: PolicyArg,
    pub pattern: KeyPattern,
    pub header: bool,
}

fn parse_or<T: std::str::FromStr>(
    matches: &ArgMatches,
    name: &str,
    default: T,
) -> T {
    match matches.value_of(name) {
        None => default,
        Some(s) => match s.parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                eprintln!("Invalid format for arg '{}': {}", name, s);
                std::process::exit(1)
            }
        },
    }
}

impl RankBenchmarkArgs {
    pub fn app(app_name: &str) -> Command {
        Command::new(app_name)
            .version(crate_version!())
            .about("Measure the update time of a ranked index.")
            .arg(
                Arg::new("capacity")
                    .short('c')
                    .help("Maximum number of ranked values.")
                    .takes_value(true),
            )
            .arg(
                Arg::new("keys")
                    .short('k')
                    .help("Number of distinct keys to draw from.")
                    .takes_value(true),
            )
            .arg(
                Arg::new("updates")
                    .short('n')
                    .help("Number of updates to measure.")
                    .takes_value(true),
            )
            .arg(
                Arg::new("policy")
                    .short('p')
                    .help("Ranking policy.")
                    .takes_value(true)
                    .possible_values(["frequency", "lru", "lrfu"]),
            )
            .arg(
                Arg::new("exponent")
                    .short('e')
                    .help("Decay exponent of the lrfu policy.")
                    .takes_value(true),
            )
            .arg(
                Arg::new("skewed")
                    .short('s')
                    .help("Draw low keys more often than high keys.")
                    .takes_value(false),
            )
            .arg(
                Arg::new("with-header")
                    .short('t')
                    .help("Whether or not to print benchmark header.")
                    .takes_value(false),
            )
    }

    pub fn from_matches(matches: &ArgMatches) -> Self {
        let policy = match matches.value_of("policy").unwrap_or("frequency") {
            "lru" => PolicyArg::Lru,
            "lrfu" => PolicyArg::Lrfu(parse_or(matches, "exponent", 2.0f32)),
            _ => PolicyArg::Frequency,
        };
        RankBenchmarkArgs {
            capacity: parse_or(matches, "capacity", 100usize),
            keys: parse_or(matches, "keys", 10000u64),
            updates: parse_or(matches, "updates", 1000000u64),
            policy,
            pattern: if matches.is_present("skewed") {
                KeyPattern::Skewed
            } else {
                KeyPattern::Uniform
            },
            header: matches.is_present("with-header"),
        }
    }
}

impl RankBenchmarkArgs {
    /// Check that the arguments describe an index that can be built.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 || self.keys == 0 {
            return Err(String::from(
                "Capacity and number of keys must be at least 1.",
            ));
        }
        if let PolicyArg::Lrfu(e) = self.policy {
            if !Lrfu::is_valid_exponent(e) {
                return Err(format!(
                    "Invalid lrfu exponent {}: must be finite and > 0.",
                    e
                ));
            }
        }
        Ok(())
    }
}

/// Result of one benchmark run.
pub struct Record {
    pub entered: u64,
    pub elapsed_nanos: u128,
}

/// Feed `updates` random keys to `index` and time the updates.
pub fn run<R: Rank<u64, Tally<u64>>>(
    index: &mut R,
    keys: u64,
    updates: u64,
    pattern: KeyPattern,
) -> Record {
    let draws: Vec<u64> = (0..updates).map(|_| pattern.next(keys)).collect();
    let mut entered = 0u64;
    let t0 = Instant::now();
    for key in draws {
        if index.update_and_rank(key) {
            entered += 1;
        }
    }
    Record {
        entered,
        elapsed_nanos: t0.elapsed().as_nanos(),
    }
}

fn run_with<P: ValuePolicy<u64, Tally<u64>>>(
    args: &RankBenchmarkArgs,
    policy: P,
) -> Record {
    let mut index = BoundedRankedIndex::new(args.capacity, policy);
    run(&mut index, args.keys, args.updates, args.pattern)
}

/// Run the benchmark described by `args` and print one csv line.
pub fn benchmark(args: &RankBenchmarkArgs) {
    let record = match args.policy {
        PolicyArg::Frequency => run_with(args, Frequency::new()),
        PolicyArg::Lru => run_with(args, Lru::new()),
        PolicyArg::Lrfu(e) => run_with(args, Lrfu::new(e)),
    };
    if args.header {
        println!("policy,capacity,keys,updates,entered,nanos_per_update");
    }
    let per_update = if args.updates == 0 {
        0f64
    } else {
        record.elapsed_nanos as f64 / args.updates as f64
    };
    println!(
        "{},{},{},{},{},{:.2}",
        args.policy.name(),
        args.capacity,
        args.keys,
        args.updates,
        record.entered,
        per_update
    );
}
