use ranked_index_benchmarks::{benchmark, RankBenchmarkArgs};

fn main() {
    let matches = RankBenchmarkArgs::app("rank").get_matches();
    let args = RankBenchmarkArgs::from_matches(&matches);
    if let Err(e) = args.validate() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    benchmark(&args);
}
