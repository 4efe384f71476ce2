use std::io;

use clap::Parser;
use djb2x::harness::{Config, Harness, DEFAULT_PROBES, DEFAULT_SAMPLES};
use djb2x::report::TextReporter;
use djb2x::{avalanche, djb2_xor, sample, throughput};
use tracing_subscriber::EnvFilter;

/// Statistical test harness for the djb2-xor string hash
#[derive(Parser, Debug)]
#[command(name = "djb2x-harness")]
#[command(about = "Distribution, collision, avalanche and speed tests for djb2-xor", long_about = None)]
struct Args {
    /// Samples (and buckets) for the distribution test
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Samples for the collision test
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    collision_samples: usize,

    /// Hashes timed by the speed test
    #[arg(short = 'm', long, default_value_t = throughput::DEFAULT_SAMPLES)]
    throughput_samples: usize,

    /// Input for the avalanche test
    #[arg(short, long, default_value = avalanche::DEFAULT_INPUT)]
    avalanche: String,

    /// Label prefix for generated inputs
    #[arg(short, long, default_value = sample::DEFAULT_PREFIX)]
    prefix: String,

    /// String to hash and print before the tests (repeatable)
    #[arg(long = "probe")]
    probes: Vec<String>,

    /// Random inputs for the avalanche sweep (0 disables it)
    #[arg(long, default_value_t = 1000)]
    sweep_trials: usize,

    /// Print an ASCII histogram of the distribution
    #[arg(long)]
    histogram: bool,

    /// Histogram bars
    #[arg(long, default_value_t = 50)]
    bins: usize,
}

impl Args {
    fn config(&self) -> Config {
        let probes = if self.probes.is_empty() {
            DEFAULT_PROBES.iter().map(|s| s.to_string()).collect()
        } else {
            self.probes.clone()
        };

        Config {
            probes,
            prefix: self.prefix.clone(),
            distribution_samples: self.samples,
            collision_samples: self.collision_samples,
            avalanche_input: self.avalanche.clone(),
            sweep_trials: self.sweep_trials,
            throughput_samples: self.throughput_samples,
            ..Config::default()
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match execute(&args) {
        Ok(_) => {
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exitcode::DATAERR);
        }
    }
}

fn execute(args: &Args) -> Result<(), djb2x::harness::Error> {
    let stdout = io::stdout();
    let mut reporter = TextReporter::new(stdout.lock());
    if args.histogram {
        reporter = reporter.with_histogram(args.bins);
    }

    Harness::new(args.config(), djb2_xor).run(&mut reporter)
}
