//! CLI entry point for fizzbuzz-bench
//!
//! Counts divisibility buckets below a bound and reports how long each
//! rendition of the loop took.

use anyhow::Context;
use clap::Parser;
use log::debug;
use std::io;
use std::process;

use fizzbuzz_bench::config::CliArgs;
use fizzbuzz_bench::{AppConfig, ConfigError, Harness, Variant};

/// Times a divisibility-counting loop across several renditions
#[derive(Parser)]
#[command(name = "fizzbuzz-bench")]
#[command(version, about, long_about = None)]
struct Args {
    /// Exclusive upper bound of the classified range (e.g. 100000)
    #[arg(value_name = "COUNT", allow_negative_numbers = true)]
    count: i64,

    /// Number of independent runs
    #[arg(short, long, default_value_t = 1)]
    runs: usize,

    /// Loop renditions to measure
    #[arg(
        short = 'v',
        long = "variant",
        value_enum,
        value_delimiter = ',',
        default_value = "native"
    )]
    variants: Vec<Variant>,

    /// Measure every rendition (overrides --variant)
    #[arg(long)]
    all: bool,
}

impl From<Args> for CliArgs {
    fn from(args: Args) -> Self {
        Self {
            count: args.count,
            runs: args.runs,
            variants: args.variants,
            all: args.all,
        }
    }
}

fn handle_config_error(error: ConfigError) -> ! {
    eprintln!("{error}");
    process::exit(1);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Args::parse()
        .pipe(CliArgs::from)
        .pipe(AppConfig::from_cli)
        .unwrap_or_else(|error| handle_config_error(error));
    debug!("resolved configuration: {config:?}");

    let mut stdout = io::stdout().lock();
    Harness::new(&config)
        .run(&mut stdout)
        .context("failed to write timing report")?;

    Ok(())
}

/// Helper trait for functional pipeline composition
trait Pipe<T> {
    fn pipe<U, F>(self, f: F) -> U
    where
        F: FnOnce(Self) -> U,
        Self: Sized;
}

impl<T> Pipe<T> for T {
    fn pipe<U, F>(self, f: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        f(self)
    }
}
