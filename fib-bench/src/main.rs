use std::io;

use clap::Parser;
use fib_bench::{config, runner, Config};
use tracing_subscriber::EnvFilter;

/// Times four ways of computing the n-th Fibonacci number.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Fibonacci index to compute.
    #[arg(short = 'n', long, default_value_t = config::INDEX_DEFAULT)]
    index: u32,

    /// Skip the naive recursive algorithm at or above this index.
    #[arg(long, default_value_t = config::RECURSION_LIMIT_DEFAULT)]
    recursion_limit: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config {
        index: cli.index,
        recursion_limit: cli.recursion_limit,
    };

    runner::run(&config, &mut io::stdout().lock())?;

    Ok(())
}
