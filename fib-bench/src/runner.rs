//! Drives the four algorithms through the timing harness.

use std::io::{self, Write};

use fib_bench_core::Algorithm;
use tracing::debug;

use crate::{
    config::Config,
    timer::{self, Timing},
};

type Result<T, E = Error> = std::result::Result<T, E>;

/// The error returned when a benchmark run cannot complete.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compute(#[from] fib_bench_core::Error),
    #[error("failed to write benchmark report")]
    Report(#[from] io::Error),
}

/// The outcome of one benchmarked algorithm invocation.
#[derive(Clone, Copy, Debug)]
pub struct Report {
    pub algorithm: Algorithm,
    pub value: i64,
    pub timing: Timing,
}

/// Benchmarks every algorithm against `config.index`, writing each run's
/// report to `out`.
///
/// The naive recursive algorithm is skipped when the index is at or above
/// `config.recursion_limit`; the remaining algorithms always run. Each
/// benchmarked call writes a blank line, then `<algorithm>: <value>` from
/// inside the timed closure, then the harness's elapsed-time line. The
/// returned reports are in invocation order and omit skipped algorithms.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Vec<Report>> {
    let mut reports = Vec::with_capacity(Algorithm::ALL.len());

    for algorithm in Algorithm::ALL {
        if algorithm == Algorithm::Recursive && config.index >= config.recursion_limit {
            debug!(
                index = config.index,
                recursion_limit = config.recursion_limit,
                "skipping naive recursion"
            );
            continue;
        }

        let (outcome, timing) = timer::time(|| -> Result<i64> {
            writeln!(out)?;
            let value = algorithm.compute(config.index)?;
            writeln!(out, "{algorithm}: {value}")?;
            Ok(value)
        });
        let value = outcome?;
        writeln!(out, "{timing}")?;

        reports.push(Report {
            algorithm,
            value,
            timing,
        });
    }

    Ok(reports)
}
