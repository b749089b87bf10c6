//! The timing harness: a monotonic stopwatch around a single closure.

use std::{
    fmt,
    time::{Duration, Instant},
};

const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// One elapsed-time sample captured by [`time`].
///
/// [`Instant`] is monotonic, so the sample is non-negative even if the wall
/// clock is adjusted mid-run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    elapsed: Duration,
}

impl Timing {
    /// The raw elapsed duration.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in milliseconds, keeping sub-millisecond precision.
    #[must_use]
    pub fn as_millis_f64(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / NANOS_PER_MILLI
    }
}

/// The report line emitted after every benchmarked call.
impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Elapsed time: {} milliseconds", self.as_millis_f64())
    }
}

/// Runs `f` to completion, measuring it with a monotonic clock.
///
/// The closure's return value passes through untouched, so fallible
/// operations can be timed and their errors propagated afterwards.
pub fn time<T, F>(f: F) -> (T, Timing)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    (value, Timing { elapsed })
}

/// Times `f` and prints the elapsed-time report to stdout.
pub fn time_execution<F>(f: F)
where
    F: FnOnce(),
{
    let ((), timing) = time(f);
    println!("{timing}");
}
