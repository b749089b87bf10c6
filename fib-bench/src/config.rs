//! Run configuration.

/// Fibonacci index computed when none is given on the command line.
pub const INDEX_DEFAULT: u32 = 90;

/// Smallest index at which the naive recursive benchmark is skipped.
///
/// Naive recursion is exponential in the index; past this point one
/// invocation would dwarf the rest of the run.
pub const RECURSION_LIMIT_DEFAULT: u32 = 35;

/// Settings for one benchmark run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The Fibonacci index every algorithm computes.
    pub index: u32,

    /// Indices at or above this limit skip the naive recursive algorithm.
    pub recursion_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            index: INDEX_DEFAULT,
            recursion_limit: RECURSION_LIMIT_DEFAULT,
        }
    }
}
