//! The four Fibonacci strategies and their shared input domain.

use std::fmt;

type Result<T, E = Error> = std::result::Result<T, E>;

/// The largest index accepted by every algorithm in this module.
///
/// F(92) is the last Fibonacci number representable in an `i64`, but the
/// paired-accumulator update in the memoized variants computes F(n + 1)
/// alongside F(n) when n is even. 91 is the largest index all four
/// algorithms can reach without overflowing, which keeps their results
/// comparable over the whole accepted domain.
pub const MAX_INDEX: u32 = 91;

/// A strategy for computing the n-th Fibonacci number.
///
/// Variants are ordered the way the benchmark runner invokes them.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Algorithm {
    /// Naive recursion. Exponential time, linear stack depth.
    Recursive,
    /// Array-based iteration. Linear time and space.
    Iterative,
    /// Two-variable iteration over a stepped range. Linear time, constant
    /// space.
    Memoized,
    /// Two-variable iteration over a plain counted range. Same complexity
    /// as [`Memoized`](Algorithm::Memoized) with less loop overhead.
    MemoizedOptimized,
}

impl Algorithm {
    /// Every algorithm, in invocation order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Recursive,
        Algorithm::Iterative,
        Algorithm::Memoized,
        Algorithm::MemoizedOptimized,
    ];

    /// Computes F(`n`) with this strategy.
    pub fn compute(self, n: u32) -> Result<i64> {
        match self {
            Algorithm::Recursive => recursive(n),
            Algorithm::Iterative => iterative(n),
            Algorithm::Memoized => memoized(n),
            Algorithm::MemoizedOptimized => memoized_optimized(n),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Recursive => f.write_str("Recursive"),
            Algorithm::Iterative => f.write_str("Iterative"),
            Algorithm::Memoized => f.write_str("Memoized"),
            Algorithm::MemoizedOptimized => f.write_str("MemoizedOptimized"),
        }
    }
}

/// Computes F(`n`) by naive recursion.
///
/// Every call below the top level is recomputed from scratch, so the running
/// time grows with φⁿ. Kept deliberately unmemoized as the baseline the
/// other strategies are measured against.
pub fn recursive(n: u32) -> Result<i64> {
    check_index(n)?;
    Ok(recurse(n))
}

fn recurse(n: u32) -> i64 {
    if n <= 1 {
        i64::from(n)
    } else {
        recurse(n - 1) + recurse(n - 2)
    }
}

/// Computes F(`n`) by filling a sequence of every term up to `n`.
pub fn iterative(n: u32) -> Result<i64> {
    check_index(n)?;
    if n <= 1 {
        return Ok(i64::from(n));
    }

    let mut seq = Vec::with_capacity(n as usize + 1);
    seq.extend([0_i64, 1]);
    for i in 2..=n as usize {
        let next = seq[i - 1] + seq[i - 2];
        seq.push(next);
    }

    Ok(seq[n as usize])
}

/// Computes F(`n`) keeping only the last two terms, walking the odd indices
/// below `n` with a stepped range.
///
/// After k iterations `a` holds F(2k) and `b` holds F(2k + 1), so the loop
/// runs ⌈(n − 1) / 2⌉ times and the answer is `a` when `n` is even and `b`
/// when `n` is odd.
pub fn memoized(n: u32) -> Result<i64> {
    check_index(n)?;
    if n <= 1 {
        return Ok(i64::from(n));
    }

    let (mut a, mut b) = (0_i64, 1_i64);
    for _ in (1..n).step_by(2) {
        a += b;
        b += a;
    }

    Ok(if n % 2 == 0 { a } else { b })
}

/// Computes F(`n`) like [`memoized`], but drives the accumulator pair with a
/// plain counted loop of `n / 2` rounds instead of a stepped range.
pub fn memoized_optimized(n: u32) -> Result<i64> {
    check_index(n)?;
    if n <= 1 {
        return Ok(i64::from(n));
    }

    let (mut a, mut b) = (0_i64, 1_i64);
    for _ in 1..=n / 2 {
        a += b;
        b += a;
    }

    Ok(if n % 2 == 0 { a } else { b })
}

fn check_index(n: u32) -> Result<()> {
    if n > MAX_INDEX {
        Err(Error::Overflow { n })
    } else {
        Ok(())
    }
}

/// The error returned for an index outside the 64-bit signed domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("fibonacci index {n} overflows a 64-bit signed integer (largest accepted index is {})", MAX_INDEX)]
    Overflow { n: u32 },
}
