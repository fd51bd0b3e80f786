//! One-value-at-a-time reference loop.
//!
//! This is the oracle the batched variants are checked against: no lanes,
//! no refills, just the plain recurrence on a single value.

use crate::error::{iteration_limit, Result};

/// Number of Collatz steps to carry `x` to 1.
///
/// `x` must be positive; a nonpositive value never reaches 1 and the loop
/// would not terminate.
#[inline(always)]
pub fn steps(x: i64) -> i64 {
    debug_assert!(x > 0, "Starting value must be positive");

    let mut x = x;
    let mut n = 0;
    while x != 1 {
        x = if x % 2 == 0 { x / 2 } else { 3 * x + 1 };
        n += 1;
    }
    n
}

/// Like [`steps`], but gives up once `limit` iterations have been taken.
///
/// Useful when probing values far beyond the verified range, where a
/// diverging trajectory (should one exist) would otherwise spin forever.
pub fn steps_bounded(x: i64, limit: i64) -> Result<i64> {
    debug_assert!(x > 0, "Starting value must be positive");

    let mut v = x;
    let mut n = 0;
    while v != 1 {
        if n == limit {
            return Err(iteration_limit(x, limit));
        }
        v = if v % 2 == 0 { v / 2 } else { 3 * v + 1 };
        n += 1;
    }
    Ok(n)
}
