//! Lane-batched iteration engine.
//!
//! The Collatz recurrence is a chain of dependent steps, so a single
//! trajectory cannot be vectorized. Independent trajectories can: this
//! engine keeps [`LANE_COUNT`] values in flight inside fixed-width work
//! arrays sized to one vector register, advances them together in a short
//! inner loop the compiler can turn into packed integer instructions, and
//! swaps a fresh input value into a lane the moment its trajectory reaches 1.
//!
//! # Work set
//!
//! Three parallel arrays of length [`LANE_COUNT`] live on the stack for the
//! duration of one call:
//!
//! - `value[lane]` - current trajectory value,
//! - `count[lane]` - steps taken by the value occupying the lane,
//! - `source[lane]` - input position the lane is responsible for.
//!
//! A cursor walks the input from `LANE_COUNT` to `input.len()`; each lane's
//! `source` stays unique among active lanes, so every output slot is written
//! exactly once, by whichever lane carried that input.
//!
//! # Variants
//!
//! The advance/harvest cadence is selected by [`Variant`]: guarded stepping
//! with an amortizing repeat count, the 0-sentinel fused form, or the
//! branch-free form with a guarded tail. All three write identical counts;
//! see the [`Variant`] docs for the trade-offs.

use crate::batch::variant::Variant;
use crate::error::{
    input_too_short, invalid_inner_repeat, length_mismatch, unguarded_one, Result,
};

/// Number of trajectories advanced per inner-loop pass.
///
/// Four 64-bit lanes fill one 256-bit vector register.
pub const LANE_COUNT: usize = 4;

/// Fixed-width work set holding the in-flight trajectories.
struct Lanes {
    value: [i64; LANE_COUNT],
    count: [i64; LANE_COUNT],
    source: [usize; LANE_COUNT],
}

impl Lanes {
    /// Loads the first [`LANE_COUNT`] input values, one per lane.
    #[inline(always)]
    fn load(input: &[i64]) -> Self {
        let mut lanes = Lanes {
            value: [0; LANE_COUNT],
            count: [0; LANE_COUNT],
            source: [0; LANE_COUNT],
        };
        for i in 0..LANE_COUNT {
            lanes.value[i] = input[i];
            lanes.source[i] = i;
        }
        lanes
    }

    /// Replaces the trajectory in `lane` with the input value at `src`.
    #[inline(always)]
    fn refill(&mut self, lane: usize, x: i64, src: usize) {
        self.value[lane] = x;
        self.count[lane] = 0;
        self.source[lane] = src;
    }
}

/// One application of the Collatz map.
#[inline(always)]
fn collatz_step(x: i64) -> i64 {
    if x % 2 == 0 {
        x / 2
    } else {
        3 * x + 1
    }
}

/// Computes the Collatz step count of every input value.
///
/// Writes into `output[i]` the number of Collatz-map applications needed to
/// carry `input[i]` to 1, for every `i`. The output buffer is caller-owned
/// and fully overwritten; there are no other side effects, and no state
/// survives the call.
///
/// # Errors
///
/// - [`InputTooShort`](crate::CollatzError::InputTooShort) if fewer than
///   [`LANE_COUNT`] values are supplied.
/// - [`LengthMismatch`](crate::CollatzError::LengthMismatch) if the output
///   length differs from the input length.
/// - [`InvalidInnerRepeat`](crate::CollatzError::InvalidInnerRepeat) if
///   [`Variant::BatchedGuarded`] is asked for fewer than one advance pass.
/// - [`UnguardedOne`](crate::CollatzError::UnguardedOne) if an input value
///   of 1 is offered to [`Variant::UnguardedTail`], whose branch-free loop
///   would over-count it.
///
/// Input values must be positive (checked in debug builds only) and their
/// trajectories must stay inside `i64`; overflow is neither detected nor
/// corrected.
///
/// # Example
///
/// ```
/// use collatzly::{advance_all, Variant};
///
/// let input: Vec<i64> = (1..=8).collect();
/// let mut output = vec![0i64; input.len()];
/// advance_all(&input, &mut output, Variant::default()).unwrap();
/// assert_eq!(output, [0, 1, 7, 2, 5, 8, 16, 3]);
/// ```
pub fn advance_all(input: &[i64], output: &mut [i64], variant: Variant) -> Result<()> {
    if input.len() < LANE_COUNT {
        return Err(input_too_short(input.len(), LANE_COUNT));
    }
    if output.len() != input.len() {
        return Err(length_mismatch(input.len(), output.len()));
    }
    debug_assert!(
        input.iter().all(|&x| x > 0),
        "Input values must be positive"
    );

    match variant {
        Variant::BatchedGuarded { inner_repeat } => {
            if inner_repeat < 1 {
                return Err(invalid_inner_repeat(inner_repeat));
            }
            run_guarded(input, output, inner_repeat);
        }
        Variant::IdleAsZero => run_idle_as_zero(input, output),
        Variant::UnguardedTail => {
            if let Some(index) = input.iter().position(|&x| x == 1) {
                return Err(unguarded_one(index));
            }
            run_unguarded_tail(input, output);
        }
    }

    Ok(())
}

/// Guarded stepping: `inner_repeat` advance passes between harvests.
///
/// Converged lanes sit at 1 until the next harvest scan; lanes with no
/// replacement left are flagged idle so they are harvested once only.
fn run_guarded(input: &[i64], output: &mut [i64], inner_repeat: i64) {
    let nx = input.len();
    let mut lanes = Lanes::load(input);
    let mut next = LANE_COUNT;
    let mut idle = [false; LANE_COUNT];

    loop {
        for _ in 0..inner_repeat {
            // Fixed-width pass over the lane arrays; the guard becomes a
            // select, not a branch.
            for i in 0..LANE_COUNT {
                if lanes.value[i] > 1 {
                    lanes.value[i] = collatz_step(lanes.value[i]);
                    lanes.count[i] += 1;
                }
            }
        }

        for i in 0..LANE_COUNT {
            if !idle[i] && lanes.value[i] == 1 {
                output[lanes.source[i]] = lanes.count[i];
                if next < nx {
                    lanes.refill(i, input[next], next);
                    next += 1;
                } else {
                    idle[i] = true;
                }
            }
        }

        if next == nx && idle.iter().all(|&done| done) {
            break;
        }
    }
}

/// Fused advance and harvest with a 0 sentinel for exhausted lanes.
///
/// A parked lane fails both the `> 1` and the `== 1` test, so the loop body
/// needs no idle bookkeeping; termination is all lanes at 0.
fn run_idle_as_zero(input: &[i64], output: &mut [i64]) {
    let nx = input.len();
    let mut lanes = Lanes::load(input);
    let mut next = LANE_COUNT;

    loop {
        for i in 0..LANE_COUNT {
            if lanes.value[i] > 1 {
                lanes.value[i] = collatz_step(lanes.value[i]);
                lanes.count[i] += 1;
            }
            if lanes.value[i] == 1 {
                output[lanes.source[i]] = lanes.count[i];
                if next < nx {
                    lanes.refill(i, input[next], next);
                    next += 1;
                } else {
                    // Park the lane so it is neither advanced nor harvested
                    // again.
                    lanes.value[i] = 0;
                }
            }
        }

        if next == nx && lanes.value.iter().all(|&v| v == 0) {
            break;
        }
    }
}

/// Branch-free stepping while input remains, then a guarded tail.
///
/// The hot loop steps every lane unconditionally, so a lane holding 1 would
/// be walked through the 1-4-2-1 cycle and over-counted; [`advance_all`]
/// rejects inputs containing 1 before selecting this path. A lane can only
/// come to rest at 1 in the pass that exhausts the input, and that pass is
/// the last one, so the main loop never re-steps a finished lane.
fn run_unguarded_tail(input: &[i64], output: &mut [i64]) {
    let nx = input.len();
    let mut lanes = Lanes::load(input);
    let mut next = LANE_COUNT;

    loop {
        for i in 0..LANE_COUNT {
            lanes.value[i] = collatz_step(lanes.value[i]);
            lanes.count[i] += 1;
        }

        for i in 0..LANE_COUNT {
            if lanes.value[i] == 1 {
                output[lanes.source[i]] = lanes.count[i];
                if next < nx {
                    lanes.refill(i, input[next], next);
                    next += 1;
                }
            }
        }

        if next == nx {
            break;
        }
    }

    // Input exhausted: finish the residual lanes with the guard back in
    // place. Lanes already at 1 were harvested by the main loop.
    let mut left = lanes.value.iter().filter(|&&v| v != 1).count();
    while left > 0 {
        for i in 0..LANE_COUNT {
            if lanes.value[i] > 1 {
                lanes.value[i] = collatz_step(lanes.value[i]);
                lanes.count[i] += 1;
                if lanes.value[i] == 1 {
                    output[lanes.source[i]] = lanes.count[i];
                    left -= 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collatz_step() {
        assert_eq!(collatz_step(6), 3);
        assert_eq!(collatz_step(3), 10);
        assert_eq!(collatz_step(2), 1);
        assert_eq!(collatz_step(1), 4);
    }

    #[test]
    fn test_lane_load() {
        let lanes = Lanes::load(&[10, 20, 30, 40, 50]);
        assert_eq!(lanes.value, [10, 20, 30, 40]);
        assert_eq!(lanes.count, [0; LANE_COUNT]);
        assert_eq!(lanes.source, [0, 1, 2, 3]);
    }

    #[test]
    fn test_lane_refill() {
        let mut lanes = Lanes::load(&[10, 20, 30, 40]);
        lanes.count[2] = 9;
        lanes.refill(2, 77, 6);
        assert_eq!(lanes.value[2], 77);
        assert_eq!(lanes.count[2], 0);
        assert_eq!(lanes.source[2], 6);
    }

    #[test]
    fn test_input_too_short() {
        let input = [5i64, 6, 7];
        let mut output = [0i64; 3];
        let err = advance_all(&input, &mut output, Variant::default()).unwrap_err();
        assert_eq!(
            err,
            crate::error::CollatzError::InputTooShort { len: 3, lanes: 4 }
        );
    }

    #[test]
    fn test_length_mismatch() {
        let input = [5i64, 6, 7, 8];
        let mut output = [0i64; 3];
        let err = advance_all(&input, &mut output, Variant::default()).unwrap_err();
        assert_eq!(
            err,
            crate::error::CollatzError::LengthMismatch {
                input_len: 4,
                output_len: 3
            }
        );
    }

    #[test]
    fn test_invalid_inner_repeat() {
        let input = [5i64, 6, 7, 8];
        let mut output = [0i64; 4];
        let err = advance_all(
            &input,
            &mut output,
            Variant::BatchedGuarded { inner_repeat: 0 },
        )
        .unwrap_err();
        assert_eq!(
            err,
            crate::error::CollatzError::InvalidInnerRepeat { inner_repeat: 0 }
        );
    }
}
