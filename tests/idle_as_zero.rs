//! Correctness tests for the 0-sentinel variant.
//!
//! Exhausted lanes are parked at 0 rather than tracked with idle flags;
//! these tests pin down the sentinel bookkeeping around input exhaustion.

use collatzly::{advance_all, CollatzSteps, Variant, LANE_COUNT};

#[test]
fn test_known_scenario() {
    let input: Vec<i64> = (1..=8).collect();
    let mut output = vec![0i64; input.len()];

    advance_all(&input, &mut output, Variant::IdleAsZero).unwrap();

    assert_eq!(output, [0, 1, 7, 2, 5, 8, 16, 3]);
}

#[test]
fn test_input_exactly_one_lane_set() {
    // All lanes park at the sentinel without a single refill.
    let input = [3i64, 5, 6, 7];
    assert_eq!(input.len(), LANE_COUNT);

    let mut output = [0i64; LANE_COUNT];
    advance_all(&input, &mut output, Variant::IdleAsZero).unwrap();

    assert_eq!(output, [7, 5, 8, 16]);
}

#[test]
fn test_input_containing_ones() {
    let input = [1i64, 2, 1, 4, 1, 6, 1, 8];
    let mut output = [0i64; 8];

    advance_all(&input, &mut output, Variant::IdleAsZero).unwrap();

    assert_eq!(output, [0, 1, 0, 2, 0, 8, 0, 3]);
}

#[test]
fn test_all_ones() {
    // Every lane converges immediately and every refill converges too.
    let input = [1i64; 9];
    let mut output = [7i64; 9];

    advance_all(&input, &mut output, Variant::IdleAsZero).unwrap();

    assert_eq!(output, [0i64; 9]);
}

#[test]
fn test_random_inputs_match_scalar_reference() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(1234);
    let input: Vec<i64> = (0..1_000).map(|_| rng.random_range(1..1_000_000)).collect();

    let batch = input.as_slice().batch_steps(Variant::IdleAsZero).unwrap();
    let scalar = input.as_slice().scalar_steps();

    assert_eq!(batch, scalar);
}
