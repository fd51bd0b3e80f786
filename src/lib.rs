//! 🚀 Lane-batched Collatz iteration engine tuned for auto-vectorization.
//!
//! collatzly computes, for each element of a sequence of positive integers,
//! the number of Collatz-map applications (`n -> n/2` if even, else
//! `3n + 1`) needed to reach 1. Instead of walking one trajectory at a time,
//! the engine keeps a vector register's worth of trajectories in flight and
//! advances them together, refilling each lane from the input the moment it
//! converges. The inner loops are written as fixed-width passes over small
//! stack arrays so the compiler turns them into packed integer instructions;
//! the build script enables the best native instruction set it can detect
//! (see [`vector_isa`]).
//!
//! # Quick Start
//!
//! ```rust
//! use collatzly::{CollatzSteps, Variant};
//!
//! let input: Vec<i64> = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let counts = input.as_slice().batch_steps(Variant::default()).unwrap();
//! assert_eq!(counts, vec![0, 1, 7, 2, 5, 8, 16, 3]);
//! ```
//!
//! Callers that own both buffers can skip the allocation and drive the
//! engine directly through [`advance_all`].
//!
//! # Variants
//!
//! Three interchangeable inner-loop shapes are exposed through [`Variant`]:
//! guarded stepping with an amortizing repeat count, a fused form that parks
//! exhausted lanes at a 0 sentinel, and a branch-free form that converges
//! its residue in a guarded tail loop. All produce identical counts for
//! valid inputs.
//!
//! # Numeric range
//!
//! All arithmetic is `i64`. Trajectories are assumed to stay in range; a
//! value whose trajectory overflows produces an undefined count, not an
//! error. Inputs must be positive.

pub mod batch;
pub mod error;

pub use batch::engine::{advance_all, LANE_COUNT};
pub use batch::scalar;
pub use batch::traits::CollatzSteps;
pub use batch::variant::Variant;
pub use error::{CollatzError, Result};

/// Instruction set the lane loops were compiled for.
///
/// One of `"avx2"`, `"sse4.1"`, `"neon"` or `"fallback"`, as detected by the
/// build script on the build machine. Cross-compiled builds report
/// `"fallback"`.
pub fn vector_isa() -> &'static str {
    if cfg!(avx2) {
        "avx2"
    } else if cfg!(sse) {
        "sse4.1"
    } else if cfg!(neon) {
        "neon"
    } else {
        "fallback"
    }
}
