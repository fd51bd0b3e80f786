//! Batched computation of Collatz step counts.
//!
//! This module turns a sequence of independent scalar recurrences into a
//! lane-parallel computation. Each Collatz trajectory is a serial chain of
//! data-dependent steps, but distinct starting values never interact, so the
//! engine holds [`engine::LANE_COUNT`] trajectories in flight at once and
//! advances them with fixed-width inner loops that auto-vectorize into
//! packed integer instructions.
//!
//! # Layout
//!
//! - [`engine`] - the drive-to-convergence-and-refill loop and its entry
//!   point, [`engine::advance_all`].
//! - [`variant`] - the closed set of inner-loop policies ([`variant::Variant`]).
//! - [`scalar`] - the one-value reference loop used as test oracle.
//! - [`traits`] - [`traits::CollatzSteps`], the slice/array front-end.
//!
//! # Usage Example
//!
//! ```rust
//! use collatzly::{CollatzSteps, Variant};
//!
//! let input: Vec<i64> = vec![27, 97, 871, 6171];
//! let counts = input
//!     .as_slice()
//!     .batch_steps(Variant::BatchedGuarded { inner_repeat: 16 })
//!     .unwrap();
//! assert_eq!(counts, vec![111, 118, 178, 261]);
//! ```
//!
//! # Execution model
//!
//! Single-threaded and synchronous: the batching is data-level pipelining
//! inside one call, not task concurrency. The lane work set is a handful of
//! stack arrays owned by the call frame; the caller owns both sequences and
//! nothing is retained between calls.

pub mod engine;
pub mod scalar;
pub mod traits;
pub mod variant;
