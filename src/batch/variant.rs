//! Inner-loop policies for the batched engine.

/// Shape of the advance pass used by [`advance_all`](crate::batch::engine::advance_all).
///
/// Every variant produces the same step counts; they differ only in how a
/// pass treats converged lanes, which decides how well the pass vectorizes
/// and how often lanes get rebalanced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Advance only lanes still above 1, running `inner_repeat` passes
    /// between harvests to amortize the refill scan. Results are identical
    /// for any `inner_repeat >= 1`.
    BatchedGuarded {
        /// Number of advance passes between two harvest/refill scans.
        inner_repeat: i64,
    },
    /// Single guarded advance fused with an unconditional harvest check per
    /// lane. Exhausted lanes are parked at a 0 sentinel instead of being
    /// tracked with idle flags, so the loop body carries no extra state.
    IdleAsZero,
    /// Advance every lane unconditionally while input remains, then converge
    /// the residue under a guard. The hot loop is branch-free, at the price
    /// of over-counting a lane that already holds 1; inputs containing 1 are
    /// rejected up front for this variant.
    UnguardedTail,
}

impl Default for Variant {
    /// Guarded stepping with one advance pass per harvest.
    fn default() -> Self {
        Variant::BatchedGuarded { inner_repeat: 1 }
    }
}
