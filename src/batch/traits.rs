//! Slice and array front-ends for the engine.

use ndarray::Array1;

use crate::batch::engine::advance_all;
use crate::batch::scalar;
use crate::batch::variant::Variant;
use crate::error::Result;

/// Per-element Collatz step counts over a sequence of starting values.
pub trait CollatzSteps {
    type Output;

    /// Counts steps for every element with the lane-batched engine.
    fn batch_steps(self, variant: Variant) -> Result<Self::Output>;

    /// Counts steps one element at a time; the reference implementation.
    fn scalar_steps(self) -> Self::Output;
}

impl CollatzSteps for &[i64] {
    type Output = Vec<i64>;

    #[inline(always)]
    fn batch_steps(self, variant: Variant) -> Result<Vec<i64>> {
        let mut output = vec![0i64; self.len()];
        advance_all(self, &mut output, variant)?;
        Ok(output)
    }

    #[inline(always)]
    fn scalar_steps(self) -> Vec<i64> {
        self.iter().map(|&x| scalar::steps(x)).collect()
    }
}

impl CollatzSteps for &Array1<i64> {
    type Output = Array1<i64>;

    #[inline(always)]
    fn batch_steps(self, variant: Variant) -> Result<Array1<i64>> {
        let mut output = Array1::zeros(self.len());
        let out = output
            .as_slice_mut()
            .expect("Freshly allocated arrays are contiguous");
        match self.as_slice() {
            Some(x) => advance_all(x, out, variant)?,
            // Strided views get compacted before entering the engine
            None => advance_all(&self.to_vec(), out, variant)?,
        }
        Ok(output)
    }

    #[inline(always)]
    fn scalar_steps(self) -> Array1<i64> {
        self.mapv(scalar::steps)
    }
}
