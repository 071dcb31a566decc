//! Structure-of-Arrays gradient buffer.
//!
//! Provides a [`GradientBuffer`] that stores per-sample gradients and
//! hessians in separate contiguous arrays rather than interleaved
//! [`GradientPair`](crate::GradientPair) structs.
//!
//! Separate `grads[]` and `hess[]` arrays keep gradient-only passes on one
//! cache line stream and leave the loops free for auto-vectorization. SSE
//! is a single-output loss, so the buffer holds exactly one gradient and
//! one hessian per sample.

use num_traits::Float;

use crate::gradient::GradientPair;

/// Structure-of-Arrays gradient buffer.
///
/// Stores gradients and hessians in separate contiguous arrays for better
/// cache efficiency and SIMD-friendly access patterns.
///
/// # Example
///
/// ```
/// use gbloss::GradientBuffer;
///
/// let mut buffer = GradientBuffer::<f64>::new(100);
///
/// buffer.set(0, -0.5, 1.0);
///
/// let (grad, hess) = buffer.get(0);
/// assert_eq!(grad, -0.5);
/// assert_eq!(hess, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct GradientBuffer<F: Float> {
    /// Gradient values (∂L/∂pred).
    grads: Vec<F>,
    /// Hessian values (∂²L/∂pred²).
    hess: Vec<F>,
}

impl<F: Float> GradientBuffer<F> {
    /// Create a new gradient buffer initialized to zeros.
    ///
    /// # Panics
    ///
    /// Panics if `n_samples` is zero.
    pub fn new(n_samples: usize) -> Self {
        assert!(n_samples > 0, "n_samples must be positive");

        Self {
            grads: vec![F::zero(); n_samples],
            hess: vec![F::zero(); n_samples],
        }
    }

    /// Number of samples in the buffer.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.grads.len()
    }

    /// Reset all gradients and hessians to zero.
    pub fn reset(&mut self) {
        self.grads.fill(F::zero());
        self.hess.fill(F::zero());
    }

    /// Get gradient and hessian for a sample.
    #[inline]
    pub fn get(&self, sample: usize) -> (F, F) {
        (self.grads[sample], self.hess[sample])
    }

    /// Set gradient and hessian for a sample.
    #[inline]
    pub fn set(&mut self, sample: usize, grad: F, hess: F) {
        self.grads[sample] = grad;
        self.hess[sample] = hess;
    }

    /// Immutable views of the gradient and hessian arrays.
    #[inline]
    pub fn as_slices(&self) -> (&[F], &[F]) {
        (&self.grads, &self.hess)
    }

    /// Mutable views of the gradient and hessian arrays.
    ///
    /// This is the primary interface for loss functions writing batches of
    /// gradients.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [F], &mut [F]) {
        (&mut self.grads, &mut self.hess)
    }

    /// Sum gradients and hessians over all samples.
    ///
    /// Used for leaf value computation, where the trainer needs the
    /// aggregated gradient statistics of the samples assigned to a leaf.
    pub fn sums(&self) -> GradientPair<F> {
        self.grads
            .iter()
            .zip(self.hess.iter())
            .map(|(&g, &h)| GradientPair::new(g, h))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_starts_zeroed() {
        let buffer = GradientBuffer::<f64>::new(4);
        assert_eq!(buffer.n_samples(), 4);
        for i in 0..4 {
            assert_eq!(buffer.get(i), (0.0, 0.0));
        }
    }

    #[test]
    fn buffer_set_get() {
        let mut buffer = GradientBuffer::new(3);
        buffer.set(1, -0.5, 1.0);
        assert_eq!(buffer.get(1), (-0.5, 1.0));
        assert_eq!(buffer.get(0), (0.0, 0.0));
    }

    #[test]
    fn buffer_reset() {
        let mut buffer = GradientBuffer::new(2);
        buffer.set(0, 1.0, 2.0);
        buffer.set(1, 3.0, 4.0);
        buffer.reset();
        assert_eq!(buffer.get(0), (0.0, 0.0));
        assert_eq!(buffer.get(1), (0.0, 0.0));
    }

    #[test]
    fn buffer_sums() {
        let mut buffer = GradientBuffer::new(3);
        buffer.set(0, 1.0, 1.0);
        buffer.set(1, -2.0, 1.0);
        buffer.set(2, 0.5, 1.0);

        let sums = buffer.sums();
        assert_eq!(sums.grad(), -0.5);
        assert_eq!(sums.hess(), 3.0);
    }

    #[test]
    #[should_panic(expected = "n_samples must be positive")]
    fn buffer_rejects_empty() {
        let _ = GradientBuffer::<f64>::new(0);
    }
}
