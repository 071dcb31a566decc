//! Loss functions for gradient boosted tree training.
//!
//! Each loss function supplies the per-node primitives the tree grower
//! consumes: gradients, hessians, pseudo-residuals, regularized leaf
//! values, and split similarity scores.
//!
//! # Loss Trait
//!
//! All losses implement the unified [`Loss`] trait. Operations take plain
//! slices of a real element type `F`; a length-1 slice is the scalar case,
//! so no separate scalar/vector code paths exist.
//!
//! # Available Losses
//!
//! - [`SseLoss`]: Sum of squared errors with L1/L2 regularization

mod sse;

pub use sse::SseLoss;

use num_traits::Float;

use crate::buffer::GradientBuffer;

/// A loss function for gradient boosted tree training.
///
/// Implementations are stateless function bundles beyond their fixed
/// regularization scalars, so every operation is a pure function of its
/// inputs and safe to call concurrently.
///
/// # Alignment Contract
///
/// Callers guarantee that paired sequences (`observed` and
/// `values`/`residuals`/`f`) have equal length and index-aligned samples,
/// and that `[begin, end]` ranges are inclusive and in bounds. These
/// invariants are checked with debug assertions only; this code sits on
/// the split-search inner loop.
pub trait Loss<F: Float>: Send + Sync {
    /// The initial prediction seeding the ensemble, before any tree is
    /// added.
    ///
    /// Returns 0 for an empty input rather than failing.
    fn initial_prediction(&self, values: &[F]) -> F;

    /// First-order gradient of the loss with respect to `values`.
    ///
    /// Positive entries mean the prediction overshoots the observation.
    fn gradients(&self, observed: &[F], values: &[F]) -> Vec<F>;

    /// Second-order gradient of the loss with respect to `values`.
    ///
    /// `observed` is part of the uniform loss signature; constant-hessian
    /// losses ignore it.
    fn hessians(&self, observed: &[F], values: &[F]) -> Vec<F>;

    /// Pseudo-residuals of the predictions `f`.
    ///
    /// Equal to the negative gradient with respect to the current
    /// cumulative prediction; used as the regression target for the next
    /// boosted tree.
    fn residuals(&self, observed: &[F], f: &[F]) -> Vec<F>;

    /// Regularized output value for a leaf, given the gradient and hessian
    /// sequences of the samples assigned to it.
    fn output_value(&self, gradients: &[F], hessians: &[F]) -> F;

    /// Similarity score of the inclusive sample range `[begin, end]`,
    /// used by the tree grower to score candidate splits.
    ///
    /// Split gain = score(left) + score(right) - score(parent).
    fn similarity_score(&self, observed: &[F], residuals: &[F], begin: usize, end: usize) -> F;

    /// Compute gradients and hessians for a batch of samples, writing them
    /// into `buffer`.
    ///
    /// The default implementation delegates to [`gradients`](Self::gradients)
    /// and [`hessians`](Self::hessians); losses with cheaper batch paths
    /// (e.g. constant hessians) override it.
    fn compute_gradients(&self, observed: &[F], values: &[F], buffer: &mut GradientBuffer<F>) {
        debug_assert_eq!(observed.len(), values.len());
        debug_assert_eq!(buffer.n_samples(), values.len());

        let grads = self.gradients(observed, values);
        let hess = self.hessians(observed, values);

        let (grads_out, hess_out) = buffer.as_mut_slices();
        grads_out.copy_from_slice(&grads);
        hess_out.copy_from_slice(&hess);
    }

    /// Name of the loss function (for the trainer's logging).
    fn name(&self) -> &'static str;
}
