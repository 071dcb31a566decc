//! Sum of squared error loss.

// Allow range loops where indices access multiple arrays.
#![allow(clippy::needless_range_loop)]

use num_traits::Float;

use crate::buffer::GradientBuffer;
use crate::gradient::GradientPair;
use crate::loss::Loss;
use crate::params::{ParamValidationError, RegParams};

/// Sum of squared errors (SSE) loss with L1/L2 regularization.
///
/// Measures the quality of the response values in each tree node:
///
/// ```text
/// L = 0.5 * (observed - predicted)²
/// ```
///
/// Derivatives:
/// - grad = predicted - observed
/// - hess = 1 (constant)
///
/// The regularization scalars are fixed at construction and immutable for
/// the lifetime of the loss, so concurrent callers always observe the same
/// policy:
///
/// - `alpha` (L1) soft-thresholds the per-leaf gradient sum.
/// - `lambda` (L2) dampens the hessian-sum denominator.
///
/// # Example
///
/// ```
/// use gbloss::{Loss, SseLoss};
///
/// let loss = SseLoss::with_regularization(0.0, 2.0);
/// let grads = [1.0, -4.0, -3.0];
/// let hess = [1.0, 1.0, 1.0];
///
/// // -(-6) / (3 + 2) = 1.2
/// assert_eq!(loss.output_value(&grads, &hess), 1.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SseLoss<F: Float = f64> {
    /// The L1 regularization parameter.
    alpha: F,
    /// The L2 regularization parameter.
    lambda: F,
}

impl<F: Float> Default for SseLoss<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> SseLoss<F> {
    /// Create an SSE loss with no regularization.
    pub fn new() -> Self {
        Self {
            alpha: F::zero(),
            lambda: F::zero(),
        }
    }

    /// Create an SSE loss with explicit L1 (`alpha`) and L2 (`lambda`)
    /// regularization.
    ///
    /// Both values must be non-negative. Use [`from_params`](Self::from_params)
    /// when the values come from untrusted configuration.
    pub fn with_regularization(alpha: F, lambda: F) -> Self {
        debug_assert!(alpha >= F::zero(), "alpha must be >= 0");
        debug_assert!(lambda >= F::zero(), "lambda must be >= 0");

        Self { alpha, lambda }
    }

    /// Create an SSE loss from validated regularization parameters.
    pub fn from_params(params: RegParams<F>) -> Result<Self, ParamValidationError> {
        params.validate()?;
        Ok(Self {
            alpha: params.alpha,
            lambda: params.lambda,
        })
    }

    /// The L1 regularization parameter.
    #[inline]
    pub fn alpha(&self) -> F {
        self.alpha
    }

    /// The L2 regularization parameter.
    #[inline]
    pub fn lambda(&self) -> F {
        self.lambda
    }

    /// Soft-threshold a gradient sum by `alpha`:
    ///
    /// ```text
    /// L1(s) = s - alpha  if s > alpha
    ///         s + alpha  if s < -alpha
    ///         0          otherwise
    /// ```
    ///
    /// Applied identically in `output_value` and `similarity_score` so the
    /// leaf values and the split scores agree on the shrinkage.
    #[inline]
    fn apply_l1(&self, sum_gradients: F) -> F {
        if sum_gradients > self.alpha {
            sum_gradients - self.alpha
        } else if sum_gradients < -self.alpha {
            sum_gradients + self.alpha
        } else {
            F::zero()
        }
    }
}

impl<F: Float + Send + Sync> Loss<F> for SseLoss<F> {
    /// Mean of `values`; 0 for an empty input.
    fn initial_prediction(&self, values: &[F]) -> F {
        if values.is_empty() {
            return F::zero();
        }

        let sum = values.iter().fold(F::zero(), |acc, &v| acc + v);
        sum / F::from(values.len()).unwrap()
    }

    /// Element-wise `values - observed`.
    fn gradients(&self, observed: &[F], values: &[F]) -> Vec<F> {
        debug_assert_eq!(observed.len(), values.len());

        values
            .iter()
            .zip(observed.iter())
            .map(|(&v, &o)| v - o)
            .collect()
    }

    /// Constant 1 per sample; SSE curvature does not depend on the inputs.
    fn hessians(&self, _observed: &[F], values: &[F]) -> Vec<F> {
        vec![F::one(); values.len()]
    }

    /// Element-wise `observed - f`, the negative gradient at the current
    /// cumulative prediction.
    fn residuals(&self, observed: &[F], f: &[F]) -> Vec<F> {
        debug_assert_eq!(observed.len(), f.len());

        observed
            .iter()
            .zip(f.iter())
            .map(|(&o, &p)| o - p)
            .collect()
    }

    /// Closed-form optimal leaf value under L1/L2-regularized Newton
    /// boosting:
    ///
    /// ```text
    /// value = -L1(sum(grad)) / (sum(hess) + lambda)
    /// ```
    ///
    /// Callers guarantee a non-degenerate denominator (`lambda > 0` or a
    /// non-empty leaf).
    fn output_value(&self, gradients: &[F], hessians: &[F]) -> F {
        debug_assert_eq!(gradients.len(), hessians.len());

        let sums: GradientPair<F> = gradients
            .iter()
            .zip(hessians.iter())
            .map(|(&g, &h)| GradientPair::new(g, h))
            .sum();

        -self.apply_l1(sums.grad()) / (sums.hess() + self.lambda)
    }

    /// Similarity score of the inclusive range `[begin, end]`:
    ///
    /// ```text
    /// score = L1(sum(grad))² / (sum(hess) + lambda)
    /// ```
    ///
    /// Gradients and hessians are taken over the range, with the residuals
    /// playing the role of the values being corrected. Squaring the
    /// thresholded gradient sum makes scores non-negative and comparable
    /// across candidate splits.
    fn similarity_score(&self, observed: &[F], residuals: &[F], begin: usize, end: usize) -> F {
        debug_assert_eq!(observed.len(), residuals.len());
        debug_assert!(begin <= end, "begin must not exceed end");
        debug_assert!(end < residuals.len(), "range end out of bounds");

        let gradients = self.gradients(&observed[begin..=end], &residuals[begin..=end]);
        let hessians = self.hessians(&observed[begin..=end], &residuals[begin..=end]);

        let grad_sum = gradients.iter().fold(F::zero(), |acc, &g| acc + g);
        let hess_sum = hessians.iter().fold(F::zero(), |acc, &h| acc + h);

        let thresholded = self.apply_l1(grad_sum);
        thresholded * thresholded / (hess_sum + self.lambda)
    }

    /// Batch fill: grad = value - observed, hess = 1.
    fn compute_gradients(&self, observed: &[F], values: &[F], buffer: &mut GradientBuffer<F>) {
        debug_assert_eq!(observed.len(), values.len());
        debug_assert_eq!(buffer.n_samples(), values.len());

        let (grads, hess) = buffer.as_mut_slices();

        for i in 0..values.len() {
            grads[i] = values[i] - observed[i];
        }

        hess.fill(F::one());
    }

    fn name(&self) -> &'static str {
        "sse"
    }
}
