//! Gradient pair for optimization.

use num_traits::Float;

/// Gradient and hessian pair for second-order (Newton) boosting.
///
/// In gradient boosting, we minimize a loss function by computing first
/// (gradient) and second (hessian) derivatives with respect to the
/// predictions.
///
/// - `grad`: First derivative (∂L/∂ŷ) - direction of steepest ascent
/// - `hess`: Second derivative (∂²L/∂ŷ²) - curvature information
///
/// For squared error: grad = (ŷ - y), hess = 1.
///
/// # Example
///
/// ```
/// use gbloss::GradientPair;
///
/// let gp = GradientPair::new(0.5, 0.25);
/// assert_eq!(gp.grad(), 0.5);
/// assert_eq!(gp.hess(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GradientPair<F: Float> {
    /// First derivative (gradient).
    grad: F,
    /// Second derivative (hessian).
    hess: F,
}

impl<F: Float> GradientPair<F> {
    /// Create a new gradient pair.
    #[inline]
    pub fn new(grad: F, hess: F) -> Self {
        Self { grad, hess }
    }

    /// Zero gradient pair (neutral element for accumulation).
    #[inline]
    pub fn zero() -> Self {
        Self {
            grad: F::zero(),
            hess: F::zero(),
        }
    }

    /// Get the gradient (first derivative).
    #[inline]
    pub fn grad(&self) -> F {
        self.grad
    }

    /// Get the hessian (second derivative).
    #[inline]
    pub fn hess(&self) -> F {
        self.hess
    }

    /// Add another gradient pair to this one (in-place).
    #[inline]
    pub fn accumulate(&mut self, other: &GradientPair<F>) {
        self.grad = self.grad + other.grad;
        self.hess = self.hess + other.hess;
    }
}

impl<F: Float> std::ops::Add for GradientPair<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            grad: self.grad + other.grad,
            hess: self.hess + other.hess,
        }
    }
}

impl<F: Float> std::ops::AddAssign for GradientPair<F> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.accumulate(&other);
    }
}

impl<F: Float> std::iter::Sum for GradientPair<F> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(GradientPair::zero(), |acc, gp| acc + gp)
    }
}
