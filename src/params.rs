//! Regularization parameters and their validation.

use num_traits::Float;
use serde::{Deserialize, Serialize};

// =============================================================================
// Regularization Parameters
// =============================================================================

/// L1/L2 regularization parameters for leaf values and split scores.
///
/// These are fixed for the lifetime of a loss object and control how
/// strongly leaf outputs are shrunk toward zero:
///
/// - `alpha` (L1): soft-thresholds the gradient sum, zeroing out leaves
///   with small aggregate gradients.
/// - `lambda` (L2): dampens the hessian-sum denominator, stabilizing
///   small-sample leaves.
///
/// Defaults to no regularization. How these values are persisted alongside
/// a trained model is up to the surrounding ensemble framework; the serde
/// derives only make that possible.
///
/// # Example
///
/// ```
/// use gbloss::RegParams;
///
/// let params = RegParams { alpha: 1.0, lambda: 2.0 };
/// assert!(params.validate().is_ok());
///
/// let bad = RegParams { alpha: -1.0, lambda: 0.0 };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegParams<F: Float> {
    /// L1 regularization (alpha). Must be >= 0.
    pub alpha: F,
    /// L2 regularization (lambda). Must be >= 0.
    pub lambda: F,
}

impl<F: Float> Default for RegParams<F> {
    fn default() -> Self {
        Self {
            alpha: F::zero(),
            lambda: F::zero(),
        }
    }
}

impl<F: Float> RegParams<F> {
    /// Validate that both regularization terms are non-negative.
    pub fn validate(&self) -> Result<(), ParamValidationError> {
        if self.alpha < F::zero() {
            return Err(ParamValidationError::InvalidAlpha(
                self.alpha.to_f64().unwrap_or(f64::NAN),
            ));
        }
        if self.lambda < F::zero() {
            return Err(ParamValidationError::InvalidLambda(
                self.lambda.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Parameter validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParamValidationError {
    /// Alpha (L1 regularization) must be >= 0.
    #[error("alpha must be >= 0, got {0}")]
    InvalidAlpha(f64),

    /// Lambda (L2 regularization) must be >= 0.
    #[error("lambda must be >= 0, got {0}")]
    InvalidLambda(f64),
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unregularized() {
        let params = RegParams::<f64>::default();
        assert_eq!(params.alpha, 0.0);
        assert_eq!(params.lambda, 0.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn accepts_non_negative() {
        let params = RegParams {
            alpha: 0.5,
            lambda: 1.0,
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_negative_alpha() {
        let params = RegParams {
            alpha: -0.5,
            lambda: 1.0,
        };
        assert!(matches!(
            params.validate(),
            Err(ParamValidationError::InvalidAlpha(_))
        ));
    }

    #[test]
    fn rejects_negative_lambda() {
        let params = RegParams {
            alpha: 0.0,
            lambda: -1.0,
        };
        assert!(matches!(
            params.validate(),
            Err(ParamValidationError::InvalidLambda(_))
        ));
    }

    #[test]
    fn serde_round_trip_preserves_field_names() {
        let params = RegParams {
            alpha: 1.0,
            lambda: 2.0,
        };

        // The external framework persists these by name; the wire keys are
        // part of the contract.
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"alpha":1.0,"lambda":2.0}"#);

        let back: RegParams<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn error_message_names_offending_value() {
        let params = RegParams {
            alpha: -2.0,
            lambda: 0.0,
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err.to_string(), "alpha must be >= 0, got -2");
    }
}
