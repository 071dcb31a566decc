//! gbloss: Loss-function primitives for gradient boosted decision trees.
//!
//! This crate provides the numeric contract an XGBoost-style trainer needs
//! at every node: an initial base prediction, per-sample first- and
//! second-order gradients, pseudo-residuals, regularized leaf output values,
//! and the split-quality similarity score.
//!
//! # Key Types
//!
//! - [`Loss`] - Trait implemented by every loss function
//! - [`SseLoss`] - Sum of squared error loss with L1/L2 regularization
//! - [`GradientPair`] / [`GradientBuffer`] - Gradient and hessian storage
//! - [`RegParams`] - Validated regularization parameters
//!
//! # Example
//!
//! ```
//! use gbloss::{Loss, SseLoss};
//!
//! let loss = SseLoss::<f64>::new();
//! let observed = [1.0, 2.0, 3.0, 4.0];
//! let residuals = [1.0, 1.0, 1.0, 1.0];
//!
//! // Seed the ensemble with the mean target.
//! assert_eq!(loss.initial_prediction(&observed), 2.5);
//!
//! // Score a candidate node over the full sample range.
//! let score = loss.similarity_score(&observed, &residuals, 0, 3);
//! assert_eq!(score, 9.0);
//! ```
//!
//! Tree construction, dataset handling, and model serialization live in the
//! surrounding ensemble framework; this crate only encodes the loss math.

pub mod buffer;
pub mod gradient;
pub mod loss;
pub mod params;

pub use buffer::GradientBuffer;
pub use gradient::GradientPair;
pub use loss::{Loss, SseLoss};
pub use params::{ParamValidationError, RegParams};
