//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The validation failure raised by pricing, Greeks, sweep
//!   and strategy entry points

use thiserror::Error;

/// Categorised pricing errors.
///
/// Pricing is deterministic and closed-form, so the only thing that can go
/// wrong is the input. Every failure names the field that was rejected and
/// why, so a presentation layer can point the user at the offending widget.
///
/// Degenerate numeric boundaries (zero expiry, zero volatility) are not
/// errors; they resolve to finite values in the pricing functions.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid_input("volatility", "volatility must be non-negative");
/// assert_eq!(err.field(), "volatility");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid input for volatility: volatility must be non-negative"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput {
        /// Name of the rejected field (e.g. `"volatility"`, `"legs[1].strike"`)
        field: String,
        /// Human-readable reason
        reason: String,
    },
}

impl PricingError {
    /// Creates an `InvalidInput` error for the given field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the rejected field.
    pub fn field(&self) -> &str {
        match self {
            PricingError::InvalidInput { field, .. } => field,
        }
    }

    /// Returns the human-readable reason.
    pub fn reason(&self) -> &str {
        match self {
            PricingError::InvalidInput { reason, .. } => reason,
        }
    }

    /// Prefixes the field name, e.g. `strike` becomes `legs[2].strike`.
    ///
    /// Used when validating elements of a collection so the caller can
    /// locate the offending element.
    pub fn within(self, prefix: &str) -> Self {
        match self {
            PricingError::InvalidInput { field, reason } => PricingError::InvalidInput {
                field: format!("{}.{}", prefix, field),
                reason,
            },
        }
    }
}
