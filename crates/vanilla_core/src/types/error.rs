//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The workspace-wide error category for pricing
//!   operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every failure in this library is a caller-correctable input error: the
/// domain is deterministic pure computation, so a failure always recurs for
/// the same inputs and there is nothing to retry or recover internally.
/// Layer-2 error types (`InstrumentError`, `AnalyticalError`) convert into
/// this category via `From` impls.
///
/// # Examples
/// ```
/// use vanilla_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
