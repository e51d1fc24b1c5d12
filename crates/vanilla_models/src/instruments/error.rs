//! Error types for instrument operations.

use thiserror::Error;
use vanilla_core::types::PricingError;

/// Instrument-level errors.
///
/// Raised by payoff evaluation when the terminal spot is out of domain or
/// when the option type is not recognised.
///
/// # Examples
/// ```
/// use vanilla_models::instruments::InstrumentError;
///
/// let err = InstrumentError::NegativeSpot { spot: -1.0 };
/// assert!(format!("{}", err).contains("non-negative"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InstrumentError {
    /// Terminal spot price below zero.
    #[error("Spot price must be non-negative: S = {spot}")]
    NegativeSpot {
        /// The offending spot price value
        spot: f64,
    },

    /// Option type not recognised by the payoff evaluation.
    #[error("Unknown option type")]
    UnknownOptionType,
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
