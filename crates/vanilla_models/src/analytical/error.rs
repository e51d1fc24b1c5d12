//! Error types for analytical pricing operations.

use thiserror::Error;
use vanilla_core::types::PricingError;

use crate::instruments::InstrumentError;

/// Analytical pricing errors.
///
/// Every variant is a violated precondition of the pricing or Greeks
/// engine, carrying the offending value (or style name) in a descriptive
/// message. Failures are raised synchronously at the violating call and
/// never recovered internally.
///
/// # Examples
/// ```
/// use vanilla_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Exercise style not supported by the closed-form engines.
    #[error("Unsupported exercise style: {style}")]
    UnsupportedExerciseStyle {
        /// Name of the unsupported exercise style
        style: String,
    },

    /// Invalid spot price (must be positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (must be positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry (negative for pricing, non-positive for Greeks).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility (negative for pricing, non-positive for Greeks).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Option type not recognised by the engine.
    #[error("Unknown option type")]
    UnknownOptionType,
}

impl From<InstrumentError> for AnalyticalError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::NegativeSpot { spot } => AnalyticalError::InvalidSpot { spot },
            InstrumentError::UnknownOptionType => AnalyticalError::UnknownOptionType,
        }
    }
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_exercise_style_display() {
        let err = AnalyticalError::UnsupportedExerciseStyle {
            style: "American".to_string(),
        };
        assert_eq!(format!("{}", err), "Unsupported exercise style: American");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = AnalyticalError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = 0");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = AnalyticalError::InvalidExpiry { expiry: -1.0 };
        assert_eq!(format!("{}", err), "Invalid expiry: T = -1");
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::UnknownOptionType;
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = AnalyticalError::InvalidVolatility { volatility: 0.1 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_from_instrument_error() {
        let err: AnalyticalError = InstrumentError::NegativeSpot { spot: -2.0 }.into();
        assert_eq!(err, AnalyticalError::InvalidSpot { spot: -2.0 });

        let err: AnalyticalError = InstrumentError::UnknownOptionType.into();
        assert_eq!(err, AnalyticalError::UnknownOptionType);
    }

    #[test]
    fn test_to_pricing_error() {
        let err = AnalyticalError::InvalidSpot { spot: -50.0 };
        let pricing_err: PricingError = err.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("spot")),
        }
    }
}
