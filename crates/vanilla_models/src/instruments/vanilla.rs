//! Vanilla option definitions.
//!
//! This module provides the vanilla option contract combining option type,
//! exercise style, strike, and time to expiry, along with its terminal
//! payoff evaluation.

use num_traits::Float;

use super::error::InstrumentError;
use super::exercise::ExerciseStyle;
use super::payoff::OptionType;

/// Vanilla option contract.
///
/// An immutable value combining the contract terms: option type, exercise
/// style, strike price, and time to expiry in years. Constructed once per
/// query; the contract has no lifecycle beyond the call that uses it.
///
/// The constructor performs no validation. The analytical engines enforce
/// the market invariants (positive strike, non-negative expiry, ...) at
/// call time, since pricing and Greeks apply different strictness to the
/// same fields.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use vanilla_models::instruments::{ExerciseStyle, OptionType, VanillaOption};
///
/// let call = VanillaOption::new(OptionType::Call, ExerciseStyle::European, 100.0_f64, 1.0);
///
/// // Payoff at expiry
/// let payoff = call.payoff(120.0).unwrap();
/// assert_eq!(payoff, 20.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VanillaOption<T: Float> {
    option_type: OptionType,
    exercise_style: ExerciseStyle<T>,
    strike: T,
    expiry: T,
}

impl<T: Float> VanillaOption<T> {
    /// Creates a new vanilla option.
    ///
    /// # Arguments
    /// * `option_type` - Call or Put
    /// * `exercise_style` - Exercise style (only European is priceable)
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiry in years (T)
    #[inline]
    pub fn new(
        option_type: OptionType,
        exercise_style: ExerciseStyle<T>,
        strike: T,
        expiry: T,
    ) -> Self {
        Self {
            option_type,
            exercise_style,
            strike,
            expiry,
        }
    }

    /// Creates a European call with the given strike and expiry.
    #[inline]
    pub fn european_call(strike: T, expiry: T) -> Self {
        Self::new(OptionType::Call, ExerciseStyle::European, strike, expiry)
    }

    /// Creates a European put with the given strike and expiry.
    #[inline]
    pub fn european_put(strike: T, expiry: T) -> Self {
        Self::new(OptionType::Put, ExerciseStyle::European, strike, expiry)
    }

    /// Evaluates the payoff at expiry for a given terminal spot price.
    ///
    /// - Call: max(S - K, 0)
    /// - Put: max(K - S, 0)
    ///
    /// # Arguments
    /// * `spot_at_expiry` - Terminal price of the underlying (must be
    ///   non-negative)
    ///
    /// # Errors
    /// - `InstrumentError::NegativeSpot` if `spot_at_expiry < 0`
    /// - `InstrumentError::UnknownOptionType` for an unrecognised option
    ///   type
    ///
    /// # Examples
    /// ```
    /// use vanilla_models::instruments::VanillaOption;
    ///
    /// let put = VanillaOption::european_put(100.0_f64, 1.0);
    /// assert_eq!(put.payoff(90.0).unwrap(), 10.0);
    /// assert_eq!(put.payoff(110.0).unwrap(), 0.0);
    /// assert!(put.payoff(-1.0).is_err());
    /// ```
    #[inline]
    pub fn payoff(&self, spot_at_expiry: T) -> Result<T, InstrumentError> {
        let zero = T::zero();

        if spot_at_expiry < zero {
            return Err(InstrumentError::NegativeSpot {
                spot: spot_at_expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        match self.option_type {
            OptionType::Call => Ok((spot_at_expiry - self.strike).max(zero)),
            OptionType::Put => Ok((self.strike - spot_at_expiry).max(zero)),
            #[allow(unreachable_patterns)]
            _ => Err(InstrumentError::UnknownOptionType),
        }
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns a reference to the exercise style.
    #[inline]
    pub fn exercise_style(&self) -> &ExerciseStyle<T> {
        &self.exercise_style
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_european_call() {
        let option = VanillaOption::new(OptionType::Call, ExerciseStyle::European, 100.0_f64, 1.0);
        assert_eq!(option.option_type(), OptionType::Call);
        assert!(option.exercise_style().is_european());
        assert_eq!(option.strike(), 100.0);
        assert_eq!(option.expiry(), 1.0);
    }

    #[test]
    fn test_convenience_constructors() {
        let call = VanillaOption::european_call(100.0_f64, 1.0);
        assert!(call.option_type().is_call());
        assert!(call.exercise_style().is_european());

        let put = VanillaOption::european_put(105.0_f64, 0.5);
        assert!(put.option_type().is_put());
        assert_eq!(put.strike(), 105.0);
        assert_eq!(put.expiry(), 0.5);
    }

    #[test]
    fn test_call_payoff_itm() {
        let call = VanillaOption::european_call(100.0_f64, 1.0);
        assert_eq!(call.payoff(110.0).unwrap(), 10.0);
    }

    #[test]
    fn test_call_payoff_otm() {
        let call = VanillaOption::european_call(100.0_f64, 1.0);
        assert_eq!(call.payoff(90.0).unwrap(), 0.0);
    }

    #[test]
    fn test_call_payoff_atm() {
        let call = VanillaOption::european_call(100.0_f64, 1.0);
        assert_eq!(call.payoff(100.0).unwrap(), 0.0);
    }

    #[test]
    fn test_put_payoff_itm() {
        let put = VanillaOption::european_put(100.0_f64, 1.0);
        assert_eq!(put.payoff(90.0).unwrap(), 10.0);
    }

    #[test]
    fn test_put_payoff_otm() {
        let put = VanillaOption::european_put(100.0_f64, 1.0);
        assert_eq!(put.payoff(110.0).unwrap(), 0.0);
    }

    #[test]
    fn test_payoff_zero_terminal_spot() {
        // S_T = 0 is in domain: a put pays the full strike, a call nothing.
        let call = VanillaOption::european_call(100.0_f64, 1.0);
        let put = VanillaOption::european_put(100.0_f64, 1.0);
        assert_eq!(call.payoff(0.0).unwrap(), 0.0);
        assert_eq!(put.payoff(0.0).unwrap(), 100.0);
    }

    #[test]
    fn test_payoff_negative_terminal_spot_rejected() {
        let call = VanillaOption::european_call(100.0_f64, 1.0);
        let put = VanillaOption::european_put(100.0_f64, 1.0);

        for option in [call, put] {
            match option.payoff(-1.0) {
                Err(InstrumentError::NegativeSpot { spot }) => assert_eq!(spot, -1.0),
                other => panic!("Expected NegativeSpot error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_american_style_carried() {
        // Construction succeeds; the engines reject the style at call time.
        let option = VanillaOption::new(OptionType::Put, ExerciseStyle::American, 100.0_f64, 1.0);
        assert!(option.exercise_style().is_american());
        assert!(option.payoff(90.0).is_ok());
    }

    #[test]
    fn test_f32_compatibility() {
        let call = VanillaOption::european_call(100.0_f32, 1.0);
        assert_eq!(call.payoff(110.0_f32).unwrap(), 10.0_f32);
    }

    #[test]
    fn test_clone() {
        let option1 = VanillaOption::european_call(100.0_f64, 1.0);
        let option2 = option1.clone();
        assert_eq!(option1, option2);
    }
}
