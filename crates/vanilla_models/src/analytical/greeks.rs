//! Analytic Greeks for European vanilla options.
//!
//! Closed-form first and second order sensitivities of the Black-Scholes
//! price:
//!
//! - delta = ∂V/∂S, gamma = ∂²V/∂S², vega = ∂V/∂σ, theta = ∂V/∂T,
//!   rho = ∂V/∂r
//!
//! Theta follows the time-to-expiry convention of the pricing formula: a
//! finite-difference check that bumps expiry must negate the raw central
//! difference to reproduce it.

use num_traits::Float;

use vanilla_core::market_data::MarketSnapshot;

use super::black_scholes::d1_d2;
use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::{OptionType, VanillaOption};

/// Sensitivities of an option value to the model parameters.
///
/// Pure output value with no identity; all fields default to zero.
///
/// # Examples
/// ```
/// use vanilla_models::analytical::Greeks;
///
/// let greeks: Greeks<f64> = Greeks::default();
/// assert_eq!(greeks.delta, 0.0);
/// assert_eq!(greeks.rho, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// ∂V/∂S: sensitivity to the spot price.
    pub delta: T,
    /// ∂²V/∂S²: convexity in the spot price.
    pub gamma: T,
    /// ∂V/∂σ: sensitivity to volatility.
    pub vega: T,
    /// ∂V/∂T: sensitivity to time to expiry.
    pub theta: T,
    /// ∂V/∂r: sensitivity to the risk-free rate.
    pub rho: T,
}

impl<T: Float> Default for Greeks<T> {
    fn default() -> Self {
        Self {
            delta: T::zero(),
            gamma: T::zero(),
            vega: T::zero(),
            theta: T::zero(),
            rho: T::zero(),
        }
    }
}

/// Computes the analytic Greeks of a European vanilla option.
///
/// # Arguments
/// * `market` - Market snapshot (spot, rate, volatility)
/// * `option` - The option contract
///
/// # Errors
/// Preconditions are checked in order; the first violation is reported.
/// Unlike pricing, expiry and volatility must be strictly positive: the
/// derivative formulas divide by `σ√T` and are undefined at zero.
/// - `UnsupportedExerciseStyle` if the style is not European
/// - `InvalidSpot` if spot <= 0
/// - `InvalidStrike` if strike <= 0
/// - `InvalidExpiry` if expiry <= 0
/// - `InvalidVolatility` if volatility <= 0
///
/// # Examples
/// ```
/// use vanilla_core::market_data::MarketSnapshot;
/// use vanilla_models::analytical::black_scholes_greeks;
/// use vanilla_models::instruments::VanillaOption;
///
/// let market = MarketSnapshot::new(100.0_f64, 0.05, 0.2);
/// let call = VanillaOption::european_call(100.0, 1.0);
///
/// let greeks = black_scholes_greeks(&market, &call).unwrap();
/// assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
/// assert!(greeks.gamma > 0.0);
/// ```
pub fn black_scholes_greeks<T: Float>(
    market: &MarketSnapshot<T>,
    option: &VanillaOption<T>,
) -> Result<Greeks<T>, AnalyticalError> {
    let zero = T::zero();

    if !option.exercise_style().is_european() {
        return Err(AnalyticalError::UnsupportedExerciseStyle {
            style: option.exercise_style().describe().to_string(),
        });
    }
    if market.spot() <= zero {
        return Err(AnalyticalError::InvalidSpot {
            spot: market.spot().to_f64().unwrap_or(f64::NAN),
        });
    }
    if option.strike() <= zero {
        return Err(AnalyticalError::InvalidStrike {
            strike: option.strike().to_f64().unwrap_or(f64::NAN),
        });
    }
    if option.expiry() <= zero {
        return Err(AnalyticalError::InvalidExpiry {
            expiry: option.expiry().to_f64().unwrap_or(f64::NAN),
        });
    }
    if market.volatility() <= zero {
        return Err(AnalyticalError::InvalidVolatility {
            volatility: market.volatility().to_f64().unwrap_or(f64::NAN),
        });
    }

    let two = T::from(2.0).unwrap();

    let (d1, d2) = d1_d2(market, option);
    let sqrt_t = option.expiry().sqrt();
    let pdf_d1 = norm_pdf(d1);
    let discount = (-market.rate() * option.expiry()).exp();

    // Common to both option types
    let gamma = pdf_d1 / (market.spot() * market.volatility() * sqrt_t);
    let vega = market.spot() * pdf_d1 * sqrt_t;
    let decay = -(market.spot() * pdf_d1 * market.volatility()) / (two * sqrt_t);

    match option.option_type() {
        OptionType::Call => Ok(Greeks {
            delta: norm_cdf(d1),
            gamma,
            vega,
            theta: decay - market.rate() * option.strike() * discount * norm_cdf(d2),
            rho: option.strike() * option.expiry() * discount * norm_cdf(d2),
        }),
        OptionType::Put => Ok(Greeks {
            delta: norm_cdf(d1) - T::one(),
            gamma,
            vega,
            theta: decay + market.rate() * option.strike() * discount * norm_cdf(-d2),
            rho: -(option.strike() * option.expiry() * discount * norm_cdf(-d2)),
        }),
        #[allow(unreachable_patterns)]
        _ => Err(AnalyticalError::UnknownOptionType),
    }
}
