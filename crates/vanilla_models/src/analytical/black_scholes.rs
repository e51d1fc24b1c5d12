//! Black-Scholes pricing for European vanilla options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Two degenerate inputs bypass the closed form entirely: at T = 0 the
//! value is the immediate payoff, and at σ = 0 the terminal price is
//! deterministic under the risk-neutral drift and the value is its
//! discounted payoff.

use num_traits::Float;

use vanilla_core::market_data::MarketSnapshot;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::{OptionType, VanillaOption};

/// Computes the d₁ and d₂ terms of the Black-Scholes formula.
///
/// Caller must have validated `spot > 0`, `strike > 0`, `expiry > 0`, and
/// `volatility > 0`: the terms divide by `σ√T`.
pub(crate) fn d1_d2<T: Float>(market: &MarketSnapshot<T>, option: &VanillaOption<T>) -> (T, T) {
    let half = T::from(0.5).unwrap();

    let sqrt_t = option.expiry().sqrt();
    let vol_sqrt_t = market.volatility() * sqrt_t;

    let log_moneyness = (market.spot() / option.strike()).ln();
    let drift =
        (market.rate() + half * market.volatility() * market.volatility()) * option.expiry();

    let d1 = (log_moneyness + drift) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    (d1, d2)
}

/// Computes the present value of a European vanilla option.
///
/// # Arguments
/// * `market` - Market snapshot (spot, rate, volatility)
/// * `option` - The option contract to price
///
/// # Errors
/// Preconditions are checked in order; the first violation is reported:
/// - `UnsupportedExerciseStyle` if the style is not European
/// - `InvalidSpot` if spot <= 0
/// - `InvalidStrike` if strike <= 0
/// - `InvalidExpiry` if expiry < 0
/// - `InvalidVolatility` if volatility < 0
///
/// # Examples
/// ```
/// use vanilla_core::market_data::MarketSnapshot;
/// use vanilla_models::analytical::black_scholes_price;
/// use vanilla_models::instruments::VanillaOption;
///
/// let market = MarketSnapshot::new(100.0_f64, 0.05, 0.2);
/// let call = VanillaOption::european_call(100.0, 1.0);
/// let put = VanillaOption::european_put(100.0, 1.0);
///
/// let call_price = black_scholes_price(&market, &call).unwrap();
/// let put_price = black_scholes_price(&market, &put).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
pub fn black_scholes_price<T: Float>(
    market: &MarketSnapshot<T>,
    option: &VanillaOption<T>,
) -> Result<T, AnalyticalError> {
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
    if option.expiry() < zero {
        return Err(AnalyticalError::InvalidExpiry {
            expiry: option.expiry().to_f64().unwrap_or(f64::NAN),
        });
    }
    if market.volatility() < zero {
        return Err(AnalyticalError::InvalidVolatility {
            volatility: market.volatility().to_f64().unwrap_or(f64::NAN),
        });
    }

    // Expiring now: the value is the payoff at the current spot, with no
    // discounting. This path also avoids the σ√T denominator.
    if option.expiry() == zero {
        return Ok(option.payoff(market.spot())?);
    }

    // Zero volatility: the terminal price is deterministic under the
    // risk-neutral drift, S_T = S0·exp(rT), and the value is its
    // discounted payoff.
    if market.volatility() == zero {
        let terminal = market.spot() * (market.rate() * option.expiry()).exp();
        let discount = (-market.rate() * option.expiry()).exp();
        return Ok(discount * option.payoff(terminal)?);
    }

    let (d1, d2) = d1_d2(market, option);
    let discounted_strike = option.strike() * (-market.rate() * option.expiry()).exp();

    match option.option_type() {
        OptionType::Call => Ok(market.spot() * norm_cdf(d1) - discounted_strike * norm_cdf(d2)),
        OptionType::Put => Ok(discounted_strike * norm_cdf(-d2) - market.spot() * norm_cdf(-d1)),
        #[allow(unreachable_patterns)]
        _ => Err(AnalyticalError::UnknownOptionType),
    }
}
