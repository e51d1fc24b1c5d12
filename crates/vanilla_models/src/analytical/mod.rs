//! Analytical (closed-form) pricing for European vanilla options.
//!
//! This module provides closed-form solutions under the Black-Scholes
//! model:
//! - `black_scholes_price`: present value of a European call or put
//! - `black_scholes_greeks`: analytic Greeks (delta, gamma, vega, theta,
//!   rho)
//! - `distributions`: standard normal CDF and PDF
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: supports `f64` and `f32`
//! - **Exact closed form**: transcendental evaluations only, no iteration
//! - **Degenerate cases handled analytically**: zero expiry prices as the
//!   immediate payoff, zero volatility as the discounted deterministic
//!   payoff, both before the general formula divides by `σ√T`

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::black_scholes_price;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use greeks::{black_scholes_greeks, Greeks};
