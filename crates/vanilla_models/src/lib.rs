//! # Vanilla Models (L2: Business Logic)
//!
//! Vanilla option instruments and their closed-form Black-Scholes analytics.
//!
//! This crate provides:
//! - Instrument definitions (option type, exercise style, vanilla contract)
//! - Terminal payoff evaluation
//! - Closed-form Black-Scholes pricing for European options
//! - Analytic Greeks (delta, gamma, vega, theta, rho)
//! - Standard normal distribution utilities
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`** for all value types and engines
//! - **Pure functions over immutable inputs**: no shared state, no caching,
//!   safe to call concurrently without coordination
//! - **Call-time validation**: the engines reject invalid inputs with
//!   descriptive errors instead of clamping or returning NaN

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
