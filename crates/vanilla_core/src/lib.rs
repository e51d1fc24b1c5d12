//! # vanilla_core: Foundation for the Vanilla Option Analytics Library
//!
//! ## Layer 1 (Foundation) Role
//!
//! vanilla_core serves as the bottom layer of the workspace, providing:
//! - Market data snapshot: `MarketSnapshot` (`market_data`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other vanilla_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use vanilla_core::market_data::MarketSnapshot;
//!
//! let market = MarketSnapshot::new(100.0_f64, 0.05, 0.2);
//! assert_eq!(market.spot(), 100.0);
//! assert_eq!(market.rate(), 0.05);
//! assert_eq!(market.volatility(), 0.2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `MarketSnapshot`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
