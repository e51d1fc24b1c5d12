//! Financial instrument definitions.
//!
//! This module provides the vanilla option contract and its constituent
//! enumerations. All types are passive values: they carry the contract
//! terms without enforcing market invariants, which are checked by the
//! analytical engines at the point of use.
//!
//! # Examples
//!
//! ```
//! use vanilla_models::instruments::{ExerciseStyle, OptionType, VanillaOption};
//!
//! let call = VanillaOption::new(OptionType::Call, ExerciseStyle::European, 100.0_f64, 1.0);
//! let payoff = call.payoff(110.0).unwrap();
//! assert_eq!(payoff, 10.0);
//! ```

mod error;
mod exercise;
mod payoff;
mod vanilla;

pub use error::InstrumentError;
pub use exercise::ExerciseStyle;
pub use payoff::OptionType;
pub use vanilla::VanillaOption;
