//! Market data structures.
//!
//! This module provides the instantaneous market state consumed by the
//! analytical engines. A snapshot is a passive value: callers construct a
//! fresh one per pricing call (for example when bumping one parameter for
//! sensitivity analysis), and the engines validate it at the point of use.

mod snapshot;

pub use snapshot::MarketSnapshot;
