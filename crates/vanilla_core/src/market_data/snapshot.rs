//! Instantaneous market state.

use num_traits::Float;

/// Immutable snapshot of the market state for a single underlying.
///
/// Holds the observed spot price, the continuously-compounded annual
/// risk-free rate, and the annualised volatility. The snapshot performs no
/// validation of its own: the pricing and Greeks engines apply different
/// strictness to the same fields (pricing tolerates zero volatility, the
/// Greeks do not), so invariants are enforced at the call that uses the
/// snapshot rather than at construction.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use vanilla_core::market_data::MarketSnapshot;
///
/// let market = MarketSnapshot::new(100.0_f64, 0.05, 0.2);
/// assert_eq!(market.spot(), 100.0);
///
/// // Bump the spot for a sensitivity check: build a fresh snapshot.
/// let bumped = MarketSnapshot::new(market.spot() + 0.1, market.rate(), market.volatility());
/// assert_eq!(bumped.spot(), 100.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

impl<T: Float> MarketSnapshot<T> {
    /// Creates a new market snapshot.
    ///
    /// # Arguments
    /// * `spot` - Current spot price of the underlying (S0)
    /// * `rate` - Risk-free rate, continuously compounded, annual (r)
    /// * `volatility` - Annualised volatility of log-returns (σ)
    #[inline]
    pub fn new(spot: T, rate: T, volatility: T) -> Self {
        Self {
            spot,
            rate,
            volatility,
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let market = MarketSnapshot::new(100.0_f64, 0.05, 0.2);
        assert_eq!(market.spot(), 100.0);
        assert_eq!(market.rate(), 0.05);
        assert_eq!(market.volatility(), 0.2);
    }

    #[test]
    fn test_passive_construction() {
        // The snapshot itself accepts any values; engines validate at call
        // time because pricing and Greeks disagree on strictness.
        let market = MarketSnapshot::new(-1.0_f64, -0.02, 0.0);
        assert_eq!(market.spot(), -1.0);
        assert_eq!(market.rate(), -0.02);
        assert_eq!(market.volatility(), 0.0);
    }

    #[test]
    fn test_copy_semantics() {
        let market = MarketSnapshot::new(100.0_f64, 0.05, 0.2);
        let copied = market;
        assert_eq!(market, copied);
    }

    #[test]
    fn test_f32_compatibility() {
        let market = MarketSnapshot::new(100.0_f32, 0.05, 0.2);
        assert_eq!(market.spot(), 100.0_f32);
    }

    #[test]
    fn test_debug() {
        let market = MarketSnapshot::new(100.0_f64, 0.05, 0.2);
        let debug_str = format!("{:?}", market);
        assert!(debug_str.contains("MarketSnapshot"));
        assert!(debug_str.contains("spot"));
    }
}
