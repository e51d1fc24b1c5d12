//! Option type definitions.

/// Type of a vanilla option payoff.
///
/// Fixed for the life of an option contract. The enumeration is marked
/// `#[non_exhaustive]` and every consumer keeps a defensive rejection arm,
/// so the documented "unknown option type" failure behaviour is already in
/// place should the enumeration be extended.
///
/// # Variants
/// - `Call`: right to buy at the strike, payoff max(S - K, 0)
/// - `Put`: right to sell at the strike, payoff max(K - S, 0)
///
/// # Examples
/// ```
/// use vanilla_models::instruments::OptionType;
///
/// assert!(OptionType::Call.is_call());
/// assert!(OptionType::Put.is_put());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}
