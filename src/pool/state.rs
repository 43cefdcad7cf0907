//! Plain state record for persistence.

use crate::domain::{BaseAmount, DerivativeAmount, Percentage, Price, ShareAmount};

/// Every stored field of a [`Pool`](super::Pool), with no invariants
/// attached.
///
/// A host persists this between calls and rebuilds the pool with
/// [`Pool::restore`](super::Pool::restore), which validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolState {
    pub price: Price,
    pub base_reserve: BaseAmount,
    pub derivative_reserve: DerivativeAmount,
    pub share_supply: ShareAmount,
    pub min_fee: Percentage,
    pub max_fee: Percentage,
    pub liquidity_target: BaseAmount,
}
