//! Share accounting trait extending [`SwapPool`].
//!
//! [`LiquidityPool`] adds minting and burning of pool shares on top of the
//! swap functionality provided by [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! The share supply **only** changes through
//! [`LiquidityPool::add_liquidity`] and [`LiquidityPool::remove_liquidity`].
//! Swaps move reserves but never mint or burn shares.
//!
//! A holder of `s` shares out of a supply of `S` owns `s / S` of both
//! reserves:
//!
//! ```text
//! base_out       = base_reserve       × s / S
//! derivative_out = derivative_reserve × s / S
//! ```

use super::SwapPool;
use crate::domain::{BaseAmount, ShareAmount, Withdrawal};
use crate::error::AmmError;

/// Trait for pools that issue shares against deposited base asset.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] — zero deposit or zero shares minted
/// - [`AmmError::InsufficientShares`] — burning zero or more than the
///   supply
/// - [`AmmError::ArithmeticOverflow`] — intermediate overflow
pub trait LiquidityPool: SwapPool {
    /// Deposits `base_in` and mints shares.
    ///
    /// The first deposit into an empty pool mints shares one-for-one.
    /// Later deposits mint `supply × base_in / valuation`, rounded down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `base_in` is zero or no shares
    ///   would be minted.
    /// - [`AmmError::ArithmeticOverflow`] if a reserve or the supply would
    ///   overflow.
    fn add_liquidity(&mut self, base_in: BaseAmount) -> Result<ShareAmount, AmmError>;

    /// Burns `shares` and pays out the proportional slice of both
    /// reserves, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if `shares` is zero or
    /// exceeds the supply.
    fn remove_liquidity(&mut self, shares: ShareAmount) -> Result<Withdrawal, AmmError>;

    /// Total outstanding shares.
    #[must_use]
    fn share_supply(&self) -> ShareAmount;
}
