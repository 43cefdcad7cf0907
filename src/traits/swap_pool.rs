//! Swap trait for pools that buy the derivative asset with base asset.
//!
//! [`SwapPool`] covers the one trade direction a liquid-staking pool
//! supports: the caller deposits derivative asset and receives base asset
//! at the pool price, minus a fee that depends on how much base liquidity
//! the trade leaves behind.
//!
//! # Fee Invariant
//!
//! The fee is computed from the base reserve *after* the trade at the
//! gross (pre-fee) amount:
//!
//! ```text
//! gross_base   = derivative_in × price
//! amount_after = base_reserve − gross_base        (0 if negative)
//! fee          = fee_curve(amount_after)
//! base_out     = gross_base × (1 − fee)
//! ```
//!
//! The fee portion of `gross_base` stays in the base reserve and accrues
//! to share holders.

use crate::domain::{DerivativeAmount, FeeCurve, Percentage, Price, SwapReceipt};
use crate::error::AmmError;

/// Core trait for derivative-to-base swap pools.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, AmmError>`].  Common error
/// variants include:
///
/// - [`AmmError::InvalidAmount`] — zero input, or an output that rounds
///   to zero
/// - [`AmmError::InsufficientLiquidity`] — base reserve cannot cover the
///   output
/// - [`AmmError::ArithmeticOverflow`] — intermediate overflow
pub trait SwapPool {
    /// Swaps `derivative_in` for base asset.
    ///
    /// The swap either completes fully or leaves the pool untouched.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `derivative_in` is zero or the
    ///   output rounds to zero.
    /// - [`AmmError::InsufficientLiquidity`] if `base_out` exceeds the
    ///   base reserve.
    /// - [`AmmError::ArithmeticOverflow`] if any intermediate overflows.
    fn swap(&mut self, derivative_in: DerivativeAmount) -> Result<SwapReceipt, AmmError>;

    /// Returns the fee a swap of `derivative_in` would pay right now.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if converting the amount
    /// overflows.
    fn quote_fee(&self, derivative_in: DerivativeAmount) -> Result<Percentage, AmmError>;

    /// Base-asset value of one unit of derivative asset.
    #[must_use]
    fn price(&self) -> Price;

    /// The dynamic-fee parameters.
    #[must_use]
    fn fee_curve(&self) -> FeeCurve;
}
