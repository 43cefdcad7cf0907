//! Derivative-to-base swap with a utilization-dependent fee.

use tracing::debug;

use super::{Pool, Transition};
use crate::domain::{
    BaseAmount, DerivativeAmount, FeeCurve, Percentage, Price, Rounding, SwapReceipt,
};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::SwapPool;

/// Computes swapping `derivative_in` for base asset against `pool`.
///
/// 1. `gross_base = derivative_in * price`, rounded down.
/// 2. `amount_after = base_reserve - gross_base`, floored at zero.
/// 3. `fee = fee_curve(amount_after)`.
/// 4. `base_out = gross_base * (1 - fee)`, rounded down.
///
/// The base reserve pays `base_out` and the derivative reserve receives
/// `derivative_in`.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `derivative_in` is zero or `base_out`
///   rounds to zero.
/// - [`AmmError::InsufficientLiquidity`] if `base_out` exceeds the base
///   reserve.
/// - [`AmmError::ArithmeticOverflow`] if any intermediate overflows.
pub fn swap(pool: &Pool, derivative_in: DerivativeAmount) -> Result<Transition<SwapReceipt>> {
    if derivative_in.is_zero() {
        return Err(AmmError::InvalidAmount("swap input must be positive"));
    }
    let gross_base = pool.gross_base(&derivative_in)?;
    let fee = pool.fee_curve.fee_at(&pool.base_reserve.saturating_sub(&gross_base))?;
    let base_out = fee
        .complement()
        .and_then(|keep| keep.apply(&gross_base, Rounding::Down))
        .ok_or(AmmError::ArithmeticOverflow("swap output overflow"))?;
    if base_out.is_zero() {
        return Err(AmmError::InvalidAmount("swap output rounds to zero"));
    }
    if base_out > pool.base_reserve {
        return Err(AmmError::InsufficientLiquidity);
    }
    let receipt = SwapReceipt::new(derivative_in, gross_base, fee, base_out)?;
    let next = Pool {
        base_reserve: pool.base_reserve.safe_sub(&base_out)?,
        derivative_reserve: pool.derivative_reserve.safe_add(&derivative_in)?,
        ..*pool
    };
    Ok(Transition::new(next, receipt))
}

impl Pool {
    /// Fee a swap of `derivative_in` would pay against the current
    /// reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the gross base amount
    /// overflows.
    pub fn quote_fee(&self, derivative_in: DerivativeAmount) -> Result<Percentage> {
        let gross_base = self.gross_base(&derivative_in)?;
        self.fee_curve
            .fee_at(&self.base_reserve.saturating_sub(&gross_base))
    }

    fn gross_base(&self, derivative_in: &DerivativeAmount) -> Result<BaseAmount> {
        self.price
            .convert(derivative_in, Rounding::Down)
            .ok_or(AmmError::ArithmeticOverflow("gross base overflow"))
    }
}

impl SwapPool for Pool {
    fn swap(&mut self, derivative_in: DerivativeAmount) -> Result<SwapReceipt> {
        match swap(self, derivative_in) {
            Ok(transition) => {
                let receipt = transition.commit(self);
                debug!(
                    derivative_in = %derivative_in,
                    fee = %receipt.fee(),
                    base_out = %receipt.base_out(),
                    base_reserve = %self.base_reserve,
                    derivative_reserve = %self.derivative_reserve,
                    "swap committed"
                );
                Ok(receipt)
            }
            Err(err) => {
                debug!(derivative_in = %derivative_in, error = %err, "swap rejected");
                Err(err)
            }
        }
    }

    fn quote_fee(&self, derivative_in: DerivativeAmount) -> Result<Percentage> {
        Pool::quote_fee(self, derivative_in)
    }

    fn price(&self) -> Price {
        self.price
    }

    fn fee_curve(&self) -> FeeCurve {
        self.fee_curve
    }
}
