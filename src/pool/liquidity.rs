//! Share minting and burning.

use tracing::debug;

use super::{Pool, Transition};
use crate::domain::{BaseAmount, FixedPoint, Rounding, ShareAmount, Unit, Withdrawal};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::LiquidityPool;

/// Computes a base-asset deposit against `pool`.
///
/// The first deposit into a pool with no shares mints one share per unit
/// of base asset.  Every later deposit mints
/// `share_supply * base_in / valuation`, rounded down, where the
/// valuation is taken before the deposit.  The derivative reserve is
/// never touched.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `base_in` is zero or mints no shares.
/// - [`AmmError::DivisionByZero`] if shares exist but the pool is worth
///   nothing, which only a corrupted record can produce.
/// - [`AmmError::ArithmeticOverflow`] if a reserve or the supply would
///   overflow.
pub fn add_liquidity(pool: &Pool, base_in: BaseAmount) -> Result<Transition<ShareAmount>> {
    if base_in.is_zero() {
        return Err(AmmError::InvalidAmount("deposit must be positive"));
    }
    let minted = if pool.share_supply.is_zero() {
        ShareAmount::from_raw(base_in.raw())
    } else {
        let valuation = pool.valuation()?;
        if valuation.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        pool.share_supply
            .scale_by(&base_in, &valuation, Rounding::Down)
            .ok_or(AmmError::ArithmeticOverflow("share issuance overflow"))?
    };
    if minted.is_zero() {
        return Err(AmmError::InvalidAmount("deposit too small to mint a share"));
    }
    let next = Pool {
        base_reserve: pool.base_reserve.safe_add(&base_in)?,
        share_supply: pool.share_supply.safe_add(&minted)?,
        ..*pool
    };
    Ok(Transition::new(next, minted))
}

/// Computes burning `shares` against `pool`.
///
/// Pays out `reserve * shares / share_supply` of each reserve, rounded
/// down and capped at the reserve.  Burning the whole supply returns both
/// reserves exactly.
///
/// # Errors
///
/// Returns [`AmmError::InsufficientShares`] if `shares` is zero or exceeds
/// the supply.
pub fn remove_liquidity(pool: &Pool, shares: ShareAmount) -> Result<Transition<Withdrawal>> {
    if shares.is_zero() || shares > pool.share_supply {
        return Err(AmmError::InsufficientShares);
    }
    let base = pro_rata(pool.base_reserve, &shares, &pool.share_supply)?;
    let derivative = pro_rata(pool.derivative_reserve, &shares, &pool.share_supply)?;
    let next = Pool {
        base_reserve: pool.base_reserve.safe_sub(&base)?,
        derivative_reserve: pool.derivative_reserve.safe_sub(&derivative)?,
        share_supply: pool.share_supply.safe_sub(&shares)?,
        ..*pool
    };
    Ok(Transition::new(next, Withdrawal::new(base, derivative)))
}

fn pro_rata<U: Unit>(
    reserve: FixedPoint<U>,
    shares: &ShareAmount,
    supply: &ShareAmount,
) -> Result<FixedPoint<U>> {
    reserve
        .scale_by(shares, supply, Rounding::Down)
        .map(|out| out.min(reserve))
        .ok_or(AmmError::ArithmeticOverflow("withdrawal overflow"))
}

impl LiquidityPool for Pool {
    fn add_liquidity(&mut self, base_in: BaseAmount) -> Result<ShareAmount> {
        match add_liquidity(self, base_in) {
            Ok(transition) => {
                let minted = transition.commit(self);
                debug!(
                    base_in = %base_in,
                    minted = %minted,
                    base_reserve = %self.base_reserve,
                    share_supply = %self.share_supply,
                    "add_liquidity committed"
                );
                Ok(minted)
            }
            Err(err) => {
                debug!(base_in = %base_in, error = %err, "add_liquidity rejected");
                Err(err)
            }
        }
    }

    fn remove_liquidity(&mut self, shares: ShareAmount) -> Result<Withdrawal> {
        match remove_liquidity(self, shares) {
            Ok(transition) => {
                let withdrawal = transition.commit(self);
                debug!(
                    shares = %shares,
                    base_out = %withdrawal.base(),
                    derivative_out = %withdrawal.derivative(),
                    share_supply = %self.share_supply,
                    "remove_liquidity committed"
                );
                Ok(withdrawal)
            }
            Err(err) => {
                debug!(shares = %shares, error = %err, "remove_liquidity rejected");
                Err(err)
            }
        }
    }

    fn share_supply(&self) -> ShareAmount {
        self.share_supply
    }
}
