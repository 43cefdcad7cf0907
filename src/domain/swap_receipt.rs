//! Outcome of a derivative-to-base swap.

use core::fmt;

use super::{BaseAmount, DerivativeAmount, Percentage};
use crate::error::AmmError;

/// Everything a caller needs to audit a swap.
///
/// # Invariants
///
/// - `derivative_in > 0` and `base_out > 0`.
/// - `base_out <= gross_base`; the difference is `fee_amount`, which stays
///   in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapReceipt {
    derivative_in: DerivativeAmount,
    gross_base: BaseAmount,
    fee: Percentage,
    base_out: BaseAmount,
}

impl SwapReceipt {
    /// Creates a receipt with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAmount`] if either traded amount is zero
    /// or `base_out` exceeds `gross_base`.
    pub fn new(
        derivative_in: DerivativeAmount,
        gross_base: BaseAmount,
        fee: Percentage,
        base_out: BaseAmount,
    ) -> crate::error::Result<Self> {
        if derivative_in.is_zero() {
            return Err(AmmError::InvalidAmount("derivative_in must be positive"));
        }
        if base_out.is_zero() {
            return Err(AmmError::InvalidAmount("swap output rounds to zero"));
        }
        if base_out > gross_base {
            return Err(AmmError::InvalidAmount("base_out must not exceed gross_base"));
        }
        Ok(Self {
            derivative_in,
            gross_base,
            fee,
            base_out,
        })
    }

    /// Derivative asset deposited.
    pub const fn derivative_in(&self) -> DerivativeAmount {
        self.derivative_in
    }

    /// Nominal base value of the deposit at the pool price.
    pub const fn gross_base(&self) -> BaseAmount {
        self.gross_base
    }

    /// Fee fraction charged.
    pub const fn fee(&self) -> Percentage {
        self.fee
    }

    /// Base asset paid to the caller.
    pub const fn base_out(&self) -> BaseAmount {
        self.base_out
    }

    /// Base asset retained by the pool as fee.
    pub const fn fee_amount(&self) -> BaseAmount {
        self.gross_base.saturating_sub(&self.base_out)
    }
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapReceipt(in={}, gross={}, fee={}, out={})",
            self.derivative_in, self.gross_base, self.fee, self.base_out
        )
    }
}
