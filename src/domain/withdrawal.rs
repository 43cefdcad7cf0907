//! Assets paid out when shares are burned.

use core::fmt;

use super::{BaseAmount, DerivativeAmount, Price, Rounding};
use crate::error::AmmError;

/// The proportional slice of both reserves returned for burned shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Withdrawal {
    base: BaseAmount,
    derivative: DerivativeAmount,
}

impl Withdrawal {
    /// Creates a withdrawal record.
    pub const fn new(base: BaseAmount, derivative: DerivativeAmount) -> Self {
        Self { base, derivative }
    }

    /// Base asset paid out.
    pub const fn base(&self) -> BaseAmount {
        self.base
    }

    /// Derivative asset paid out.
    pub const fn derivative(&self) -> DerivativeAmount {
        self.derivative
    }

    /// Total value in base asset at `price`, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the sum overflows.
    pub fn value_in_base(&self, price: &Price) -> crate::error::Result<BaseAmount> {
        price
            .convert(&self.derivative, Rounding::Down)
            .and_then(|converted| converted.checked_add(&self.base))
            .ok_or(AmmError::ArithmeticOverflow("withdrawal valuation overflow"))
    }
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Withdrawal(base={}, derivative={})", self.base, self.derivative)
    }
}
