//! Explicit rounding direction for fixed-point division.

use crate::math::U256;

/// Rounding direction applied whenever a fixed-point operation divides.
///
/// Every division in the engine takes a `Rounding` so that precision loss
/// is always a visible decision.  The engine rounds against the caller:
/// payouts, issued shares and fee discounts use [`Rounding::Down`], while
/// valuations that act as divisors use [`Rounding::Up`].
///
/// # Examples
///
/// ```
/// use stake_pool_amm::domain::{BaseAmount, Rounding};
///
/// let ten = BaseAmount::from_raw(10);
/// let three = BaseAmount::from_raw(3);
/// let down = ten.checked_div(&three, Rounding::Down).expect("fits");
/// let up = ten.checked_div(&three, Rounding::Up).expect("fits");
/// assert_eq!(up.raw() - down.raw(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling: any remainder bumps the quotient by one raw unit.
    Up,
    /// Floor: the remainder is dropped.
    Down,
}

impl Rounding {
    /// Divides `numerator` by a non-zero `denominator` in this direction.
    ///
    /// The ceiling branch cannot overflow: a non-zero remainder implies the
    /// quotient is strictly below `U256::MAX`.
    pub(crate) fn divide(self, numerator: U256, denominator: U256) -> U256 {
        let quotient = numerator / denominator;
        match self {
            Self::Down => quotient,
            Self::Up => {
                if (numerator % denominator).is_zero() {
                    quotient
                } else {
                    quotient + U256::one()
                }
            }
        }
    }
}
