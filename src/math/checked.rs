//! Checked arithmetic trait for fixed-point quantities.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic that returns
//! [`Result<Self, AmmError>`](crate::error::AmmError) instead of `None`, so
//! pool code can propagate failures with `?`.
//!
//! # Examples
//!
//! ```
//! use stake_pool_amm::domain::{BaseAmount, Rounding};
//! use stake_pool_amm::math::CheckedArithmetic;
//!
//! let a: BaseAmount = "100".parse().expect("decimal");
//! let b: BaseAmount = "200".parse().expect("decimal");
//! let sum = a.safe_add(&b).expect("no overflow");
//! assert_eq!(sum.to_string(), "300");
//! assert!(a.safe_div(&BaseAmount::ZERO, Rounding::Down).is_err());
//! ```

use crate::domain::{FixedPoint, Percentage, Rounding, Unit};
use crate::error::AmmError;

/// Fallible arithmetic for tagged fixed-point values.
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: errors propagate instead of clamping.
/// - A zero divisor is always reported as [`AmmError::DivisionByZero`],
///   never as an overflow.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result would be
    /// negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Rescaled multiplication with explicit [`Rounding`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result exceeds the
    /// representable range.
    fn safe_mul(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError>;

    /// Rescaled division with explicit [`Rounding`].
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `other` is zero.
    /// - [`AmmError::ArithmeticOverflow`] if the quotient overflows.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError>;

    /// `self / whole` as a [`Percentage`].
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `whole` is zero.
    /// - [`AmmError::InvalidAmount`] if `self > whole`.
    fn safe_ratio(&self, whole: &Self, rounding: Rounding) -> Result<Percentage, AmmError>;
}

impl<U: Unit> CheckedArithmetic for FixedPoint<U> {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("fixed-point addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("fixed-point subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError> {
        self.checked_mul(other, rounding)
            .ok_or(AmmError::ArithmeticOverflow("fixed-point multiplication overflow"))
    }

    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError> {
        if other.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        self.checked_div(other, rounding)
            .ok_or(AmmError::ArithmeticOverflow("fixed-point division overflow"))
    }

    fn safe_ratio(&self, whole: &Self, rounding: Rounding) -> Result<Percentage, AmmError> {
        if whole.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        self.checked_ratio(whole, rounding)
            .ok_or(AmmError::InvalidAmount("ratio part exceeds whole"))
    }
}
