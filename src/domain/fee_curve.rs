//! Utilization-dependent swap fee.

use core::fmt;

use super::{BaseAmount, Percentage, Rounding};
use crate::error::AmmError;

/// Linear fee curve between `max_fee` (empty reserve) and `min_fee`
/// (reserve at or above `liquidity_target`).
///
/// ```text
/// fee(after) = max_fee - (max_fee - min_fee) * after / liquidity_target
/// ```
///
/// clamped to `[min_fee, max_fee]`.  `after` is the base reserve the pool
/// would be left with once a swap paid out its gross amount, so the fee
/// rises as a trade drains the reserve below target.
///
/// # Invariants
///
/// - `min_fee <= max_fee <= 1`
/// - `liquidity_target > 0`
///
/// # Examples
///
/// ```
/// use stake_pool_amm::domain::{BaseAmount, FeeCurve, Percentage};
///
/// let curve = FeeCurve::new(
///     "0.001".parse().expect("decimal"),
///     "0.03".parse().expect("decimal"),
///     "90".parse().expect("decimal"),
/// ).expect("valid curve");
///
/// let at_target = curve.fee_at(&"90".parse().expect("decimal")).expect("fee");
/// assert_eq!(at_target, curve.min_fee());
/// assert_eq!(curve.fee_at(&BaseAmount::ZERO).expect("fee"), curve.max_fee());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeeCurve {
    min_fee: Percentage,
    max_fee: Percentage,
    liquidity_target: BaseAmount,
}

impl FeeCurve {
    /// Creates a validated fee curve.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidParameters`] if `max_fee` exceeds one,
    /// `min_fee > max_fee`, or `liquidity_target` is zero.
    pub fn new(
        min_fee: Percentage,
        max_fee: Percentage,
        liquidity_target: BaseAmount,
    ) -> crate::error::Result<Self> {
        if !max_fee.is_valid_percent() {
            return Err(AmmError::InvalidParameters("max_fee must not exceed 1"));
        }
        if min_fee > max_fee {
            return Err(AmmError::InvalidParameters("min_fee must not exceed max_fee"));
        }
        if liquidity_target.is_zero() {
            return Err(AmmError::InvalidParameters("liquidity_target must be positive"));
        }
        Ok(Self {
            min_fee,
            max_fee,
            liquidity_target,
        })
    }

    /// Fee charged when the reserve ends at or above target.
    pub const fn min_fee(&self) -> Percentage {
        self.min_fee
    }

    /// Fee charged when the reserve would be fully drained.
    pub const fn max_fee(&self) -> Percentage {
        self.max_fee
    }

    /// Reserve level at which the fee bottoms out.
    pub const fn liquidity_target(&self) -> BaseAmount {
        self.liquidity_target
    }

    /// `max_fee - min_fee`.
    pub const fn spread(&self) -> Percentage {
        self.max_fee.saturating_sub(&self.min_fee)
    }

    /// Fee for a swap that would leave `amount_after` in the base reserve.
    ///
    /// The discount from `max_fee` rounds down, so rounding never lowers
    /// the fee.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if the target is zero, which only a
    ///   corrupted curve can have.
    /// - [`AmmError::ArithmeticOverflow`] if the discount overflows.
    pub fn fee_at(&self, amount_after: &BaseAmount) -> crate::error::Result<Percentage> {
        if self.liquidity_target.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        if *amount_after >= self.liquidity_target {
            return Ok(self.min_fee);
        }
        let discount = self
            .spread()
            .scale_by(amount_after, &self.liquidity_target, Rounding::Down)
            .ok_or(AmmError::ArithmeticOverflow("fee discount overflow"))?;
        let fee = self.max_fee.saturating_sub(&discount);
        Ok(fee.clamp(self.min_fee, self.max_fee))
    }
}

impl fmt::Display for FeeCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FeeCurve(min={}, max={}, target={})",
            self.min_fee, self.max_fee, self.liquidity_target
        )
    }
}
