//! Scaled-integer quantity shared by every amount, price and percentage.

use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;

use super::unit::{Base, Derivative, Percent, Rate, Share, Unit};
use super::Rounding;
use crate::error::AmmError;
use crate::math::mul_div;

/// Number of decimal digits below the unit.
pub const DECIMALS: u32 = 18;

/// Raw representation of `1.0` (the shared precision factor).
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Amount of the base asset.
pub type BaseAmount = FixedPoint<Base>;
/// Amount of the derivative asset.
pub type DerivativeAmount = FixedPoint<Derivative>;
/// Amount of pool shares.
pub type ShareAmount = FixedPoint<Share>;
/// Derivative-to-base exchange rate.
pub type Price = FixedPoint<Rate>;
/// Fraction in `[0, 1]`.
pub type Percentage = FixedPoint<Percent>;

/// A non-negative decimal quantity stored as `raw / 10^18`.
///
/// The unit tag `U` fixes what the number measures.  All arithmetic is
/// checked: methods return `None` on overflow, underflow or division by
/// zero instead of wrapping or panicking.  Multiplication and division
/// rescale through a 256-bit intermediate and take an explicit
/// [`Rounding`].
///
/// # Examples
///
/// ```
/// use stake_pool_amm::domain::{BaseAmount, Rounding};
///
/// let a: BaseAmount = "1.5".parse().expect("decimal");
/// let b: BaseAmount = "2".parse().expect("decimal");
/// assert_eq!(a.checked_mul(&b, Rounding::Down).map(|v| v.to_string()), Some("3".into()));
/// assert_eq!(b.checked_sub(&a).map(|v| v.to_string()), Some("0.5".into()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct FixedPoint<U> {
    raw: u128,
    unit: PhantomData<U>,
}

impl<U: Unit> FixedPoint<U> {
    /// Zero.
    pub const ZERO: Self = Self::from_raw(0);

    /// One whole unit.
    pub const ONE: Self = Self::from_raw(SCALE);

    /// Largest representable value.
    pub const MAX: Self = Self::from_raw(u128::MAX);

    /// Wraps an already-scaled integer.
    pub const fn from_raw(raw: u128) -> Self {
        Self {
            raw,
            unit: PhantomData,
        }
    }

    /// Returns the scaled integer.
    #[must_use]
    pub const fn raw(&self) -> u128 {
        self.raw
    }

    /// Builds a whole-number value. Returns `None` if `value * SCALE`
    /// overflows.
    #[must_use]
    pub const fn from_integer(value: u128) -> Option<Self> {
        match value.checked_mul(SCALE) {
            Some(raw) => Some(Self::from_raw(raw)),
            None => None,
        }
    }

    /// Builds `numerator / denominator`.
    ///
    /// Returns `None` if `denominator` is zero or the result overflows.
    #[must_use]
    pub fn from_fraction(numerator: u128, denominator: u128, rounding: Rounding) -> Option<Self> {
        mul_div(numerator, SCALE, denominator, rounding).map(Self::from_raw)
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.raw == 0
    }

    /// Whole-unit part, truncated.
    #[must_use]
    pub const fn integer_part(&self) -> u128 {
        self.raw / SCALE
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.raw.checked_add(other.raw) {
            Some(raw) => Some(Self::from_raw(raw)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` if `other > self`.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.raw.checked_sub(other.raw) {
            Some(raw) => Some(Self::from_raw(raw)),
            None => None,
        }
    }

    /// Subtraction clamped at zero.
    pub const fn saturating_sub(&self, other: &Self) -> Self {
        Self::from_raw(self.raw.saturating_sub(other.raw))
    }

    /// Rescaled multiplication: `self * other / SCALE`.
    #[must_use]
    pub fn checked_mul(&self, other: &Self, rounding: Rounding) -> Option<Self> {
        mul_div(self.raw, other.raw, SCALE, rounding).map(Self::from_raw)
    }

    /// Rescaled division: `self * SCALE / other`.
    ///
    /// Returns `None` if `other` is zero or the quotient overflows.
    #[must_use]
    pub fn checked_div(&self, other: &Self, rounding: Rounding) -> Option<Self> {
        mul_div(self.raw, SCALE, other.raw, rounding).map(Self::from_raw)
    }

    /// Multiplies by the ratio `numerator / denominator` of another kind
    /// without rounding the ratio first.
    ///
    /// Returns `None` if `denominator` is zero or the result overflows.
    #[must_use]
    pub fn scale_by<V: Unit>(
        &self,
        numerator: &FixedPoint<V>,
        denominator: &FixedPoint<V>,
        rounding: Rounding,
    ) -> Option<Self> {
        mul_div(self.raw, numerator.raw, denominator.raw, rounding).map(Self::from_raw)
    }

    /// Returns `self / whole` as a [`Percentage`].
    ///
    /// Returns `None` if `whole` is zero or `self > whole`.
    #[must_use]
    pub fn checked_ratio(&self, whole: &Self, rounding: Rounding) -> Option<Percentage> {
        if self.raw > whole.raw {
            return None;
        }
        mul_div(self.raw, SCALE, whole.raw, rounding).map(Percentage::from_raw)
    }

    /// Approximate `f64` value for display. Never used for decisions.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64_lossy(&self) -> f64 {
        let whole = (self.raw / SCALE) as f64;
        let frac = (self.raw % SCALE) as f64 / SCALE as f64;
        whole + frac
    }
}

impl Price {
    /// Converts a derivative-asset amount into its base-asset value at
    /// this rate.
    #[must_use]
    pub fn convert(&self, amount: &DerivativeAmount, rounding: Rounding) -> Option<BaseAmount> {
        mul_div(amount.raw, self.raw, SCALE, rounding).map(BaseAmount::from_raw)
    }
}

impl Percentage {
    /// Returns `true` if the value lies in `[0, 1]`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.raw <= SCALE
    }

    /// Returns `1 - self`, or `None` above one.
    #[must_use]
    pub const fn complement(&self) -> Option<Self> {
        match SCALE.checked_sub(self.raw) {
            Some(raw) => Some(Self::from_raw(raw)),
            None => None,
        }
    }

    /// Takes this fraction of `amount`, keeping the amount's kind.
    #[must_use]
    pub fn apply<U: Unit>(&self, amount: &FixedPoint<U>, rounding: Rounding) -> Option<FixedPoint<U>> {
        mul_div(amount.raw, self.raw, SCALE, rounding).map(FixedPoint::from_raw)
    }
}

impl<U: Unit> fmt::Display for FixedPoint<U> {
    /// Exact decimal rendering with trailing zeros trimmed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.raw / SCALE;
        let mut frac = self.raw % SCALE;
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let mut width = DECIMALS as usize;
        while frac % 10 == 0 {
            frac /= 10;
            width -= 1;
        }
        write!(f, "{whole}.{frac:0width$}")
    }
}

impl<U: Unit> fmt::Debug for FixedPoint<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self})", U::NAME)
    }
}

impl<U: Unit> FromStr for FixedPoint<U> {
    type Err = AmmError;

    /// Parses `digits` or `digits.digits`.
    ///
    /// More than [`DECIMALS`] fractional digits would lose precision and
    /// are rejected rather than rounded.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.ends_with('.') {
            return Err(AmmError::InvalidDecimal("missing fractional digits"));
        }
        let (whole_text, frac_text) = text.split_once('.').unwrap_or((text, ""));
        if whole_text.is_empty() {
            return Err(AmmError::InvalidDecimal("missing integer digits"));
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole_text) || !all_digits(frac_text) {
            return Err(AmmError::InvalidDecimal("expected decimal digits"));
        }
        if frac_text.len() > DECIMALS as usize {
            return Err(AmmError::InvalidDecimal(
                "more fractional digits than the fixed-point scale holds",
            ));
        }

        let whole: u128 = whole_text
            .parse()
            .map_err(|_| AmmError::InvalidDecimal("integer part out of range"))?;
        let mut frac: u128 = 0;
        for digit in frac_text.bytes() {
            frac = frac * 10 + u128::from(digit - b'0');
        }
        // frac_text.len() <= DECIMALS, so the exponent is non-negative.
        frac *= 10u128.pow(DECIMALS - frac_text.len() as u32);

        whole
            .checked_mul(SCALE)
            .and_then(|raw| raw.checked_add(frac))
            .map(Self::from_raw)
            .ok_or(AmmError::ArithmeticOverflow(
                "decimal value exceeds fixed-point range",
            ))
    }
}

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for FixedPoint<U> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for FixedPoint<U> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
