//! 256-bit intermediates for scaled multiplication and division.
//!
//! Two 18-decimal values multiplied together need up to 256 bits before
//! the scale is divided back out.  [`mul_div`] widens both operands,
//! divides with an explicit [`Rounding`], and only then narrows back to
//! `u128`, so the only overflow that can be reported is one where the
//! *final* value does not fit.

use uint::construct_uint;

use crate::domain::Rounding;

construct_uint! {
    /// Unsigned 256-bit integer used for intermediate products.
    pub struct U256(4);
}

/// Computes `a * b / denominator` with a 256-bit intermediate.
///
/// Returns [`None`] if `denominator` is zero or the rounded quotient does
/// not fit in a `u128`.
///
/// # Examples
///
/// ```
/// use stake_pool_amm::domain::Rounding;
/// use stake_pool_amm::math::mul_div;
///
/// assert_eq!(mul_div(10, 10, 3, Rounding::Down), Some(33));
/// assert_eq!(mul_div(10, 10, 3, Rounding::Up), Some(34));
/// assert_eq!(mul_div(u128::MAX, 2, 2, Rounding::Down), Some(u128::MAX));
/// assert_eq!(mul_div(1, 1, 0, Rounding::Down), None);
/// ```
#[must_use]
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let product = U256::from(a) * U256::from(b);
    narrow(rounding.divide(product, U256::from(denominator)))
}

fn narrow(value: U256) -> Option<u128> {
    if value > U256::from(u128::MAX) {
        None
    } else {
        Some(value.as_u128())
    }
}
