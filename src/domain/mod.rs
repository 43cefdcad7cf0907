//! Value types that model the pool domain.
//!
//! Every quantity is a [`FixedPoint`] tagged with its unit, so base-asset
//! amounts, derivative-asset amounts, shares, prices and percentages
//! cannot be mixed by accident.  Composite values ([`FeeCurve`],
//! [`Withdrawal`], [`SwapReceipt`]) validate their invariants on
//! construction.

mod fee_curve;
mod fixed_point;
mod rounding;
mod swap_receipt;
pub mod unit;
mod withdrawal;

pub use fee_curve::FeeCurve;
pub use fixed_point::{
    BaseAmount, DerivativeAmount, FixedPoint, Percentage, Price, ShareAmount, DECIMALS, SCALE,
};
pub use rounding::Rounding;
pub use swap_receipt::SwapReceipt;
pub use unit::Unit;
pub use withdrawal::Withdrawal;
