//! Arithmetic helpers for fixed-point computation.
//!
//! - [`CheckedArithmetic`] lifts the `Option`-returning operations of
//!   [`FixedPoint`](crate::domain::FixedPoint) into
//!   [`Result`](crate::error::Result) with a specific error variant.
//! - [`mul_div`] performs `a * b / d` through a 256-bit intermediate.

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{mul_div, U256};
