//! Unified error type for the stake pool engine.
//!
//! Every fallible operation in the crate returns [`AmmError`].  Errors are
//! detected before any state is committed, so a failed call always leaves
//! the [`Pool`](crate::pool::Pool) exactly as it was and the caller may
//! retry after fixing the input.

use thiserror::Error;

/// Failure kinds reported by the engine.
///
/// Variants carrying a `&'static str` name the computation or parameter
/// that failed so that log lines stay useful without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// Pool construction (or state restore) received inconsistent
    /// parameters.
    #[error("invalid pool parameters: {0}")]
    InvalidParameters(&'static str),

    /// An operation input quantity was zero or otherwise unusable.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A burn requested zero shares or more shares than are in circulation.
    #[error("insufficient shares")]
    InsufficientShares,

    /// The pool cannot pay out the requested base asset.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A fixed-point computation left the representable range.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// A fixed-point division had a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Decimal text could not be converted to a fixed-point value without
    /// loss.
    #[error("invalid decimal: {0}")]
    InvalidDecimal(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
