//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use stake_pool_amm::prelude::*;
//! ```

pub use crate::domain::{
    BaseAmount, DerivativeAmount, FeeCurve, FixedPoint, Percentage, Price, Rounding, ShareAmount,
    SwapReceipt, Withdrawal,
};

pub use crate::traits::{FromConfig, LiquidityPool, SwapPool};

pub use crate::math::CheckedArithmetic;

pub use crate::config::PoolConfig;

pub use crate::error::{AmmError, Result};

pub use crate::pool::{Pool, PoolState, Transition};
