//! # Stake Pool AMM
//!
//! Fixed-point accounting engine for a two-asset liquid-staking pool.
//!
//! The pool holds a **base asset** and a yield-bearing **derivative
//! asset** convertible to base at an externally supplied price.
//! Depositors add base asset and receive shares that claim a proportional
//! slice of both reserves.  Traders swap derivative asset for base asset
//! and pay a fee that rises as the trade drains the base reserve below
//! its liquidity target.
//!
//! All quantities are 18-decimal fixed-point integers tagged with their
//! unit, so amounts of different assets cannot be mixed.  No floating
//! point is used in any computation.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for values, config and state |
//!
//! # Quick Start
//!
//! ```
//! use stake_pool_amm::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = PoolConfig::new(
//!     "1.5".parse()?,
//!     "0.001".parse()?,
//!     "0.03".parse()?,
//!     "90".parse()?,
//! )?;
//! let mut pool = Pool::from_config(&config)?;
//!
//! let shares = pool.add_liquidity("100".parse()?)?;
//! assert_eq!(shares.to_string(), "100");
//!
//! let receipt = pool.swap("10".parse()?)?;
//! assert_eq!(receipt.gross_base().to_string(), "15");
//! assert_eq!(receipt.base_out().to_string(), "14.96083333333333332");
//! assert_eq!(pool.derivative_reserve().to_string(), "10");
//!
//! let withdrawal = pool.remove_liquidity(shares)?;
//! assert_eq!(withdrawal.derivative().to_string(), "10");
//! assert!(pool.share_supply().is_zero());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`domain`]: fixed-point value types, fee curve and outcome records
//! - [`math`]: checked arithmetic and 256-bit intermediates
//! - [`config`]: declarative pool parameters
//! - [`traits`]: `SwapPool`, `LiquidityPool`, `FromConfig`
//! - [`pool`]: the engine, as pure transitions and committing methods
//! - [`error`]: the crate-wide error type

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
