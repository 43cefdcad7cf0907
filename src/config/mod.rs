//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for a pool: the derivative
//! price and the dynamic-fee parameters.  Reserves and share supply are
//! not configuration; they start at zero and change only through pool
//! operations.

mod pool_config;

pub use pool_config::PoolConfig;
