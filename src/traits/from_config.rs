//! Generic construction trait for pool instantiation from configuration.
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction, even when the config was already validated by its own
//! constructor: a deserialized config never went through it.

use crate::error::AmmError;

/// Builds a pool from a configuration value.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for Pool`
pub trait FromConfig<C> {
    /// Creates a new pool instance from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidParameters`] if any pool parameter is
    /// out of range or inconsistent.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
