//! Configuration for a liquid-staking swap pool.

use crate::domain::{BaseAmount, FeeCurve, Percentage, Price};
use crate::error::AmmError;

/// Immutable parameters of a liquid-staking pool.
///
/// # Validation
///
/// - `price` must be positive.
/// - `max_fee` must not exceed one.
/// - `min_fee` must not exceed `max_fee`.
/// - `liquidity_target` must be positive.
///
/// # Examples
///
/// ```
/// use stake_pool_amm::config::PoolConfig;
///
/// let config = PoolConfig::new(
///     "1.5".parse().expect("decimal"),
///     "0.001".parse().expect("decimal"),
///     "0.03".parse().expect("decimal"),
///     "90".parse().expect("decimal"),
/// )
/// .expect("valid config");
/// assert_eq!(config.price().to_string(), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    price: Price,
    min_fee: Percentage,
    max_fee: Percentage,
    liquidity_target: BaseAmount,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidParameters`] if any invariant listed on
    /// the type fails.
    pub fn new(
        price: Price,
        min_fee: Percentage,
        max_fee: Percentage,
        liquidity_target: BaseAmount,
    ) -> Result<Self, AmmError> {
        let config = Self {
            price,
            min_fee,
            max_fee,
            liquidity_target,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// Deserialized configs bypass [`PoolConfig::new`], so pool
    /// construction calls this again.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidParameters`] on the first failing check.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.price.is_zero() {
            return Err(AmmError::InvalidParameters("price must be positive"));
        }
        self.fee_curve().map(|_| ())
    }

    /// Builds the fee curve described by this config.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidParameters`] if the fee bounds or target
    /// are invalid.
    pub fn fee_curve(&self) -> Result<FeeCurve, AmmError> {
        FeeCurve::new(self.min_fee, self.max_fee, self.liquidity_target)
    }

    /// Base-asset value of one unit of derivative asset.
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Fee floor.
    pub const fn min_fee(&self) -> Percentage {
        self.min_fee
    }

    /// Fee ceiling.
    pub const fn max_fee(&self) -> Percentage {
        self.max_fee
    }

    /// Base reserve level at which the fee bottoms out.
    pub const fn liquidity_target(&self) -> BaseAmount {
        self.liquidity_target
    }
}
