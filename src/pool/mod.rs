//! The liquid-staking pool engine.
//!
//! [`Pool`] is the only mutable entity: it holds the base and derivative
//! reserves, the share supply, the current derivative price and the fee
//! curve.  Every operation exists in two forms:
//!
//! - a pure function ([`add_liquidity`], [`remove_liquidity`], [`swap`])
//!   that reads a snapshot and returns a [`Transition`] holding the next
//!   state and the operation's output, without touching its input;
//! - a committing trait method ([`LiquidityPool`](crate::traits::LiquidityPool),
//!   [`SwapPool`](crate::traits::SwapPool)) that applies the transition
//!   with a single assignment.
//!
//! A failed operation returns an error before anything is assigned, so
//! the pool is left exactly as it was.

mod liquidity;
mod state;
mod swap;

#[cfg(test)]
mod proptest_properties;

use core::fmt;

use tracing::info;

pub use liquidity::{add_liquidity, remove_liquidity};
pub use state::PoolState;
pub use swap::swap;

use crate::config::PoolConfig;
use crate::domain::{
    BaseAmount, DerivativeAmount, FeeCurve, Percentage, Price, Rounding, ShareAmount, Withdrawal,
};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::FromConfig;

/// Creates an empty pool from positional parameters.
///
/// Reserves and share supply start at zero.
///
/// # Errors
///
/// Returns [`AmmError::InvalidParameters`] unless `price > 0`,
/// `min_fee <= max_fee <= 1` and `liquidity_target > 0`.
///
/// # Examples
///
/// ```
/// use stake_pool_amm::pool::init;
///
/// let pool = init(
///     "1.5".parse().expect("decimal"),
///     "0.001".parse().expect("decimal"),
///     "0.03".parse().expect("decimal"),
///     "90".parse().expect("decimal"),
/// )
/// .expect("valid parameters");
/// assert!(pool.share_supply().is_zero());
/// ```
pub fn init(
    price: Price,
    min_fee: Percentage,
    max_fee: Percentage,
    liquidity_target: BaseAmount,
) -> Result<Pool> {
    let config = PoolConfig::new(price, min_fee, max_fee, liquidity_target)?;
    Pool::new(&config)
}

/// Pool ledger: reserves, share supply, price and fee parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pool {
    price: Price,
    base_reserve: BaseAmount,
    derivative_reserve: DerivativeAmount,
    share_supply: ShareAmount,
    fee_curve: FeeCurve,
}

impl Pool {
    /// Creates an empty pool from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidParameters`] if the configuration fails
    /// validation.
    pub fn new(config: &PoolConfig) -> Result<Self> {
        config.validate()?;
        let fee_curve = config.fee_curve()?;
        info!(
            price = %config.price(),
            min_fee = %fee_curve.min_fee(),
            max_fee = %fee_curve.max_fee(),
            liquidity_target = %fee_curve.liquidity_target(),
            "pool initialized"
        );
        Ok(Self {
            price: config.price(),
            base_reserve: BaseAmount::ZERO,
            derivative_reserve: DerivativeAmount::ZERO,
            share_supply: ShareAmount::ZERO,
            fee_curve,
        })
    }

    /// Rebuilds a pool from a persisted state record.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidParameters`] if the parameters fail the
    /// same checks as [`init`], or if exactly one of the share supply and
    /// the combined reserves is zero.
    pub fn restore(state: &PoolState) -> Result<Self> {
        let config = PoolConfig::new(
            state.price,
            state.min_fee,
            state.max_fee,
            state.liquidity_target,
        )?;
        let reserves_empty = state.base_reserve.is_zero() && state.derivative_reserve.is_zero();
        if state.share_supply.is_zero() && !reserves_empty {
            return Err(AmmError::InvalidParameters(
                "reserves must be empty when no shares are issued",
            ));
        }
        if !state.share_supply.is_zero() && reserves_empty {
            return Err(AmmError::InvalidParameters(
                "issued shares must be backed by reserves",
            ));
        }
        Ok(Self {
            price: config.price(),
            base_reserve: state.base_reserve,
            derivative_reserve: state.derivative_reserve,
            share_supply: state.share_supply,
            fee_curve: config.fee_curve()?,
        })
    }

    /// Exports every stored field for persistence.
    pub const fn state(&self) -> PoolState {
        PoolState {
            price: self.price,
            base_reserve: self.base_reserve,
            derivative_reserve: self.derivative_reserve,
            share_supply: self.share_supply,
            min_fee: self.fee_curve.min_fee(),
            max_fee: self.fee_curve.max_fee(),
            liquidity_target: self.fee_curve.liquidity_target(),
        }
    }

    /// Returns a copy of the pool carrying a refreshed price.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidParameters`] if `price` is zero.
    pub fn with_price(&self, price: Price) -> Result<Self> {
        if price.is_zero() {
            return Err(AmmError::InvalidParameters("price must be positive"));
        }
        Ok(Self { price, ..*self })
    }

    /// Base-asset value of one unit of derivative asset.
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Base asset held by the pool.
    pub const fn base_reserve(&self) -> BaseAmount {
        self.base_reserve
    }

    /// Derivative asset held by the pool.
    pub const fn derivative_reserve(&self) -> DerivativeAmount {
        self.derivative_reserve
    }

    /// Total outstanding shares.
    pub const fn share_supply(&self) -> ShareAmount {
        self.share_supply
    }

    /// Base reserve level at which the fee bottoms out.
    pub const fn liquidity_target(&self) -> BaseAmount {
        self.fee_curve.liquidity_target()
    }

    /// Fee floor.
    pub const fn min_fee(&self) -> Percentage {
        self.fee_curve.min_fee()
    }

    /// Fee ceiling.
    pub const fn max_fee(&self) -> Percentage {
        self.fee_curve.max_fee()
    }

    /// The dynamic-fee parameters.
    pub const fn fee_curve(&self) -> FeeCurve {
        self.fee_curve
    }

    /// `base_reserve + derivative_reserve * price`, recomputed on every
    /// call.
    ///
    /// The derivative term rounds up so that share issuance, which divides
    /// by the valuation, never favours the depositor.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the valuation does not
    /// fit.
    pub fn valuation(&self) -> Result<BaseAmount> {
        self.price
            .convert(&self.derivative_reserve, Rounding::Up)
            .ok_or(AmmError::ArithmeticOverflow("derivative valuation overflow"))?
            .safe_add(&self.base_reserve)
    }

    /// What burning `shares` would pay out right now, without committing.
    ///
    /// # Errors
    ///
    /// Same as [`remove_liquidity`].
    pub fn share_value(&self, shares: ShareAmount) -> Result<Withdrawal> {
        remove_liquidity(self, shares).map(Transition::into_output)
    }
}

impl FromConfig<PoolConfig> for Pool {
    fn from_config(config: &PoolConfig) -> Result<Self> {
        Self::new(config)
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pool(price={}, base={}, derivative={}, shares={})",
            self.price, self.base_reserve, self.derivative_reserve, self.share_supply
        )
    }
}

/// Result of a pure pool operation: the state to commit and the value
/// handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Transition<T> {
    next: Pool,
    output: T,
}

impl<T> Transition<T> {
    pub(crate) const fn new(next: Pool, output: T) -> Self {
        Self { next, output }
    }

    /// The pool state after the operation.
    pub const fn next(&self) -> &Pool {
        &self.next
    }

    /// The operation's output.
    pub const fn output(&self) -> &T {
        &self.output
    }

    /// Discards the next state and keeps the output.
    pub fn into_output(self) -> T {
        self.output
    }

    /// Splits into the next state and the output.
    pub fn into_parts(self) -> (Pool, T) {
        (self.next, self.output)
    }

    /// Replaces `pool` with the next state and returns the output.
    pub fn commit(self, pool: &mut Pool) -> T {
        *pool = self.next;
        self.output
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn dec<T: core::str::FromStr>(text: &str) -> T {
        let Ok(v) = text.parse() else {
            panic!("valid decimal {text}");
        };
        v
    }

    fn make_pool() -> Pool {
        let Ok(pool) = init(dec("1.5"), dec("0.001"), dec("0.03"), dec("90")) else {
            panic!("valid pool");
        };
        pool
    }

    #[test]
    fn init_starts_empty() {
        let pool = make_pool();
        assert!(pool.base_reserve().is_zero());
        assert!(pool.derivative_reserve().is_zero());
        assert!(pool.share_supply().is_zero());
        assert_eq!(pool.price(), dec("1.5"));
        assert_eq!(pool.min_fee(), dec("0.001"));
        assert_eq!(pool.max_fee(), dec("0.03"));
        assert_eq!(pool.liquidity_target(), dec("90"));
    }

    #[test]
    fn init_rejects_bad_parameters() {
        let cases = [
            ("0", "0.001", "0.03", "90"),
            ("1", "0.04", "0.03", "90"),
            ("1", "0", "1.5", "90"),
            ("1", "0", "0.03", "0"),
        ];
        for (price, min, max, target) in cases {
            let Err(AmmError::InvalidParameters(_)) =
                init(dec(price), dec(min), dec(max), dec(target))
            else {
                panic!("expected InvalidParameters for {price} {min} {max} {target}");
            };
        }
    }

    #[test]
    fn from_config_matches_init() {
        let Ok(config) = PoolConfig::new(dec("1.5"), dec("0.001"), dec("0.03"), dec("90")) else {
            panic!("valid config");
        };
        let Ok(pool) = Pool::from_config(&config) else {
            panic!("valid pool");
        };
        assert_eq!(pool, make_pool());
    }

    #[test]
    fn state_round_trip() {
        let pool = make_pool();
        let Ok(restored) = Pool::restore(&pool.state()) else {
            panic!("valid state");
        };
        assert_eq!(restored, pool);
    }

    #[test]
    fn restore_rejects_orphan_reserves() {
        let mut state = make_pool().state();
        state.base_reserve = dec("1");
        let Err(AmmError::InvalidParameters(_)) = Pool::restore(&state) else {
            panic!("expected InvalidParameters");
        };
    }

    #[test]
    fn restore_rejects_unbacked_shares() {
        let mut state = make_pool().state();
        state.share_supply = dec("100");
        let Err(AmmError::InvalidParameters(_)) = Pool::restore(&state) else {
            panic!("expected InvalidParameters");
        };
    }

    #[test]
    fn restore_accepts_shares_backed_by_derivative_only() {
        let mut state = make_pool().state();
        state.share_supply = dec("100");
        state.derivative_reserve = dec("10");
        let Ok(pool) = Pool::restore(&state) else {
            panic!("valid state");
        };
        let Ok(minted) = add_liquidity(&pool, dec("15")) else {
            panic!("deposit into restored pool");
        };
        // valuation = 10 * 1.5 = 15
        assert_eq!(*minted.output(), dec("100"));
    }

    #[test]
    fn restore_rejects_bad_fee_bounds() {
        let mut state = make_pool().state();
        state.min_fee = dec("0.5");
        let Err(AmmError::InvalidParameters(_)) = Pool::restore(&state) else {
            panic!("expected InvalidParameters");
        };
    }

    #[test]
    fn with_price_replaces_only_price() {
        let pool = make_pool();
        let Ok(repriced) = pool.with_price(dec("1.6")) else {
            panic!("valid price");
        };
        assert_eq!(repriced.price(), dec("1.6"));
        assert_eq!(repriced.fee_curve(), pool.fee_curve());
        let Err(AmmError::InvalidParameters(_)) = pool.with_price(Price::ZERO) else {
            panic!("expected InvalidParameters");
        };
    }

    #[test]
    fn valuation_rounds_derivative_term_up() {
        let state = PoolState {
            base_reserve: dec("1"),
            derivative_reserve: DerivativeAmount::from_raw(1),
            share_supply: dec("1"),
            price: dec("0.5"),
            ..make_pool().state()
        };
        let Ok(pool) = Pool::restore(&state) else {
            panic!("valid state");
        };
        let Ok(valuation) = pool.valuation() else {
            panic!("valuation fits");
        };
        assert_eq!(valuation.raw(), dec::<BaseAmount>("1").raw() + 1);
    }

    #[test]
    fn transition_commit_replaces_state() {
        let mut pool = make_pool();
        let Ok(transition) = add_liquidity(&pool, dec("10")) else {
            panic!("valid deposit");
        };
        let next = *transition.next();
        assert_eq!(*transition.output(), dec("10"));
        let shares = transition.commit(&mut pool);
        assert_eq!(shares, dec("10"));
        assert_eq!(pool, next);
    }

    #[test]
    fn display_lists_ledger() {
        assert_eq!(
            make_pool().to_string(),
            "Pool(price=1.5, base=0, derivative=0, shares=0)"
        );
    }
}
