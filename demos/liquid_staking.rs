//! Liquid-staking pool walkthrough.
//!
//! Demonstrates:
//! 1. Building a pool from a validated [`PoolConfig`]
//! 2. Depositing base asset and receiving shares
//! 3. Swapping derivative asset for base asset at rising fees
//! 4. Refreshing the oracle price
//! 5. Withdrawing a proportional slice of both reserves
//! 6. Exporting and restoring the state record
//!
//! Run with `RUST_LOG=debug` to see every committed and rejected
//! operation.

use stake_pool_amm::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_target(false)
        .init();

    // 1. Config: 1 derivative = 1.5 base, fee from 0.1% up to 3%,
    //    bottoming out once 90 base stays in the pool.
    let config = PoolConfig::new(
        "1.5".parse()?,
        "0.001".parse()?,
        "0.03".parse()?,
        "90".parse()?,
    )?;
    let mut pool = Pool::from_config(&config)?;
    info!(fee_curve = %pool.fee_curve(), "pool ready");

    // 2. Two depositors.
    let alice = pool.add_liquidity("100".parse()?)?;
    let bob = pool.add_liquidity("25".parse()?)?;
    info!(alice = %alice, bob = %bob, "shares issued");

    // 3. Swaps of growing size pay growing fees.
    for amount in ["2", "10", "20"] {
        let derivative_in: DerivativeAmount = amount.parse()?;
        let quoted = pool.quote_fee(derivative_in)?;
        let receipt = pool.swap(derivative_in)?;
        info!(
            derivative_in = %receipt.derivative_in(),
            quoted_fee = %quoted,
            fee = %receipt.fee(),
            base_out = %receipt.base_out(),
            retained = %receipt.fee_amount(),
            "swap"
        );
    }

    // An oversized swap is rejected and the pool is untouched.
    let before = pool.state();
    if let Err(err) = pool.swap("1000".parse()?) {
        warn!(error = %err, "oversized swap rejected");
    }
    assert_eq!(pool.state(), before);

    // 4. The staking derivative accrued yield.
    pool = pool.with_price("1.52".parse()?)?;
    let valuation = pool.valuation()?;
    info!(price = %pool.price(), valuation = %valuation, "price refreshed");

    // 5. Bob exits with both assets.
    let withdrawal = pool.remove_liquidity(bob)?;
    let value = withdrawal.value_in_base(&pool.price())?;
    info!(
        base = %withdrawal.base(),
        derivative = %withdrawal.derivative(),
        value = %value,
        "bob withdrew"
    );

    // 6. Persist and reload.
    let state = pool.state();
    let restored = Pool::restore(&state)?;
    let alice_value = restored
        .share_value(alice)?
        .value_in_base(&restored.price())?;
    info!(pool = %restored, alice_value = %alice_value, "restored");

    Ok(())
}
