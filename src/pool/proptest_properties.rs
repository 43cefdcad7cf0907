//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Fee bounds**: every swap fee lies in `[min_fee, max_fee]`.
//! 2. **Round trip**: deposit then burn the minted shares never returns
//!    more value than deposited.
//! 3. **Proportionality**: burning `k` twice matches burning `2k` once
//!    within rounding.
//! 4. **Conservation**: zero share supply implies empty reserves after any
//!    operation sequence.
//! 5. **Fee monotonicity**: a larger swap never pays a lower fee.
//! 6. **Atomic rejection**: a failed operation leaves the pool unchanged.

#![allow(clippy::panic)]

use proptest::prelude::*;

use super::{add_liquidity, init, remove_liquidity, swap, Pool};
use crate::domain::{
    BaseAmount, DerivativeAmount, Percentage, Price, Rounding, ShareAmount, SCALE,
};
use crate::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Helpers and strategies
// ---------------------------------------------------------------------------

fn make_pool(price: u128, fee_a: u128, fee_b: u128, target: u128) -> Pool {
    let Ok(pool) = init(
        Price::from_raw(price),
        Percentage::from_raw(fee_a.min(fee_b)),
        Percentage::from_raw(fee_a.max(fee_b)),
        BaseAmount::from_raw(target),
    ) else {
        panic!("valid pool parameters");
    };
    pool
}

/// Raw amounts between one millionth and one million units.
fn amount_strategy() -> impl Strategy<Value = u128> {
    SCALE / 1_000_000..=1_000_000 * SCALE
}

fn price_strategy() -> impl Strategy<Value = u128> {
    SCALE / 1_000..=10 * SCALE
}

fn fee_strategy() -> impl Strategy<Value = u128> {
    0..=SCALE / 10
}

fn pool_strategy() -> impl Strategy<Value = Pool> {
    (
        price_strategy(),
        fee_strategy(),
        fee_strategy(),
        amount_strategy(),
    )
        .prop_map(|(price, a, b, target)| make_pool(price, a, b, target))
}

/// A pool holding both assets: one deposit followed by one swap.
fn funded_pool_strategy() -> impl Strategy<Value = Pool> {
    (pool_strategy(), amount_strategy(), 0u128..=500).prop_map(|(mut pool, deposit, per_mille)| {
        let Ok(_) = LiquidityPool::add_liquidity(&mut pool, BaseAmount::from_raw(deposit)) else {
            panic!("first deposit succeeds");
        };
        // swap roughly `per_mille` of the base reserve worth of derivative
        let target_base = deposit / 1_000 * per_mille;
        if let Some(derivative_in) =
            DerivativeAmount::from_fraction(target_base, pool.price().raw(), Rounding::Down)
        {
            let _ = SwapPool::swap(&mut pool, derivative_in);
        }
        pool
    })
}

#[derive(Debug, Clone)]
enum Op {
    Add(u128),
    Remove(u128),
    Swap(u128),
    Reprice(u128),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        amount_strategy().prop_map(Op::Add),
        (1u128..=1_000).prop_map(Op::Remove),
        amount_strategy().prop_map(Op::Swap),
        price_strategy().prop_map(Op::Reprice),
    ]
}

fn apply(pool: &mut Pool, op: &Op) -> bool {
    match *op {
        Op::Add(raw) => LiquidityPool::add_liquidity(pool, BaseAmount::from_raw(raw)).is_ok(),
        Op::Remove(per_mille) => {
            let supply = pool.share_supply();
            let shares = if per_mille == 1_000 {
                supply
            } else {
                ShareAmount::from_raw(supply.raw() / 1_000 * per_mille)
            };
            LiquidityPool::remove_liquidity(pool, shares).is_ok()
        }
        Op::Swap(raw) => SwapPool::swap(pool, DerivativeAmount::from_raw(raw)).is_ok(),
        Op::Reprice(raw) => match pool.with_price(Price::from_raw(raw)) {
            Ok(next) => {
                *pool = next;
                true
            }
            Err(_) => false,
        },
    }
}

// ---------------------------------------------------------------------------
// Property 1: Fee bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_fee_within_bounds(
        pool in funded_pool_strategy(),
        derivative_in in amount_strategy(),
    ) {
        let derivative_in = DerivativeAmount::from_raw(derivative_in);
        let Ok(fee) = pool.quote_fee(derivative_in) else {
            return Ok(());
        };
        prop_assert!(
            fee >= pool.min_fee() && fee <= pool.max_fee(),
            "quoted fee {fee} out of bounds"
        );

        if let Ok(transition) = swap(&pool, derivative_in) {
            let receipt = transition.output();
            prop_assert!(receipt.fee() >= pool.min_fee());
            prop_assert!(receipt.fee() <= pool.max_fee());
            prop_assert!(receipt.base_out() <= receipt.gross_base());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_round_trip_base_only_pool_is_exact(
        pool in pool_strategy(),
        seed in amount_strategy(),
        deposit in amount_strategy(),
    ) {
        let mut pool = pool;
        let Ok(_) = LiquidityPool::add_liquidity(&mut pool, BaseAmount::from_raw(seed)) else {
            return Ok(());
        };
        let deposit = BaseAmount::from_raw(deposit);
        let Ok(minted) = LiquidityPool::add_liquidity(&mut pool, deposit) else {
            return Ok(());
        };
        let Ok(withdrawal) = LiquidityPool::remove_liquidity(&mut pool, minted) else {
            return Err(TestCaseError::fail("burning freshly minted shares must succeed"));
        };
        prop_assert!(withdrawal.derivative().is_zero());
        prop_assert!(withdrawal.base() <= deposit);
        prop_assert!(deposit.raw() - withdrawal.base().raw() <= 1);
    }

    #[test]
    fn prop_round_trip_never_gains_value(
        pool in funded_pool_strategy(),
        deposit in amount_strategy(),
    ) {
        let mut pool = pool;
        let deposit = BaseAmount::from_raw(deposit);
        let Ok(minted) = LiquidityPool::add_liquidity(&mut pool, deposit) else {
            return Ok(());
        };
        let Ok(withdrawal) = LiquidityPool::remove_liquidity(&mut pool, minted) else {
            return Err(TestCaseError::fail("burning freshly minted shares must succeed"));
        };
        let Ok(value) = withdrawal.value_in_base(&pool.price()) else {
            return Ok(());
        };
        prop_assert!(value <= deposit, "round trip returned {value} for {deposit}");
    }
}

// ---------------------------------------------------------------------------
// Property 3: Proportionality
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_split_removal_matches_single(
        pool in funded_pool_strategy(),
        per_mille in 1u128..=500,
    ) {
        let k = ShareAmount::from_raw(pool.share_supply().raw() / 1_000 * per_mille);
        if k.is_zero() {
            return Ok(());
        }
        let Some(double) = k.checked_add(&k) else {
            return Ok(());
        };

        let Ok(first) = remove_liquidity(&pool, k) else {
            return Err(TestCaseError::fail("first removal"));
        };
        let Ok(second) = remove_liquidity(first.next(), k) else {
            return Err(TestCaseError::fail("second removal"));
        };
        let Ok(once) = remove_liquidity(&pool, double) else {
            return Err(TestCaseError::fail("single removal"));
        };

        let split_base = first.output().base().raw() + second.output().base().raw();
        let split_derivative =
            first.output().derivative().raw() + second.output().derivative().raw();
        prop_assert!(split_base.abs_diff(once.output().base().raw()) <= 2);
        prop_assert!(split_derivative.abs_diff(once.output().derivative().raw()) <= 2);
    }
}

// ---------------------------------------------------------------------------
// Properties 4 and 6: Conservation and atomic rejection
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_empty_supply_means_empty_reserves(
        pool in pool_strategy(),
        ops in proptest::collection::vec(op_strategy(), 1..40),
    ) {
        let mut pool = pool;
        for op in &ops {
            let before = pool;
            if !apply(&mut pool, op) {
                prop_assert_eq!(pool, before, "rejected {:?} mutated the pool", op);
            }
            if pool.share_supply().is_zero() {
                prop_assert!(pool.base_reserve().is_zero(), "orphan base after {:?}", op);
                prop_assert!(
                    pool.derivative_reserve().is_zero(),
                    "orphan derivative after {:?}",
                    op
                );
            }
        }
    }

    #[test]
    fn prop_pure_operations_do_not_mutate_input(
        pool in funded_pool_strategy(),
        amount in amount_strategy(),
    ) {
        let before = pool;
        let _ = add_liquidity(&pool, BaseAmount::from_raw(amount));
        let _ = remove_liquidity(&pool, ShareAmount::from_raw(amount));
        let _ = swap(&pool, DerivativeAmount::from_raw(amount));
        prop_assert_eq!(pool, before);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Fee monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_fee_monotonic_in_input(
        pool in funded_pool_strategy(),
        a in amount_strategy(),
        b in amount_strategy(),
    ) {
        let (small, large) = (a.min(b), a.max(b));
        let Ok(small_fee) = pool.quote_fee(DerivativeAmount::from_raw(small)) else {
            return Ok(());
        };
        let Ok(large_fee) = pool.quote_fee(DerivativeAmount::from_raw(large)) else {
            return Ok(());
        };
        prop_assert!(large_fee >= small_fee, "fee fell from {small_fee} to {large_fee}");
    }
}
