//! Compile-time unit tags for [`FixedPoint`](super::FixedPoint).
//!
//! Each quantity kind is a zero-sized marker.  Arithmetic between two
//! values is only offered when their tags agree, so adding a share amount
//! to a base-asset amount does not type-check.

use core::fmt::Debug;
use core::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// A quantity kind that can tag a [`FixedPoint`](super::FixedPoint).
///
/// Sealed: the set of kinds is fixed by the engine.
pub trait Unit: sealed::Sealed + Copy + Ord + Hash + Default + Debug {
    /// Name used by the `Debug` rendering of tagged values.
    const NAME: &'static str;
}

macro_rules! unit {
    ($(#[$doc:meta])* $marker:ident => $name:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $marker;

        impl sealed::Sealed for $marker {}

        impl Unit for $marker {
            const NAME: &'static str = $name;
        }
    };
}

unit! {
    /// The primary asset held and paid out by the pool.
    Base => "BaseAmount"
}

unit! {
    /// The yield-bearing asset swapped into the pool.
    Derivative => "DerivativeAmount"
}

unit! {
    /// Pool share tokens.
    Share => "ShareAmount"
}

unit! {
    /// Exchange rate of derivative asset into base asset.
    Rate => "Price"
}

unit! {
    /// Dimensionless fraction, meaningful in `[0, 1]`.
    Percent => "Percentage"
}
