// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

//! Backing-integer configuration.
//!
//! Every primitive that can back a fixed-point number implements [`Repr`],
//! which names its double-width intermediate type and the fixed-point type
//! built on it. The implementations are emitted by `fixed_point!`, next to
//! the type they describe.

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A primitive integer usable as fixed-point storage.
///
/// Sealed: the wide type must be exactly twice as wide with the same
/// signedness, and at most 64 bits, which only the crate's own
/// instantiations guarantee.
pub trait Repr: sealed::Sealed + Copy {
    /// Intermediate type for multiplication, division and integer scaling.
    type Wide: Copy;

    /// Fixed-point number with `INT_BITS` integer bits stored in `Self`.
    type Fixed<const INT_BITS: u32>: Copy
        + Eq
        + Ord
        + core::hash::Hash
        + core::fmt::Debug
        + Default;

    const SIGNED: bool;
}

/// `FixedPoint<i32, 14>` is `FixedI32<14>`: 14 integer bits (sign included),
/// 18 fractional bits.
pub type FixedPoint<R, const INT_BITS: u32> = <R as Repr>::Fixed<INT_BITS>;
