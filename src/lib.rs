// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

//! Binary fixed-point numbers backed by 8, 16 or 32-bit integers.
//!
//! A value is a raw integer scaled by `2^FRAC_BITS`. The storage type fixes
//! the width and signedness, and the `INT_BITS` const generic splits it:
//! `FixedI32<14>` keeps 14 integer bits (sign included) and 18 fractional
//! bits. Multiplication and division go through a double-width intermediate;
//! everything else works directly on the storage. Overflow wraps like the
//! native integer type.
//!
//! ```
//! use scaled_fixed::{FixedPoint, Q14x18};
//!
//! // 12-bit ADC reading scaled against a 3.3 V reference
//! let adc = Q14x18::from_int(3185);
//! let max = Q14x18::from_int(4095);
//! let vref = Q14x18::from_f32(3.3);
//! let volts = (adc / max) * vref;
//! assert!((volts.to_f64() - 2.5667).abs() < 1e-3);
//!
//! let a = FixedPoint::<i32, 14>::from_f32(42.5);
//! assert_eq!(a.round(), FixedPoint::<i32, 14>::from_int(43));
//! ```
//!
//! Configuration mistakes are rejected at build time. There must be at least
//! one integer bit and one fractional bit:
//!
//! ```compile_fail
//! use scaled_fixed::FixedI32;
//! let _ = FixedI32::<32>::from_int(1);
//! ```
//!
//! ```compile_fail
//! use scaled_fixed::FixedU16;
//! let _ = FixedU16::<0>::from_int(1);
//! ```
//!
//! The guard also covers the constants, `Default` and the value methods:
//!
//! ```compile_fail
//! use scaled_fixed::FixedI32;
//! let _ = FixedI32::<32>::MAX;
//! ```
//!
//! ```compile_fail
//! use scaled_fixed::FixedU16;
//! let _ = FixedU16::<0>::ZERO;
//! ```
//!
//! ```compile_fail
//! use scaled_fixed::FixedU16;
//! let _ = FixedU16::<0>::default();
//! ```
//!
//! ```compile_fail
//! use scaled_fixed::FixedI32;
//! let _ = FixedI32::<32>::from_raw(7).abs();
//! ```
//!
//! ```compile_fail
//! use scaled_fixed::FixedI8;
//! let _ = FixedI8::<0>::EPSILON.wrapping_add(FixedI8::<0>::EPSILON);
//! ```
//!
//! Unsigned types have no negation and no `NEG_ONE`:
//!
//! ```compile_fail
//! use scaled_fixed::Q16x16;
//! let _ = -Q16x16::ONE;
//! ```
//!
//! ```compile_fail
//! use scaled_fixed::Q16x16;
//! let _ = Q16x16::NEG_ONE;
//! ```
//!
//! Types with different configurations do not mix:
//!
//! ```compile_fail
//! use scaled_fixed::{SQ13x18, SQ15x16};
//! let _ = SQ13x18::ONE + SQ15x16::ONE;
//! ```
//!
//! Enable the `serde` feature to (de)serialize values as their raw storage
//! integer, and `bytemuck` for zero-copy casts.

pub mod error;
pub mod fixed_point;
pub mod repr;

pub use error::{FixedPointError, Result};
pub use fixed_point::{
    FixedI16, FixedI32, FixedI8, FixedU16, FixedU32, FixedU8, Q14x18, Q16x16, SQ13x18, SQ15x16,
};
pub use repr::{FixedPoint, Repr};
