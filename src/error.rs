// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors returned by the explicit-result conversions and `try_div`.
///
/// The operator paths never return these; they wrap like native integers.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FixedPointError {
    #[error("integer value does not fit the fixed-point integer range")]
    IntegerConversionError,

    #[error("value {value} is outside the representable fixed-point range")]
    Overflow { value: f64 },

    #[error("cannot convert non-finite value {value} to fixed-point")]
    NotFinite { value: f64 },

    #[error("division by zero")]
    DivisionByZero,
}

pub type Result<T, E = FixedPointError> = core::result::Result<T, E>;
