// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::error::{FixedPointError, Result};

// Usage example:
//
// fixed_point! {
//     pub struct FixedU16(u16, u32, false); // unsigned, widened to u32
// }
//
// The generated struct takes the number of integer bits as a const generic
// (`FixedU16<4>` is 4 integer bits, 12 fractional bits). It also implements
// the crate's sealed `Repr` for the storage type, so it is only invoked here.
macro_rules! fixed_point {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident ( $storage:tt, $wide:tt, $signed:tt );
    ) => {
        #[repr(transparent)]
        $(#[$attr])*
        #[derive(Copy, Clone, Debug)]
        $vis struct $name<const INT_BITS: u32>($storage);

        impl<const INT_BITS: u32> $name<INT_BITS> {
            // --- compile-time guards ---
            const __ASSERTS: () = {
                let s_bits = <$storage>::BITS;
                let w_bits = <$wide>::BITS;

                if INT_BITS == 0 {
                    panic!("INT_BITS must be at least 1");
                }

                // at least one fractional bit
                if INT_BITS >= s_bits {
                    panic!("INT_BITS must be < storage bit-width");
                }

                if w_bits < 2 * s_bits {
                    panic!("Wide bit-width must be >= twice the storage bit-width");
                }

                if w_bits > 64 {
                    panic!("Wide bit-width must not exceed 64 bits");
                }

                if (<$wide>::MIN != 0) != (<$storage>::MIN != 0) {
                    panic!("Wide and storage types must have the same signedness");
                }

                if (<$storage>::MIN != 0) != $signed {
                    panic!("signedness flag does not match the storage type");
                }
            };

            pub const BITS: u32 = <$storage>::BITS;
            pub const FRAC_BITS: u32 = {
                let () = Self::__ASSERTS;
                <$storage>::BITS - INT_BITS
            };

            /// `2^FRAC_BITS`; wraps to the minimum for signed types with a single integer bit
            pub const SCALE_FACTOR: $storage = ((1 as $wide) << Self::FRAC_BITS) as $storage;
            pub const FRAC_MASK: $storage = (((1 as $wide) << Self::FRAC_BITS) - 1) as $storage;
            pub const INT_MASK: $storage = !Self::FRAC_MASK;

            pub const ZERO: Self = Self::from_raw(0);
            pub const HALF: Self = Self(((1 as $wide) << (Self::FRAC_BITS - 1)) as $storage);
            pub const ONE: Self = Self(Self::SCALE_FACTOR);
            pub const EPSILON: Self = Self::from_raw(1);
            pub const MAX: Self = Self::from_raw(<$storage>::MAX);
            pub const MIN: Self = Self::from_raw(<$storage>::MIN);

            #[inline]
            pub const fn from_raw(raw: $storage) -> Self {
                let () = Self::__ASSERTS;
                Self(raw)
            }

            #[inline]
            pub const fn into_raw(self) -> $storage {
                let () = Self::__ASSERTS;
                self.0
            }

            /// `value << FRAC_BITS`, shifted in the wide type then narrowed.
            /// Integers outside the integer range wrap.
            #[inline]
            pub const fn from_int(value: $storage) -> Self {
                Self(((value as $wide) << Self::FRAC_BITS) as $storage)
            }

            /// `trunc(value * 2^FRAC_BITS)`. Out-of-range input saturates and NaN maps to zero,
            /// as with any float to integer `as` cast.
            #[inline]
            pub fn from_f32(value: f32) -> Self {
                Self((value * Self::scale_f64() as f32) as $storage)
            }

            /// `trunc(value * 2^FRAC_BITS)`, unchecked like [`Self::from_f32`].
            #[inline]
            pub fn from_f64(value: f64) -> Self {
                Self((value * Self::scale_f64()) as $storage)
            }

            /// Range-checked [`Self::from_int`].
            pub fn try_from_int(value: i64) -> Result<Self> {
                let shifted = (value as i128) << Self::FRAC_BITS;
                <$storage as core::convert::TryFrom<i128>>::try_from(shifted)
                    .map(Self)
                    .map_err(|_| FixedPointError::IntegerConversionError)
            }

            /// Range-checked [`Self::from_f64`].
            pub fn try_from_f64(value: f64) -> Result<Self> {
                if !value.is_finite() {
                    return Err(FixedPointError::NotFinite { value });
                }

                let scaled = (value * Self::scale_f64()).trunc();
                if scaled < <$storage>::MIN as f64 || scaled > <$storage>::MAX as f64 {
                    return Err(FixedPointError::Overflow { value });
                }

                Ok(Self(scaled as $storage))
            }

            #[inline]
            fn scale_f64() -> f64 {
                ((1 as $wide) << Self::FRAC_BITS) as f64
            }

            #[inline]
            pub fn to_f32(self) -> f32 {
                self.0 as f32 / Self::scale_f64() as f32
            }

            #[inline]
            pub fn to_f64(self) -> f64 {
                self.0 as f64 / Self::scale_f64()
            }

            /// `raw >> FRAC_BITS`: rounds toward negative infinity for signed types.
            #[inline]
            pub const fn int_part(self) -> $storage {
                self.0 >> Self::FRAC_BITS
            }

            /// Fractional bits of the magnitude; never negative.
            #[inline]
            pub const fn frac_part(self) -> Self {
                Self(self.abs().0 & Self::FRAC_MASK)
            }

            // --- arithmetic, storage domain (wraps like native integers) ---
            #[inline]
            pub const fn wrapping_add(self, rhs: Self) -> Self {
                let () = Self::__ASSERTS;
                Self(self.0.wrapping_add(rhs.0))
            }

            #[inline]
            pub const fn wrapping_sub(self, rhs: Self) -> Self {
                let () = Self::__ASSERTS;
                Self(self.0.wrapping_sub(rhs.0))
            }

            // --- widening arithmetic, into $wide domain ---

            /// (a * b) >> FRAC_BITS, narrowed without overflow checks
            #[inline]
            pub const fn mul_trunc(self, rhs: Self) -> Self {
                let a = self.0 as $wide;
                let b = rhs.0 as $wide;
                Self(((a * b) >> Self::FRAC_BITS) as $storage)
            }

            /// (a << FRAC_BITS) / b, narrowed without overflow checks.
            /// Panics if `rhs` is zero.
            #[track_caller]
            #[inline]
            pub const fn div_trunc(self, rhs: Self) -> Self {
                debug_assert!(rhs.0 != 0, "division by zero");

                let num = (self.0 as $wide) << Self::FRAC_BITS;
                let den = rhs.0 as $wide;
                Self((num / den) as $storage)
            }

            pub fn try_div(self, rhs: Self) -> Result<Self> {
                if rhs.0 == 0 {
                    return Err(FixedPointError::DivisionByZero);
                }
                Ok(self.div_trunc(rhs))
            }

            // --- rounding ---

            /// Largest integral value `<= self`. Negative values move away from zero;
            /// see [`Self::trunc`] for rounding toward zero.
            #[inline]
            pub const fn floor(self) -> Self {
                if self.frac_part().0 == 0 {
                    return self;
                }
                Self(self.0 & Self::INT_MASK)
            }

            /// Smallest integral value `>= self`.
            #[inline]
            pub const fn ceil(self) -> Self {
                if self.frac_part().0 == 0 {
                    return self;
                }
                Self(self.floor().0.wrapping_add(Self::SCALE_FACTOR))
            }

            /// Integral part toward zero.
            #[inline]
            pub const fn trunc(self) -> Self {
                if self.sign_bit() { self.ceil() } else { self.floor() }
            }

            /// Nearest integral value, halves away from zero.
            #[inline]
            pub const fn round(self) -> Self {
                let away = self.frac_part().0 >= Self::HALF.0;
                if away != self.sign_bit() { self.ceil() } else { self.floor() }
            }
        }

        $crate::fixed_point::__private::__impl_fixed_point_ops!($name);
        $crate::fixed_point::__private::__impl_sign_ops!($signed, $name, $storage, $wide);
        $crate::fixed_point::__private::__impl_fixed_point_from_base_int!($name, $storage);

        impl<const INT_BITS: u32> core::convert::TryFrom<i64> for $name<INT_BITS> {
            type Error = FixedPointError;

            #[inline]
            fn try_from(v: i64) -> Result<Self> {
                Self::try_from_int(v)
            }
        }

        impl<const INT_BITS: u32> core::convert::TryFrom<f64> for $name<INT_BITS> {
            type Error = FixedPointError;

            #[inline]
            fn try_from(v: f64) -> Result<Self> {
                Self::try_from_f64(v)
            }
        }

        // Comparisons go through the raw value and share the configuration guard.
        impl<const INT_BITS: u32> PartialEq for $name<INT_BITS> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                let () = Self::__ASSERTS;
                self.0 == other.0
            }
        }

        impl<const INT_BITS: u32> Eq for $name<INT_BITS> {}

        impl<const INT_BITS: u32> PartialOrd for $name<INT_BITS> {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<const INT_BITS: u32> Ord for $name<INT_BITS> {
            #[inline]
            fn cmp(&self, other: &Self) -> Ordering {
                let () = Self::__ASSERTS;
                self.0.cmp(&other.0)
            }
        }

        impl<const INT_BITS: u32> Hash for $name<INT_BITS> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.into_raw().hash(state);
            }
        }

        impl<const INT_BITS: u32> Default for $name<INT_BITS> {
            #[inline]
            fn default() -> Self { Self::ZERO }
        }

        impl<const INT_BITS: u32> core::convert::From<$name<INT_BITS>> for f32 {
            #[inline]
            fn from(v: $name<INT_BITS>) -> f32 { v.to_f32() }
        }

        impl<const INT_BITS: u32> core::convert::From<$name<INT_BITS>> for f64 {
            #[inline]
            fn from(v: $name<INT_BITS>) -> f64 { v.to_f64() }
        }

        impl $crate::repr::sealed::Sealed for $storage {}

        impl $crate::repr::Repr for $storage {
            type Wide = $wide;
            type Fixed<const INT_BITS: u32> = $name<INT_BITS>;
            const SIGNED: bool = $signed;
        }

        // Optional: bytemuck
        #[cfg(feature = "bytemuck")]
        unsafe impl<const INT_BITS: u32> bytemuck::Zeroable for $name<INT_BITS> {}
        #[cfg(feature = "bytemuck")]
        unsafe impl<const INT_BITS: u32> bytemuck::Pod for $name<INT_BITS> {}

        // Optional: serde
        #[cfg(feature = "serde")]
        impl<const INT_BITS: u32> serde::Serialize for $name<INT_BITS> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where S: serde::Serializer
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de, const INT_BITS: u32> serde::Deserialize<'de> for $name<INT_BITS> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where D: serde::Deserializer<'de>
            {
                <$storage as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_raw)
            }
        }
    };
}

mod __private {
    // ---- operator impls (wrap on overflow, like the native storage type) ----
    macro_rules! __impl_fixed_point_ops {
        ($name:ident) => {
            impl<const INT_BITS: u32> core::ops::Add<$name<INT_BITS>> for $name<INT_BITS> {
                type Output = Self;
                #[inline] fn add(self, rhs: Self) -> Self { self.wrapping_add(rhs) }
            }

            impl<const INT_BITS: u32> core::ops::Sub<$name<INT_BITS>> for $name<INT_BITS> {
                type Output = Self;
                #[inline] fn sub(self, rhs: Self) -> Self { self.wrapping_sub(rhs) }
            }

            // Multiplication/division go through the widened helpers.
            impl<const INT_BITS: u32> core::ops::Mul<$name<INT_BITS>> for $name<INT_BITS> {
                type Output = Self;
                #[inline] fn mul(self, rhs: Self) -> Self { self.mul_trunc(rhs) }
            }

            impl<const INT_BITS: u32> core::ops::Div<$name<INT_BITS>> for $name<INT_BITS> {
                type Output = Self;
                #[track_caller]
                #[inline]
                fn div(self, rhs: Self) -> Self { self.div_trunc(rhs) }
            }

            // ---- Assign variants ----

            impl<const INT_BITS: u32> core::ops::AddAssign<$name<INT_BITS>> for $name<INT_BITS> {
                #[inline] fn add_assign(&mut self, rhs: Self) { self.0 = self.0.wrapping_add(rhs.0); }
            }

            impl<const INT_BITS: u32> core::ops::SubAssign<$name<INT_BITS>> for $name<INT_BITS> {
                #[inline] fn sub_assign(&mut self, rhs: Self) { self.0 = self.0.wrapping_sub(rhs.0); }
            }

            impl<const INT_BITS: u32> core::ops::MulAssign<$name<INT_BITS>> for $name<INT_BITS> {
                #[inline] fn mul_assign(&mut self, rhs: Self) { *self = self.mul_trunc(rhs); }
            }

            impl<const INT_BITS: u32> core::ops::DivAssign<$name<INT_BITS>> for $name<INT_BITS> {
                #[track_caller]
                #[inline]
                fn div_assign(&mut self, rhs: Self) { *self = self.div_trunc(rhs); }
            }
        };
    }

    // Helper that expands differently for signed vs unsigned
    macro_rules! __impl_sign_ops {
        (true, $name:ident, $storage:tt, $wide:tt) => {
            impl<const INT_BITS: u32> $name<INT_BITS> {
                pub const NEG_ONE: Self = Self(Self::SCALE_FACTOR.wrapping_neg());

                /// Most significant bit of the storage.
                #[inline]
                pub const fn sign_bit(self) -> bool {
                    let () = Self::__ASSERTS;
                    (self.0 >> (Self::BITS - 1)) & 1 == 1
                }

                /// `NEG_ONE` when the sign bit is set, otherwise `ONE`, zero included.
                /// See [`Self::signum`] for a zero-aware variant.
                #[inline]
                pub const fn sign(self) -> Self {
                    if self.sign_bit() { Self::NEG_ONE } else { Self::ONE }
                }

                #[inline]
                pub const fn signum(self) -> Self {
                    if self.into_raw() == 0 { Self::ZERO } else { self.sign() }
                }

                /// Negated through the wide type. `MIN` has no positive counterpart
                /// and comes back unchanged.
                #[inline]
                pub const fn abs(self) -> Self {
                    if self.sign_bit() {
                        Self((-(self.0 as $wide)) as $storage)
                    } else {
                        self
                    }
                }

                #[inline]
                pub const fn wrapping_neg(self) -> Self {
                    let () = Self::__ASSERTS;
                    Self(self.0.wrapping_neg())
                }

                #[inline] pub const fn is_negative(self) -> bool { self.sign_bit() }
                #[inline] pub const fn is_positive(self) -> bool { self.into_raw() > 0 }
            }

            impl<const INT_BITS: u32> core::ops::Neg for $name<INT_BITS> {
                type Output = Self;
                #[inline] fn neg(self) -> Self { self.wrapping_neg() }
            }

            impl<const INT_BITS: u32> core::ops::Neg for &$name<INT_BITS> {
                type Output = $name<INT_BITS>;
                #[inline] fn neg(self) -> $name<INT_BITS> { (*self).wrapping_neg() }
            }
        };
        (false, $name:ident, $storage:tt, $wide:tt) => {
            impl<const INT_BITS: u32> $name<INT_BITS> {
                // unsigned types are never negative
                #[inline]
                pub const fn sign_bit(self) -> bool {
                    let () = Self::__ASSERTS;
                    false
                }

                #[inline]
                pub const fn sign(self) -> Self {
                    if self.into_raw() == 0 { Self::ZERO } else { Self::ONE }
                }

                #[inline] pub const fn signum(self) -> Self { self.sign() }

                #[inline]
                pub const fn abs(self) -> Self {
                    let () = Self::__ASSERTS;
                    self
                }
            }
        };
        ($other:tt, $name:ident, $storage:tt, $wide:tt) => {
            compile_error!("$signed must be the literal `true` or `false`");
        };
    }

    macro_rules! __impl_fixed_point_from_base_int {
        ($name:ident, i8)  => { $crate::fixed_point::__private::__impl_fixed_point_from_base_int!(@lossless $name, i8, [i8]); };
        ($name:ident, i16) => { $crate::fixed_point::__private::__impl_fixed_point_from_base_int!(@lossless $name, i16, [i16, i8, u8]); };
        ($name:ident, i32) => { $crate::fixed_point::__private::__impl_fixed_point_from_base_int!(@lossless $name, i32, [i32, i16, i8, u16, u8]); };
        ($name:ident, u8)  => { $crate::fixed_point::__private::__impl_fixed_point_from_base_int!(@lossless $name, u8, [u8]); };
        ($name:ident, u16) => { $crate::fixed_point::__private::__impl_fixed_point_from_base_int!(@lossless $name, u16, [u16, u8]); };
        ($name:ident, u32) => { $crate::fixed_point::__private::__impl_fixed_point_from_base_int!(@lossless $name, u32, [u32, u16, u8]); };
        // every source type converts to the storage without loss; the shift may still wrap
        (@lossless $name:ident, $storage:ty, [$($src:ty),*]) => {
            $(
                impl<const INT_BITS: u32> core::convert::From<$src> for $name<INT_BITS> {
                    #[inline]
                    fn from(v: $src) -> Self {
                        Self::from_int(v as $storage)
                    }
                }
            )*
        };
    }

    pub(crate) use __impl_fixed_point_ops;
    pub(crate) use __impl_sign_ops;
    pub(crate) use __impl_fixed_point_from_base_int;
}

fixed_point! {
    /// Signed fixed-point number stored in an `i8`
    ///
    /// ## Notes
    ///
    /// * Uses an i16 intermediate type for multiplication and division
    /// * `INT_BITS` includes the sign bit
    pub struct FixedI8(i8, i16, true);
}

fixed_point! {
    /// Signed fixed-point number stored in an `i16`
    ///
    /// ## Notes
    ///
    /// * Uses an i32 intermediate type for multiplication and division
    /// * `INT_BITS` includes the sign bit
    pub struct FixedI16(i16, i32, true);
}

fixed_point! {
    /// Signed fixed-point number stored in an `i32`
    ///
    /// ## Fields
    ///
    /// * `0` - The raw value, scaled by `2^(32 - INT_BITS)`
    ///
    /// ## Notes
    ///
    /// * Uses an i64 intermediate type for multiplication and division
    /// * `INT_BITS` includes the sign bit: range = [-2^(INT_BITS-1), 2^(INT_BITS-1))
    pub struct FixedI32(i32, i64, true);
}

fixed_point! {
    /// Unsigned fixed-point number stored in a `u8`
    pub struct FixedU8(u8, u16, false);
}

fixed_point! {
    /// Unsigned fixed-point number stored in a `u16`
    ///
    /// ## Notes
    ///
    /// * Uses a u32 intermediate type for multiplication and division
    pub struct FixedU16(u16, u32, false);
}

fixed_point! {
    /// Unsigned fixed-point number stored in a `u32`
    ///
    /// ## Fields
    ///
    /// * `0` - The raw value, scaled by `2^(32 - INT_BITS)`
    ///
    /// ## Notes
    ///
    /// * Uses a u64 intermediate type for multiplication and division
    /// * Range: [0, 2^INT_BITS)
    pub struct FixedU32(u32, u64, false);
}

/// Signed Q13.18: sign bit, 13 integer bits, 18 fractional bits
///
/// * Range: [-8192, 8192), resolution = 2^-18 ≈ 3.815 * 10^-6
pub type SQ13x18 = FixedI32<14>;

/// Unsigned Q14.18
///
/// * Range: [0, 16384), resolution = 2^-18 ≈ 3.815 * 10^-6
pub type Q14x18 = FixedU32<14>;

/// Signed Q15.16: sign bit, 15 integer bits, 16 fractional bits
///
/// * Range: [-32768, 32768), resolution = 2^-16 ≈ 1.526 * 10^-5
pub type SQ15x16 = FixedI32<16>;

/// Unsigned Q16.16
///
/// * Range: [0, 65536), resolution = 2^-16 ≈ 1.526 * 10^-5
pub type Q16x16 = FixedU32<16>;
