use proptest::prelude::*;
use scaled_fixed::{FixedI16, Q14x18, Q16x16, SQ13x18, SQ15x16};

// SQ13x18 holds [-8192, 8192) with 2^-18 resolution
const SQ13X18_ULP: f64 = 1.0 / 262_144.0;

// raw values whose ceil cannot wrap past MAX
fn sq13x18_raw() -> impl Strategy<Value = i32> {
    (i32::MIN + 1)..(i32::MAX - (1 << 18))
}

proptest! {
    #[test]
    fn prop_from_int_int_part_signed(n in -8192i32..=8191) {
        prop_assert_eq!(SQ13x18::from_int(n).int_part(), n);
    }

    #[test]
    fn prop_from_int_int_part_unsigned(n in 0u32..=16383) {
        prop_assert_eq!(Q14x18::from_int(n).int_part(), n);
    }

    #[test]
    fn prop_from_int_int_part_narrow(n in -128i16..=127) {
        prop_assert_eq!(FixedI16::<8>::from_int(n).int_part(), n);
    }

    #[test]
    fn prop_roundtrip_within_one_ulp(x in -8191.0f64..8191.0) {
        let back = SQ13x18::from_f64(x).to_f64();
        prop_assert!(
            (x - back).abs() < SQ13X18_ULP,
            "roundtrip drifted: {} -> {}", x, back
        );
    }

    #[test]
    fn prop_roundtrip_unsigned(x in 0.0f64..16383.0) {
        let back = Q14x18::from_f64(x).to_f64();
        prop_assert!((x - back).abs() < SQ13X18_ULP);
        // truncation never rounds up
        prop_assert!(back <= x);
    }

    #[test]
    fn prop_add_sub_inverse(a in any::<i32>(), b in any::<i32>()) {
        let a = SQ13x18::from_raw(a);
        let b = SQ13x18::from_raw(b);
        // wrapping makes this exact over the whole domain
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn prop_add_sub_inverse_unsigned(a in any::<u32>(), b in any::<u32>()) {
        let a = Q16x16::from_raw(a);
        let b = Q16x16::from_raw(b);
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn prop_addition_commutative(a in any::<i32>(), b in any::<i32>()) {
        let a = SQ15x16::from_raw(a);
        let b = SQ15x16::from_raw(b);
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn prop_mul_div_identity(raw in any::<i32>()) {
        let a = SQ13x18::from_raw(raw);
        prop_assert_eq!(a * SQ13x18::ONE, a);
        prop_assert_eq!(a / SQ13x18::ONE, a);
    }

    #[test]
    fn prop_mul_div_identity_unsigned(raw in any::<u32>()) {
        let a = Q14x18::from_raw(raw);
        prop_assert_eq!(a * Q14x18::ONE, a);
        prop_assert_eq!(a / Q14x18::ONE, a);
    }

    #[test]
    fn prop_mul_matches_float(x in -90.0f64..90.0, y in -90.0f64..90.0) {
        let a = SQ13x18::from_f64(x);
        let b = SQ13x18::from_f64(y);
        let expected = a.to_f64() * b.to_f64();
        // one ulp lost to the final shift, plus f64 rounding of `expected`
        prop_assert!(((a * b).to_f64() - expected).abs() <= SQ13X18_ULP * 1.001);
    }

    #[test]
    fn prop_abs_idempotent(raw in (i32::MIN + 1)..=i32::MAX) {
        let a = SQ13x18::from_raw(raw);
        prop_assert_eq!(a.abs().abs(), a.abs());
        prop_assert!(!a.abs().sign_bit());
    }

    #[test]
    fn prop_abs_unsigned_identity(raw in any::<u32>()) {
        let a = Q14x18::from_raw(raw);
        prop_assert_eq!(a.abs(), a);
    }

    #[test]
    fn prop_sign_times_abs(raw in (i32::MIN + 1)..=i32::MAX) {
        prop_assume!(raw != 0);
        let a = SQ13x18::from_raw(raw);
        prop_assert_eq!(a.sign() * a.abs(), a);
    }

    #[test]
    fn prop_floor_le_value_le_ceil(raw in sq13x18_raw()) {
        let a = SQ13x18::from_raw(raw);
        let floor = a.floor();
        let ceil = a.ceil();

        prop_assert!(floor <= a);
        prop_assert!(a <= ceil);

        let whole = a.frac_part() == SQ13x18::ZERO;
        prop_assert_eq!(floor == a, whole);
        prop_assert_eq!(ceil == a, whole);
    }

    #[test]
    fn prop_floor_ceil_unsigned(raw in 0u32..(u32::MAX - (1 << 18))) {
        let a = Q14x18::from_raw(raw);
        prop_assert!(a.floor() <= a && a <= a.ceil());
        prop_assert_eq!(a.floor().frac_part(), Q14x18::ZERO);
    }

    #[test]
    fn prop_round_is_nearest_integer(raw in sq13x18_raw()) {
        let a = SQ13x18::from_raw(raw);
        let r = a.round();

        prop_assert_eq!(r.frac_part(), SQ13x18::ZERO);
        prop_assert!((r.to_f64() - a.to_f64()).abs() <= 0.5);
    }

    #[test]
    fn prop_trunc_moves_toward_zero(raw in sq13x18_raw()) {
        let a = SQ13x18::from_raw(raw);
        let t = a.trunc();
        prop_assert!(t.abs() <= a.abs());
        prop_assert_eq!(t.frac_part(), SQ13x18::ZERO);
    }

    #[test]
    fn prop_frac_part_non_negative(raw in (i32::MIN + 1)..=i32::MAX) {
        let f = SQ13x18::from_raw(raw).frac_part();
        prop_assert!(f >= SQ13x18::ZERO);
        prop_assert!(f < SQ13x18::ONE);
    }

    #[test]
    fn prop_ordering_matches_float(a in any::<i32>(), b in any::<i32>()) {
        let fa = SQ15x16::from_raw(a);
        let fb = SQ15x16::from_raw(b);
        prop_assert_eq!(fa < fb, fa.to_f64() < fb.to_f64());
    }
}
