//! Property-based tests for the algebraic laws the type guarantees:
//! negation cancels, division reconstructs the dividend, text encoding
//! round-trips, shifts restore preserved bits, and mixed-width promotion
//! follows the documented tie-break.

use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wideint::{WideInt, WideIntError, Width};

fn wide_value() -> impl Strategy<Value = WideInt> {
    (vec(any::<u8>(), 1..=32), any::<bool>())
        .prop_map(|(limbs, signed)| WideInt::from_limbs(limbs, signed).unwrap())
}

fn wide_pair() -> impl Strategy<Value = (WideInt, WideInt)> {
    (vec(any::<u8>(), 1..=32), vec(any::<u8>(), 1..=32), any::<bool>()).prop_map(
        |(a, b, signed)| {
            (
                WideInt::from_limbs(a, signed).unwrap(),
                WideInt::from_limbs(b, signed).unwrap(),
            )
        },
    )
}

proptest! {
    #[test]
    fn negation_cancels(a in wide_value()) {
        prop_assert!(a.add(&a.neg()).is_zero());
    }

    #[test]
    fn double_negation_is_identity(a in wide_value()) {
        let dn = a.neg().neg();
        prop_assert_eq!(dn.limbs(), a.limbs());
    }

    #[test]
    fn complement_plus_one_is_negation(a in wide_value()) {
        let lhs = a.bit_not().increment();
        let rhs = a.neg();
        prop_assert_eq!(lhs.limbs(), rhs.limbs());
    }

    #[test]
    fn division_identity((a, b) in wide_pair()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        // q * b + r == a under the common layout
        let back = q.mul(&b).add(&r);
        prop_assert_eq!(back.compare(&a), std::cmp::Ordering::Equal);
        // remainder strictly smaller than the divisor in magnitude (the
        // most-negative divisor escapes its own abs)
        prop_assert!(r.abs().to_unsigned() < b.abs().to_unsigned() || b.abs().is_negative());
    }

    #[test]
    fn string_roundtrip(a in wide_value(), base in 2u32..=36) {
        let text = a.to_string_radix(base, false).unwrap();
        let back = WideInt::from_str_radix(&text, base, a.width(), a.is_signed()).unwrap();
        prop_assert_eq!(back.limbs(), a.limbs());
    }

    #[test]
    fn uppercase_roundtrip(a in wide_value(), base in 11u32..=36) {
        let text = a.to_string_radix(base, true).unwrap();
        let back = WideInt::from_str_radix(&text, base, a.width(), a.is_signed()).unwrap();
        prop_assert_eq!(back.limbs(), a.limbs());
    }

    #[test]
    fn auto_base_roundtrip_hex(a in wide_value()) {
        let mag = a.abs().to_unsigned();
        let text = format!("{:#x}", mag);
        let back = WideInt::from_str_auto(&text, a.width(), false).unwrap();
        prop_assert_eq!(back.limbs(), mag.limbs());
    }

    #[test]
    fn shift_roundtrip_preserved_bits(a in wide_value(), k in 0u32..=64) {
        // left-then-right restores the value when no bits fall off, so
        // clamp the count into the leading-zero headroom
        let unsigned = a.to_unsigned();
        let k = k % (unsigned.leading_zeros() + 1);
        let back = unsigned.shl(k).shr(k);
        prop_assert_eq!(back.limbs(), unsigned.limbs());
    }

    #[test]
    fn shift_composes_bytewise(a in wide_value(), k in 0u32..=48) {
        let unsigned = a.to_unsigned();
        let lhs = unsigned.shr(k);
        let rhs = unsigned.shr(k / 2).shr(k - k / 2);
        prop_assert_eq!(lhs.limbs(), rhs.limbs());
    }

    #[test]
    fn comparison_is_antisymmetric((a, b) in wide_pair()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
    }

    #[test]
    fn addition_commutes((a, b) in wide_pair()) {
        let lhs = a.add(&b);
        let rhs = b.add(&a);
        prop_assert_eq!(lhs.limbs(), rhs.limbs());
    }

    #[test]
    fn multiplication_commutes((a, b) in wide_pair()) {
        let lhs = a.mul(&b);
        let rhs = b.mul(&a);
        prop_assert_eq!(lhs.limbs(), rhs.limbs());
    }

    #[test]
    fn resize_roundtrip_narrow_values(v in any::<i32>()) {
        let a = WideInt::from_i64(v as i64, Width::W32, true);
        let widened = a.resize(Width::W128);
        prop_assert_eq!(widened.to_i64(), v as i64);
        let narrowed = widened.resize(Width::W32);
        prop_assert_eq!(narrowed.limbs(), a.limbs());
    }

    #[test]
    fn random_sampling_respects_bound(seed in any::<u64>(), bound in 1u64..=u64::MAX) {
        let mut rng = StdRng::seed_from_u64(seed);
        let upper = WideInt::from_u64(bound, Width::W64, false);
        let sample = WideInt::random(&mut rng, &upper).unwrap();
        prop_assert!(sample.to_u64() <= bound);
    }
}

#[test]
fn promotion_scenarios() {
    // the §-style scenario table: i8 op u16 yields a 16-bit result with
    // the wider operand's signedness
    let s8 = WideInt::from_i64(-1, Width::W8, true);
    let u16 = WideInt::from_u64(1, Width::W16, false);
    let sum = s8.add(&u16);
    assert_eq!(sum.width(), Width::W16);
    assert!(!sum.is_signed());
    // -1 sign-extends to 0xFFFF, plus 1 wraps to zero
    assert!(sum.is_zero());

    let s32 = WideInt::from_i64(-1, Width::W32, true);
    let sum = s32.add(&u16);
    assert_eq!(sum.width(), Width::W32);
    assert!(sum.is_signed());
    assert_eq!(sum.to_i64(), 0);
}

#[test]
fn concrete_scenarios() {
    // wraparound
    let a = WideInt::from_u64(255, Width::W8, false);
    assert!(a.add(&WideInt::from_u64(1, Width::W8, false)).is_zero());

    // -1 is all ones
    assert_eq!(WideInt::from_i64(-1, Width::W8, true).limbs(), &[0xFF]);

    // 7 / 2 and -7 / 2 truncate toward zero
    let seven = WideInt::from_i64(7, Width::W8, true);
    let two = WideInt::from_i64(2, Width::W8, true);
    let (q, r) = seven.div_rem(&two).unwrap();
    assert_eq!((q.to_i64(), r.to_i64()), (3, 1));
    let (q, r) = seven.neg().div_rem(&two).unwrap();
    assert_eq!((q.to_i64(), r.to_i64()), (-3, -1));

    // auto-base parsing
    let a = WideInt::from_str_auto("0x1A", Width::W32, true).unwrap();
    assert_eq!(a.to_i64(), 26);
    let b = WideInt::from_str_auto("-0b101", Width::W32, true).unwrap();
    assert_eq!(b.to_i64(), -5);

    // uppercase hex encoding
    let c = WideInt::from_u64(255, Width::W16, false);
    assert_eq!(c.to_string_radix(16, true).unwrap(), "FF");
}

#[test]
fn error_paths_are_reported() {
    let a = WideInt::from_u64(1, Width::W8, false);
    assert_eq!(
        a.div(&WideInt::zero(Width::W8, false)),
        Err(WideIntError::DivisionByZero)
    );
    assert_eq!(
        a.to_string_radix(37, false),
        Err(WideIntError::InvalidBase(37))
    );
    assert_eq!(
        WideInt::from_str_radix("", 10, Width::W8, false),
        Err(WideIntError::InvalidFormat)
    );
    assert!(WideInt::zero(Width::W8, false).log2().is_err());
}
