//! Property tests against native-integer oracles for the widths that have
//! one (`U64`/`I64`/`U128`/`I128`), plus example-based tests of the
//! algebraic identities (§8) for the wider aliases, which have no single
//! native type to check against.

use quickcheck_macros::quickcheck;

use crate::{FixedInt, FixedIntError, I128, I256, I512, I64, NumericLimits, U128, U256, U512, U64};

/// A width that isn't a multiple of 64 (`tail_bits = 36`), used to exercise
/// the boundary cases `U64`/`I64`/`U128`/... can't: every type alias in this
/// crate has `BITS` an exact multiple of `LIMB_BITS`.
type I100 = FixedInt<2, 100, true>;

/// A width narrower than the native `to_i64`/`to_i128` conversion targets,
/// so a negative value's CRI-masked storage (unused high bits zero, not
/// sign-extended) differs from its native bit-cast representation.
type I40 = FixedInt<1, 40, true>;

#[quickcheck]
fn u64_add_matches_native(a: u64, b: u64) -> bool {
    (U64::from_u64(a) + U64::from_u64(b)).to_u64() == a.wrapping_add(b)
}

#[quickcheck]
fn u64_sub_matches_native(a: u64, b: u64) -> bool {
    (U64::from_u64(a) - U64::from_u64(b)).to_u64() == a.wrapping_sub(b)
}

#[quickcheck]
fn u64_mul_matches_native(a: u64, b: u64) -> bool {
    (U64::from_u64(a) * U64::from_u64(b)).to_u64() == a.wrapping_mul(b)
}

#[quickcheck]
fn u64_div_rem_matches_native(a: u64, b: u64) -> bool {
    if b == 0 {
        U64::from_u64(a).checked_div(&U64::from_u64(b)).is_err()
    } else {
        let (q, r) = U64::from_u64(a).div_rem(&U64::from_u64(b)).unwrap();
        q.to_u64() == a / b && r.to_u64() == a % b
    }
}

#[quickcheck]
fn u64_bitwise_matches_native(a: u64, b: u64) -> bool {
    let (x, y) = (U64::from_u64(a), U64::from_u64(b));
    (x & y).to_u64() == (a & b) && (x | y).to_u64() == (a | b) && (x ^ y).to_u64() == (a ^ b)
}

#[quickcheck]
fn u64_shift_matches_native(a: u64, amount: u8) -> bool {
    let shift = u32::from(amount) % 64;
    let x = U64::from_u64(a);
    (x << shift).to_u64() == a.wrapping_shl(shift) && (x >> shift).to_u64() == a.wrapping_shr(shift)
}

#[quickcheck]
fn u64_cmp_matches_native(a: u64, b: u64) -> bool {
    U64::from_u64(a).cmp(&U64::from_u64(b)) == a.cmp(&b)
}

#[quickcheck]
fn i64_add_sub_matches_native(a: i64, b: i64) -> bool {
    (I64::from_i64(a) + I64::from_i64(b)).to_i64() == a.wrapping_add(b)
        && (I64::from_i64(a) - I64::from_i64(b)).to_i64() == a.wrapping_sub(b)
}

#[quickcheck]
fn i64_mul_matches_native(a: i64, b: i64) -> bool {
    (I64::from_i64(a) * I64::from_i64(b)).to_i64() == a.wrapping_mul(b)
}

#[quickcheck]
fn i128_mul_scalar_matches_native(a: i128, b: i64) -> bool {
    I128::from_i128(a).wrapping_mul_i64(b).to_i128() == a.wrapping_mul(i128::from(b))
}

#[quickcheck]
fn i64_div_rem_matches_native(a: i64, b: i64) -> bool {
    if b == 0 {
        I64::from_i64(a).div_rem(&I64::from_i64(b)).is_err()
    } else {
        let (q, r) = I64::from_i64(a).div_rem(&I64::from_i64(b)).unwrap();
        q.to_i64() == a.wrapping_div(b) && r.to_i64() == a.wrapping_rem(b)
    }
}

#[quickcheck]
fn i64_cmp_matches_native(a: i64, b: i64) -> bool {
    I64::from_i64(a).cmp(&I64::from_i64(b)) == a.cmp(&b)
}

#[quickcheck]
fn i64_neg_matches_native(a: i64) -> bool {
    (-I64::from_i64(a)).to_i64() == a.wrapping_neg()
}

#[quickcheck]
fn u128_add_mul_matches_native(a: u128, b: u128) -> bool {
    (U128::from_u128(a) + U128::from_u128(b)).to_u128() == a.wrapping_add(b)
        && (U128::from_u128(a) * U128::from_u128(b)).to_u128() == a.wrapping_mul(b)
}

#[quickcheck]
fn u128_div_rem_matches_native(a: u128, b: u128) -> bool {
    if b == 0 {
        U128::from_u128(a).checked_div(&U128::from_u128(b)).is_err()
    } else {
        let (q, r) = U128::from_u128(a).div_rem(&U128::from_u128(b)).unwrap();
        q.to_u128() == a / b && r.to_u128() == a % b
    }
}

#[quickcheck]
fn i128_div_rem_matches_native(a: i128, b: i128) -> bool {
    if b == 0 {
        I128::from_i128(a).div_rem(&I128::from_i128(b)).is_err()
    } else {
        let (q, r) = I128::from_i128(a).div_rem(&I128::from_i128(b)).unwrap();
        q.to_i128() == a.wrapping_div(b) && r.to_i128() == a.wrapping_rem(b)
    }
}

#[quickcheck]
fn u64_gcd_divides_both(a: u64, b: u64) -> bool {
    if a == 0 && b == 0 {
        return true;
    }
    let g = U64::from_u64(a).gcd(&U64::from_u64(b));
    if g.is_zero() {
        return false;
    }
    U64::from_u64(a).div_rem(&g).unwrap().1.is_zero() && U64::from_u64(b).div_rem(&g).unwrap().1.is_zero()
}

#[quickcheck]
fn u64_decimal_round_trip(a: u64) -> bool {
    let x = U64::from_u64(a);
    x.to_string().parse::<U64>().unwrap() == x
}

#[quickcheck]
fn i64_decimal_round_trip(a: i64) -> bool {
    let x = I64::from_i64(a);
    x.to_string().parse::<I64>().unwrap() == x
}

#[test]
fn u256_wraparound_add() {
    let max = U256::max_value();
    let one = U256::from_u64(1);
    assert_eq!((max + one), U256::zero());
}

#[test]
fn u256_wraparound_mul() {
    let two_pow_128 = U256::from_u64(1).wrapping_shl(128);
    let product = two_pow_128.wrapping_mul(&two_pow_128);
    assert_eq!(product, U256::zero());
}

#[test]
fn u256_large_decimal_div_rem() {
    let a: U256 = "123456789012345678901234567890123456789".parse().unwrap();
    let b: U256 = "987654321098765432109876543210".parse().unwrap();
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q.wrapping_mul(&b).wrapping_add(&r), a);
    assert!(r < b);
}

#[test]
fn i256_signed_truncating_div_rem() {
    let a = I256::from_i64(-7);
    let b = I256::from_i64(2);
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q, I256::from_i64(-3));
    assert_eq!(r, I256::from_i64(-1));
}

#[test]
fn gcd_270_192_is_6() {
    let a = U256::from_u64(270);
    let b = U256::from_u64(192);
    assert_eq!(a.gcd(&b), U256::from_u64(6));
}

#[test]
fn format_min_i128_in_decimal() {
    let min = I128::min_value();
    assert_eq!(min.to_string(), "-170141183460469231731687303715884105728");
}

#[test]
fn shift_left_then_right_round_trip() {
    let x = U512::from_u64(0xabcdef);
    let shifted = x.wrapping_shl(200).wrapping_shr(200);
    assert_eq!(shifted, x);
}

#[test]
fn hex_parse_and_format_round_trip() {
    let x: U256 = "0xdeadbeefcafef00d".parse().unwrap();
    assert_eq!(format!("{x:x}"), "deadbeefcafef00d");
}

#[test]
fn divide_by_zero_is_reported() {
    let a = U256::from_u64(1);
    let zero = U256::zero();
    assert_eq!(a.div_rem(&zero), Err(FixedIntError::DivideByZero));
}

#[test]
fn lcm_matches_product_over_gcd() {
    let a = U64::from_u64(21);
    let b = U64::from_u64(6);
    assert_eq!(a.lcm(&b), U64::from_u64(42));
}

#[test]
fn swap_exchanges_values() {
    let mut a = U64::from_u64(1);
    let mut b = U64::from_u64(2);
    a.swap(&mut b);
    assert_eq!(a, U64::from_u64(2));
    assert_eq!(b, U64::from_u64(1));
}

#[test]
fn trailing_zeros_of_power_of_two() {
    let x = U256::from_u64(1).wrapping_shl(37);
    assert_eq!(x.trailing_zeros(), 37);
}

#[test]
fn numeric_limits_digits_and_signedness() {
    assert_eq!(<U256 as NumericLimits>::DIGITS, 256);
    assert_eq!(<U128 as NumericLimits>::DIGITS10, 38);
    assert!(<I256 as NumericLimits>::IS_SIGNED);
    assert!(!<U256 as NumericLimits>::IS_SIGNED);
}

#[test]
fn parse_rejects_empty_and_bad_digit() {
    assert!("0x".parse::<U64>().is_err());
    assert!("12g".parse::<U64>().is_err());
}

#[test]
fn from_f64_rejects_non_finite() {
    assert_eq!(I128::from_f64(f64::NAN), Err(FixedIntError::NonFinite));
    assert_eq!(I128::from_f64(f64::INFINITY), Err(FixedIntError::NonFinite));
}

#[test]
fn from_f64_rejects_exponent_out_of_range() {
    type U8 = FixedInt<1, 8, false>;
    assert_eq!(U8::from_f64(1e20), Err(FixedIntError::NonFinite));
}

#[test]
fn from_f64_accepts_exponent_within_range() {
    // 2^126's unbiased exponent (127) is within I128's 128 bits, so this
    // must not be rejected even though it's far above the mantissa-bit
    // precondition threshold that bounds *precision*, not range.
    let x = I128::from_f64(2f64.powi(126)).unwrap();
    assert_eq!(x, I128::one().wrapping_shl(126));
    // 2^130 exceeds what 128 bits can hold and must be rejected.
    assert_eq!(
        I128::from_f64(2f64.powi(130)),
        Err(FixedIntError::NonFinite)
    );
}

#[test]
fn from_f64_round_trips_small_integers() {
    let x = I128::from_f64(12345.0).unwrap();
    assert_eq!(x, I128::from_i64(12345));
}

#[test]
fn gcd_with_min_operand_shifts_logically() {
    // I128::MIN's two's-complement magnitude (2^127) still carries a set
    // sign bit; gcd's internal shifts must treat it as an unsigned
    // magnitude rather than sign-extending through `wrapping_shr`.
    let min = I128::min_value();
    let g = min.gcd(&I128::from_i64(4));
    assert_eq!(g, I128::from_i64(4));
}

#[test]
fn signed_shift_right_fills_at_tail_bits_boundary_not_limb_boundary() {
    // I100 (BITS = 100, tail_bits = 36) is not a multiple of LIMB_BITS (64);
    // a right shift of -1 must still be -1, which only holds if the fill
    // enters at the BITS boundary rather than at the native 64-bit limb
    // boundary.
    let minus_one = I100::zero().wrapping_sub(&I100::one());
    assert_eq!(minus_one.wrapping_shr(10), minus_one);
    assert_eq!(minus_one.wrapping_shr(63), minus_one);
    assert_eq!(minus_one.wrapping_shr(99), minus_one);
}

#[test]
fn narrow_signed_conversion_negates_magnitude_not_raw_bits() {
    let x = I40::from_i64(-5);
    assert_eq!(x.to_i64(), -5);
    assert_eq!(x.to_i128(), -5);
    let big = I40::min_value();
    assert_eq!(big.to_i128(), i128::from(-1i64) << 39);
}

#[test]
fn i512_min_divided_by_minus_one_wraps() {
    let min = I512::min_value();
    let minus_one = I512::from_i64(-1);
    let (q, r) = min.div_rem(&minus_one).unwrap();
    assert_eq!(q, min);
    assert!(r.is_zero());
}
