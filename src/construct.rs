//! Construction from native scalars, floats, and strings (§4.1).

use crate::error::{FixedIntError, ParseErrorReason};
use crate::fixed_int::FixedInt;

/// Decompose `x` (finite, nonnegative) into `(f, e)` with `x == f * 2^e` and
/// `f` in `[0.5, 1)`. A from-scratch `frexp` since `core` has no libm.
fn frexp(x: f64) -> (f64, i32) {
    if x == 0.0 {
        return (0.0, 0);
    }
    let bits = x.to_bits();
    let sign_bit = bits & (1u64 << 63);
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let mantissa = bits & 0x000f_ffff_ffff_ffff;
    if exp_bits == 0 {
        // Subnormal: renormalize by scaling up first.
        let scaled = x * 2f64.powi(64);
        let bits2 = scaled.to_bits();
        let exp2 = ((bits2 >> 52) & 0x7ff) as i32;
        let mantissa2 = bits2 & 0x000f_ffff_ffff_ffff;
        let e = exp2 - 1022 - 64;
        let out_bits = sign_bit | (1022u64 << 52) | mantissa2;
        return (f64::from_bits(out_bits), e);
    }
    let e = exp_bits - 1022;
    let out_bits = sign_bit | (1022u64 << 52) | mantissa;
    (f64::from_bits(out_bits), e)
}

#[inline]
fn ldexp(x: f64, exp: i32) -> f64 {
    x * 2f64.powi(exp)
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> FixedInt<LIMBS, BITS, SIGNED> {
    /// From an unsigned single-limb scalar.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; LIMBS];
        limbs[LIMBS - 1] = value;
        let mut out = Self::from_limbs(limbs);
        out.mask_top();
        out
    }

    /// From a signed single-limb scalar, sign-extended.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        let fill = if value < 0 { u64::MAX } else { 0 };
        let mut limbs = [fill; LIMBS];
        limbs[LIMBS - 1] = value as u64;
        let mut out = Self::from_limbs(limbs);
        out.mask_top();
        out
    }

    /// From an unsigned double-limb scalar.
    #[must_use]
    pub fn from_u128(value: u128) -> Self {
        let hi = (value >> Self::LIMB_BITS) as u64;
        let lo = value as u64;
        let mut limbs = [0u64; LIMBS];
        limbs[LIMBS - 1] = lo;
        if LIMBS >= 2 {
            limbs[LIMBS - 2] = hi;
        }
        let mut out = Self::from_limbs(limbs);
        out.mask_top();
        out
    }

    /// From a signed double-limb scalar, sign-extended.
    #[must_use]
    pub fn from_i128(value: i128) -> Self {
        let fill = if value < 0 { u64::MAX } else { 0 };
        let bits = value as u128;
        let hi = (bits >> Self::LIMB_BITS) as u64;
        let lo = bits as u64;
        let mut limbs = [fill; LIMBS];
        limbs[LIMBS - 1] = lo;
        if LIMBS >= 2 {
            limbs[LIMBS - 2] = hi;
        }
        let mut out = Self::from_limbs(limbs);
        out.mask_top();
        out
    }

    /// From a finite `f64`, truncating toward zero. Lossy above 53 bits of
    /// magnitude; `NaN`/infinite input, or one whose unbiased exponent
    /// exceeds `BITS`, is rejected with [`FixedIntError::NonFinite`].
    pub fn from_f64(value: f64) -> Result<Self, FixedIntError> {
        if !value.is_finite() {
            return Err(FixedIntError::NonFinite);
        }
        if value == 0.0 {
            return Ok(Self::zero());
        }
        let neg = value.is_sign_negative();
        let (mut f, mut e) = frexp(value.abs());
        // `value.abs() == f * 2^e` with `f` in `[0.5, 1)`, so `value.abs() <
        // 2^e`: if `e > BITS` the value can't fit even as an unsigned
        // magnitude, let alone truncate meaningfully. Per §7 this is a
        // `NonFinite` error, not a silent wrap.
        if e > BITS as i32 {
            return Err(FixedIntError::NonFinite);
        }
        let shift = Self::LIMB_BITS as i32;
        let mut acc = Self::zero();
        while f != 0.0 {
            f = ldexp(f, shift);
            let term = f.trunc();
            e -= shift;
            acc = acc.wrapping_shl(shift as u32);
            acc = acc.wrapping_add_u64(term as u64);
            f -= term;
        }
        if e > 0 {
            acc = acc.wrapping_shl(e as u32);
        } else if e < 0 {
            acc = acc.wrapping_shr((-e) as u32);
        }
        Ok(if neg { acc.wrapping_neg() } else { acc })
    }

    /// Parse a decimal, `0x`/`0X`-prefixed hex, or leading-zero octal literal
    /// with an optional leading `+`/`-`. A leading `-` negates the parsed
    /// magnitude (wrapping, same as every other operation here) regardless
    /// of `SIGNED` — it is not rejected just because the type is unsigned.
    pub fn from_str_radix_auto(s: &str) -> Result<Self, FixedIntError> {
        let mut rest = s;
        let mut neg = false;
        if let Some(stripped) = rest.strip_prefix('-') {
            neg = true;
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('+') {
            rest = stripped;
        }
        let (radix, digits) = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            (16u32, hex)
        } else if rest.len() > 1 && rest.starts_with('0') {
            (8u32, &rest[1..])
        } else {
            (10u32, rest)
        };
        if digits.is_empty() {
            return Err(FixedIntError::ParseError {
                reason: ParseErrorReason::Empty,
            });
        }
        let mut acc = Self::zero();
        for ch in digits.chars() {
            let digit = ch.to_digit(radix).ok_or(FixedIntError::ParseError {
                reason: ParseErrorReason::InvalidDigit,
            })?;
            acc = acc.wrapping_mul_u64(u64::from(radix)).wrapping_add_u64(u64::from(digit));
        }
        Ok(if neg { acc.wrapping_neg() } else { acc })
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> From<u64>
    for FixedInt<LIMBS, BITS, SIGNED>
{
    #[inline]
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> From<i64>
    for FixedInt<LIMBS, BITS, SIGNED>
{
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> From<u128>
    for FixedInt<LIMBS, BITS, SIGNED>
{
    #[inline]
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> From<i128>
    for FixedInt<LIMBS, BITS, SIGNED>
{
    #[inline]
    fn from(value: i128) -> Self {
        Self::from_i128(value)
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> TryFrom<f64>
    for FixedInt<LIMBS, BITS, SIGNED>
{
    type Error = FixedIntError;
    #[inline]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::str::FromStr
    for FixedInt<LIMBS, BITS, SIGNED>
{
    type Err = FixedIntError;
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix_auto(s)
    }
}
