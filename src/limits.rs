//! `NumericLimits`-style bounds and traits (§6): minimum/maximum
//! representable values and the handful of type-level facts a generic
//! numeric front-end would query (`BITS`, `is_signed`, radix, ...).

use crate::fixed_int::FixedInt;

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> FixedInt<LIMBS, BITS, SIGNED> {
    /// The smallest representable value: `0` when unsigned, `-2^(BITS-1)`
    /// when signed.
    #[must_use]
    pub fn min_value() -> Self {
        if !SIGNED {
            Self::zero()
        } else {
            let mut out = Self::zero();
            out.limbs[0] = Self::sign_bit_mask();
            out.mask_top();
            out
        }
    }

    /// The largest representable value: `2^BITS - 1` when unsigned,
    /// `2^(BITS-1) - 1` when signed.
    #[must_use]
    pub fn max_value() -> Self {
        let mut out = Self {
            limbs: [u64::MAX; LIMBS],
        };
        out.mask_top();
        if SIGNED {
            out.limbs[0] &= !Self::sign_bit_mask();
        }
        out
    }
}

/// Type-level numeric facts about a [`FixedInt`] instantiation, in the
/// spirit of `std::numeric_limits` for Boost.Multiprecision number types.
pub trait NumericLimits {
    /// Total number of bits, including the sign bit for signed types.
    const DIGITS: u32;
    /// Number of full decimal digits guaranteed to round-trip: `floor(DIGITS * log10(2))`.
    const DIGITS10: u32;
    /// `true` if this type interprets its top bit as a sign.
    const IS_SIGNED: bool;
    /// Always `true`: this is an integer type, not a floating-point one.
    const IS_INTEGER: bool = true;
    /// Always `true`: every representable value round-trips exactly.
    const IS_EXACT: bool = true;
    /// Always `true`: the range is a fixed, compile-time-known width.
    const IS_BOUNDED: bool = true;
    /// Always `true`: arithmetic wraps modulo `2^DIGITS` rather than
    /// erroring or saturating.
    const IS_MODULO: bool = true;

    /// The smallest representable value.
    fn min_value() -> Self;
    /// The largest representable value.
    fn max_value() -> Self;
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> NumericLimits
    for FixedInt<LIMBS, BITS, SIGNED>
{
    const DIGITS: u32 = BITS;
    const DIGITS10: u32 = FixedInt::<LIMBS, BITS, SIGNED>::digits10();
    const IS_SIGNED: bool = SIGNED;

    #[inline]
    fn min_value() -> Self {
        FixedInt::min_value()
    }

    #[inline]
    fn max_value() -> Self {
        FixedInt::max_value()
    }
}
