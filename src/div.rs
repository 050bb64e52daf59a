//! Division and remainder (§4.4).
//!
//! The unsigned core is schoolbook binary long division: walk the dividend
//! from its most significant bit down, building the remainder and quotient
//! one bit at a time. It's `O(BITS)` shift-compare-subtract rounds rather
//! than the limb-at-a-time guess-and-correct loop a native-width divider
//! uses, trading some throughput for an implementation with no guess/correct
//! step to get subtly wrong at arbitrary widths.
//!
//! Signed division truncates toward zero: divide magnitudes, then restore
//! the quotient's sign (negative iff the operands' signs differ) and the
//! remainder's sign (that of the dividend). Overflow (`MIN / -1`) wraps
//! rather than erroring, like every other arithmetic op here — `MIN`'s
//! magnitude is already `MIN`'s own bit pattern under two's complement, so
//! the unsigned core produces the right wrapped answer with no special case.

use crate::error::FixedIntError;
use crate::fixed_int::FixedInt;

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> FixedInt<LIMBS, BITS, SIGNED> {
    #[inline]
    fn bit(&self, i: u32) -> bool {
        let limb_idx = LIMBS - 1 - (i / Self::LIMB_BITS) as usize;
        let bit_idx = i % Self::LIMB_BITS;
        (self.limbs[limb_idx] >> bit_idx) & 1 == 1
    }

    /// Unsigned magnitude division; caller guarantees `rhs` is nonzero.
    fn div_rem_unsigned_raw(&self, rhs: &Self) -> (Self, Self) {
        let mut quotient = Self::zero();
        let mut remainder = Self::zero();
        for i in (0..BITS).rev() {
            remainder = remainder.wrapping_shl(1);
            if self.bit(i) {
                remainder.limbs[LIMBS - 1] |= 1;
            }
            quotient = quotient.wrapping_shl(1);
            if remainder.as_limbs() >= rhs.as_limbs() {
                remainder = remainder.wrapping_sub(rhs);
                quotient.limbs[LIMBS - 1] |= 1;
            }
        }
        (quotient, remainder)
    }

    /// Unsigned division and remainder, ignoring the `SIGNED` interpretation
    /// of either operand (i.e. treats both as non-negative magnitudes).
    pub fn div_rem_unsigned(&self, rhs: &Self) -> Result<(Self, Self), FixedIntError> {
        if rhs.is_zero() {
            return Err(FixedIntError::DivideByZero);
        }
        Ok(self.div_rem_unsigned_raw(rhs))
    }

    /// Division and remainder, truncating toward zero when `SIGNED`.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), FixedIntError> {
        if rhs.is_zero() {
            return Err(FixedIntError::DivideByZero);
        }
        if !SIGNED {
            return Ok(self.div_rem_unsigned_raw(rhs));
        }
        let neg_a = self.is_negative();
        let neg_b = rhs.is_negative();
        let abs_a = if neg_a { self.wrapping_neg() } else { *self };
        let abs_b = if neg_b { rhs.wrapping_neg() } else { *rhs };
        let (mut q, mut r) = abs_a.div_rem_unsigned_raw(&abs_b);
        if neg_a != neg_b {
            q = q.wrapping_neg();
        }
        if neg_a {
            r = r.wrapping_neg();
        }
        Ok((q, r))
    }

    /// `self / rhs`, truncating toward zero.
    #[inline]
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, FixedIntError> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    /// `self % rhs`, with the sign of `self`.
    #[inline]
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, FixedIntError> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    /// `self / rhs` for an unsigned single-limb scalar divisor.
    pub fn div_rem_u64(&self, rhs: u64) -> Result<(Self, u64), FixedIntError> {
        let divisor = Self::zero().wrapping_add_u64(rhs);
        let (q, r) = self.div_rem_unsigned(&divisor)?;
        Ok((q, r.as_limbs()[LIMBS - 1]))
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::Div
    for FixedInt<LIMBS, BITS, SIGNED>
{
    type Output = Self;
    /// Panics on division by zero, matching native integer `/`.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.div_rem(&rhs).expect("division by zero").0
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::Rem
    for FixedInt<LIMBS, BITS, SIGNED>
{
    type Output = Self;
    /// Panics on division by zero, matching native integer `%`.
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.div_rem(&rhs).expect("division by zero").1
    }
}
