//! Bitwise and/or/xor/complement (§4.5), plus scalar overloads that treat a
//! native scalar as sign-extended (signed) or zero-extended (unsigned) to
//! the full width without materializing it.

use crate::fixed_int::FixedInt;

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> FixedInt<LIMBS, BITS, SIGNED> {
    /// Bitwise AND.
    #[must_use]
    pub fn bitand(&self, rhs: &Self) -> Self {
        let mut out = *self;
        for i in 0..LIMBS {
            out.limbs[i] &= rhs.limbs[i];
        }
        out.mask_top();
        out
    }

    /// Bitwise OR.
    #[must_use]
    pub fn bitor(&self, rhs: &Self) -> Self {
        let mut out = *self;
        for i in 0..LIMBS {
            out.limbs[i] |= rhs.limbs[i];
        }
        out.mask_top();
        out
    }

    /// Bitwise XOR.
    #[must_use]
    pub fn bitxor(&self, rhs: &Self) -> Self {
        let mut out = *self;
        for i in 0..LIMBS {
            out.limbs[i] ^= rhs.limbs[i];
        }
        out.mask_top();
        out
    }

    /// Bitwise complement (`!self`, not two's complement negation).
    #[must_use]
    pub fn complement(&self) -> Self {
        let mut out = *self;
        for l in out.limbs.iter_mut() {
            *l = !*l;
        }
        out.mask_top();
        out
    }

    /// `self & rhs` where `rhs` is a zero-extended unsigned scalar.
    #[must_use]
    pub fn and_u64(&self, rhs: u64) -> Self {
        let mut out = *self;
        for l in out.limbs[..LIMBS - 1].iter_mut() {
            *l = 0;
        }
        out.limbs[LIMBS - 1] &= rhs;
        out.mask_top();
        out
    }

    /// `self | rhs` where `rhs` is a zero-extended unsigned scalar.
    #[must_use]
    pub fn or_u64(&self, rhs: u64) -> Self {
        let mut out = *self;
        out.limbs[LIMBS - 1] |= rhs;
        out.mask_top();
        out
    }

    /// `self ^ rhs` where `rhs` is a zero-extended unsigned scalar.
    #[must_use]
    pub fn xor_u64(&self, rhs: u64) -> Self {
        let mut out = *self;
        out.limbs[LIMBS - 1] ^= rhs;
        out.mask_top();
        out
    }

    /// `self & rhs` where `rhs` is a sign-extended signed scalar.
    #[must_use]
    pub fn and_i64(&self, rhs: i64) -> Self {
        if rhs >= 0 {
            self.and_u64(rhs as u64)
        } else {
            let mut out = *self;
            out.limbs[LIMBS - 1] &= rhs as u64;
            out.mask_top();
            out
        }
    }

    /// `self | rhs` where `rhs` is a sign-extended signed scalar.
    #[must_use]
    pub fn or_i64(&self, rhs: i64) -> Self {
        if rhs >= 0 {
            self.or_u64(rhs as u64)
        } else {
            let mut out = *self;
            for l in out.limbs[..LIMBS - 1].iter_mut() {
                *l = u64::MAX;
            }
            out.limbs[LIMBS - 1] |= rhs as u64;
            out.mask_top();
            out
        }
    }

    /// `self ^ rhs` where `rhs` is a sign-extended signed scalar.
    #[must_use]
    pub fn xor_i64(&self, rhs: i64) -> Self {
        if rhs >= 0 {
            self.xor_u64(rhs as u64)
        } else {
            let mut out = *self;
            for l in out.limbs[..LIMBS - 1].iter_mut() {
                *l = !*l;
            }
            out.limbs[LIMBS - 1] ^= rhs as u64;
            out.mask_top();
            out
        }
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::BitAnd
    for FixedInt<LIMBS, BITS, SIGNED>
{
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        FixedInt::bitand(&self, &rhs)
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::BitOr
    for FixedInt<LIMBS, BITS, SIGNED>
{
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        FixedInt::bitor(&self, &rhs)
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::BitXor
    for FixedInt<LIMBS, BITS, SIGNED>
{
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        FixedInt::bitxor(&self, &rhs)
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::Not
    for FixedInt<LIMBS, BITS, SIGNED>
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        self.complement()
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::BitAndAssign
    for FixedInt<LIMBS, BITS, SIGNED>
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = FixedInt::bitand(self, &rhs);
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::BitOrAssign
    for FixedInt<LIMBS, BITS, SIGNED>
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = FixedInt::bitor(self, &rhs);
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::BitXorAssign
    for FixedInt<LIMBS, BITS, SIGNED>
{
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = FixedInt::bitxor(self, &rhs);
    }
}
