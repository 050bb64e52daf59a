//! Addition, subtraction, negation (§4.2). All arithmetic here is modulo
//! `2^BITS`; `SIGNED` only changes how boundaries are interpreted elsewhere
//! (compare, convert, divide, shift-right, string, gcd).

use crate::fixed_int::FixedInt;

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> FixedInt<LIMBS, BITS, SIGNED> {
    /// `self + rhs`, wrapping modulo `2^BITS`.
    #[inline]
    #[must_use]
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        let mut out = *self;
        let mut carry: u128 = 0;
        for i in (0..LIMBS).rev() {
            carry += u128::from(self.limbs[i]) + u128::from(rhs.limbs[i]);
            out.limbs[i] = carry as u64;
            carry >>= Self::LIMB_BITS;
        }
        out.mask_top();
        out
    }

    /// `self - rhs`, wrapping modulo `2^BITS`. Implemented as
    /// `add(self, !rhs)` with an initial carry of one, matching two's
    /// complement subtraction.
    #[inline]
    #[must_use]
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        let mut out = *self;
        let mut carry: u128 = 1;
        for i in (0..LIMBS).rev() {
            carry += u128::from(self.limbs[i]) + u128::from(!rhs.limbs[i]);
            out.limbs[i] = carry as u64;
            carry >>= Self::LIMB_BITS;
        }
        out.mask_top();
        out
    }

    /// `-self`, wrapping modulo `2^BITS` (so `MIN.wrapping_neg() == MIN` for
    /// signed widths).
    #[inline]
    #[must_use]
    pub fn wrapping_neg(&self) -> Self {
        let mut out = *self;
        let mut carry: u128 = 1;
        for i in (0..LIMBS).rev() {
            carry += u128::from(!out.limbs[i]);
            out.limbs[i] = carry as u64;
            carry >>= Self::LIMB_BITS;
        }
        out.mask_top();
        out
    }

    /// `self + rhs` for an unsigned single-limb scalar.
    #[must_use]
    pub fn wrapping_add_u64(&self, rhs: u64) -> Self {
        let mut out = *self;
        let mut carry: u128 = u128::from(rhs);
        let mut i = LIMBS;
        while carry != 0 && i > 0 {
            i -= 1;
            carry += u128::from(out.limbs[i]);
            out.limbs[i] = carry as u64;
            carry >>= Self::LIMB_BITS;
        }
        out.mask_top();
        out
    }

    /// `self - rhs` for an unsigned single-limb scalar; negates `rhs` on the
    /// fly rather than materializing a full-width value.
    #[must_use]
    pub fn wrapping_sub_u64(&self, rhs: u64) -> Self {
        let mut out = *self;
        let last = LIMBS - 1;
        let mut carry: u128 = u128::from(out.limbs[last]) + 1 + u128::from(!rhs);
        out.limbs[last] = carry as u64;
        carry >>= Self::LIMB_BITS;
        let mut i = last;
        while carry != 1 && i > 0 {
            i -= 1;
            carry += u128::from(out.limbs[i]) + u128::from(u64::MAX);
            out.limbs[i] = carry as u64;
            carry >>= Self::LIMB_BITS;
        }
        out.mask_top();
        out
    }

    /// `self + rhs` for a signed single-limb scalar.
    #[must_use]
    pub fn wrapping_add_i64(&self, rhs: i64) -> Self {
        if rhs < 0 {
            self.wrapping_sub_u64(rhs.unsigned_abs())
        } else {
            self.wrapping_add_u64(rhs as u64)
        }
    }

    /// `self - rhs` for a signed single-limb scalar.
    #[must_use]
    pub fn wrapping_sub_i64(&self, rhs: i64) -> Self {
        if rhs < 0 {
            self.wrapping_add_u64(rhs.unsigned_abs())
        } else {
            self.wrapping_sub_u64(rhs as u64)
        }
    }

    /// `self += 1`, wrapping. Fast path touches only the least-significant
    /// limb when no carry can propagate out of it.
    #[inline]
    pub fn increment(&mut self) {
        let last = LIMBS - 1;
        if self.limbs[last] < u64::MAX {
            self.limbs[last] += 1;
            self.mask_top();
        } else {
            *self = self.wrapping_add_u64(1);
        }
    }

    /// `self -= 1`, wrapping. Fast path touches only the least-significant
    /// limb when no borrow can propagate out of it.
    #[inline]
    pub fn decrement(&mut self) {
        let last = LIMBS - 1;
        if self.limbs[last] > 0 {
            self.limbs[last] -= 1;
            self.mask_top();
        } else {
            *self = self.wrapping_sub_u64(1);
        }
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::Add
    for FixedInt<LIMBS, BITS, SIGNED>
{
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(&rhs)
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::Sub
    for FixedInt<LIMBS, BITS, SIGNED>
{
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(&rhs)
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::Neg
    for FixedInt<LIMBS, BITS, SIGNED>
{
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::AddAssign
    for FixedInt<LIMBS, BITS, SIGNED>
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.wrapping_add(&rhs);
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::SubAssign
    for FixedInt<LIMBS, BITS, SIGNED>
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.wrapping_sub(&rhs);
    }
}
