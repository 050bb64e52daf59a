//! Schoolbook multiplication (§4.3), truncated to `BITS` — the textbook
//! O(LIMBS²) algorithm, discarding any partial product that would land at or
//! above the top limb rather than computing a full double-width result we'd
//! only throw half of away.

use crate::fixed_int::FixedInt;

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> FixedInt<LIMBS, BITS, SIGNED> {
    /// `self * rhs`, wrapping modulo `2^BITS`.
    #[must_use]
    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        // Little-endian working limbs: position p has weight 64*p.
        let mut out_le = [0u64; LIMBS];
        for i in 0..LIMBS {
            let a = self.limbs[LIMBS - 1 - i];
            if a == 0 {
                continue;
            }
            let mut carry: u128 = 0;
            for j in 0..(LIMBS - i) {
                let b = rhs.limbs[LIMBS - 1 - j];
                let k = i + j;
                let prod = u128::from(a) * u128::from(b) + u128::from(out_le[k]) + carry;
                out_le[k] = prod as u64;
                carry = prod >> Self::LIMB_BITS;
            }
        }
        let mut limbs = [0u64; LIMBS];
        for p in 0..LIMBS {
            limbs[LIMBS - 1 - p] = out_le[p];
        }
        let mut out = Self { limbs };
        out.mask_top();
        out
    }

    /// `self * rhs` for an unsigned single-limb scalar.
    #[must_use]
    pub fn wrapping_mul_u64(&self, rhs: u64) -> Self {
        let mut out = *self;
        let mut carry: u128 = 0;
        for i in (0..LIMBS).rev() {
            let prod = u128::from(self.limbs[i]) * u128::from(rhs) + carry;
            out.limbs[i] = prod as u64;
            carry = prod >> Self::LIMB_BITS;
        }
        out.mask_top();
        out
    }

    /// `self * rhs` for a signed single-limb scalar.
    #[must_use]
    pub fn wrapping_mul_i64(&self, rhs: i64) -> Self {
        let magnitude = self.wrapping_mul_u64(rhs.unsigned_abs());
        if rhs < 0 {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::Mul
    for FixedInt<LIMBS, BITS, SIGNED>
{
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(&rhs)
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::ops::MulAssign
    for FixedInt<LIMBS, BITS, SIGNED>
{
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.wrapping_mul(&rhs);
    }
}
