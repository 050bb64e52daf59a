//! Signed-aware ordering (§4.7). Two's complement numbers of matching sign
//! compare the same way as their raw bit patterns; only a sign mismatch
//! needs special-casing.

use core::cmp::Ordering;

use crate::fixed_int::FixedInt;

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> FixedInt<LIMBS, BITS, SIGNED> {
    fn cmp_impl(&self, other: &Self) -> Ordering {
        if SIGNED {
            let sn = self.is_negative();
            let on = other.is_negative();
            if sn != on {
                return if sn { Ordering::Less } else { Ordering::Greater };
            }
        }
        self.limbs.cmp(&other.limbs)
    }

    /// Compare against an unsigned single-limb scalar without materializing
    /// a full-width temporary first.
    #[must_use]
    pub fn cmp_u64(&self, rhs: u64) -> Ordering {
        self.cmp_impl(&Self::zero().wrapping_add_u64(rhs))
    }

    /// Compare against a signed single-limb scalar.
    #[must_use]
    pub fn cmp_i64(&self, rhs: i64) -> Ordering {
        self.cmp_impl(&Self::zero().wrapping_add_i64(rhs))
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> PartialOrd
    for FixedInt<LIMBS, BITS, SIGNED>
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_impl(other))
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> Ord
    for FixedInt<LIMBS, BITS, SIGNED>
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_impl(other)
    }
}
