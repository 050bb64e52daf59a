//! Greatest common divisor and least common multiple (§4.10), via Stein's
//! binary GCD: no division, only shifts, compares, and subtracts.

use crate::fixed_int::FixedInt;

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> FixedInt<LIMBS, BITS, SIGNED> {
    fn abs_magnitude(&self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            *self
        }
    }

    /// Greatest common divisor of the magnitudes of `self` and `other`.
    /// `gcd(0, x) == x`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.abs_magnitude();
        let mut b = other.abs_magnitude();
        if a.is_zero() {
            return b;
        }
        if b.is_zero() {
            return a;
        }
        let shift = a.trailing_zeros().min(b.trailing_zeros());
        a = a.logical_shr(a.trailing_zeros());
        loop {
            b = b.logical_shr(b.trailing_zeros());
            if a.as_limbs() > b.as_limbs() {
                core::mem::swap(&mut a, &mut b);
            }
            b = b.wrapping_sub(&a);
            if b.is_zero() {
                break;
            }
        }
        a.wrapping_shl(shift)
    }

    /// Least common multiple of the magnitudes of `self` and `other`.
    /// `lcm(0, x) == 0`.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let a = self.abs_magnitude();
        let b = other.abs_magnitude();
        let g = a.gcd(&b);
        let (q, _) = a
            .div_rem_unsigned(&g)
            .expect("gcd of two nonzero values is itself nonzero");
        q.wrapping_mul(&b)
    }
}
