//! Conversions out to native integer and floating-point types (§4.9). All
//! are truncating (take the low bits) except [`FixedInt::to_f64`], which is
//! lossy in precision instead.
//!
//! Per §4.9, a negative signed value converts by negating a copy, converting
//! the magnitude as unsigned, then negating the native result — not by
//! bit-casting the stored limbs directly. The CRI keeps the top limb's
//! *unused* high bits zero rather than sign-extended, so a direct bit-cast
//! of a narrow negative value (e.g. `-5` in a 40-bit type) reads back as a
//! large positive native integer instead of `-5`.

use crate::fixed_int::FixedInt;

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> FixedInt<LIMBS, BITS, SIGNED> {
    /// Low 64 bits, as an unsigned value.
    #[inline]
    #[must_use]
    pub fn to_u64(&self) -> u64 {
        self.limbs[LIMBS - 1]
    }

    /// Low 64 bits, sign-aware: negative values negate, convert, negate back.
    #[must_use]
    pub fn to_i64(&self) -> i64 {
        if self.is_negative() {
            (self.wrapping_neg().to_u64() as i64).wrapping_neg()
        } else {
            self.to_u64() as i64
        }
    }

    /// Low 128 bits, as an unsigned value.
    #[must_use]
    pub fn to_u128(&self) -> u128 {
        if LIMBS == 1 {
            u128::from(self.limbs[LIMBS - 1])
        } else {
            let hi = self.limbs[LIMBS - 2];
            let lo = self.limbs[LIMBS - 1];
            (u128::from(hi) << Self::LIMB_BITS) | u128::from(lo)
        }
    }

    /// Low 128 bits, sign-aware: negative values negate, convert, negate back.
    #[must_use]
    pub fn to_i128(&self) -> i128 {
        if self.is_negative() {
            (self.wrapping_neg().to_u128() as i128).wrapping_neg()
        } else {
            self.to_u128() as i128
        }
    }

    /// Lossy conversion to the nearest representable `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let neg = self.is_negative();
        let mag = if neg { self.wrapping_neg() } else { *self };
        let mut acc = 0.0f64;
        for &limb in mag.limbs.iter() {
            acc = acc * 2f64.powi(Self::LIMB_BITS as i32) + limb as f64;
        }
        if neg { -acc } else { acc }
    }
}
