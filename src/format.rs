//! String formatting (§4.8): decimal via `Display`, plus the standard Rust
//! radix-formatting traits for base 2/8/16. Hex/octal/binary show the raw
//! two's-complement bit pattern unsigned, the same convention native
//! integers use for `{:x}` on a negative value — only `Display` is
//! sign-aware.

use crate::fixed_int::FixedInt;

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> FixedInt<LIMBS, BITS, SIGNED> {
    /// Bits `[shift, shift + width)` of the raw bit pattern, `width <= 64`.
    /// Reads directly off the (already-canonical) limb array, so it never
    /// sign-extends past `BITS` the way a signed [`Self::wrapping_shr`] would.
    fn raw_digit(&self, shift: u32, width: u32) -> u64 {
        let mut result = 0u64;
        for b in 0..width {
            let pos = shift + b;
            if pos >= BITS {
                break;
            }
            let limb_idx = LIMBS - 1 - (pos / Self::LIMB_BITS) as usize;
            let bit_idx = pos % Self::LIMB_BITS;
            let bit = (self.limbs[limb_idx] >> bit_idx) & 1;
            result |= bit << b;
        }
        result
    }

    fn to_string_pow2(&self, bits_per_digit: u32, radix: u32, uppercase: bool) -> String {
        let total_digits = BITS.div_ceil(bits_per_digit).max(1);
        let mut digits: Vec<u64> = (0..total_digits)
            .map(|i| self.raw_digit(i * bits_per_digit, bits_per_digit))
            .collect();
        while digits.len() > 1 && *digits.last().expect("at least one digit") == 0 {
            digits.pop();
        }
        let mut s = String::with_capacity(digits.len());
        for &d in digits.iter().rev() {
            let c = char::from_digit(d as u32, radix).expect("digit fits in radix");
            s.push(if uppercase { c.to_ascii_uppercase() } else { c });
        }
        s
    }

    fn to_string_decimal(&self) -> String {
        const BLOCK: u64 = 1_000_000_000;
        let neg = self.is_negative();
        let mag = if neg { self.wrapping_neg() } else { *self };
        if mag.is_zero() {
            return String::from("0");
        }
        let mut blocks: Vec<u64> = Vec::new();
        let mut cur = mag;
        while !cur.is_zero() {
            let (q, r) = cur
                .div_rem_u64(BLOCK)
                .expect("BLOCK is a nonzero constant divisor");
            blocks.push(r);
            cur = q;
        }
        let mut s = String::new();
        if neg {
            s.push('-');
        }
        let last = blocks.len() - 1;
        s.push_str(&blocks[last].to_string());
        for &block in blocks[..last].iter().rev() {
            s.push_str(&format!("{block:09}"));
        }
        s
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::fmt::Display
    for FixedInt<LIMBS, BITS, SIGNED>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_string_decimal())
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::fmt::LowerHex
    for FixedInt<LIMBS, BITS, SIGNED>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_string_pow2(4, 16, false))
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::fmt::UpperHex
    for FixedInt<LIMBS, BITS, SIGNED>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_string_pow2(4, 16, true))
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::fmt::Octal
    for FixedInt<LIMBS, BITS, SIGNED>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_string_pow2(3, 8, false))
    }
}

impl<const LIMBS: usize, const BITS: u32, const SIGNED: bool> core::fmt::Binary
    for FixedInt<LIMBS, BITS, SIGNED>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_string_pow2(1, 2, false))
    }
}
