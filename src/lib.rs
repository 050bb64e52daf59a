//! Fixed-width multi-precision integers: two's-complement arithmetic,
//! bitwise operations, shifts, comparisons, string conversion, and number
//! theory (GCD/LCM) over a compile-time bit width.
//!
//! [`FixedInt`] is the single generic value type; [`U64`], [`U128`],
//! [`U256`], [`U512`], [`I64`], [`I128`], [`I256`], and [`I512`] are the
//! ready-made aliases. Wider or narrower widths are any other
//! `FixedInt<LIMBS, BITS, SIGNED>` with `LIMBS == BITS.div_ceil(64)`.
//!
//! Arithmetic wraps modulo `2^BITS` rather than panicking or saturating;
//! division by zero, malformed parses, and non-finite float construction
//! are the only operations that return [`FixedIntError`].

mod arith;
mod bitwise;
mod compare;
mod construct;
mod convert;
mod div;
mod error;
mod fixed_int;
mod format;
mod gcd;
mod limits;
mod mul;
mod shift;

#[cfg(test)]
mod tests;

pub use error::{FixedIntError, ParseErrorReason};
pub use fixed_int::FixedInt;
pub use limits::NumericLimits;

/// Unsigned 64-bit fixed-width integer.
pub type U64 = FixedInt<1, 64, false>;
/// Signed 64-bit fixed-width integer.
pub type I64 = FixedInt<1, 64, true>;
/// Unsigned 128-bit fixed-width integer.
pub type U128 = FixedInt<2, 128, false>;
/// Signed 128-bit fixed-width integer.
pub type I128 = FixedInt<2, 128, true>;
/// Unsigned 256-bit fixed-width integer.
pub type U256 = FixedInt<4, 256, false>;
/// Signed 256-bit fixed-width integer.
pub type I256 = FixedInt<4, 256, true>;
/// Unsigned 512-bit fixed-width integer.
pub type U512 = FixedInt<8, 512, false>;
/// Signed 512-bit fixed-width integer.
pub type I512 = FixedInt<8, 512, true>;
