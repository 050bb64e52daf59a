//! The public error taxonomy (§7): exactly three kinds, none silently
//! swallowed. Arithmetic overflow is not an error — it wraps modulo `2^N` —
//! so it has no variant here.

/// Errors surfaced by the fallible parts of the core: division, parsing,
/// and floating-point construction.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedIntError {
    /// `div` or `mod` with a zero divisor.
    #[error("division by zero")]
    DivideByZero,

    /// Malformed digit, digit out of the base's range, or an empty body
    /// after stripping the sign/prefix.
    #[error("could not parse integer: {reason}")]
    ParseError {
        /// A short, human-readable reason the input was rejected.
        reason: ParseErrorReason,
    },

    /// Floating-point construction from NaN, infinity, or an unbiased
    /// exponent outside the representable range.
    #[error("value is not finite")]
    NonFinite,
}

/// Why [`FixedIntError::ParseError`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorReason {
    /// The string was empty after stripping a leading sign and/or base
    /// prefix.
    Empty,
    /// A character was not a valid digit for the selected base.
    InvalidDigit,
}

impl core::fmt::Display for ParseErrorReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseErrorReason::Empty => "empty digit sequence",
            ParseErrorReason::InvalidDigit => "invalid digit",
        };
        f.write_str(msg)
    }
}
