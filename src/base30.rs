//! Base30 digit codec.
//!
//! The alphabet is `0-9` followed by the 20 upper-case consonants that are
//! hard to misread (`A E I O U Z` are left out). Decoding is lenient: any
//! character outside the alphabet, dashes included, is skipped.

use crate::divmod::div_rem;
use crate::error::CodeError;

/// Digit characters, indexed by digit value.
pub const ALPHABET: &[u8; 30] = b"0123456789BCDFGHJKLMNPQRSTVWXY";

/// Numeric base of the codec.
pub const BASE: u64 = 30;

/// Longest digit string a `u64` can produce (30^13 < 2^64 < 30^14).
pub const MAX_DIGITS: usize = 14;

const NOT_A_DIGIT: u8 = 0xFF;

/// Byte → digit value, `NOT_A_DIGIT` for bytes outside the alphabet.
const DIGIT_LOOKUP: [u8; 256] = {
    let mut table = [NOT_A_DIGIT; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Value of a single alphabet character, `None` if it is not a digit.
#[inline]
pub const fn digit_value(c: u8) -> Option<u8> {
    match DIGIT_LOOKUP[c as usize] {
        NOT_A_DIGIT => None,
        d => Some(d),
    }
}

/// Decode a digit string, most significant digit first.
///
/// Characters outside the alphabet are skipped; empty or all-invalid input
/// decodes to zero. Fails only when the digits overflow `u64`.
pub const fn decode(text: &str) -> Result<u64, CodeError> {
    decode_bytes(text.as_bytes())
}

/// Byte-slice form of [`decode`].
///
/// Multi-byte UTF-8 sequences never match the ASCII alphabet, so they are
/// skipped the same way a single invalid character is.
pub const fn decode_bytes(bytes: &[u8]) -> Result<u64, CodeError> {
    let mut acc: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        if let Some(d) = digit_value(bytes[i]) {
            acc = match acc.checked_mul(BASE) {
                Some(v) => v,
                None => return Err(CodeError::Overflow),
            };
            acc = match acc.checked_add(d as u64) {
                Some(v) => v,
                None => return Err(CodeError::Overflow),
            };
        }
        i += 1;
    }
    Ok(acc)
}

/// Number of characters [`decode`] would skip, not counting `-` separators.
pub fn skipped_chars(text: &str) -> usize {
    text.chars()
        .filter(|&c| c != '-' && !(c.is_ascii() && digit_value(c as u8).is_some()))
        .count()
}

/// Fixed-capacity base30 digits of a `u64`, most significant first.
///
/// Zero has no digits; callers that need a fixed width pad afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digits {
    /// Digit values (0-29), not characters.
    buf: [u8; MAX_DIGITS],
    /// Index of the most significant digit; `MAX_DIGITS` when empty.
    start: usize,
}

impl Digits {
    /// Encode `value`, least significant digit first into the tail of the
    /// buffer so the result reads most significant first.
    pub const fn of(mut value: u64) -> Self {
        let mut buf = [0u8; MAX_DIGITS];
        let mut start = MAX_DIGITS;
        while value > 0 {
            let (quotient, remainder) = div_rem(value, BASE);
            start -= 1;
            buf[start] = remainder as u8;
            value = quotient;
        }
        Self { buf, start }
    }

    /// Digit values, most significant first.
    #[inline]
    pub const fn values(&self) -> &[u8] {
        self.buf.split_at(self.start).1
    }

    #[inline]
    pub const fn len(&self) -> usize {
        MAX_DIGITS - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == MAX_DIGITS
    }
}

impl std::fmt::Display for Digits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &d in self.values() {
            write!(f, "{}", ALPHABET[d as usize] as char)?;
        }
        Ok(())
    }
}

/// Encode `value` as a digit string without padding.
pub fn encode(value: u64) -> String {
    Digits::of(value).to_string()
}
