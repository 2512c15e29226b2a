//! Errors returned by code construction and field updates.

use crate::layout::{MAX_META, MAX_PAYLOAD, MAX_VALUE};

/// Errors that can occur while building or modifying a [`Code`](crate::Code).
///
/// Every variant is `Copy` so the error can be produced from `const fn`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeError {
    /// `meta` needs more than 14 bits.
    MetaOutOfRange { meta: u16 },
    /// `value` needs more than 33 bits.
    ValueOutOfRange { value: u64 },
    /// Raw payload wider than the 54-bit working integer.
    PayloadOutOfRange { payload: u64 },
    /// Decoded digits no longer fit in 64 bits.
    Overflow,
    /// Binary form must be exactly 8 bytes.
    InvalidLength { len: usize },
    /// `CodeType::Unknown` has no meta constant to build a code from.
    UnknownType,
    /// The fields were written but do not read back, because the working
    /// integer left the 9-digit range of the digit reversal.
    Unrepresentable { meta: u16, value: u64 },
}

impl std::fmt::Display for CodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MetaOutOfRange { meta } => {
                write!(f, "Meta value too large: {} (max {})", meta, MAX_META)
            }
            Self::ValueOutOfRange { value } => {
                write!(f, "Value too large: {} (max {})", value, MAX_VALUE)
            }
            Self::PayloadOutOfRange { payload } => {
                write!(f, "Payload too large: {} (max {})", payload, MAX_PAYLOAD)
            }
            Self::Overflow => write!(f, "Code has too many digits"),
            Self::InvalidLength { len } => {
                write!(f, "Invalid binary code length: {} (expected 8)", len)
            }
            Self::UnknownType => write!(f, "Cannot build a code of unknown type"),
            Self::Unrepresentable { meta, value } => write!(
                f,
                "Fields meta={} value={} cannot be represented in a 9-digit code",
                meta, value
            ),
        }
    }
}

impl std::error::Error for CodeError {}
