//! Field layout of the working integer: fixed bit allocation behind a digit
//! reversal.
//!
//! A code's payload is not read directly. It is first *inverted*: written as
//! base30 digits, left-padded to 9 digits, reversed and decoded again. The
//! resulting working integer carries the fields:
//!
//! ```text
//! ┌──────────┬─────────┬─────────┬──────────┬─────────┬─────────┐
//! │ Padding  │ Value A │ Meta A  │ Value B  │ Meta B  │ Value C │
//! │ 9 bits   │ 1 bit   │ 4 bits  │ 26 bits  │ 8 bits  │ 6 bits  │
//! │ [53:45]  │ [44]    │ [43:40] │ [39:14]  │ [13:6]  │ [5:0]   │
//! └──────────┴─────────┴─────────┴──────────┴─────────┴─────────┘
//! ```
//!
//! Total: 9 + 1 + 4 + 26 + 8 + 6 = 54 bits
//!
//! `value` is `A:B:C` (33 bits), `meta` is `A:B` (12 bits read). Writes of
//! `meta` accept 14 bits and place bits 8..13 at the Meta A offset, so the two
//! extra bits land on Value A and the lowest padding bit.
//!
//! The reversal is an exact involution for every working integer below
//! 30^9 (all 9-digit codes). Above that it only round-trips when the last
//! base30 digit is non-zero.

use crate::base30::{BASE, Digits};
use crate::error::CodeError;

/// Width of the working integer.
pub const WORKING_BITS: u8 = 54;

pub const PADDING_BITS: u8 = 9;
pub const VALUE_A_BITS: u8 = 1;
pub const META_A_BITS: u8 = 4;
pub const VALUE_B_BITS: u8 = 26;
pub const META_B_BITS: u8 = 8;
pub const VALUE_C_BITS: u8 = 6;

/// Bit offsets of each sub-field (from bit 0).
pub const VALUE_C_SHIFT: u8 = 0;
pub const META_B_SHIFT: u8 = VALUE_C_SHIFT + VALUE_C_BITS;
pub const VALUE_B_SHIFT: u8 = META_B_SHIFT + META_B_BITS;
pub const META_A_SHIFT: u8 = VALUE_B_SHIFT + VALUE_B_BITS;
pub const VALUE_A_SHIFT: u8 = META_A_SHIFT + META_A_BITS;
pub const PADDING_SHIFT: u8 = VALUE_A_SHIFT + VALUE_A_BITS;

/// Width accepted by meta writes.
pub const META_BITS: u8 = 14;

/// Width of `value`.
pub const VALUE_BITS: u8 = VALUE_A_BITS + VALUE_B_BITS + VALUE_C_BITS;

pub const MAX_META: u16 = (1 << META_BITS) - 1;
pub const MAX_VALUE: u64 = (1 << VALUE_BITS) - 1;

/// Largest payload a code may hold.
pub const MAX_PAYLOAD: u64 = (1 << WORKING_BITS) - 1;

/// Digit count the reversal pads to.
pub const INVERSE_DIGITS: usize = 9;

/// AND mask clearing the meta sub-fields before a meta write.
///
/// 52 bits wide: the top two padding bits are cleared along with meta.
pub const KEEP_VALUE_MASK: u64 =
    0b1111111_1_0000_11111111111111111111111111_00000000_111111;

/// AND mask clearing everything except the meta sub-fields before a value write.
pub const KEEP_META_MASK: u64 =
    0b0000000_0_1111_00000000000000000000000000_11111111_000000;

#[inline]
const fn low_mask(bits: u8) -> u64 {
    (1u64 << bits) - 1
}

/// Static assertion: fields tile the working integer and the masks agree
/// with the field offsets.
const _: () = {
    assert!(
        PADDING_BITS + VALUE_A_BITS + META_A_BITS + VALUE_B_BITS + META_B_BITS + VALUE_C_BITS
            == WORKING_BITS,
        "field widths must sum to exactly 54 bits"
    );
    assert!(PADDING_SHIFT + PADDING_BITS == WORKING_BITS);

    let meta_fields =
        (low_mask(META_A_BITS) << META_A_SHIFT) | (low_mask(META_B_BITS) << META_B_SHIFT);
    assert!(KEEP_META_MASK == meta_fields);
    assert!(KEEP_VALUE_MASK == low_mask(52) & !meta_fields);
};

// =============================================================================
// Digit reversal
// =============================================================================

/// Reverse the 9-digit (at least) base30 form of `x`.
///
/// `x` is written in base30, left-padded with zeros to [`INVERSE_DIGITS`]
/// digits, reversed and decoded. Padding zeros become trailing zeros, so they
/// turn into multiplications by 30 after the reversed digits are read.
///
/// Inputs must stay below 30^13 so the reversed digits fit in `u64`; every
/// payload up to [`MAX_PAYLOAD`] does.
pub const fn inverse(x: u64) -> u64 {
    debug_assert!(x < 15_943_230_000_000_000_000, "inverse input exceeds 13 digits");

    let digits = Digits::of(x);
    let values = digits.values();

    let mut out = 0u64;
    let mut i = values.len();
    while i > 0 {
        i -= 1;
        out = out * BASE + values[i] as u64;
    }

    let mut len = values.len();
    while len < INVERSE_DIGITS {
        out *= BASE;
        len += 1;
    }
    out
}

// =============================================================================
// Field access on the working integer
// =============================================================================

/// Read `meta` (Meta A : Meta B, 12 bits).
#[inline]
pub const fn meta_of(working: u64) -> u16 {
    let a = (working >> META_A_SHIFT) & low_mask(META_A_BITS);
    let b = (working >> META_B_SHIFT) & low_mask(META_B_BITS);
    ((a << META_B_BITS) | b) as u16
}

/// Read `value` (Value A : Value B : Value C, 33 bits).
#[inline]
pub const fn value_of(working: u64) -> u64 {
    let a = (working >> VALUE_A_SHIFT) & low_mask(VALUE_A_BITS);
    let b = (working >> VALUE_B_SHIFT) & low_mask(VALUE_B_BITS);
    let c = (working >> VALUE_C_SHIFT) & low_mask(VALUE_C_BITS);
    (a << (VALUE_B_BITS + VALUE_C_BITS)) | (b << VALUE_C_BITS) | c
}

/// Write `meta` into `working`.
///
/// The high part is `meta` bits 8..13 (six bits) even though only four are
/// read back by [`meta_of`].
pub const fn inject_meta(working: u64, meta: u16) -> Result<u64, CodeError> {
    if meta > MAX_META {
        return Err(CodeError::MetaOutOfRange { meta });
    }
    let meta = meta as u64;
    let a = (meta & low_mask(META_BITS)) >> META_B_BITS;
    let b = meta & low_mask(META_B_BITS);
    Ok((working & KEEP_VALUE_MASK) | (a << META_A_SHIFT) | (b << META_B_SHIFT))
}

/// Write `value` into `working`, keeping only the meta sub-fields.
pub const fn inject_value(working: u64, value: u64) -> Result<u64, CodeError> {
    if value > MAX_VALUE {
        return Err(CodeError::ValueOutOfRange { value });
    }
    let a = (value >> (VALUE_B_BITS + VALUE_C_BITS)) & low_mask(VALUE_A_BITS);
    let b = (value >> VALUE_C_BITS) & low_mask(VALUE_B_BITS);
    let c = value & low_mask(VALUE_C_BITS);
    Ok((working & KEEP_META_MASK)
        | (a << VALUE_A_SHIFT)
        | (b << VALUE_B_SHIFT)
        | (c << VALUE_C_SHIFT))
}
