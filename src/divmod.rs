//! Restoring division over `u64`.
//!
//! The codec never relies on the host's division for its digit loop; quotient
//! bits are found one at a time from bit 63 down to bit 0, which keeps the
//! arithmetic exact over the full unsigned 64-bit range and usable in `const`
//! contexts.

/// Divide `numerator` by `denominator`, returning `(quotient, remainder)`.
///
/// For every bit position `i` from 63 down to 0, if `denominator << i` still
/// fits under what remains of the numerator, bit `i` of the quotient is set
/// and the shifted denominator is subtracted.
///
/// # Panics
///
/// Panics if `denominator` is zero.
#[inline]
pub const fn div_rem(numerator: u64, denominator: u64) -> (u64, u64) {
    assert!(denominator != 0, "division by zero");

    let mut remainder = numerator;
    let mut quotient = 0u64;
    let mut i = 64u32;
    while i > 0 {
        i -= 1;
        // Comparing the shifted remainder avoids overflowing `denominator << i`.
        if (remainder >> i) >= denominator {
            quotient |= 1 << i;
            remainder -= denominator << i;
        }
    }
    (quotient, remainder)
}
