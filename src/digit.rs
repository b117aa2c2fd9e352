//! Helpers to convert and accumulate digits from characters.

use crate::math::Limb;

// Convert u8 to digit.
#[inline]
pub(crate) fn to_digit(c: u8) -> Option<Limb> {
    (c as char).to_digit(10).map(|d| d as Limb)
}

// Shift a digit into a limb accumulator. Chunks are at most BASE_LENGTH
// digits, so the accumulator stays below RADIX and cannot overflow.
#[inline]
pub(crate) fn add_digit(value: Limb, digit: Limb) -> Limb {
    value * 10 + digit
}
