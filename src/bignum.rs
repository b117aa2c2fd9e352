//! Magnitude storage for big integers.

use crate::bigint::BigInt;
use crate::lib::{cmp, Vec};
use crate::math::{large, small, Limb, RADIX};

/// The non-negative part of a big integer.
///
/// Keeping magnitudes and signed values as distinct types makes the
/// multiplication engine's cross term go through the signed operators by
/// construction instead of by convention; the only ways across the boundary
/// are [`Magnitude::into_signed`] and [`BigInt::into_magnitude`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Magnitude {
    /// Internal limb storage for the magnitude, in little-endian order.
    /// Canonical form has no trailing zero limb, except zero itself which
    /// is the single limb `[0]`.
    pub(crate) data: Vec<Limb>,
}

impl Magnitude {
    /// The canonical zero magnitude.
    #[inline]
    pub(crate) fn zero() -> Magnitude {
        Magnitude { data: [0].to_vec() }
    }

    /// Take ownership of a raw limb buffer and normalize it.
    #[inline]
    pub(crate) fn from_data(data: Vec<Limb>) -> Magnitude {
        let mut magnitude = Magnitude { data };
        magnitude.normalize();
        magnitude
    }

    /// Split a machine integer into limbs, in little-endian order.
    pub(crate) fn from_u64(mut x: u64) -> Magnitude {
        let radix = RADIX as u64;
        let mut data = Vec::with_capacity(3);
        loop {
            data.push((x % radix) as Limb);
            x /= radix;
            if x == 0 {
                break;
            }
        }
        Magnitude { data }
    }

    /// Get the number of limbs.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Check for an empty or single-zero-limb sequence.
    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        matches!(self.data.as_slice(), [] | [0])
    }

    /// Restore the canonical form: no trailing zero limbs, and a true zero
    /// keeps one limb rather than none.
    #[inline]
    pub(crate) fn normalize(&mut self) {
        small::normalize(&mut self.data);
        if self.data.is_empty() {
            self.data.push(0);
        }
    }

    /// Compare to another magnitude.
    #[inline]
    pub(crate) fn compare(&self, other: &Magnitude) -> cmp::Ordering {
        large::compare(&self.data, &other.data)
    }

    /// Attach a sign. Total: zero ignores the requested sign, so every
    /// value keeps exactly one representation.
    #[inline]
    pub(crate) fn into_signed(self, is_negative: bool) -> BigInt {
        BigInt::from_magnitude(self, is_negative)
    }
}
