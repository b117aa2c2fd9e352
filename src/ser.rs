//! Big integer to decimal text rendering.

use crate::bigint::BigInt;
use crate::lib::fmt::{self, Debug, Display};
use crate::lib::String;
use crate::math::BASE_LENGTH;

/// Render a big integer as canonical decimal text: a `-` prefix iff the
/// value is negative, no leading zeros, no grouping separators, and `"0"`
/// for zero.
///
/// ```
/// let value = bignum::from_str("-00123").unwrap();
/// assert_eq!(bignum::to_string(&value), "-123");
/// ```
pub fn to_string(value: &BigInt) -> String {
    let limbs = &value.magnitude().data;
    let mut out = String::with_capacity(limbs.len() * BASE_LENGTH + 1);
    if value.is_negative() {
        out.push('-');
    }

    let mut buffer = itoa::Buffer::new();
    let mut iter = limbs.iter().rev();

    // The most significant limb prints without padding; every limb below
    // it owns exactly BASE_LENGTH digit positions and is zero-filled.
    if let Some(&most) = iter.next() {
        out.push_str(buffer.format(most));
    }
    for &limb in iter {
        let digits = buffer.format(limb);
        for _ in digits.len()..BASE_LENGTH {
            out.push('0');
        }
        out.push_str(digits);
    }

    out
}

impl Display for BigInt {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&to_string(self))
    }
}

impl Debug for BigInt {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "BigInt({})", self)
    }
}
