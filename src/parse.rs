//! Decimal text to big integer conversion.

use crate::bigint::BigInt;
use crate::bignum::Magnitude;
use crate::digit::{add_digit, to_digit};
use crate::error::{Error, ErrorCode, Result};
use crate::lib::str::FromStr;
use crate::lib::Vec;
use crate::math::BASE_LENGTH;

/// Parse a big integer from decimal text: an optional leading `-` followed
/// by one or more ASCII digits.
///
/// Redundant leading zeros and `-0` are accepted and normalized away.
/// Anything else is rejected with the byte position of the offending
/// character; there is no permissive mode that would turn stray bytes into
/// garbage arithmetic.
///
/// ```
/// let value = bignum::from_str("-00123").unwrap();
/// assert_eq!(value.to_string(), "-123");
///
/// assert!(bignum::from_str("12e3").is_err());
/// assert!(bignum::from_str("").is_err());
/// ```
pub fn from_str(s: &str) -> Result<BigInt> {
    let bytes = s.as_bytes();
    let (digits, is_negative, offset) = match bytes.split_first() {
        Some((b'-', rest)) => (rest, true, 1),
        _ => (bytes, false, 0),
    };

    if digits.is_empty() {
        return Err(Error::syntax(ErrorCode::EofWhileParsingDigits, offset + 1));
    }
    if let Some(bad) = digits.iter().position(|&c| to_digit(c).is_none()) {
        return Err(Error::syntax(ErrorCode::InvalidDigit, offset + bad + 1));
    }

    // Chunk the digit string into limbs from the least-significant end;
    // only the most-significant chunk may be shorter than BASE_LENGTH.
    let mut data = Vec::with_capacity(digits.len() / BASE_LENGTH + 1);
    for chunk in digits.rchunks(BASE_LENGTH) {
        let mut limb = 0;
        for &c in chunk {
            limb = add_digit(limb, (c - b'0').into());
        }
        data.push(limb);
    }

    Ok(Magnitude::from_data(data).into_signed(is_negative))
}

impl FromStr for BigInt {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<BigInt> {
        crate::parse::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limbs(s: &str) -> Vec<crate::math::Limb> {
        from_str(s).unwrap().magnitude().data.clone()
    }

    #[test]
    fn chunking_test() {
        assert_eq!(limbs("0"), [0]);
        assert_eq!(limbs("42"), [42]);

        // One digit past the limb boundary.
        #[cfg(limb_width_64)]
        {
            assert_eq!(limbs("9999999999999999999"), [9_999_999_999_999_999_999]);
            assert_eq!(limbs("10000000000000000000"), [0, 1]);
            assert_eq!(
                limbs("123456789012345678901234567890"),
                [2_345_678_901_234_567_890, 12_345_678_901]
            );
        }
        #[cfg(limb_width_32)]
        {
            assert_eq!(limbs("999999999"), [999_999_999]);
            assert_eq!(limbs("1000000000"), [0, 1]);
            assert_eq!(limbs("123456789012345678"), [12_345_678, 123_456_789]);
        }
    }

    #[test]
    fn normalization_test() {
        assert_eq!(limbs("000"), [0]);
        assert_eq!(limbs("007"), [7]);

        let minus_zero = from_str("-0").unwrap();
        assert!(minus_zero.is_zero());
        assert!(!minus_zero.is_negative());

        assert!(from_str("-00042").unwrap().is_negative());
    }

    #[test]
    fn reject_test() {
        assert_eq!(from_str("").unwrap_err().position(), 1);
        assert_eq!(from_str("-").unwrap_err().position(), 2);
        assert_eq!(from_str("12a3").unwrap_err().position(), 3);
        assert_eq!(from_str("-12 3").unwrap_err().position(), 4);
        assert_eq!(from_str("+5").unwrap_err().position(), 1);
        assert_eq!(from_str("١٢٣").unwrap_err().position(), 1);
    }
}
