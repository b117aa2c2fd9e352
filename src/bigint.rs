//! The signed big integer type and its operators.

use crate::bignum::Magnitude;
use crate::lib::cmp::Ordering;
use crate::lib::ops::{Add, Mul, Neg, Sub};
use crate::math::large;
use crate::mul;

/// A signed integer of arbitrary size.
///
/// `BigInt` is an immutable value type: arithmetic produces new values and
/// never mutates its operands. Construct one from any machine integer via
/// `From`, or from decimal text via [`crate::from_str`] or `str::parse`;
/// render it back with `Display` or [`crate::to_string`].
///
/// ```
/// use bignum::BigInt;
///
/// let a: BigInt = "99999999999999999999".parse().unwrap();
/// let b = BigInt::from(1);
/// assert_eq!((&a + &b).to_string(), "100000000000000000000");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    magnitude: Magnitude,
    is_negative: bool,
}

impl BigInt {
    /// The value 0.
    #[inline]
    pub fn zero() -> BigInt {
        Magnitude::zero().into_signed(false)
    }

    /// Returns true if the value is 0.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Returns true if the value is strictly below 0. Zero is never
    /// negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.is_negative
    }

    /// Attach a sign to a magnitude. Zero ignores the requested sign so
    /// that every value has exactly one representation.
    #[inline]
    pub(crate) fn from_magnitude(magnitude: Magnitude, is_negative: bool) -> BigInt {
        let is_negative = is_negative && !magnitude.is_zero();
        BigInt {
            magnitude,
            is_negative,
        }
    }

    /// Borrow the magnitude.
    #[inline]
    pub(crate) fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    /// Strip the sign. Total inverse of [`BigInt::from_magnitude`].
    #[inline]
    pub(crate) fn into_magnitude(self) -> Magnitude {
        self.magnitude
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        BigInt::zero()
    }
}

// SIGNED DISPATCH
// ---------------

/// Magnitude addition with the result sign supplied by the caller.
fn unsigned_add(a: &BigInt, b: &BigInt, is_negative: bool) -> BigInt {
    let data = large::add(&a.magnitude.data, &b.magnitude.data);
    Magnitude::from_data(data).into_signed(is_negative)
}

/// Magnitude subtraction with the result sign supplied by the caller.
///
/// The caller must have established `magnitude(a) >= magnitude(b)` through
/// a magnitude compare; `large::sub` asserts it in debug builds.
fn unsigned_sub(a: &BigInt, b: &BigInt, is_negative: bool) -> BigInt {
    let data = large::sub(&a.magnitude.data, &b.magnitude.data);
    Magnitude::from_data(data).into_signed(is_negative)
}

/// `a + b`. Equal signs add magnitudes and keep the shared sign; differing
/// signs subtract the smaller magnitude from the larger, whose sign wins.
fn add_values(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_negative == b.is_negative {
        unsigned_add(a, b, a.is_negative)
    } else {
        match a.magnitude.compare(&b.magnitude) {
            Ordering::Less => unsigned_sub(b, a, b.is_negative),
            Ordering::Greater => unsigned_sub(a, b, a.is_negative),
            Ordering::Equal => BigInt::zero(),
        }
    }
}

/// `a - b`, mirroring `add_values` with the sign of `b` flipped.
fn sub_values(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_negative != b.is_negative {
        unsigned_add(a, b, a.is_negative)
    } else {
        match a.magnitude.compare(&b.magnitude) {
            Ordering::Less => unsigned_sub(b, a, !b.is_negative),
            Ordering::Greater => unsigned_sub(a, b, a.is_negative),
            Ordering::Equal => BigInt::zero(),
        }
    }
}

/// `a * b`. The product is negative iff exactly one operand is negative;
/// a zero result drops the sign when the magnitude comes back.
fn mul_values(a: &BigInt, b: &BigInt) -> BigInt {
    let is_negative = a.is_negative != b.is_negative;
    mul::unsigned_mul(&a.magnitude, &b.magnitude).into_signed(is_negative)
}

// OPERATORS
// ---------

macro_rules! impl_binop {
    ($imp:ident, $method:ident, $func:ident) => {
        impl $imp for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(self, rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(self, &rhs)
            }
        }

        impl $imp for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(&self, &rhs)
            }
        }
    };
}

impl_binop!(Add, add, add_values);
impl_binop!(Sub, sub, sub_values);
impl_binop!(Mul, mul, mul_values);

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        let is_negative = !self.is_negative;
        BigInt::from_magnitude(self.magnitude, is_negative)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

// ORDERING
// --------

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.is_negative, other.is_negative) {
            (false, false) => self.magnitude.compare(&other.magnitude),
            // Both below zero: the larger magnitude is the smaller value.
            (true, true) => other.magnitude.compare(&self.magnitude),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// CONVERSIONS
// -----------

macro_rules! impl_from_unsigned {
    ($($ty:ty)*) => {$(
        impl From<$ty> for BigInt {
            #[inline]
            fn from(x: $ty) -> BigInt {
                Magnitude::from_u64(x as u64).into_signed(false)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($ty:ty)*) => {$(
        impl From<$ty> for BigInt {
            #[inline]
            fn from(x: $ty) -> BigInt {
                // unsigned_abs keeps MIN from overflowing on negation.
                Magnitude::from_u64(x.unsigned_abs() as u64).into_signed(x < 0)
            }
        }
    )*};
}

impl_from_unsigned! { u8 u16 u32 u64 usize }
impl_from_signed! { i8 i16 i32 i64 isize }

// TESTS
// -----
