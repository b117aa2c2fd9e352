//! The recursive multiplication engine.
//!
//! Products are magnitude-only; sign attachment happens in the operator
//! layer. The Karatsuba cross term is a product of two *signed*
//! differences, so the recursion deliberately routes through the `BigInt`
//! operators, which call back into [`unsigned_mul`] for their own
//! magnitudes.

use crate::bigint::BigInt;
use crate::bignum::Magnitude;
use crate::math::{large, small};

/// Multiply two magnitudes.
///
/// Single-limb operands terminate the recursion through schoolbook
/// multiplication; anything larger goes through one divide-and-conquer
/// step. Recursion depth is logarithmic in the operand length, since the
/// longer operand halves at every split.
pub(crate) fn unsigned_mul(a: &Magnitude, b: &Magnitude) -> Magnitude {
    let (shorter, longer) = if a.len() < b.len() { (a, b) } else { (b, a) };

    if shorter.is_zero() {
        Magnitude::zero()
    } else if shorter.len() == 1 {
        Magnitude::from_data(large::mul_limb(&longer.data, shorter.data[0]))
    } else {
        karatsuba_mul(shorter, longer)
    }
}

/// One divide-and-conquer step.
///
/// With `longer = l1·RADIX^n + l2` and `shorter = s1·RADIX^n + s2`:
///
/// ```text
/// longer · shorter = l1·s1·RADIX^2n
///                  + ((l1 − l2)·(s2 − s1) + l1·s1 + l2·s2)·RADIX^n
///                  + l2·s2
/// ```
///
/// Three recursive products instead of four. The cross term can be
/// negative, but the middle coefficient as a whole equals
/// `l1·s2 + l2·s1` and never is.
fn karatsuba_mul(shorter: &Magnitude, longer: &Magnitude) -> Magnitude {
    debug_assert!(shorter.len() >= 2);

    let n = longer.len() / 2;
    let (l2, l1) = split_at_limb(longer, n);
    let (s2, s1) = split_at_limb(shorter, n);

    let p_high = unsigned_mul(&l1, &s1).into_signed(false);
    let p_low = unsigned_mul(&l2, &s2).into_signed(false);
    let p_cross = (l1.into_signed(false) - l2.into_signed(false))
        * (s2.into_signed(false) - s1.into_signed(false));

    let middle = &(&p_cross + &p_high) + &p_low;
    debug_assert!(!middle.is_negative());

    // Terms that are exactly zero are skipped without shifting or
    // allocating; RADIX^k times zero contributes nothing.
    let mut result = p_low;
    if !middle.is_zero() {
        result = &result + &shl_limbs(middle, n);
    }
    if !p_high.is_zero() {
        result = &result + &shl_limbs(p_high, 2 * n);
    }

    debug_assert!(!result.is_negative());
    result.into_magnitude()
}

/// Split into `(low, high)` around limb index `n`; `high` is zero when the
/// value has no limbs above it.
///
/// `high` inherits the normalized top limb; `low` is an arbitrary slice of
/// the middle of the value and has to be re-normalized.
fn split_at_limb(v: &Magnitude, n: usize) -> (Magnitude, Magnitude) {
    if v.len() <= n {
        (v.clone(), Magnitude::zero())
    } else {
        let low = Magnitude::from_data(v.data[..n].to_vec());
        let high = Magnitude {
            data: v.data[n..].to_vec(),
        };
        (low, high)
    }
}

/// Multiply by `RADIX^n` by prepending `n` zero limbs.
fn shl_limbs(v: BigInt, n: usize) -> BigInt {
    let is_negative = v.is_negative();
    let mut magnitude = v.into_magnitude();
    small::shl_limbs(&mut magnitude.data, n);
    magnitude.into_signed(is_negative)
}

// TESTS
// -----
