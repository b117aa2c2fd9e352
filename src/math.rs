//! Building-blocks for arbitrary-precision decimal arithmetic.
//!
//! These algorithms assume little-endian order for the limb buffers, so for
//! a `vec![0, 1, 2, 3]`, `3` is the most significant limb, and `0` is the
//! least significant limb. Every stored limb is below [`RADIX`].

use crate::lib::{cmp, iter, Vec};

// ALIASES
// -------

//  Type for a single limb of the big integer.
//
//  A limb is analogous to a digit in base10, except it stores 19 or 9
//  decimal digits instead of one, depending on the width of the native
//  multiplication available on the target.
//
//  Platforms where native 128-bit multiplication is explicitly supported:
//      - x86_64 (Supported via `MUL`).
//      - mips64 (Supported via `DMULTU`, which `HI` and `LO` can be read-from).
//
//  Platforms where native 64-bit multiplication is supported and
//  you can extract hi-lo for 64-bit multiplications.
//      aarch64 (Requires `UMULH` and `MUL` to capture high and low bits).
//      powerpc64 (Requires `MULHDU` and `MULLD` to capture high and low bits).

// 32-BIT LIMB
#[cfg(limb_width_32)]
pub(crate) type Limb = u32;

#[cfg(limb_width_32)]
type Wide = u64;

/// The base of the limb representation, `10^9`.
#[cfg(limb_width_32)]
pub(crate) const RADIX: Limb = 1_000_000_000;

/// Decimal digits stored per limb, `log10(RADIX)`.
#[cfg(limb_width_32)]
pub(crate) const BASE_LENGTH: usize = 9;

// 64-BIT LIMB
#[cfg(limb_width_64)]
pub(crate) type Limb = u64;

#[cfg(limb_width_64)]
type Wide = u128;

/// The base of the limb representation, `10^19`.
#[cfg(limb_width_64)]
pub(crate) const RADIX: Limb = 10_000_000_000_000_000_000;

/// Decimal digits stored per limb, `log10(RADIX)`.
#[cfg(limb_width_64)]
pub(crate) const BASE_LENGTH: usize = 19;

// SCALAR
// ------

// Limb-to-limb operations, the building-blocks for the multi-limb
// operations below.

pub(crate) mod scalar {
    use super::*;

    // ADDITION

    /// Add two limbs and return the reduced value and if a carry happens.
    ///
    /// The raw sum of two 19-digit limbs can exceed the machine word even
    /// though both inputs are below RADIX, so the reduction works on the
    /// wrapped value instead of the mathematical sum.
    #[inline]
    pub fn add(x: Limb, y: Limb) -> (Limb, bool) {
        let (z, overflowed) = x.overflowing_add(y);
        if overflowed || z >= RADIX {
            (z.wrapping_sub(RADIX), true)
        } else {
            (z, false)
        }
    }

    /// AddAssign two limbs and return if a carry happens.
    #[inline]
    pub fn iadd(x: &mut Limb, y: Limb) -> bool {
        let t = add(*x, y);
        *x = t.0;
        t.1
    }

    // SUBTRACTION

    /// Subtract two limbs and return the reduced value and if a borrow
    /// happens. A borrow adds RADIX back into the difference.
    #[inline]
    pub fn sub(x: Limb, y: Limb) -> (Limb, bool) {
        let (z, borrowed) = x.overflowing_sub(y);
        if borrowed {
            (z.wrapping_add(RADIX), true)
        } else {
            (z, false)
        }
    }

    /// SubAssign two limbs and return if a borrow happens.
    #[inline]
    pub fn isub(x: &mut Limb, y: Limb) -> bool {
        let t = sub(*x, y);
        *x = t.0;
        t.1
    }

    // MULTIPLICATION

    /// Multiply two limbs (with carry) and return the (low, high) radix
    /// digits of the product.
    ///
    /// Cannot overflow, as long as the wide type is 2x as wide:
    /// `RADIX * RADIX` plus a carry below `RADIX` always fits.
    #[inline]
    pub fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        let z = x as Wide * y as Wide + carry as Wide;
        ((z % RADIX as Wide) as Limb, (z / RADIX as Wide) as Limb)
    }
}

// SMALL
// -----

// Operations modifying a limb buffer in place.

pub(crate) mod small {
    use super::*;

    /// Normalize the buffer by popping any trailing (most-significant)
    /// zero limbs. May leave the buffer empty; restoring the canonical
    /// single-zero-limb form of zero is the caller's concern.
    #[inline]
    pub fn normalize(x: &mut Vec<Limb>) {
        while x.last() == Some(&0) {
            x.pop();
        }
    }

    /// Shift-left `n` limbs, multiplying the value by `RADIX^n`.
    #[inline]
    pub fn shl_limbs(x: &mut Vec<Limb>, n: usize) {
        debug_assert!(n != 0);
        if !x.is_empty() {
            x.splice(0..0, iter::repeat(0).take(n));
        }
    }
}

// LARGE
// -----

// Large-to-large operations over whole magnitudes.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare `x` to `y`, in little-endian order.
    ///
    /// Normalized buffers only: a shorter buffer is a smaller value, and
    /// equal lengths are decided by the first mismatch from the most
    /// significant limb down.
    #[inline]
    pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
        if x.len() > y.len() {
            cmp::Ordering::Greater
        } else if x.len() < y.len() {
            cmp::Ordering::Less
        } else {
            let iter = x.iter().rev().zip(y.iter().rev());
            for (&xi, &yi) in iter {
                if xi > yi {
                    return cmp::Ordering::Greater;
                } else if xi < yi {
                    return cmp::Ordering::Less;
                }
            }
            cmp::Ordering::Equal
        }
    }

    /// Check if x is greater than or equal to y.
    #[inline]
    pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
        compare(x, y) != cmp::Ordering::Less
    }

    // ADDITION

    /// Add two magnitudes, propagating the carry.
    pub fn add(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        let (longer, shorter) = if x.len() >= y.len() { (x, y) } else { (y, x) };

        // One extra limb guarantees room for the final carry.
        let mut z = Vec::with_capacity(longer.len() + 1);
        let mut carry = false;
        for (i, &xi) in longer.iter().enumerate() {
            let yi = shorter.get(i).copied().unwrap_or(0);

            // Only one of the two ops can carry: the limb sum is at most
            // 2 * (RADIX - 1), so after one reduction adding 1 reaches
            // RADIX - 1 at worst.
            let mut zi = xi;
            let mut tmp = scalar::iadd(&mut zi, yi);
            if carry {
                tmp |= scalar::iadd(&mut zi, 1);
            }
            carry = tmp;
            z.push(zi);
        }
        if carry {
            z.push(1);
        }

        small::normalize(&mut z);
        z
    }

    // SUBTRACTION

    /// Subtract two magnitudes, propagating the borrow.
    ///
    /// Precondition: `x >= y`, established by the caller via [`compare`].
    /// A borrow out of the most significant limb would wrap silently, so
    /// the precondition is asserted in debug builds.
    pub fn sub(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        debug_assert!(greater_equal(x, y));

        let mut z = Vec::with_capacity(x.len());
        let mut borrow = false;
        for (i, &xi) in x.iter().enumerate() {
            let yi = y.get(i).copied().unwrap_or(0);

            let mut zi = xi;
            let mut tmp = scalar::isub(&mut zi, yi);
            if borrow {
                tmp |= scalar::isub(&mut zi, 1);
            }
            borrow = tmp;
            z.push(zi);
        }
        debug_assert!(!borrow);

        small::normalize(&mut z);
        z
    }

    // MULTIPLICATION

    /// Multiply a magnitude by a single limb, schoolbook style.
    ///
    /// This is the base case of the recursive multiplication engine: each
    /// limb of `x` is multiplied through the double-width accumulator and
    /// the high radix digit carries into the next position.
    pub fn mul_limb(x: &[Limb], y: Limb) -> Vec<Limb> {
        let mut z = Vec::with_capacity(x.len() + 1);
        let mut carry: Limb = 0;
        for &xi in x {
            let (lo, hi) = scalar::mul(xi, y, carry);
            z.push(lo);
            carry = hi;
        }
        if carry != 0 {
            z.push(carry);
        }

        small::normalize(&mut z);
        z
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_add_test() {
        assert_eq!(scalar::add(1, 2), (3, false));
        assert_eq!(scalar::add(RADIX - 1, 1), (0, true));
        assert_eq!(scalar::add(RADIX - 1, RADIX - 1), (RADIX - 2, true));
        assert_eq!(scalar::add(0, 0), (0, false));
    }

    #[test]
    fn scalar_sub_test() {
        assert_eq!(scalar::sub(5, 3), (2, false));
        assert_eq!(scalar::sub(0, 1), (RADIX - 1, true));
        assert_eq!(scalar::sub(0, RADIX - 1), (1, true));
    }

    #[test]
    fn scalar_mul_test() {
        assert_eq!(scalar::mul(2, 3, 1), (7, 0));
        assert_eq!(scalar::mul(RADIX - 1, 1, 1), (0, 1));
        // (RADIX - 1)^2 + (RADIX - 1) == RADIX * (RADIX - 1)
        assert_eq!(scalar::mul(RADIX - 1, RADIX - 1, RADIX - 1), (0, RADIX - 1));
    }

    #[test]
    fn compare_test() {
        // Simple
        assert_eq!(large::compare(&[1], &[2]), cmp::Ordering::Less);
        assert_eq!(large::compare(&[1], &[1]), cmp::Ordering::Equal);
        assert_eq!(large::compare(&[2], &[1]), cmp::Ordering::Greater);

        // Check asymmetric
        assert_eq!(large::compare(&[5, 1], &[2]), cmp::Ordering::Greater);
        assert_eq!(large::compare(&[2], &[5, 1]), cmp::Ordering::Less);

        // Check when we use reverse ordering properly.
        assert_eq!(large::compare(&[5, 1, 9], &[6, 2, 8]), cmp::Ordering::Greater);
        assert_eq!(large::compare(&[0, 1, 9], &[RADIX - 1, 0, 9]), cmp::Ordering::Greater);
    }

    #[test]
    fn add_test() {
        assert_eq!(large::add(&[1], &[2]), [3]);

        // Carry into a fresh limb.
        assert_eq!(large::add(&[RADIX - 1], &[1]), [0, 1]);

        // Carry rippling across every limb.
        assert_eq!(large::add(&[RADIX - 1, RADIX - 1], &[1]), [0, 0, 1]);

        // Mixed lengths, both carry paths in one run.
        assert_eq!(large::add(&[RADIX - 1, 2], &[1, 1]), [0, 4]);
        assert!(large::add(&[0], &[0]).is_empty());
    }

    #[test]
    fn sub_test() {
        assert_eq!(large::sub(&[3], &[1]), [2]);

        // Borrow across a limb boundary.
        assert_eq!(large::sub(&[0, 1], &[1]), [RADIX - 1]);

        // Borrow rippling across every limb.
        assert_eq!(large::sub(&[0, 0, 1], &[1]), [RADIX - 1, RADIX - 1]);

        // Equal values normalize to the empty buffer.
        assert!(large::sub(&[5, 4], &[5, 4]).is_empty());
    }

    #[test]
    fn mul_limb_test() {
        assert_eq!(large::mul_limb(&[5], 7), [35]);

        // (RADIX - 1) * (RADIX - 1) == RADIX^2 - 2*RADIX + 1
        assert_eq!(large::mul_limb(&[RADIX - 1], RADIX - 1), [1, RADIX - 2]);

        // Carry chains through every position.
        assert_eq!(
            large::mul_limb(&[RADIX - 1, RADIX - 1], RADIX - 1),
            [1, RADIX - 1, RADIX - 2]
        );

        assert!(large::mul_limb(&[7, 3], 0).is_empty());
    }

    #[test]
    fn normalize_test() {
        let mut x = vec![1, 0, 2, 0, 0];
        small::normalize(&mut x);
        assert_eq!(x, [1, 0, 2]);

        let mut x = vec![0, 0];
        small::normalize(&mut x);
        assert!(x.is_empty());

        let mut x: Vec<Limb> = vec![];
        small::normalize(&mut x);
        assert!(x.is_empty());
    }

    #[test]
    fn shl_limbs_test() {
        let mut x = vec![5, 6];
        small::shl_limbs(&mut x, 2);
        assert_eq!(x, [0, 0, 5, 6]);

        let mut x: Vec<Limb> = vec![];
        small::shl_limbs(&mut x, 3);
        assert!(x.is_empty());
    }
}
