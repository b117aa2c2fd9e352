//! Algebraic properties over pseudo-random operands.
//!
//! Operand lengths are spread from single-limb values to several hundred
//! digits so that both multiplication strategies, and the signed dispatch
//! around them, get exercised by every property.

use bignum::{from_str, BigInt};

/// Deterministic splitmix-style generator; tests must not depend on an RNG
/// crate or on run-to-run variation.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// A signed decimal string with `digits` significant digits.
    fn decimal(&mut self, digits: usize) -> String {
        let mut s = String::with_capacity(digits + 1);
        if self.next() % 2 == 1 {
            s.push('-');
        }
        s.push((b'1' + (self.next() % 9) as u8) as char);
        for _ in 1..digits {
            s.push((b'0' + (self.next() % 10) as u8) as char);
        }
        s
    }

    fn value(&mut self, digits: usize) -> BigInt {
        from_str(&self.decimal(digits)).unwrap()
    }
}

const SIZES: &[usize] = &[1, 2, 8, 19, 20, 38, 76, 150, 301];

#[test]
fn add_commutes() {
    let mut rng = Rng(1);
    for &n in SIZES {
        let a = rng.value(n);
        let b = rng.value(n / 2 + 1);
        assert_eq!(&a + &b, &b + &a);
    }
}

#[test]
fn mul_commutes() {
    let mut rng = Rng(2);
    for &n in SIZES {
        let a = rng.value(n);
        let b = rng.value(n / 2 + 1);
        assert_eq!(&a * &b, &b * &a);
    }
}

#[test]
fn add_associates() {
    let mut rng = Rng(3);
    for &n in SIZES {
        let a = rng.value(n);
        let b = rng.value(n);
        let c = rng.value(n / 3 + 1);
        assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }
}

#[test]
fn identities() {
    let mut rng = Rng(4);
    let zero = BigInt::zero();
    let one = BigInt::from(1);
    for &n in SIZES {
        let a = rng.value(n);
        assert_eq!(&a + &zero, a);
        assert_eq!(&a * &one, a);
        assert_eq!(&a * &zero, zero);
    }
}

#[test]
fn sub_inverts_add() {
    let mut rng = Rng(5);
    for &n in SIZES {
        let a = rng.value(n);
        let b = rng.value(n);
        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!(&a - &a, BigInt::zero());
    }
}

#[test]
fn mul_distributes_over_add() {
    // Multiplication checked against nothing but addition and
    // subtraction: (a + b) * c must equal a*c + b*c, which catches
    // recombination mistakes in the split step without needing a second
    // multiplier implementation.
    let mut rng = Rng(6);
    for &n in SIZES {
        let a = rng.value(n);
        let b = rng.value(n.max(3) - 2);
        let c = rng.value(n / 2 + 1);
        assert_eq!(&(&a + &b) * &c, &(&a * &c) + &(&b * &c));
    }
}

#[test]
fn squares_are_non_negative() {
    let mut rng = Rng(7);
    for &n in SIZES {
        let a = rng.value(n);
        assert!(!(&a * &a).is_negative());
    }
}

#[test]
fn sign_of_products() {
    let mut rng = Rng(8);
    for &n in SIZES {
        let a = rng.value(n);
        let b = rng.value(n);
        let product = &a * &b;
        assert_eq!(
            product.is_negative(),
            a.is_negative() != b.is_negative()
        );
    }
}

#[test]
fn parse_format_roundtrip() {
    let mut rng = Rng(9);
    for &n in SIZES {
        let s = rng.decimal(n);
        let value = from_str(&s).unwrap();
        assert_eq!(bignum::to_string(&value), s);
        assert_eq!(from_str(&bignum::to_string(&value)).unwrap(), value);
    }
}
