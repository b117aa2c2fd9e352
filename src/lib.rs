//! # Signed arbitrary-precision integers
//!
//! This crate provides [`BigInt`], a signed integer of unbounded size, with
//! construction from decimal strings and machine integers, rendering back to
//! canonical decimal text, and the arithmetic operators `+`, `-` and `*`.
//!
//! ```
//! let a: bignum::BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b = bignum::from_str("-987654321098765432109876543210").unwrap();
//!
//! let product = &a * &b;
//! assert!(product < bignum::BigInt::from(0));
//! assert_eq!(bignum::to_string(&(&a + &a)), "246913578024691357802469135780");
//! ```
//!
//! # Representation
//!
//! Values are stored as a sign flag plus a little-endian sequence of "limbs",
//! each limb holding a fixed number of decimal digits (19 on targets with
//! native 128-bit arithmetic, 9 elsewhere). The decimal radix makes parsing
//! and printing a matter of chunking digit strings, at the cost of wasting a
//! few bits per machine word.
//!
//! Multiplication is the interesting part: products where either operand
//! fits in a single limb use schoolbook multiplication with a double-width
//! accumulator, and everything larger goes through a recursive Karatsuba
//! split, expressing one product as three half-sized ones. The cross term of
//! the split is a product of two *signed* differences, so the recursion
//! deliberately routes back through the signed operators rather than the
//! unsigned kernels.
//!
//! # Parsing policy
//!
//! [`from_str`] is strict: an optional leading `-` followed by one or more
//! ASCII digits, nothing else. Malformed input is reported through
//! [`Error`] with the byte position of the offending character. Redundant
//! leading zeros and `-0` are accepted and normalized away.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::comparison_chain)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Facade around the core features for name mangling.
pub(crate) mod lib {
    #[cfg(feature = "std")]
    pub(crate) use std::*;

    #[cfg(not(feature = "std"))]
    pub(crate) use core::*;

    #[cfg(feature = "std")]
    pub(crate) use std::boxed::Box;
    #[cfg(feature = "std")]
    pub(crate) use std::string::{String, ToString};
    #[cfg(feature = "std")]
    pub(crate) use std::vec::Vec;

    #[cfg(not(feature = "std"))]
    pub(crate) use ::alloc::boxed::Box;
    #[cfg(not(feature = "std"))]
    pub(crate) use ::alloc::string::{String, ToString};
    #[cfg(not(feature = "std"))]
    pub(crate) use ::alloc::vec::Vec;
}

// MODULES
mod bigint;
mod bignum;
mod digit;
mod error;
mod math;
mod mul;
mod parse;
mod ser;

#[cfg(feature = "serde")]
mod serde;

// API
pub use crate::bigint::BigInt;
pub use crate::error::{Error, ErrorCode, Result};
pub use crate::parse::from_str;
pub use crate::ser::to_string;
