//! Serialize and Deserialize impls for `BigInt`.
//!
//! The wire form is the canonical decimal string, the same text the
//! `Display` and `FromStr` impls use, so values round-trip through any
//! self-describing format without precision loss.

use crate::bigint::BigInt;
use crate::lib::fmt;
use serde_core::de::{self, Deserialize, Deserializer, Visitor};
use serde_core::ser::{Serialize, Serializer};

impl Serialize for BigInt {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl Visitor<'_> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal integer string")
            }

            fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                crate::parse::from_str(value).map_err(de::Error::custom)
            }

            fn visit_u64<E>(self, value: u64) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                Ok(BigInt::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                Ok(BigInt::from(value))
            }
        }

        deserializer.deserialize_str(BigIntVisitor)
    }
}
