//! When parsing decimal text goes wrong.

use crate::lib::fmt::{self, Debug, Display};
use crate::lib::{result, Box, ToString};
#[cfg(feature = "std")]
use std::error;

/// This type represents all possible errors that can occur when parsing
/// decimal text into a big integer.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as
    /// possible, so that `Result<BigInt>` stays cheap to pass around.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `bignum::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based byte position at which the error was detected.
    ///
    /// For truncated input (an empty string, or a `-` with nothing after
    /// it) this is the position at which a digit was expected.
    pub fn position(&self) -> usize {
        self.err.position
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    pub(crate) fn syntax(code: ErrorCode, position: usize) -> Error {
        Error {
            err: Box::new(ErrorImpl { code, position }),
        }
    }
}

struct ErrorImpl {
    code: ErrorCode,
    position: usize,
}

/// This type describes all possible errors that can occur when parsing
/// decimal text into a big integer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Input ended before any digit was seen.
    EofWhileParsingDigits,

    /// A byte that is not an ASCII digit appeared in the digit string.
    InvalidDigit,
}

impl Display for ErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::EofWhileParsingDigits => {
                formatter.write_str("EOF while parsing decimal digits")
            }
            ErrorCode::InvalidDigit => formatter.write_str("invalid digit"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "{} at position {}",
            self.err.code, self.err.position
        )
    }
}

impl Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "Error({:?}, position: {})",
            self.err.code.to_string(),
            self.err.position
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}
