use std::error::Error as StdError;
use std::fmt;
use std::io::Error as IoError;
use std::result::Result as StdResult;

use time::ParseError as TimeFormatError;

pub type Result<T> = StdResult<T, Error>;

/// Failures that abort a conversion run.
///
/// Problems the converter can recover from (duplicate `@relation`, unknown nominal values,
/// short data rows) are not errors; they are collected as
/// [`Diagnostic`](crate::diagnostic::Diagnostic)s instead.
#[derive(Debug)]
pub enum Error {
    IoError(IoError),

    /// A numeric column held something that does not parse as a number.
    InvalidNumber {
        line: usize,
        attribute: String,
        token: String,
    },

    /// Train and test shares together exceed the whole data set.
    InvalidSplit { train: u32, test: u32 },

    /// Without attributes there is no output layer to describe.
    NoAttributes,

    FormatError(TimeFormatError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::IoError(ref e) => write!(f, "i/o error: {}", e),
            Error::InvalidNumber {
                line,
                ref attribute,
                ref token,
            } => write!(
                f,
                "invalid number {:?} for numeric attribute '{}' at line {}",
                token, attribute, line
            ),
            Error::InvalidSplit { train, test } => write!(
                f,
                "train ({}%) and test ({}%) shares exceed 100%",
                train, test
            ),
            Error::NoAttributes => write!(f, "no @attribute declarations found"),
            Error::FormatError(ref e) => write!(f, "cannot format timestamp: {}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::IoError(ref e) => Some(e),
            Error::FormatError(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::IoError(e)
    }
}

impl From<TimeFormatError> for Error {
    fn from(e: TimeFormatError) -> Self {
        Error::FormatError(e)
    }
}
