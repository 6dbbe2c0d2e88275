use std::fmt;
use std::io;
use std::result;

/// A convenient type alias for `Result<T, chicken::Error>`.
pub type Result<T> = result::Result<T, Error>;

/// Error describes all the possible errors that may occur while translating
/// between Chicken and MiniChicken.
///
/// Encoding in the default (lenient) mode never fails. Decoding fails on the
/// first token that isn't a non-negative integer or when the decoded text
/// would be too big, and strict encoding fails on the first word that isn't
/// `chicken`. In every case no partial output is produced.
///
/// `From<chicken::Error> for std::io::Error` is provided so that these errors
/// can be propagated with `?` from code that otherwise only deals in I/O
/// errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// This error occurs when a MiniChicken token can't be parsed as a
    /// non-negative integer.
    Parse {
        /// The position of the offending token, counting from zero.
        index: u64,
        /// The token that was read.
        token: String,
    },
    /// This error occurs when the decoded text would be too big, either
    /// because it exceeds the maximum decoded size or because the memory for
    /// it can't be allocated.
    TooBig {
        /// The size of the decoded text, in bytes. This is `u64::MAX` when
        /// the size itself overflows.
        given: u64,
        /// The maximum allowed size of decoded text.
        max: u64,
    },
    /// This error occurs during strict encoding when a line contains a word
    /// other than `chicken`.
    UnexpectedWord {
        /// The line containing the word, counting from one.
        line: u64,
        /// The word that was read.
        word: String,
    },
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Parse { index, ref token } => write!(
                f,
                "chicken: invalid MiniChicken (expected a non-negative \
                         integer at token {} but got {:?})",
                index, token
            ),
            Error::TooBig { given, max } => write!(
                f,
                "chicken: decoded text (size = {}) is larger than \
                         allowed (size = {})",
                given, max
            ),
            Error::UnexpectedWord { line, ref word } => write!(
                f,
                "chicken: invalid Chicken (expected 'chicken' on line {} \
                         but got {:?})",
                line, word
            ),
        }
    }
}
