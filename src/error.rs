//! Error types for cfg parsing.
//!
//! Every error is fatal for the parse call that produced it: the parser stops
//! at the first problem and no partial document is handed back.
//!
//! ## Error Categories
//!
//! - **Unterminated quotes**: a line ended inside a `'...` or `"...` field
//! - **Orphan tuples**: an indented line appeared before any record was opened
//! - **I/O errors**: the reader failed, or the input was not valid UTF-8
//!
//! Syntax errors carry the 1-based line number, and quote errors also carry
//! the 1-based rune offset of the opening quote within that line.
//!
//! ## Examples
//!
//! ```rust
//! use cfg2::{from_str, Error, QuoteStyle};
//!
//! let err = from_str("name 'unclosed\n").unwrap_err();
//! assert_eq!(
//!     err,
//!     Error::UnterminatedQuote { kind: QuoteStyle::Single, line: 1, col: 6 }
//! );
//! assert_eq!(err.line(), Some(1));
//! ```

use crate::options::QuoteStyle;
use thiserror::Error;

/// Represents all possible errors that can occur while reading cfg text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A quoted field was still open at the end of its line
    #[error("unterminated {kind} quote ({}) near line:rune of {line}:{col}", .kind.as_char())]
    UnterminatedQuote {
        kind: QuoteStyle,
        line: usize,
        col: usize,
    },

    /// An indented line was found before any record was started
    #[error("no parent record for indented tuple at line {line}, the first tuple must be unindented and thus start a record")]
    OrphanIndentedTuple { line: usize },
}

impl Error {
    /// Creates an unterminated quote error for the quote opened at `line:col`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cfg2::{Error, QuoteStyle};
    ///
    /// let err = Error::unterminated_quote(QuoteStyle::Double, 3, 7);
    /// assert!(err.to_string().contains("3:7"));
    /// ```
    pub fn unterminated_quote(kind: QuoteStyle, line: usize, col: usize) -> Self {
        Error::UnterminatedQuote { kind, line, col }
    }

    /// Creates an orphan tuple error for an indented `line` with no record above it.
    pub fn orphan_indented_tuple(line: usize) -> Self {
        Error::OrphanIndentedTuple { line }
    }

    /// Creates an I/O error for reader failures and undecodable input.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the 1-based source line the error refers to, if it has one.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UnterminatedQuote { line, .. } | Error::OrphanIndentedTuple { line } => {
                Some(*line)
            }
            Error::Io(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
