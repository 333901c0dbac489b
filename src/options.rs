//! Configuration options for parsing and emitting cfg text.
//!
//! Nothing here is process-wide: every call to [`crate::from_str_with_options`]
//! or [`crate::to_string_with_options`] receives its own option value, so two
//! callers in the same process never observe each other's settings.
//!
//! - [`QuoteStyle`]: which quote character the emitter wraps fields in
//! - [`ParseOptions`]: parser switches (diagnostic tracing)
//! - [`EmitOptions`]: emitter switches (quote style)
//!
//! ## Examples
//!
//! ```rust
//! use cfg2::{from_str, to_string_with_options, EmitOptions, QuoteStyle};
//!
//! let cfg = from_str("greeting msg='hello world'\n").unwrap();
//!
//! let options = EmitOptions::new().with_quote(QuoteStyle::Single);
//! let text = to_string_with_options(&cfg, options);
//! assert_eq!(text, "greeting= msg='hello world' \n");
//! ```

use std::fmt;

/// Quote character used around names and values that need quoting.
///
/// Both kinds are accepted by the parser; the choice only matters when emitting.
///
/// # Examples
///
/// ```rust
/// use cfg2::QuoteStyle;
///
/// assert_eq!(QuoteStyle::Single.as_char(), '\'');
/// assert_eq!(QuoteStyle::Double.as_char(), '"');
/// assert_eq!(QuoteStyle::Single.other(), QuoteStyle::Double);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum QuoteStyle {
    Single,
    #[default]
    Double,
}

impl QuoteStyle {
    /// Returns the quote character itself.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }

    /// Returns the opposite quote style.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            QuoteStyle::Single => QuoteStyle::Double,
            QuoteStyle::Double => QuoteStyle::Single,
        }
    }

    /// Maps a character to the quote style it opens, if any.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(QuoteStyle::Single),
            '"' => Some(QuoteStyle::Double),
            _ => None,
        }
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteStyle::Single => f.write_str("single"),
            QuoteStyle::Double => f.write_str("double"),
        }
    }
}

/// Options controlling the parser.
///
/// # Examples
///
/// ```rust
/// use cfg2::{from_str_with_options, ParseOptions};
///
/// // Emits one `tracing` event per scanned character.
/// let options = ParseOptions::new().with_verbose(true);
/// let cfg = from_str_with_options("a=b\n", options).unwrap();
/// assert_eq!(cfg.keys(), vec!["a"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Trace every line classification and every rune/state transition.
    pub verbose: bool,
}

impl ParseOptions {
    /// Creates default options (tracing off).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns per-rune diagnostic tracing on or off.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Options controlling the emitter.
///
/// # Examples
///
/// ```rust
/// use cfg2::{EmitOptions, QuoteStyle};
///
/// let options = EmitOptions::new();
/// assert_eq!(options.quote, QuoteStyle::Double);
///
/// let options = EmitOptions::new().with_quote(QuoteStyle::Single);
/// assert_eq!(options.quote, QuoteStyle::Single);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmitOptions {
    pub quote: QuoteStyle,
}

impl EmitOptions {
    /// Creates default options (double quotes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quote character used for fields that need quoting.
    #[must_use]
    pub fn with_quote(mut self, quote: QuoteStyle) -> Self {
        self.quote = quote;
        self
    }
}
