//! # cfg2
//!
//! A parser and emitter for the `cfg(2)` configuration format.
//!
//! ## What is cfg?
//!
//! cfg is the small line-oriented format used by Inferno's `cfg(2)` module and
//! by `ndb`-style databases. A file is a list of **records**; each record is
//! an unindented line plus the indented lines under it; each line is a
//! **tuple** of `name` or `name=value` **attributes**.
//!
//! ```text
//! 'my network'
//!     ip=1.2.3.4
//!
//! creds
//!     user=alice
//!     method=key  file="./my_key.pem"
//! ```
//!
//! ## Key Features
//!
//! - **Faithful tokenizer**: single and double quotes, doubled-quote escapes,
//!   valueless names, `#` comments
//! - **Round trips**: emitted text parses back into an equivalent document
//! - **Ordered lookups**: primary-key lookups and [`IndexMap`](indexmap::IndexMap)
//!   projections that keep source order
//! - **No global state**: tracing and quote style are passed in as options
//!
//! ## Quick Start
//!
//! ```rust
//! use cfg2::{from_str, to_string};
//!
//! let text = "'my network'\n\tip=1.2.3.4\n\ncreds\n\tuser=alice\n";
//! let cfg = from_str(text).unwrap();
//!
//! assert_eq!(cfg.keys(), vec!["my network", "creds"]);
//! assert_eq!(cfg.flat_map()["user"], "alice");
//!
//! let emitted = to_string(&cfg);
//! assert_eq!(emitted, "\"my network\"= \n\tip=1.2.3.4 \ncreds= \n\tuser=alice \n");
//! assert!(from_str(&emitted).unwrap().is_equivalent(&cfg));
//! ```
//!
//! ## Building Documents
//!
//! ```rust
//! use cfg2::{record, to_string, Cfg};
//!
//! let cfg: Cfg = vec![
//!     record![["sys" = "anna"], ["ip" = "10.0.0.2", "dom" = "anna.home"]],
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(to_string(&cfg), "sys=anna \n\tip=10.0.0.2 dom=anna.home \n");
//! ```
//!
//! ## Diagnostics
//!
//! The parser logs through [`tracing`]. With [`ParseOptions::verbose`] set it
//! traces every line classification and every rune with the tokenizer state;
//! it never installs a subscriber itself.
//!
//! ## Format Reference
//!
//! See the [`syntax`] module for the full description of the format.

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod model;
pub mod options;
pub mod ser;
pub mod syntax;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use map::{AttributeMap, FlatMap, RecordMap, TupleMap};
pub use model::{Attribute, Cfg, Record, Tuple};
pub use options::{EmitOptions, ParseOptions, QuoteStyle};
pub use ser::Serializer;

use std::io;

/// Serialize a document to cfg text with the default options (double quotes).
///
/// # Examples
///
/// ```rust
/// use cfg2::{record, to_string, Cfg};
///
/// let cfg: Cfg = std::iter::once(record![["test id" = "7"]]).collect();
/// assert_eq!(to_string(&cfg), "\"test id\"=7 \n");
/// ```
#[must_use]
pub fn to_string(cfg: &Cfg) -> String {
    to_string_with_options(cfg, EmitOptions::default())
}

/// Serialize a document to cfg text with custom options.
///
/// # Examples
///
/// ```rust
/// use cfg2::{from_str, to_string_with_options, EmitOptions, QuoteStyle};
///
/// let cfg = from_str("\"use bob's code\"\n").unwrap();
/// let options = EmitOptions::new().with_quote(QuoteStyle::Single);
/// assert_eq!(to_string_with_options(&cfg, options), "'use bob''s code'= \n");
/// ```
#[must_use]
pub fn to_string_with_options(cfg: &Cfg, options: EmitOptions) -> String {
    let mut serializer = Serializer::new(options);
    serializer.serialize_cfg(cfg);
    serializer.into_inner()
}

/// Serialize a document to a writer in cfg format.
///
/// # Examples
///
/// ```rust
/// use cfg2::{from_str, to_writer};
///
/// let cfg = from_str("a=b\n").unwrap();
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &cfg).unwrap();
/// assert_eq!(buffer, b"a=b \n");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, cfg: &Cfg) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, cfg, EmitOptions::default())
}

/// Serialize a document to a writer in cfg format with custom options.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, cfg: &Cfg, options: EmitOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(cfg, options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Parse a complete cfg document from a string.
///
/// # Examples
///
/// ```rust
/// use cfg2::from_str;
///
/// let cfg = from_str("force\n# comment\nsys=anna\n").unwrap();
/// assert_eq!(cfg.keys(), vec!["force", "sys"]);
/// ```
///
/// # Errors
///
/// Returns an error for an unterminated quote or an indented line with no
/// record above it. Errors carry the line number.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Cfg> {
    from_str_with_options(s, ParseOptions::default())
}

/// Parse a complete cfg document from a string with custom options.
///
/// # Errors
///
/// Same as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: ParseOptions) -> Result<Cfg> {
    Deserializer::new(options).parse_str(s)
}

/// Parse a complete cfg document from a buffered reader, line by line.
///
/// # Examples
///
/// ```rust
/// use cfg2::from_reader;
/// use std::io::Cursor;
///
/// let cfg = from_reader(Cursor::new("creds\n\tuser=alice\n")).unwrap();
/// assert_eq!(cfg.records()[0].len(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails (including invalid UTF-8) or the input
/// is not a valid document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(reader: R) -> Result<Cfg>
where
    R: io::BufRead,
{
    from_reader_with_options(reader, ParseOptions::default())
}

/// Parse a complete cfg document from a buffered reader with custom options.
///
/// # Errors
///
/// Same as [`from_reader`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R>(reader: R, options: ParseOptions) -> Result<Cfg>
where
    R: io::BufRead,
{
    Deserializer::new(options).parse_reader(reader)
}

/// Parse a complete cfg document from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not a valid document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Cfg> {
    let s = std::str::from_utf8(v).map_err(|e| Error::io(&e.to_string()))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Read};

    const NETWORK: &str = "'my network'\n\tip=1.2.3.4\n\ncreds\n\tuser=alice\n\tmethod=key\tfile=\"./my_key.pem\"\n";

    #[test]
    fn test_parse_emit_parse() {
        let cfg = from_str(NETWORK).unwrap();
        for quote in [QuoteStyle::Single, QuoteStyle::Double] {
            let text = to_string_with_options(&cfg, EmitOptions::new().with_quote(quote));
            let again = from_str(&text).unwrap();
            assert!(cfg.is_equivalent(&again), "{quote}: {text}");
            assert_eq!(
                to_string_with_options(&again, EmitOptions::new().with_quote(quote)),
                text
            );
        }
    }

    #[test]
    fn test_reader_and_str_agree() {
        let from_text = from_str(NETWORK).unwrap();
        let from_read = from_reader(NETWORK.as_bytes()).unwrap();
        assert_eq!(from_text, from_read);
        assert_eq!(from_slice(NETWORK.as_bytes()).unwrap(), from_text);
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let bytes = b"a=\xff\n";
        assert!(matches!(from_slice(bytes), Err(Error::Io(_))));
        assert!(matches!(from_reader(&bytes[..]), Err(Error::Io(_))));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_read_failure_is_fatal() {
        let err = from_reader(BufReader::new(FailingReader)).unwrap_err();
        assert_eq!(err, Error::Io("disk on fire".to_string()));
    }

    #[test]
    fn test_writer_output_matches_string() {
        let cfg = from_str(NETWORK).unwrap();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &cfg).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), to_string(&cfg));
    }

    #[test]
    fn test_verbose_does_not_change_results() {
        let quiet = from_str(NETWORK).unwrap();
        let loud = from_str_with_options(NETWORK, ParseOptions::new().with_verbose(true)).unwrap();
        assert_eq!(quiet, loud);
    }
}
