//! cfg emission.
//!
//! This module provides the [`Serializer`] that renders a [`Cfg`] back into
//! text the parser accepts.
//!
//! ## Output Shape
//!
//! The emitter always writes the canonical form, however lenient the input was:
//!
//! - **Attributes** are `name=value`; the `=` is written even when there is no value
//! - **Tuples** are attributes each followed by a single space
//! - **Records** start with an unindented tuple; the rest are indented by one tab
//! - **Quoting** wraps a field only when it has to (whitespace, `=`, or quote characters)
//!
//! ## Usage
//!
//! ```rust
//! use cfg2::{from_str, to_string};
//!
//! let cfg = from_str("'my network'\n    ip=1.2.3.4\n").unwrap();
//! assert_eq!(to_string(&cfg), "\"my network\"= \n\tip=1.2.3.4 \n");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use cfg2::{Attribute, EmitOptions, QuoteStyle, Serializer};
//!
//! let mut serializer = Serializer::new(EmitOptions::new().with_quote(QuoteStyle::Single));
//! serializer.serialize_attribute(&Attribute::new("comment", Some("alice's key")));
//! assert_eq!(serializer.into_inner(), "comment='alice''s key'");
//! ```

use crate::{Attribute, Cfg, EmitOptions, QuoteStyle, Record, Tuple};

/// The cfg serializer.
///
/// Accumulates output in an internal buffer; retrieve it with
/// [`Serializer::into_inner`].
pub struct Serializer {
    output: String,
    options: EmitOptions,
}

impl Serializer {
    /// Creates a serializer with an empty output buffer.
    pub fn new(options: EmitOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    /// Consumes the serializer and returns the text written so far.
    pub fn into_inner(self) -> String {
        self.output
    }

    #[inline]
    fn needs_quotes(s: &str) -> bool {
        s.chars()
            .any(|c| c.is_whitespace() || c == '=' || QuoteStyle::from_char(c).is_some())
    }

    /// Writes a name or value, quoting and escaping it when required.
    ///
    /// Inside quotes the parser collapses a doubled quote of either kind into
    /// one literal, so both kinds are doubled. A field that begins with the
    /// configured quote falls back to the other one, because the opening quote
    /// plus the first escaped character would read as a doubled literal.
    fn write_field(&mut self, s: &str) {
        if !Self::needs_quotes(s) {
            self.output.push_str(s);
            return;
        }

        let mut quote = self.options.quote;
        if s.starts_with(quote.as_char()) {
            quote = quote.other();
        }

        self.output.push(quote.as_char());
        for ch in s.chars() {
            if QuoteStyle::from_char(ch).is_some() {
                self.output.push(ch);
            }
            self.output.push(ch);
        }
        self.output.push(quote.as_char());
    }

    /// Writes one `name=value` pair.
    pub fn serialize_attribute(&mut self, attribute: &Attribute) {
        self.write_field(&attribute.name);
        self.output.push('=');
        self.write_field(attribute.value_or_empty());
    }

    /// Writes a tuple's attributes, each followed by a space.
    pub fn serialize_tuple(&mut self, tuple: &Tuple) {
        for attribute in tuple {
            self.serialize_attribute(attribute);
            self.output.push(' ');
        }
    }

    /// Writes a record: the first tuple unindented, the rest tab-indented.
    pub fn serialize_record(&mut self, record: &Record) {
        let mut tuples = record.iter();
        if let Some(first) = tuples.next() {
            self.serialize_tuple(first);
            self.output.push('\n');
        }
        for tuple in tuples {
            self.output.push('\t');
            self.serialize_tuple(tuple);
            self.output.push('\n');
        }
    }

    /// Writes every record of the document in order.
    pub fn serialize_cfg(&mut self, cfg: &Cfg) {
        for record in cfg {
            self.serialize_record(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{record, tuple};

    fn emit_attribute(attribute: &Attribute, quote: QuoteStyle) -> String {
        let mut serializer = Serializer::new(EmitOptions::new().with_quote(quote));
        serializer.serialize_attribute(attribute);
        serializer.into_inner()
    }

    #[test]
    fn test_plain_fields_are_bare() {
        let a = Attribute::new("ip", Some("1.2.3.4"));
        assert_eq!(emit_attribute(&a, QuoteStyle::Double), "ip=1.2.3.4");
        assert_eq!(emit_attribute(&a, QuoteStyle::Single), "ip=1.2.3.4");
    }

    #[test]
    fn test_missing_and_empty_values_emit_the_same() {
        let bare = Attribute::named("force");
        let empty = Attribute::new("force", Some(""));
        assert_eq!(emit_attribute(&bare, QuoteStyle::Double), "force=");
        assert_eq!(emit_attribute(&empty, QuoteStyle::Double), "force=");
    }

    #[test]
    fn test_whitespace_forces_quotes() {
        let a = Attribute::new("test id", Some("a\tb"));
        assert_eq!(emit_attribute(&a, QuoteStyle::Double), "\"test id\"=\"a\tb\"");
        assert_eq!(emit_attribute(&a, QuoteStyle::Single), "'test id'='a\tb'");
    }

    #[test]
    fn test_quotes_are_doubled() {
        let a = Attribute::new("code", Some("use bob's \"code\""));
        assert_eq!(
            emit_attribute(&a, QuoteStyle::Double),
            "code=\"use bob''s \"\"code\"\"\""
        );
        assert_eq!(
            emit_attribute(&a, QuoteStyle::Single),
            "code='use bob''s \"\"code\"\"'"
        );
    }

    #[test]
    fn test_equals_sign_forces_quotes() {
        let a = Attribute::new("expr", Some("x=y"));
        assert_eq!(emit_attribute(&a, QuoteStyle::Single), "expr='x=y'");
    }

    #[test]
    fn test_leading_quote_switches_quote_character() {
        let a = Attribute::named("'tis");
        assert_eq!(emit_attribute(&a, QuoteStyle::Single), "\"''tis\"=");
        assert_eq!(emit_attribute(&a, QuoteStyle::Double), "\"''tis\"=");
    }

    #[test]
    fn test_record_layout() {
        let rec = record![
            ["creds"],
            ["user" = "alice"],
            ["method" = "key", "file" = "./my_key.pem"],
        ];
        let mut serializer = Serializer::new(EmitOptions::default());
        serializer.serialize_record(&rec);
        assert_eq!(
            serializer.into_inner(),
            "creds= \n\tuser=alice \n\tmethod=key file=./my_key.pem \n"
        );
    }

    #[test]
    fn test_records_are_not_separated_by_blank_lines() {
        let cfg: Cfg = vec![record![["a" = "b"]], record![["c"]]].into_iter().collect();
        let mut serializer = Serializer::new(EmitOptions::default());
        serializer.serialize_cfg(&cfg);
        assert_eq!(serializer.into_inner(), "a=b \nc= \n");
    }

    #[test]
    fn test_tuple_trailing_space() {
        let t = tuple!["first", "second", "third"];
        let mut serializer = Serializer::new(EmitOptions::default());
        serializer.serialize_tuple(&t);
        assert_eq!(serializer.into_inner(), "first= second= third= ");
    }
}
