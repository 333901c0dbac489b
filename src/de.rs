//! cfg parsing.
//!
//! This module provides the [`Deserializer`] that turns cfg text into a
//! [`Cfg`] document.
//!
//! ## Overview
//!
//! Parsing is a single pass over the input, one line at a time:
//!
//! - **Comment stripping**: everything from the first `#` on a line is dropped,
//!   before quotes are looked at, so a `#` inside quotes still starts a comment
//! - **Line classification**: blank lines are skipped, unindented lines open a
//!   new record, indented lines extend the latest record
//! - **Tokenizing**: a small state machine splits the line into attributes,
//!   handling `=`, both quote characters and doubled-quote escapes
//!
//! The first error stops the parse; no partial document is returned.
//!
//! ## Usage
//!
//! Most users should call the functions in the crate root:
//!
//! ```rust
//! use cfg2::from_str;
//!
//! let cfg = from_str("sys=anna\n\tip=10.0.0.2 ether=0080c7c72c1c\n").unwrap();
//! assert_eq!(cfg.keys(), vec!["sys"]);
//! assert_eq!(cfg.records()[0].tuples()[1].len(), 2);
//! ```

use crate::options::{ParseOptions, QuoteStyle};
use crate::{Attribute, Cfg, Error, Record, Result, Tuple};
use std::fmt;
use std::io;
use std::mem;
use tracing::{debug, trace};

/// What a line contributes once its comment is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// Nothing but whitespace.
    Blank,
    /// Starts at column one: the first tuple of a new record.
    Record,
    /// Leading whitespace: another tuple of the current record.
    Continuation,
}

impl LineKind {
    fn classify(line: &str) -> Self {
        match line.chars().next() {
            None => LineKind::Blank,
            Some(c) if !c.is_whitespace() => LineKind::Record,
            Some(_) if line.trim_start().is_empty() => LineKind::Blank,
            Some(_) => LineKind::Continuation,
        }
    }
}

/// Removes everything from the first `#` onward.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Tokenizer state while scanning a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Accumulating a name.
    Name,
    /// Accumulating an unquoted value.
    Value,
    /// Just saw `=`, nothing after it yet.
    Equals,
    /// Inside a quoted field.
    QuoteOpen(QuoteStyle),
    /// Right after a quoted field was closed.
    QuoteClosed(QuoteStyle),
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Name => f.write_str("Name"),
            State::Value => f.write_str("Value"),
            State::Equals => f.write_str("Equals"),
            State::QuoteOpen(q) => write!(f, "{}Begin", q.as_char()),
            State::QuoteClosed(q) => write!(f, "{}End", q.as_char()),
        }
    }
}

/// Splits one comment-free line into attributes.
struct LineScanner<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    /// 1-based rune offset of the character being handled.
    col: usize,
    /// Where the currently open quote started.
    quote_col: usize,
    state: State,
    word: String,
    /// Name frozen by `=` or a closing quote, waiting for its value.
    name: Option<String>,
    attributes: Vec<Attribute>,
    verbose: bool,
}

impl<'a> LineScanner<'a> {
    fn new(text: &'a str, line: usize, verbose: bool) -> Self {
        LineScanner {
            chars: text.chars().peekable(),
            line,
            col: 0,
            quote_col: 0,
            state: State::Name,
            word: String::new(),
            name: None,
            attributes: Vec::new(),
            verbose,
        }
    }

    /// Runs the state machine to the end of the line.
    fn scan(mut self) -> Result<Vec<Attribute>> {
        while let Some(c) = self.chars.next() {
            self.col += 1;
            if self.verbose {
                trace!(line = self.line, col = self.col, rune = ?c, state = %self.state, "scan");
            }

            if let Some(quote) = QuoteStyle::from_char(c) {
                self.quote(quote);
            } else if c.is_whitespace() {
                self.whitespace(c);
            } else if c == '=' {
                self.equals();
            } else {
                if self.state == State::Equals {
                    self.state = State::Value;
                }
                self.word.push(c);
            }
        }

        self.finish()
    }

    fn commit(&mut self, name: String, value: Option<String>) {
        if name.is_empty() && value.as_deref().map_or(true, str::is_empty) {
            return;
        }
        self.attributes.push(Attribute { name, value });
    }

    fn whitespace(&mut self, c: char) {
        let value = match self.state {
            State::QuoteOpen(_) => {
                self.word.push(c);
                return;
            }
            State::Name => {
                let name = mem::take(&mut self.word);
                self.commit(name, None);
                return;
            }
            State::Equals => {
                self.word.clear();
                Some(String::new())
            }
            State::Value => Some(mem::take(&mut self.word)),
            State::QuoteClosed(_) => {
                let word = mem::take(&mut self.word);
                (!word.is_empty()).then_some(word)
            }
        };

        let name = self.name.take().unwrap_or_default();
        self.commit(name, value);
        self.state = State::Name;
    }

    fn equals(&mut self) {
        match self.state {
            State::QuoteOpen(_) => self.word.push('='),
            State::Name => {
                self.name = Some(mem::take(&mut self.word));
                self.state = State::Equals;
            }
            _ => self.state = State::Equals,
        }
    }

    fn quote(&mut self, quote: QuoteStyle) {
        let c = quote.as_char();

        // A doubled quote is one literal quote character, in any state.
        if self.chars.peek() == Some(&c) {
            self.chars.next();
            self.col += 1;
            self.word.push(c);
            return;
        }

        match self.state {
            State::QuoteOpen(open) if open != quote => self.word.push(c),
            State::QuoteOpen(_) => {
                let word = mem::take(&mut self.word);
                match self.name.take() {
                    None => self.name = Some(word),
                    Some(name) => self.commit(name, Some(word)),
                }
                self.state = State::QuoteClosed(quote);
            }
            State::Name => {
                if !self.word.is_empty() {
                    let name = mem::take(&mut self.word);
                    self.commit(name, None);
                }
                self.open(quote);
            }
            State::Value | State::Equals | State::QuoteClosed(_) => self.open(quote),
        }
    }

    fn open(&mut self, quote: QuoteStyle) {
        self.quote_col = self.col;
        self.state = State::QuoteOpen(quote);
    }

    /// The end of a line behaves like trailing whitespace, except inside quotes.
    fn finish(mut self) -> Result<Vec<Attribute>> {
        if let State::QuoteOpen(kind) = self.state {
            return Err(Error::unterminated_quote(kind, self.line, self.quote_col));
        }
        self.whitespace(' ');
        Ok(self.attributes)
    }
}

/// The cfg deserializer.
///
/// Feeds lines through the tokenizer and groups the resulting tuples into
/// records. Created via [`Deserializer::new`] and consumed by
/// [`Deserializer::parse_str`] or [`Deserializer::parse_reader`].
pub struct Deserializer {
    cfg: Cfg,
    line: usize,
    /// Set while the latest unindented line produced no attributes; indented
    /// lines under it have no parent record.
    headless: bool,
    options: ParseOptions,
}

impl Deserializer {
    /// Creates a deserializer with an empty document.
    pub fn new(options: ParseOptions) -> Self {
        Deserializer {
            cfg: Cfg::new(),
            line: 0,
            headless: false,
            options,
        }
    }

    /// Parses a complete document held in memory.
    pub fn parse_str(mut self, input: &str) -> Result<Cfg> {
        for line in input.lines() {
            self.feed_line(line)?;
        }
        Ok(self.end())
    }

    /// Parses a complete document, reading it line by line.
    ///
    /// Read failures, including invalid UTF-8, abort the parse as [`Error::Io`].
    pub fn parse_reader<R: io::BufRead>(mut self, reader: R) -> Result<Cfg> {
        for line in reader.lines() {
            let line = line?;
            self.feed_line(&line)?;
        }
        Ok(self.end())
    }

    fn feed_line(&mut self, raw: &str) -> Result<()> {
        self.line += 1;
        let text = strip_comment(raw);
        let kind = LineKind::classify(text);
        if self.options.verbose {
            trace!(line = self.line, ?kind, text, "classified line");
        }
        if kind == LineKind::Blank {
            return Ok(());
        }

        let attributes = LineScanner::new(text, self.line, self.options.verbose).scan()?;
        let tuple = Tuple::from_attributes(attributes);

        if kind == LineKind::Continuation {
            if self.headless || self.cfg.is_empty() {
                return Err(Error::orphan_indented_tuple(self.line));
            }
        } else {
            self.headless = tuple.is_none();
        }

        let Some(tuple) = tuple else {
            if self.options.verbose {
                trace!(line = self.line, "line produced no attributes");
            }
            return Ok(());
        };

        match self.cfg.last_record_mut() {
            Some(record) if kind == LineKind::Continuation => record.push(tuple),
            _ => self.cfg.push(Record::new(tuple)),
        }
        Ok(())
    }

    fn end(self) -> Cfg {
        debug!(
            lines = self.line,
            records = self.cfg.len(),
            "parsed cfg"
        );
        self.cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(line: &str) -> Result<Vec<Attribute>> {
        LineScanner::new(line, 1, false).scan()
    }

    fn pairs(line: &str) -> Vec<(String, Option<String>)> {
        scan(line)
            .unwrap()
            .into_iter()
            .map(|a| (a.name, a.value))
            .collect()
    }

    fn p(name: &str, value: Option<&str>) -> (String, Option<String>) {
        (name.to_string(), value.map(str::to_string))
    }

    #[test]
    fn test_classify() {
        assert_eq!(LineKind::classify(""), LineKind::Blank);
        assert_eq!(LineKind::classify(" \t "), LineKind::Blank);
        assert_eq!(LineKind::classify("sys=x"), LineKind::Record);
        assert_eq!(LineKind::classify("\tip=x"), LineKind::Continuation);
        assert_eq!(LineKind::classify("  ip=x"), LineKind::Continuation);
    }

    #[test]
    fn test_strip_comment_ignores_quotes() {
        assert_eq!(strip_comment("a=b # note"), "a=b ");
        assert_eq!(strip_comment("# note"), "");
        assert_eq!(strip_comment("a='x # y'"), "a='x ");
        assert_eq!(strip_comment("plain"), "plain");
    }

    #[test]
    fn test_names_and_values() {
        assert_eq!(pairs("foo"), vec![p("foo", None)]);
        assert_eq!(pairs("foo="), vec![p("foo", Some(""))]);
        assert_eq!(pairs("foo=bar"), vec![p("foo", Some("bar"))]);
        assert_eq!(
            pairs("a=b c d=e"),
            vec![p("a", Some("b")), p("c", None), p("d", Some("e"))]
        );
    }

    #[test]
    fn test_runs_of_whitespace_commit_nothing_extra() {
        assert_eq!(
            pairs("  a=b \t  c   "),
            vec![p("a", Some("b")), p("c", None)]
        );
    }

    #[test]
    fn test_quoted_values() {
        assert_eq!(
            pairs("comment='alice''s comment'"),
            vec![p("comment", Some("alice's comment"))]
        );
        assert_eq!(pairs(r#"q="a ""b"" c""#), vec![p("q", Some(r#"a "b" c"#))]);
        assert_eq!(pairs("'alice''s comment'"), vec![p("alice's comment", None)]);
    }

    #[test]
    fn test_quoted_name_with_value() {
        assert_eq!(
            pairs("'test id'=7 \"x y\"='z w'"),
            vec![p("test id", Some("7")), p("x y", Some("z w"))]
        );
    }

    #[test]
    fn test_opposite_quote_is_literal() {
        assert_eq!(pairs(r#"n="it's""#), vec![p("n", Some("it's"))]);
        assert_eq!(pairs(r#"n='say "hi"'"#), vec![p("n", Some(r#"say "hi""#))]);
    }

    #[test]
    fn test_equals_inside_quotes_is_data() {
        assert_eq!(pairs("expr='x=y'"), vec![p("expr", Some("x=y"))]);
    }

    #[test]
    fn test_bare_word_then_quoted_word() {
        assert_eq!(
            pairs("sing'a song'"),
            vec![p("sing", None), p("a song", None)]
        );
    }

    #[test]
    fn test_multi_name_single_value_line() {
        assert_eq!(
            pairs("a= 'b c' d= last=bit"),
            vec![
                p("a", Some("")),
                p("b c", None),
                p("d", Some("")),
                p("last", Some("bit")),
            ]
        );
    }

    #[test]
    fn test_doubled_quote_after_equals_is_empty_value() {
        assert_eq!(pairs("a='' b"), vec![p("a", Some("")), p("b", None)]);
    }

    #[test]
    fn test_empty_name_with_value_is_kept() {
        assert_eq!(pairs("=orphan"), vec![p("", Some("orphan"))]);
    }

    #[test]
    fn test_empty_name_with_quoted_value() {
        assert_eq!(pairs("=\"x y\""), vec![p("", Some("x y"))]);
    }

    #[test]
    fn test_empty_attributes_are_discarded() {
        assert!(scan("=").unwrap().is_empty());
        assert!(scan(" = ").unwrap().is_empty());
    }

    #[test]
    fn test_unterminated_quotes_report_opening_position() {
        assert_eq!(
            scan("name 'unclosed").unwrap_err(),
            Error::unterminated_quote(QuoteStyle::Single, 1, 6)
        );
        assert_eq!(
            scan(r#"a="b"#).unwrap_err(),
            Error::unterminated_quote(QuoteStyle::Double, 1, 3)
        );
    }

    #[test]
    fn test_quote_at_end_of_line_is_not_doubled() {
        assert_eq!(pairs("x='y'"), vec![p("x", Some("y"))]);
        assert_eq!(
            scan("x='").unwrap_err(),
            Error::unterminated_quote(QuoteStyle::Single, 1, 3)
        );
    }

    #[test]
    fn test_state_display() {
        assert_eq!(State::Name.to_string(), "Name");
        assert_eq!(State::QuoteOpen(QuoteStyle::Single).to_string(), "'Begin");
        assert_eq!(State::QuoteClosed(QuoteStyle::Double).to_string(), "\"End");
    }

    #[test]
    fn test_deserializer_groups_lines() {
        let cfg = Deserializer::new(ParseOptions::default())
            .parse_str("a\n\tb\n\n  c\nd\n")
            .unwrap();
        assert_eq!(cfg.keys(), vec!["a", "d"]);
        assert_eq!(cfg.records()[0].len(), 3);
    }

    #[test]
    fn test_attribute_free_lines_are_skipped() {
        let cfg = Deserializer::new(ParseOptions::default())
            .parse_str("a\n\t=\n=\nb\n")
            .unwrap();
        assert_eq!(cfg.keys(), vec!["a", "b"]);
        assert_eq!(cfg.records()[0].len(), 1);
    }

    #[test]
    fn test_indented_line_under_attribute_free_line_is_orphan() {
        let err = Deserializer::new(ParseOptions::default())
            .parse_str("a=1\n=\n\tb=2\n")
            .unwrap_err();
        assert_eq!(err, Error::orphan_indented_tuple(3));
    }

    #[test]
    fn test_orphan_detected_after_tokenizing() {
        let err = Deserializer::new(ParseOptions::default())
            .parse_str("# header\n\t'open\n")
            .unwrap_err();
        assert_eq!(err, Error::unterminated_quote(QuoteStyle::Single, 2, 2));

        let err = Deserializer::new(ParseOptions::default())
            .parse_str("# header\n\tip=1\n")
            .unwrap_err();
        assert_eq!(err, Error::orphan_indented_tuple(2));
    }
}
