//! cfg Format Reference
//!
//! This module documents the cfg text format as read and written by this
//! library. It is the format of Inferno's `cfg(2)`, also used for `ndb`-style
//! network databases.
//!
//! # Overview
//!
//! A file is a sequence of **records**. A record is one unindented line
//! followed by any number of indented lines. Every non-blank line is a
//! **tuple**, and a tuple is a whitespace-separated list of **attributes**.
//!
//! ```text
//! # networks
//! 'my network'
//!     ip=1.2.3.4
//!
//! creds
//!     user=alice
//!     method=key  file="./my_key.pem"
//! ```
//!
//! This parses into two records. The first is keyed `my network` and holds two
//! tuples; the second is keyed `creds` and holds three, the last of which has
//! two attributes.
//!
//! # Attributes
//!
//! | Text | Name | Value |
//! |------|------|-------|
//! | `force` | `force` | none |
//! | `force=` | `force` | empty string |
//! | `ip=1.2.3.4` | `ip` | `1.2.3.4` |
//! | `'test id'=7` | `test id` | `7` |
//! | `note='it''s here'` | `note` | `it's here` |
//!
//! **Rules**:
//! - Whitespace ends an attribute unless it is inside quotes
//! - The `=` is optional on input; a name with no `=` has no value
//! - A word directly followed by a quoted word (`sing'a song'`) is two
//!   separate attributes
//! - An attribute with neither name nor value (a lone `=`) is dropped
//!
//! # Quoting
//!
//! Single and double quotes behave the same way:
//!
//! - A doubled quote (`''` or `""`) is one literal quote character, anywhere
//!   on the line, including outside quotes
//! - The other quote kind is ordinary text inside quotes: `"it's"` is `it's`
//! - `=` and whitespace are ordinary text inside quotes
//! - A line that ends inside quotes is an error; fields cannot span lines
//!
//! There is no way to write an empty quoted string: `''` is a literal `'`.
//!
//! # Comments and Blank Lines
//!
//! Everything from the first `#` to the end of the line is ignored. This
//! happens before quotes are considered, so `a='x # y'` is read as `a='x `
//! and fails with an unterminated quote. Lines that are empty once the
//! comment is removed are skipped and never start a record.
//!
//! # Indentation
//!
//! Any amount of leading whitespace (spaces or tabs) marks a line as a
//! continuation of the record above it. Depth is not significant: there is
//! exactly one level of nesting. An indented line with no record above it is
//! an error.
//!
//! A line that holds no attributes at all, such as a lone `=`, adds nothing
//! to the document. If it is unindented it still ends the previous record,
//! so indented lines under it are errors too:
//!
//! ```text
//! a=1
//! =
//! 	b=2      <- error: no parent record
//! ```
//!
//! # Emitted Form
//!
//! The emitter writes a canonical form:
//!
//! ```text
//! "my network"=
//! 	ip=1.2.3.4
//! creds=
//! 	user=alice
//! 	method=key file=./my_key.pem
//! ```
//!
//! - Every attribute is written as `name=value`, so `force` and `force=`
//!   both come out as `force=`
//! - Each attribute is followed by one space
//! - Continuation lines are indented by a single tab
//! - Records follow each other without blank lines
//! - Fields containing whitespace, `=` or a quote character are quoted with the
//!   configured quote character (double by default), and every quote character
//!   inside is doubled. A field that begins with the configured quote character
//!   is wrapped in the other one instead.
//!
//! Reading emitted text back yields the same document, up to the
//! `force`/`force=` distinction (see [`crate::Cfg::is_equivalent`]).
//! Names or values containing a line break or `#` cannot be represented.
