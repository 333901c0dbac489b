//! In-memory representation of a cfg document.
//!
//! The hierarchy has three levels below the document:
//!
//! - [`Attribute`]: a name with an optional value (`name` or `name=value`)
//! - [`Tuple`]: the attributes of one source line, never empty
//! - [`Record`]: an unindented tuple plus the indented tuples beneath it, never empty
//! - [`Cfg`]: the ordered records of one input
//!
//! Every level above [`Attribute`] has a *primary key*: the name of its first
//! attribute. Because tuples and records can only be built from at least one
//! element, deriving a primary key never fails.
//!
//! ## Examples
//!
//! ```rust
//! use cfg2::from_str;
//!
//! let cfg = from_str("creds\n\tuser=alice\n\tmethod=key file=./my_key.pem\n").unwrap();
//!
//! let creds = cfg.lookup("creds").unwrap()[0];
//! assert_eq!(creds.primary_key(), "creds");
//! assert_eq!(creds.len(), 3);
//!
//! let method = creds.lookup("method").unwrap()[0];
//! assert_eq!(method.lookup("file").unwrap()[0].value(), Some("./my_key.pem"));
//! ```

use crate::options::EmitOptions;
use crate::ser::Serializer;
use serde::Serialize;
use std::fmt;

/// A name and an optional value.
///
/// `name` parses to an attribute without a value, `name=` to one whose value
/// is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

impl Attribute {
    /// Creates an attribute.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cfg2::Attribute;
    ///
    /// let ip = Attribute::new("ip", Some("1.2.3.4"));
    /// assert_eq!(ip.value(), Some("1.2.3.4"));
    ///
    /// let force = Attribute::new("force", None::<&str>);
    /// assert!(force.value().is_none());
    /// ```
    pub fn new<N, V>(name: N, value: Option<V>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Attribute {
            name: name.into(),
            value: value.map(Into::into),
        }
    }

    /// Creates an attribute without a value.
    pub fn named<N: Into<String>>(name: N) -> Self {
        Attribute {
            name: name.into(),
            value: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the value, or `""` when there is none.
    #[must_use]
    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    /// Compares name and value, treating a missing value like an empty one.
    ///
    /// Emitted text cannot tell `name` from `name=`, so this is the equality
    /// that survives a round trip.
    #[must_use]
    pub fn is_equivalent(&self, other: &Attribute) -> bool {
        self.name == other.name && self.value_or_empty() == other.value_or_empty()
    }
}

/// The attributes of one line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tuple {
    attributes: Vec<Attribute>,
}

impl Tuple {
    /// Creates a tuple holding `first`.
    pub fn new(first: Attribute) -> Self {
        Tuple {
            attributes: vec![first],
        }
    }

    /// Builds a tuple from a list of attributes, or `None` if the list is empty.
    pub fn from_attributes(attributes: Vec<Attribute>) -> Option<Self> {
        if attributes.is_empty() {
            None
        } else {
            Some(Tuple { attributes })
        }
    }

    pub fn push(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Mutable access to the attributes; the slice cannot be emptied.
    pub fn attributes_mut(&mut self) -> &mut [Attribute] {
        &mut self.attributes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Name of the first attribute.
    #[must_use]
    pub fn primary_key(&self) -> &str {
        &self.attributes[0].name
    }

    /// Returns every attribute called `name`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cfg2::from_str;
    ///
    /// let cfg = from_str("host ip=10.0.0.1 ip=10.0.0.2\n").unwrap();
    /// let tuple = &cfg.records()[0].tuples()[0];
    ///
    /// let ips: Vec<_> = tuple.lookup("ip").unwrap().iter().map(|a| a.value_or_empty()).collect();
    /// assert_eq!(ips, vec!["10.0.0.1", "10.0.0.2"]);
    /// assert!(tuple.lookup("dns").is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Vec<&Attribute>> {
        let found: Vec<&Attribute> = self.attributes.iter().filter(|a| a.name == name).collect();
        (!found.is_empty()).then_some(found)
    }

    #[must_use]
    pub fn is_equivalent(&self, other: &Tuple) -> bool {
        self.attributes.len() == other.attributes.len()
            && self
                .attributes
                .iter()
                .zip(&other.attributes)
                .all(|(a, b)| a.is_equivalent(b))
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

/// An unindented tuple followed by the indented tuples that belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Record {
    tuples: Vec<Tuple>,
}

impl Record {
    /// Creates a record whose first tuple is `first`.
    pub fn new(first: Tuple) -> Self {
        Record {
            tuples: vec![first],
        }
    }

    /// Builds a record from a list of tuples, or `None` if the list is empty.
    pub fn from_tuples(tuples: Vec<Tuple>) -> Option<Self> {
        if tuples.is_empty() {
            None
        } else {
            Some(Record { tuples })
        }
    }

    pub fn push(&mut self, tuple: Tuple) {
        self.tuples.push(tuple);
    }

    #[must_use]
    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    pub fn tuples_mut(&mut self) -> &mut [Tuple] {
        &mut self.tuples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tuple> {
        self.tuples.iter()
    }

    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Primary key of the first tuple.
    #[must_use]
    pub fn primary_key(&self) -> &str {
        self.tuples[0].primary_key()
    }

    /// Returns the tuples whose primary key is `key`, or `None` if there are none.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Vec<&Tuple>> {
        let found: Vec<&Tuple> = self
            .tuples
            .iter()
            .filter(|t| t.primary_key() == key)
            .collect();
        (!found.is_empty()).then_some(found)
    }

    #[must_use]
    pub fn is_equivalent(&self, other: &Record) -> bool {
        self.tuples.len() == other.tuples.len()
            && self
                .tuples
                .iter()
                .zip(&other.tuples)
                .all(|(a, b)| a.is_equivalent(b))
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Tuple;
    type IntoIter = std::slice::Iter<'a, Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.iter()
    }
}

/// A whole cfg document: records in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cfg {
    records: Vec<Record>,
}

impl Cfg {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut Vec<Record> {
        &mut self.records
    }

    /// The most recently opened record, which indented lines attach to.
    pub(crate) fn last_record_mut(&mut self) -> Option<&mut Record> {
        self.records.last_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records whose primary key is `key`, in document order.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Vec<&Record>> {
        let found: Vec<&Record> = self
            .records
            .iter()
            .filter(|r| r.primary_key() == key)
            .collect();
        (!found.is_empty()).then_some(found)
    }

    /// Primary keys of all records, in document order (duplicates included).
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.records.iter().map(Record::primary_key).collect()
    }

    /// Structural comparison that survives a round trip through the emitter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cfg2::{from_str, to_string};
    ///
    /// let cfg = from_str("force\n\tlevel=3\n").unwrap();
    /// let again = from_str(&to_string(&cfg)).unwrap();
    ///
    /// // `force` came back as `force=`
    /// assert_ne!(cfg, again);
    /// assert!(cfg.is_equivalent(&again));
    /// ```
    #[must_use]
    pub fn is_equivalent(&self, other: &Cfg) -> bool {
        self.records.len() == other.records.len()
            && self
                .records
                .iter()
                .zip(&other.records)
                .all(|(a, b)| a.is_equivalent(b))
    }
}

impl FromIterator<Record> for Cfg {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Cfg {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Cfg {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cfg {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// Display renders with the default emit options, the same text `to_string` produces.

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = Serializer::new(EmitOptions::default());
        serializer.serialize_attribute(self);
        f.write_str(&serializer.into_inner())
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = Serializer::new(EmitOptions::default());
        serializer.serialize_tuple(self);
        f.write_str(&serializer.into_inner())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = Serializer::new(EmitOptions::default());
        serializer.serialize_record(self);
        f.write_str(&serializer.into_inner())
    }
}

impl fmt::Display for Cfg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = Serializer::new(EmitOptions::default());
        serializer.serialize_cfg(self);
        f.write_str(&serializer.into_inner())
    }
}
