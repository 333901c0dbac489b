//! Ordered map projections of a cfg document.
//!
//! A parsed [`Cfg`] is a list of lists; these helpers collapse it into
//! [`IndexMap`]s keyed by names, for callers that just want to look values up.
//!
//! ## Why IndexMap?
//!
//! Source order is meaningful in cfg files, so every projection iterates in
//! the order names first appear, and "first occurrence wins" when a key repeats.
//!
//! ## Examples
//!
//! ```rust
//! use cfg2::from_str;
//!
//! let cfg = from_str("ipnet=home\n\tauth=10.0.0.1 authdom=HOME\n").unwrap();
//!
//! let map = cfg.build_map();
//! assert_eq!(map["ipnet"]["auth"]["authdom"], vec!["HOME".to_string()]);
//!
//! let flat = cfg.flat_map();
//! assert_eq!(flat.get("auth").map(String::as_str), Some("10.0.0.1"));
//! ```

use crate::{Cfg, Record, Tuple};
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Attribute name → every non-empty value given for it in one tuple.
pub type AttributeMap = IndexMap<String, Vec<String>>;

/// Tuple primary key → that tuple's [`AttributeMap`].
pub type TupleMap = IndexMap<String, AttributeMap>;

/// Record primary key → that record's [`TupleMap`].
pub type RecordMap = IndexMap<String, TupleMap>;

/// Attribute name → the first value seen for it (`""` when it had none).
pub type FlatMap = IndexMap<String, String>;

impl Tuple {
    /// Maps each attribute name to its values, in order.
    ///
    /// Names that only ever appear without a value (or with an empty one) map
    /// to an empty list. A valueless repeat never clears values already
    /// collected for that name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cfg2::tuple;
    ///
    /// let t = tuple!["ip" = "10.0.0.1", "ip" = "10.0.0.2", "trust"];
    /// let map = t.build_map();
    /// assert_eq!(map["ip"], vec!["10.0.0.1", "10.0.0.2"]);
    /// assert!(map["trust"].is_empty());
    /// ```
    #[must_use]
    pub fn build_map(&self) -> AttributeMap {
        let mut out = AttributeMap::with_capacity(self.len());
        for attribute in self {
            let values = out.entry(attribute.name.clone()).or_default();
            match attribute.value() {
                Some(value) if !value.is_empty() => values.push(value.to_string()),
                _ => {}
            }
        }
        out
    }

    fn flatten_into(&self, out: &mut FlatMap) {
        for (name, values) in self.build_map() {
            if let Entry::Vacant(slot) = out.entry(name) {
                slot.insert(values.into_iter().next().unwrap_or_default());
            }
        }
    }
}

impl Record {
    /// Maps each tuple's primary key to its attribute map; the first tuple
    /// with a given key wins.
    #[must_use]
    pub fn build_map(&self) -> TupleMap {
        let mut out = TupleMap::with_capacity(self.len());
        for tuple in self {
            if let Entry::Vacant(slot) = out.entry(tuple.primary_key().to_string()) {
                slot.insert(tuple.build_map());
            }
        }
        out
    }

    /// Union of every tuple's attributes; only the first instance of a name
    /// is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cfg2::record;
    ///
    /// let r = record![["creds"], ["user" = "alice"], ["user" = "bob", "method" = "key"]];
    /// let flat = r.flat_map();
    /// assert_eq!(flat.keys().collect::<Vec<_>>(), vec!["creds", "user", "method"]);
    /// assert_eq!(flat["user"], "alice");
    /// assert_eq!(flat["creds"], "");
    /// ```
    #[must_use]
    pub fn flat_map(&self) -> FlatMap {
        let mut out = FlatMap::new();
        for tuple in self {
            tuple.flatten_into(&mut out);
        }
        out
    }
}

impl Cfg {
    /// Nested projection: record key → tuple key → attribute name → values.
    /// The first record with a given key wins.
    #[must_use]
    pub fn build_map(&self) -> RecordMap {
        let mut out = RecordMap::with_capacity(self.len());
        for record in self {
            if let Entry::Vacant(slot) = out.entry(record.primary_key().to_string()) {
                slot.insert(record.build_map());
            }
        }
        out
    }

    /// Union of every attribute in the document; only the first instance of
    /// a name is kept.
    #[must_use]
    pub fn flat_map(&self) -> FlatMap {
        let mut out = FlatMap::new();
        for tuple in self.iter().flat_map(Record::iter) {
            tuple.flatten_into(&mut out);
        }
        out
    }
}
