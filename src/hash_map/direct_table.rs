//! Direct-addressed table with no collision handling
//!
//! Values are stored under their raw digest. A second value with the same
//! digest silently replaces the first: last write wins. The table exists to
//! show why the other strategies are needed.

use crate::hash_map::hash_functions::{PositionalHasher, StringHasher};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Table keyed by raw digest; colliding adds overwrite each other
pub struct DirectTable<H = PositionalHasher> {
    members: HashMap<u64, String, ahash::RandomState>,
    hasher: H,
    overwrites: usize,
}

impl DirectTable<PositionalHasher> {
    /// Create an empty table using the positional hasher
    pub fn new() -> Self {
        Self::with_hasher(PositionalHasher::default())
    }
}

impl Default for DirectTable<PositionalHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: StringHasher> DirectTable<H> {
    /// Create an empty table using `hasher`
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            members: HashMap::default(),
            hasher,
            overwrites: 0,
        }
    }

    /// Digest of `value` under this table's hasher
    #[inline]
    pub fn digest(&self, value: &str) -> u64 {
        self.hasher.digest(value)
    }

    /// Store `value` under its digest.
    ///
    /// Returns the value previously stored under the same digest, which is
    /// lost. When that value differs from `value` the overwrite is counted.
    pub fn add(&mut self, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        let key = self.digest(&value);
        let previous = self.members.insert(key, value);

        if let Some(ref displaced) = previous {
            if displaced != &self.members[&key] {
                self.overwrites += 1;
                log::debug!(
                    "direct table overwrote {:?} at digest {} ({} overwrites)",
                    displaced,
                    key,
                    self.overwrites
                );
            }
        }
        previous
    }

    /// Whatever is stored under the digest of `value`.
    ///
    /// After a collision this may be a different value than the one asked for.
    pub fn find(&self, value: &str) -> Option<&str> {
        self.members.get(&self.digest(value)).map(String::as_str)
    }

    /// True if the value stored under the digest of `value` is `value` itself.
    ///
    /// The empty string is never reported as existing, even though it can be
    /// stored and found.
    pub fn exists(&self, value: &str) -> bool {
        !value.is_empty() && self.find(value) == Some(value)
    }

    /// Number of occupied digests
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if nothing has been added
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Adds that replaced a different value
    pub fn overwrites(&self) -> usize {
        self.overwrites
    }

    /// Stored `(digest, value)` pairs in digest order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> {
        let ordered: BTreeMap<u64, &str> = self
            .members
            .iter()
            .map(|(&key, value)| (key, value.as_str()))
            .collect();
        ordered.into_iter()
    }

    /// The hasher in use
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

impl<H: StringHasher> fmt::Display for DirectTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DirectTable {{ len: {}, overwrites: {} }}", self.len(), self.overwrites)?;
        for (key, value) in self.iter() {
            writeln!(f, "\t{}: {:?}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_map::NaiveHasher;

    #[test]
    fn test_add_and_find() {
        let values = ["now is the", "time for all", "good people", "to come to", "the aid of their country"];
        let mut table = DirectTable::new();

        for value in values {
            assert_eq!(table.add(value), None);
        }

        for value in values {
            assert_eq!(table.find(value), Some(value));
            assert!(table.exists(value));
        }
        assert_eq!(table.len(), values.len());
        assert_eq!(table.overwrites(), 0);
    }

    #[test]
    fn test_missing_value() {
        let table = DirectTable::new();
        assert!(table.is_empty());
        assert_eq!(table.find("foo"), None);
        assert!(!table.exists("foo"));
    }

    #[test]
    fn test_collision_overwrites() {
        let mut table = DirectTable::with_hasher(NaiveHasher);
        table.add("oof");
        assert_eq!(table.add("foo"), Some("oof".to_string()));

        // the first value is gone, its lookup yields the second
        assert_eq!(table.find("oof"), Some("foo"));
        assert!(!table.exists("oof"));
        assert!(table.exists("foo"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.overwrites(), 1);
    }

    #[test]
    fn test_readd_is_idempotent() {
        let mut table = DirectTable::new();
        table.add("dabc");
        assert_eq!(table.add("dabc"), Some("dabc".to_string()));
        assert_eq!(table.len(), 1);
        assert_eq!(table.overwrites(), 0);
    }

    #[test]
    fn test_empty_string_is_stored_but_never_exists() {
        let mut table = DirectTable::new();
        assert!(!table.exists(""));

        table.add("");
        assert_eq!(table.digest(""), 0);
        assert_eq!(table.find(""), Some(""));
        assert_eq!(table.len(), 1);
        assert!(!table.exists(""));
    }

    #[test]
    fn test_iter_and_display() {
        let mut table = DirectTable::with_hasher(NaiveHasher);
        table.add("b");
        table.add("a");

        let pairs: Vec<(u64, &str)> = table.iter().collect();
        assert_eq!(pairs, vec![(97, "a"), (98, "b")]);

        let dump = table.to_string();
        assert!(dump.contains("len: 2"));
        assert!(dump.contains("97: \"a\""));
    }
}
