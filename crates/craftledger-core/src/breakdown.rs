//! # Breakdown Maps
//!
//! Insertion-ordered, string-keyed maps used for every name-keyed
//! breakdown the engine reports (labor by role, by-product lines,
//! ingredient costs, per-unit costs, role/shift groupings).
//!
//! ## Duplicate Keys: Last-Write-Wins
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  insert("Mug", 1.00)     →  { Mug: 1.00 }                               │
//! │  insert("Bowl", 2.00)    →  { Mug: 1.00, Bowl: 2.00 }                   │
//! │  insert("Mug", 3.00)     →  { Mug: 3.00, Bowl: 2.00 }                   │
//! │                                 ▲                                       │
//! │                                 value overwritten, position kept        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Overwriting on a duplicate name is intentional, not a defect: two
//! staff roles or products sharing a name collapse to one reported
//! line, keyed at the first occurrence's position. Costs are NOT
//! merged on collision.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// An insertion-ordered map from `String` keys to values.
///
/// Backed by a `Vec` of pairs: the input collections here (employees,
/// ingredients, products, overhead items) are small, so linear key
/// lookup beats pulling in an ordered-map dependency.
///
/// Serializes as a JSON object with keys in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        OrderedMap {
            entries: Vec::new(),
        }
    }

    /// Inserts a key-value pair.
    ///
    /// If the key already exists, its value is overwritten in place and
    /// the key keeps its original position (last-write-wins).
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns a reference to the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value for `key`, if present.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns the value for `key`, inserting `default` first if the
    /// key is absent.
    pub fn entry_or_insert(&mut self, key: &str, default: V) -> &mut V {
        let pos = match self.entries.iter().position(|(k, _)| k == key) {
            Some(pos) => pos,
            None => {
                self.entries.push((key.to_string(), default));
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos].1
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries have been inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("Rent", 2000.0);
        map.insert("Insurance", 300.0);
        map.insert("Utilities", 150.0);

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Rent", "Insurance", "Utilities"]);
    }

    #[test]
    fn test_duplicate_key_overwrites_in_place() {
        let mut map = OrderedMap::new();
        map.insert("Mug", 1.0);
        map.insert("Bowl", 2.0);
        map.insert("Mug", 3.0);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Mug"), Some(&3.0));

        // "Mug" keeps its original first position
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Mug", "Bowl"]);
    }

    #[test]
    fn test_entry_or_insert_accumulates() {
        let mut map = OrderedMap::new();
        *map.entry_or_insert("Cookie", 0.0) += 10.0;
        *map.entry_or_insert("Cookie", 0.0) += 5.0;

        assert_eq!(map.get("Cookie"), Some(&15.0));
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut map = OrderedMap::new();
        map.insert("b", 2.0);
        map.insert("a", 1.0);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"b":2.0,"a":1.0}"#);
    }
}
