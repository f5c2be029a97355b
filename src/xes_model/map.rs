//! Ordered, uniquely keyed attribute storage.
//!
//! [`AttributeMap`] is the storage behind both aggregates. It keeps
//! attributes in insertion order and guarantees one entry per key.
//!
//! ## Re-insertion
//!
//! Inserting an attribute whose key is already present replaces the stored
//! attribute *in place*: the key keeps the position it was first inserted at.
//! Removing a key shifts the entries after it, preserving their relative order.

use indexmap::IndexMap;

use crate::attribute::{Attribute, AttributeKey, AttributeValue};
use crate::container::AttributeContainer;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct AttributeMap {
    entries: IndexMap<AttributeKey, Attribute>,
}

// Order matters: two maps with the same entries in another order differ.
impl PartialEq for AttributeMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert an attribute under its own key, returning the one it replaced.
    pub fn insert(&mut self, attribute: Attribute) -> Option<Attribute> {
        self.entries.insert(attribute.key().clone(), attribute)
    }

    pub fn get(&self, key: &str) -> Option<&Attribute> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Replace the payload stored under `key`, keeping its kind.
    ///
    /// Returns `Ok(false)` if no attribute has that key.
    pub fn set_value(&mut self, key: &str, value: AttributeValue) -> Result<bool> {
        match self.entries.get_mut(key) {
            Some(attribute) => attribute.set_value(value).map(|_| true),
            None => Ok(false),
        }
    }

    /// Mutable access to the nested container stored under `key`.
    pub fn container_mut(&mut self, key: &str) -> Option<&mut AttributeContainer> {
        self.entries.get_mut(key).and_then(Attribute::container_mut)
    }

    /// Mutable access to the list stored under `key`.
    pub fn list_mut(&mut self, key: &str) -> Option<&mut Vec<Attribute>> {
        self.entries.get_mut(key).and_then(Attribute::list_mut)
    }

    pub fn remove(&mut self, key: &str) -> Option<Attribute> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(AttributeKey::as_str)
    }

    /// Position of `key` in iteration order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.get_index_of(key)
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = &'a Attribute;
    type IntoIter = indexmap::map::Values<'a, AttributeKey, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl IntoIterator for AttributeMap {
    type Item = Attribute;
    type IntoIter = indexmap::map::IntoValues<AttributeKey, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl FromIterator<Attribute> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        map.extend(iter);
        map
    }
}

impl Extend<Attribute> for AttributeMap {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attribute in iter {
            self.insert(attribute);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeKind;
    use crate::error::XesError;

    fn literal(key: &str, value: &str) -> Attribute {
        Attribute::new(
            AttributeKey::new(key).unwrap(),
            AttributeValue::Literal(value.to_string()),
            None,
        )
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let map: AttributeMap = ["c", "a", "b"].iter().map(|k| literal(k, "v")).collect();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn reinsertion_replaces_value_in_place() {
        let mut map = AttributeMap::new();
        map.insert(literal("a", "1"));
        map.insert(literal("b", "2"));
        map.insert(literal("c", "3"));

        let previous = map.insert(literal("a", "updated"));

        assert_eq!(previous.unwrap().as_literal(), Some("1"));
        assert_eq!(map.len(), 3);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(map.get("a").unwrap().as_literal(), Some("updated"));
        assert_eq!(map.position("a"), Some(0));
    }

    #[test]
    fn reinsertion_may_change_kind() {
        let mut map = AttributeMap::new();
        map.insert(literal("x", "1"));
        map.insert(Attribute::new(
            AttributeKey::new("x").unwrap(),
            AttributeValue::Discrete(1),
            None,
        ));
        assert_eq!(map.get("x").unwrap().kind(), AttributeKind::Discrete);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut map: AttributeMap = ["a", "b", "c", "d"].iter().map(|k| literal(k, "v")).collect();
        let removed = map.remove("b");
        assert!(removed.is_some());
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "c", "d"]);
        assert!(map.remove("missing").is_none());
    }

    #[test]
    fn set_value_is_kind_checked() {
        let mut map = AttributeMap::new();
        map.insert(literal("a", "1"));

        assert!(map
            .set_value("a", AttributeValue::Literal("2".into()))
            .unwrap());
        assert_eq!(map.get("a").unwrap().as_literal(), Some("2"));

        assert!(matches!(
            map.set_value("a", AttributeValue::Boolean(true)),
            Err(XesError::KindMismatch { .. })
        ));
        assert!(!map.set_value("zzz", AttributeValue::Boolean(true)).unwrap());
    }

    #[test]
    fn nested_accessors_only_match_their_kind() {
        let mut map = AttributeMap::new();
        map.insert(literal("a", "1"));
        map.insert(Attribute::new(
            AttributeKey::new("l").unwrap(),
            AttributeValue::List(vec![]),
            None,
        ));
        assert!(map.container_mut("a").is_none());
        assert!(map.list_mut("a").is_none());
        map.list_mut("l").unwrap().push(literal("item", "x"));
        assert_eq!(map.get("l").unwrap().as_list().unwrap().len(), 1);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let ab: AttributeMap = ["a", "b"].iter().map(|k| literal(k, "v")).collect();
        let ba: AttributeMap = ["b", "a"].iter().map(|k| literal(k, "v")).collect();
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn with_capacity_presizes() {
        let map = AttributeMap::with_capacity(32);
        assert!(map.capacity() >= 32);
        assert!(map.is_empty());
    }
}
