//! Ordered map type for mapping literals.
//!
//! This module provides [`LiteralMap`], a wrapper around [`IndexMap`] that keeps
//! entries in the order they appeared in the literal, and [`Key`], the hashable
//! form of a mapping key.
//!
//! ## Keys
//!
//! A key may be any scalar, or a tuple of keys. Floats (alone or inside a
//! complex number) compare and hash by their bit pattern, so `NaN` is a usable
//! key and `0.0` and `-0.0` are distinct keys. A sequence or mapping found in
//! key position cannot be hashed; it is stored as [`Key::Text`] holding its
//! literal rendering.
//!
//! ## Examples
//!
//! ```rust
//! use reprlit::{parse, Key, Value};
//!
//! let value = parse("{'format': 'soap', 1: True}");
//! let map = value.as_mapping().unwrap();
//!
//! assert_eq!(map.get("format").and_then(Value::as_str), Some("soap"));
//! assert_eq!(map.get(1).and_then(Value::as_bool), Some(true));
//!
//! let keys: Vec<&Key> = map.keys().collect();
//! assert_eq!(keys, vec![&Key::from("format"), &Key::from(1)]);
//! ```

use crate::value::{Complex, Duration, Timestamp};
use crate::Value;
use indexmap::IndexMap;
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

/// A hashable mapping key.
#[derive(Clone, Debug)]
pub enum Key {
    Text(String),
    Integer(BigInt),
    Float(f64),
    Complex(Complex),
    Boolean(bool),
    Timestamp(Timestamp),
    Duration(Duration),
    Tuple(Box<[Key]>),
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Text(a), Key::Text(b)) => a == b,
            (Key::Integer(a), Key::Integer(b)) => a == b,
            (Key::Float(a), Key::Float(b)) => a.to_bits() == b.to_bits(),
            (Key::Complex(a), Key::Complex(b)) => {
                a.re.to_bits() == b.re.to_bits() && a.im.to_bits() == b.im.to_bits()
            }
            (Key::Boolean(a), Key::Boolean(b)) => a == b,
            (Key::Timestamp(a), Key::Timestamp(b)) => a == b,
            (Key::Duration(a), Key::Duration(b)) => a == b,
            (Key::Tuple(a), Key::Tuple(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Key::Text(s) => s.hash(state),
            Key::Integer(i) => i.hash(state),
            Key::Float(f) => f.to_bits().hash(state),
            Key::Complex(c) => {
                c.re.to_bits().hash(state);
                c.im.to_bits().hash(state);
            }
            Key::Boolean(b) => b.hash(state),
            Key::Timestamp(ts) => ts.hash(state),
            Key::Duration(d) => d.hash(state),
            Key::Tuple(items) => items.hash(state),
        }
    }
}

impl Key {
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Value> for Key {
    fn from(mut value: Value) -> Self {
        if matches!(value, Value::Sequence(_) | Value::Mapping(_)) {
            return Key::Text(value.to_string());
        }
        match &mut value {
            Value::Text(s) => Key::Text(mem::take(s)),
            Value::Integer(i) => Key::Integer(mem::take(i)),
            Value::Float(f) => Key::Float(*f),
            Value::Complex(c) => Key::Complex(*c),
            Value::Boolean(b) => Key::Boolean(*b),
            Value::Timestamp(ts) => Key::Timestamp(*ts),
            Value::Duration(d) => Key::Duration(*d),
            Value::FixedTuple(items) => Key::Tuple(
                mem::take(items)
                    .into_vec()
                    .into_iter()
                    .map(Key::from)
                    .collect::<Vec<_>>()
                    .into_boxed_slice(),
            ),
            // Unhashable containers were rendered above.
            Value::Sequence(_) | Value::Mapping(_) => Key::Text(String::new()),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Integer(BigInt::from(value))
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Integer(BigInt::from(value))
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Boolean(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::ser::write_key(f, self)
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Key::Text(s) => serializer.serialize_str(s),
            // Most formats only accept string map keys; everything else goes out as its literal text.
            other => serializer.collect_str(other),
        }
    }
}

/// An insertion-ordered map of [`Key`] to [`Value`].
///
/// This is a thin wrapper around [`IndexMap`].
///
/// # Examples
///
/// ```rust
/// use reprlit::{LiteralMap, Value};
///
/// let mut map = LiteralMap::new();
/// map.insert("first", Value::from(1));
/// map.insert("second", Value::from(2));
///
/// let keys: Vec<_> = map.keys().map(|k| k.to_string()).collect();
/// assert_eq!(keys, vec!["'first'", "'second'"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LiteralMap(IndexMap<Key, Value>);

impl LiteralMap {
    #[must_use]
    pub fn new() -> Self {
        LiteralMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        LiteralMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the entry keeps its original position.
    pub fn insert(&mut self, key: impl Into<Key>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.0.get(&key.into())
    }

    #[must_use]
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.0.contains_key(&key.into())
    }

    /// Returns the entry at `index`, in insertion order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&Key, &Value)> {
        self.0.get_index(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.0.iter()
    }
}

impl Serialize for LiteralMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl IntoIterator for LiteralMap {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LiteralMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<Key>> FromIterator<(K, Value)> for LiteralMap {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        LiteralMap(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(key: &Key) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_insertion_order_and_replacement() {
        let mut map = LiteralMap::new();
        map.insert("b", Value::from(1));
        map.insert("a", Value::from(2));
        assert_eq!(map.insert("b", Value::from(3)), Some(Value::from(1)));

        let entries: Vec<(String, i64)> = map
            .iter()
            .map(|(k, v)| (k.as_str().unwrap().to_string(), v.as_i64().unwrap()))
            .collect();
        assert_eq!(entries, vec![("b".to_string(), 3), ("a".to_string(), 2)]);
    }

    #[test]
    fn test_float_keys_compare_by_bits() {
        assert_eq!(Key::Float(f64::NAN), Key::Float(f64::NAN));
        assert_ne!(Key::Float(0.0), Key::Float(-0.0));
        assert_eq!(hash_of(&Key::Float(1.5)), hash_of(&Key::Float(1.5)));
    }

    #[test]
    fn test_variants_do_not_collide() {
        assert_ne!(Key::from("1"), Key::from(1));
        assert_ne!(Key::from(true), Key::from(1));
    }

    #[test]
    fn test_tuple_value_becomes_tuple_key() {
        let value = Value::FixedTuple(vec![Value::from("NBC"), Value::from(45)].into_boxed_slice());
        let key = Key::from(value);
        assert_eq!(
            key,
            Key::Tuple(vec![Key::from("NBC"), Key::from(45)].into_boxed_slice())
        );
    }

    #[test]
    fn test_unhashable_value_becomes_text_key() {
        let value = Value::Sequence(vec![Value::from(1), Value::from(2)]);
        assert_eq!(Key::from(value), Key::from("[1, 2]"));
    }

    #[test]
    fn test_from_iterator() {
        let map: LiteralMap = vec![("x", Value::from(1)), ("y", Value::from(2))]
            .into_iter()
            .collect();
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("y"));
        assert_eq!(map.get_index(0), Some((&Key::from("x"), &Value::from(1))));
    }
}
