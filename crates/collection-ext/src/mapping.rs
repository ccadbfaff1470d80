//! # Mapping Extensions
//!
//! Construction from pairs, passthrough "safe" key access, right-biased
//! union and per-entry transforms for key-value maps.
//!
//! The operations are written once against [`KeyedMap`], a small seam trait
//! implemented for `std::collections::HashMap`, `BTreeMap` and (with the
//! default `im` feature) `im::HashMap`. [`MappingExt`] is blanket-implemented
//! for every `KeyedMap`.
//!
//! ## Conflict policy
//!
//! Whenever several maps contribute the same key, the value from the
//! rightmost map wins. The receiver is always the leftmost, lowest-priority
//! input.
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use collection_ext::mapping::MappingExt;
//!
//! let base: HashMap<_, _> = HashMap::from_pairs([("a", 1), ("b", 2)]);
//! let patch: HashMap<_, _> = HashMap::from_pairs([("b", 3), ("c", 4)]);
//!
//! let merged = base.union(&patch);
//! assert_eq!(merged, HashMap::from([("a", 1), ("b", 3), ("c", 4)]));
//!
//! // Inputs are untouched
//! assert_eq!(base.safe_get(&"b"), Some(&2));
//! ```

use std::collections::{BTreeMap, HashMap, btree_map, hash_map};
use std::hash::{BuildHasher, Hash};

/// The minimal keyed-container surface the extensions are written against.
///
/// Method names deliberately differ from the inherent `get`/`insert`/
/// `remove` so implementations can forward to them without recursion.
pub trait KeyedMap: Sized {
    /// Key type. Keys are unique within a map.
    type Key;
    /// Value type.
    type Value;
    /// Borrowing iterator over entries in the map's native order.
    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Looks up `key`.
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Inserts or overwrites `key`, returning the previous value.
    fn store(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Removes `key`, returning its value if it was present.
    fn discard(&mut self, key: &Self::Key) -> Option<Self::Value>;

    /// Iterates over all entries.
    fn entries(&self) -> Self::Iter<'_>;

    /// Number of entries.
    fn size(&self) -> usize;
}

impl<K, V, S> KeyedMap for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;
    type Iter<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn store(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn discard(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn entries(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K: Ord, V> KeyedMap for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Iter<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn store(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn discard(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn entries(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

// Persistent map: `clone` is O(1) thanks to structural sharing, which makes
// the copying `union` cheap. Its inherent `union(self, other)` shadows the
// extension method, so callers write `MappingExt::union(&a, &b)`.
#[cfg(feature = "im")]
impl<K, V, S> KeyedMap for im::HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;
    type Iter<'a>
        = im::hashmap::Iter<'a, K, V>
    where
        Self: 'a;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn store(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn discard(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn entries(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// Extension methods available on every [`KeyedMap`].
pub trait MappingExt: KeyedMap {
    /// Builds a map by inserting `pairs` in order.
    ///
    /// A key that appears more than once keeps the value of its last pair.
    ///
    /// # Example
    /// ```
    /// use std::collections::BTreeMap;
    /// use collection_ext::mapping::MappingExt;
    ///
    /// let map: BTreeMap<_, _> = BTreeMap::from_pairs([("k", 1), ("j", 5), ("k", 2)]);
    /// assert_eq!(map.get("k"), Some(&2));
    /// assert_eq!(map.len(), 2);
    /// ```
    fn from_pairs<I>(pairs: I) -> Self
    where
        Self: Default,
        I: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        let mut map = Self::default();
        for (key, value) in pairs {
            map.store(key, value);
        }
        map
    }

    /// Plain key lookup, named to mirror [`SequenceExt::safe_get`] at call
    /// sites.
    ///
    /// [`SequenceExt::safe_get`]: crate::sequence::SequenceExt::safe_get
    fn safe_get(&self, key: &Self::Key) -> Option<&Self::Value> {
        self.lookup(key)
    }

    /// Assigns `value` to `key`; `None` removes the key.
    ///
    /// Returns the value previously stored under `key`.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    /// use collection_ext::mapping::MappingExt;
    ///
    /// let mut map = HashMap::from([("x", 1)]);
    /// assert_eq!(map.safe_set("y", Some(2)), None);
    /// assert_eq!(map.safe_set("x", None), Some(1));
    /// assert_eq!(map, HashMap::from([("y", 2)]));
    /// ```
    fn safe_set(&mut self, key: Self::Key, value: Option<Self::Value>) -> Option<Self::Value> {
        match value {
            Some(value) => self.store(key, value),
            None => self.discard(&key),
        }
    }

    /// Returns a new map holding every entry of `self` and `other`, with
    /// `other` winning on shared keys.
    #[must_use]
    fn union(&self, other: &Self) -> Self
    where
        Self: Clone,
        Self::Key: Clone,
        Self::Value: Clone,
    {
        self.union_all([other])
    }

    /// Returns a new map holding every entry of `self` and all of `others`.
    ///
    /// On a shared key the rightmost map in `others` wins; `self` has the
    /// lowest priority. An empty `others` yields a copy of `self`.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    /// use collection_ext::mapping::MappingExt;
    ///
    /// let a = HashMap::from([("k", 1), ("a", 1)]);
    /// let b = HashMap::from([("k", 2), ("b", 2)]);
    /// let c = HashMap::from([("k", 3)]);
    ///
    /// let all = a.union_all([&b, &c]);
    /// assert_eq!(all, HashMap::from([("k", 3), ("a", 1), ("b", 2)]));
    /// ```
    #[must_use]
    fn union_all<'a, I>(&self, others: I) -> Self
    where
        Self: Clone + 'a,
        Self::Key: Clone,
        Self::Value: Clone,
        I: IntoIterator<Item = &'a Self>,
    {
        let mut result = self.clone();
        result.form_union_all(others);
        result
    }

    /// Merges `other` into `self`, overwriting shared keys.
    fn form_union(&mut self, other: &Self)
    where
        Self::Key: Clone,
        Self::Value: Clone,
    {
        self.form_union_all([other]);
    }

    /// Merges each of `others` into `self` in order; later maps overwrite
    /// earlier ones and all of them overwrite `self`.
    fn form_union_all<'a, I>(&mut self, others: I)
    where
        Self: 'a,
        Self::Key: Clone,
        Self::Value: Clone,
        I: IntoIterator<Item = &'a Self>,
    {
        let mut merged = 0usize;
        for other in others {
            for (key, value) in other.entries() {
                self.store(key.clone(), value.clone());
            }
            merged += 1;
        }

        #[cfg(feature = "tracing-integration")]
        tracing::trace!(merged, size = self.size(), "maps merged in place");
        #[cfg(not(feature = "tracing-integration"))]
        let _ = merged;
    }

    /// Moves every entry of `other` into `self`, overwriting shared keys.
    ///
    /// Same policy as [`form_union`](MappingExt::form_union) without cloning.
    fn absorb(&mut self, other: Self)
    where
        Self: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        for (key, value) in other {
            self.store(key, value);
        }

        #[cfg(feature = "tracing-integration")]
        tracing::trace!(size = self.size(), "map absorbed");
    }

    /// Builds a map with the same keys and each value replaced by
    /// `f(key, value)`. The output container is chosen by the caller.
    ///
    /// `f` runs exactly once per entry.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    /// use collection_ext::mapping::MappingExt;
    ///
    /// let prices = HashMap::from([("tea", 3), ("cake", 5)]);
    /// let labels: HashMap<_, _> = prices.map_values(|item, cents| format!("{item}: {cents}"));
    /// assert_eq!(labels[&"cake"], "cake: 5");
    /// ```
    fn map_values<W, Out, F>(&self, mut f: F) -> Out
    where
        Self::Key: Clone,
        F: FnMut(&Self::Key, &Self::Value) -> W,
        Out: FromIterator<(Self::Key, W)>,
    {
        self.entries()
            .map(|(key, value)| (key.clone(), f(key, value)))
            .collect()
    }

    /// Fallible [`map_values`](MappingExt::map_values): stops at the first
    /// error from `f` and returns it unchanged.
    ///
    /// # Example
    /// ```
    /// use std::collections::BTreeMap;
    /// use collection_ext::mapping::MappingExt;
    ///
    /// let raw = BTreeMap::from([("a", "1"), ("b", "2")]);
    /// let parsed: Result<BTreeMap<_, i32>, _> = raw.try_map_values(|_, v| v.parse());
    /// assert_eq!(parsed.unwrap()[&"b"], 2);
    ///
    /// let bad = BTreeMap::from([("a", "1"), ("b", "two")]);
    /// let parsed: Result<BTreeMap<_, i32>, _> = bad.try_map_values(|_, v| v.parse());
    /// assert!(parsed.is_err());
    /// ```
    fn try_map_values<W, E, Out, F>(&self, mut f: F) -> Result<Out, E>
    where
        Self::Key: Clone,
        F: FnMut(&Self::Key, &Self::Value) -> Result<W, E>,
        Out: FromIterator<(Self::Key, W)>,
    {
        self.entries()
            .map(|(key, value)| f(key, value).map(|mapped| (key.clone(), mapped)))
            .collect()
    }

    /// Collects `f(key, value)` for every entry.
    ///
    /// The result follows the map's iteration order: key order for
    /// `BTreeMap`, unspecified (and not stable across calls) for hash maps.
    ///
    /// # Example
    /// ```
    /// use std::collections::BTreeMap;
    /// use collection_ext::mapping::MappingExt;
    ///
    /// let ages = BTreeMap::from([("ann", 31), ("bo", 27)]);
    /// assert_eq!(ages.to_vec_with(|name, age| format!("{name}={age}")), vec!["ann=31", "bo=27"]);
    /// ```
    fn to_vec_with<W, F>(&self, mut f: F) -> Vec<W>
    where
        F: FnMut(&Self::Key, &Self::Value) -> W,
    {
        self.entries().map(|(key, value)| f(key, value)).collect()
    }

    /// Fallible [`to_vec_with`](MappingExt::to_vec_with).
    fn try_to_vec_with<W, E, F>(&self, mut f: F) -> Result<Vec<W>, E>
    where
        F: FnMut(&Self::Key, &Self::Value) -> Result<W, E>,
    {
        self.entries().map(|(key, value)| f(key, value)).collect()
    }
}

impl<M: KeyedMap> MappingExt for M {}
