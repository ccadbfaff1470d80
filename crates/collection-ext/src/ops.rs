//! # Union Operators
//!
//! `|` and `|=` for maps, through the [`Merge`] wrapper. The orphan rule
//! rules out implementing `BitOr` on `HashMap` itself, so the left-hand side
//! is wrapped once and unwrapped at the end.
//!
//! Semantics match [`MappingExt::union`] and [`MappingExt::form_union`]: the
//! right-hand operand wins on shared keys.
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use collection_ext::ops::Merge;
//!
//! let defaults = HashMap::from([("color", "red"), ("size", "m")]);
//! let user = HashMap::from([("size", "l")]);
//!
//! let settings = (Merge(defaults) | user).into_inner();
//! assert_eq!(settings, HashMap::from([("color", "red"), ("size", "l")]));
//!
//! let mut acc = Merge(HashMap::from([("x", 1)]));
//! acc |= HashMap::from([("x", 2), ("y", 3)]);
//! assert_eq!(*acc, HashMap::from([("x", 2), ("y", 3)]));
//! ```

use std::ops::{BitOr, BitOrAssign, Deref, DerefMut};

use crate::mapping::{KeyedMap, MappingExt};

/// A map that supports `|` (union) and `|=` (in-place union).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Merge<M>(pub M);

impl<M> Merge<M> {
    /// Unwraps the underlying map.
    #[must_use]
    pub fn into_inner(self) -> M {
        self.0
    }
}

impl<M> From<M> for Merge<M> {
    fn from(map: M) -> Self {
        Self(map)
    }
}

impl<M> Deref for Merge<M> {
    type Target = M;

    fn deref(&self) -> &M {
        &self.0
    }
}

impl<M> DerefMut for Merge<M> {
    fn deref_mut(&mut self) -> &mut M {
        &mut self.0
    }
}

/// Consuming union: entries of `rhs` are moved in.
impl<M> BitOr<M> for Merge<M>
where
    M: KeyedMap + IntoIterator<Item = (<M as KeyedMap>::Key, <M as KeyedMap>::Value)>,
{
    type Output = Merge<M>;

    fn bitor(mut self, rhs: M) -> Merge<M> {
        self.0.absorb(rhs);
        self
    }
}

/// Copying union: neither operand is modified.
impl<M> BitOr<&M> for &Merge<M>
where
    M: KeyedMap + Clone,
    M::Key: Clone,
    M::Value: Clone,
{
    type Output = Merge<M>;

    fn bitor(self, rhs: &M) -> Merge<M> {
        Merge(MappingExt::union(&self.0, rhs))
    }
}

impl<M> BitOrAssign<M> for Merge<M>
where
    M: KeyedMap + IntoIterator<Item = (<M as KeyedMap>::Key, <M as KeyedMap>::Value)>,
{
    fn bitor_assign(&mut self, rhs: M) {
        self.0.absorb(rhs);
    }
}

impl<M> BitOrAssign<&M> for Merge<M>
where
    M: KeyedMap,
    M::Key: Clone,
    M::Value: Clone,
{
    fn bitor_assign(&mut self, rhs: &M) {
        self.0.form_union(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_bitor_right_biased() {
        let merged = Merge(HashMap::from([("a", 1), ("b", 2)])) | HashMap::from([("b", 3), ("c", 4)]);
        assert_eq!(merged.into_inner(), HashMap::from([("a", 1), ("b", 3), ("c", 4)]));
    }

    #[test]
    fn test_bitor_chains_left_to_right() {
        let merged = Merge(BTreeMap::from([(1, "base")]))
            | BTreeMap::from([(1, "first"), (2, "first")])
            | BTreeMap::from([(2, "second")]);
        assert_eq!(*merged, BTreeMap::from([(1, "first"), (2, "second")]));
    }

    #[test]
    fn test_bitor_by_reference_keeps_operands() {
        let left = Merge(HashMap::from([("x", 1)]));
        let right = HashMap::from([("x", 2), ("y", 3)]);

        let merged = &left | &right;
        assert_eq!(*merged, right);
        assert_eq!(*left, HashMap::from([("x", 1)]));
    }

    #[test]
    fn test_bitor_assign() {
        let mut acc = Merge::from(HashMap::from([("x", 1)]));
        acc |= HashMap::from([("x", 2)]);
        let extra = HashMap::from([("y", 3)]);
        acc |= &extra;

        assert_eq!(acc.into_inner(), HashMap::from([("x", 2), ("y", 3)]));
        assert_eq!(extra.len(), 1);
    }

    #[test]
    fn test_deref_mut_reaches_map() {
        let mut acc: Merge<BTreeMap<u8, u8>> = Merge::default();
        acc.insert(1, 1);
        assert_eq!(acc.len(), 1);
    }
}
