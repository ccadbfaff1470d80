//! # Sequence Extensions
//!
//! Bounds-checked access, equality search and in-place shuffling for any
//! contiguous sequence. The trait is implemented on `[T]`, so `Vec<T>`,
//! arrays and boxed slices pick it up through deref.
//!
//! ## Example
//!
//! ```
//! use collection_ext::sequence::SequenceExt;
//!
//! let fruits = vec!["apple", "banana", "cherry"];
//!
//! assert_eq!(fruits.safe_get(1), Some(&"banana"));
//! assert_eq!(fruits.safe_get(3), None);
//! assert_eq!(fruits.safe_get(-1), None);
//!
//! assert_eq!(fruits.index_of(&"cherry"), Some(2));
//! assert_eq!(fruits.find_equal(&"grape"), None);
//! ```

use rand::Rng;

/// Extension methods for ordered sequences.
///
/// None of the lookups panic: an index outside `[0, len)` or an item that
/// is not present yields `None`.
pub trait SequenceExt<T> {
    /// Returns the element at `index`, or `None` if `index` is out of bounds.
    ///
    /// The index may be any integer type. Negative values never convert to
    /// `usize` and therefore always return `None`.
    ///
    /// # Example
    /// ```
    /// use collection_ext::sequence::SequenceExt;
    /// let list = [10, 20, 30];
    /// assert_eq!(list.safe_get(0), Some(&10));
    /// assert_eq!(list.safe_get(3usize), None);
    /// assert_eq!(list.safe_get(-2i64), None);
    /// ```
    fn safe_get<I: TryInto<usize>>(&self, index: I) -> Option<&T>;

    /// Mutable counterpart of [`safe_get`](SequenceExt::safe_get).
    fn safe_get_mut<I: TryInto<usize>>(&mut self, index: I) -> Option<&mut T>;

    /// Index of the first element equal to `item`.
    ///
    /// Comparison goes through `PartialEq<U>`, so a `Vec<String>` can be
    /// searched with a `&str`.
    ///
    /// # Example
    /// ```
    /// use collection_ext::sequence::SequenceExt;
    /// let names = vec!["ada".to_string(), "bob".to_string(), "ada".to_string()];
    /// assert_eq!(names.index_of("ada"), Some(0));
    /// assert_eq!(names.index_of("eve"), None);
    /// ```
    fn index_of<U>(&self, item: &U) -> Option<usize>
    where
        T: PartialEq<U>,
        U: ?Sized;

    /// The first element equal to `item`, if any.
    fn find_equal<U>(&self, item: &U) -> Option<&T>
    where
        T: PartialEq<U>,
        U: ?Sized;

    /// Randomly permutes the sequence in place using the thread-local RNG.
    ///
    /// See [`shuffle_with`](SequenceExt::shuffle_with) for the algorithm.
    fn shuffle(&mut self);

    /// Randomly permutes the sequence in place with a Fisher-Yates shuffle.
    ///
    /// Walks `i` from `len - 1` down to `1`, drawing `j` uniformly from
    /// `0..=i` and swapping `i` and `j` when they differ. Every one of the
    /// `len!` permutations is equally likely given a uniform `rng`.
    ///
    /// # Example
    /// ```
    /// use collection_ext::sequence::SequenceExt;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut deck: Vec<u32> = (1..=10).collect();
    /// deck.shuffle_with(&mut StdRng::seed_from_u64(7));
    ///
    /// let mut sorted = deck.clone();
    /// sorted.sort_unstable();
    /// assert_eq!(sorted, (1..=10).collect::<Vec<_>>());
    /// ```
    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R);
}

impl<T> SequenceExt<T> for [T] {
    #[inline]
    fn safe_get<I: TryInto<usize>>(&self, index: I) -> Option<&T> {
        index.try_into().ok().and_then(|i| self.get(i))
    }

    #[inline]
    fn safe_get_mut<I: TryInto<usize>>(&mut self, index: I) -> Option<&mut T> {
        index.try_into().ok().and_then(move |i| self.get_mut(i))
    }

    fn index_of<U>(&self, item: &U) -> Option<usize>
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        self.iter().position(|x| x == item)
    }

    fn find_equal<U>(&self, item: &U) -> Option<&T>
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        self.index_of(item).map(|i| &self[i])
    }

    fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut swaps = 0usize;
        for i in (1..self.len()).rev() {
            let j = rng.random_range(0..=i);
            if j != i {
                self.swap(i, j);
                swaps += 1;
            }
        }

        #[cfg(feature = "tracing-integration")]
        tracing::trace!(len = self.len(), swaps, "sequence shuffled");
        #[cfg(not(feature = "tracing-integration"))]
        let _ = swaps;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn test_safe_get_bounds() {
        let list = vec!['a', 'b', 'c'];
        assert_eq!(list.safe_get(0), Some(&'a'));
        assert_eq!(list.safe_get(2), Some(&'c'));
        assert_eq!(list.safe_get(3), None);
        assert_eq!(list.safe_get(usize::MAX), None);
        assert_eq!(list.safe_get(-1), None);
        assert_eq!(list.safe_get(i64::MIN), None);
    }

    #[test]
    fn test_safe_get_empty() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(empty.safe_get(0), None);
    }

    #[test]
    fn test_safe_get_mut() {
        let mut list = vec![1, 2, 3];
        if let Some(x) = list.safe_get_mut(1) {
            *x = 20;
        }
        assert!(list.safe_get_mut(-1).is_none());
        assert!(list.safe_get_mut(5).is_none());
        assert_eq!(list, vec![1, 20, 3]);
    }

    #[test]
    fn test_index_of_first_match() {
        let list = vec![3, 1, 4, 1, 5];
        assert_eq!(list.index_of(&1), Some(1));
        assert_eq!(list.index_of(&5), Some(4));
        assert_eq!(list.index_of(&9), None);
    }

    #[test]
    fn test_index_of_across_types() {
        let words = vec![String::from("x"), String::from("y")];
        assert_eq!(words.index_of("y"), Some(1));
        assert_eq!(words.find_equal("x"), Some(&String::from("x")));
        assert_eq!(words.find_equal("z"), None);
    }

    #[test]
    fn test_find_equal_returns_stored_element() {
        #[derive(Debug)]
        struct Tagged {
            key: u8,
            tag: &'static str,
        }
        impl PartialEq<u8> for Tagged {
            fn eq(&self, other: &u8) -> bool {
                self.key == *other
            }
        }

        let items = [
            Tagged { key: 1, tag: "first" },
            Tagged { key: 2, tag: "second" },
            Tagged { key: 1, tag: "third" },
        ];
        assert_eq!(items.find_equal(&1u8).map(|t| t.tag), Some("first"));
        assert_eq!(items.find_equal(&2u8).map(|t| t.tag), Some("second"));
        assert!(items.find_equal(&3u8).is_none());
    }

    #[test]
    fn test_shuffle_small_sequences() {
        let mut empty: Vec<u8> = Vec::new();
        empty.shuffle();
        assert!(empty.is_empty());

        let mut single = vec![42];
        single.shuffle();
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_shuffle_is_reproducible_with_seed() {
        let mut a: Vec<u32> = (0..32).collect();
        let mut b = a.clone();
        a.shuffle_with(&mut StdRng::seed_from_u64(2024));
        b.shuffle_with(&mut StdRng::seed_from_u64(2024));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_permutation_frequencies() {
        // 6 permutations of 3 elements, expected 10_000 hits each.
        // One standard deviation is about 91, so 500 is a wide margin.
        let trials = 60_000;
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut counts: HashMap<[u8; 3], u32> = HashMap::new();

        for _ in 0..trials {
            let mut perm = [0u8, 1, 2];
            perm.shuffle_with(&mut rng);
            *counts.entry(perm).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 6);
        for (perm, count) in &counts {
            assert!(
                count.abs_diff(10_000) < 500,
                "permutation {perm:?} drawn {count} times"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_safe_get_matches_indexing(list in prop::collection::vec(any::<i32>(), 0..64), index in -8i64..80) {
            let expected = if index >= 0 && (index as usize) < list.len() {
                Some(&list[index as usize])
            } else {
                None
            };
            prop_assert_eq!(list.safe_get(index), expected);
        }

        #[test]
        fn prop_index_of_is_lowest_match(list in prop::collection::vec(0u8..8, 0..64), item in 0u8..8) {
            match list.index_of(&item) {
                Some(i) => {
                    prop_assert_eq!(list[i], item);
                    prop_assert!(list[..i].iter().all(|x| *x != item));
                }
                None => prop_assert!(!list.contains(&item)),
            }
        }

        #[test]
        fn prop_shuffle_preserves_multiset(list in prop::collection::vec(any::<u16>(), 0..128), seed in any::<u64>()) {
            let mut shuffled = list.clone();
            shuffled.shuffle_with(&mut StdRng::seed_from_u64(seed));

            let mut before = list;
            let mut after = shuffled;
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }
    }
}
