//! # collection-ext
//!
//! Small convenience extensions for Rust's sequence and map types.
//!
//! ## Modules
//!
//! - [`sequence`]: bounds-checked access, equality search and Fisher-Yates
//!   shuffling for slices (and everything that derefs to one)
//! - [`mapping`]: construction from pairs, right-biased union and per-entry
//!   transforms for `HashMap`, `BTreeMap` and `im::HashMap`
//! - [`ops`]: `|` / `|=` union operators through the [`Merge`] wrapper
//!
//! ## Design Principles
//!
//! 1. **Absent over error**: lookups return `Option`, never panic
//! 2. **Right-biased merging**: later maps win on shared keys, the receiver
//!    has the lowest priority
//! 3. **Caller errors pass through**: `try_*` transforms return the
//!    closure's own error type untouched
//! 4. **Injectable randomness**: `shuffle_with` accepts any `rand::Rng`
//!
//! ## Features
//!
//! - `im` (default): map extensions for `im::HashMap`
//! - `tracing-integration`: `trace`-level events from shuffle and in-place
//!   union
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use collection_ext::prelude::*;
//!
//! let mut queue = vec![1, 2, 3, 4];
//! queue.shuffle();
//! assert_eq!(queue.len(), 4);
//! assert!(queue.find_equal(&3).is_some());
//!
//! let totals = HashMap::from([("a", 1), ("b", 2)]);
//! let bumped: HashMap<_, _> = totals.map_values(|_, v| v + 10);
//! assert_eq!(bumped.safe_get(&"b"), Some(&12));
//! ```

pub mod mapping;
pub mod ops;
pub mod sequence;

pub use mapping::{KeyedMap, MappingExt};
pub use ops::Merge;
pub use sequence::SequenceExt;

/// Glob-importable re-exports of the extension traits and [`Merge`].
pub mod prelude {
    pub use crate::mapping::{KeyedMap, MappingExt};
    pub use crate::ops::Merge;
    pub use crate::sequence::SequenceExt;
}
