//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec optimized for itemsets (usually <4 items).
pub type SmallVec4<T> = SmallVec<[T; 4]>;

/// SmallVec optimized for bitset words (universes up to 512 items inline).
pub type SmallVec8<T> = SmallVec<[T; 8]>;
