//! Data structures for Affinity.
//! FxHashMap, SmallVec, BTreeMap re-exports and dense ID types.

pub mod collections;
pub mod identifiers;

pub use collections::{FxHashMap, FxHashSet};
pub use identifiers::ItemId;
