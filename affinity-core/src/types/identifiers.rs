//! Dense ID types for type-safe item indexing.
//!
//! `ItemId` wraps the item's position in the sorted universe. Using a
//! newtype instead of a bare `u32` prevents an item index from being
//! confused with a transaction row index.

use serde::{Deserialize, Serialize};

/// Dense index of an item in the sorted universe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Create a new ID from a dense index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the inner index.
    pub fn inner(self) -> u32 {
        self.0
    }

    /// The index as a `usize`, for slice access.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ItemId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl From<ItemId> for u32 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}
