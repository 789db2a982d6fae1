//! Item Id Allocation
//!
//! Ids are derived from the wall clock (milliseconds) but never repeat.

use crate::models::{Item, ItemId};

/// Hands out fresh, strictly increasing item ids
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    /// Start above every id already present in `items`
    pub fn seeded_from(items: &[Item]) -> Self {
        Self {
            last: items.iter().map(|item| item.id.0).max().unwrap_or(0),
        }
    }

    /// Next id: the timestamp itself unless it would collide or go backwards
    pub fn allocate(&mut self, now_ms: u64) -> ItemId {
        let id = now_ms.max(self.last + 1);
        self.last = id;
        ItemId(id)
    }
}

/// Current browser time in milliseconds
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
