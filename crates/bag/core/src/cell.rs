//! Base inventory slot record.
//!
//! A [`BagCell`] stores exactly one `(item_id, item_count)` pair. It never
//! validates what it is given: stacking limits, "empty slot" canonicalization
//! and item-definition lookups are policy of the inventory that owns the cell.

use core::fmt;

/// Contents of a single bag slot: which item it holds and how many.
///
/// Item id `0` is the conventional "nothing here" marker, but the cell does
/// not tie the two fields together. `(0, 99)` is a perfectly storable value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BagCell {
    item_id: u32,
    item_count: u32,
}

impl BagCell {
    /// Item id conventionally used by owners to mark an unoccupied slot.
    pub const EMPTY_ITEM_ID: u32 = 0;

    /// A cell holding `(0, 0)`, identical to [`BagCell::default`].
    pub const EMPTY: Self = Self::new();

    /// Creates a zeroed cell.
    pub const fn new() -> Self {
        Self {
            item_id: Self::EMPTY_ITEM_ID,
            item_count: 0,
        }
    }

    /// Creates a cell already holding `item_count` of `item_id`.
    pub const fn with_item(item_id: u32, item_count: u32) -> Self {
        Self {
            item_id,
            item_count,
        }
    }

    #[inline]
    pub const fn item_id(&self) -> u32 {
        self.item_id
    }

    /// Stores `item_id` as-is. The item count is left untouched.
    pub fn set_item_id(&mut self, item_id: u32) {
        tracing::trace!(old = self.item_id, new = item_id, "bag cell item id set");
        self.item_id = item_id;
    }

    #[inline]
    pub const fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Stores `item_count` as-is. The item id is left untouched.
    pub fn set_item_count(&mut self, item_count: u32) {
        tracing::trace!(
            item_id = self.item_id,
            old = self.item_count,
            new = item_count,
            "bag cell item count set"
        );
        self.item_count = item_count;
    }

    /// Returns true if both fields still hold their constructed values.
    ///
    /// This is a structural check only. Whether `(0, n)` or `(id, 0)` counts
    /// as an empty slot is up to the owning inventory.
    #[inline]
    pub const fn is_vacant(&self) -> bool {
        self.item_id == Self::EMPTY_ITEM_ID && self.item_count == 0
    }
}

impl fmt::Display for BagCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{} x{}", self.item_id, self.item_count)
    }
}
