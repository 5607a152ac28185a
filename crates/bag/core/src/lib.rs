//! Inventory slot value types for the game server.
//!
//! `bag-core` defines [`BagCell`], the `(item_id, item_count)` record stored in
//! every bag slot, and [`BagSlot`], which attaches kind-specific attributes
//! for equipped gear and pets. The types are passive: capacity, stacking and
//! validation rules belong to the inventory manager that owns the slots, and
//! persistence or network layers pick their own encodings through the `serde`
//! derives.
//!
//! None of the types synchronize access. Owners serialize mutation, usually
//! with one lock or one task per inventory.
pub mod cell;
pub mod error;
#[cfg(feature = "serde")]
pub mod root;
pub mod slot;

pub use cell::BagCell;
pub use error::{BagError, ErrorSeverity, SlotError};
#[cfg(feature = "serde")]
pub use root::cells_root;
pub use slot::{BagSlot, EquipAttributes, PetAttributes, SlotExtension, SlotKind};
