//! Specialized slot kinds layered over [`BagCell`].
//!
//! Some slots carry more than an item id and a count: equipped gear tracks
//! durability, carried pets track their level. Rather than subclassing the
//! base record, a [`BagSlot`] pairs a plain [`BagCell`] with a closed
//! [`SlotExtension`] so slot storage stays flat and `Copy`.
//!
//! The extension never constrains the cell. Base accessors behave exactly as
//! they do on a bare cell, and swapping extensions leaves the cell untouched.

use core::ops::{Deref, DerefMut};

use crate::cell::BagCell;
use crate::error::SlotError;

/// Discriminant of [`SlotExtension`], used in errors and logs.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SlotKind {
    /// Ordinary stack of items
    #[default]
    Plain,
    /// Equipped gear
    Equipped,
    /// Carried pet
    Pet,
}

/// Extra state carried by equipped gear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipAttributes {
    pub durability: u32,
    pub enhance_level: u8,
}

impl EquipAttributes {
    pub fn new(durability: u32, enhance_level: u8) -> Self {
        Self {
            durability,
            enhance_level,
        }
    }
}

/// Extra state carried by a pet item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetAttributes {
    pub level: u16,
    pub experience: u32,
}

impl PetAttributes {
    pub fn new(level: u16, experience: u32) -> Self {
        Self { level, experience }
    }
}

/// Per-kind attributes attached to a slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotExtension {
    #[default]
    Plain,
    Equipped(EquipAttributes),
    Pet(PetAttributes),
}

impl SlotExtension {
    pub const fn kind(&self) -> SlotKind {
        match self {
            Self::Plain => SlotKind::Plain,
            Self::Equipped(_) => SlotKind::Equipped,
            Self::Pet(_) => SlotKind::Pet,
        }
    }
}

/// A bag cell together with its kind-specific attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BagSlot {
    cell: BagCell,
    extension: SlotExtension,
}

impl BagSlot {
    pub fn plain(cell: BagCell) -> Self {
        Self {
            cell,
            extension: SlotExtension::Plain,
        }
    }

    pub fn equipped(cell: BagCell, attributes: EquipAttributes) -> Self {
        Self {
            cell,
            extension: SlotExtension::Equipped(attributes),
        }
    }

    pub fn pet(cell: BagCell, attributes: PetAttributes) -> Self {
        Self {
            cell,
            extension: SlotExtension::Pet(attributes),
        }
    }

    pub fn cell(&self) -> &BagCell {
        &self.cell
    }

    pub fn cell_mut(&mut self) -> &mut BagCell {
        &mut self.cell
    }

    pub fn extension(&self) -> &SlotExtension {
        &self.extension
    }

    pub fn kind(&self) -> SlotKind {
        self.extension.kind()
    }

    /// Returns the equipment attributes if this is an equipped slot.
    pub fn equip(&self) -> Option<&EquipAttributes> {
        match &self.extension {
            SlotExtension::Equipped(attributes) => Some(attributes),
            _ => None,
        }
    }

    pub fn equip_mut(&mut self) -> Result<&mut EquipAttributes, SlotError> {
        match &mut self.extension {
            SlotExtension::Equipped(attributes) => Ok(attributes),
            other => Err(SlotError::KindMismatch {
                expected: SlotKind::Equipped,
                found: other.kind(),
            }),
        }
    }

    /// Returns the pet attributes if this is a pet slot.
    pub fn pet_attributes(&self) -> Option<&PetAttributes> {
        match &self.extension {
            SlotExtension::Pet(attributes) => Some(attributes),
            _ => None,
        }
    }

    pub fn pet_attributes_mut(&mut self) -> Result<&mut PetAttributes, SlotError> {
        match &mut self.extension {
            SlotExtension::Pet(attributes) => Ok(attributes),
            other => Err(SlotError::KindMismatch {
                expected: SlotKind::Pet,
                found: other.kind(),
            }),
        }
    }

    /// Replaces the extension, returning the previous one. The cell is not touched.
    pub fn set_extension(&mut self, extension: SlotExtension) -> SlotExtension {
        tracing::debug!(
            item_id = self.cell.item_id(),
            from = %self.extension.kind(),
            to = %extension.kind(),
            "bag slot extension replaced"
        );
        core::mem::replace(&mut self.extension, extension)
    }

    /// Turns this into a plain slot, returning the extension it carried.
    pub fn clear_extension(&mut self) -> SlotExtension {
        self.set_extension(SlotExtension::Plain)
    }
}

impl Deref for BagSlot {
    type Target = BagCell;

    fn deref(&self) -> &BagCell {
        &self.cell
    }
}

impl DerefMut for BagSlot {
    fn deref_mut(&mut self) -> &mut BagCell {
        &mut self.cell
    }
}

impl From<BagCell> for BagSlot {
    fn from(cell: BagCell) -> Self {
        Self::plain(cell)
    }
}

impl From<BagSlot> for BagCell {
    fn from(slot: BagSlot) -> Self {
        slot.cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_slot_is_plain_and_zeroed() {
        let slot = BagSlot::default();

        assert_eq!(slot.kind(), SlotKind::Plain);
        assert_eq!(slot.item_id(), 0);
        assert_eq!(slot.item_count(), 0);
    }

    #[test]
    fn base_accessors_pass_through() {
        let mut slot = BagSlot::equipped(BagCell::new(), EquipAttributes::new(100, 3));

        slot.set_item_id(2_000_000);
        slot.set_item_count(1);

        assert_eq!(slot.cell(), &BagCell::with_item(2_000_000, 1));
        assert_eq!(slot.equip(), Some(&EquipAttributes::new(100, 3)));
    }

    #[test]
    fn extension_change_keeps_cell() {
        let mut slot = BagSlot::equipped(BagCell::with_item(5, 1), EquipAttributes::new(80, 0));

        let previous = slot.set_extension(SlotExtension::Pet(PetAttributes::new(4, 1200)));

        assert_eq!(previous, SlotExtension::Equipped(EquipAttributes::new(80, 0)));
        assert_eq!(slot.kind(), SlotKind::Pet);
        assert_eq!(*slot.cell(), BagCell::with_item(5, 1));
    }

    #[test]
    fn clear_extension_makes_slot_plain() {
        let mut slot = BagSlot::pet(BagCell::with_item(9, 1), PetAttributes::new(2, 10));

        let previous = slot.clear_extension();

        assert_eq!(previous.kind(), SlotKind::Pet);
        assert_eq!(slot.kind(), SlotKind::Plain);
        assert_eq!(slot.pet_attributes(), None);
        assert_eq!(slot.item_id(), 9);
    }

    #[test]
    fn equip_mut_updates_attributes() {
        let mut slot = BagSlot::equipped(BagCell::with_item(3, 1), EquipAttributes::new(50, 0));

        slot.equip_mut().unwrap().durability = 49;

        assert_eq!(slot.equip().map(|a| a.durability), Some(49));
    }

    #[test]
    fn equip_mut_rejects_other_kinds() {
        let mut slot = BagSlot::plain(BagCell::with_item(3, 10));

        let err = slot.equip_mut().unwrap_err();

        assert_eq!(
            err,
            SlotError::KindMismatch {
                expected: SlotKind::Equipped,
                found: SlotKind::Plain,
            }
        );
    }

    #[test]
    fn pet_attributes_mut_rejects_equipped() {
        let mut slot = BagSlot::equipped(BagCell::new(), EquipAttributes::default());

        assert!(matches!(
            slot.pet_attributes_mut(),
            Err(SlotError::KindMismatch {
                expected: SlotKind::Pet,
                found: SlotKind::Equipped,
            })
        ));
    }

    #[test]
    fn slot_kind_parses_case_insensitively() {
        assert_eq!("EQUIPPED".parse::<SlotKind>().unwrap(), SlotKind::Equipped);
        assert_eq!(SlotKind::Pet.as_ref(), "pet");
        assert!("bank".parse::<SlotKind>().is_err());
    }

    #[test]
    fn converts_to_and_from_cell() {
        let cell = BagCell::with_item(11, 4);
        let slot: BagSlot = cell.into();

        assert_eq!(slot.kind(), SlotKind::Plain);
        assert_eq!(BagCell::from(slot), cell);
    }
}
