//! Equipment slots, item definitions and the per-character loadout.

use strum::IntoEnumIterator;

use super::profile::StatDelta;
use crate::types::ItemId;

/// Body slot an item occupies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipmentSlot {
    Weapon,
    Helmet,
    Armor,
    Gloves,
    Boots,
    Trousers,
}

impl EquipmentSlot {
    pub const COUNT: usize = 6;

    const fn index(self) -> usize {
        match self {
            Self::Weapon => 0,
            Self::Helmet => 1,
            Self::Armor => 2,
            Self::Gloves => 3,
            Self::Boots => 4,
            Self::Trousers => 5,
        }
    }
}

/// An item that can be worn in exactly one slot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItem {
    pub id: ItemId,
    pub name: String,
    pub slot: EquipmentSlot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: StatDelta,
}

impl EquippedItem {
    pub fn new(id: ItemId, name: impl Into<String>, slot: EquipmentSlot, bonuses: StatDelta) -> Self {
        Self {
            id,
            name: name.into(),
            slot,
            bonuses,
        }
    }
}

/// Items currently worn by a character, at most one per slot.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    slots: [Option<EquippedItem>; EquipmentSlot::COUNT],
}

impl Loadout {
    /// A loadout with every slot empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&EquippedItem> {
        self.slots[slot.index()].as_ref()
    }

    /// Put `item` into its slot.
    ///
    /// Returns the new loadout together with the item that previously
    /// occupied the slot, if any.
    #[must_use]
    pub fn equip(&self, item: EquippedItem) -> (Self, Option<EquippedItem>) {
        let mut next = self.clone();
        let displaced = next.slots[item.slot.index()].replace(item);
        (next, displaced)
    }

    /// Empty `slot`, returning the new loadout and the removed item.
    #[must_use]
    pub fn unequip(&self, slot: EquipmentSlot) -> (Self, Option<EquippedItem>) {
        let mut next = self.clone();
        let removed = next.slots[slot.index()].take();
        (next, removed)
    }

    /// Worn items in slot declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &EquippedItem> + '_ {
        EquipmentSlot::iter().filter_map(|slot| self.get(slot))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
