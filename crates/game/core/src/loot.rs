//! Weighted loot rolls.
//!
//! A [`LootTable`] lists `(item, rarity)` entries. Rolling draws one value and
//! walks the entries in their stored order, accumulating rarities until the
//! draw falls under the running sum. Rarities do not have to add up to one;
//! whatever remains below `1.0` is the chance of no drop at all.

use crate::env::RandomSource;
use crate::types::ItemId;

/// One possible drop.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootEntry {
    pub item: ItemId,
    /// Probability mass in `(0, 1]`.
    pub rarity: f64,
}

impl LootEntry {
    pub fn new(item: ItemId, rarity: f64) -> Self {
        Self { item, rarity }
    }
}

/// Ordered drop table of one enemy.
///
/// Entries keep insertion order, which is the order rolls consume them in.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LootTable {
    entries: Vec<LootEntry>,
}

impl LootTable {
    pub fn new(entries: impl IntoIterator<Item = LootEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Append an entry (builder pattern).
    #[must_use]
    pub fn with(mut self, item: ItemId, rarity: f64) -> Self {
        self.entries.push(LootEntry::new(item, rarity));
        self
    }

    pub fn entries(&self) -> &[LootEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every rarity; `1 - total` is the implicit no-drop chance.
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|entry| entry.rarity).sum()
    }

    /// Pick the entry selected by `roll`, if any.
    pub fn select(&self, roll: f64) -> Option<ItemId> {
        let mut cumulative = 0.0;
        for entry in &self.entries {
            cumulative += entry.rarity;
            if roll <= cumulative {
                return Some(entry.item);
            }
        }
        None
    }
}

/// Result of a loot roll.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootRoll {
    /// Dropped item, `None` for no drop.
    pub item: Option<ItemId>,
    /// The uniform draw that decided the result.
    pub roll: f64,
}

impl LootRoll {
    pub fn dropped(&self) -> bool {
        self.item.is_some()
    }
}

/// Roll a table once.
///
/// Exactly one draw is consumed, including for an empty table.
pub fn roll_loot(table: &LootTable, rng: &mut (impl RandomSource + ?Sized)) -> LootRoll {
    let roll = rng.next_unit();
    LootRoll {
        item: table.select(roll),
        roll,
    }
}
