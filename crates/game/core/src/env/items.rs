use crate::stats::EquippedItem;
use crate::types::ItemId;

/// Oracle providing equippable item definitions by id.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: ItemId) -> Option<EquippedItem>;
}
