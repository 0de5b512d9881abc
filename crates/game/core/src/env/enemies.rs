//! Enemy template definitions and oracle interface.
//!
//! Templates are data-driven (loaded from RON) and describe everything a fight
//! needs about an opponent: its combat profile, its drop table and the
//! experience granted when it is defeated.

use crate::loot::LootTable;
use crate::stats::CombatProfile;
use crate::types::EnemyId;

/// Static description of an enemy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: EnemyId,
    pub name: String,
    pub level: u32,
    pub profile: CombatProfile,
    #[cfg_attr(feature = "serde", serde(default))]
    pub loot: LootTable,
    #[cfg_attr(feature = "serde", serde(default))]
    pub experience_reward: u64,
}

impl EnemyTemplate {
    pub fn new(id: EnemyId, name: impl Into<String>, level: u32, profile: CombatProfile) -> Self {
        Self {
            id,
            name: name.into(),
            level,
            profile,
            loot: LootTable::default(),
            experience_reward: 0,
        }
    }

    #[must_use]
    pub fn with_loot(mut self, loot: LootTable) -> Self {
        self.loot = loot;
        self
    }

    #[must_use]
    pub fn with_experience_reward(mut self, experience: u64) -> Self {
        self.experience_reward = experience;
        self
    }
}

/// Oracle providing enemy templates by id.
pub trait EnemyOracle: Send + Sync {
    fn template(&self, id: EnemyId) -> Option<EnemyTemplate>;
}
