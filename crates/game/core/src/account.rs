//! Records created for a new player account.
//!
//! Account creation is an explicit call made by the surrounding system, not a
//! side effect of persisting a user: [`AccountRecords::create`] returns every
//! dependent record a fresh player needs, and the caller stores them.

use crate::config::GameConfig;
use crate::progression::ExperienceLedger;
use crate::stats::{CombatProfile, Loadout};
use crate::types::{ItemId, Timestamp, UserId};
use crate::world::TravelSession;

/// Currency held by a player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wallet {
    pub gold: u32,
}

/// Everything persisted per player by the combat and travel engines.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountRecords {
    pub user: UserId,
    /// Base stats before equipment.
    pub base_profile: CombatProfile,
    pub loadout: Loadout,
    /// Items owned but not worn.
    pub inventory: Vec<ItemId>,
    pub wallet: Wallet,
    pub ledger: ExperienceLedger,
    pub travel: TravelSession,
}

impl AccountRecords {
    /// Base stats of a brand-new character.
    pub const STARTING_PROFILE: CombatProfile = CombatProfile {
        health: 100,
        armor: 0,
        magic_resist: 0,
        damage: 10,
        critical_hit_chance: 0.05,
        critical_hit_damage: 1.5,
    };

    /// Build the records for a new account.
    ///
    /// The character starts with an empty loadout at the configured level with
    /// no experience, holding the starting gold, parked at the default location.
    pub fn create(user: UserId, now: Timestamp, config: &GameConfig) -> Self {
        Self {
            user,
            base_profile: Self::STARTING_PROFILE,
            loadout: Loadout::empty(),
            inventory: Vec::new(),
            wallet: Wallet {
                gold: config.starting_gold,
            },
            ledger: ExperienceLedger::new(config.starting_level, 0),
            travel: TravelSession::new(user, config.default_location, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{LocationId, can_move};

    #[test]
    fn new_account_uses_configured_defaults() {
        let config = GameConfig::default().with_default_location(LocationId(3));
        let records = AccountRecords::create(UserId(1), Timestamp(500), &config);

        assert!(records.loadout.is_empty());
        assert!(records.inventory.is_empty());
        assert_eq!(records.wallet.gold, 100);
        assert_eq!(records.ledger, ExperienceLedger::new(1, 0));
        assert_eq!(records.travel.current_location, LocationId(3));
        assert_eq!(records.travel.destination, None);
        assert!(can_move(&records.travel, Timestamp(500)));
    }
}
