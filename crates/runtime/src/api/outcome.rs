//! Values returned by [`RuntimeHandle`](super::RuntimeHandle) operations.
use serde::Serialize;

use game_core::{
    CombatProfile, EnemyId, FightPhase, LevelUp, LocationId, LootRoll, TravelPhase,
    TravelSession, TurnReport,
};

/// What a victory paid out.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rewards {
    pub loot: LootRoll,
    pub experience: u64,
    pub level_up: LevelUp,
}

/// Result of one `attack` call: the player's turn and, while the fight is
/// still open, the enemy's reply.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttackOutcome {
    pub enemy: EnemyId,
    pub player_turn: TurnReport,
    pub enemy_turn: Option<TurnReport>,
    pub phase: FightPhase,
    pub player: CombatProfile,
    pub opponent: CombatProfile,
    /// Present only on the turn the fight is won.
    pub rewards: Option<Rewards>,
}

/// Where a player is, observed at a given time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LocationStatus {
    pub location: LocationId,
    pub phase: TravelPhase,
    pub destination: Option<LocationId>,
    pub remaining_secs: u64,
    pub session: TravelSession,
}
