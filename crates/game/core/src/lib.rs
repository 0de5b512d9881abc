//! Deterministic combat and travel rules shared by the runtime and tools.
//!
//! `game-core` defines the canonical rules of the game backend and exposes
//! pure APIs: stat aggregation, attack resolution, loot rolls, experience
//! accounting, world graph construction, shortest paths and the travel state
//! machine. Nothing in here reads the clock or a hidden RNG; both are supplied
//! by the caller through [`Timestamp`] and [`RandomSource`].
pub mod account;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod loot;
pub mod progression;
pub mod stats;
pub mod types;
pub mod world;

pub use account::{AccountRecords, Wallet};
pub use combat::{
    AttackResolution, DamageType, Fight, FightError, FightPhase, Side, TurnReport, TurnResult,
    resolve_attack,
};
pub use config::GameConfig;
pub use env::{EnemyOracle, EnemyTemplate, ItemOracle, PcgRng, RandomSource, ScriptedRolls};
pub use error::{ErrorCategory, GameError};
pub use loot::{LootEntry, LootRoll, LootTable, roll_loot};
pub use progression::{ExperienceLedger, LevelTable, LevelUp, ProgressionError, add_experience};
pub use stats::{CombatProfile, EquipmentSlot, EquippedItem, Loadout, StatDelta, aggregate};
pub use types::{EnemyId, ItemId, Timestamp, UserId};
pub use world::{
    Coordinate, LocationId, LocationNode, PathCost, ShortestPath, TravelContext, TravelError,
    TravelPhase, TravelSession, WorldError, WorldGraph, begin_travel, can_move, complete_arrival,
    shortest_path,
};
