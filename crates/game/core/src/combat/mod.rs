//! Combat resolution system.
//!
//! This module provides pure functions for resolving one attack exchange and
//! a value-typed [`Fight`] state machine that alternates turns between the
//! player and an enemy.
//!
//! # Architecture
//!
//! - **Pure Functions**: Resolution takes profiles by reference and returns new copies
//! - **Injectable randomness**: Every draw comes from a caller-supplied [`crate::RandomSource`]
//! - **Serialized turns**: One fight resolves at most one turn at a time; the caller owns the fight
//!
//! # Core Functions
//!
//! - `resolve_attack`: Complete attack resolution (critical roll + damage + health update)
//! - `check_critical`: Critical-hit decision for a drawn roll
//! - `calculate_damage`: Raw damage including the critical multiplier
//! - `mitigate`: Armor / magic resist reduction
//! - `apply_damage`: Health reduction (clamped to 0)

pub mod critical;
pub mod damage;
pub mod fight;
pub mod result;

pub use critical::check_critical;
pub use damage::{DamageType, apply_damage, calculate_damage, mitigate};
pub use fight::{Fight, FightError, FightPhase, Side, TurnReport};
pub use result::{AttackResolution, TurnResult, resolve_attack};
