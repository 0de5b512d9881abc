//! Turn-alternating fight state machine.
//!
//! ```text
//!            player attacks, enemy survives
//! AwaitingUserTurn ───────────────────────▶ AwaitingEnemyTurn
//!        ▲                                         │
//!        └─────────────────────────────────────────┘
//!            enemy attacks, player survives
//!
//! enemy health reaches 0  ──▶ FightWon
//! player health reaches 0 ──▶ FightLost
//! ```
//!
//! A [`Fight`] is a value. Taking a turn returns a new fight instead of
//! mutating the current one, so the two combatants can never alias.

use crate::env::RandomSource;
use crate::error::{ErrorCategory, GameError};
use crate::stats::CombatProfile;

use super::result::{TurnResult, resolve_attack};

/// Combatant side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

/// Phase of a fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum FightPhase {
    AwaitingUserTurn,
    AwaitingEnemyTurn,
    FightWon,
    FightLost,
}

impl FightPhase {
    const fn awaiting(side: Side) -> Self {
        match side {
            Side::Player => Self::AwaitingUserTurn,
            Side::Enemy => Self::AwaitingEnemyTurn,
        }
    }

    /// Side expected to act, or `None` once the fight is over.
    pub const fn actor(self) -> Option<Side> {
        match self {
            Self::AwaitingUserTurn => Some(Side::Player),
            Self::AwaitingEnemyTurn => Some(Side::Enemy),
            Self::FightWon | Self::FightLost => None,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::FightWon | Self::FightLost)
    }
}

/// Errors raised by [`Fight::take_turn`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FightError {
    #[error("fight already ended ({phase})")]
    AlreadyFinished { phase: FightPhase },
}

impl GameError for FightError {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyFinished { .. } => "FIGHT_ALREADY_FINISHED",
        }
    }
}

/// Record of one resolved turn.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// One-based turn number.
    pub turn: u32,
    pub actor: Side,
    pub result: TurnResult,
    /// Phase after this turn.
    pub phase: FightPhase,
}

/// A single fight between the player and one enemy.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fight {
    player: CombatProfile,
    enemy: CombatProfile,
    phase: FightPhase,
    turns: u32,
}

impl Fight {
    /// Start a fight with the player acting first.
    pub fn new(player: CombatProfile, enemy: CombatProfile) -> Self {
        Self::starting_with(Side::Player, player, enemy)
    }

    /// Start a fight with `first` acting first.
    ///
    /// A combatant that enters with zero health has already lost.
    pub fn starting_with(first: Side, player: CombatProfile, enemy: CombatProfile) -> Self {
        let player = player.normalized();
        let enemy = enemy.normalized();
        let phase = if player.is_defeated() {
            FightPhase::FightLost
        } else if enemy.is_defeated() {
            FightPhase::FightWon
        } else {
            FightPhase::awaiting(first)
        };

        Self {
            player,
            enemy,
            phase,
            turns: 0,
        }
    }

    pub fn player(&self) -> &CombatProfile {
        &self.player
    }

    pub fn enemy(&self) -> &CombatProfile {
        &self.enemy
    }

    pub fn phase(&self) -> FightPhase {
        self.phase
    }

    /// Number of turns resolved so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Resolve the pending side's attack.
    ///
    /// Returns the next fight value and a report of the turn. The current
    /// fight is left untouched.
    pub fn take_turn(
        &self,
        rng: &mut (impl RandomSource + ?Sized),
    ) -> Result<(Fight, TurnReport), FightError> {
        let actor = self
            .phase
            .actor()
            .ok_or(FightError::AlreadyFinished { phase: self.phase })?;

        let mut next = *self;
        let result = match actor {
            Side::Player => {
                let resolution = resolve_attack(&self.player, &self.enemy, rng);
                next.enemy = resolution.defender;
                resolution.turn
            }
            Side::Enemy => {
                let resolution = resolve_attack(&self.enemy, &self.player, rng);
                next.player = resolution.defender;
                resolution.turn
            }
        };

        next.turns = self.turns.saturating_add(1);
        next.phase = match (actor, result.defender_defeated) {
            (Side::Player, true) => FightPhase::FightWon,
            (Side::Enemy, true) => FightPhase::FightLost,
            (side, false) => FightPhase::awaiting(side.opponent()),
        };

        let report = TurnReport {
            turn: next.turns,
            actor,
            result,
            phase: next.phase,
        };
        Ok((next, report))
    }
}
