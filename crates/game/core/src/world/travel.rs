//! Per-player travel state machine.
//!
//! ```text
//!   Stationary ──begin_travel──▶ InTransit ──(now ≥ travel_time)──▶ Stationary
//! ```
//!
//! The phase is never stored. It is derived from the arrival timestamp and the
//! caller's `now`, so a session at rest is simply one whose arrival lies in
//! the past. The location field changes only when the caller observes the
//! arrival through [`complete_arrival`].

use crate::config::GameConfig;
use crate::error::{ErrorCategory, GameError};
use crate::types::{Timestamp, UserId};

use super::graph::WorldGraph;
use super::location::LocationId;
use super::path::{PathCost, shortest_path};

/// Errors raised by [`begin_travel`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TravelError {
    #[error("unknown location {id}")]
    UnknownLocation { id: LocationId },

    #[error("no path from {from} to {to}")]
    NoPathAvailable { from: LocationId, to: LocationId },

    #[error("still traveling until {arrives_at}")]
    StillTraveling { arrives_at: Timestamp },

    #[error("{location} requires level {required}, traveler is level {actual}")]
    LevelTooLow {
        location: LocationId,
        required: u32,
        actual: u32,
    },
}

impl GameError for TravelError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::NoPathAvailable { .. } => ErrorCategory::Unreachable,
            Self::UnknownLocation { .. }
            | Self::StillTraveling { .. }
            | Self::LevelTooLow { .. } => ErrorCategory::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownLocation { .. } => "TRAVEL_UNKNOWN_LOCATION",
            Self::NoPathAvailable { .. } => "TRAVEL_NO_PATH",
            Self::StillTraveling { .. } => "TRAVEL_STILL_TRAVELING",
            Self::LevelTooLow { .. } => "TRAVEL_LEVEL_TOO_LOW",
        }
    }
}

/// Derived travel phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TravelPhase {
    Stationary,
    InTransit,
}

/// A player's position and pending move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelSession {
    pub user: UserId,
    /// Last location the player arrived at.
    pub current_location: LocationId,
    /// Target of the latest journey, until its arrival is applied.
    pub destination: Option<LocationId>,
    pub start_travel_time: Timestamp,
    /// Arrival time of the latest journey.
    pub travel_time: Timestamp,
}

impl TravelSession {
    /// A session at rest at `location`.
    pub fn new(user: UserId, location: LocationId, now: Timestamp) -> Self {
        Self {
            user,
            current_location: location,
            destination: None,
            start_travel_time: now,
            travel_time: now,
        }
    }

    pub fn phase(&self, now: Timestamp) -> TravelPhase {
        if can_move(self, now) {
            TravelPhase::Stationary
        } else {
            TravelPhase::InTransit
        }
    }

    /// Seconds left until arrival, zero once arrived.
    pub fn remaining_secs(&self, now: Timestamp) -> u64 {
        self.travel_time
            .as_secs()
            .saturating_sub(now.as_secs())
            .max(0) as u64
    }
}

/// Inputs shared by every travel request.
#[derive(Clone, Copy, Debug)]
pub struct TravelContext<'a> {
    pub world: &'a WorldGraph,
    pub config: &'a GameConfig,
    pub traveler_level: u32,
    pub now: Timestamp,
}

/// True once the session's arrival time has passed.
pub fn can_move(session: &TravelSession, now: Timestamp) -> bool {
    now >= session.travel_time
}

/// Apply a pending arrival if it has happened.
///
/// Idempotent, and a no-op while the session is still in transit.
#[must_use]
pub fn complete_arrival(session: &TravelSession, now: Timestamp) -> TravelSession {
    match session.destination {
        Some(destination) if can_move(session, now) => TravelSession {
            current_location: destination,
            destination: None,
            ..*session
        },
        _ => *session,
    }
}

/// Start a journey to `target`.
///
/// The route starts from the session's effective location: if a previous
/// journey has already arrived, its destination is the new origin. On success
/// the returned session carries `start_travel_time = now` and
/// `travel_time = now + hops × seconds_per_hop`; `current_location` is not
/// moved.
pub fn begin_travel(
    session: &TravelSession,
    target: LocationId,
    ctx: &TravelContext<'_>,
) -> Result<TravelSession, TravelError> {
    if !can_move(session, ctx.now) {
        return Err(TravelError::StillTraveling {
            arrives_at: session.travel_time,
        });
    }

    let node = ctx
        .world
        .node(target)
        .ok_or(TravelError::UnknownLocation { id: target })?;
    if ctx.traveler_level < node.level_required {
        return Err(TravelError::LevelTooLow {
            location: target,
            required: node.level_required,
            actual: ctx.traveler_level,
        });
    }

    let origin = complete_arrival(session, ctx.now);
    let route = shortest_path(ctx.world, origin.current_location, target);
    let hops = match route.cost {
        PathCost::Hops(hops) => hops,
        PathCost::Unreachable => {
            return Err(TravelError::NoPathAvailable {
                from: origin.current_location,
                to: target,
            });
        }
    };

    let duration = ctx.config.travel_seconds(hops);
    Ok(TravelSession {
        destination: Some(target),
        start_travel_time: ctx.now,
        travel_time: ctx.now.plus_secs(duration),
        ..origin
    })
}
