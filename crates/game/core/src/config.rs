use crate::world::LocationId;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Seconds needed to cross one edge of the world graph.
    pub seconds_per_hop: u32,
    /// Location every new account starts at.
    pub default_location: LocationId,
    /// Level assigned to new accounts.
    pub starting_level: u32,
    /// Gold assigned to new accounts.
    pub starting_gold: u32,
    /// Highest reachable level. `None` leaves progression unbounded.
    pub level_cap: Option<u32>,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum neighbors of a location on the 4-directional grid.
    pub const MAX_NEIGHBORS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SECONDS_PER_HOP: u32 = 60;
    pub const DEFAULT_LOCATION: LocationId = LocationId(1);
    pub const DEFAULT_STARTING_LEVEL: u32 = 1;
    pub const DEFAULT_STARTING_GOLD: u32 = 100;

    pub fn new() -> Self {
        Self {
            seconds_per_hop: Self::DEFAULT_SECONDS_PER_HOP,
            default_location: Self::DEFAULT_LOCATION,
            starting_level: Self::DEFAULT_STARTING_LEVEL,
            starting_gold: Self::DEFAULT_STARTING_GOLD,
            level_cap: None,
        }
    }

    pub fn with_seconds_per_hop(mut self, seconds_per_hop: u32) -> Self {
        self.seconds_per_hop = seconds_per_hop;
        self
    }

    pub fn with_default_location(mut self, location: LocationId) -> Self {
        self.default_location = location;
        self
    }

    pub fn with_level_cap(mut self, cap: u32) -> Self {
        self.level_cap = Some(cap);
        self
    }

    /// Travel duration in seconds for a path of `hops` edges.
    pub fn travel_seconds(&self, hops: u32) -> u64 {
        u64::from(hops) * u64::from(self.seconds_per_hop)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
