//! Combat profile and stat deltas.

/// Numeric stat bundle used for one fight.
///
/// Derived per fight from base stats plus equipment and never persisted.
/// `health` is kept at or above zero by every operation in this crate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatProfile {
    pub health: i32,
    pub armor: i32,
    pub magic_resist: i32,
    pub damage: i32,
    /// Probability in `[0, 1]` that an attack is critical.
    #[cfg_attr(feature = "serde", serde(default))]
    pub critical_hit_chance: f64,
    /// Damage multiplier applied on a critical hit, at least 1.
    #[cfg_attr(feature = "serde", serde(default = "CombatProfile::default_critical_damage"))]
    pub critical_hit_damage: f64,
}

impl CombatProfile {
    pub const BASE_CRITICAL_DAMAGE: f64 = 1.0;

    /// Create a profile with no critical-hit chance.
    pub fn new(health: i32, armor: i32, magic_resist: i32, damage: i32) -> Self {
        Self {
            health: health.max(0),
            armor,
            magic_resist,
            damage,
            critical_hit_chance: 0.0,
            critical_hit_damage: Self::BASE_CRITICAL_DAMAGE,
        }
    }

    /// Attach critical-hit parameters (builder pattern).
    #[must_use]
    pub fn with_critical(mut self, chance: f64, multiplier: f64) -> Self {
        self.critical_hit_chance = chance;
        self.critical_hit_damage = multiplier;
        self.normalized()
    }

    /// Returns a copy with `health` replaced, clamped to zero.
    #[must_use]
    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health.max(0);
        self
    }

    /// Apply a delta component-wise.
    #[must_use]
    pub fn apply(mut self, delta: &StatDelta) -> Self {
        self.health = self.health.saturating_add(delta.health);
        self.armor = self.armor.saturating_add(delta.armor);
        self.magic_resist = self.magic_resist.saturating_add(delta.magic_resist);
        self.damage = self.damage.saturating_add(delta.damage);
        self.critical_hit_chance += delta.critical_hit_chance;
        self.critical_hit_damage += delta.critical_hit_damage;
        self
    }

    /// Clamp the fields that have a valid range.
    ///
    /// `health ≥ 0`, `critical_hit_chance ∈ [0, 1]`, `critical_hit_damage ≥ 1`.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.health = self.health.max(0);
        self.critical_hit_chance = if self.critical_hit_chance.is_nan() {
            0.0
        } else {
            self.critical_hit_chance.clamp(0.0, 1.0)
        };
        if self.critical_hit_damage.is_nan() || self.critical_hit_damage < 1.0 {
            self.critical_hit_damage = Self::BASE_CRITICAL_DAMAGE;
        }
        self
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    #[cfg(feature = "serde")]
    fn default_critical_damage() -> f64 {
        Self::BASE_CRITICAL_DAMAGE
    }
}

impl Default for CombatProfile {
    fn default() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

/// Partial profile change contributed by an item.
///
/// Every field defaults to zero, so content only lists what the item changes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatDelta {
    pub health: i32,
    pub armor: i32,
    pub magic_resist: i32,
    pub damage: i32,
    pub critical_hit_chance: f64,
    pub critical_hit_damage: f64,
}

impl StatDelta {
    pub fn damage(damage: i32) -> Self {
        Self {
            damage,
            ..Self::default()
        }
    }

    pub fn armor(armor: i32) -> Self {
        Self {
            armor,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    #[must_use]
    pub fn with_magic_resist(mut self, magic_resist: i32) -> Self {
        self.magic_resist = magic_resist;
        self
    }

    #[must_use]
    pub fn with_critical(mut self, chance: f64, damage: f64) -> Self {
        self.critical_hit_chance = chance;
        self.critical_hit_damage = damage;
        self
    }
}
