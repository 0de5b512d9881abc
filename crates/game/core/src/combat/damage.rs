//! Damage calculation and application.

use crate::stats::CombatProfile;

// ============================================================================
// Damage Type
// ============================================================================

/// Damage type, selecting which defensive stat mitigates it.
///
/// Basic attacks are [`DamageType::Physical`]. [`DamageType::Magic`] is
/// mitigated by magic resist instead of armor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageType {
    /// Weapon damage, reduced by armor.
    #[default]
    Physical,
    /// Spell damage, reduced by magic resist.
    Magic,
}

// ============================================================================
// Damage Calculation
// ============================================================================

/// Calculate raw damage of an attack before mitigation.
///
/// # Formula
///
/// ```text
/// raw = is_critical ? floor(damage × critical_hit_damage) : damage
/// ```
///
/// Negative damage values are treated as zero.
pub fn calculate_damage(attacker: &CombatProfile, is_critical: bool) -> i32 {
    let base = attacker.damage.max(0);
    if !is_critical {
        return base;
    }

    let multiplied = (f64::from(base) * attacker.critical_hit_damage).floor();
    if multiplied >= f64::from(i32::MAX) {
        i32::MAX
    } else {
        multiplied as i32
    }
}

/// Reduce raw damage by the defender's matching resistance.
///
/// # Formula
///
/// ```text
/// mitigated = max(0, raw - resistance)
/// ```
pub fn mitigate(raw: i32, damage_type: DamageType, defender: &CombatProfile) -> i32 {
    let resistance = match damage_type {
        DamageType::Physical => defender.armor,
        DamageType::Magic => defender.magic_resist,
    };
    raw.saturating_sub(resistance).max(0)
}

/// Apply damage to current health.
///
/// # Returns
///
/// New health value (clamped to 0)
pub fn apply_damage(current_health: i32, damage: i32) -> i32 {
    current_health.saturating_sub(damage.max(0)).max(0)
}
