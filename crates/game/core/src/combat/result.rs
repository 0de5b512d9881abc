//! Attack resolution and its result types.

use crate::env::RandomSource;
use crate::stats::CombatProfile;

use super::critical::check_critical;
use super::damage::{DamageType, apply_damage, calculate_damage, mitigate};

/// Outcome of one attack.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnResult {
    /// Whether the critical roll succeeded.
    pub is_critical: bool,
    /// Damage removed from the defender after mitigation.
    pub damage_dealt: i32,
    /// The uniform draw used for the critical check.
    pub roll: f64,
    /// Whether the defender's health reached zero.
    pub defender_defeated: bool,
}

/// Updated copies of both combatants plus the turn result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackResolution {
    pub attacker: CombatProfile,
    pub defender: CombatProfile,
    pub turn: TurnResult,
}

/// Resolve a single attack.
///
/// 1. Draw `r ∈ [0, 1)` from `rng`
/// 2. Critical if `r ≤ attacker.critical_hit_chance`
/// 3. Raw damage, multiplied on a critical
/// 4. Physical mitigation by the defender's armor
/// 5. Defender health reduced and clamped to zero
///
/// Inputs are never mutated. Exactly one draw is consumed per call, so a
/// fixed random sequence reproduces the same fight.
pub fn resolve_attack(
    attacker: &CombatProfile,
    defender: &CombatProfile,
    rng: &mut (impl RandomSource + ?Sized),
) -> AttackResolution {
    let roll = rng.next_unit();
    let is_critical = check_critical(attacker.critical_hit_chance, roll);

    let raw = calculate_damage(attacker, is_critical);
    let damage_dealt = mitigate(raw, DamageType::Physical, defender);

    let defender = defender.with_health(apply_damage(defender.health, damage_dealt));

    AttackResolution {
        attacker: *attacker,
        defender,
        turn: TurnResult {
            is_critical,
            damage_dealt,
            roll,
            defender_defeated: defender.is_defeated(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRolls};

    #[test]
    fn plain_hit_subtracts_armor() {
        let attacker = CombatProfile::new(30, 0, 0, 12);
        let defender = CombatProfile::new(40, 5, 0, 4);

        let resolution = resolve_attack(&attacker, &defender, &mut ScriptedRolls::constant(0.9));

        assert!(!resolution.turn.is_critical);
        assert_eq!(resolution.turn.damage_dealt, 7);
        assert_eq!(resolution.defender.health, 33);
        assert_eq!(resolution.attacker, attacker);
        assert_eq!(defender.health, 40);
    }

    #[test]
    fn critical_hit_multiplies_before_armor() {
        let attacker = CombatProfile::new(30, 0, 0, 10).with_critical(0.3, 2.0);
        let defender = CombatProfile::new(40, 5, 0, 4);

        let resolution = resolve_attack(&attacker, &defender, &mut ScriptedRolls::constant(0.1));

        assert!(resolution.turn.is_critical);
        assert_eq!(resolution.turn.damage_dealt, 15);
        assert_eq!(resolution.defender.health, 25);
    }

    #[test]
    fn overkill_clamps_health_and_reports_defeat() {
        let attacker = CombatProfile::new(30, 0, 0, 100);
        let defender = CombatProfile::new(10, 0, 0, 4);

        let resolution = resolve_attack(&attacker, &defender, &mut ScriptedRolls::constant(0.5));

        assert_eq!(resolution.defender.health, 0);
        assert_eq!(resolution.turn.damage_dealt, 100);
        assert!(resolution.turn.defender_defeated);
    }

    #[test]
    fn armor_above_damage_deals_nothing() {
        let attacker = CombatProfile::new(30, 0, 0, 3);
        let defender = CombatProfile::new(10, 9, 0, 4);

        let resolution = resolve_attack(&attacker, &defender, &mut ScriptedRolls::constant(0.5));

        assert_eq!(resolution.turn.damage_dealt, 0);
        assert_eq!(resolution.defender.health, 10);
        assert!(!resolution.turn.defender_defeated);
    }

    #[test]
    fn defender_health_is_never_negative() {
        let mut rng = PcgRng::seeded(99);
        for damage in [-5, 0, 1, 17, 250] {
            for armor in [-3, 0, 4, 40] {
                let attacker = CombatProfile::new(10, 0, 0, damage).with_critical(0.5, 3.0);
                let defender = CombatProfile::new(20, armor, 0, 0);
                let resolution = resolve_attack(&attacker, &defender, &mut rng);
                assert!(resolution.defender.health >= 0);
                assert!(resolution.turn.damage_dealt >= 0);
            }
        }
    }

    #[test]
    fn consumes_exactly_one_draw() {
        let attacker = CombatProfile::new(30, 0, 0, 5);
        let defender = CombatProfile::new(30, 0, 0, 5);
        let mut rolls = ScriptedRolls::new([0.1, 0.2, 0.3]);

        resolve_attack(&attacker, &defender, &mut rolls);

        assert_eq!(rolls.consumed(), 1);
    }
}
