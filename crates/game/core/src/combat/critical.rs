//! Critical-hit checks.

/// Check if an attack is critical for a drawn roll.
///
/// # Formula
///
/// ```text
/// is_critical = roll ≤ chance
/// ```
///
/// A chance of `0` is never critical for any roll in `[0, 1)`, including a
/// roll of exactly `0.0`, and a chance of `1` is always critical.
///
/// # Arguments
///
/// * `chance` - Attacker's critical-hit chance in `[0, 1]`
/// * `roll` - Uniform draw in `[0, 1)`
pub fn check_critical(chance: f64, roll: f64) -> bool {
    if chance <= 0.0 {
        return false;
    }
    roll <= chance
}
