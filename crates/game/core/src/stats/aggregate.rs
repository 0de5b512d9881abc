//! Effective profile computation.

use super::equipment::Loadout;
use super::profile::CombatProfile;

/// Combine base stats with every equipped item's bonuses.
///
/// # Formula
///
/// ```text
/// effective.field = base.field + Σ item.bonuses.field   (for every field)
/// ```
///
/// Empty slots contribute nothing. The result is normalized so `health`
/// stays non-negative and the critical fields stay in range.
pub fn aggregate(base: &CombatProfile, loadout: &Loadout) -> CombatProfile {
    loadout
        .iter()
        .fold(*base, |profile, item| profile.apply(&item.bonuses))
        .normalized()
}
