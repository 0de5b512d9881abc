//! Stat aggregation.
//!
//! A fight never works on persisted stats directly. The character's base
//! [`CombatProfile`] is combined with every item in its [`Loadout`] into an
//! effective profile that lives only for the duration of one fight.
//!
//! ```text
//! [ Base profile ] + [ Loadout: weapon, helmet, armor, gloves, boots, trousers ]
//!      ↓ aggregate (component-wise sum)
//! [ Effective CombatProfile ]
//! ```

pub mod aggregate;
pub mod equipment;
pub mod profile;

pub use aggregate::aggregate;
pub use equipment::{EquipmentSlot, EquippedItem, Loadout};
pub use profile::{CombatProfile, StatDelta};
