//! Traits describing read-only game content.
//!
//! Oracles expose item definitions and enemy templates to whoever drives a
//! fight. The engines themselves take plain values; oracles are the seam the
//! runtime uses to look those values up from loaded content.
mod enemies;
mod items;
mod rng;

pub use enemies::{EnemyOracle, EnemyTemplate};
pub use items::ItemOracle;
pub use rng::{PcgRng, RandomSource, ScriptedRolls};
