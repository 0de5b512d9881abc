#![allow(dead_code)]

use std::sync::Arc;

use game_core::{
    CombatProfile, Coordinate, EnemyId, EnemyTemplate, EquipmentSlot, EquippedItem, GameConfig,
    ItemId, LevelTable, LocationId, LocationNode, LootTable, ScriptedRolls, StatDelta, Timestamp,
    WorldGraph,
};
use runtime::{
    AccountRepository, EnemyOracleImpl, InMemoryAccountRepo, ItemOracleImpl, ManualClock,
    OracleManager, Runtime, RuntimeConfig, RuntimeHandle,
};

pub const HERO: game_core::UserId = game_core::UserId(1);
pub const START: Timestamp = Timestamp(1_000);

pub const DUMMY: EnemyId = EnemyId(1);
pub const OGRE: EnemyId = EnemyId(2);

pub const SHORT_SWORD: ItemId = ItemId(1);
pub const CAP: ItemId = ItemId(2);
pub const LONG_SWORD: ItemId = ItemId(3);

pub fn oracles() -> OracleManager {
    oracles_with_levels(LevelTable::new([(1, 100), (2, 200), (3, 300), (4, 400)]))
}

pub fn oracles_with_levels(levels: LevelTable) -> OracleManager {
    let items = ItemOracleImpl::from_items([
        EquippedItem::new(SHORT_SWORD, "Short Sword", EquipmentSlot::Weapon, StatDelta::damage(5)),
        EquippedItem::new(CAP, "Cap", EquipmentSlot::Helmet, StatDelta::armor(2)),
        EquippedItem::new(LONG_SWORD, "Long Sword", EquipmentSlot::Weapon, StatDelta::damage(8)),
    ]);

    let enemies = EnemyOracleImpl::new([
        EnemyTemplate::new(DUMMY, "Training Dummy", 1, CombatProfile::new(20, 0, 0, 1))
            .with_loot(LootTable::default().with(LONG_SWORD, 1.0))
            .with_experience_reward(150),
        EnemyTemplate::new(OGRE, "Ogre", 9, CombatProfile::new(500, 0, 0, 200))
            .with_experience_reward(1_000),
    ]);

    //  1 - 2 - 3        9 (isolated)
    //          |
    //          4 (level 3)
    let world = WorldGraph::build([
        LocationNode::new(LocationId(1), "Pass", Coordinate::new(0, 0)),
        LocationNode::new(LocationId(2), "Road", Coordinate::new(1, 0)),
        LocationNode::new(LocationId(3), "Crossroads", Coordinate::new(2, 0)),
        LocationNode::new(LocationId(4), "Barrow", Coordinate::new(2, 1)).with_level_required(3),
        LocationNode::new(LocationId(9), "Isle", Coordinate::new(9, 9)),
    ])
    .unwrap();

    OracleManager::new(
        Arc::new(items),
        Arc::new(enemies),
        Arc::new(world),
        Arc::new(levels),
    )
}

/// Runtime over the fixture content, a manual clock at [`START`] and the
/// given scripted draws.
pub fn runtime(rolls: ScriptedRolls) -> (RuntimeHandle, Arc<ManualClock>) {
    runtime_with(oracles(), Arc::new(InMemoryAccountRepo::new()), rolls)
}

/// Like [`runtime`], with custom content and storage.
pub fn runtime_with(
    oracles: OracleManager,
    accounts: Arc<dyn AccountRepository>,
    rolls: ScriptedRolls,
) -> (RuntimeHandle, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(START));
    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            game_config: GameConfig::default(),
            seed: None,
        })
        .oracles(oracles)
        .accounts(accounts)
        .clock(clock.clone())
        .random(rolls)
        .build()
        .expect("runtime should build");
    (runtime.handle(), clock)
}
