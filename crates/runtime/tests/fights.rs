mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use common::*;
use game_core::{
    AccountRecords, FightPhase, LevelTable, ProgressionError, ScriptedRolls, Side, UserId,
};
use runtime::{AccountRepository, InMemoryAccountRepo, RepositoryError, RuntimeError};
use tokio::sync::Notify;

/// Repository whose next save blocks its thread once armed.
#[derive(Default)]
struct StallingRepo {
    inner: InMemoryAccountRepo,
    armed: AtomicBool,
    entered: Notify,
}

impl AccountRepository for StallingRepo {
    fn load(&self, user: UserId) -> Result<Option<AccountRecords>, RepositoryError> {
        self.inner.load(user)
    }

    fn save(&self, records: &AccountRecords) -> Result<(), RepositoryError> {
        if self.armed.swap(false, Ordering::SeqCst) {
            self.entered.notify_one();
            std::thread::sleep(Duration::from_millis(500));
        }
        self.inner.save(records)
    }

    fn exists(&self, user: UserId) -> bool {
        self.inner.exists(user)
    }
}

#[tokio::test]
async fn victory_grants_loot_and_experience_once() {
    let (handle, _clock) = runtime(ScriptedRolls::constant(0.5));
    handle.create_account(HERO).await.unwrap();

    let fight = handle.start_fight(HERO, DUMMY).await.unwrap();
    assert_eq!(fight.phase(), FightPhase::AwaitingUserTurn);
    assert_eq!(fight.enemy().health, 20);

    let first = handle.attack(HERO).await.unwrap();
    assert_eq!(first.player_turn.actor, Side::Player);
    assert_eq!(first.player_turn.result.damage_dealt, 10);
    assert!(!first.player_turn.result.is_critical);
    let reply = first.enemy_turn.expect("enemy replies while alive");
    assert_eq!(reply.actor, Side::Enemy);
    assert_eq!(first.player.health, 99);
    assert_eq!(first.opponent.health, 10);
    assert_eq!(first.phase, FightPhase::AwaitingUserTurn);
    assert!(first.rewards.is_none());

    let second = handle.attack(HERO).await.unwrap();
    assert_eq!(second.phase, FightPhase::FightWon);
    assert!(second.enemy_turn.is_none());
    assert_eq!(second.player_turn.turn, 3);
    let rewards = second.rewards.expect("victory pays out");
    assert_eq!(rewards.loot.item, Some(LONG_SWORD));
    assert_eq!(rewards.experience, 150);
    assert_eq!(rewards.level_up.levels_gained, 1);

    let records = handle.account(HERO).await.unwrap();
    assert_eq!(records.ledger.level, 2);
    assert_eq!(records.ledger.experience, 50);
    assert_eq!(records.inventory, vec![LONG_SWORD]);

    let err = handle.attack(HERO).await.unwrap_err();
    assert!(matches!(err, RuntimeError::NoActiveFight { .. }));
    assert_eq!(handle.fight(HERO).await.unwrap(), None);
}

#[tokio::test]
async fn critical_roll_multiplies_damage() {
    let (handle, _clock) = runtime(ScriptedRolls::new([0.01, 0.9]));
    handle.create_account(HERO).await.unwrap();
    handle.start_fight(HERO, DUMMY).await.unwrap();

    let outcome = handle.attack(HERO).await.unwrap();
    assert!(outcome.player_turn.result.is_critical);
    assert_eq!(outcome.player_turn.result.damage_dealt, 15);
    assert_eq!(outcome.opponent.health, 5);
}

#[tokio::test]
async fn defeat_grants_nothing_and_clears_fight() {
    let (handle, _clock) = runtime(ScriptedRolls::constant(0.5));
    handle.create_account(HERO).await.unwrap();
    handle.start_fight(HERO, OGRE).await.unwrap();

    let outcome = handle.attack(HERO).await.unwrap();
    assert_eq!(outcome.phase, FightPhase::FightLost);
    assert_eq!(outcome.player.health, 0);
    assert!(outcome.rewards.is_none());

    let records = handle.account(HERO).await.unwrap();
    assert_eq!(records.ledger.level, 1);
    assert!(records.inventory.is_empty());
    assert_eq!(handle.fight(HERO).await.unwrap(), None);
}

#[tokio::test]
async fn one_fight_at_a_time_and_flee_ends_it() {
    let (handle, _clock) = runtime(ScriptedRolls::constant(0.5));
    handle.create_account(HERO).await.unwrap();
    handle.start_fight(HERO, DUMMY).await.unwrap();

    let err = handle.start_fight(HERO, OGRE).await.unwrap_err();
    assert!(matches!(err, RuntimeError::FightInProgress { .. }));

    let err = handle.equip(HERO, SHORT_SWORD).await.unwrap_err();
    assert!(matches!(err, RuntimeError::FightInProgress { .. }));

    handle.flee(HERO).await.unwrap();
    assert!(matches!(
        handle.flee(HERO).await.unwrap_err(),
        RuntimeError::NoActiveFight { .. }
    ));

    let err = handle.start_fight(HERO, game_core::EnemyId(42)).await.unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownEnemy { .. }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_attacks_are_serialized_per_player() {
    let (handle, _clock) = runtime(ScriptedRolls::constant(0.5));
    handle.create_account(HERO).await.unwrap();
    handle.start_fight(HERO, DUMMY).await.unwrap();

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let handle = handle.clone();
            tokio::spawn(async move { handle.attack(HERO).await })
        })
        .collect();

    let mut resolved = Vec::new();
    for task in tasks {
        match task.await.unwrap() {
            Ok(outcome) => resolved.push(outcome),
            Err(RuntimeError::NoActiveFight { .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(resolved.len(), 2);
    assert_eq!(
        resolved.iter().filter(|outcome| outcome.rewards.is_some()).count(),
        1
    );

    let records = handle.account(HERO).await.unwrap();
    assert_eq!(records.ledger.experience, 50);
    assert_eq!(records.inventory, vec![LONG_SWORD]);
}

#[tokio::test]
async fn failed_reward_accounting_leaves_everything_untouched() {
    let oracles = oracles_with_levels(LevelTable::new([(2, 200)]));
    let (handle, _clock) = runtime_with(
        oracles,
        Arc::new(InMemoryAccountRepo::new()),
        ScriptedRolls::constant(0.5),
    );
    let before = handle.create_account(HERO).await.unwrap();
    handle.start_fight(HERO, DUMMY).await.unwrap();
    handle.attack(HERO).await.unwrap();
    let pending = handle.fight(HERO).await.unwrap().expect("fight still running");

    let err = handle.attack(HERO).await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Progression(ProgressionError::MissingLevelDefinition { level: 1 })
    ));

    assert_eq!(handle.account(HERO).await.unwrap(), before);
    let fight = handle.fight(HERO).await.unwrap().expect("fight kept");
    assert_eq!(fight, pending);
    assert_eq!(fight.phase(), FightPhase::AwaitingUserTurn);
    assert_eq!(fight.enemy().health, 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn slow_reward_save_does_not_block_other_players() {
    let repo = Arc::new(StallingRepo::default());
    let (handle, _clock) = runtime_with(oracles(), repo.clone(), ScriptedRolls::constant(0.5));
    let rival = UserId(2);

    handle.create_account(HERO).await.unwrap();
    handle.create_account(rival).await.unwrap();
    handle.start_fight(HERO, DUMMY).await.unwrap();
    handle.start_fight(rival, OGRE).await.unwrap();
    handle.attack(HERO).await.unwrap();

    repo.armed.store(true, Ordering::SeqCst);
    let winner = {
        let handle = handle.clone();
        tokio::spawn(async move { handle.attack(HERO).await })
    };
    repo.entered.notified().await;

    let outcome = tokio::time::timeout(Duration::from_millis(250), handle.attack(rival))
        .await
        .expect("rival's attack must not wait for the reward save")
        .unwrap();
    assert_eq!(outcome.phase, FightPhase::FightLost);

    let won = winner.await.unwrap().unwrap();
    assert_eq!(won.phase, FightPhase::FightWon);
    assert!(won.rewards.is_some());
}
