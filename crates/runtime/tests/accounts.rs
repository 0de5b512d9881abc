mod common;

use common::*;
use game_core::{EquipmentSlot, ErrorCategory, GameError, LocationId, ScriptedRolls, UserId};
use runtime::{Runtime, RuntimeError};

#[tokio::test]
async fn new_account_starts_at_default_location() {
    let (handle, _clock) = runtime(ScriptedRolls::constant(0.5));

    let records = handle.create_account(HERO).await.unwrap();

    assert_eq!(records.travel.current_location, LocationId(1));
    assert_eq!(records.travel.travel_time, START);
    assert_eq!(records.wallet.gold, 100);
    assert_eq!(records.ledger.level, 1);
    assert!(records.loadout.is_empty());
    assert_eq!(handle.account(HERO).await.unwrap(), records);
}

#[tokio::test]
async fn duplicate_and_unknown_accounts_are_rejected() {
    let (handle, _clock) = runtime(ScriptedRolls::constant(0.5));
    handle.create_account(HERO).await.unwrap();

    let err = handle.create_account(HERO).await.unwrap_err();
    assert!(matches!(err, RuntimeError::AccountExists { user } if user == HERO));

    let err = handle.profile(UserId(99)).await.unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownUser { .. }));
    assert_eq!(err.category(), ErrorCategory::Validation);
}

#[tokio::test]
async fn session_operations_reject_unknown_users() {
    let (handle, _clock) = runtime(ScriptedRolls::constant(0.5));
    let ghost = UserId(404);

    assert!(matches!(
        handle.location(ghost).await.unwrap_err(),
        RuntimeError::UnknownUser { user } if user == ghost
    ));
    assert!(matches!(
        handle.attack(ghost).await.unwrap_err(),
        RuntimeError::UnknownUser { .. }
    ));
    assert!(matches!(
        handle.flee(ghost).await.unwrap_err(),
        RuntimeError::UnknownUser { .. }
    ));
    assert!(matches!(
        handle.fight(ghost).await.unwrap_err(),
        RuntimeError::UnknownUser { .. }
    ));
    assert!(matches!(
        handle.travel(ghost, LocationId(2)).await.unwrap_err(),
        RuntimeError::UnknownUser { .. }
    ));

    handle.create_account(ghost).await.unwrap();
    assert_eq!(handle.fight(ghost).await.unwrap(), None);
}

#[tokio::test]
async fn equipping_replaces_and_returns_prior_item() {
    let (handle, _clock) = runtime(ScriptedRolls::constant(0.5));
    handle.create_account(HERO).await.unwrap();
    handle.grant_item(HERO, SHORT_SWORD).await.unwrap();
    handle.grant_item(HERO, LONG_SWORD).await.unwrap();
    handle.grant_item(HERO, CAP).await.unwrap();

    let profile = handle.equip(HERO, SHORT_SWORD).await.unwrap();
    assert_eq!(profile.damage, 15);

    let profile = handle.equip(HERO, CAP).await.unwrap();
    assert_eq!(profile.armor, 2);
    assert_eq!(profile.damage, 15);

    let profile = handle.equip(HERO, LONG_SWORD).await.unwrap();
    assert_eq!(profile.damage, 18);

    let records = handle.account(HERO).await.unwrap();
    assert_eq!(records.inventory, vec![SHORT_SWORD]);
    assert_eq!(
        records.loadout.get(EquipmentSlot::Weapon).map(|item| item.id),
        Some(LONG_SWORD)
    );

    let removed = handle.unequip(HERO, EquipmentSlot::Weapon).await.unwrap();
    assert_eq!(removed, Some(LONG_SWORD));
    assert_eq!(handle.profile(HERO).await.unwrap().damage, 10);
    assert_eq!(handle.unequip(HERO, EquipmentSlot::Boots).await.unwrap(), None);

    let records = handle.account(HERO).await.unwrap();
    assert_eq!(records.inventory, vec![SHORT_SWORD, LONG_SWORD]);
}

#[tokio::test]
async fn equip_requires_known_owned_item() {
    let (handle, _clock) = runtime(ScriptedRolls::constant(0.5));
    handle.create_account(HERO).await.unwrap();

    let err = handle.equip(HERO, SHORT_SWORD).await.unwrap_err();
    assert!(matches!(err, RuntimeError::ItemNotOwned { .. }));

    let err = handle.equip(HERO, game_core::ItemId(77)).await.unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownItem { .. }));

    let err = handle.grant_item(HERO, game_core::ItemId(77)).await.unwrap_err();
    assert_eq!(err.error_code(), "RUNTIME_UNKNOWN_ITEM");
}

#[test]
fn builder_requires_oracles() {
    let err = Runtime::builder().build().err().unwrap();
    assert!(matches!(err, RuntimeError::MissingOracles));
}
