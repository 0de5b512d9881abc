//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] exposes one async method per player operation. Each
//! method locks the player's session first, then loads records, applies the
//! pure `game-core` rules, and saves the result.
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use game_core::{
    AccountRecords, CombatProfile, EnemyId, EnemyOracle, EnemyTemplate, EquipmentSlot, Fight, FightPhase,
    ItemId, ItemOracle, LocationId, RandomSource, Timestamp, TravelContext, TravelSession, UserId,
    add_experience, aggregate, begin_travel, can_move, complete_arrival, roll_loot,
};

use super::errors::{Result, RuntimeError};
use super::outcome::{AttackOutcome, LocationStatus, Rewards};
use crate::clock::Clock;
use crate::oracle::OracleManager;
use crate::repository::AccountRepository;
use crate::runtime::RuntimeConfig;
use crate::session::{ActiveFight, PlayerSession, SessionTable};

pub(crate) struct Shared {
    pub(crate) config: RuntimeConfig,
    pub(crate) oracles: OracleManager,
    pub(crate) accounts: Arc<dyn AccountRepository>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) rng: Mutex<Box<dyn RandomSource>>,
    pub(crate) sessions: SessionTable,
}

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    shared: Arc<Shared>,
}

impl RuntimeHandle {
    pub(crate) fn new(shared: Shared) -> Self {
        Self {
            shared: Arc::new(shared),
        }
    }

    /// Current time according to the runtime's clock.
    pub fn now(&self) -> Timestamp {
        self.shared.clock.now()
    }

    /// Create the records of a new player.
    pub async fn create_account(&self, user: UserId) -> Result<AccountRecords> {
        let session = self.shared.sessions.open(user).await;
        let _session = session.lock().await;

        if self.shared.accounts.exists(user) {
            return Err(RuntimeError::AccountExists { user });
        }

        let records = AccountRecords::create(user, self.now(), &self.shared.config.game_config);
        self.shared.accounts.save(&records)?;

        info!(
            %user,
            location = %records.travel.current_location,
            level = records.ledger.level,
            "account created"
        );
        Ok(records)
    }

    /// Put a catalog item into the player's inventory.
    pub async fn grant_item(&self, user: UserId, item: ItemId) -> Result<()> {
        let session = self.session(user).await?;
        let _session = session.lock().await;

        if self.shared.oracles.items.definition(item).is_none() {
            return Err(RuntimeError::UnknownItem { item });
        }
        let mut records = self.load_records(user)?;
        records.inventory.push(item);
        self.shared.accounts.save(&records)?;

        debug!(%user, %item, "item granted");
        Ok(())
    }

    /// Wear an owned item. The item previously in that slot goes back to the
    /// inventory. Returns the resulting aggregated profile.
    pub async fn equip(&self, user: UserId, item: ItemId) -> Result<CombatProfile> {
        let session = self.session(user).await?;
        let session = session.lock().await;
        if session.fight.is_some() {
            return Err(RuntimeError::FightInProgress { user });
        }

        let definition = self
            .shared
            .oracles
            .items
            .definition(item)
            .ok_or(RuntimeError::UnknownItem { item })?;
        let mut records = self.load_records(user)?;
        let owned = records
            .inventory
            .iter()
            .position(|id| *id == item)
            .ok_or(RuntimeError::ItemNotOwned { user, item })?;

        records.inventory.remove(owned);
        let slot = definition.slot;
        let (loadout, displaced) = records.loadout.equip(definition);
        records.loadout = loadout;
        if let Some(previous) = &displaced {
            records.inventory.push(previous.id);
        }
        self.shared.accounts.save(&records)?;

        debug!(
            %user,
            %item,
            %slot,
            displaced = ?displaced.map(|previous| previous.id),
            "item equipped"
        );
        Ok(aggregate(&records.base_profile, &records.loadout))
    }

    /// Take off whatever is worn in `slot`, returning it to the inventory.
    pub async fn unequip(&self, user: UserId, slot: EquipmentSlot) -> Result<Option<ItemId>> {
        let session = self.session(user).await?;
        let session = session.lock().await;
        if session.fight.is_some() {
            return Err(RuntimeError::FightInProgress { user });
        }

        let mut records = self.load_records(user)?;
        let (loadout, removed) = records.loadout.unequip(slot);
        let removed = removed.map(|item| item.id);
        if let Some(item) = removed {
            records.loadout = loadout;
            records.inventory.push(item);
            self.shared.accounts.save(&records)?;
            debug!(%user, %item, %slot, "item unequipped");
        }
        Ok(removed)
    }

    /// Start a fight against `enemy` with the player's current equipment.
    pub async fn start_fight(&self, user: UserId, enemy: EnemyId) -> Result<Fight> {
        let session = self.session(user).await?;
        let mut session = session.lock().await;
        if session.fight.is_some() {
            return Err(RuntimeError::FightInProgress { user });
        }

        let records = self.load_records(user)?;
        if !can_move(&records.travel, self.now()) {
            return Err(RuntimeError::InTransit {
                user,
                arrives_at: records.travel.travel_time,
            });
        }

        let template = self
            .shared
            .oracles
            .enemies
            .template(enemy)
            .ok_or(RuntimeError::UnknownEnemy { enemy })?;
        let player = aggregate(&records.base_profile, &records.loadout);
        let fight = Fight::new(player, template.profile);

        info!(
            %user,
            %enemy,
            enemy_name = %template.name,
            player_health = fight.player().health,
            enemy_health = fight.enemy().health,
            "fight started"
        );

        if !fight.is_finished() {
            session.fight = Some(ActiveFight {
                enemy: template,
                fight,
            });
        }
        Ok(fight)
    }

    /// Resolve the player's attack and, if the enemy survives, its reply.
    ///
    /// On victory loot is rolled once (a drop lands in the inventory) and the
    /// enemy's experience is granted once. A finished fight is cleared from
    /// the session. Nothing is written if reward accounting fails.
    pub async fn attack(&self, user: UserId) -> Result<AttackOutcome> {
        let session = self.session(user).await?;
        let mut session = session.lock().await;
        let active = session
            .fight
            .as_ref()
            .ok_or(RuntimeError::NoActiveFight { user })?;

        let (fight, player_turn) = {
            let mut rng = self.shared.rng.lock().await;
            active.fight.take_turn(&mut **rng)?
        };
        debug!(
            %user,
            turn = player_turn.turn,
            damage = player_turn.result.damage_dealt,
            critical = player_turn.result.is_critical,
            "player attacked"
        );

        let (fight, enemy_turn) = if fight.phase() == FightPhase::AwaitingEnemyTurn {
            let (fight, report) = {
                let mut rng = self.shared.rng.lock().await;
                fight.take_turn(&mut **rng)?
            };
            debug!(
                %user,
                turn = report.turn,
                damage = report.result.damage_dealt,
                critical = report.result.is_critical,
                "enemy attacked"
            );
            (fight, Some(report))
        } else {
            (fight, None)
        };

        let rewards = if fight.phase() == FightPhase::FightWon {
            Some(self.grant_rewards(user, &active.enemy).await?)
        } else {
            None
        };

        let enemy = active.enemy.id;
        if fight.is_finished() {
            session.fight = None;
            info!(%user, %enemy, phase = %fight.phase(), turns = fight.turns(), "fight finished");
        } else if let Some(active) = session.fight.as_mut() {
            active.fight = fight;
        }

        Ok(AttackOutcome {
            enemy,
            player_turn,
            enemy_turn,
            phase: fight.phase(),
            player: *fight.player(),
            opponent: *fight.enemy(),
            rewards,
        })
    }

    /// Abandon the current fight without rewards.
    pub async fn flee(&self, user: UserId) -> Result<()> {
        let session = self.session(user).await?;
        let mut session = session.lock().await;
        let active = session
            .fight
            .take()
            .ok_or(RuntimeError::NoActiveFight { user })?;

        info!(%user, enemy = %active.enemy.id, turns = active.fight.turns(), "fled from fight");
        Ok(())
    }

    /// The fight the player is currently in, if any.
    pub async fn fight(&self, user: UserId) -> Result<Option<Fight>> {
        let session = self.session(user).await?;
        let session = session.lock().await;
        Ok(session.fight.as_ref().map(|active| active.fight))
    }

    /// Start a journey to `target`.
    pub async fn travel(&self, user: UserId, target: LocationId) -> Result<TravelSession> {
        let session = self.session(user).await?;
        let session = session.lock().await;
        if session.fight.is_some() {
            return Err(RuntimeError::FightInProgress { user });
        }

        let mut records = self.load_records(user)?;
        let ctx = TravelContext {
            world: self.shared.oracles.world(),
            config: &self.shared.config.game_config,
            traveler_level: records.ledger.level,
            now: self.now(),
        };
        let travel = begin_travel(&records.travel, target, &ctx)?;
        records.travel = travel;
        self.shared.accounts.save(&records)?;

        info!(
            %user,
            from = %travel.current_location,
            to = %target,
            arrives_at = %travel.travel_time,
            "travel started"
        );
        Ok(travel)
    }

    /// Observe the player's position, applying a completed arrival.
    pub async fn location(&self, user: UserId) -> Result<LocationStatus> {
        let session = self.session(user).await?;
        let _session = session.lock().await;

        let mut records = self.load_records(user)?;
        let now = self.now();
        let travel = complete_arrival(&records.travel, now);
        if travel != records.travel {
            records.travel = travel;
            self.shared.accounts.save(&records)?;
            info!(%user, location = %travel.current_location, "arrived");
        }

        Ok(LocationStatus {
            location: travel.current_location,
            phase: travel.phase(now),
            destination: travel.destination,
            remaining_secs: travel.remaining_secs(now),
            session: travel,
        })
    }

    /// Base stats plus every equipped item.
    pub async fn profile(&self, user: UserId) -> Result<CombatProfile> {
        let records = self.load_records(user)?;
        Ok(aggregate(&records.base_profile, &records.loadout))
    }

    /// Snapshot of every persisted record of the player.
    pub async fn account(&self, user: UserId) -> Result<AccountRecords> {
        self.load_records(user)
    }

    fn load_records(&self, user: UserId) -> Result<AccountRecords> {
        self.shared
            .accounts
            .load(user)?
            .ok_or(RuntimeError::UnknownUser { user })
    }

    async fn session(&self, user: UserId) -> Result<Arc<Mutex<PlayerSession>>> {
        let accounts = &self.shared.accounts;
        self.shared
            .sessions
            .get(user, || accounts.exists(user))
            .await
            .ok_or(RuntimeError::UnknownUser { user })
    }

    async fn grant_rewards(&self, user: UserId, enemy: &EnemyTemplate) -> Result<Rewards> {
        let mut records = self.load_records(user)?;
        let level_up = add_experience(
            &records.ledger,
            enemy.experience_reward,
            self.shared.oracles.levels(),
        )?;
        let loot = {
            let mut rng = self.shared.rng.lock().await;
            roll_loot(&enemy.loot, &mut **rng)
        };

        records.ledger = level_up.ledger;
        if let Some(item) = loot.item {
            records.inventory.push(item);
        }
        self.shared.accounts.save(&records)?;

        info!(
            %user,
            enemy = %enemy.id,
            experience = enemy.experience_reward,
            level = level_up.ledger.level,
            levels_gained = level_up.levels_gained,
            drop = ?loot.item,
            "rewards granted"
        );
        Ok(Rewards {
            loot,
            experience: enemy.experience_reward,
            level_up,
        })
    }
}
