//! Scripted demo client.
//!
//! Creates an account, equips a starter kit, fights the configured enemy to
//! the end, then travels to the configured destination on a simulated clock.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use client_bootstrap::{ClientConfig, RuntimeBuilder};
use directories::ProjectDirs;
use game_core::{ItemId, TravelPhase, UserId};
use runtime::{Clock, ManualClock, RuntimeHandle, SystemClock};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEMO_USER: UserId = UserId(1);
const STARTER_KIT: [ItemId; 2] = [ItemId(1), ItemId(20)];
const MAX_ROUNDS: u32 = 200;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = setup_logging()?;

    let clock = Arc::new(ManualClock::new(SystemClock.now()));
    let setup = RuntimeBuilder::new(config)
        .clock(clock.clone())
        .build()?;
    let handle = setup.runtime.handle();
    let demo = setup.config.demo;

    let records = handle.create_account(DEMO_USER).await?;
    println!(
        "Created {} at {} with {} gold",
        records.user, records.travel.current_location, records.wallet.gold
    );

    for item in STARTER_KIT {
        handle.grant_item(DEMO_USER, item).await?;
        let profile = handle.equip(DEMO_USER, item).await?;
        println!(
            "Equipped {item}: health {} armor {} damage {}",
            profile.health, profile.armor, profile.damage
        );
    }

    fight(&handle, demo.enemy).await?;
    travel(&handle, &clock, demo.destination).await?;

    let account = handle.account(DEMO_USER).await?;
    println!("{}", serde_json::to_string_pretty(&account)?);
    Ok(())
}

async fn fight(handle: &RuntimeHandle, enemy: game_core::EnemyId) -> Result<()> {
    let opening = handle.start_fight(DEMO_USER, enemy).await?;
    println!(
        "Fight against {enemy}: player {} hp vs enemy {} hp",
        opening.player().health,
        opening.enemy().health
    );

    for _ in 0..MAX_ROUNDS {
        let outcome = handle.attack(DEMO_USER).await?;
        for report in std::iter::once(&outcome.player_turn).chain(outcome.enemy_turn.as_ref()) {
            println!(
                "  turn {:>3} {:<6} deals {:>3}{}",
                report.turn,
                report.actor,
                report.result.damage_dealt,
                if report.result.is_critical { " (critical)" } else { "" }
            );
        }

        if !outcome.phase.is_finished() {
            continue;
        }

        println!("Fight ended: {}", outcome.phase);
        if let Some(rewards) = outcome.rewards {
            match rewards.loot.item {
                Some(item) => println!("  dropped {item} (roll {:.3})", rewards.loot.roll),
                None => println!("  no drop (roll {:.3})", rewards.loot.roll),
            }
            println!(
                "  +{} experience, now level {} ({} exp)",
                rewards.experience, rewards.level_up.ledger.level, rewards.level_up.ledger.experience
            );
        }
        return Ok(());
    }

    handle.flee(DEMO_USER).await?;
    println!("Fight dragged on for {MAX_ROUNDS} rounds, fled");
    Ok(())
}

async fn travel(
    handle: &RuntimeHandle,
    clock: &ManualClock,
    destination: game_core::LocationId,
) -> Result<()> {
    let session = match handle.travel(DEMO_USER, destination).await {
        Ok(session) => session,
        Err(err) => {
            println!("Cannot travel to {destination}: {err}");
            return Ok(());
        }
    };
    println!(
        "Traveling {} -> {destination}, arriving at {}",
        session.current_location, session.travel_time
    );

    let status = handle.location(DEMO_USER).await?;
    if status.phase == TravelPhase::InTransit {
        println!("  in transit, {}s remaining", status.remaining_secs);
        clock.advance(status.remaining_secs);
    }

    let status = handle.location(DEMO_USER).await?;
    println!("Now at {} ({})", status.location, status.phase);
    Ok(())
}

/// Setup logging to both stderr and file.
///
/// The returned guard flushes the file writer when dropped.
fn setup_logging() -> Result<WorkerGuard> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    tracing::info!("Log file: {}/client.log", log_dir.display());
    Ok(guard)
}

/// Platform cache directory for logs, e.g. `~/.cache/realm/logs` on Linux.
fn log_directory() -> PathBuf {
    ProjectDirs::from("", "", "realm")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("realm"))
        .join("logs")
}
