//! Auto-play: random legal choices until the battle ends

use anyhow::{Context, Result, bail};
use rand::Rng;
use rand::seq::SliceRandom;
use skirmish_battle::{LogCursor, move_options, switch_options};
use skirmish_client::{Awaiting, BattleApi, BattleSession, Outcome, Screen};
use skirmish_protocol::Battle;

use crate::render;

/// Consecutive refreshes without progress before giving up
const MAX_IDLE_REFRESHES: usize = 20;

enum Choice {
    Move(String),
    Switch(String),
    Refresh,
}

/// Key of a random move with PP left
pub fn pick_move<R: Rng>(battle: &Battle, rng: &mut R) -> Option<String> {
    let active = battle.active_pokemon_player.as_ref()?;
    let usable: Vec<_> = move_options(active)
        .into_iter()
        .filter(|o| o.usable)
        .collect();
    usable.choose(rng).map(|o| o.key.clone())
}

/// Key of a random alive team member
pub fn pick_switch<R: Rng>(battle: &Battle, rng: &mut R) -> Option<String> {
    switch_options(&battle.player_team)
        .choose(rng)
        .map(|o| o.key.clone())
}

/// Play `games` battles back to back and report the tally
pub async fn play<A: BattleApi>(
    session: &mut BattleSession<A>,
    level: Option<u32>,
    games: u32,
) -> Result<()> {
    let mut wins = 0;

    for game in 1..=games {
        println!("Battle {game}/{games}");
        session
            .start(level)
            .await
            .context("Failed to start battle")?;

        let outcome = play_one(session).await?;
        println!("*** {} ***", outcome.title());
        if outcome == Outcome::Won {
            wins += 1;
        }
        session.new_battle();
    }

    println!("Won {wins} of {games}");
    Ok(())
}

async fn play_one<A: BattleApi>(session: &mut BattleSession<A>) -> Result<Outcome> {
    let mut rng = rand::thread_rng();
    let mut cursor = LogCursor::new();
    let mut idle = 0;

    loop {
        if let Some(battle) = session.battle() {
            print!("{}", render::feed(cursor.advance(battle)));
        }

        let choice = match session.screen() {
            Screen::Finished { outcome, .. } => return Ok(outcome),
            Screen::Field {
                battle,
                awaiting: Awaiting::MoveSelection,
            } => match pick_move(battle, &mut rng) {
                Some(key) => Choice::Move(key),
                None => bail!("No usable move left in battle {}", battle.id),
            },
            Screen::Field { .. } => Choice::Refresh,
            Screen::Replace(battle) => match pick_switch(battle, &mut rng) {
                Some(key) => Choice::Switch(key),
                None => bail!("No creature left to switch in for battle {}", battle.id),
            },
            Screen::Error(error) => bail!("Battle failed: {error}"),
            other => bail!("Unexpected screen: {}", other.name()),
        };

        match choice {
            Choice::Move(key) => {
                idle = 0;
                tracing::debug!(move_key = %key, "Auto move");
                session.select_move(&key).await?;
            }
            Choice::Switch(key) => {
                idle = 0;
                tracing::debug!(pokemon_key = %key, "Auto switch");
                session.switch_pokemon(&key).await?;
            }
            Choice::Refresh => {
                idle += 1;
                if idle > MAX_IDLE_REFRESHES {
                    bail!("Battle made no progress after {MAX_IDLE_REFRESHES} refreshes");
                }
                tokio::time::sleep(session.config().processing.poll_interval).await;
                if let Err(e) = session.refresh().await {
                    tracing::warn!(error = %e, "Refresh failed");
                }
            }
        }
    }
}
