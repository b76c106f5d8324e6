mod args;
mod auto;
mod input;
mod render;

#[cfg(test)]
mod fixtures;

use std::future::Future;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::LevelFilter;
use skirmish_battle::LogCursor;
use skirmish_client::{BattleApi, BattleSession};
use tokio::io::{AsyncBufReadExt, BufReader};

use args::Args;
use input::Action;

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

/// Run `op` unless the user hits Ctrl-C first
async fn interruptible<F>(op: F) -> Option<skirmish_client::Result<()>>
where
    F: Future<Output = skirmish_client::Result<()>>,
{
    tokio::select! {
        result = op => Some(result),
        _ = tokio::signal::ctrl_c() => None,
    }
}

async fn interactive<A: BattleApi>(
    mut session: BattleSession<A>,
    default_level: Option<u32>,
) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut cursor = LogCursor::new();

    loop {
        print!("{}", render::screen(&session.screen(), &mut cursor));
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let action = match input::parse(&line, &session.screen()) {
            Ok(action) => action,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        if let Some(label) = action.pending_label() {
            println!("{label}");
        }

        let result = match action {
            Action::Quit => break,
            Action::Help => {
                println!("{}", input::help(&session.screen()));
                continue;
            }
            Action::NewBattle => {
                session.new_battle();
                cursor.reset();
                continue;
            }
            Action::Start(level) => interruptible(session.start(level.or(default_level))).await,
            Action::Move(key) => interruptible(session.select_move(&key)).await,
            Action::Switch(key) => interruptible(session.switch_pokemon(&key)).await,
            Action::Refresh => interruptible(session.refresh()).await,
        };

        match result {
            None => session.abort("Cancelled"),
            // Errors the session records are drawn with the next screen
            Some(Err(e)) if session.error().is_none() => println!("{e}"),
            Some(_) => {}
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.client_config();
    tracing::debug!(server = %config.base_url, "Starting skirmish");
    let mut session =
        skirmish_client::connect(config).context("Failed to set up the HTTP client")?;

    if args.auto {
        return auto::play(&mut session, args.level, args.games).await;
    }

    println!("skirmish - battle the AI");
    println!("========================");
    interactive(session, args.level).await
}
