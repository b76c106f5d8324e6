//! Text rendering of session screens

use std::fmt::Write;

use skirmish_battle::{
    HpBand, LOG_TAIL, LogCursor, StatusBadge, hp_percent, move_options, recent_logs,
    sprite_initial, switch_options,
};
use skirmish_client::{Awaiting, Screen};
use skirmish_protocol::{Battle, BattlePokemon, LogEntry};

const HP_BAR_WIDTH: usize = 20;

/// Render `screen`, preceded by any log lines that arrived since the last
/// call and do not fit in the log tail.
pub fn screen(screen: &Screen<'_>, cursor: &mut LogCursor) -> String {
    let mut out = String::new();

    if let Some(battle) = battle_of(screen) {
        let fresh = cursor.advance(battle);
        let hidden = fresh.len().saturating_sub(LOG_TAIL);
        out.push_str(&feed(&fresh[..hidden]));
    }

    match screen {
        Screen::Configuration { last_error } => {
            if let Some(error) = last_error {
                let _ = writeln!(out, "Error: {error}");
            }
            out.push_str("Type `start [level]` to battle the AI, `quit` to exit.\n");
        }
        Screen::Loading => out.push_str("Loading battle...\n"),
        Screen::Error(error) => {
            let _ = writeln!(out, "Error: {error}");
            out.push_str("Type `back` to return to configuration.\n");
        }
        Screen::Empty => out.push_str("No battle data available\n"),
        Screen::Finished { battle, outcome } => {
            log_tail(&mut out, battle);
            let _ = writeln!(out, "\n*** {} ***", outcome.title());
            let _ = writeln!(out, "{}", outcome.message());
            out.push_str("Type `new` to start a new battle.\n");
        }
        Screen::Replace(battle) => {
            header(&mut out, battle);
            opponent(&mut out, battle);
            log_tail(&mut out, battle);
            out.push_str("\nChoose a creature to switch in:\n");
            for (i, option) in switch_options(&battle.player_team).iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  {}) {:<12} Level {:<3} HP: {}/{}  {}",
                    i + 1,
                    option.name,
                    option.level,
                    option.current_hp,
                    option.max_hp,
                    option.types.join(" / ")
                );
            }
        }
        Screen::Field { battle, awaiting } => {
            header(&mut out, battle);
            opponent(&mut out, battle);
            match &battle.active_pokemon_player {
                Some(active) => pokemon_panel(&mut out, "Your creature", active),
                None => out.push_str("Your creature\n  (none on the field)\n"),
            }
            log_tail(&mut out, battle);
            out.push('\n');
            match awaiting {
                Awaiting::MoveSelection => move_grid(&mut out, battle),
                Awaiting::ProcessingTurn => out.push_str("Processing turn...\n"),
                Awaiting::Opponent => out.push_str("Waiting for opponent...\n"),
            }
        }
    }

    out
}

/// Log messages, one per line
pub fn feed(entries: &[LogEntry]) -> String {
    entries.iter().fold(String::new(), |mut out, entry| {
        let _ = writeln!(out, "> {}", entry.message);
        out
    })
}

fn battle_of<'a>(screen: &Screen<'a>) -> Option<&'a Battle> {
    match *screen {
        Screen::Finished { battle, .. } | Screen::Replace(battle) | Screen::Field { battle, .. } => {
            Some(battle)
        }
        _ => None,
    }
}

fn header(out: &mut String, battle: &Battle) {
    let _ = writeln!(
        out,
        "\n=== {} vs {} | Turn {} ===",
        battle.player_a.name, battle.player_b.name, battle.turn
    );
}

fn opponent(out: &mut String, battle: &Battle) {
    match &battle.active_pokemon_opponent {
        Some(pokemon) => pokemon_panel(out, "Opponent", pokemon),
        None => out.push_str("Opponent\n  (none on the field)\n"),
    }
}

fn pokemon_panel(out: &mut String, title: &str, pokemon: &BattlePokemon) {
    let _ = writeln!(out, "{title}");

    let badge = StatusBadge::of(pokemon)
        .map(|b| format!("  {b}"))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "  ({}) {}  Lv.{}{}",
        sprite_initial(pokemon),
        pokemon.name(),
        pokemon.level(),
        badge
    );
    if !pokemon.types.is_empty() {
        let _ = writeln!(out, "  {}", pokemon.types.join(" / "));
    }
    let _ = writeln!(
        out,
        "  HP: {}/{} {}",
        pokemon.current_hp,
        pokemon.max_hp,
        hp_bar(pokemon)
    );
}

pub fn hp_bar(pokemon: &BattlePokemon) -> String {
    let percent = hp_percent(pokemon);
    let filled = ((percent / 100.0) * HP_BAR_WIDTH as f64).round() as usize;
    let fill = HpBand::from_percent(percent).fill();

    format!(
        "[{}{}]",
        fill.to_string().repeat(filled),
        " ".repeat(HP_BAR_WIDTH - filled)
    )
}

fn log_tail(out: &mut String, battle: &Battle) {
    if battle.logs.is_empty() {
        return;
    }
    out.push_str("Battle Log\n");
    for message in recent_logs(battle, LOG_TAIL) {
        let _ = writeln!(out, "  {message}");
    }
}

fn move_grid(out: &mut String, battle: &Battle) {
    let Some(active) = &battle.active_pokemon_player else {
        out.push_str("No creature on the field.\n");
        return;
    };

    out.push_str("Choose your move:\n");
    for (i, option) in move_options(active).iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}) {:<16} {:<9} PWR: {:<4} PP: {}{}",
            i + 1,
            option.name,
            option.primary_type,
            option.power_label(),
            option.pp_label(),
            if option.usable { "" } else { "  (no PP)" }
        );
    }
}
