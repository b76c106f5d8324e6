//! Player input parsing
//!
//! A line is read against the screen it was typed on: `2` picks the second
//! move on the field and the second creature on the replacement screen.

use skirmish_battle::{move_options, switch_options};
use skirmish_client::Screen;
use thiserror::Error;

use crate::args::MAX_LEVEL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Start(Option<u32>),
    Move(String),
    Switch(String),
    Refresh,
    NewBattle,
    Help,
    Quit,
}

impl Action {
    /// Banner printed while the action is in flight
    pub fn pending_label(&self) -> Option<&'static str> {
        match self {
            Action::Start(_) => Some("Loading battle..."),
            Action::Move(_) => Some("Processing command..."),
            Action::Switch(_) => Some("Processing switch..."),
            Action::Refresh => Some("Refreshing..."),
            _ => None,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Type a command, or `help`")]
    Empty,

    #[error("Unknown command: {0}. Type `help` for commands.")]
    Unknown(String),

    #[error("Level must be a number between 1 and {max}, got `{0}`", max = MAX_LEVEL)]
    BadLevel(String),

    #[error("No choice number {0}")]
    NoSuchChoice(usize),
}

pub fn parse(line: &str, screen: &Screen<'_>) -> Result<Action, InputError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let word = word.to_ascii_lowercase();

    match word.as_str() {
        "" => return Err(InputError::Empty),
        "help" | "?" => return Ok(Action::Help),
        "quit" | "exit" => return Ok(Action::Quit),
        _ => {}
    }

    match screen {
        Screen::Configuration { .. } => match word.as_str() {
            "start" => parse_level(rest).map(Action::Start),
            _ => Err(InputError::Unknown(line.to_string())),
        },
        Screen::Error(_) | Screen::Finished { .. } => match word.as_str() {
            "new" | "back" => Ok(Action::NewBattle),
            _ => Err(InputError::Unknown(line.to_string())),
        },
        Screen::Loading | Screen::Empty => common(&word, line),
        Screen::Field { battle, .. } => {
            let options = battle
                .active_pokemon_player
                .as_ref()
                .map(move_options)
                .unwrap_or_default();

            if let Ok(n) = word.parse::<usize>() {
                return n
                    .checked_sub(1)
                    .and_then(|i| options.get(i))
                    .map(|o| Action::Move(o.key.clone()))
                    .ok_or(InputError::NoSuchChoice(n));
            }
            if let Some(option) = options.iter().find(|o| o.key == line) {
                return Ok(Action::Move(option.key.clone()));
            }
            common(&word, line)
        }
        Screen::Replace(battle) => {
            let options = switch_options(&battle.player_team);

            if let Ok(n) = word.parse::<usize>() {
                return n
                    .checked_sub(1)
                    .and_then(|i| options.get(i))
                    .map(|o| Action::Switch(o.key.clone()))
                    .ok_or(InputError::NoSuchChoice(n));
            }
            if battle.player_team.get(line).is_some() {
                return Ok(Action::Switch(line.to_string()));
            }
            common(&word, line)
        }
    }
}

fn common(word: &str, line: &str) -> Result<Action, InputError> {
    match word {
        "refresh" | "r" => Ok(Action::Refresh),
        "new" => Ok(Action::NewBattle),
        _ => Err(InputError::Unknown(line.to_string())),
    }
}

fn parse_level(arg: &str) -> Result<Option<u32>, InputError> {
    if arg.is_empty() {
        return Ok(None);
    }
    match arg.parse::<u32>() {
        Ok(level) if (1..=MAX_LEVEL).contains(&level) => Ok(Some(level)),
        _ => Err(InputError::BadLevel(arg.to_string())),
    }
}

pub fn help(screen: &Screen<'_>) -> &'static str {
    match screen {
        Screen::Configuration { .. } => {
            "Commands:\n  start [level]  - Start a battle against the AI\n  quit           - Exit"
        }
        Screen::Field { .. } => {
            "Commands:\n  1-4 | <move>   - Use a move\n  refresh        - Reload the battle\n  new            - Abandon and go back to configuration\n  quit           - Exit"
        }
        Screen::Replace(_) => {
            "Commands:\n  <n> | <key>    - Send in a creature\n  refresh        - Reload the battle\n  new            - Abandon and go back to configuration\n  quit           - Exit"
        }
        Screen::Finished { .. } | Screen::Error(_) => {
            "Commands:\n  new            - Back to configuration\n  quit           - Exit"
        }
        Screen::Loading | Screen::Empty => {
            "Commands:\n  refresh        - Reload the battle\n  new            - Back to configuration\n  quit           - Exit"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use skirmish_client::{Awaiting, BattleState, Outcome};

    #[test]
    fn test_global_commands() {
        let screen = Screen::Configuration { last_error: None };
        assert_eq!(parse("help", &screen), Ok(Action::Help));
        assert_eq!(parse("  QUIT ", &screen), Ok(Action::Quit));
        assert_eq!(parse("", &screen), Err(InputError::Empty));
    }

    #[test]
    fn test_start_with_level() {
        let screen = Screen::Configuration { last_error: None };
        assert_eq!(parse("start", &screen), Ok(Action::Start(None)));
        assert_eq!(parse("start 30", &screen), Ok(Action::Start(Some(30))));
        assert_eq!(
            parse("start 0", &screen),
            Err(InputError::BadLevel("0".into()))
        );
        assert_eq!(
            parse("start high", &screen),
            Err(InputError::BadLevel("high".into()))
        );
        assert!(matches!(parse("1", &screen), Err(InputError::Unknown(_))));
    }

    #[test]
    fn test_move_by_number_and_key() {
        let battle = fixtures::battle_in(BattleState::WaitingForInputMoves);
        let screen = Screen::Field {
            battle: &battle,
            awaiting: Awaiting::MoveSelection,
        };

        assert_eq!(parse("1", &screen), Ok(Action::Move("thunder-shock".into())));
        assert_eq!(parse("4", &screen), Ok(Action::Move("thunderbolt".into())));
        assert_eq!(parse("5", &screen), Err(InputError::NoSuchChoice(5)));
        assert_eq!(parse("0", &screen), Err(InputError::NoSuchChoice(0)));
        assert_eq!(parse("growl", &screen), Ok(Action::Move("growl".into())));
        assert_eq!(parse("refresh", &screen), Ok(Action::Refresh));
        assert_eq!(parse("new", &screen), Ok(Action::NewBattle));
        assert!(matches!(parse("thunder", &screen), Err(InputError::Unknown(_))));
    }

    #[test]
    fn test_switch_by_number_and_key() {
        let battle = fixtures::battle_in(BattleState::WaitingForInputReplacePokemon);
        let screen = Screen::Replace(&battle);

        // Fainted members are not numbered
        assert_eq!(parse("2", &screen), Ok(Action::Switch("poke-a2".into())));
        assert_eq!(parse("3", &screen), Err(InputError::NoSuchChoice(3)));
        assert_eq!(
            parse("poke-a2", &screen),
            Ok(Action::Switch("poke-a2".into()))
        );
    }

    #[test]
    fn test_finished_and_error_screens() {
        let battle = fixtures::battle_in(BattleState::Won);
        let finished = Screen::Finished {
            battle: &battle,
            outcome: Outcome::Won,
        };
        assert_eq!(parse("new", &finished), Ok(Action::NewBattle));
        assert!(matches!(parse("1", &finished), Err(InputError::Unknown(_))));

        let error = Screen::Error("API Error: 500 Internal Server Error");
        assert_eq!(parse("back", &error), Ok(Action::NewBattle));
    }

    #[test]
    fn test_pending_labels() {
        assert_eq!(Action::Start(None).pending_label(), Some("Loading battle..."));
        assert_eq!(
            Action::Move("growl".into()).pending_label(),
            Some("Processing command...")
        );
        assert_eq!(Action::Quit.pending_label(), None);
    }
}
