use skirmish_battle::Outcome;
use skirmish_protocol::Battle;

/// What the battle area shows while the player's creature is on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Awaiting {
    /// The move grid is active
    MoveSelection,
    /// The service still has to run the opponent's turn
    ProcessingTurn,
    Opponent,
}

/// The view a front end should draw for the current session state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen<'a> {
    /// Battle setup; carries the error that sent us back here, if any
    Configuration { last_error: Option<&'a str> },
    Loading,
    Error(&'a str),
    /// Configuration left, but no snapshot arrived
    Empty,
    Finished {
        battle: &'a Battle,
        outcome: Outcome,
    },
    /// Our creature fainted, a team member must be picked
    Replace(&'a Battle),
    Field {
        battle: &'a Battle,
        awaiting: Awaiting,
    },
}

impl Screen<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Configuration { .. } => "configuration",
            Screen::Loading => "loading",
            Screen::Error(_) => "error",
            Screen::Empty => "empty",
            Screen::Finished { .. } => "finished",
            Screen::Replace(_) => "replace",
            Screen::Field { .. } => "field",
        }
    }
}
