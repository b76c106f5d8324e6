use skirmish_protocol::BattleState;

/// How a finished battle ended for us
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    /// `None` while the battle is still running
    pub fn from_state(state: BattleState) -> Option<Self> {
        match state {
            BattleState::Won => Some(Outcome::Won),
            BattleState::Lost => Some(Outcome::Lost),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Outcome::Won => "Victory!",
            Outcome::Lost => "Defeat!",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Won => "Congratulations! You have emerged victorious in this battle!",
            Outcome::Lost => "Your team has been defeated. Better luck next time!",
        }
    }
}
