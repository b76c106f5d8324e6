//! Move grid

use skirmish_protocol::{BattlePokemon, MoveCategory, MoveSlot};

/// A creature never offers more than four moves
pub const MAX_MOVE_OPTIONS: usize = 4;

const DEFAULT_MOVE_TYPE: &str = "normal";

/// One button of the move grid
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOption {
    pub key: String,
    pub name: String,
    /// First listed type, `normal` if the move has none
    pub primary_type: String,
    pub category: MoveCategory,
    pub power: u32,
    pub current_pp: u32,
    pub max_pp: u32,
    /// False once PP ran out
    pub usable: bool,
}

impl MoveOption {
    pub fn from_slot(slot: &MoveSlot) -> Self {
        Self {
            key: slot.data.key.clone(),
            name: slot.data.name.clone(),
            primary_type: slot
                .data
                .types
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_MOVE_TYPE.to_string()),
            category: slot.data.category,
            power: slot.data.power,
            current_pp: slot.current_pp,
            max_pp: slot.max_pp,
            usable: slot.has_pp(),
        }
    }

    /// `-` for moves without base power
    pub fn power_label(&self) -> String {
        if self.power == 0 {
            "-".to_string()
        } else {
            self.power.to_string()
        }
    }

    pub fn pp_label(&self) -> String {
        format!("{}/{}", self.current_pp, self.max_pp)
    }
}

/// Moves offered for `pokemon`, in slot order
pub fn move_options(pokemon: &BattlePokemon) -> Vec<MoveOption> {
    pokemon
        .moves
        .iter()
        .take(MAX_MOVE_OPTIONS)
        .map(MoveOption::from_slot)
        .collect()
}
