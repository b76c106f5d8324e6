//! Choices offered to the player
//!
//! The battle service validates every command again; these helpers only
//! decide what the front end offers.

mod moves;
mod team;

pub use moves::{MAX_MOVE_OPTIONS, MoveOption, move_options};
pub use team::{SwitchOption, switch_options};
