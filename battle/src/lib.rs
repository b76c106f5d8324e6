//! View models for skirmish battle snapshots.
//!
//! The battle service owns every rule of the game. This crate only turns a
//! [`Battle`] snapshot into the pieces a front end draws: health bars, status
//! badges, the move grid, the replacement list, the log tail and the final
//! banner.
//!
//! ```text
//! skirmish-protocol (wire format)
//!        │
//!        ▼
//! skirmish-battle (view models) ← THIS CRATE
//!        │
//!        ▼
//! skirmish-client / skirmish-cli
//! ```
//!
//! # Example Usage
//!
//! ```ignore
//! use skirmish_battle::{HpBand, move_options};
//!
//! if let Some(active) = &battle.active_pokemon_player {
//!     println!("{} is {:?}", active.name(), HpBand::of(active));
//!     for option in move_options(active) {
//!         println!("{} {}", option.name, option.pp_label());
//!     }
//! }
//! ```

pub mod query;
pub mod tracking;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use query::{MAX_MOVE_OPTIONS, MoveOption, SwitchOption, move_options, switch_options};
pub use tracking::{LOG_TAIL, LogCursor, recent_logs};
pub use types::{HpBand, Outcome, StatusBadge, hp_percent, sprite_initial};

pub use skirmish_protocol::{Battle, BattlePokemon, BattleState, StatusKind};
