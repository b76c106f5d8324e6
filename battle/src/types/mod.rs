//! Presentation types for a single snapshot

mod health;
mod outcome;
mod status;

pub use health::{HpBand, hp_percent, sprite_initial};
pub use outcome::Outcome;
pub use status::StatusBadge;
