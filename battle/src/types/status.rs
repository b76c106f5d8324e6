//! Status condition badges

use std::fmt;

use skirmish_protocol::{BattlePokemon, StatusKind};

/// Badge shown next to a creature with a non-volatile status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusBadge(pub StatusKind);

impl StatusBadge {
    pub fn of(pokemon: &BattlePokemon) -> Option<Self> {
        pokemon.status().map(StatusBadge)
    }

    /// Short tag ("BRN", "FRB", "PAR", "PSN", "SLP")
    pub fn tag(&self) -> &'static str {
        match self.0 {
            StatusKind::Burned => "BRN",
            StatusKind::Frostbitten => "FRB",
            StatusKind::Paralyzed => "PAR",
            StatusKind::Poisoned => "PSN",
            StatusKind::Asleep => "SLP",
        }
    }

    /// Get display name
    pub fn label(&self) -> &'static str {
        match self.0 {
            StatusKind::Burned => "Burned",
            StatusKind::Frostbitten => "Frostbitten",
            StatusKind::Paralyzed => "Paralyzed",
            StatusKind::Poisoned => "Poisoned",
            StatusKind::Asleep => "Asleep",
        }
    }
}

impl fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.tag())
    }
}
