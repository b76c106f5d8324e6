//! HP bar helpers

use skirmish_protocol::BattlePokemon;

/// Remaining HP as a percentage in `0.0..=100.0`
pub fn hp_percent(pokemon: &BattlePokemon) -> f64 {
    if pokemon.max_hp == 0 {
        return 0.0;
    }
    (f64::from(pokemon.current_hp) / f64::from(pokemon.max_hp) * 100.0).clamp(0.0, 100.0)
}

/// Colour band of the HP bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HpBand {
    /// Above 50%
    Healthy,
    /// Above 20%
    Wounded,
    Critical,
}

impl HpBand {
    pub fn from_percent(percent: f64) -> Self {
        if percent > 50.0 {
            HpBand::Healthy
        } else if percent > 20.0 {
            HpBand::Wounded
        } else {
            HpBand::Critical
        }
    }

    pub fn of(pokemon: &BattlePokemon) -> Self {
        Self::from_percent(hp_percent(pokemon))
    }

    /// Fill character used by text renderers
    pub fn fill(&self) -> char {
        match self {
            HpBand::Healthy => '#',
            HpBand::Wounded => '=',
            HpBand::Critical => '-',
        }
    }
}

/// Stand-in for a missing sprite: first letter of the species, upper-cased
pub fn sprite_initial(pokemon: &BattlePokemon) -> String {
    pokemon
        .name()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
