//! Replacement list

use skirmish_protocol::BattleTeam;

/// A creature that can be sent in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOption {
    pub key: String,
    pub name: String,
    pub level: u32,
    pub current_hp: u32,
    pub max_hp: u32,
    pub types: Vec<String>,
}

/// Alive team members, in team order
pub fn switch_options(team: &BattleTeam) -> Vec<SwitchOption> {
    team.alive()
        .map(|p| SwitchOption {
            key: p.key.clone(),
            name: p.name().to_string(),
            level: p.level(),
            current_hp: p.current_hp,
            max_hp: p.max_hp,
            types: p.types.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_fainted_members_are_skipped() {
        let battle = fixtures::battle();
        let options = switch_options(&battle.player_team);

        let keys: Vec<_> = options.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["poke-a1", "poke-a2"]);
    }

    #[test]
    fn test_option_fields() {
        let battle = fixtures::battle();
        let options = switch_options(&battle.player_team);

        let bulbasaur = &options[1];
        assert_eq!(bulbasaur.name, "Bulbasaur");
        assert_eq!(bulbasaur.level, 24);
        assert_eq!((bulbasaur.current_hp, bulbasaur.max_hp), (45, 45));
        assert_eq!(bulbasaur.types, vec!["GRASS", "POISON"]);
    }

    #[test]
    fn test_whole_team_fainted() {
        let mut battle = fixtures::battle();
        for p in &mut battle.player_team.pokemon {
            p.alive = false;
        }
        assert!(switch_options(&battle.player_team).is_empty());
    }
}
