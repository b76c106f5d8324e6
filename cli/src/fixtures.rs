use skirmish_protocol::{Battle, BattleState, parse_battle};

const BATTLE_JSON: &str = include_str!("../../protocol/testdata/battle.json");

pub fn battle_in(state: BattleState) -> Battle {
    let mut battle = parse_battle(BATTLE_JSON).unwrap();
    battle.state = state;
    battle
}
