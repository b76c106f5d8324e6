//! Battle session controller
//!
//! A session owns the latest snapshot and turns player intents into service
//! calls. After every command it drives the battle out of `PROCESSING` by
//! alternating force-action and info requests, bounded by the configured
//! [`ProcessingPolicy`](crate::ProcessingPolicy).

use skirmish_battle::{Outcome, move_options};
use skirmish_protocol::{Battle, PlayerCommand};

use crate::api::BattleApi;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::screen::{Awaiting, Screen};

pub struct BattleSession<A> {
    api: A,
    config: ClientConfig,
    battle: Option<Battle>,
    player_key: Option<String>,
    loading: bool,
    error: Option<String>,
    show_configuration: bool,
}

impl<A: BattleApi> BattleSession<A> {
    pub fn new(api: A, config: ClientConfig) -> Self {
        Self {
            api,
            config,
            battle: None,
            player_key: None,
            loading: false,
            error: None,
            show_configuration: true,
        }
    }

    /// Register a player and open a battle against the AI
    pub async fn start(&mut self, level: Option<u32>) -> Result<()> {
        self.error = None;
        self.show_configuration = false;
        self.loading = true;

        let result = self.open_battle(level).await;
        if result.is_ok() {
            self.settle().await;
        }
        self.loading = false;

        if let Err(e) = &result {
            tracing::warn!(error = %e, "Failed to initialize battle");
            self.error = Some(e.to_string());
            self.show_configuration = true;
        }
        result
    }

    async fn open_battle(&mut self, level: Option<u32>) -> Result<()> {
        let player_key = self.api.create_player(&self.config.player_name).await?;
        self.player_key = Some(player_key.clone());

        let battle = self.api.create_battle(&player_key, level).await?;
        tracing::info!(battle_id = battle.id, state = %battle.state, "Battle created");
        self.battle = Some(battle);
        Ok(())
    }

    /// Use one of the active creature's first four moves
    pub async fn select_move(&mut self, move_key: &str) -> Result<()> {
        let command = {
            let (battle, player_key) = self.current()?;
            if !battle.state.awaits_move() {
                return Err(Error::UnexpectedState {
                    expected: "a move",
                    state: battle.state,
                });
            }

            let active = battle
                .active_pokemon_player
                .as_ref()
                .ok_or(Error::NoActivePokemon)?;
            let option = move_options(active)
                .into_iter()
                .find(|o| o.key == move_key)
                .ok_or_else(|| Error::UnknownMove(move_key.to_string()))?;
            if !option.usable {
                return Err(Error::NoPp(option.name));
            }

            PlayerCommand::use_move(battle, player_key, move_key, &active.key)
        };

        self.dispatch(command).await
    }

    /// Send in a replacement for a fainted creature
    pub async fn switch_pokemon(&mut self, pokemon_key: &str) -> Result<()> {
        let command = {
            let (battle, player_key) = self.current()?;
            if !battle.state.awaits_replacement() {
                return Err(Error::UnexpectedState {
                    expected: "a replacement",
                    state: battle.state,
                });
            }

            match battle.player_team.get(pokemon_key) {
                Some(p) if p.alive => {}
                _ => return Err(Error::InvalidSwitch(pokemon_key.to_string())),
            }

            PlayerCommand::switch_to(battle, player_key, pokemon_key)
        };

        self.dispatch(command).await
    }

    async fn dispatch(&mut self, command: PlayerCommand) -> Result<()> {
        self.error = None;
        self.loading = true;

        tracing::debug!(
            battle_id = command.battle_id,
            command = command.command_type.as_str(),
            "Sending command"
        );
        let result = match self.api.send_command(&command).await {
            Ok(battle) => {
                self.battle = Some(battle);
                self.settle().await;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        };

        self.loading = false;
        result
    }

    /// Re-fetch the snapshot. A failed request keeps the current one.
    pub async fn refresh(&mut self) -> Result<()> {
        let (battle, player_key) = self.current()?;
        let (battle_id, player_key) = (battle.id, player_key.to_string());

        match self.api.battle_info(battle_id, &player_key).await {
            Ok(battle) => {
                self.battle = Some(battle);
                self.settle().await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(battle_id, error = %e, "Failed to refresh battle state");
                Err(e)
            }
        }
    }

    /// Drive the battle out of `PROCESSING`.
    ///
    /// Each round forces the pending AI action and re-fetches the snapshot if
    /// the service is still busy. Stops after `max_rounds` rounds and keeps
    /// whatever snapshot came last.
    pub async fn settle(&mut self) {
        let Some(player_key) = self.player_key.clone() else {
            return;
        };
        let policy = self.config.processing.clone();
        let mut rounds = 0;

        loop {
            let battle_id = match &self.battle {
                Some(battle) if battle.is_processing() => battle.id,
                _ => break,
            };

            if rounds >= policy.max_rounds {
                tracing::warn!(
                    battle_id,
                    rounds,
                    "Battle still processing, giving up for now"
                );
                break;
            }
            if rounds > 0 {
                tokio::time::sleep(policy.poll_interval).await;
            }
            rounds += 1;

            tracing::debug!(battle_id, round = rounds, "Forcing AI action");
            match self.api.force_ai_action(battle_id).await {
                Ok(battle) => {
                    let still_processing = battle.is_processing();
                    self.battle = Some(battle);
                    if still_processing {
                        self.reload(battle_id, &player_key).await;
                    }
                }
                Err(e) => {
                    tracing::warn!(battle_id, error = %e, "Failed to force AI action");
                    self.reload(battle_id, &player_key).await;
                }
            }
        }
    }

    async fn reload(&mut self, battle_id: u64, player_key: &str) {
        match self.api.battle_info(battle_id, player_key).await {
            Ok(battle) => self.battle = Some(battle),
            Err(e) => {
                tracing::warn!(battle_id, error = %e, "Failed to refresh battle state");
            }
        }
    }

    /// Drop the battle and return to configuration
    pub fn new_battle(&mut self) {
        self.battle = None;
        self.player_key = None;
        self.error = None;
        self.loading = false;
        self.show_configuration = true;
    }

    /// Recover after an operation future was dropped mid-flight
    pub fn abort(&mut self, reason: &str) {
        if self.loading {
            self.loading = false;
            self.error = Some(reason.to_string());
        }
    }

    pub fn screen(&self) -> Screen<'_> {
        if self.show_configuration {
            return Screen::Configuration {
                last_error: self.error.as_deref(),
            };
        }
        if self.loading {
            return Screen::Loading;
        }
        if let Some(error) = &self.error {
            return Screen::Error(error);
        }

        let Some(battle) = &self.battle else {
            return Screen::Empty;
        };

        if let Some(outcome) = Outcome::from_state(battle.state) {
            return Screen::Finished { battle, outcome };
        }
        if battle.state.awaits_replacement() {
            return Screen::Replace(battle);
        }

        let awaiting = if battle.state.awaits_move() {
            Awaiting::MoveSelection
        } else if battle.is_processing() {
            Awaiting::ProcessingTurn
        } else {
            Awaiting::Opponent
        };
        Screen::Field { battle, awaiting }
    }

    fn current(&self) -> Result<(&Battle, &str)> {
        match (&self.battle, &self.player_key) {
            (Some(battle), Some(key)) => Ok((battle, key)),
            _ => Err(Error::NoBattle),
        }
    }

    pub fn battle(&self) -> Option<&Battle> {
        self.battle.as_ref()
    }

    pub fn player_key(&self) -> Option<&str> {
        self.player_key.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, ScriptedApi, battle_in, config, server_error};
    use skirmish_protocol::{BattleState, CommandType};

    /// Service whose next battle opens in `state`
    fn opened(state: BattleState) -> ScriptedApi {
        ScriptedApi::new().then(Ok(battle_in(state)))
    }

    async fn started(api: ScriptedApi) -> BattleSession<ScriptedApi> {
        let mut session = BattleSession::new(api, config(5));
        session.start(None).await.unwrap();
        session
    }

    #[tokio::test]
    async fn test_initial_screen_is_configuration() {
        let session = BattleSession::new(ScriptedApi::new(), config(5));
        assert_eq!(session.screen(), Screen::Configuration { last_error: None });
        assert!(session.battle().is_none());
    }

    #[tokio::test]
    async fn test_start_creates_player_then_battle() {
        let api = ScriptedApi::new().then(Ok(battle_in(BattleState::WaitingForInputMoves)));
        let mut session = BattleSession::new(api, config(5));

        session.start(Some(30)).await.unwrap();

        assert_eq!(
            session.api().calls(),
            vec![
                Call::CreatePlayer("Player".into()),
                Call::CreateBattle("pk-1".into(), Some(30)),
            ]
        );
        assert_eq!(session.player_key(), Some("pk-1"));
        assert!(!session.is_loading());
        assert!(matches!(
            session.screen(),
            Screen::Field {
                awaiting: Awaiting::MoveSelection,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_start_failure_returns_to_configuration() {
        let api = ScriptedApi::new().with_player(Err(server_error()));
        let mut session = BattleSession::new(api, config(5));

        assert!(session.start(None).await.is_err());

        assert_eq!(
            session.screen(),
            Screen::Configuration {
                last_error: Some("API Error: 500 Internal Server Error")
            }
        );
        assert!(!session.is_loading());
        assert!(session.battle().is_none());
    }

    #[tokio::test]
    async fn test_start_settles_processing_battle() {
        let api = ScriptedApi::new()
            .then(Ok(battle_in(BattleState::Processing)))
            .then(Ok(battle_in(BattleState::WaitingForInputMoves)));
        let mut session = BattleSession::new(api, config(5));

        session.start(None).await.unwrap();

        assert_eq!(session.api().calls().last(), Some(&Call::Force(42)));
        assert_eq!(
            session.battle().unwrap().state,
            BattleState::WaitingForInputMoves
        );
    }

    #[tokio::test]
    async fn test_select_move_sends_command() {
        let api = opened(BattleState::WaitingForInputMoves)
            .then(Ok(battle_in(BattleState::WaitingForInputMoves)));
        let mut session = started(api).await;

        session.select_move("thunderbolt").await.unwrap();

        let Some(Call::Command(command)) = session.api().calls().pop() else {
            panic!("expected a command");
        };
        assert_eq!(command.command_type, CommandType::Move);
        assert_eq!(command.battle_id, 42);
        assert_eq!(command.player_key, "pk-1");
        assert_eq!(command.move_key.as_deref(), Some("thunderbolt"));
        assert_eq!(command.pokemon_key.as_deref(), Some("poke-a1"));
        assert!(session.error().is_none());
    }

    #[tokio::test]
    async fn test_processing_forces_ai_action() {
        let api = opened(BattleState::WaitingForInputMoves)
            .then(Ok(battle_in(BattleState::Processing)))
            .then(Ok(battle_in(BattleState::WaitingForInputMoves)));
        let mut session = started(api).await;

        session.select_move("thunder-shock").await.unwrap();

        let calls = session.api().calls();
        assert!(matches!(calls[2], Call::Command(_)));
        assert_eq!(calls[3], Call::Force(42));
        assert_eq!(calls.len(), 4);
        assert_eq!(
            session.battle().unwrap().state,
            BattleState::WaitingForInputMoves
        );
    }

    #[tokio::test]
    async fn test_still_processing_after_force_refreshes() {
        let api = opened(BattleState::WaitingForInputMoves)
            .then(Ok(battle_in(BattleState::Processing)))
            .then(Ok(battle_in(BattleState::Processing)))
            .then(Ok(battle_in(BattleState::WaitingForInputReplacePokemon)));
        let mut session = started(api).await;

        session.select_move("thunder-shock").await.unwrap();

        let calls = session.api().calls();
        assert_eq!(calls[3..], [Call::Force(42), Call::Info(42, "pk-1".into())]);
        assert!(matches!(session.screen(), Screen::Replace(_)));
    }

    #[tokio::test]
    async fn test_force_failure_falls_back_to_refresh() {
        let api = opened(BattleState::WaitingForInputMoves)
            .then(Ok(battle_in(BattleState::Processing)))
            .then(Err(server_error()))
            .then(Ok(battle_in(BattleState::Lost)));
        let mut session = started(api).await;

        session.select_move("thunder-shock").await.unwrap();

        let calls = session.api().calls();
        assert_eq!(calls[3..], [Call::Force(42), Call::Info(42, "pk-1".into())]);
        assert!(session.error().is_none());
        assert!(matches!(
            session.screen(),
            Screen::Finished {
                outcome: Outcome::Lost,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_processing_rounds_are_bounded() {
        let mut api = opened(BattleState::WaitingForInputMoves)
            .then(Ok(battle_in(BattleState::Processing)));
        for _ in 0..2 {
            api = api
                .then(Ok(battle_in(BattleState::Processing)))
                .then(Ok(battle_in(BattleState::Processing)));
        }
        let mut session = BattleSession::new(api, config(2));
        session.start(None).await.unwrap();
        session.select_move("thunder-shock").await.unwrap();

        assert_eq!(session.api().pending(), 0);
        let forced = session
            .api()
            .calls()
            .iter()
            .filter(|c| matches!(c, Call::Force(_)))
            .count();
        assert_eq!(forced, 2);
        assert!(matches!(
            session.screen(),
            Screen::Field {
                awaiting: Awaiting::ProcessingTurn,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_refresh_resumes_processing() {
        let api = opened(BattleState::Processing)
            .then(Ok(battle_in(BattleState::Processing)))
            .then(Ok(battle_in(BattleState::Processing)))
            .then(Ok(battle_in(BattleState::Processing)))
            .then(Ok(battle_in(BattleState::WaitingForInputMoves)));
        let mut session = BattleSession::new(api, config(1));
        session.start(None).await.unwrap();
        assert!(session.battle().unwrap().is_processing());

        session.refresh().await.unwrap();
        assert_eq!(session.api().pending(), 0);
        assert_eq!(session.api().calls().last(), Some(&Call::Force(42)));
        assert!(session.battle().unwrap().state.awaits_move());
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_snapshot() {
        let api = opened(BattleState::WaitingForInputMoves).then(Err(server_error()));
        let mut session = started(api).await;

        assert!(session.refresh().await.is_err());
        assert_eq!(
            session.battle().unwrap().state,
            BattleState::WaitingForInputMoves
        );
        assert!(session.error().is_none());
    }

    #[tokio::test]
    async fn test_command_failure_shows_error() {
        let api = opened(BattleState::WaitingForInputMoves).then(Err(server_error()));
        let mut session = started(api).await;

        assert!(session.select_move("thunder-shock").await.is_err());
        assert_eq!(
            session.screen(),
            Screen::Error("API Error: 500 Internal Server Error")
        );

        session.new_battle();
        assert_eq!(session.screen(), Screen::Configuration { last_error: None });
        assert!(session.player_key().is_none());
    }

    #[tokio::test]
    async fn test_move_preconditions() {
        let mut session = started(opened(BattleState::WaitingForInputMoves)).await;

        let err = session.select_move("quick-attack").await.unwrap_err();
        assert!(matches!(err, Error::NoPp(ref name) if name == "Quick Attack"));

        // Fifth slot is never offered
        let err = session.select_move("thunder").await.unwrap_err();
        assert!(matches!(err, Error::UnknownMove(_)));
        assert!(err.is_precondition());

        assert_eq!(session.api().calls().len(), 2);
        assert!(session.error().is_none());
    }

    #[tokio::test]
    async fn test_move_rejected_outside_move_phase() {
        let mut session = started(opened(BattleState::WaitingForInputReplacePokemon)).await;

        let err = session.select_move("thunder-shock").await.unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedState {
                state: BattleState::WaitingForInputReplacePokemon,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_switch_sends_replacement() {
        let api = opened(BattleState::WaitingForInputReplacePokemon)
            .then(Ok(battle_in(BattleState::WaitingForInputMoves)));
        let mut session = started(api).await;

        session.switch_pokemon("poke-a2").await.unwrap();

        let Some(Call::Command(command)) = session.api().calls().pop() else {
            panic!("expected a command");
        };
        assert_eq!(command.command_type, CommandType::Switch);
        assert_eq!(command.pokemon_key.as_deref(), Some("poke-a2"));
        assert_eq!(command.origin_slot, Some(1));
    }

    #[tokio::test]
    async fn test_switch_to_fainted_rejected() {
        let mut session = started(opened(BattleState::WaitingForInputReplacePokemon)).await;

        let err = session.switch_pokemon("poke-a3").await.unwrap_err();
        assert!(matches!(err, Error::InvalidSwitch(_)));
        let err = session.switch_pokemon("nobody").await.unwrap_err();
        assert!(matches!(err, Error::InvalidSwitch(_)));
    }

    #[tokio::test]
    async fn test_commands_need_a_battle() {
        let mut session = BattleSession::new(ScriptedApi::new(), config(5));

        assert!(matches!(
            session.select_move("tackle").await,
            Err(Error::NoBattle)
        ));
        assert!(matches!(session.refresh().await, Err(Error::NoBattle)));
        assert!(session.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_won_screen() {
        let session = started(opened(BattleState::Won)).await;
        assert!(matches!(
            session.screen(),
            Screen::Finished {
                outcome: Outcome::Won,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_started_waits_for_opponent() {
        let session = started(opened(BattleState::Started)).await;
        assert!(matches!(
            session.screen(),
            Screen::Field {
                awaiting: Awaiting::Opponent,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_abort_only_when_loading() {
        let mut session = started(opened(BattleState::Started)).await;
        session.abort("Cancelled");
        assert!(session.error().is_none());

        session.loading = true;
        assert_eq!(session.screen(), Screen::Loading);
        session.abort("Cancelled");
        assert_eq!(session.screen(), Screen::Error("Cancelled"));
    }
}
