//! # Game Session
//!
//! Drives a game one turn at a time: ask the strategy for a move, send it,
//! replace the state with the server's answer, repeat until the turn limit.

use super::Strategy;
use crate::{
    ConsiditionError, ConsiditionResult, GameClient, GameInfo, GameState, Score, Transport,
};
use log::{debug, info, warn};

/// One game being played through a client.
///
/// Requests are issued strictly one after another; the session never has
/// more than one call in flight.
#[derive(Debug)]
pub struct GameSession<'a, T: Transport> {
    client: &'a GameClient<T>,
    info: GameInfo,
    /// Turn of the most recent state seen
    last_turn: Option<u32>,
}

impl<'a, T: Transport> GameSession<'a, T> {
    pub fn new(client: &'a GameClient<T>, info: GameInfo) -> Self {
        Self {
            client,
            info,
            last_turn: None,
        }
    }

    pub fn info(&self) -> &GameInfo {
        &self.info
    }

    pub fn game_id(&self) -> &str {
        &self.info.game_id
    }

    /// Whether `state` is at or past the turn limit.
    pub fn is_finished(&self, state: &GameState) -> bool {
        state.turn >= self.info.max_turns
    }

    /// Starts the game and returns its first state.
    pub async fn start(&mut self) -> ConsiditionResult<GameState> {
        info!("Starting game: {}", self.info.game_id);
        let state = self.client.start_game(Some(&self.info.game_id)).await?;
        self.observe(state)
    }

    /// Plays a single turn from `state`.
    pub async fn take_turn<S: Strategy + ?Sized>(
        &mut self,
        strategy: &mut S,
        state: &GameState,
    ) -> ConsiditionResult<GameState> {
        let action = strategy.next_action(&self.info, state)?;
        debug!("Turn {}: {:?}", state.turn, action);

        let next = self
            .client
            .perform(Some(&self.info.game_id), &action)
            .await?;
        self.observe(next)
    }

    /// Starts the game, plays until the turn limit and fetches the score.
    pub async fn play<S: Strategy + ?Sized>(
        &mut self,
        strategy: &mut S,
    ) -> ConsiditionResult<Score> {
        let mut state = self.start().await?;
        while !self.is_finished(&state) {
            state = self.take_turn(strategy, &state).await?;
        }

        let score = self.client.score(Some(&self.info.game_id)).await?;
        info!("Done with game: {}", self.info.game_id);
        info!("Final total score was: {}", score.final_score);
        Ok(score)
    }

    /// Ends the game on the server.
    pub async fn end(&self) -> ConsiditionResult<()> {
        self.client.end_game(Some(&self.info.game_id)).await
    }

    /// Plays the game, ending it on the server if any turn fails.
    ///
    /// The play error is returned even when ending the game fails too; the
    /// client has already logged that second failure.
    pub async fn play_or_end<S: Strategy + ?Sized>(
        &mut self,
        strategy: &mut S,
    ) -> ConsiditionResult<Score> {
        let result = self.play(strategy).await;
        if result.is_err() {
            warn!("Ending game {} after failure", self.info.game_id);
            self.end().await.ok();
        }
        result
    }

    /// Checks turn order and surfaces the server's messages.
    fn observe(&mut self, state: GameState) -> ConsiditionResult<GameState> {
        if let Some(last_turn) = self.last_turn {
            if state.turn < last_turn {
                return Err(ConsiditionError::InvalidState(format!(
                    "turn went backwards from {} to {}",
                    last_turn, state.turn
                )));
            }
        }
        self.last_turn = Some(state.turn);

        for message in &state.messages {
            info!("{}", message);
        }
        for error in &state.errors {
            warn!("Error: {}", error);
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::info::tests::sample_info;
    use crate::model::state::tests::state_json;
    use crate::{Action, ScriptedTransport};

    struct AlwaysWait;

    impl Strategy for AlwaysWait {
        fn next_action(
            &mut self,
            _info: &GameInfo,
            _state: &GameState,
        ) -> ConsiditionResult<Action> {
            Ok(Action::Wait)
        }
    }

    fn short_game() -> GameInfo {
        let mut info = sample_info();
        info.max_turns = 3;
        info
    }

    #[test]
    fn test_play_runs_until_turn_limit() {
        let transport = ScriptedTransport::new();
        for turn in 0..=3 {
            transport.push_response(state_json(turn, vec![]));
        }
        transport.push_response(serde_json::json!({
            "gameId": "0c9a6f5e-game",
            "totalCo2": 0.0,
            "totalHappiness": 0.0,
            "finalPopulation": 0,
            "finalScore": 42.0
        }));
        let client = GameClient::new(transport, "key");

        let mut session = GameSession::new(&client, short_game());
        let score = tokio_test::block_on(session.play(&mut AlwaysWait)).unwrap();
        assert_eq!(score.final_score, 42.0);

        let paths: Vec<_> = client
            .transport()
            .calls()
            .into_iter()
            .map(|call| call.request.path)
            .collect();
        assert_eq!(
            paths,
            vec!["/start", "/action/wait", "/action/wait", "/action/wait", "/score"]
        );
        for call in client.transport().calls() {
            assert_eq!(call.request.query_param("GameId"), Some("0c9a6f5e-game"));
        }
    }

    #[test]
    fn test_turn_going_backwards_is_rejected() {
        let transport = ScriptedTransport::new()
            .with_response(state_json(2, vec![]))
            .with_response(state_json(1, vec![]));
        let client = GameClient::new(transport, "key");

        let mut session = GameSession::new(&client, short_game());
        let result = tokio_test::block_on(session.play(&mut AlwaysWait));
        assert!(matches!(result, Err(ConsiditionError::InvalidState(_))));
    }

    #[test]
    fn test_server_failure_stops_the_loop() {
        let transport = ScriptedTransport::new().with_response(state_json(0, vec![]));
        transport.push_failure(ConsiditionError::Server {
            status: 400,
            message: "Game not started".to_string(),
        });
        let client = GameClient::new(transport, "key");

        let mut session = GameSession::new(&client, short_game());
        let result = tokio_test::block_on(session.play(&mut AlwaysWait));
        assert!(matches!(result, Err(ConsiditionError::Server { status: 400, .. })));
        assert_eq!(client.transport().calls().len(), 2);
    }

    #[test]
    fn test_failed_game_is_ended_once() {
        let transport = ScriptedTransport::new().with_response(state_json(0, vec![]));
        transport.push_failure(ConsiditionError::Server {
            status: 400,
            message: "Invalid position".to_string(),
        });
        transport.push_failure(ConsiditionError::Transport("connection reset".to_string()));
        let client = GameClient::new(transport, "key");

        let mut session = GameSession::new(&client, short_game());
        let result = tokio_test::block_on(session.play_or_end(&mut AlwaysWait));
        assert!(matches!(result, Err(ConsiditionError::Server { status: 400, .. })));

        let calls = client.transport().calls();
        let paths: Vec<_> = calls.iter().map(|call| call.request.path).collect();
        assert_eq!(paths, vec!["/start", "/action/wait", "/end"]);
        assert_eq!(calls[2].request.query_param("GameId"), Some("0c9a6f5e-game"));
    }

    #[test]
    fn test_successful_game_is_not_ended() {
        let transport = ScriptedTransport::new().with_response(state_json(3, vec![]));
        transport.push_response(serde_json::json!({
            "gameId": "0c9a6f5e-game",
            "totalCo2": 0.0,
            "totalHappiness": 0.0,
            "finalPopulation": 0,
            "finalScore": 7.0
        }));
        let client = GameClient::new(transport, "key");

        let mut session = GameSession::new(&client, short_game());
        let score = tokio_test::block_on(session.play_or_end(&mut AlwaysWait)).unwrap();
        assert_eq!(score.final_score, 7.0);
        assert_eq!(client.transport().remaining(), 0);
        assert_eq!(client.transport().calls().len(), 2);
    }

    #[test]
    fn test_turn_may_repeat() {
        let transport = ScriptedTransport::new()
            .with_response(state_json(1, vec![]))
            .with_response(state_json(1, vec![]));
        let client = GameClient::new(transport, "key");

        let mut session = GameSession::new(&client, short_game());
        let state = tokio_test::block_on(session.start()).unwrap();
        let next = tokio_test::block_on(session.take_turn(&mut AlwaysWait, &state)).unwrap();
        assert_eq!(next.turn, 1);
    }
}
