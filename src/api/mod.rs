//! # API Module
//!
//! One async method per remote operation of the game server.
//!
//! Each method builds the request for its endpoint, sends it through the
//! client's [`Transport`] and decodes the answer into a model type. Failures
//! are logged with the operation name at this boundary and then returned as
//! a typed [`ConsiditionError`](crate::ConsiditionError); callers that prefer
//! the old "log and give up" behaviour can use
//! [`ConsiditionResultExt::logged`](crate::ConsiditionResultExt::logged) or
//! plain `Result::ok`.

pub mod payloads;
pub mod scripted;
pub mod transport;

pub use payloads::*;
pub use scripted::*;
pub use transport::*;

use crate::{ConsiditionResult, GameInfo, GameState, GameSummary, Position, Score};
use log::{debug, error};
use serde::Serialize;
use serde_json::Value;

/// Query parameter naming the game an action applies to.
pub const GAME_ID_PARAM: &str = "GameId";

/// The remote operations offered by the game server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    NewGame,
    StartGame,
    EndGame,
    PlaceFoundation,
    Build,
    Demolish,
    AdjustEnergy,
    Maintenance,
    Wait,
    BuyUpgrade,
    Score,
    GameInfo,
    GameState,
    Games,
}

impl Endpoint {
    pub fn method(self) -> HttpMethod {
        match self {
            Endpoint::StartGame
            | Endpoint::EndGame
            | Endpoint::Score
            | Endpoint::GameInfo
            | Endpoint::GameState
            | Endpoint::Games => HttpMethod::Get,
            _ => HttpMethod::Post,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::NewGame => "/new",
            Endpoint::StartGame => "/start",
            Endpoint::EndGame => "/end",
            Endpoint::PlaceFoundation => "/action/startBuild",
            Endpoint::Build => "/action/build",
            Endpoint::Demolish => "/action/demolish",
            Endpoint::AdjustEnergy => "/action/adjustEnergy",
            Endpoint::Maintenance => "/action/maintenance",
            Endpoint::Wait => "/action/wait",
            Endpoint::BuyUpgrade => "/action/buyUpgrade",
            Endpoint::Score => "/score",
            Endpoint::GameInfo => "/getGameInfo",
            Endpoint::GameState => "/gameState",
            Endpoint::Games => "/games",
        }
    }

    /// Whether the endpoint takes a `GameId` query parameter.
    pub fn is_game_scoped(self) -> bool {
        !matches!(self, Endpoint::NewGame | Endpoint::Games)
    }

    /// Human readable description used in failure logs.
    pub fn operation(self) -> &'static str {
        match self {
            Endpoint::NewGame => "create a new game",
            Endpoint::StartGame => "start the game",
            Endpoint::EndGame => "end the game",
            Endpoint::PlaceFoundation => "place a foundation",
            Endpoint::Build => "build",
            Endpoint::Demolish => "demolish building",
            Endpoint::AdjustEnergy => "adjust energy in buildings",
            Endpoint::Maintenance => "perform maintenance on building",
            Endpoint::Wait => "wait",
            Endpoint::BuyUpgrade => "upgrade building",
            Endpoint::Score => "get score",
            Endpoint::GameInfo => "get game info",
            Endpoint::GameState => "get game state",
            Endpoint::Games => "get game list",
        }
    }

    /// All endpoints, in the order the server documents them.
    pub fn all() -> Vec<Endpoint> {
        vec![
            Endpoint::NewGame,
            Endpoint::StartGame,
            Endpoint::EndGame,
            Endpoint::PlaceFoundation,
            Endpoint::Build,
            Endpoint::Demolish,
            Endpoint::AdjustEnergy,
            Endpoint::Maintenance,
            Endpoint::Wait,
            Endpoint::BuyUpgrade,
            Endpoint::Score,
            Endpoint::GameInfo,
            Endpoint::GameState,
            Endpoint::Games,
        ]
    }
}

/// Client for the game API.
///
/// Construct one per process and share it by reference. Game-scoped methods
/// take an optional game id; `None` sends an empty `GameId`, which the server
/// resolves to its default game (the newest one for most operations).
///
/// Calls against the same game must not overlap: the server applies actions
/// in arrival order and each one advances the turn.
#[derive(Debug)]
pub struct GameClient<T: Transport = UreqTransport> {
    transport: T,
    api_key: String,
}

impl<T: Transport> GameClient<T> {
    pub fn new(transport: T, api_key: impl Into<String>) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Creates a new game on `map_name` and returns its static info.
    pub async fn new_game(&self, map_name: &str) -> ConsiditionResult<GameInfo> {
        let body = to_body(&new_game_payload(map_name))?;
        self.request(Endpoint::NewGame, None, Some(body), GameInfo::from_json).await
    }

    /// Starts a created game and returns the first state.
    pub async fn start_game(&self, game_id: Option<&str>) -> ConsiditionResult<GameState> {
        self.request(Endpoint::StartGame, game_id, None, GameState::from_json).await
    }

    /// Ends a game. Without an id the server ends the oldest one.
    pub async fn end_game(&self, game_id: Option<&str>) -> ConsiditionResult<()> {
        self.request(Endpoint::EndGame, game_id, None, |_| Ok(())).await
    }

    /// Places the foundation of `building_name` on a free lot.
    pub async fn place_foundation(
        &self,
        game_id: Option<&str>,
        position: Position,
        building_name: &str,
    ) -> ConsiditionResult<GameState> {
        let body = to_body(&foundation_payload(position.x, position.y, building_name))?;
        self.action(Endpoint::PlaceFoundation, game_id, body).await
    }

    /// Advances construction of the building at `position`.
    pub async fn build(
        &self,
        game_id: Option<&str>,
        position: Position,
    ) -> ConsiditionResult<GameState> {
        let body = to_body(&position_payload(position.x, position.y))?;
        self.action(Endpoint::Build, game_id, body).await
    }

    pub async fn demolish(
        &self,
        game_id: Option<&str>,
        position: Position,
    ) -> ConsiditionResult<GameState> {
        let body = to_body(&position_payload(position.x, position.y))?;
        self.action(Endpoint::Demolish, game_id, body).await
    }

    /// Sets the requested energy input of the building at `position`.
    pub async fn adjust_energy(
        &self,
        game_id: Option<&str>,
        position: Position,
        value: f64,
    ) -> ConsiditionResult<GameState> {
        let body = to_body(&adjust_energy_payload(position, value))?;
        self.action(Endpoint::AdjustEnergy, game_id, body).await
    }

    /// Restores the health of the building at `position`.
    pub async fn maintenance(
        &self,
        game_id: Option<&str>,
        position: Position,
    ) -> ConsiditionResult<GameState> {
        let body = to_body(&position_payload(position.x, position.y))?;
        self.action(Endpoint::Maintenance, game_id, body).await
    }

    /// Spends the turn doing nothing.
    pub async fn wait(&self, game_id: Option<&str>) -> ConsiditionResult<GameState> {
        let body = to_body(&WaitRequest::default())?;
        self.action(Endpoint::Wait, game_id, body).await
    }

    pub async fn buy_upgrade(
        &self,
        game_id: Option<&str>,
        position: Position,
        upgrade: &str,
    ) -> ConsiditionResult<GameState> {
        let body = to_body(&upgrade_payload(position.x, position.y, upgrade))?;
        self.action(Endpoint::BuyUpgrade, game_id, body).await
    }

    /// Final score of a finished game.
    pub async fn score(&self, game_id: Option<&str>) -> ConsiditionResult<Score> {
        self.request(Endpoint::Score, game_id, None, Score::from_json).await
    }

    pub async fn game_info(&self, game_id: Option<&str>) -> ConsiditionResult<GameInfo> {
        self.request(Endpoint::GameInfo, game_id, None, GameInfo::from_json).await
    }

    pub async fn game_state(&self, game_id: Option<&str>) -> ConsiditionResult<GameState> {
        self.request(Endpoint::GameState, game_id, None, GameState::from_json).await
    }

    /// Lists the games owned by this API key.
    pub async fn games(&self) -> ConsiditionResult<Vec<GameSummary>> {
        self.request(Endpoint::Games, None, None, GameSummary::list_from_json).await
    }

    async fn action(
        &self,
        endpoint: Endpoint,
        game_id: Option<&str>,
        body: Value,
    ) -> ConsiditionResult<GameState> {
        self.request(endpoint, game_id, Some(body), GameState::from_json).await
    }

    async fn request<R>(
        &self,
        endpoint: Endpoint,
        game_id: Option<&str>,
        body: Option<Value>,
        decode: impl FnOnce(Value) -> ConsiditionResult<R>,
    ) -> ConsiditionResult<R> {
        let query = if endpoint.is_game_scoped() {
            vec![(GAME_ID_PARAM, game_id.unwrap_or_default().to_string())]
        } else {
            Vec::new()
        };
        let request = ApiRequest {
            method: endpoint.method(),
            path: endpoint.path(),
            query,
            body,
        };
        debug!("{} {} {:?}", request.method.as_str(), request.path, request.query);

        let result = self
            .transport
            .send(&self.api_key, request)
            .await
            .and_then(decode);
        if let Err(err) = &result {
            error!("Fatal Error: could not {}: {}", endpoint.operation(), err);
        }
        result
    }
}

fn to_body(payload: &impl Serialize) -> ConsiditionResult<Value> {
    Ok(serde_json::to_value(payload)?)
}
