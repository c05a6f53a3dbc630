//! # Considition Starter Kit
//!
//! A typed client for the Considition turn-based city game, plus a sample bot
//! that plays one action per turn.
//!
//! ## Architecture Overview
//!
//! All simulation happens on the game server. This crate is the plumbing
//! around it:
//!
//! - **Transport**: a single HTTP agent that attaches the API key to every call
//! - **Game Client**: one async method per remote operation, returning typed results
//! - **Model**: domain records decoded from the server's JSON, plus catalog lookups
//! - **Agent**: the per-turn decision loop and the session that drives it
//!
//! ## Example
//!
//! ```no_run
//! use considition::{ClientConfig, GameClient, GameSession, StarterStrategy, UreqTransport};
//!
//! # async fn run() -> considition::ConsiditionResult<()> {
//! let config = ClientConfig::new("my-api-key");
//! let client = GameClient::new(UreqTransport::new(&config.base_path), &config.api_key);
//!
//! let info = client.new_game(&config.map_name).await?;
//! let mut session = GameSession::new(&client, info);
//! let score = session.play(&mut StarterStrategy::new()).await?;
//! println!("final score: {}", score.final_score);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod model;

pub use agent::*;
pub use api::*;
pub use config::ClientConfig;
pub use model::*;

/// Core error type for the Considition client.
#[derive(thiserror::Error, Debug)]
pub enum ConsiditionError {
    /// Network, TLS or connection failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response body was not the JSON shape we expected
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is missing or unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// A response broke a client-side invariant
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Considition codebase.
pub type ConsiditionResult<T> = Result<T, ConsiditionError>;

/// Compatibility helpers for callers that want the starter kit's
/// log-and-return-nothing behaviour instead of typed errors.
pub trait ConsiditionResultExt<T> {
    /// Logs the failure (if any) under `operation` and discards the error.
    fn logged(self, operation: &str) -> Option<T>;
}

impl<T> ConsiditionResultExt<T> for ConsiditionResult<T> {
    fn logged(self, operation: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                log::error!("Fatal Error: could not {}: {}", operation, err);
                None
            }
        }
    }
}

/// Version information for the client.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
