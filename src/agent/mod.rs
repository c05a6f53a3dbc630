//! # Agent Module
//!
//! Turn-by-turn decision making on top of the game client.
//!
//! A [`Strategy`] looks at the static [`GameInfo`] and the latest
//! [`GameState`] and picks exactly one [`Action`]. A [`GameSession`] feeds the
//! server's answer back into the strategy until the game is over.

pub mod action;
pub mod runner;
pub mod starter;

pub use action::*;
pub use runner::*;
pub use starter::*;

use crate::{ConsiditionResult, GameInfo, GameState};

/// Chooses one action per turn.
pub trait Strategy {
    /// The move to make from `state`.
    fn next_action(&mut self, info: &GameInfo, state: &GameState) -> ConsiditionResult<Action>;
}
