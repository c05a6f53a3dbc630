//! # Model Module
//!
//! Domain records decoded from the game server's JSON.
//!
//! Every record is a plain value: the server owns the simulation and sends a
//! fresh copy after each action, so nothing here is mutated in place.
//! Decoding is strict about shape (a wrong type is a
//! [`ConsiditionError::Decode`](crate::ConsiditionError::Decode)) but ignores
//! fields it does not know about.

pub mod info;
pub mod score;
pub mod state;

pub use info::*;
pub use score::*;
pub use state::*;

use serde::{Deserialize, Serialize};

/// A lot on the map.
///
/// # Examples
///
/// ```
/// use considition::Position;
///
/// let pos = Position::new(3, 4);
/// assert_eq!(pos.x, 3);
/// assert_eq!(pos.y, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
