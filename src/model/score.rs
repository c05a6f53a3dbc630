//! # Scores and Game Listings

use crate::ConsiditionResult;
use serde::{Deserialize, Serialize};

/// Final totals of a finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub game_id: String,
    pub total_co2: f64,
    pub total_happiness: f64,
    pub final_population: f64,
    pub final_score: f64,
}

/// One entry of the game listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub game_id: String,
    pub active: bool,
    pub started: bool,
    /// Server timestamp, absent for games that never started
    #[serde(default)]
    pub started_at: Option<String>,
}

impl Score {
    pub fn from_json(value: serde_json::Value) -> ConsiditionResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl GameSummary {
    /// Decodes the `/games` listing.
    pub fn list_from_json(value: serde_json::Value) -> ConsiditionResult<Vec<Self>> {
        Ok(serde_json::from_value(value)?)
    }
}
