//! # Request Payloads
//!
//! Bodies for the action endpoints. The server expects PascalCase keys and an
//! upper-case `Position` for every action except energy adjustment, which
//! takes lower-case `x`/`y`. The casing is kept exactly as the server wants it.

use crate::Position;
use serde::Serialize;

/// Position with the upper-case keys used by most actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WirePosition {
    #[serde(rename = "X")]
    pub x: i32,
    #[serde(rename = "Y")]
    pub y: i32,
}

impl From<Position> for WirePosition {
    fn from(position: Position) -> Self {
        Self {
            x: position.x,
            y: position.y,
        }
    }
}

/// Body of `/new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewGameRequest {
    pub map_name: String,
}

/// Body of `/action/build`, `/action/demolish` and `/action/maintenance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PositionRequest {
    pub position: WirePosition,
}

/// Body of `/action/startBuild`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FoundationRequest {
    pub position: WirePosition,
    pub building_name: String,
}

/// Body of `/action/buyUpgrade`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeRequest {
    pub position: WirePosition,
    pub upgrade_action: String,
}

/// Body of `/action/adjustEnergy`. Note the lower-case position keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdjustEnergyRequest {
    pub position: Position,
    pub value: f64,
}

/// Body of `/action/wait`: an empty object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WaitRequest {}

pub fn new_game_payload(map_name: &str) -> NewGameRequest {
    NewGameRequest {
        map_name: map_name.to_string(),
    }
}

pub fn position_payload(x: i32, y: i32) -> PositionRequest {
    PositionRequest {
        position: WirePosition { x, y },
    }
}

pub fn foundation_payload(x: i32, y: i32, building_name: &str) -> FoundationRequest {
    FoundationRequest {
        position: WirePosition { x, y },
        building_name: building_name.to_string(),
    }
}

pub fn upgrade_payload(x: i32, y: i32, upgrade: &str) -> UpgradeRequest {
    UpgradeRequest {
        position: WirePosition { x, y },
        upgrade_action: upgrade.to_string(),
    }
}

pub fn adjust_energy_payload(position: Position, value: f64) -> AdjustEnergyRequest {
    AdjustEnergyRequest { position, value }
}
