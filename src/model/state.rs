//! # Game State
//!
//! One turn's snapshot as reported by the server. A new snapshot replaces the
//! previous one wholesale after every action.

use crate::{ConsiditionError, ConsiditionResult, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Snapshot of a game at one turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub turn: u32,
    pub funds: f64,
    pub current_temp: f64,
    pub housing_queue: i32,
    pub queue_happiness: f64,
    pub total_co2: f64,
    pub total_happiness: f64,
    #[serde(default)]
    pub residence_buildings: Vec<ResidenceBuilding>,
    #[serde(default)]
    pub utility_buildings: Vec<UtilityBuilding>,
    /// Informational messages emitted this turn
    #[serde(default)]
    pub messages: Vec<String>,
    /// Rejected actions and other problems reported this turn
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A placed residence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidenceBuilding {
    pub building_name: String,
    pub position: Position,
    pub current_pop: i32,
    pub temperature: f64,
    pub effective_energy_in: f64,
    pub requested_energy_in: f64,
    pub happiness_per_tick_per_pop: f64,
    /// Construction progress, 0 to 100
    pub build_progress: i32,
    pub health: f64,
    /// Names of active effects, resolved through [`crate::GameInfo::get_effect`]
    #[serde(default)]
    pub effects: Vec<String>,
    pub can_be_demolished: bool,
}

/// A placed utility building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityBuilding {
    pub building_name: String,
    pub position: Position,
    pub effective_energy_in: f64,
    pub build_progress: i32,
    #[serde(default)]
    pub effects: Vec<String>,
    pub can_be_demolished: bool,
}

/// Either kind of placed building.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Building<'a> {
    Residence(&'a ResidenceBuilding),
    Utility(&'a UtilityBuilding),
}

impl Building<'_> {
    pub fn position(&self) -> Position {
        match self {
            Building::Residence(building) => building.position,
            Building::Utility(building) => building.position,
        }
    }

    pub fn building_name(&self) -> &str {
        match self {
            Building::Residence(building) => &building.building_name,
            Building::Utility(building) => &building.building_name,
        }
    }
}

impl ResidenceBuilding {
    /// Whether construction has finished.
    pub fn is_built(&self) -> bool {
        self.build_progress >= 100
    }

    pub fn has_effect(&self, name: &str) -> bool {
        self.effects.iter().any(|effect| effect == name)
    }
}

impl GameState {
    /// Decodes a game state response and checks it for duplicate positions.
    pub fn from_json(value: serde_json::Value) -> ConsiditionResult<Self> {
        let state: Self = serde_json::from_value(value)?;
        state.validate()?;
        Ok(state)
    }

    /// Checks that no two buildings share a position.
    pub fn validate(&self) -> ConsiditionResult<()> {
        let mut seen = HashSet::new();
        for building in self.buildings() {
            let position = building.position();
            if !seen.insert(position) {
                return Err(ConsiditionError::InvalidState(format!(
                    "two buildings at ({}, {})",
                    position.x, position.y
                )));
            }
        }
        Ok(())
    }

    /// Iterates residences first, then utilities.
    pub fn buildings(&self) -> impl Iterator<Item = Building<'_>> {
        self.residence_buildings
            .iter()
            .map(Building::Residence)
            .chain(self.utility_buildings.iter().map(Building::Utility))
    }

    /// The building at `position`, if any.
    pub fn building_at(&self, position: Position) -> Option<Building<'_>> {
        self.buildings().find(|building| building.position() == position)
    }

    /// The residence at `position`, if any.
    pub fn residence_at(&self, position: Position) -> Option<&ResidenceBuilding> {
        self.residence_buildings
            .iter()
            .find(|building| building.position == position)
    }

    /// Total population across all residences.
    pub fn population(&self) -> i32 {
        self.residence_buildings
            .iter()
            .map(|building| building.current_pop)
            .sum()
    }
}
