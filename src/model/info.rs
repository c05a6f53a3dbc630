//! # Game Info
//!
//! Static per-game configuration: the map, the turn limit, the price tiers and
//! the catalogs of blueprints, upgrades and effects.

use crate::ConsiditionResult;
use serde::{Deserialize, Serialize};

/// Static configuration of one game, fixed for the lifetime of its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    pub game_id: String,
    pub map_name: String,
    pub max_turns: u32,
    pub max_temp: f64,
    pub min_temp: f64,
    /// Map cells indexed `[x][y]`; `0` marks a free lot
    pub map: Vec<Vec<i32>>,
    /// Price tiers ordered by threshold
    pub energy_levels: Vec<EnergyLevel>,
    pub available_residence_buildings: Vec<BlueprintResidence>,
    pub available_utility_buildings: Vec<BlueprintUtility>,
    pub available_upgrades: Vec<Upgrade>,
    pub effects: Vec<Effect>,
}

/// An energy pricing bracket, activated server-side by total draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyLevel {
    pub energy_threshold: i32,
    pub cost_per_mwh: f64,
    pub ton_co2_per_mwh: f64,
}

/// Template for a residence building type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintResidence {
    pub building_name: String,
    pub cost: i32,
    pub co2_cost: i32,
    pub base_energy_need: f64,
    pub build_speed: i32,
    #[serde(rename = "type", default)]
    pub building_type: String,
    pub release_tick: i32,
    pub max_pop: i32,
    pub income_per_pop: f64,
    pub emissivity: f64,
    pub maintenance_cost: i32,
    pub decay_rate: f64,
    pub max_happiness: f64,
}

/// Template for a utility building type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintUtility {
    pub building_name: String,
    pub cost: i32,
    pub co2_cost: i32,
    pub base_energy_need: f64,
    pub build_speed: i32,
    #[serde(rename = "type", default)]
    pub building_type: String,
    pub release_tick: i32,
    /// Names of the effects this building radiates
    #[serde(default)]
    pub effects: Vec<String>,
    pub queue_increase: f64,
}

/// Either kind of blueprint, as returned by [`GameInfo::get_blueprint`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Blueprint<'a> {
    Residence(&'a BlueprintResidence),
    Utility(&'a BlueprintUtility),
}

impl Blueprint<'_> {
    pub fn building_name(&self) -> &str {
        match self {
            Blueprint::Residence(blueprint) => &blueprint.building_name,
            Blueprint::Utility(blueprint) => &blueprint.building_name,
        }
    }

    pub fn cost(&self) -> i32 {
        match self {
            Blueprint::Residence(blueprint) => blueprint.cost,
            Blueprint::Utility(blueprint) => blueprint.cost,
        }
    }
}

/// A named environmental modifier.
///
/// Absent modifiers are zero, since the server only sends the ones an effect
/// actually changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Effect {
    pub name: String,
    pub radius: i32,
    pub emissivity_multiplier: f64,
    pub decay_multiplier: f64,
    pub building_income_increase: f64,
    pub max_happiness_increase: f64,
    pub mwh_production: f64,
    pub base_energy_mwh_increase: f64,
    pub co2_per_pop_increase: f64,
    pub decay_increase: f64,
}

/// A purchasable building modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upgrade {
    pub name: String,
    /// Name of the effect applied, resolved through [`GameInfo::get_effect`]
    pub effect: String,
    pub cost: i32,
}

impl GameInfo {
    /// Decodes a game info response.
    pub fn from_json(value: serde_json::Value) -> ConsiditionResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Looks a building type up in the residence catalog, then the utility catalog.
    pub fn get_blueprint(&self, building_name: &str) -> Option<Blueprint<'_>> {
        self.get_blueprint_residence(building_name)
            .map(Blueprint::Residence)
            .or_else(|| self.get_blueprint_utility(building_name).map(Blueprint::Utility))
    }

    /// First residence blueprint with the given name.
    pub fn get_blueprint_residence(&self, building_name: &str) -> Option<&BlueprintResidence> {
        self.available_residence_buildings
            .iter()
            .find(|blueprint| blueprint.building_name == building_name)
    }

    /// First utility blueprint with the given name.
    pub fn get_blueprint_utility(&self, building_name: &str) -> Option<&BlueprintUtility> {
        self.available_utility_buildings
            .iter()
            .find(|blueprint| blueprint.building_name == building_name)
    }

    /// First effect with the given name.
    pub fn get_effect(&self, effect_name: &str) -> Option<&Effect> {
        self.effects.iter().find(|effect| effect.name == effect_name)
    }

    /// First upgrade with the given name.
    pub fn get_upgrade(&self, upgrade_name: &str) -> Option<&Upgrade> {
        self.available_upgrades
            .iter()
            .find(|upgrade| upgrade.name == upgrade_name)
    }
}
