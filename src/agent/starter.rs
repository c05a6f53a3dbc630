//! # Starter Strategy
//!
//! The sample bot: it looks after a single residence and picks the first
//! applicable move each turn. It is a template to replace, not a good player.

use super::{Action, Strategy};
use crate::{ConsiditionError, ConsiditionResult, GameInfo, GameState, Position, ResidenceBuilding};
use log::warn;

/// Lowest indoor temperature the bot tolerates before heating.
pub const DEFAULT_MIN_COMFORT_TEMP: f64 = 18.0;

/// Highest indoor temperature the bot tolerates before cooling.
pub const DEFAULT_MAX_COMFORT_TEMP: f64 = 24.0;

/// Health below which the bot spends a turn on maintenance.
pub const DEFAULT_MAINTENANCE_HEALTH: f64 = 50.0;

/// Energy nudge applied on top of the estimated need when heating or cooling.
const ENERGY_MARGIN: f64 = 0.5;

/// Heat contributed by each resident, in MWh.
const HEAT_PER_RESIDENT: f64 = 0.04;

/// Decision order, first match wins:
///
/// 1. no residence yet: lay a foundation on the first free lot
/// 2. first residence unfinished: build
/// 3. health low: maintain
/// 4. first upgrade's effect missing from the residence: buy it
/// 5. too cold or too warm: adjust energy
/// 6. otherwise wait
#[derive(Debug, Clone, PartialEq)]
pub struct StarterStrategy {
    pub min_comfort_temp: f64,
    pub max_comfort_temp: f64,
    pub maintenance_health: f64,
}

impl StarterStrategy {
    pub fn new() -> Self {
        Self {
            min_comfort_temp: DEFAULT_MIN_COMFORT_TEMP,
            max_comfort_temp: DEFAULT_MAX_COMFORT_TEMP,
            maintenance_health: DEFAULT_MAINTENANCE_HEALTH,
        }
    }

    fn place_first_residence(&self, info: &GameInfo) -> ConsiditionResult<Action> {
        let blueprint = info.available_residence_buildings.first().ok_or_else(|| {
            ConsiditionError::InvalidState("no residence blueprints available".to_string())
        })?;

        match first_free_lot(&info.map) {
            Some(position) => Ok(Action::PlaceFoundation {
                position,
                building_name: blueprint.building_name.clone(),
            }),
            None => {
                warn!("No free lot left on map {}", info.map_name);
                Ok(Action::Wait)
            }
        }
    }

    /// Estimated energy input for `building`, shifted by `margin`.
    fn requested_energy(
        &self,
        info: &GameInfo,
        state: &GameState,
        building: &ResidenceBuilding,
        margin: f64,
    ) -> ConsiditionResult<f64> {
        let blueprint = info
            .get_blueprint_residence(&building.building_name)
            .ok_or_else(|| {
                ConsiditionError::InvalidState(format!(
                    "unknown residence blueprint {}",
                    building.building_name
                ))
            })?;

        Ok(blueprint.base_energy_need
            + (building.temperature - state.current_temp) * blueprint.emissivity
            + margin
            - f64::from(building.current_pop) * HEAT_PER_RESIDENT)
    }
}

impl Default for StarterStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for StarterStrategy {
    fn next_action(&mut self, info: &GameInfo, state: &GameState) -> ConsiditionResult<Action> {
        let Some(building) = state.residence_buildings.first() else {
            return self.place_first_residence(info);
        };
        let position = building.position;

        if !building.is_built() {
            return Ok(Action::Build { position });
        }

        if building.health < self.maintenance_health {
            return Ok(Action::Maintain { position });
        }

        if let Some(upgrade) = info.available_upgrades.first() {
            if !building.has_effect(&upgrade.effect) {
                return Ok(Action::BuyUpgrade {
                    position,
                    upgrade: upgrade.name.clone(),
                });
            }
        }

        if building.temperature < self.min_comfort_temp {
            let value = self.requested_energy(info, state, building, ENERGY_MARGIN)?;
            return Ok(Action::AdjustEnergy { position, value });
        }

        if building.temperature > self.max_comfort_temp {
            let value = self.requested_energy(info, state, building, -ENERGY_MARGIN)?;
            return Ok(Action::AdjustEnergy { position, value });
        }

        Ok(Action::Wait)
    }
}

/// First cell valued `0`, scanning rows in order. The row index is `x`.
pub fn first_free_lot(map: &[Vec<i32>]) -> Option<Position> {
    map.iter().enumerate().find_map(|(x, row)| {
        row.iter()
            .position(|&cell| cell == 0)
            .map(|y| Position::new(x as i32, y as i32))
    })
}
