//! # Actions
//!
//! The one-per-turn moves a strategy can choose, and their dispatch onto the
//! game client.

use crate::{ConsiditionResult, GameClient, GameState, Position, Transport};

/// A single turn's move.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    PlaceFoundation {
        position: Position,
        building_name: String,
    },
    Build {
        position: Position,
    },
    Maintain {
        position: Position,
    },
    BuyUpgrade {
        position: Position,
        upgrade: String,
    },
    AdjustEnergy {
        position: Position,
        value: f64,
    },
    Demolish {
        position: Position,
    },
    Wait,
}

impl Action {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::PlaceFoundation { .. } => "place foundation",
            Action::Build { .. } => "build",
            Action::Maintain { .. } => "maintain",
            Action::BuyUpgrade { .. } => "buy upgrade",
            Action::AdjustEnergy { .. } => "adjust energy",
            Action::Demolish { .. } => "demolish",
            Action::Wait => "wait",
        }
    }

    /// The lot the action targets, if any.
    pub fn position(&self) -> Option<Position> {
        match self {
            Action::PlaceFoundation { position, .. }
            | Action::Build { position }
            | Action::Maintain { position }
            | Action::BuyUpgrade { position, .. }
            | Action::AdjustEnergy { position, .. }
            | Action::Demolish { position } => Some(*position),
            Action::Wait => None,
        }
    }
}

impl<T: Transport> GameClient<T> {
    /// Sends `action` to the server and returns the resulting state.
    pub async fn perform(
        &self,
        game_id: Option<&str>,
        action: &Action,
    ) -> ConsiditionResult<GameState> {
        match action {
            Action::PlaceFoundation {
                position,
                building_name,
            } => self.place_foundation(game_id, *position, building_name).await,
            Action::Build { position } => self.build(game_id, *position).await,
            Action::Maintain { position } => self.maintenance(game_id, *position).await,
            Action::BuyUpgrade { position, upgrade } => {
                self.buy_upgrade(game_id, *position, upgrade).await
            }
            Action::AdjustEnergy { position, value } => {
                self.adjust_energy(game_id, *position, *value).await
            }
            Action::Demolish { position } => self.demolish(game_id, *position).await,
            Action::Wait => self.wait(game_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::state::tests::state_json;
    use crate::ScriptedTransport;

    #[test]
    fn test_action_position() {
        let at = Position::new(2, 3);
        assert_eq!(Action::Build { position: at }.position(), Some(at));
        assert_eq!(
            Action::AdjustEnergy {
                position: at,
                value: 1.0
            }
            .position(),
            Some(at)
        );
        assert_eq!(Action::Wait.position(), None);
        assert_eq!(Action::Wait.name(), "wait");
    }

    #[test]
    fn test_perform_routes_to_endpoint() {
        let transport = ScriptedTransport::new();
        for turn in 1..=7 {
            transport.push_response(state_json(turn, vec![]));
        }
        let client = GameClient::new(transport, "key");
        let at = Position::new(1, 1);
        let actions = vec![
            Action::PlaceFoundation {
                position: at,
                building_name: "Cabin".to_string(),
            },
            Action::Build { position: at },
            Action::Maintain { position: at },
            Action::BuyUpgrade {
                position: at,
                upgrade: "Insulation".to_string(),
            },
            Action::AdjustEnergy {
                position: at,
                value: 2.0,
            },
            Action::Demolish { position: at },
            Action::Wait,
        ];

        for action in &actions {
            tokio_test::block_on(client.perform(Some("g"), action)).unwrap();
        }

        let paths: Vec<_> = client
            .transport()
            .calls()
            .into_iter()
            .map(|call| call.request.path)
            .collect();
        assert_eq!(
            paths,
            vec![
                "/action/startBuild",
                "/action/build",
                "/action/maintenance",
                "/action/buyUpgrade",
                "/action/adjustEnergy",
                "/action/demolish",
                "/action/wait",
            ]
        );
    }
}
