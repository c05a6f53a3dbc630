//! Property-based tests for decoding, lookups and payload shapes.

use considition::{
    adjust_energy_payload, first_free_lot, foundation_payload, GameInfo, GameState, Position,
};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::BTreeSet;

fn residence(x: i32, y: i32) -> Value {
    json!({
        "buildingName": "Cabin",
        "position": {"x": x, "y": y},
        "currentPop": 3,
        "temperature": 20.0,
        "effectiveEnergyIn": 1.0,
        "requestedEnergyIn": 1.0,
        "happinessPerTickPerPop": 0.1,
        "buildProgress": 100,
        "health": 80,
        "effects": [],
        "canBeDemolished": true
    })
}

fn residence_blueprint(name: &str, cost: i32) -> Value {
    json!({
        "buildingName": name,
        "cost": cost,
        "co2Cost": 100,
        "baseEnergyNeed": 1.0,
        "buildSpeed": 10,
        "type": "Residence",
        "releaseTick": 0,
        "maxPop": 10,
        "incomePerPop": 1.0,
        "emissivity": 0.5,
        "maintenanceCost": 50,
        "decayRate": 0.1,
        "maxHappiness": 0.1
    })
}

fn info_with(blueprints: Vec<Value>) -> GameInfo {
    GameInfo::from_json(json!({
        "gameId": "g",
        "mapName": "m",
        "maxTurns": 10,
        "maxTemp": 20.0,
        "minTemp": 0.0,
        "map": [],
        "energyLevels": [],
        "availableResidenceBuildings": blueprints,
        "availableUtilityBuildings": [],
        "availableUpgrades": [],
        "effects": []
    }))
    .unwrap()
}

proptest! {
    /// Every decoded building can be found again by its position.
    #[test]
    fn prop_positions_identify_buildings(
        positions in prop::collection::btree_set((0i32..30, 0i32..30), 0..40)
    ) {
        let residences: Vec<Value> = positions.iter().map(|&(x, y)| residence(x, y)).collect();
        let state = GameState::from_json(json!({
            "turn": 1,
            "funds": 0.0,
            "currentTemp": 0.0,
            "housingQueue": 0,
            "queueHappiness": 0.0,
            "totalCo2": 0.0,
            "totalHappiness": 0.0,
            "residenceBuildings": residences,
            "utilityBuildings": [],
            "extraField": {"ignored": true}
        })).unwrap();

        prop_assert_eq!(state.residence_buildings.len(), positions.len());
        for &(x, y) in &positions {
            let found = state.residence_at(Position::new(x, y));
            prop_assert!(found.is_some());
            prop_assert_eq!(found.unwrap().position, Position::new(x, y));
        }
    }

    /// Lookups return the first matching blueprint and nothing for unknown names.
    #[test]
    fn prop_blueprint_lookup_first_match(
        names in prop::collection::vec("[a-d]", 0..12),
        probe in "[a-f]"
    ) {
        let blueprints = names
            .iter()
            .enumerate()
            .map(|(index, name)| residence_blueprint(name, index as i32))
            .collect();
        let info = info_with(blueprints);

        match names.iter().position(|name| *name == probe) {
            Some(index) => {
                let found = info.get_blueprint_residence(&probe);
                prop_assert!(found.is_some());
                prop_assert_eq!(found.unwrap().cost, index as i32);
            }
            None => prop_assert!(info.get_blueprint_residence(&probe).is_none()),
        }
        prop_assert!(info.get_blueprint_utility(&probe).is_none());
    }

    /// The free-lot scan agrees with a plain row-major search.
    #[test]
    fn prop_first_free_lot_row_major(
        map in prop::collection::vec(prop::collection::vec(0i32..3, 0..6), 0..6)
    ) {
        let mut expected = None;
        'rows: for (x, row) in map.iter().enumerate() {
            for (y, cell) in row.iter().enumerate() {
                if *cell == 0 {
                    expected = Some(Position::new(x as i32, y as i32));
                    break 'rows;
                }
            }
        }
        prop_assert_eq!(first_free_lot(&map), expected);
    }

    /// Action payloads carry exactly the documented keys.
    #[test]
    fn prop_payload_keys(x in -50i32..50, y in -50i32..50, value in -100.0f64..100.0) {
        let foundation = serde_json::to_value(foundation_payload(x, y, "Cabin")).unwrap();
        prop_assert_eq!(foundation, json!({"Position": {"X": x, "Y": y}, "BuildingName": "Cabin"}));

        let energy =
            serde_json::to_value(adjust_energy_payload(Position::new(x, y), value)).unwrap();
        let keys: BTreeSet<_> = energy.as_object().unwrap().keys().cloned().collect();
        prop_assert_eq!(keys, BTreeSet::from(["Position".to_string(), "Value".to_string()]));
        prop_assert_eq!(&energy["Position"], &json!({"x": x, "y": y}));
    }
}
