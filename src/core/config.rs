//! Run configuration.
//!
//! A run is described by a JSON document:
//!
//! ```json
//! {
//!   "starting_position": 2,
//!   "turns_to_simulate": 100,
//!   "blockers": [{ "tile": 5, "edge": 7 }],
//!   "teleporters": [{ "tile": 5, "edge": 4, "target": 12 }]
//! }
//! ```
//!
//! `SimulationConfig` is the raw deserialized shape. `validate()` checks field
//! ranges and produces a `Scenario` whose overrides are typed, so nothing
//! downstream re-checks them.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use super::tile::{DiceRoll, TileId};
use crate::board::{Blocker, Teleporter};

/// Valid tile ids for a blocker entry.
pub const BLOCKER_TILE_RANGE: RangeInclusive<u32> = 2..=19;

/// Valid tile ids for a teleporter entry.
pub const TELEPORTER_TILE_RANGE: RangeInclusive<u32> = 1..=19;

/// Valid teleporter destinations.
pub const TELEPORTER_TARGET_RANGE: RangeInclusive<u32> = 2..=19;

/// Valid edge keys.
pub const EDGE_RANGE: RangeInclusive<u32> = DiceRoll::MIN as u32..=DiceRoll::MAX as u32;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}")]
    Io {
        /// File that failed to read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config was not valid JSON for the expected shape.
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A numeric field was outside its allowed range.
    #[error("{field} = {value} is out of range ({min}..={max})")]
    OutOfRange {
        /// Path of the field, e.g. `blockers[0].edge`.
        field: String,
        /// Value found.
        value: u32,
        /// Smallest allowed value.
        min: u32,
        /// Largest allowed value.
        max: u32,
    },

    /// `turns_to_simulate` was zero.
    #[error("turns_to_simulate must be at least 1")]
    NoTurns,
}

/// A blocker entry as written in the config file.
///
/// Fields accept a JSON number or a numeric string (`"5"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockerConfig {
    /// Tile whose edge is blocked.
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub tile: u32,
    /// Dice sum keying the blocked edge.
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub edge: u32,
}

/// A teleporter entry as written in the config file.
///
/// Fields accept a JSON number or a numeric string (`"5"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeleporterConfig {
    /// Tile whose edge is redirected.
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub tile: u32,
    /// Dice sum keying the redirected edge.
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub edge: u32,
    /// New destination tile.
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub target: u32,
}

/// Override fields are coerced: `5` and `"5"` both read as 5.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u32),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(text) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("expected a non-negative integer, found {text:?}"))
        }),
    }
}

/// Raw run configuration, exactly as deserialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Tile the player starts on. Not range-checked.
    pub starting_position: u32,

    /// Number of dice-rolling turns after initial placement.
    pub turns_to_simulate: u32,

    /// Edges to block.
    #[serde(default)]
    pub blockers: Vec<BlockerConfig>,

    /// Edges to redirect.
    #[serde(default)]
    pub teleporters: Vec<TeleporterConfig>,
}

impl SimulationConfig {
    /// Parse a config from a JSON string without validating it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Scenario, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Self::from_json_str(&json)?.validate()
    }

    /// Check every field range and produce a typed `Scenario`.
    ///
    /// Reports the first offending field.
    pub fn validate(&self) -> Result<Scenario, ConfigError> {
        if self.turns_to_simulate == 0 {
            return Err(ConfigError::NoTurns);
        }

        let blockers = self
            .blockers
            .iter()
            .enumerate()
            .map(|(i, b)| {
                check_range(format!("blockers[{i}].tile"), b.tile, &BLOCKER_TILE_RANGE)?;
                Ok(Blocker {
                    tile: TileId::new(b.tile),
                    edge: edge_key(format!("blockers[{i}].edge"), b.edge)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let teleporters = self
            .teleporters
            .iter()
            .enumerate()
            .map(|(i, t)| {
                check_range(format!("teleporters[{i}].tile"), t.tile, &TELEPORTER_TILE_RANGE)?;
                let edge = edge_key(format!("teleporters[{i}].edge"), t.edge)?;
                check_range(format!("teleporters[{i}].target"), t.target, &TELEPORTER_TARGET_RANGE)?;
                Ok(Teleporter {
                    tile: TileId::new(t.tile),
                    edge,
                    target: TileId::new(t.target),
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Scenario {
            starting_position: TileId::new(self.starting_position),
            turns_to_simulate: self.turns_to_simulate,
            blockers,
            teleporters,
        })
    }
}

fn check_range(field: String, value: u32, range: &RangeInclusive<u32>) -> Result<(), ConfigError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

fn edge_key(field: String, value: u32) -> Result<DiceRoll, ConfigError> {
    DiceRoll::try_from(value).map_err(|_| ConfigError::OutOfRange {
        field,
        value,
        min: *EDGE_RANGE.start(),
        max: *EDGE_RANGE.end(),
    })
}

/// A validated run: everything the board builder and engine need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    /// Tile the player starts on.
    pub starting_position: TileId,
    /// Number of dice-rolling turns (at least 1).
    pub turns_to_simulate: u32,
    /// Blockers in config order.
    pub blockers: Vec<Blocker>,
    /// Teleporters in config order.
    pub teleporters: Vec<Teleporter>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(json: &str) -> SimulationConfig {
        SimulationConfig::from_json_str(json).unwrap()
    }

    #[test]
    fn test_parse_full_config() {
        let cfg = config(
            r#"{
                "starting_position": 2,
                "turns_to_simulate": 10,
                "blockers": [{ "tile": 5, "edge": 7 }],
                "teleporters": [{ "tile": 5, "edge": 4, "target": 12 }]
            }"#,
        );

        assert_eq!(cfg.starting_position, 2);
        assert_eq!(cfg.turns_to_simulate, 10);
        assert_eq!(cfg.blockers, vec![BlockerConfig { tile: 5, edge: 7 }]);
        assert_eq!(
            cfg.teleporters,
            vec![TeleporterConfig {
                tile: 5,
                edge: 4,
                target: 12
            }]
        );
    }

    #[test]
    fn test_override_lists_default_to_empty() {
        let cfg = config(r#"{ "starting_position": 3, "turns_to_simulate": 1 }"#);
        assert!(cfg.blockers.is_empty());
        assert!(cfg.teleporters.is_empty());
    }

    #[test]
    fn test_validate_produces_typed_scenario() {
        let scenario = config(
            r#"{
                "starting_position": 2,
                "turns_to_simulate": 4,
                "blockers": [{ "tile": 19, "edge": 12 }],
                "teleporters": [{ "tile": 1, "edge": 2, "target": 2 }]
            }"#,
        )
        .validate()
        .unwrap();

        assert_eq!(scenario.starting_position, TileId::new(2));
        assert_eq!(scenario.turns_to_simulate, 4);
        assert_eq!(scenario.blockers[0].tile, TileId::new(19));
        assert_eq!(scenario.blockers[0].edge.value(), 12);
        assert_eq!(scenario.teleporters[0].tile, TileId::new(1));
        assert_eq!(scenario.teleporters[0].target, TileId::new(2));
    }

    #[test]
    fn test_zero_turns_rejected() {
        let err = config(r#"{ "starting_position": 2, "turns_to_simulate": 0 }"#)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NoTurns));
    }

    #[test]
    fn test_blocker_tile_out_of_range() {
        let err = config(
            r#"{ "starting_position": 2, "turns_to_simulate": 1,
                 "blockers": [{ "tile": 5, "edge": 7 }, { "tile": 1, "edge": 7 }] }"#,
        )
        .validate()
        .unwrap_err();

        match err {
            ConfigError::OutOfRange { field, value, min, max } => {
                assert_eq!(field, "blockers[1].tile");
                assert_eq!((value, min, max), (1, 2, 19));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_edge_out_of_range() {
        let err = config(
            r#"{ "starting_position": 2, "turns_to_simulate": 1,
                 "teleporters": [{ "tile": 4, "edge": 13, "target": 9 }] }"#,
        )
        .validate()
        .unwrap_err();

        assert_eq!(err.to_string(), "teleporters[0].edge = 13 is out of range (2..=12)");
    }

    #[test]
    fn test_teleporter_target_out_of_range() {
        let err = config(
            r#"{ "starting_position": 2, "turns_to_simulate": 1,
                 "teleporters": [{ "tile": 4, "edge": 5, "target": 20 }] }"#,
        )
        .validate()
        .unwrap_err();

        assert!(matches!(err, ConfigError::OutOfRange { ref field, value: 20, .. } if field == "teleporters[0].target"));
    }

    #[test]
    fn test_starting_position_not_range_checked() {
        let scenario = config(r#"{ "starting_position": 99, "turns_to_simulate": 1 }"#)
            .validate()
            .unwrap();
        assert_eq!(scenario.starting_position, TileId::new(99));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SimulationConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SimulationConfig::from_json_str(r#"{ "starting_position": -1, "turns_to_simulate": 1 }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_string_valued_entries_coerce() {
        let cfg = config(
            r#"{ "starting_position": 2, "turns_to_simulate": 1,
                 "blockers": [{ "tile": "5", "edge": "7" }],
                 "teleporters": [{ "tile": " 4 ", "edge": 5, "target": "12" }] }"#,
        );

        assert_eq!(cfg.blockers, vec![BlockerConfig { tile: 5, edge: 7 }]);
        assert_eq!(
            cfg.teleporters,
            vec![TeleporterConfig {
                tile: 4,
                edge: 5,
                target: 12
            }]
        );

        let scenario = cfg.validate().unwrap();
        assert_eq!(scenario.blockers[0].edge.value(), 7);
        assert_eq!(scenario.teleporters[0].target, TileId::new(12));
    }

    #[test]
    fn test_coerced_string_still_range_checked() {
        let err = config(
            r#"{ "starting_position": 2, "turns_to_simulate": 1,
                 "blockers": [{ "tile": "20", "edge": "7" }] }"#,
        )
        .validate()
        .unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { ref field, value: 20, .. } if field == "blockers[0].tile"));
    }

    #[test]
    fn test_non_numeric_string_rejected() {
        for json in [
            r#"{ "starting_position": 2, "turns_to_simulate": 1, "blockers": [{ "tile": "five", "edge": 7 }] }"#,
            r#"{ "starting_position": 2, "turns_to_simulate": 1, "blockers": [{ "tile": "-5", "edge": 7 }] }"#,
            r#"{ "starting_position": 2, "turns_to_simulate": 1, "blockers": [{ "tile": true, "edge": 7 }] }"#,
        ] {
            assert!(matches!(SimulationConfig::from_json_str(json), Err(ConfigError::Parse(_))), "{json}");
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = SimulationConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
