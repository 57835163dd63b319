//! Core types: tile ids, dice rolls, dice sources, run configuration.
//!
//! These are shared by the board model and the simulation engine and carry
//! no board-specific data of their own.

pub mod tile;
pub mod dice;
pub mod config;

pub use tile::{DiceRoll, InvalidDiceRoll, TileId};
pub use dice::{DiceSource, GameRng, ScriptedDice};
pub use config::{BlockerConfig, ConfigError, Scenario, SimulationConfig, TeleporterConfig};
