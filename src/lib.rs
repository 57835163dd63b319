//! # dice-board
//!
//! Simulates a player walking a fixed circular board by rolling two dice each
//! turn, then counts how often each tile was visited.
//!
//! ## Design Principles
//!
//! 1. **Immutable Base**: The 18-tile base board is a process-wide constant.
//!    Every run builds its own copy before applying overrides.
//!
//! 2. **Exhaustive Edges**: Each tile stores exactly one edge per dice sum
//!    2..=12. `DiceRoll` cannot name anything else.
//!
//! 3. **Injected Dice**: The engine rolls through a `DiceSource`. Real runs
//!    use fresh entropy; tests script or seed the sequence.
//!
//! ## Modules
//!
//! - `core`: Tile ids, dice rolls, dice sources, run configuration
//! - `board`: Tiles, edges, the base board, blockers and teleporters
//! - `simulation`: Turn loop, turn history, visit summary
//! - `output`: CSV and JSON result writers

pub mod core;
pub mod board;
pub mod simulation;
pub mod output;

// Re-export commonly used types
pub use crate::core::{
    TileId, DiceRoll,
    DiceSource, GameRng, ScriptedDice,
    SimulationConfig, Scenario, ConfigError,
};

pub use crate::board::{
    Board, BoardError, Tile, Edge,
    Blocker, Teleporter,
    base_board, build_board,
};

pub use crate::simulation::{
    simulate, simulate_batch, summarize,
    SimulationError, TurnRecord, VisitSummary,
};

pub use crate::output::{OutputError, OutputFormat, ResultWriter, RunResult};
