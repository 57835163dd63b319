//! Simulation engine.
//!
//! `simulate` walks a built board one roll at a time and returns the full turn
//! history. `summarize` folds a history into per-tile visit counts.
//!
//! The engine keeps no state between calls; dice come from whatever
//! `DiceSource` the caller passes in.

mod engine;
mod summary;

pub use engine::{simulate, simulate_batch, SimulationError, TurnRecord};
pub use summary::{summarize, TileVisits, VisitSummary};
