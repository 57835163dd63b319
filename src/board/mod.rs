//! Board model.
//!
//! - `Tile` / `Edge`: a position and its 11 dice-keyed exits
//! - `Board`: tiles keyed by id, with consistency checking
//! - `base_board()`: the fixed 18-tile ring every run starts from
//! - `build_board()`: overlays blockers and teleporters onto a copy
//!
//! The board is only mutated while it is being built. The simulation takes it
//! by shared reference.

mod graph;
mod overrides;
mod tile;
mod topology;

pub use graph::{Board, BoardError, DanglingEdge};
pub use overrides::{apply_blocker, apply_teleporter, build_board, Blocker, Teleporter};
pub use tile::{Edge, Tile};
pub use topology::{base_board, BASE_TILES};
