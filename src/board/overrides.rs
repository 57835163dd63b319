//! Blockers, teleporters and board construction.
//!
//! `build_board` copies a base board and overlays the configured overrides:
//!
//! 1. Blockers, in order: mark one edge blocked.
//! 2. Teleporters, in order: redirect one edge and every sibling edge on the
//!    same tile that shares its current neighbor.
//!
//! Overrides naming a tile that is not on the board are skipped.

use serde::{Deserialize, Serialize};

use super::graph::Board;
use crate::core::{DiceRoll, TileId};

/// Marks one edge impassable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blocker {
    /// Tile that owns the edge.
    pub tile: TileId,
    /// Dice sum keying the edge.
    pub edge: DiceRoll,
}

/// Redirects one edge, and its aliases, to a new tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teleporter {
    /// Tile that owns the edge.
    pub tile: TileId,
    /// Dice sum keying the edge; every alias of its old neighbor follows.
    pub edge: DiceRoll,
    /// New neighbor for the rewritten edges.
    pub target: TileId,
}

/// Build the board for a run.
///
/// `base` is left untouched; the returned board owns its own copy.
///
/// ```
/// use dice_board::board::{base_board, build_board, Blocker};
/// use dice_board::core::{DiceRoll, TileId};
///
/// let blocker = Blocker { tile: TileId::new(5), edge: DiceRoll::new(7).unwrap() };
/// let board = build_board(base_board(), &[blocker], &[]);
///
/// let seven = DiceRoll::new(7).unwrap();
/// assert!(board.get(TileId::new(5)).unwrap().edge(seven).is_blocked);
/// assert!(!base_board().get(TileId::new(5)).unwrap().edge(seven).is_blocked);
/// ```
#[must_use]
pub fn build_board(base: &Board, blockers: &[Blocker], teleporters: &[Teleporter]) -> Board {
    let mut board = base.clone();

    for blocker in blockers {
        apply_blocker(&mut board, blocker);
    }

    for teleporter in teleporters {
        apply_teleporter(&mut board, teleporter);
    }

    board
}

/// Block one edge. Returns `false` if the tile is not on the board.
pub fn apply_blocker(board: &mut Board, blocker: &Blocker) -> bool {
    let Some(tile) = board.get_mut(blocker.tile) else {
        log::warn!("blocker on {} ignored: tile not on the board", blocker.tile);
        return false;
    };

    tile.edge_mut(blocker.edge).is_blocked = true;
    log::debug!("blocked {} edge {}", blocker.tile, blocker.edge);
    true
}

/// Redirect an edge and every edge on the same tile aliasing its neighbor.
///
/// Returns the number of edges rewritten, or `None` if the tile is not on the
/// board.
pub fn apply_teleporter(board: &mut Board, teleporter: &Teleporter) -> Option<usize> {
    let target_on_board = board.contains(teleporter.target);

    let Some(tile) = board.get_mut(teleporter.tile) else {
        log::warn!("teleporter on {} ignored: tile not on the board", teleporter.tile);
        return None;
    };

    // Sibling sums share one physical direction; capture it before rewriting.
    let previous = tile.edge(teleporter.edge).neighbor_id;

    let mut rewritten = 0;
    for (_, edge) in tile.edges_mut() {
        if edge.neighbor_id == previous {
            edge.neighbor_id = teleporter.target;
            rewritten += 1;
        }
    }

    if !target_on_board {
        log::warn!(
            "teleporter on {} edge {} targets {}, which is not on the board",
            teleporter.tile,
            teleporter.edge,
            teleporter.target
        );
    }
    log::debug!(
        "teleported {} edge {} ({} aliased edge(s)) from {} to {}",
        teleporter.tile,
        teleporter.edge,
        rewritten,
        previous,
        teleporter.target
    );

    Some(rewritten)
}
