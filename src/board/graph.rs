//! The board: tiles keyed by id.
//!
//! Tiles keep their insertion order for display and output; lookup by id goes
//! through an index map.

use rustc_hash::FxHashMap;

use super::tile::Tile;
use crate::core::{DiceRoll, TileId};

/// An edge whose destination is not on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DanglingEdge {
    /// Tile owning the edge.
    pub tile: TileId,
    /// Dice sum keying the edge.
    pub roll: DiceRoll,
    /// Destination that does not exist.
    pub neighbor_id: TileId,
}

impl std::fmt::Display for DanglingEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} edge {} points at {}",
            self.tile, self.roll, self.neighbor_id
        )
    }
}

/// Board consistency errors.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// One or more edges lead to tiles that are not on the board.
    #[error("{} edge(s) point at tiles not on the board", .0.len())]
    DanglingEdges(Vec<DanglingEdge>),
}

/// A collection of tiles keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    index: FxHashMap<TileId, usize>,
}

impl Board {
    /// Create a board from tiles.
    ///
    /// Panics if two tiles share an id.
    #[must_use]
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut board = Self::default();
        for tile in tiles {
            board.insert(tile);
        }
        board
    }

    fn insert(&mut self, tile: Tile) {
        if self.index.contains_key(&tile.id) {
            panic!("Tile with ID {:?} already on the board", tile.id);
        }
        self.index.insert(tile.id, self.tiles.len());
        self.tiles.push(tile);
    }

    /// Get a tile by ID.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.index.get(&id).map(|&i| &self.tiles[i])
    }

    /// Get a mutable tile by ID.
    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.index.get(&id).map(|&i| &mut self.tiles[i])
    }

    /// Check if a tile ID is on the board.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the board has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over tiles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Tile ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.iter().map(|t| t.id)
    }

    /// Every edge whose destination is not on the board.
    #[must_use]
    pub fn dangling_edges(&self) -> Vec<DanglingEdge> {
        self.tiles
            .iter()
            .flat_map(|tile| {
                tile.edges()
                    .filter(|(_, edge)| !self.contains(edge.neighbor_id))
                    .map(move |(roll, edge)| DanglingEdge {
                        tile: tile.id,
                        roll,
                        neighbor_id: edge.neighbor_id,
                    })
            })
            .collect()
    }

    /// Check that every edge leads to a tile on the board.
    ///
    /// Blocked edges are checked too: they still name a neighbor.
    pub fn validate(&self) -> Result<(), BoardError> {
        let dangling = self.dangling_edges();
        if dangling.is_empty() {
            Ok(())
        } else {
            Err(BoardError::DanglingEdges(dangling))
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in &self.tiles {
            writeln!(f, "{tile}")?;
        }
        Ok(())
    }
}
