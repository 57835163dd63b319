//! Tiles and their dice-keyed edges.

use serde::{Deserialize, Serialize};

use crate::core::{DiceRoll, TileId};

/// Outgoing connection for one dice sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Rolling this sum leaves the player where they are.
    pub is_blocked: bool,

    /// Tile reached when rolling this sum and the edge is open.
    pub neighbor_id: TileId,
}

impl Edge {
    /// Create an open edge to `neighbor_id`.
    #[must_use]
    pub const fn to(neighbor_id: TileId) -> Self {
        Self {
            is_blocked: false,
            neighbor_id,
        }
    }

    /// Where a player on `from` ends up after rolling this edge.
    #[must_use]
    pub const fn destination(&self, from: TileId) -> TileId {
        if self.is_blocked {
            from
        } else {
            self.neighbor_id
        }
    }
}

/// A board position with exactly one edge per dice sum.
///
/// Edges are stored densely by `DiceRoll::index()`, so a tile cannot be
/// missing a key.
///
/// ```
/// use dice_board::board::{Edge, Tile};
/// use dice_board::core::{DiceRoll, TileId};
///
/// let tile = Tile::new(TileId::new(2), [TileId::new(3); DiceRoll::COUNT]);
/// let seven = DiceRoll::new(7).unwrap();
/// assert_eq!(tile.edge(seven), &Edge::to(TileId::new(3)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Stable identifier.
    pub id: TileId,

    edges: [Edge; DiceRoll::COUNT],
}

impl Tile {
    /// Create a tile with open edges to the given neighbors, in roll order 2..=12.
    #[must_use]
    pub fn new(id: TileId, neighbors: [TileId; DiceRoll::COUNT]) -> Self {
        Self {
            id,
            edges: neighbors.map(Edge::to),
        }
    }

    /// Edge for a dice sum.
    #[must_use]
    pub fn edge(&self, roll: DiceRoll) -> &Edge {
        &self.edges[roll.index()]
    }

    /// Mutable edge for a dice sum.
    pub fn edge_mut(&mut self, roll: DiceRoll) -> &mut Edge {
        &mut self.edges[roll.index()]
    }

    /// Iterate over `(roll, edge)` pairs in roll order.
    pub fn edges(&self) -> impl Iterator<Item = (DiceRoll, &Edge)> {
        DiceRoll::ALL.into_iter().zip(self.edges.iter())
    }

    /// Iterate mutably over `(roll, edge)` pairs in roll order.
    pub fn edges_mut(&mut self) -> impl Iterator<Item = (DiceRoll, &mut Edge)> {
        DiceRoll::ALL.into_iter().zip(self.edges.iter_mut())
    }

    /// Where a player on this tile ends up after rolling `roll`.
    #[must_use]
    pub fn resolve(&self, roll: DiceRoll) -> TileId {
        self.edge(roll).destination(self.id)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>3}:", self.id.raw())?;
        for (roll, edge) in self.edges() {
            if edge.is_blocked {
                write!(f, " {:>2}->x", roll.value())?;
            } else {
                write!(f, " {:>2}->{}", roll.value(), edge.neighbor_id.raw())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll(sum: u8) -> DiceRoll {
        DiceRoll::new(sum).unwrap()
    }

    fn ring_tile() -> Tile {
        let neighbors = DiceRoll::ALL.map(|r| TileId::new(100 + u32::from(r.value())));
        Tile::new(TileId::new(1), neighbors)
    }

    #[test]
    fn test_new_tile_has_open_edges() {
        let tile = ring_tile();
        assert_eq!(tile.edges().count(), DiceRoll::COUNT);
        for (r, edge) in tile.edges() {
            assert!(!edge.is_blocked);
            assert_eq!(edge.neighbor_id, TileId::new(100 + u32::from(r.value())));
        }
    }

    #[test]
    fn test_resolve_open_edge() {
        let tile = ring_tile();
        assert_eq!(tile.resolve(roll(7)), TileId::new(107));
    }

    #[test]
    fn test_resolve_blocked_edge_stays() {
        let mut tile = ring_tile();
        tile.edge_mut(roll(7)).is_blocked = true;

        assert_eq!(tile.resolve(roll(7)), tile.id);
        assert_eq!(tile.resolve(roll(8)), TileId::new(108));
    }

    #[test]
    fn test_edges_mut_reaches_every_key() {
        let mut tile = ring_tile();
        for (_, edge) in tile.edges_mut() {
            edge.neighbor_id = TileId::new(5);
        }
        assert!(tile.edges().all(|(_, e)| e.neighbor_id == TileId::new(5)));
    }

    #[test]
    fn test_display_marks_blocked() {
        let mut tile = Tile::new(TileId::new(4), [TileId::new(6); DiceRoll::COUNT]);
        tile.edge_mut(roll(2)).is_blocked = true;

        let line = tile.to_string();
        assert!(line.starts_with("  4:"));
        assert!(line.contains(" 2->x"));
        assert!(line.contains(" 3->6"));
    }
}
