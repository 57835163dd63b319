//! The fixed base board.
//!
//! 18 tiles (ids 2..=19) laid out in a ring. Dice sums collapse into five
//! movement directions: 2/3, 4/5, 6/7, 8/9 and 10/11/12 each share a
//! neighbor, so sibling edges of a direction alias the same tile.

use std::sync::OnceLock;

use super::graph::Board;
use super::tile::Tile;
use crate::core::{DiceRoll, TileId};

/// Neighbor per dice sum (2..=12, in order) for every base tile.
pub const BASE_TILES: [(u32, [u32; DiceRoll::COUNT]); 18] = [
    (2, [4, 4, 6, 6, 8, 8, 10, 10, 12, 12, 12]),
    (3, [5, 5, 7, 7, 9, 9, 11, 11, 13, 13, 13]),
    (4, [6, 6, 8, 8, 10, 10, 12, 12, 14, 14, 14]),
    (5, [7, 7, 9, 9, 11, 11, 13, 13, 15, 15, 15]),
    (6, [8, 8, 10, 10, 12, 12, 14, 14, 16, 16, 16]),
    (7, [9, 9, 11, 11, 13, 13, 15, 15, 17, 17, 17]),
    (8, [10, 10, 12, 12, 14, 14, 16, 16, 18, 18, 18]),
    (9, [11, 11, 13, 13, 15, 15, 17, 17, 19, 19, 19]),
    (10, [12, 12, 14, 14, 16, 16, 18, 18, 2, 2, 2]),
    (11, [13, 13, 15, 15, 17, 17, 19, 19, 3, 3, 3]),
    (12, [14, 14, 16, 16, 18, 18, 2, 2, 4, 4, 4]),
    (13, [15, 15, 17, 17, 19, 19, 3, 3, 5, 5, 5]),
    (14, [16, 16, 18, 18, 2, 2, 4, 4, 6, 6, 6]),
    (15, [17, 17, 19, 19, 3, 3, 5, 5, 7, 7, 7]),
    (16, [18, 18, 2, 2, 4, 4, 6, 6, 8, 8, 8]),
    (17, [19, 19, 3, 3, 5, 5, 7, 7, 9, 9, 9]),
    (18, [2, 2, 4, 4, 6, 6, 8, 8, 10, 10, 10]),
    (19, [3, 3, 5, 5, 7, 7, 9, 9, 11, 11, 11]),
];

/// The base board, built once per process and never mutated.
///
/// Callers that need to modify it clone first; `build_board` does this.
#[must_use]
pub fn base_board() -> &'static Board {
    static BASE: OnceLock<Board> = OnceLock::new();
    BASE.get_or_init(|| {
        Board::from_tiles(
            BASE_TILES
                .iter()
                .map(|&(id, neighbors)| Tile::new(TileId::new(id), neighbors.map(TileId::new))),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_board_ids() {
        let board = base_board();
        assert_eq!(board.len(), 18);
        let ids: Vec<u32> = board.ids().map(TileId::raw).collect();
        assert_eq!(ids, (2..=19).collect::<Vec<_>>());
    }

    #[test]
    fn test_base_board_is_closed() {
        assert!(base_board().validate().is_ok());
    }

    #[test]
    fn test_base_board_has_no_blocked_edges() {
        assert!(base_board()
            .iter()
            .flat_map(|t| t.edges())
            .all(|(_, e)| !e.is_blocked));
    }

    #[test]
    fn test_sibling_sums_alias() {
        let groups: [&[u8]; 5] = [&[2, 3], &[4, 5], &[6, 7], &[8, 9], &[10, 11, 12]];

        for tile in base_board().iter() {
            let mut seen = Vec::new();
            for group in groups {
                let first = tile.edge(DiceRoll::new(group[0]).unwrap()).neighbor_id;
                for &sum in group {
                    assert_eq!(tile.edge(DiceRoll::new(sum).unwrap()).neighbor_id, first);
                }
                assert!(!seen.contains(&first), "directions must be distinct on {}", tile.id);
                seen.push(first);
            }
        }
    }

    #[test]
    fn test_same_instance_every_call() {
        assert!(std::ptr::eq(base_board(), base_board()));
    }
}
