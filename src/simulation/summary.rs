//! Tile-visit counts derived from a turn history.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::engine::TurnRecord;
use crate::core::TileId;

/// Visit count for one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileVisits {
    /// The visited tile.
    pub tile: TileId,
    /// Turn records that ended on it, placement included.
    pub visits: u32,
}

/// Per-tile visit counts, in order of first appearance.
///
/// ```
/// use dice_board::core::TileId;
/// use dice_board::simulation::VisitSummary;
///
/// let summary = VisitSummary::from_positions([5, 2, 5].map(TileId::new));
/// assert_eq!(summary.get(TileId::new(5)), 2);
/// assert_eq!(summary.get(TileId::new(7)), 0);
///
/// let order: Vec<u32> = summary.iter().map(|v| v.tile.raw()).collect();
/// assert_eq!(order, vec![5, 2]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitSummary {
    entries: Vec<TileVisits>,
    index: FxHashMap<TileId, usize>,
}

impl VisitSummary {
    /// Create an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count positions.
    pub fn from_positions(positions: impl IntoIterator<Item = TileId>) -> Self {
        let mut summary = Self::new();
        for tile in positions {
            summary.record(tile, 1);
        }
        summary
    }

    /// Add `visits` to a tile's count.
    pub fn record(&mut self, tile: TileId, visits: u32) {
        match self.index.get(&tile) {
            Some(&i) => self.entries[i].visits += visits,
            None => {
                self.index.insert(tile, self.entries.len());
                self.entries.push(TileVisits { tile, visits });
            }
        }
    }

    /// Fold another summary into this one. New tiles are appended in the
    /// other summary's order.
    pub fn merge(&mut self, other: &VisitSummary) {
        for entry in &other.entries {
            self.record(entry.tile, entry.visits);
        }
    }

    /// Visits for a tile (0 if never visited).
    #[must_use]
    pub fn get(&self, tile: TileId) -> u32 {
        self.index.get(&tile).map_or(0, |&i| self.entries[i].visits)
    }

    /// Number of distinct tiles visited.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all visit counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.visits)).sum()
    }

    /// Iterate in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = &TileVisits> {
        self.entries.iter()
    }

    /// Entries ordered by tile id.
    #[must_use]
    pub fn sorted_by_tile(&self) -> Vec<TileVisits> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|e| e.tile);
        sorted
    }

    /// The most visited tile; ties go to the earliest-appearing tile.
    #[must_use]
    pub fn most_visited(&self) -> Option<TileVisits> {
        self.entries
            .iter()
            .copied()
            .reduce(|best, e| if e.visits > best.visits { e } else { best })
    }
}

impl Serialize for VisitSummary {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Count how often each tile appears in a history, turn 0 included.
#[must_use]
pub fn summarize(history: &[TurnRecord]) -> VisitSummary {
    VisitSummary::from_positions(history.iter().map(|r| r.player_position))
}
