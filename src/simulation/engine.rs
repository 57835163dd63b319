//! The turn loop.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{DiceRoll, DiceSource, GameRng, TileId};

/// One simulated turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number; 0 is initial placement.
    pub turn: u32,

    /// Sum rolled this turn. `None` on turn 0.
    pub roll: Option<DiceRoll>,

    /// Tile the player is on after this turn.
    pub player_position: TileId,
}

impl TurnRecord {
    /// Flat value written for turn 0's roll.
    pub const SENTINEL_ROLL: u8 = 0;

    /// Initial placement record.
    #[must_use]
    pub const fn placement(position: TileId) -> Self {
        Self {
            turn: 0,
            roll: None,
            player_position: position,
        }
    }

    /// Roll as a plain number, with `SENTINEL_ROLL` for turn 0.
    #[must_use]
    pub fn roll_value(&self) -> u8 {
        self.roll.map_or(Self::SENTINEL_ROLL, DiceRoll::value)
    }
}

/// Simulation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// The player stands on a tile the board does not have.
    #[error("turn {turn}: player is on {tile}, which is not on the board")]
    UnknownTile {
        /// Turn that needed the missing tile.
        turn: u32,
        /// The missing tile.
        tile: TileId,
    },
}

/// Walk the board for `turns` turns, starting on `start`.
///
/// Returns `turns + 1` records: placement, then one per roll. `start` is not
/// checked up front; a missing tile is reported on the first turn that needs
/// it.
///
/// ```
/// use dice_board::board::base_board;
/// use dice_board::core::{ScriptedDice, TileId};
/// use dice_board::simulation::simulate;
///
/// let mut dice = ScriptedDice::from_sums(&[2, 7]).unwrap();
/// let history = simulate(base_board(), TileId::new(2), 2, &mut dice).unwrap();
///
/// let positions: Vec<u32> = history.iter().map(|r| r.player_position.raw()).collect();
/// assert_eq!(positions, vec![2, 4, 10]);
/// ```
pub fn simulate<D: DiceSource + ?Sized>(
    board: &Board,
    start: TileId,
    turns: u32,
    dice: &mut D,
) -> Result<Vec<TurnRecord>, SimulationError> {
    let mut history = Vec::with_capacity(turns as usize + 1);
    history.push(TurnRecord::placement(start));

    let mut position = start;
    for turn in 1..=turns {
        let roll = dice.roll_2d6();

        let tile = board
            .get(position)
            .ok_or(SimulationError::UnknownTile { turn, tile: position })?;

        let next = tile.resolve(roll);
        log::trace!(
            "turn {turn}: rolled {roll} on {position} -> {next}{}",
            if tile.edge(roll).is_blocked { " (blocked)" } else { "" }
        );

        position = next;
        history.push(TurnRecord {
            turn,
            roll: Some(roll),
            player_position: position,
        });
    }

    Ok(history)
}

/// Run `runs` independent simulations sharing one read-only board.
///
/// Each run rolls with its own fork of `rng`.
pub fn simulate_batch(
    board: &Board,
    start: TileId,
    turns: u32,
    runs: usize,
    rng: &mut GameRng,
) -> Result<Vec<Vec<TurnRecord>>, SimulationError> {
    (0..runs)
        .map(|run| {
            let mut dice = rng.fork();
            log::debug!("starting run {run}");
            simulate(board, start, turns, &mut dice)
        })
        .collect()
}
