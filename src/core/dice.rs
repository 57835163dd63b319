//! Dice sources for the simulation.
//!
//! ## Key Features
//!
//! - **Injected**: the engine only sees the `DiceSource` trait, never a global RNG
//! - **Fresh by default**: `GameRng::from_entropy()` gives a new sequence each run
//! - **Forkable**: independent streams for batch runs sharing one board
//! - **Scripted**: `ScriptedDice` replays fixed sums for tests
//!
//! ```
//! use dice_board::core::{DiceSource, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll_2d6();
//! assert!((2..=12).contains(&roll.value()));
//!
//! // Forks are independent of the parent stream
//! let mut branch = rng.fork();
//! let _ = branch.roll_2d6();
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::tile::DiceRoll;

/// Anything that can produce the sum of two six-sided dice.
pub trait DiceSource {
    /// Roll two dice and return their sum.
    fn roll_2d6(&mut self) -> DiceRoll;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll_2d6(&mut self) -> DiceRoll {
        (**self).roll_2d6()
    }
}

/// ChaCha8-backed dice.
///
/// Real runs use `from_entropy()`; `new(seed)` exists so tests can pin a sequence.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different sequence; used to give every batch run
    /// its own dice.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Roll a single six-sided die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }
}

impl DiceSource for GameRng {
    fn roll_2d6(&mut self) -> DiceRoll {
        let first = self.roll_die();
        let second = self.roll_die();
        // Faces are 1..=6, so the sum always lands in 2..=12.
        DiceRoll::ALL[usize::from(first + second) - usize::from(DiceRoll::MIN)]
    }
}

/// Dice that replay a fixed sequence of sums, cycling when exhausted.
///
/// ```
/// use dice_board::core::{DiceRoll, DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::from_sums(&[7, 11]).unwrap();
/// assert_eq!(dice.roll_2d6(), DiceRoll::new(7).unwrap());
/// assert_eq!(dice.roll_2d6(), DiceRoll::new(11).unwrap());
/// assert_eq!(dice.roll_2d6(), DiceRoll::new(7).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: VecDeque<DiceRoll>,
}

impl ScriptedDice {
    /// Create from already-validated rolls. Returns `None` if `rolls` is empty.
    #[must_use]
    pub fn new(rolls: impl IntoIterator<Item = DiceRoll>) -> Option<Self> {
        let rolls: VecDeque<_> = rolls.into_iter().collect();
        if rolls.is_empty() {
            return None;
        }
        Some(Self { rolls })
    }

    /// Create from raw sums. Returns `None` if any sum is outside 2..=12 or
    /// the list is empty.
    #[must_use]
    pub fn from_sums(sums: &[u8]) -> Option<Self> {
        let rolls = sums.iter().map(|&s| DiceRoll::new(s)).collect::<Option<Vec<_>>>()?;
        Self::new(rolls)
    }
}

impl DiceSource for ScriptedDice {
    fn roll_2d6(&mut self) -> DiceRoll {
        let roll = self.rolls[0];
        self.rolls.rotate_left(1);
        roll
    }
}
