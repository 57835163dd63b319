//! Tile identifiers and dice-sum keys.
//!
//! ## TileId
//!
//! Opaque board position identifier. The board assigns meaning; the id is only
//! compared for equality and used as a lookup key.
//!
//! ## DiceRoll
//!
//! The sum of two six-sided dice. Only the 11 values 2..=12 can be constructed,
//! so every edge table indexed by a `DiceRoll` is exhaustive by construction.

use serde::{Deserialize, Serialize};

/// Board position identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Two-die sum in the closed range 2..=12.
///
/// ```
/// use dice_board::core::DiceRoll;
///
/// let seven = DiceRoll::new(7).unwrap();
/// assert_eq!(seven.value(), 7);
/// assert_eq!(seven.index(), 5);
///
/// assert!(DiceRoll::new(1).is_none());
/// assert!(DiceRoll::new(13).is_none());
/// assert_eq!(DiceRoll::ALL.len(), DiceRoll::COUNT);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DiceRoll(u8);

impl DiceRoll {
    /// Smallest possible sum.
    pub const MIN: u8 = 2;

    /// Largest possible sum.
    pub const MAX: u8 = 12;

    /// Number of distinct sums.
    pub const COUNT: usize = (Self::MAX - Self::MIN + 1) as usize;

    /// Every sum in ascending order.
    pub const ALL: [DiceRoll; Self::COUNT] = [
        DiceRoll(2),
        DiceRoll(3),
        DiceRoll(4),
        DiceRoll(5),
        DiceRoll(6),
        DiceRoll(7),
        DiceRoll(8),
        DiceRoll(9),
        DiceRoll(10),
        DiceRoll(11),
        DiceRoll(12),
    ];

    /// Create a roll from a sum, or `None` if outside 2..=12.
    #[must_use]
    pub const fn new(sum: u8) -> Option<Self> {
        if sum >= Self::MIN && sum <= Self::MAX {
            Some(Self(sum))
        } else {
            None
        }
    }

    /// Combine two die faces (each 1..=6) into their sum.
    ///
    /// Returns `None` if either face is out of range.
    #[must_use]
    pub fn from_dice(first: u8, second: u8) -> Option<Self> {
        if !(1..=6).contains(&first) || !(1..=6).contains(&second) {
            return None;
        }
        Self::new(first + second)
    }

    /// The sum rolled.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Dense 0-based index, suitable for array-backed edge tables.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - Self::MIN) as usize
    }
}

impl TryFrom<u8> for DiceRoll {
    type Error = InvalidDiceRoll;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidDiceRoll(u32::from(value)))
    }
}

impl TryFrom<u32> for DiceRoll {
    type Error = InvalidDiceRoll;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(InvalidDiceRoll(value))
    }
}

impl From<DiceRoll> for u8 {
    fn from(roll: DiceRoll) -> Self {
        roll.0
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A value that is not a valid two-die sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a two-die sum (expected {min}..={max})", min = DiceRoll::MIN, max = DiceRoll::MAX)]
pub struct InvalidDiceRoll(pub u32);
