//! Player colors for the two-player game.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two players. Red moves first by convention of the referee,
/// but nothing in this crate depends on move order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
}

impl PlayerColor {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> PlayerColor {
        match self {
            PlayerColor::Red => PlayerColor::Blue,
            PlayerColor::Blue => PlayerColor::Red,
        }
    }

    /// Single-character mark used by the canonical board encoding.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            PlayerColor::Red => 'r',
            PlayerColor::Blue => 'b',
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerColor::Red => write!(f, "Red"),
            PlayerColor::Blue => write!(f, "Blue"),
        }
    }
}
