//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// One of the two sides placing marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// The human player, shown as `X`. Always moves first.
    #[strum(to_string = "X")]
    Human,
    /// The automated player, shown as `O`.
    #[strum(to_string = "O")]
    Computer,
}

impl Mark {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Human => Mark::Computer,
            Mark::Computer => Mark::Human,
        }
    }

    /// Returns the square this side leaves behind.
    pub fn square(self) -> Square {
        match self {
            Mark::Human => Square::Human,
            Mark::Computer => Square::Computer,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by the human.
    Human,
    /// Marked by the computer.
    Computer,
}

impl Square {
    /// Returns the side occupying this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Human => Some(Mark::Human),
            Square::Computer => Some(Mark::Computer),
        }
    }

    /// Single-character rendering used by board snapshots.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Human => 'X',
            Square::Computer => 'O',
        }
    }
}
