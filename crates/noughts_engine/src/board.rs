//! The 3x3 board and its eight winning lines.

use crate::{Mark, MoveError, Position, Square};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// The winning lines in tie-break order: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the eight winning lines.
pub fn lines() -> &'static [[Position; 3]; 8] {
    &LINES
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values, so hypothetical moves are evaluated on
/// copies and never on the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if `mark` occupies the square.
    pub fn is_marked(&self, pos: Position, mark: Mark) -> bool {
        self.get(pos) == mark.square()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places a mark on an empty square.
    ///
    /// A marked square is never overwritten; only [`Board::clear`] empties it.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[pos.to_index()] = mark.square();
        Ok(())
    }

    /// Returns a copy of the board with `mark` placed at `pos`.
    ///
    /// `pos` must be empty; debug builds panic on an occupied square.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Board {
        debug_assert!(self.is_empty(pos), "with_mark on occupied square {pos}");
        let mut next = *self;
        next.squares[pos.to_index()] = mark.square();
        next
    }

    /// Empties every square.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Empty squares in ascending index order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Number of squares held by `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares.iter().filter(|&&s| s == mark.square()).count()
    }

    /// Nine-character snapshot, e.g. `X...O....`.
    pub fn snapshot(&self) -> String {
        self.squares.iter().map(|s| s.symbol()).collect()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based number so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Human => "X".to_string(),
                    Square::Computer => "O".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Error parsing a board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Snapshot does not have exactly nine squares.
    #[display("Board snapshot must have 9 squares, got {}", _0)]
    WrongLength(usize),

    /// Snapshot contains a character that is not a mark or an empty marker.
    #[display("Unknown square symbol {:?}", _0)]
    UnknownSymbol(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X`, `O` and `.`, `-`, `_` or space for empty, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(BoardParseError::WrongLength(chars.len()));
        }

        let mut board = Board::new();
        for (square, c) in board.squares.iter_mut().zip(chars) {
            *square = match c {
                'x' | 'X' => Square::Human,
                'o' | 'O' => Square::Computer,
                '.' | '-' | '_' | ' ' => Square::Empty,
                other => return Err(BoardParseError::UnknownSymbol(other)),
            };
        }
        Ok(board)
    }
}
