//! Errors raised when placing marks or asking for a move.

use crate::{Mark, Position};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// No empty square is left to choose from.
    #[display("Board is full")]
    BoardFull,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this side's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Mark),
}

impl std::error::Error for MoveError {}
