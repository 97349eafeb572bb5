//! Derived game status.

use super::draw::is_full;
use super::win::check_winner;
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Where a game stands, recomputed from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner and at least one empty square.
    MoreMovesLeft,
    /// The human completed a line.
    HumanWins,
    /// The computer completed a line.
    ComputerWins,
    /// Full board, no winner.
    Draw,
}

impl GameStatus {
    /// Checks if the game has ended.
    pub fn is_over(self) -> bool {
        self != GameStatus::MoreMovesLeft
    }

    /// Status line shown to the human once the game is decided.
    pub fn message(self) -> Option<&'static str> {
        match self {
            GameStatus::MoreMovesLeft => None,
            GameStatus::HumanWins => Some("You win!"),
            GameStatus::ComputerWins => Some("Computer wins!"),
            GameStatus::Draw => Some("Draw game"),
        }
    }
}

/// Scans the lines for a winner, then the squares for a remaining move.
#[instrument(skip(board), ret)]
pub fn status(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(Mark::Human) => GameStatus::HumanWins,
        Some(Mark::Computer) => GameStatus::ComputerWins,
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::MoreMovesLeft,
    }
}
