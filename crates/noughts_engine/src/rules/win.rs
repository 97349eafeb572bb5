//! Win detection logic for tic-tac-toe.

use crate::{Board, LINES, Mark, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line (in [`LINES`] order) holding
/// three equal marks, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.mark();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::Human).unwrap();
        board.place(Position::TopCenter, Mark::Human).unwrap();
        board.place(Position::TopRight, Mark::Human).unwrap();
        assert_eq!(check_winner(&board), Some(Mark::Human));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "X.OXO.O..".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::Computer));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.O.O...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
