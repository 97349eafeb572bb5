//! Fork detection and fork blocking.

use super::completion::count_threats;
use crate::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Finds a square where `mark` would threaten two or more lines at once.
///
/// Empty squares are tried in ascending index order. Each trial runs on a
/// copy of the board, so `board` is never touched.
#[instrument(skip(board), fields(snapshot = %board.snapshot()))]
pub fn find_fork_move(board: &Board, mark: Mark) -> Option<Position> {
    board.empty_cells().into_iter().find(|&pos| {
        let trial = board.with_mark(pos, mark);
        count_threats(&trial, mark) >= 2
    })
}

/// Finds a square that defuses a fork `opponent` could play next.
///
/// When the blocking side already holds the center and `opponent` holds a
/// corner while another corner is open, the answer is the first open side:
/// forcing play on an edge breaks the double-corner pattern. Otherwise the
/// fork square itself is taken.
#[instrument(skip(board), fields(snapshot = %board.snapshot()))]
pub fn find_fork_block(board: &Board, opponent: Mark) -> Option<Position> {
    let fork = find_fork_move(board, opponent)?;
    let blocker = opponent.opponent();

    let center_held = board.is_marked(Position::CENTER, blocker);
    let opponent_corner = Position::CORNERS
        .iter()
        .any(|&c| board.is_marked(c, opponent));
    let open_corner = Position::CORNERS.iter().any(|&c| board.is_empty(c));

    if center_held
        && opponent_corner
        && open_corner
        && let Some(side) = Position::SIDES.iter().copied().find(|&s| board.is_empty(s))
    {
        debug!(%fork, %side, "Answering corner fork with a side");
        return Some(side);
    }

    debug!(%fork, "Blocking fork square directly");
    Some(fork)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fork_on_empty_board() {
        assert_eq!(find_fork_move(&Board::new(), Mark::Computer), None);
    }

    #[test]
    fn test_finds_corner_fork() {
        // O holds opposite corners, X the center. O at 2 threatens the top row
        // and the right column.
        let board: Board = "O...X...O".parse().unwrap();
        assert_eq!(find_fork_move(&board, Mark::Computer), Some(Position::TopRight));
    }

    #[test]
    fn test_fork_search_leaves_board_unchanged() {
        let board: Board = "O...X...O".parse().unwrap();
        let before = board;
        let _ = find_fork_move(&board, Mark::Computer);
        let _ = find_fork_move(&board, Mark::Human);
        assert_eq!(board, before);
    }

    #[test]
    fn test_single_threat_is_not_a_fork() {
        let board: Board = "O...X....".parse().unwrap();
        assert_eq!(find_fork_move(&board, Mark::Computer), None);
    }

    #[test]
    fn test_no_fork_means_no_block() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(find_fork_block(&board, Mark::Human), None);
    }

    #[test]
    fn test_opposite_corners_answered_with_side() {
        // X at 0 and 8, O in the center: X threatens a fork at 2, but the
        // answer is the first open side.
        let board: Board = "X...O...X".parse().unwrap();
        assert_eq!(find_fork_move(&board, Mark::Human), Some(Position::TopRight));
        assert_eq!(
            find_fork_block(&board, Mark::Human),
            Some(Position::TopCenter)
        );
    }

    #[test]
    fn test_direct_block_without_center() {
        // X holds the center and a corner, O a corner: X's fork at 2 is taken.
        let board: Board = "O...X...X".parse().unwrap();
        assert_eq!(find_fork_block(&board, Mark::Human), Some(Position::TopRight));
    }

    #[test]
    fn test_no_opponent_corner_blocks_fork_square() {
        // X at 1 and 3 with O in the center: X forks at 0 without holding a
        // corner, so the fork square itself must be taken.
        let board: Board = ".X.XO....".parse().unwrap();
        assert_eq!(find_fork_move(&board, Mark::Human), Some(Position::TopLeft));
        assert_eq!(find_fork_block(&board, Mark::Human), Some(Position::TopLeft));
    }

    #[test]
    fn test_no_open_corner_blocks_fork_square() {
        // Every corner is taken and O holds the center. Side 1 is open but the
        // fork square 3 is returned.
        let board: Board = "X.X.O.O.X".parse().unwrap();
        assert_eq!(find_fork_move(&board, Mark::Human), Some(Position::MiddleLeft));
        assert_eq!(
            find_fork_block(&board, Mark::Human),
            Some(Position::MiddleLeft)
        );
    }

    #[test]
    fn test_side_answer_needs_an_open_side() {
        let board: Board = "XO.OOX.X.".parse().unwrap();
        assert_eq!(
            find_fork_block(&board, Mark::Human),
            Some(Position::BottomRight)
        );
    }
}
