//! Line completion: two in a row plus an empty square.

use crate::{Board, LINES, Mark, Position, Square};
use tracing::{instrument, trace};

/// Returns the empty square of `line` if the other two belong to `mark`.
fn open_square(board: &Board, line: &[Position; 3], mark: Mark) -> Option<Position> {
    let owned = line.iter().filter(|&&pos| board.is_marked(pos, mark)).count();
    if owned != 2 {
        return None;
    }
    line.iter().copied().find(|&pos| board.get(pos) == Square::Empty)
}

/// Finds the square that completes three in a row for `mark`.
///
/// Lines are scanned in [`LINES`] order and the first hit wins, so rows
/// beat columns and columns beat diagonals.
#[instrument(skip(board), fields(snapshot = %board.snapshot()))]
pub fn find_completing_move(board: &Board, mark: Mark) -> Option<Position> {
    let found = LINES.iter().find_map(|line| open_square(board, line, mark));
    trace!(?found, "Line completion scan");
    found
}

/// Counts lines where `mark` holds two squares and the third is empty.
pub fn count_threats(board: &Board, mark: Mark) -> usize {
    LINES
        .iter()
        .filter(|line| open_square(board, line, mark).is_some())
        .count()
}
