//! Positional fallback when no tactic applies.

use crate::{Board, Mark, Position};
use tracing::{instrument, trace};

fn first_empty(board: &Board, candidates: &[Position]) -> Option<Position> {
    candidates.iter().copied().find(|&pos| board.is_empty(pos))
}

/// Picks a square for `mark` by board geometry alone.
///
/// Preference order:
/// 1. the center;
/// 2. any corner, if the opponent holds the center;
/// 3. the corner opposite one the opponent holds;
/// 4. any corner;
/// 5. any side.
///
/// Returns `None` only on a full board.
#[instrument(skip(board), fields(snapshot = %board.snapshot()))]
pub fn find_strategic_move(board: &Board, mark: Mark) -> Option<Position> {
    let opponent = mark.opponent();

    if board.is_empty(Position::CENTER) {
        return Some(Position::CENTER);
    }

    if board.is_marked(Position::CENTER, opponent)
        && let Some(corner) = first_empty(board, &Position::CORNERS)
    {
        trace!(%corner, "Corner against opponent center");
        return Some(corner);
    }

    let opposite = Position::CORNERS
        .iter()
        .filter(|&&corner| board.is_marked(corner, opponent))
        .map(|corner| corner.opposite())
        .find(|&pos| board.is_empty(pos));
    if opposite.is_some() {
        return opposite;
    }

    first_empty(board, &Position::CORNERS).or_else(|| first_empty(board, &Position::SIDES))
}
