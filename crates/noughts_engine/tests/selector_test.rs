//! Tests for the computer's move selection.

use noughts_engine::{
    Board, GameStatus, Mark, MoveSelector, Position, Rule, find_completing_move, find_fork_block,
    find_fork_move, select_move, status,
};
use proptest::prelude::*;

fn board(snapshot: &str) -> Board {
    snapshot.parse().expect("valid snapshot")
}

#[test]
fn test_empty_board_takes_center() {
    assert_eq!(select_move(&Board::new()).unwrap(), Position::Center);
}

#[test]
fn test_corner_opening_answered_with_opposite_corner() {
    // X in a corner, O in the center: the opposite corner is preferred over
    // the first empty corner.
    let choice = MoveSelector::seeded(0).select(&board("X...O....")).unwrap();
    assert_eq!(choice.position, Position::BottomRight);
    assert_eq!(choice.rule, Rule::Positional);
}

#[test]
fn test_blocks_top_row() {
    let choice = MoveSelector::seeded(0).select(&board("XX..O....")).unwrap();
    assert_eq!(choice.position, Position::TopRight);
    assert_eq!(choice.rule, Rule::BlockWin);
}

#[test]
fn test_lowest_line_wins_tie_break() {
    // O can win on row 3-4-5 (square 3) or on diagonal 0-4-8 (square 0).
    // Rows are scanned before diagonals even though square 0 is lower.
    let choice = MoveSelector::seeded(0).select(&board(".XX.OOXXO")).unwrap();
    assert_eq!(choice.position, Position::MiddleLeft);
    assert_eq!(choice.rule, Rule::Win);
}

#[test]
fn test_own_fork_before_blocking_fork() {
    let b = board(".X.XOX.O.");
    assert_eq!(find_fork_move(&b, Mark::Human), Some(Position::TopLeft));
    assert_eq!(find_fork_move(&b, Mark::Computer), Some(Position::BottomLeft));

    let choice = MoveSelector::seeded(0).select(&b).unwrap();
    assert_eq!(choice.position, Position::BottomLeft);
    assert_eq!(choice.rule, Rule::Fork);
}

#[test]
fn test_fork_without_corner_blocked_directly() {
    // O holds the center but X owns no corner: answering with a side would
    // leave X the fork at 0.
    let choice = MoveSelector::seeded(0).select(&board(".X.XO....")).unwrap();
    assert_eq!(choice.position, Position::TopLeft);
    assert_eq!(choice.rule, Rule::BlockFork);
}

#[test]
fn test_fork_found_before_positional_play() {
    let b = board("O...X...O");
    assert_eq!(find_completing_move(&b, Mark::Computer), None);

    let choice = MoveSelector::seeded(0).select(&b).unwrap();
    assert_eq!(choice.position, Position::TopRight);
    assert_eq!(choice.rule, Rule::Fork);
}

#[test]
fn test_opposite_corner_fork_answered_on_side() {
    let choice = MoveSelector::seeded(0).select(&board("X...O...X")).unwrap();
    assert_eq!(choice.position, Position::TopCenter);
    assert_eq!(choice.rule, Rule::BlockFork);
    assert_eq!(find_fork_block(&board("X...O...X"), Mark::Human), Some(Position::TopCenter));
}

/// Walks every position the human can reach against the selector.
fn explore(b: Board, to_move: Mark, selector: &mut MoveSelector, visited: &mut usize) {
    *visited += 1;
    if status(&b) != GameStatus::MoreMovesLeft {
        return;
    }
    match to_move {
        Mark::Human => {
            for pos in b.empty_cells() {
                explore(b.with_mark(pos, Mark::Human), Mark::Computer, selector, visited);
            }
        }
        Mark::Computer => {
            let choice = selector.select(&b).unwrap();
            assert!(b.is_empty(choice.position), "occupied square chosen on {}", b.snapshot());
            assert_ne!(choice.rule, Rule::Random, "random fallback on {}", b.snapshot());
            explore(b.with_mark(choice.position, Mark::Computer), Mark::Human, selector, visited);
        }
    }
}

#[test]
fn test_random_fallback_unreachable_in_play() {
    let mut selector = MoveSelector::seeded(0);
    let mut visited = 0;
    explore(Board::new(), Mark::Human, &mut selector, &mut visited);
    assert!(visited > 100);
}

/// Random non-full boards built by alternating moves from a shuffled order.
fn arb_board() -> impl Strategy<Value = Board> {
    (Just(Position::ALL.to_vec()).prop_shuffle(), 0usize..9).prop_map(|(order, moves)| {
        let mut b = Board::new();
        let mut mark = Mark::Human;
        for pos in order.into_iter().take(moves) {
            b.place(pos, mark).expect("shuffled squares are distinct");
            mark = mark.opponent();
        }
        b
    })
}

proptest! {
    #[test]
    fn prop_never_picks_occupied_square(b in arb_board(), seed in any::<u64>()) {
        let choice = MoveSelector::seeded(seed).select(&b).unwrap();
        prop_assert!(b.is_empty(choice.position));
        prop_assert_ne!(choice.rule, Rule::Random);
    }

    #[test]
    fn prop_fork_search_leaves_board_unchanged(b in arb_board()) {
        let before = b;
        let _ = find_fork_move(&b, Mark::Computer);
        let _ = find_fork_move(&b, Mark::Human);
        let _ = find_fork_block(&b, Mark::Human);
        prop_assert_eq!(b, before);
    }

    #[test]
    fn prop_own_win_is_lowest_line(b in arb_board()) {
        if let Some(win) = find_completing_move(&b, Mark::Computer) {
            let choice = MoveSelector::seeded(0).select(&b).unwrap();
            prop_assert_eq!(choice.position, win);
            prop_assert_eq!(choice.rule, Rule::Win);
        }
    }
}
