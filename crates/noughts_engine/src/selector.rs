//! Move selection for the computer player.

use crate::{
    Board, Mark, MoveError, Position, find_completing_move, find_fork_block, find_fork_move,
    find_strategic_move,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// The heuristic that produced a [`Choice`], in priority order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    /// Completes a line for the computer.
    Win,
    /// Stops the human completing a line.
    BlockWin,
    /// Creates two threats at once.
    Fork,
    /// Defuses a fork the human could play next.
    BlockFork,
    /// Center, corner or side by geometry.
    Positional,
    /// Uniform pick among empty squares. Never expected on a legal board.
    Random,
}

/// A selected square and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Square to mark.
    pub position: Position,
    /// Why it was chosen.
    pub rule: Rule,
}

/// Chooses squares for [`Mark::Computer`].
///
/// Stateless apart from the random source used by the last-resort
/// fallback. The board is only read.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = StdRng> {
    rng: R,
}

impl MoveSelector<StdRng> {
    /// Creates a selector seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Creates a selector whose fallback choices are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for MoveSelector<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector around the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks the computer's next square.
    ///
    /// Rules are tried in order and the first one that names a square wins:
    /// win, block a win, fork, block a fork, positional play. A uniform
    /// random pick follows as a last resort and is logged at `warn`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::BoardFull`] if no square is empty.
    #[instrument(skip(self, board), fields(snapshot = %board.snapshot()))]
    pub fn select(&mut self, board: &Board) -> Result<Choice, MoveError> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return Err(MoveError::BoardFull);
        }

        let me = Mark::Computer;
        let them = me.opponent();
        let tactic = |rule: Rule, found: Option<Position>| {
            found.map(|position| Choice { position, rule })
        };
        let chosen = tactic(Rule::Win, find_completing_move(board, me))
            .or_else(|| tactic(Rule::BlockWin, find_completing_move(board, them)))
            .or_else(|| tactic(Rule::Fork, find_fork_move(board, me)))
            .or_else(|| tactic(Rule::BlockFork, find_fork_block(board, them)))
            .or_else(|| tactic(Rule::Positional, find_strategic_move(board, me)));

        if let Some(choice) = chosen {
            debug!(position = %choice.position, rule = %choice.rule, "Selected move");
            return Ok(choice);
        }

        let position = empty[self.rng.random_range(0..empty.len())];
        warn!(%position, "No heuristic applied; falling back to a random square");
        Ok(Choice {
            position,
            rule: Rule::Random,
        })
    }
}

/// Picks the computer's next square with an OS-seeded selector.
///
/// # Errors
///
/// Returns [`MoveError::BoardFull`] if no square is empty.
pub fn select_move(board: &Board) -> Result<Position, MoveError> {
    MoveSelector::from_os_rng()
        .select(board)
        .map(|choice| choice.position)
}
