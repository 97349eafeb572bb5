//! Tactical and positional heuristics for choosing a square.
//!
//! Each heuristic either names a square or declines with `None`; declining
//! is ordinary control flow. The [`MoveSelector`](crate::MoveSelector)
//! decides the order in which they are consulted.

mod completion;
mod fork;
mod positional;

pub use completion::{count_threats, find_completing_move};
pub use fork::{find_fork_block, find_fork_move};
pub use positional::find_strategic_move;
