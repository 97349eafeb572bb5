//! Noughts engine - tic-tac-toe rules and a computer opponent.
//!
//! The engine reads a board snapshot and picks a square for the computer
//! (`O`) playing against a human (`X`). It never owns or resets the board.
//!
//! # Architecture
//!
//! - **Board**: squares, positions and the eight winning lines
//! - **Rules**: win and draw detection, derived [`GameStatus`]
//! - **Strategy**: line completion, forks, fork blocking, positional play
//! - **Selector**: composes the strategies in a fixed priority order
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Board, Position, select_move};
//!
//! let board = Board::new();
//! assert_eq!(select_move(&board).unwrap(), Position::Center);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod position;
mod rules;
mod selector;
mod strategy;
mod types;

pub use board::{Board, BoardParseError, LINES, lines};
pub use error::MoveError;
pub use position::Position;
pub use rules::{GameStatus, check_winner, is_draw, is_full, status};
pub use selector::{Choice, MoveSelector, Rule, select_move};
pub use strategy::{
    count_threats, find_completing_move, find_fork_block, find_fork_move, find_strategic_move,
};
pub use types::{Mark, Square};
