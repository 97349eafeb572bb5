//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Status is always derived
//! from the squares and never stored.

mod draw;
mod status;
mod win;

pub use draw::{is_draw, is_full};
pub use status::{GameStatus, status};
pub use win::check_winner;
