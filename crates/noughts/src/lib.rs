//! Noughts - play tic-tac-toe against a fork-aware computer.
//!
//! The move logic lives in [`noughts_engine`]; this crate is the
//! collaborator around it: a [`GameSession`] owning turns and the delayed
//! computer reply, configuration, and a small terminal front end.
//!
//! # Example
//!
//! ```no_run
//! use noughts::{GameConfig, GameSession};
//! use noughts_engine::Position;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut session = GameSession::new(&GameConfig::default(), tx);
//! session.human_move(Position::Center)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod deferred;
mod play;
mod session;
mod suggest;

pub use config::{ConfigError, GameConfig};
pub use deferred::ScheduledMove;
pub use play::{Command, parse_command, run_play};
pub use session::{COMPUTER_TURN, GameSession, SessionEvent, SessionSnapshot, Turn, YOUR_TURN};
pub use suggest::suggest;
