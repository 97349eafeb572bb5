//! Game session: turn ownership, the delayed computer move and status text.

use crate::config::GameConfig;
use crate::deferred::ScheduledMove;
use derive_getters::Getters;
use derive_new::new;
use noughts_engine::{Board, Choice, GameStatus, Mark, MoveError, MoveSelector, Position, status};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Status line while the human is to move.
pub const YOUR_TURN: &str = "Your turn";

/// Status line while the computer is thinking.
pub const COMPUTER_TURN: &str = "Computer's turn";

/// Who may place the next mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Waiting for the human.
    Human,
    /// A delayed computer move is scheduled.
    Computer,
    /// The game is decided; nobody may move until a new game starts.
    Over,
}

/// Notifications for the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The board changed (a mark was placed or the board was cleared).
    BoardChanged(Board),
    /// The computer placed its mark.
    ComputerMoved(Choice),
    /// The status line changed.
    StatusChanged(String),
}

/// Point-in-time copy of the session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct SessionSnapshot {
    /// Board at the time of the snapshot.
    board: Board,
    /// Whose turn it was.
    turn: Turn,
    /// Status line shown to the human.
    status: String,
}

#[derive(Debug)]
struct SessionState {
    board: Board,
    turn: Turn,
    status: String,
    /// Bumped on every new game so stale delayed moves can recognize themselves.
    generation: u64,
    selector: MoveSelector,
}

type Events = mpsc::UnboundedSender<SessionEvent>;

fn lock(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn emit(events: &Events, event: SessionEvent) {
    if events.send(event).is_err() {
        debug!("Event receiver dropped");
    }
}

fn set_status(state: &mut SessionState, events: &Events, text: &str) {
    state.status = text.to_string();
    emit(events, SessionEvent::StatusChanged(state.status.clone()));
}

/// Hands the turn to the other side, or ends the game.
fn switch_turn(state: &mut SessionState, events: &Events) -> Turn {
    let next = match state.turn {
        Turn::Human => Turn::Computer,
        Turn::Computer => Turn::Human,
        Turn::Over => {
            debug!("Game already over");
            return Turn::Over;
        }
    };

    let outcome = status(&state.board);
    match outcome.message() {
        None => {
            state.turn = next;
            let text = if next == Turn::Human {
                YOUR_TURN
            } else {
                COMPUTER_TURN
            };
            set_status(state, events, text);
        }
        Some(message) => {
            info!(?outcome, "Game over");
            state.turn = Turn::Over;
            set_status(state, events, message);
        }
    }
    state.turn
}

/// Body of the delayed computer move.
#[instrument(skip(state, events))]
fn play_computer_move(state: &Mutex<SessionState>, generation: u64, events: &Events) {
    let mut state = lock(state);
    if state.generation != generation || state.turn != Turn::Computer {
        debug!(current = state.generation, "Ignoring stale computer move");
        return;
    }

    let SessionState {
        board, selector, ..
    } = &mut *state;
    let choice = match selector.select(board) {
        Ok(choice) => choice,
        Err(e) => {
            warn!(error = %e, "Computer could not move");
            return;
        }
    };
    if let Err(e) = board.place(choice.position, Mark::Computer) {
        warn!(error = %e, "Computer chose an unplayable square");
        return;
    }

    info!(position = %choice.position, rule = %choice.rule, "Computer moved");
    let board = *board;
    emit(events, SessionEvent::BoardChanged(board));
    emit(events, SessionEvent::ComputerMoved(choice));
    switch_turn(&mut state, events);
}

/// One human against the computer.
///
/// Owns the turn flag and the pending delayed move that would otherwise be
/// ambient state. The human always opens.
#[derive(Debug)]
pub struct GameSession {
    state: Arc<Mutex<SessionState>>,
    pending: ScheduledMove,
    delay: Duration,
    events: Events,
}

impl GameSession {
    /// Creates a session with an empty board and the human to move.
    #[instrument(skip(events))]
    pub fn new(config: &GameConfig, events: mpsc::UnboundedSender<SessionEvent>) -> Self {
        let selector = match config.seed() {
            Some(seed) => MoveSelector::seeded(*seed),
            None => MoveSelector::from_os_rng(),
        };
        info!("Creating game session");
        Self {
            state: Arc::new(Mutex::new(SessionState {
                board: Board::new(),
                turn: Turn::Human,
                status: YOUR_TURN.to_string(),
                generation: 0,
                selector,
            })),
            pending: ScheduledMove::default(),
            delay: config.computer_delay(),
            events,
        }
    }

    /// Clears the board, cancels any pending computer move and gives the
    /// human the first move.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.pending.cancel();
        let mut state = lock(&self.state);
        state.generation += 1;
        state.board.clear();
        state.turn = Turn::Human;
        info!(generation = state.generation, "New game");
        emit(&self.events, SessionEvent::BoardChanged(state.board));
        set_status(&mut state, &self.events, YOUR_TURN);
    }

    /// Places the human's mark and passes the turn.
    ///
    /// When the game continues, the computer's reply is scheduled after the
    /// configured delay. Must be called inside a tokio runtime.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is decided
    /// - [`MoveError::NotYourTurn`] while the computer is to move
    /// - [`MoveError::SquareOccupied`] for a marked square
    #[instrument(skip(self))]
    pub fn human_move(&mut self, position: Position) -> Result<Turn, MoveError> {
        let (turn, generation) = {
            let mut state = lock(&self.state);
            match state.turn {
                Turn::Human => {}
                Turn::Computer => return Err(MoveError::NotYourTurn(Mark::Human)),
                Turn::Over => return Err(MoveError::GameOver),
            }
            state.board.place(position, Mark::Human).inspect_err(|e| {
                warn!(error = %e, "Rejected human move");
            })?;
            emit(&self.events, SessionEvent::BoardChanged(state.board));
            (switch_turn(&mut state, &self.events), state.generation)
        };

        if turn == Turn::Computer {
            self.schedule_computer_move(generation);
        }
        Ok(turn)
    }

    fn schedule_computer_move(&mut self, generation: u64) {
        self.pending.cancel();
        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        debug!(delay = ?self.delay, "Scheduling computer move");
        self.pending = ScheduledMove::spawn(self.delay, move || {
            play_computer_move(&state, generation, &events);
        });
    }

    /// Checks if a computer move is waiting to fire.
    pub fn computer_pending(&self) -> bool {
        self.pending.is_pending()
    }

    /// Copies the current board, turn and status line.
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = lock(&self.state);
        SessionSnapshot::new(state.board, state.turn, state.status.clone())
    }

    /// Derived status of the current board.
    pub fn game_status(&self) -> GameStatus {
        status(&lock(&self.state).board)
    }
}
