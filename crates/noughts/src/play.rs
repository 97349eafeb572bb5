//! Line-based terminal front end.

use crate::config::GameConfig;
use crate::session::{GameSession, SessionEvent};
use anyhow::Result;
use noughts_engine::Position;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

const HELP: &str = "Enter 1-9 or a square name (e.g. \"top-left\", \"center\") to play.\n\
Other commands: new, board, help, quit.";

/// A line typed by the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark.
    Place(Position),
    /// Start over.
    NewGame,
    /// Print the board again.
    Board,
    /// Print the command list.
    Help,
    /// Leave the program.
    Quit,
    /// Anything unrecognized.
    Unknown,
}

/// Parses one input line.
pub fn parse_command(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        "new" | "n" | "restart" => Command::NewGame,
        "board" | "b" => Command::Board,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => Position::from_label_or_number(other)
            .map(Command::Place)
            .unwrap_or(Command::Unknown),
    }
}

fn render(event: SessionEvent) {
    match event {
        SessionEvent::BoardChanged(board) => println!("\n{}\n", board),
        SessionEvent::ComputerMoved(choice) => println!("Computer plays {}", choice.position),
        SessionEvent::StatusChanged(status) => println!("{}", status),
    }
}

/// Runs an interactive game on stdin/stdout until `quit` or end of input.
#[instrument(skip(config))]
pub async fn run_play(config: GameConfig) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = GameSession::new(&config, tx);
    info!(delay_ms = *config.computer_delay_ms(), "Starting terminal game");

    println!("You are X. {}", HELP);
    session.new_game();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(event) = rx.recv() => render(event),
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("End of input");
                    break;
                };
                match parse_command(&line) {
                    Command::Place(position) => {
                        if let Err(e) = session.human_move(position) {
                            println!("{}", e);
                        }
                    }
                    Command::NewGame => session.new_game(),
                    Command::Board => {
                        let snapshot = session.snapshot();
                        println!("\n{}\n\n{}", snapshot.board(), snapshot.status());
                    }
                    Command::Help => println!("{}", HELP),
                    Command::Quit => break,
                    Command::Unknown => println!("Unrecognized input. {}", HELP),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("5"), Command::Place(Position::Center));
        assert_eq!(parse_command("Top-Left\n"), Command::Place(Position::TopLeft));
        assert_eq!(parse_command(" new "), Command::NewGame);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("board"), Command::Board);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("0"), Command::Unknown);
        assert_eq!(parse_command("sideways"), Command::Unknown);
    }
}
