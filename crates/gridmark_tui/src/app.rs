//! Application state and logic.

use crate::input::move_cursor;
use crate::layout::BoardLayout;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use gridmark::{GridError, Match, MoveResult, Outcome};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// The app owns the match; the UI only reads from it. Moves are suppressed
/// here once somebody has won, since the match itself keeps accepting them.
#[derive(Debug)]
pub struct App {
    game: Match,
    cursor: usize,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty `size` x `size` grid.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GridError> {
        let game = Match::new(size)?;
        let status_message = turn_message(&game);
        Ok(Self {
            game,
            cursor: 0,
            status_message,
            should_quit: false,
        })
    }

    /// Gets the current match.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Cell index under the keyboard cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Current match status.
    pub fn outcome(&self) -> Outcome {
        self.game.evaluate()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Plays the current player's mark at `index`.
    ///
    /// Returns `None` without touching the grid once the match is decided.
    ///
    /// # Errors
    ///
    /// Propagates out-of-range indices from the grid; the layout never
    /// produces them, so an error here is an integration bug.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<Option<MoveResult>, GridError> {
        if self.outcome().is_over() {
            debug!(index, "Match decided, ignoring move");
            return Ok(None);
        }

        let result = self.game.apply_move(index)?;
        self.cursor = index;

        let outcome = self.outcome();
        self.status_message = if let Some(winner) = outcome.winner() {
            let line = self
                .game
                .winning_line()
                .map(|line| line.kind().to_string())
                .unwrap_or_default();
            info!(%winner, %line, "Match won");
            format!(
                "{} wins on the {}! Press 'r' for a rematch or 'q' to quit.",
                winner, line
            )
        } else if !result.accepted {
            format!(
                "Square {} is taken. {}",
                index + 1,
                turn_message(&self.game)
            )
        } else {
            turn_message(&self.game)
        };

        Ok(Some(result))
    }

    /// Starts a rematch on a fresh grid of the same size.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), GridError> {
        debug!("Restarting match");
        self.game = Match::new(self.game.size())?;
        self.cursor = 0;
        self.status_message = turn_message(&self.game);
        Ok(())
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, code: KeyCode) -> Result<(), GridError> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart()?,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.cursor)?;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, self.game.size(), code);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handles a mouse event against the board drawn in the last frame.
    ///
    /// Only a left-button release over a cell plays a move.
    #[instrument(skip(self, layout))]
    pub fn handle_mouse(&mut self, event: MouseEvent, layout: &BoardLayout) -> Result<(), GridError> {
        if event.kind != MouseEventKind::Up(MouseButton::Left) {
            return Ok(());
        }
        match layout.cell_at(event.column, event.row) {
            Some(index) => {
                self.play(index)?;
            }
            None => debug!(column = event.column, row = event.row, "Click outside any cell"),
        }
        Ok(())
    }
}

fn turn_message(game: &Match) -> String {
    if game.grid().is_full() {
        "Board full with no winner. Press 'r' for a rematch or 'q' to quit.".to_string()
    } else {
        format!("Player {} to move", game.grid().current_turn())
    }
}
