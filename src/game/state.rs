use crate::error::GameError;

use super::board::COLS;
use super::{Board, Player, PlayerId};

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(PlayerId),
    Tie,
}

/// Result of a single [`GameState::attempt_move`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece landed and play continues. Carries the landing cell and
    /// the mover so the view can render the new piece.
    Continue {
        row: usize,
        column: usize,
        player: PlayerId,
    },
    /// The column has no empty cell; nothing changed.
    ColumnFull,
    /// The mover completed a run of four.
    Win { player: PlayerId },
    /// The board filled up with no run of four.
    Tie,
    /// The game was already over; nothing changed.
    GameOver,
}

/// The full state of one game: board, the two players fixed at start, whose
/// turn it is, and the terminal outcome once the game ends.
///
/// A new game means a new `GameState`; terminal states accept no further
/// moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current: PlayerId,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Start a fresh game. The board is empty and player one moves first.
    pub fn new(player_one: Player, player_two: Player) -> Self {
        GameState {
            board: Board::new(),
            players: [player_one, player_two],
            current: PlayerId::One,
            outcome: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Look up a player's identity by seat.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Get the seat whose turn it is
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Rejected moves are ordinary outcomes, not errors: a full column
    /// yields [`MoveOutcome::ColumnFull`] and a finished game yields
    /// [`MoveOutcome::GameOver`], both without touching the state. Only an
    /// out-of-range column is an error, since it means the caller mapped
    /// its input wrong.
    pub fn attempt_move(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        if self.is_terminal() {
            return Ok(MoveOutcome::GameOver);
        }

        if column >= COLS {
            return Err(GameError::InvalidColumn { column });
        }

        let mover = self.current;
        let Some(row) = self.board.drop_piece(column, mover) else {
            return Ok(MoveOutcome::ColumnFull);
        };

        // Win before tie: a run completed by the last possible piece wins
        if self.board.has_run(mover) {
            self.outcome = Some(Outcome::Winner(mover));
            return Ok(MoveOutcome::Win { player: mover });
        }

        if self.board.is_full() {
            self.outcome = Some(Outcome::Tie);
            return Ok(MoveOutcome::Tie);
        }

        self.current = mover.other();
        Ok(MoveOutcome::Continue {
            row,
            column,
            player: mover,
        })
    }
}
