//! Core Connect Four game logic: board representation, player identities,
//! and the game state machine driven by [`GameState::attempt_move`].

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::{Player, PlayerId};
pub use state::{GameState, MoveOutcome, Outcome};
