//! # Connect Four
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//! The game engine is a standalone state machine with no rendering
//! dependency; the terminal UI reads player names from an entry form,
//! drives the engine through [`game::GameState::attempt_move`], and renders
//! the outcome of each move.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player identities, state machine
//! - [`ui`] — Terminal UI: name entry form, board view, input handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
