//! Terminal UI: name entry form, board view, and the event loop that feeds
//! clicks and key presses into the game engine.

mod app;
pub mod game_view;

pub use app::App;
