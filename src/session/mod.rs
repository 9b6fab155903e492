//! Played game sessions

mod played_game;

pub use played_game::*;
