//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`] for the
//! screen currently shown. Key repeat is left to the terminal.

pub mod map;

pub use classic_tetris_types as types;

pub use map::{map_key, should_quit};
