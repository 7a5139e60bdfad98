//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into
//! a plain framebuffer that is flushed to the terminal with crossterm, without
//! any widget or layout library in between.
//!
//! - [`GameView`] turns a [`core::GameSnapshot`] into a framebuffer (pure).
//! - [`TerminalRenderer`] owns the terminal and writes frames as diffs.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use classic_tetris_core as core;
pub use classic_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
