//! Classic Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `classic_tetris::{core,input,term,types}`
//! and holds the application glue the binary needs: environment
//! configuration, high-score persistence and the JSON-lines event log.

pub mod config;
pub mod event_log;
pub mod persist;

pub use classic_tetris_core as core;
pub use classic_tetris_input as input;
pub use classic_tetris_term as term;
pub use classic_tetris_types as types;

pub use config::AppConfig;
pub use event_log::{EventLog, LogEvent, LogRecord};
