//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and the session state machine. It does no
//! I/O, never sleeps and never reads a clock: time arrives as explicit tick
//! units from the driver.
//!
//! # Module Structure
//!
//! - [`board`]: 10x22 grid (20 visible rows plus 2 overflow rows) and line clearing
//! - [`pieces`]: the seven-piece catalog, translation and pivot rotation
//! - [`rng`]: seeded LCG and uniform piece selection
//! - [`scoring`]: line-clear points, gravity interval and difficulty ramp
//! - [`high_scores`]: the top-ten table
//! - [`game_state`]: [`GameEngine`], screens, countdown, pause and commands
//! - [`snapshot`]: read-only frame data for renderers
//!
//! # Game Rules
//!
//! - Pieces are picked uniformly at random; repeats are allowed.
//! - Rotation turns 90° around the first block. A blocked rotation is
//!   rejected; there are no wall kicks.
//! - A piece that cannot move down is landed. The next downward step clears
//!   full rows (worth `lines × difficulty`) and spawns the next piece.
//! - Every tenth spawn raises the difficulty, up to 50.
//!
//! # Example
//!
//! ```
//! use classic_tetris_core::GameEngine;
//! use classic_tetris_types::{GameCommand, Screen};
//!
//! let mut engine = GameEngine::new(12345);
//! engine.apply_command(GameCommand::Confirm); // Play
//! engine.apply_command(GameCommand::Confirm); // start at difficulty 1
//! assert_eq!(engine.screen(), Screen::Playing);
//!
//! // Three countdown steps, then the first piece spawns.
//! let interval = engine.gravity_interval();
//! for _ in 0..4 {
//!     engine.on_tick(interval);
//! }
//! assert_eq!(engine.spawned(), 1);
//! ```

pub mod board;
pub mod game_state;
pub mod high_scores;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use classic_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::{EngineEvents, GameEngine, MoveOutcome, SpawnOutcome, TickOutcome};
pub use high_scores::HighScores;
pub use pieces::{get_shape, ActivePiece};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{gravity_interval, line_clear_score};
pub use snapshot::{GameSnapshot, VisibleCells};
