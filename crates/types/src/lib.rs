//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, event logging).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 22 rows (indexed 0-21, bottom to top)
//! - **Visible rows**: 0-19; rows 20-21 are overflow for spawning and rotation
//! - **Spawn anchor**: (4, 19), the pivot cell of every new piece
//!
//! # Timing
//!
//! The engine measures time in abstract units supplied by the driver through
//! `on_tick`. Gravity fires once the accumulated time reaches
//!
//! ```text
//! GRAVITY_BASE_UNITS + GRAVITY_STEP_UNITS * (MAX_DIFFICULTY - difficulty)
//! ```
//!
//! | Difficulty | Interval (units) |
//! |------------|------------------|
//! | 1 | 69000 |
//! | 10 | 60000 |
//! | 25 | 45000 |
//! | 50 | 20000 |
//!
//! # Examples
//!
//! ```
//! use classic_tetris_types::{GameCommand, PieceColor, PieceKind, Screen, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.color(), PieceColor::Purple);
//! assert_eq!(PieceKind::O.as_str(), "o");
//! assert_eq!(GameCommand::HardDrop.as_str(), "hardDrop");
//! assert_eq!(Screen::Playing.as_str(), "playing");
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Total board height including the two overflow rows
pub const BOARD_HEIGHT: u8 = 22;

/// Rows 0..VISIBLE_HEIGHT are drawn; the rest is overflow
pub const VISIBLE_HEIGHT: u8 = 20;

/// Pivot column of a freshly spawned piece
pub const SPAWN_X: i8 = 4;

/// Pivot row of a freshly spawned piece
pub const SPAWN_Y: i8 = 19;

/// Highest difficulty reachable through the automatic ramp
pub const MAX_DIFFICULTY: u32 = 50;

/// Highest difficulty selectable on the pregame screen
pub const MAX_START_DIFFICULTY: u32 = 10;

/// Lowest difficulty
pub const MIN_DIFFICULTY: u32 = 1;

/// Difficulty rises by one every this many successful spawns
pub const SPAWNS_PER_DIFFICULTY_STEP: u32 = 10;

/// Gravity interval at `MAX_DIFFICULTY`
pub const GRAVITY_BASE_UNITS: u32 = 20_000;

/// Extra gravity interval per difficulty step below `MAX_DIFFICULTY`
pub const GRAVITY_STEP_UNITS: u32 = 1_000;

/// Countdown steps before a game starts or resumes
pub const COUNTDOWN_STEPS: u8 = 3;

/// Number of entries kept in the high-score table
pub const HIGH_SCORE_CAPACITY: usize = 10;

/// Default real-time frame length for the terminal driver (~60 FPS)
pub const TICK_MS: u32 = 16;

/// Default engine time units credited per driver frame
pub const TICK_UNITS: u32 = 1_000;

/// The seven tetromino piece kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Fixed color of this kind
    pub fn color(&self) -> PieceColor {
        match self {
            PieceKind::I => PieceColor::Cyan,
            PieceKind::J => PieceColor::Blue,
            PieceKind::L => PieceColor::Orange,
            PieceKind::O => PieceColor::Yellow,
            PieceKind::S => PieceColor::Green,
            PieceKind::T => PieceColor::Purple,
            PieceKind::Z => PieceColor::Red,
        }
    }

    /// The square is symmetric and never rotates
    pub fn is_rotatable(&self) -> bool {
        *self != PieceKind::O
    }
}

/// Colors painted onto board cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceColor)`: Occupied, either by the landed stack or by the
///   falling piece (which one is derived from the active piece coordinates)
pub type Cell = Option<PieceColor>;

/// Board coordinate `(x, y)` with y growing upward
pub type Coord = (i8, i8);

/// Translation directions accepted by the movement engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Cell delta for one step in this direction
    pub fn delta(&self) -> Coord {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
        }
    }
}

/// Top-level screens of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Menu,
    Pregame,
    Playing,
    GameOver,
    HighScores,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Menu => "menu",
            Screen::Pregame => "pregame",
            Screen::Playing => "playing",
            Screen::GameOver => "game_over",
            Screen::HighScores => "high_scores",
        }
    }
}

/// Buttons on the main menu, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuButton {
    Play,
    HighScores,
    Exit,
}

impl MenuButton {
    pub const ALL: [MenuButton; 3] = [MenuButton::Play, MenuButton::HighScores, MenuButton::Exit];

    /// Next button down, saturating at the last one
    pub fn down(&self) -> Self {
        match self {
            MenuButton::Play => MenuButton::HighScores,
            MenuButton::HighScores | MenuButton::Exit => MenuButton::Exit,
        }
    }

    /// Next button up, saturating at the first one
    pub fn up(&self) -> Self {
        match self {
            MenuButton::Exit => MenuButton::HighScores,
            MenuButton::HighScores | MenuButton::Play => MenuButton::Play,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuButton::Play => "Play",
            MenuButton::HighScores => "High Scores",
            MenuButton::Exit => "Exit",
        }
    }
}

/// Player commands delivered by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Highlight the previous menu button
    MenuUp,
    /// Highlight the next menu button
    MenuDown,
    /// Select / continue
    Confirm,
    /// Return to the main menu
    Back,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Player-requested gravity step
    SoftDrop,
    /// Drop piece until it lands
    HardDrop,
    /// Rotate piece 90° around its pivot
    Rotate,
    TogglePause,
    ToggleGrid,
    ToggleProjection,
    /// Raise the starting difficulty (pregame only)
    AdjustDifficultyUp,
    /// Lower the starting difficulty (pregame only)
    AdjustDifficultyDown,
}

impl GameCommand {
    /// Convert to camelCase string for the event log
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MenuUp => "menuUp",
            GameCommand::MenuDown => "menuDown",
            GameCommand::Confirm => "confirm",
            GameCommand::Back => "back",
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::HardDrop => "hardDrop",
            GameCommand::Rotate => "rotate",
            GameCommand::TogglePause => "togglePause",
            GameCommand::ToggleGrid => "toggleGrid",
            GameCommand::ToggleProjection => "toggleProjection",
            GameCommand::AdjustDifficultyUp => "adjustDifficultyUp",
            GameCommand::AdjustDifficultyDown => "adjustDifficultyDown",
        }
    }
}

/// Engine-side notification queued for the driver.
///
/// The driver drains these every frame to persist scores, write the event
/// log and react to an exit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    ScreenChanged { from: Screen, to: Screen },
    PieceSpawned { kind: PieceKind, spawned: u32 },
    LinesCleared { lines: u32, points: u32 },
    DifficultyRaised { difficulty: u32 },
    GameOver { score: u32, new_high_score: bool },
    HighScoresChanged,
    ExitRequested,
}
