//! Snapshot module - a read-only view of the engine for the renderer
//!
//! [`GameEngine::snapshot_into`](crate::GameEngine::snapshot_into) refills an
//! existing snapshot every frame, so rendering never borrows the engine and
//! never allocates.

use crate::high_scores::HighScores;
use crate::pieces::ActivePiece;
use crate::types::{
    Cell, Coord, MenuButton, PieceKind, Screen, BOARD_WIDTH, MIN_DIFFICULTY, VISIBLE_HEIGHT,
};

/// Visible rows, bottom row first
pub type VisibleCells = [[Cell; BOARD_WIDTH as usize]; VISIBLE_HEIGHT as usize];

/// Read-only copy of everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: VisibleCells,
    pub active: Option<ActivePiece>,
    /// Where the active piece would land, if it can still move
    pub projection: Option<[Coord; 4]>,
    pub screen: Screen,
    pub highlighted: MenuButton,
    pub difficulty: u32,
    pub score: u32,
    pub countdown: u8,
    pub paused: bool,
    pub grid_enabled: bool,
    pub projection_enabled: bool,
    pub next_kind: PieceKind,
    pub has_high_score: bool,
    pub awaiting_respawn: bool,
    pub high_scores: HighScores,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; BOARD_WIDTH as usize]; VISIBLE_HEIGHT as usize];
        self.active = None;
        self.projection = None;
        self.screen = Screen::Menu;
        self.highlighted = MenuButton::Play;
        self.difficulty = MIN_DIFFICULTY;
        self.score = 0;
        self.countdown = 0;
        self.paused = false;
        self.grid_enabled = false;
        self.projection_enabled = false;
        self.next_kind = PieceKind::I;
        self.has_high_score = false;
        self.awaiting_respawn = false;
        self.high_scores = HighScores::new();
    }

    /// Playing, not paused and not counting down
    pub fn is_running(&self) -> bool {
        self.screen == Screen::Playing && self.countdown == 0 && !self.paused
    }

    /// Should the landing projection be drawn this frame?
    pub fn shows_projection(&self) -> bool {
        self.projection_enabled && !self.awaiting_respawn && self.is_running()
    }

    /// Visible cell at (x, y), or `None` outside the visible field
    pub fn cell(&self, x: i8, y: i8) -> Option<Cell> {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= VISIBLE_HEIGHT as i8 {
            return None;
        }
        Some(self.board[y as usize][x as usize])
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; VISIBLE_HEIGHT as usize],
            active: None,
            projection: None,
            screen: Screen::Menu,
            highlighted: MenuButton::Play,
            difficulty: MIN_DIFFICULTY,
            score: 0,
            countdown: 0,
            paused: false,
            grid_enabled: false,
            projection_enabled: false,
            next_kind: PieceKind::I,
            has_high_score: false,
            awaiting_respawn: false,
            high_scores: HighScores::new(),
        }
    }
}
