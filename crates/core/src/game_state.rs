//! Game state module - the session state machine
//!
//! Ties together board, pieces, RNG, scoring and the high-score table. The
//! engine owns every piece of mutable state; the driver feeds it commands and
//! elapsed time units and drains the events it queues.
//!
//! The falling piece is painted onto the board like any landed block. Its
//! four coordinates are the only thing that distinguishes it from the stack.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::high_scores::HighScores;
use crate::pieces::ActivePiece;
use crate::rng::PieceGenerator;
use crate::scoring::{
    clamp_start_difficulty, difficulty_after_spawn, gravity_interval, line_clear_score,
};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Maximum number of undrained events
pub const EVENT_QUEUE_CAPACITY: usize = 32;

/// Events drained by the driver with [`GameEngine::take_events`]
pub type EngineEvents = ArrayVec<EngineEvent, EVENT_QUEUE_CAPACITY>;

/// Result of [`GameEngine::spawn_next`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Spawned(PieceKind),
    GameOver,
}

/// Result of [`GameEngine::try_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved one cell
    Moved,
    /// Nothing changed
    Rejected,
    /// A downward move was blocked; the next downward move spawns
    Landed,
    /// Lines were cleared and the next piece spawned
    Spawned,
    /// The next piece could not spawn
    GameOver,
}

/// Result of [`GameEngine::on_tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Time accumulated, nothing else happened
    Idle,
    /// One countdown step elapsed; carries the steps remaining
    Countdown(u8),
    /// Gravity moved the piece down
    Gravity(MoveOutcome),
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    active: Option<ActivePiece>,
    generator: PieceGenerator,
    high_scores: HighScores,
    screen: Screen,
    highlighted: MenuButton,
    difficulty: u32,
    score: u32,
    /// Successful spawns this game
    spawned: u32,
    paused: bool,
    countdown: u8,
    /// Time units since the last gravity step
    since_descent: u32,
    /// `since_descent` saved when the game was paused
    paused_since_descent: u32,
    grid_enabled: bool,
    projection_enabled: bool,
    next_kind: PieceKind,
    /// The active piece has landed; the next downward move clears and spawns
    awaiting_respawn: bool,
    has_high_score: bool,
    events: EngineEvents,
}

impl GameEngine {
    /// Create an engine on the main menu with an empty high-score table
    pub fn new(seed: u32) -> Self {
        Self::with_high_scores(seed, HighScores::new())
    }

    pub fn with_high_scores(seed: u32, high_scores: HighScores) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let next_kind = generator.draw();

        Self {
            board: Board::new(),
            active: None,
            generator,
            high_scores,
            screen: Screen::Menu,
            highlighted: MenuButton::Play,
            difficulty: MIN_DIFFICULTY,
            score: 0,
            spawned: 0,
            paused: false,
            countdown: 0,
            since_descent: 0,
            paused_since_descent: 0,
            grid_enabled: false,
            projection_enabled: false,
            next_kind,
            awaiting_respawn: false,
            has_high_score: false,
            events: EngineEvents::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn highlighted(&self) -> MenuButton {
        self.highlighted
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn countdown(&self) -> u8 {
        self.countdown
    }

    pub fn since_descent(&self) -> u32 {
        self.since_descent
    }

    pub fn grid_enabled(&self) -> bool {
        self.grid_enabled
    }

    pub fn projection_enabled(&self) -> bool {
        self.projection_enabled
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    /// Override the lookahead piece
    pub fn set_next_kind(&mut self, kind: PieceKind) {
        self.next_kind = kind;
    }

    pub fn awaiting_respawn(&self) -> bool {
        self.awaiting_respawn
    }

    pub fn has_high_score(&self) -> bool {
        self.has_high_score
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Time units between gravity steps at the current difficulty
    pub fn gravity_interval(&self) -> u32 {
        gravity_interval(self.difficulty)
    }

    /// Playing, not paused and not counting down
    pub fn is_running(&self) -> bool {
        self.screen == Screen::Playing && self.countdown == 0 && !self.paused
    }

    /// Drain every queued event
    pub fn take_events(&mut self) -> EngineEvents {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: EngineEvent) {
        // The driver drains every frame; a full queue only drops the overflow.
        let _ = self.events.try_push(event);
    }

    fn set_screen(&mut self, to: Screen) -> bool {
        let from = self.screen;
        if from == to {
            return false;
        }
        self.screen = to;
        self.push_event(EngineEvent::ScreenChanged { from, to });
        true
    }

    /// Reset the session for a new game.
    ///
    /// The first piece is not spawned yet: the landed flag is set so the
    /// first descent after the countdown spawns it.
    pub fn new_game(&mut self) {
        self.difficulty = MIN_DIFFICULTY;
        self.score = 0;
        self.board.clear();
        self.active = None;
        self.grid_enabled = false;
        self.projection_enabled = false;
        self.paused = false;
        self.has_high_score = false;
        self.spawned = 0;
        self.since_descent = 0;
        self.countdown = COUNTDOWN_STEPS;
        self.awaiting_respawn = true;
        self.paused_since_descent = gravity_interval(self.difficulty);
        self.next_kind = self.generator.draw();
    }

    /// Spawn the lookahead piece at the spawn anchor.
    ///
    /// Fails without touching the board if any target cell is occupied, which
    /// ends the game.
    pub fn spawn_next(&mut self) -> SpawnOutcome {
        let kind = self.next_kind;
        let piece = ActivePiece::spawn(kind);

        if piece
            .blocks
            .iter()
            .any(|&(x, y)| self.board.is_occupied(x, y))
        {
            self.active = None;
            self.end_game();
            return SpawnOutcome::GameOver;
        }

        self.paint(&piece.blocks, Some(piece.color()));
        self.active = Some(piece);
        self.spawned += 1;
        self.next_kind = self.generator.draw();
        self.push_event(EngineEvent::PieceSpawned {
            kind,
            spawned: self.spawned,
        });

        let difficulty = difficulty_after_spawn(self.difficulty, self.spawned);
        if difficulty != self.difficulty {
            self.difficulty = difficulty;
            self.push_event(EngineEvent::DifficultyRaised { difficulty });
        }

        SpawnOutcome::Spawned(kind)
    }

    fn end_game(&mut self) {
        self.awaiting_respawn = false;
        self.set_screen(Screen::GameOver);
        self.has_high_score = self.high_scores.insert(self.score);
        self.push_event(EngineEvent::GameOver {
            score: self.score,
            new_high_score: self.has_high_score,
        });
        if self.has_high_score {
            self.push_event(EngineEvent::HighScoresChanged);
        }
    }

    fn paint(&mut self, blocks: &[Coord; 4], cell: Cell) {
        for &(x, y) in blocks {
            self.board.set_cell(x, y, cell);
        }
    }

    /// Move the active piece onto `target`, painted with `cell`
    fn relocate(&mut self, piece: ActivePiece, target: [Coord; 4], cell: Cell) {
        self.paint(&piece.blocks, None);
        self.paint(&target, cell);
        self.active = Some(ActivePiece {
            kind: piece.kind,
            blocks: target,
        });
    }

    fn clear_lines(&mut self) {
        let lines = self.board.clear_completed_lines().len() as u32;
        if lines == 0 {
            return;
        }
        let points = line_clear_score(lines, self.difficulty);
        self.score = self.score.saturating_add(points);
        self.push_event(EngineEvent::LinesCleared { lines, points });
    }

    /// Move the active piece one cell.
    ///
    /// With a landed piece pending, any call clears completed lines and
    /// spawns the next piece instead of moving.
    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.awaiting_respawn {
            self.awaiting_respawn = false;
            self.active = None;
            self.clear_lines();
            return match self.spawn_next() {
                SpawnOutcome::Spawned(_) => MoveOutcome::Spawned,
                SpawnOutcome::GameOver => MoveOutcome::GameOver,
            };
        }

        let Some(piece) = self.active else {
            return MoveOutcome::Rejected;
        };

        let (dx, dy) = direction.delta();
        if !piece.can_translate(&self.board, dx, dy) {
            if direction == Direction::Down {
                self.awaiting_respawn = true;
                return MoveOutcome::Landed;
            }
            return MoveOutcome::Rejected;
        }

        self.relocate(piece, piece.translated(dx, dy), Some(piece.color()));
        MoveOutcome::Moved
    }

    /// Rotate the active piece 90° around its pivot. No wall kicks.
    pub fn rotate_clockwise(&mut self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        if !piece.kind.is_rotatable() {
            return false;
        }
        let Some(target) = piece.rotation_target(&self.board) else {
            return false;
        };

        let (px, py) = piece.pivot();
        let cell = self.board.get(px, py).flatten().or(Some(piece.color()));
        self.relocate(piece, target, cell);
        true
    }

    /// Drop the active piece until it lands. Returns rows descended.
    ///
    /// The gravity accumulator is filled so the next tick performs the
    /// line clear and spawn.
    pub fn hard_drop(&mut self) -> u32 {
        let mut rows = 0;
        while !self.awaiting_respawn {
            match self.try_move(Direction::Down) {
                MoveOutcome::Moved => rows += 1,
                MoveOutcome::Landed => {}
                _ => break,
            }
        }
        self.since_descent = self.gravity_interval();
        rows
    }

    /// Rows the active piece could still descend
    pub fn drop_distance(&self) -> Option<i8> {
        self.active.map(|piece| piece.drop_distance(&self.board))
    }

    /// Landing position of the active piece
    pub fn projection(&self) -> Option<[Coord; 4]> {
        if self.awaiting_respawn {
            return None;
        }
        let piece = self.active?;
        let distance = piece.drop_distance(&self.board);
        Some(piece.translated(0, -distance))
    }

    /// Advance the clock by `elapsed` time units
    pub fn on_tick(&mut self, elapsed: u32) -> TickOutcome {
        if self.screen != Screen::Playing {
            return TickOutcome::Idle;
        }
        if !self.paused {
            self.since_descent = self.since_descent.saturating_add(elapsed);
        }
        if self.since_descent < self.gravity_interval() {
            return TickOutcome::Idle;
        }

        if self.countdown > 0 {
            self.countdown -= 1;
            self.since_descent = if self.countdown > 0 {
                0
            } else {
                self.paused_since_descent
            };
            return TickOutcome::Countdown(self.countdown);
        }

        let outcome = self.try_move(Direction::Down);
        self.since_descent = 0;
        TickOutcome::Gravity(outcome)
    }

    fn toggle_pause(&mut self) -> bool {
        if self.screen != Screen::Playing || (self.countdown > 0 && !self.paused) {
            return false;
        }
        self.paused = !self.paused;
        if self.paused {
            self.paused_since_descent = self.since_descent;
            self.countdown = COUNTDOWN_STEPS;
        }
        self.since_descent = 0;
        true
    }

    fn confirm(&mut self) -> bool {
        match self.screen {
            Screen::Menu => match self.highlighted {
                MenuButton::Play => {
                    self.new_game();
                    self.set_screen(Screen::Pregame)
                }
                MenuButton::HighScores => self.set_screen(Screen::HighScores),
                MenuButton::Exit => {
                    self.push_event(EngineEvent::ExitRequested);
                    true
                }
            },
            Screen::Pregame => self.set_screen(Screen::Playing),
            Screen::GameOver => self.set_screen(Screen::Menu),
            Screen::Playing | Screen::HighScores => false,
        }
    }

    fn adjust_difficulty(&mut self, up: bool) -> bool {
        if self.screen != Screen::Pregame {
            return false;
        }
        let target = if up {
            self.difficulty.saturating_add(1)
        } else {
            self.difficulty.saturating_sub(1)
        };
        let difficulty = clamp_start_difficulty(target);
        let changed = difficulty != self.difficulty;
        self.difficulty = difficulty;
        changed
    }

    fn set_highlight(&mut self, button: MenuButton) -> bool {
        if self.screen != Screen::Menu || self.highlighted == button {
            return false;
        }
        self.highlighted = button;
        true
    }

    /// Apply a player command. Returns true when state changed.
    pub fn apply_command(&mut self, command: GameCommand) -> bool {
        let running = self.is_running();
        let steerable = running && !self.awaiting_respawn;

        match command {
            GameCommand::MenuUp => self.set_highlight(self.highlighted.up()),
            GameCommand::MenuDown => self.set_highlight(self.highlighted.down()),
            GameCommand::Confirm => self.confirm(),
            GameCommand::Back => {
                if self.screen == Screen::GameOver {
                    false
                } else {
                    self.set_screen(Screen::Menu)
                }
            }
            GameCommand::AdjustDifficultyUp => self.adjust_difficulty(true),
            GameCommand::AdjustDifficultyDown => self.adjust_difficulty(false),
            GameCommand::MoveLeft if steerable => {
                self.try_move(Direction::Left) != MoveOutcome::Rejected
            }
            GameCommand::MoveRight if steerable => {
                self.try_move(Direction::Right) != MoveOutcome::Rejected
            }
            GameCommand::Rotate if steerable => self.rotate_clockwise(),
            GameCommand::SoftDrop if running => {
                self.try_move(Direction::Down) != MoveOutcome::Rejected
            }
            GameCommand::HardDrop if running => {
                self.hard_drop();
                true
            }
            GameCommand::ToggleGrid if running => {
                self.grid_enabled = !self.grid_enabled;
                true
            }
            GameCommand::ToggleProjection if running => {
                self.projection_enabled = !self.projection_enabled;
                true
            }
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::MoveLeft
            | GameCommand::MoveRight
            | GameCommand::Rotate
            | GameCommand::SoftDrop
            | GameCommand::HardDrop
            | GameCommand::ToggleGrid
            | GameCommand::ToggleProjection => false,
        }
    }

    /// Fill a snapshot in place
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (row, cells) in out.board.iter_mut().zip(self.board.visible_rows()) {
            row.copy_from_slice(cells);
        }
        out.active = self.active;
        out.projection = self.projection();
        out.screen = self.screen;
        out.highlighted = self.highlighted;
        out.difficulty = self.difficulty;
        out.score = self.score;
        out.countdown = self.countdown;
        out.paused = self.paused;
        out.grid_enabled = self.grid_enabled;
        out.projection_enabled = self.projection_enabled;
        out.next_kind = self.next_kind;
        out.has_high_score = self.has_high_score;
        out.awaiting_respawn = self.awaiting_respawn;
        out.high_scores.clone_from(&self.high_scores);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
