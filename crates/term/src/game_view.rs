//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Board rows grow upward, so board row 19 is drawn at the top of the frame
//! and row 0 just above the bottom border.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{u32_width, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{MenuButton, PieceColor, Screen, BOARD_WIDTH, VISIBLE_HEIGHT};

pub const BACKGROUND: Rgb = Rgb::new(253, 227, 167);
pub const GREY: Rgb = Rgb::new(108, 122, 137);
pub const CYAN: Rgb = Rgb::new(129, 207, 224);
pub const BLUE: Rgb = Rgb::new(37, 116, 169);
pub const ORANGE: Rgb = Rgb::new(232, 126, 4);
pub const YELLOW: Rgb = Rgb::new(247, 202, 24);
pub const GREEN: Rgb = Rgb::new(0, 177, 106);
pub const PURPLE: Rgb = Rgb::new(103, 65, 114);
pub const RED: Rgb = Rgb::new(239, 72, 54);

/// Terminal color of a piece
pub fn piece_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Cyan => CYAN,
        PieceColor::Blue => BLUE,
        PieceColor::Orange => ORANGE,
        PieceColor::Yellow => YELLOW,
        PieceColor::Green => GREEN,
        PieceColor::Purple => PURPLE,
        PieceColor::Red => RED,
    }
}

const TEXT: CellStyle = CellStyle::new(GREY, BACKGROUND);

/// Block letters of the menu title, one `#` per block
const TITLE: [&str; 5] = [
    "### ### ### ##  # ###",
    " #  #    #  # # # #  ",
    " #  ##   #  ##  # ###",
    " #  #    #  # # #   #",
    " #  ###  #  # # # ###",
];

const CONTROLS: [&str; 6] = [
    "Arrows: move piece.",
    "Space: drop piece.",
    "P: pause/resume game.",
    "G: toggle grid view.",
    "H: toggle piece projection.",
    "ESC: quit.",
];

const SIDEBAR_GAP: u16 = 2;
const SIDEBAR_W: u16 = 28;
const DIALOG_W: u16 = 30;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for every screen of the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Board frame size including the border
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            VISIBLE_HEIGHT as u16 + 2,
        )
    }

    /// Top-left corner of the board frame within `viewport`
    pub fn board_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let total_w = frame_w + SIDEBAR_GAP + SIDEBAR_W;
        (
            viewport.width.saturating_sub(total_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Render the current screen into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: TEXT,
        });

        match snap.screen {
            Screen::Menu => self.draw_menu(fb, snap, viewport),
            Screen::Pregame => {
                self.draw_menu(fb, snap, viewport);
                self.draw_pregame(fb, snap, viewport);
            }
            Screen::Playing => self.draw_game(fb, snap, viewport),
            Screen::GameOver => {
                self.draw_game(fb, snap, viewport);
                self.draw_game_over(fb, snap, viewport);
            }
            Screen::HighScores => {
                self.draw_menu(fb, snap, viewport);
                self.draw_high_scores(fb, snap, viewport);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        const MENU_H: u16 = 15;
        let top = viewport.height.saturating_sub(MENU_H) / 2;
        let title_w = TITLE[0].len() as u16 * 2;
        let title_x = viewport.width.saturating_sub(title_w) / 2;

        for (row, line) in TITLE.iter().enumerate() {
            let y = top + row as u16;
            for (col, ch) in line.bytes().enumerate() {
                if ch != b'#' {
                    continue;
                }
                let style = CellStyle::new(title_color(col), BACKGROUND);
                let x = title_x + col as u16 * 2;
                fb.put_char(x, y, '█', style);
                fb.put_char(x + 1, y, '█', style);
            }
        }

        fb.put_str_centered(
            0,
            top + 7,
            viewport.width,
            "Press ENTER to select an option. Navigate using the arrow keys.",
            TEXT,
        );

        for (i, button) in MenuButton::ALL.iter().enumerate() {
            let y = top + 9 + (i as u16) * 2;
            let label = button.label();
            let label_w = label.chars().count() as u16;
            let x = viewport.width.saturating_sub(label_w) / 2;
            if *button == snap.highlighted {
                let style = TEXT.bold();
                fb.put_str(x, y, label, style);
                fb.put_str(x.saturating_sub(2), y, ">", style);
                fb.put_str(x + label_w + 1, y, "<", style);
            } else {
                fb.put_str(x, y, label, TEXT);
            }
        }
    }

    /// Clear and outline a centered dialog with `lines` rows of content.
    /// Returns (x, first content row).
    fn open_dialog(&self, fb: &mut FrameBuffer, viewport: Viewport, lines: u16) -> (u16, u16) {
        let h = lines + 4;
        let x = viewport.width.saturating_sub(DIALOG_W) / 2;
        let y = viewport.height.saturating_sub(h) / 2;
        fb.fill_rect(x, y, DIALOG_W, h, ' ', TEXT);
        fb.draw_box(x, y, DIALOG_W, h, TEXT);
        (x, y + 2)
    }

    fn draw_pregame(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let (x, y) = self.open_dialog(fb, viewport, 6);
        fb.put_str_centered(x, y, DIALOG_W, "Starting difficulty:", TEXT);
        let digits = u32_width(snap.difficulty);
        fb.put_u32(
            x + DIALOG_W.saturating_sub(digits) / 2,
            y + 1,
            snap.difficulty,
            TEXT.bold(),
        );
        fb.put_str_centered(x, y + 3, DIALOG_W, "Adjust using arrow keys.", TEXT);
        fb.put_str_centered(x, y + 4, DIALOG_W, "Press ENTER to continue.", TEXT);
        fb.put_str_centered(x, y + 5, DIALOG_W, "Press ESC to go back.", TEXT);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let (x, y) = self.open_dialog(fb, viewport, 5);
        fb.put_str_centered(x, y, DIALOG_W, "Game over!", TEXT.bold());

        let label = "Score: ";
        let w = label.len() as u16 + u32_width(snap.score);
        let sx = x + DIALOG_W.saturating_sub(w) / 2;
        let sx = fb.put_str(sx, y + 1, label, TEXT);
        fb.put_u32(sx, y + 1, snap.score, TEXT);

        if snap.has_high_score {
            fb.put_str_centered(x, y + 2, DIALOG_W, "New high score!", TEXT.bold());
        }
        fb.put_str_centered(x, y + 4, DIALOG_W, "Press ENTER to continue.", TEXT);
    }

    fn draw_high_scores(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let entries = snap.high_scores.entries();
        let rows = entries.len().max(1) as u16;
        let (x, y) = self.open_dialog(fb, viewport, rows + 4);
        fb.put_str_centered(x, y, DIALOG_W, "High Scores", TEXT.bold());

        if entries.is_empty() {
            fb.put_str_centered(x, y + 2, DIALOG_W, "No scores yet.", TEXT);
        }
        // Ranks are right-aligned so the scores line up.
        let rank_x = x + 10;
        for (i, score) in entries.iter().enumerate() {
            let row = y + 2 + i as u16;
            let rank = i as u32 + 1;
            let rx = rank_x + 2 - u32_width(rank);
            let rx = fb.put_u32(rx, row, rank, TEXT);
            let rx = fb.put_str(rx, row, ". ", TEXT);
            fb.put_u32(rx, row, *score, TEXT);
        }

        fb.put_str_centered(x, y + rows + 3, DIALOG_W, "Press ESC to go back.", TEXT);
    }

    fn draw_game(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.board_origin(viewport);
        fb.draw_box(start_x, start_y, frame_w, frame_h, TEXT);

        let running = snap.is_running();
        if running {
            self.draw_board(fb, snap, start_x, start_y);
        } else if snap.screen == Screen::Playing {
            let mid_y = start_y + frame_h / 2;
            if snap.paused {
                fb.put_str_centered(start_x, mid_y, frame_w, "Paused", TEXT.bold());
            } else {
                let digits = u32_width(snap.countdown as u32);
                fb.put_u32(
                    start_x + frame_w.saturating_sub(digits) / 2,
                    mid_y,
                    snap.countdown as u32,
                    TEXT.bold(),
                );
            }
        }

        self.draw_sidebar(fb, snap, start_x + frame_w + SIDEBAR_GAP, start_y);
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, start_x: u16, start_y: u16) {
        let grid = TEXT.dim();
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.fill_cell(
                        fb,
                        start_x,
                        start_y,
                        x as i8,
                        y as i8,
                        '█',
                        CellStyle::new(piece_rgb(*color), BACKGROUND),
                    ),
                    None if snap.grid_enabled => {
                        self.fill_cell(fb, start_x, start_y, x as i8, y as i8, '·', grid)
                    }
                    None => {}
                }
            }
        }

        if !snap.shows_projection() {
            return;
        }
        let (Some(active), Some(projection)) = (snap.active, snap.projection) else {
            return;
        };
        let style = CellStyle::new(piece_rgb(active.color()), BACKGROUND);
        for &(x, y) in projection.iter() {
            if snap.cell(x, y) == Some(None) {
                self.fill_cell(fb, start_x, start_y, x, y, '░', style);
            }
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= VISIBLE_HEIGHT as i8 {
            return;
        }
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + (VISIBLE_HEIGHT as u16 - 1 - y as u16);
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_sidebar(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let label = TEXT.bold();

        fb.put_str(x, y, "Next piece:", label);
        let style = CellStyle::new(piece_rgb(snap.next_kind.color()), BACKGROUND);
        for &(dx, dy) in get_shape(snap.next_kind).iter() {
            // Offsets span dx -1..=2 and dy -1..=0.
            let px = x + ((dx + 1) as u16) * self.cell_w;
            let py = y + 2 + (-dy) as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }

        fb.put_str(x, y + 5, "Score:", label);
        fb.put_u32(x, y + 6, snap.score, TEXT);

        fb.put_str(x, y + 8, "Difficulty:", label);
        fb.put_u32(x, y + 9, snap.difficulty, TEXT);

        fb.put_str(x, y + 11, "Controls:", label);
        for (i, line) in CONTROLS.iter().enumerate() {
            fb.put_str(x, y + 12 + i as u16, line, TEXT);
        }
    }
}

fn title_color(col: usize) -> Rgb {
    match col {
        0..=2 => RED,
        4..=6 => ORANGE,
        8..=10 => YELLOW,
        12..=14 => GREEN,
        16 => CYAN,
        _ => PURPLE,
    }
}
