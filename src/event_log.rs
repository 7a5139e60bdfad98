//! JSON-lines event log.
//!
//! One serialized [`LogRecord`] per line, appended to a file. Logging is best
//! effort: the first failed write disables the log and play continues.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::{EngineEvent, GameCommand};

/// A logged event, tagged by `event` in the JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    ScreenChanged {
        from: &'static str,
        to: &'static str,
    },
    PieceSpawned {
        kind: &'static str,
        spawned: u32,
    },
    LinesCleared {
        lines: u32,
        points: u32,
    },
    DifficultyRaised {
        difficulty: u32,
    },
    GameOver {
        score: u32,
        new_high_score: bool,
    },
    HighScoresChanged,
    /// Writing the score file failed; play went on
    HighScoresSaveFailed,
    ExitRequested,
    Command {
        command: &'static str,
        changed: bool,
    },
}

impl LogEvent {
    pub fn command(command: GameCommand, changed: bool) -> Self {
        LogEvent::Command {
            command: command.as_str(),
            changed,
        }
    }
}

impl From<EngineEvent> for LogEvent {
    fn from(event: EngineEvent) -> Self {
        match event {
            EngineEvent::ScreenChanged { from, to } => LogEvent::ScreenChanged {
                from: from.as_str(),
                to: to.as_str(),
            },
            EngineEvent::PieceSpawned { kind, spawned } => LogEvent::PieceSpawned {
                kind: kind.as_str(),
                spawned,
            },
            EngineEvent::LinesCleared { lines, points } => LogEvent::LinesCleared { lines, points },
            EngineEvent::DifficultyRaised { difficulty } => {
                LogEvent::DifficultyRaised { difficulty }
            }
            EngineEvent::GameOver {
                score,
                new_high_score,
            } => LogEvent::GameOver {
                score,
                new_high_score,
            },
            EngineEvent::HighScoresChanged => LogEvent::HighScoresChanged,
            EngineEvent::ExitRequested => LogEvent::ExitRequested,
        }
    }
}

/// One line of the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Frame counter of the driver loop
    pub frame: u64,
    #[serde(flatten)]
    pub event: LogEvent,
}

pub struct EventLog<W: Write = BufWriter<File>> {
    writer: Option<W>,
    buf: Vec<u8>,
}

impl EventLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self {
            writer: None,
            buf: Vec::new(),
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: Some(writer),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    pub fn get_ref(&self) -> Option<&W> {
        self.writer.as_ref()
    }

    pub fn record(&mut self, frame: u64, event: impl Into<LogEvent>) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        let record = LogRecord {
            frame,
            event: event.into(),
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, &record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if writer.write_all(&self.buf).is_err() {
            self.writer = None;
        }
    }

    pub fn flush(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            if writer.flush().is_err() {
                self.writer = None;
            }
        }
    }
}
