//! High-score file: one integer per line, best first, at most ten lines.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::HighScores;
use crate::event_log::{EventLog, LogEvent};

/// Parse whitespace-separated scores, skipping anything that is not a `u32`.
pub fn parse_high_scores(text: &str) -> HighScores {
    HighScores::from_scores(text.split_whitespace().filter_map(|t| t.parse().ok()))
}

/// Load the table; a missing file is an empty table.
pub fn load_high_scores(path: &Path) -> Result<HighScores> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(parse_high_scores(&text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HighScores::new()),
        Err(e) => {
            Err(e).with_context(|| format!("read high scores from {}", path.display()))
        }
    }
}

pub fn format_high_scores(scores: &HighScores) -> String {
    let mut out = String::with_capacity(scores.len() * 8);
    for score in scores.entries() {
        out.push_str(&score.to_string());
        out.push('\n');
    }
    out
}

/// Overwrite the file with the current table.
pub fn save_high_scores(path: &Path, scores: &HighScores) -> Result<()> {
    let mut file = fs::File::create(path)
        .with_context(|| format!("create high score file {}", path.display()))?;
    file.write_all(format_high_scores(scores).as_bytes())
        .with_context(|| format!("write high scores to {}", path.display()))?;
    Ok(())
}

/// Save while a game is on. A failure is logged and play continues; the
/// save on exit reports any error that persists.
pub fn save_during_play<W: Write>(
    path: &Path,
    scores: &HighScores,
    log: &mut EventLog<W>,
    frame: u64,
) -> bool {
    match save_high_scores(path, scores) {
        Ok(()) => true,
        Err(_) => {
            log.record(frame, LogEvent::HighScoresSaveFailed);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_garbage() {
        let scores = parse_high_scores("30\nabc\n-4\n10\n\n20 \n");
        assert_eq!(scores.entries(), &[30, 20, 10]);
    }

    #[test]
    fn test_parse_keeps_best_ten() {
        let text: String = (1..=12).map(|n| format!("{n}\n")).collect();
        let scores = parse_high_scores(&text);
        assert_eq!(scores.len(), 10);
        assert_eq!(scores.entries()[0], 12);
        assert_eq!(scores.entries()[9], 3);
    }

    #[test]
    fn test_format_one_per_line() {
        let scores = HighScores::from_scores([5, 100, 20]);
        assert_eq!(format_high_scores(&scores), "100\n20\n5\n");
    }

    #[test]
    fn test_failed_save_during_play_is_logged() {
        let path = std::env::temp_dir()
            .join(format!("classic-tetris-missing-dir-{}", std::process::id()))
            .join("scores.txt");
        let scores = HighScores::from_scores([40]);
        let mut log = EventLog::from_writer(Vec::new());

        assert!(!save_during_play(&path, &scores, &mut log, 12));
        assert!(log.is_enabled());

        let text = std::str::from_utf8(log.get_ref().unwrap()).unwrap();
        let record: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(
            record,
            serde_json::json!({"frame": 12, "event": "high_scores_save_failed"})
        );
    }

    #[test]
    fn test_save_during_play_writes_file() {
        let path = std::env::temp_dir().join(format!(
            "classic-tetris-play-save-{}.txt",
            std::process::id()
        ));
        let scores = HighScores::from_scores([15, 30]);
        let mut log = EventLog::from_writer(Vec::new());

        assert!(save_during_play(&path, &scores, &mut log, 1));
        assert!(log.get_ref().unwrap().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "30\n15\n");
        let _ = fs::remove_file(&path);
    }
}
