//! Key mapping from terminal events to game commands.

use crate::types::{GameCommand, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to a game command for the current screen.
///
/// Arrow keys mean different things per screen; the remaining keys map the
/// same everywhere and the engine ignores them where they do not apply.
/// Key releases are dropped; auto-repeat arrives as repeated presses.
pub fn map_key(key: KeyEvent, screen: Screen) -> Option<GameCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Enter => Some(GameCommand::Confirm),
        KeyCode::Esc => Some(GameCommand::Back),

        KeyCode::Up => match screen {
            Screen::Menu => Some(GameCommand::MenuUp),
            Screen::Playing => Some(GameCommand::Rotate),
            _ => None,
        },
        KeyCode::Down => match screen {
            Screen::Menu => Some(GameCommand::MenuDown),
            Screen::Playing => Some(GameCommand::SoftDrop),
            _ => None,
        },
        KeyCode::Left => match screen {
            Screen::Pregame => Some(GameCommand::AdjustDifficultyDown),
            Screen::Playing => Some(GameCommand::MoveLeft),
            _ => None,
        },
        KeyCode::Right => match screen {
            Screen::Pregame => Some(GameCommand::AdjustDifficultyUp),
            Screen::Playing => Some(GameCommand::MoveRight),
            _ => None,
        },

        KeyCode::Char(' ') => Some(GameCommand::HardDrop),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(GameCommand::ToggleGrid),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(GameCommand::ToggleProjection),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameCommand::TogglePause),

        _ => None,
    }
}

/// Check if key should quit the process (Ctrl-C, from any screen).
pub fn should_quit(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_enter_and_escape_everywhere() {
        for screen in [
            Screen::Menu,
            Screen::Pregame,
            Screen::Playing,
            Screen::GameOver,
            Screen::HighScores,
        ] {
            assert_eq!(
                map_key(press(KeyCode::Enter), screen),
                Some(GameCommand::Confirm)
            );
            assert_eq!(
                map_key(press(KeyCode::Esc), screen),
                Some(GameCommand::Back)
            );
        }
    }

    #[test]
    fn test_arrows_on_menu() {
        assert_eq!(
            map_key(press(KeyCode::Up), Screen::Menu),
            Some(GameCommand::MenuUp)
        );
        assert_eq!(
            map_key(press(KeyCode::Down), Screen::Menu),
            Some(GameCommand::MenuDown)
        );
        assert_eq!(map_key(press(KeyCode::Left), Screen::Menu), None);
    }

    #[test]
    fn test_arrows_on_pregame() {
        assert_eq!(
            map_key(press(KeyCode::Left), Screen::Pregame),
            Some(GameCommand::AdjustDifficultyDown)
        );
        assert_eq!(
            map_key(press(KeyCode::Right), Screen::Pregame),
            Some(GameCommand::AdjustDifficultyUp)
        );
        assert_eq!(map_key(press(KeyCode::Up), Screen::Pregame), None);
    }

    #[test]
    fn test_arrows_in_game() {
        assert_eq!(
            map_key(press(KeyCode::Left), Screen::Playing),
            Some(GameCommand::MoveLeft)
        );
        assert_eq!(
            map_key(press(KeyCode::Right), Screen::Playing),
            Some(GameCommand::MoveRight)
        );
        assert_eq!(
            map_key(press(KeyCode::Down), Screen::Playing),
            Some(GameCommand::SoftDrop)
        );
        assert_eq!(
            map_key(press(KeyCode::Up), Screen::Playing),
            Some(GameCommand::Rotate)
        );
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(
            map_key(press(KeyCode::Char(' ')), Screen::Playing),
            Some(GameCommand::HardDrop)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('G')), Screen::Playing),
            Some(GameCommand::ToggleGrid)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('h')), Screen::Playing),
            Some(GameCommand::ToggleProjection)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('p')), Screen::Playing),
            Some(GameCommand::TogglePause)
        );
        assert_eq!(map_key(press(KeyCode::Char('x')), Screen::Playing), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release, Screen::Playing), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(press(KeyCode::Char('c'))));
        assert!(!should_quit(press(KeyCode::Esc)));
    }
}
