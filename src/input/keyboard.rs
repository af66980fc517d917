// Keyboard adapter - arrow/page/vim keys to navigation commands

use crate::controller::Navigator;
use crossterm::event::KeyCode;

/// Navigation meaning of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Previous,
    Next,
    First,
    Last,
    /// Leave fullscreen mode; never navigates
    ExitFullscreen,
}

/// What handling a key did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A navigation command was issued (it may still have been a no-op)
    Navigated,
    ExitFullscreen,
    /// Not a navigation key
    Ignored,
}

pub fn map_key(code: KeyCode) -> Option<KeyAction> {
    match code {
        KeyCode::Left
        | KeyCode::Up
        | KeyCode::PageUp
        | KeyCode::Char('h')
        | KeyCode::Char('k') => Some(KeyAction::Previous),
        KeyCode::Right
        | KeyCode::Down
        | KeyCode::PageDown
        | KeyCode::Char(' ')
        | KeyCode::Char('l')
        | KeyCode::Char('j') => Some(KeyAction::Next),
        KeyCode::Home => Some(KeyAction::First),
        KeyCode::End => Some(KeyAction::Last),
        KeyCode::Esc => Some(KeyAction::ExitFullscreen),
        _ => None,
    }
}

/// Apply a key to the navigator
pub fn handle_key(code: KeyCode, nav: &mut impl Navigator) -> KeyOutcome {
    match map_key(code) {
        Some(KeyAction::Previous) => {
            nav.previous();
            KeyOutcome::Navigated
        }
        Some(KeyAction::Next) => {
            nav.next();
            KeyOutcome::Navigated
        }
        Some(KeyAction::First) => {
            nav.first();
            KeyOutcome::Navigated
        }
        Some(KeyAction::Last) => {
            nav.last();
            KeyOutcome::Navigated
        }
        Some(KeyAction::ExitFullscreen) => KeyOutcome::ExitFullscreen,
        None => KeyOutcome::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::testing::RecordingNavigator;

    #[test]
    fn arrows_and_vim_keys_navigate() {
        let mut nav = RecordingNavigator::new(3, 5);
        for code in [KeyCode::Left, KeyCode::Up, KeyCode::Char('k')] {
            assert_eq!(handle_key(code, &mut nav), KeyOutcome::Navigated);
        }
        for code in [KeyCode::Right, KeyCode::Down, KeyCode::Char(' ')] {
            handle_key(code, &mut nav);
        }
        assert_eq!(nav.count("previous"), 3);
        assert_eq!(nav.count("next"), 3);
    }

    #[test]
    fn home_and_end_jump() {
        let mut nav = RecordingNavigator::new(3, 5);
        handle_key(KeyCode::Home, &mut nav);
        handle_key(KeyCode::End, &mut nav);
        assert_eq!(nav.calls, vec!["first", "last"]);
    }

    #[test]
    fn escape_does_not_navigate() {
        let mut nav = RecordingNavigator::new(3, 5);
        assert_eq!(handle_key(KeyCode::Esc, &mut nav), KeyOutcome::ExitFullscreen);
        assert_eq!(handle_key(KeyCode::Char('x'), &mut nav), KeyOutcome::Ignored);
        assert!(nav.calls.is_empty());
    }
}
