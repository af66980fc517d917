// Modal system for TUI overlays
//
// Modals handle their own input and return actions. App holds
// Option<Modal>; the event loop acts on the returned ModalAction.

use crossterm::event::KeyCode;

/// Longest slide number the jump prompt accepts
const MAX_JUMP_DIGITS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    Close,
    /// Go to the entered slide and close
    Jump(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// Go-to-slide prompt holding the digits typed so far
    Jump(String),
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn jump() -> Self {
        Modal::Jump(String::new())
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Jump(input) => match key {
                KeyCode::Esc => ModalAction::Close,
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if input.len() < MAX_JUMP_DIGITS {
                        input.push(c);
                    }
                    ModalAction::None
                }
                KeyCode::Backspace => {
                    input.pop();
                    ModalAction::None
                }
                KeyCode::Enter => match input.parse() {
                    Ok(n) => ModalAction::Jump(n),
                    Err(_) => ModalAction::Close,
                },
                _ => ModalAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_prompt_collects_digits() {
        let mut modal = Modal::jump();
        modal.handle_input(KeyCode::Char('1'));
        modal.handle_input(KeyCode::Char('x'));
        modal.handle_input(KeyCode::Char('2'));
        modal.handle_input(KeyCode::Char('9'));
        modal.handle_input(KeyCode::Backspace);
        assert_eq!(modal, Modal::Jump("12".to_string()));
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::Jump(12));
    }

    #[test]
    fn empty_jump_closes() {
        let mut modal = Modal::jump();
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::Close);
    }

    #[test]
    fn help_closes_on_question_mark() {
        let mut modal = Modal::help();
        assert_eq!(modal.handle_input(KeyCode::Right), ModalAction::None);
        assert_eq!(modal.handle_input(KeyCode::Char('?')), ModalAction::Close);
    }
}
