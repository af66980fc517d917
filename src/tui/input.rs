// Key repeat and debounce
//
// Holding an arrow key should page through slides at a steady pace instead
// of at the terminal's autorepeat rate, while one-shot keys (quit, help,
// fullscreen, copy) must fire once per press. Most terminals never send
// release events, so a press arriving after a pause longer than the
// autorepeat cadence starts a new tap.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Presses closer together than this are autorepeat of a held key
const TAP_GAP: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Fire once per press
    StateChange,
    /// Fire on press, then repeat while held
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Slide stepping: a held key advances about four slides a second
    pub fn slide_step() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(400),
            repeat_interval: Duration::from_millis(250),
        }
    }

    /// Line scrolling inside a slide
    pub fn scroll() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(300),
            repeat_interval: Duration::from_millis(30),
        }
    }
}

#[derive(Debug, Default)]
struct KeyState {
    pressed_at: Option<Instant>,
    last_fired: Option<Instant>,
    last_seen: Option<Instant>,
}

pub struct InputHandler {
    states: HashMap<KeyCode, KeyState>,
    behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            behaviors: HashMap::new(),
        }
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.behaviors.insert(*key, behavior);
        }
    }

    /// Whether a press (or autorepeat) of `key` should trigger its action
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);
        let state = self.states.entry(key).or_default();
        let held = state
            .last_seen
            .is_some_and(|seen| now.duration_since(seen) <= TAP_GAP);
        state.last_seen = Some(now);

        let (true, Some(pressed_at), Some(last_fired)) = (held, state.pressed_at, state.last_fired)
        else {
            state.pressed_at = Some(now);
            state.last_fired = Some(now);
            return true;
        };

        let fire = match behavior {
            KeyBehavior::StateChange => false,
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                now.duration_since(pressed_at) >= initial_delay
                    && now.duration_since(last_fired) >= repeat_interval
            }
        };
        if fire {
            state.last_fired = Some(now);
        }
        fire
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.states.remove(&key);
    }

    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::PageUp,
                KeyCode::PageDown,
                KeyCode::Char(' '),
                KeyCode::Char('h'),
                KeyCode::Char('j'),
                KeyCode::Char('k'),
                KeyCode::Char('l'),
            ],
            KeyBehavior::slide_step(),
        );

        handler.configure_keys(
            &[KeyCode::Char('['), KeyCode::Char(']')],
            KeyBehavior::scroll(),
        );

        // Everything else (Home, End, Esc, q, ?, g, f, L, y) is one-shot
        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}
