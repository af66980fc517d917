// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Rendering the presentation
// - Feeding input to the slide controller

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod views;

use crate::config::Config;
use crate::controller::{SlideChange, SlideChangeListener};
use crate::input::KeyOutcome;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Keeps the terminal window title on the current slide
struct TerminalTitle {
    deck_title: String,
}

impl TerminalTitle {
    fn set(&self, slide: usize) {
        let title = format!("Slide {}: {}", slide, self.deck_title);
        if let Err(e) = execute!(io::stdout(), SetTitle(title)) {
            tracing::debug!("Failed to set terminal title: {}", e);
        }
    }
}

impl SlideChangeListener for TerminalTitle {
    fn on_slide_change(&mut self, change: &SlideChange) {
        self.set(change.to);
    }
}

/// Run the presentation
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// whether the loop ended normally or with an error.
pub async fn run_tui(mut app: App, config: &Config) -> Result<()> {
    let mouse = config.input.mouse;

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    if mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let title = TerminalTitle {
        deck_title: app.deck.title().to_string(),
    };
    title.set(app.controller.current_slide());
    app.controller.add_listener(title);

    let result = run_event_loop(&mut terminal, &mut app, config.tick_interval()).await;

    app.controller.shutdown();

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)
            .context("Failed to disable mouse capture")?;
    }
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on terminal input and the tick timer with `tokio::select!`. Every
/// tick advances the controller's timeline (activation, entrance steps).
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(tick);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(5)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Slide navigation
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if handle_modal_input(app, &key_event) {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    let key = key_event.code;
    match key_event.kind {
        KeyEventKind::Press => {
            if !app.handle_key_press(key) {
                return;
            }
            match crate::input::handle_key(key, &mut app.controller) {
                KeyOutcome::ExitFullscreen => app.exit_fullscreen(),
                KeyOutcome::Navigated | KeyOutcome::Ignored => {}
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key);
        }
        _ => {}
    }
}

/// Handle mouse input
///
/// Buttons act on press. A press elsewhere starts a swipe that is
/// classified on release. The wheel scrolls an overflowing slide.
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.modal.is_some() {
        return;
    }

    let (column, row) = (mouse_event.column, mouse_event.row);
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let buttons = app.buttons;
            if buttons.hit(column, row).is_some() {
                app.swipe.cancel();
                let controls = app.controller.chrome().controls.clone();
                buttons.click(column, row, &controls, &mut app.controller);
            } else {
                app.swipe.begin(column, row);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.swipe.end(column, row, &mut app.controller);
        }
        MouseEventKind::ScrollUp => app.slide_scroll.scroll_up(),
        MouseEventKind::ScrollDown => app.slide_scroll.scroll_down(),
        _ => {}
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Always process Release events to keep InputHandler in sync, or keys
    // stay "pressed" after the modal closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::Jump(n) => {
            app.modal = None;
            if !app.controller.jump_to_slide(n) && n != app.controller.current_slide() {
                app.show_toast(format!("✗ No slide {}", n));
            }
        }
    }

    true
}

/// Handle global keys - returns true if handled
/// Uses InputHandler for debounce (StateChange behavior = trigger once per press)
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::help());
            }
            true
        }
        KeyCode::Char('g') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::jump());
            }
            true
        }
        KeyCode::Char('f') => {
            if app.handle_key_press(key) {
                app.toggle_fullscreen();
            }
            true
        }
        KeyCode::Char('L') => {
            if app.handle_key_press(key) {
                app.toggle_logs();
            }
            true
        }
        KeyCode::Char('y') => {
            if app.handle_key_press(key) {
                copy_current_slide(app);
            }
            true
        }
        KeyCode::Char('[') => {
            if app.handle_key_press(key) {
                app.slide_scroll.scroll_up();
            }
            true
        }
        KeyCode::Char(']') => {
            if app.handle_key_press(key) {
                app.slide_scroll.scroll_down();
            }
            true
        }
        _ => false,
    }
}

fn copy_current_slide(app: &mut App) {
    let Some(source) = app.current_source().map(str::to_string) else {
        return;
    };
    let n = app.controller.current_slide();
    match clipboard::copy_to_clipboard(&source) {
        Ok(()) => app.show_toast(format!("✓ Copied slide {}", n)),
        Err(e) => {
            tracing::warn!("Clipboard copy failed: {}", e);
            app.show_toast("✗ Failed to copy");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{ControllerOptions, Navigator, SlideController};
    use crate::deck::Deck;
    use crate::input::ButtonBar;
    use crate::logging::LogBuffer;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn app() -> App {
        let deck = Deck::from_markdown("# One\n---\n# Two\n---\n# Three", "---").unwrap();
        let controller = SlideController::new(&deck, ControllerOptions::default()).unwrap();
        App::new(deck, controller, &Config::default(), LogBuffer::new())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn arrows_navigate_and_end_jumps_to_last() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Right));
        assert_eq!(app.controller.current(), 2);

        handle_key_event(&mut app, press(KeyCode::End));
        assert_eq!(app.controller.current(), 3);

        handle_key_event(&mut app, press(KeyCode::Home));
        assert_eq!(app.controller.current(), 1);
    }

    #[test]
    fn jump_modal_goes_to_typed_slide() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.modal, Some(Modal::Jump(String::new())));

        handle_key_event(&mut app, press(KeyCode::Char('3')));
        // Arrow keys are absorbed by the modal
        handle_key_event(&mut app, press(KeyCode::Left));
        handle_key_event(&mut app, press(KeyCode::Enter));

        assert!(app.modal.is_none());
        assert_eq!(app.controller.current(), 3);
    }

    #[test]
    fn out_of_range_jump_shows_toast() {
        let mut app = app();
        app.modal = Some(Modal::Jump("9".to_string()));
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.controller.current(), 1);
        assert!(app.toast.is_some());
    }

    #[test]
    fn escape_leaves_fullscreen() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('f')));
        assert!(app.fullscreen);
        handle_key_event(&mut app, release(KeyCode::Char('f')));

        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(!app.fullscreen);
    }

    #[test]
    fn swipe_left_advances_one_slide() {
        let mut app = app();
        handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 70, 10));
        handle_mouse_event(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 10, 15));
        assert_eq!(app.controller.current(), 2);
    }

    #[test]
    fn button_press_does_not_start_a_swipe() {
        let mut app = app();
        app.buttons = ButtonBar {
            prev: Some(Rect::new(1, 20, 10, 1)),
            next: Some(Rect::new(69, 20, 10, 1)),
        };

        handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 70, 20));
        assert_eq!(app.controller.current(), 2);

        // Dragging away from the button and releasing is not a swipe
        handle_mouse_event(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 5, 20));
        assert_eq!(app.controller.current(), 2);
    }

    #[test]
    fn wheel_never_changes_slide() {
        let mut app = app();
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown, 10, 10));
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollUp, 10, 10));
        assert_eq!(app.controller.current(), 1);
    }
}
