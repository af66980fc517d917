// TUI application state
//
// App owns the deck and the slide controller for the life of the
// presentation. Input handlers borrow the controller through the Navigator
// trait; views read it back to draw the current slide and chrome.

use super::components::logs_panel::LogsPanel;
use super::components::Toast;
use super::input::InputHandler;
use super::modal::Modal;
use super::scroll::ScrollState;
use crate::config::Config;
use crate::controller::SlideController;
use crate::deck::{Deck, Slide};
use crate::input::{ButtonBar, SwipeTracker};
use crate::logging::LogBuffer;
use crate::theme::Theme;
use crossterm::event::KeyCode;
use std::time::Instant;

pub struct App {
    pub deck: Deck,
    pub controller: SlideController,
    pub theme: Theme,
    /// Paint the theme background or leave the terminal's own
    pub use_theme_background: bool,
    pub log_buffer: LogBuffer,

    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub should_quit: bool,

    /// Slide only, no chrome
    pub fullscreen: bool,
    pub show_logs: bool,

    /// Overflow scroll of the visible slide
    pub slide_scroll: ScrollState,
    /// Slide the scroll position belongs to
    scrolled_slide: usize,
    pub logs_panel: LogsPanel,

    /// Button areas recorded by the last footer draw
    pub buttons: ButtonBar,
    pub swipe: SwipeTracker,

    input_handler: InputHandler,
}

impl App {
    pub fn new(deck: Deck, controller: SlideController, config: &Config, log_buffer: LogBuffer) -> Self {
        let scrolled_slide = controller.current_slide();
        Self {
            deck,
            controller,
            theme: Theme::by_name(&config.theme),
            use_theme_background: config.use_theme_background,
            log_buffer,
            modal: None,
            toast: None,
            should_quit: false,
            fullscreen: false,
            show_logs: false,
            slide_scroll: ScrollState::manual(),
            scrolled_slide,
            logs_panel: LogsPanel::new(),
            buttons: ButtonBar::default(),
            swipe: SwipeTracker::new(config.input.swipe_threshold),
            input_handler: InputHandler::default(),
        }
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Advance delayed slide effects; true when a redraw is needed
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.controller.tick(now);
        let (visible, _) = self.controller.visible_slide();
        if visible != self.scrolled_slide {
            self.scrolled_slide = visible;
            self.slide_scroll.reset();
        }
        changed
    }

    /// Slide currently drawn and whether it is the outgoing one
    pub fn visible_slide(&self) -> Option<(&Slide, bool)> {
        let (n, outgoing) = self.controller.visible_slide();
        self.deck.slide(n).map(|s| (s, outgoing))
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        // No buttons on screen until the footer is drawn again
        self.buttons = ButtonBar::default();
        tracing::debug!("Fullscreen {}", if self.fullscreen { "on" } else { "off" });
    }

    pub fn exit_fullscreen(&mut self) {
        if self.fullscreen {
            self.toggle_fullscreen();
        }
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    /// Markdown source of the current slide
    pub fn current_source(&self) -> Option<&str> {
        self.deck
            .slide(self.controller.current_slide())
            .map(|s| s.source.as_str())
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{ControllerOptions, Navigator};
    use std::time::Duration;

    fn app() -> App {
        let deck = Deck::from_markdown("# One\n---\n# Two\n---\n# Three", "---").unwrap();
        let controller = SlideController::new(&deck, ControllerOptions::default()).unwrap();
        App::new(deck, controller, &Config::default(), LogBuffer::new())
    }

    #[test]
    fn scroll_resets_when_slide_changes() {
        let mut app = app();
        app.slide_scroll.update_dimensions(40, 10);
        app.slide_scroll.page_down();
        assert_eq!(app.slide_scroll.offset(), 10);

        app.controller.next();
        app.tick(Instant::now() + Duration::from_secs(1));
        assert_eq!(app.slide_scroll.offset(), 0);
        assert_eq!(app.visible_slide().map(|(s, _)| s.number), Some(2));
    }

    #[test]
    fn source_follows_current_slide() {
        let mut app = app();
        app.controller.last();
        assert_eq!(app.current_source(), Some("# Three"));
    }
}
