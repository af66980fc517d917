//! Slide controller
//!
//! Owns the navigation state of a deck and is the only place it changes.
//! Every input source (keyboard, swipe, buttons, jump prompt, `--start`)
//! funnels through [`SlideController::go_to`], which validates the target,
//! moves the slide markers on the [`Stage`], and notifies observers:
//!
//! ```text
//! go_to(n)
//!   ├─ Stage: clear active/prev, mark old slide prev
//!   ├─ Timeline: restart, schedule Activate(n) after activation_delay
//!   ├─ EntranceAnimator: hide items/rows of n, schedule staggered reveal
//!   ├─ Chrome: progress, counter, prev/next controls
//!   └─ listeners: SlideChange { from, to, total }
//! ```
//!
//! Delayed effects are applied by [`SlideController::tick`].

mod animation;
mod chrome;
mod listener;
mod stage;
mod state;
mod timeline;

pub use animation::{AnimationTiming, ElementRef, EntranceAnimator, RevealPhase};
pub use chrome::{Chrome, NavControls, DEFAULT_COUNTER_FORMAT, FINISH_LABEL, PREV_LABEL};
#[cfg(test)]
pub use chrome::NEXT_LABEL;
pub use listener::{LogListener, SlideChange, SlideChangeListener};
use chrome::NavigationObserver;
use stage::Stage;
use state::NavigationState;
pub use timeline::{Timeline, TimelineAction};

use crate::deck::Deck;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

/// Default gap between marking the old slide and activating the new one
pub const DEFAULT_ACTIVATION_DELAY: Duration = Duration::from_millis(50);

/// Errors raised while setting up a controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// A required element is absent (e.g. the deck has no slides)
    MissingElement(&'static str),
    /// An option value cannot work
    InvalidOption(String),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(what) => write!(f, "Missing required element: {}", what),
            Self::InvalidOption(msg) => write!(f, "Invalid controller option: {}", msg),
        }
    }
}

impl std::error::Error for ControllerError {}

/// Controller configuration
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Line that separates slides in the deck source
    pub slide_separator: String,
    /// Class marking the visible slide
    pub active_class: String,
    /// Class marking the slide navigated away from
    pub previous_class: String,
    /// Counter template; `None` disables the counter
    pub counter_format: Option<String>,
    /// Whether the progress indicator is shown
    pub progress: bool,
    pub activation_delay: Duration,
    pub timing: AnimationTiming,
    /// Skip entrance animations and the activation delay
    pub reduced_motion: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            slide_separator: "---".to_string(),
            active_class: "active".to_string(),
            previous_class: "prev".to_string(),
            counter_format: Some(DEFAULT_COUNTER_FORMAT.to_string()),
            progress: true,
            activation_delay: DEFAULT_ACTIVATION_DELAY,
            timing: AnimationTiming::default(),
            reduced_motion: false,
        }
    }
}

impl ControllerOptions {
    fn validate(&self) -> Result<(), ControllerError> {
        if self.active_class.trim().is_empty() || self.previous_class.trim().is_empty() {
            return Err(ControllerError::InvalidOption(
                "slide classes must not be empty".to_string(),
            ));
        }
        if self.active_class == self.previous_class {
            return Err(ControllerError::InvalidOption(format!(
                "active and previous class are both '{}'",
                self.active_class
            )));
        }
        Ok(())
    }
}

/// Snapshot returned by [`SlideController::current_slide_info`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideInfo {
    pub current: usize,
    pub total: usize,
    pub title: String,
}

/// Navigation commands shared by every input source
///
/// Only `go_to` needs implementing; the relative moves are expressed in
/// terms of it so they inherit its bounds checks.
pub trait Navigator {
    fn current(&self) -> usize;
    fn total(&self) -> usize;
    /// Move to slide `n`; false when nothing changed
    fn go_to(&mut self, n: usize) -> bool;

    fn next(&mut self) -> bool {
        let target = self.current() + 1;
        target <= self.total() && self.go_to(target)
    }

    fn previous(&mut self) -> bool {
        let current = self.current();
        current > 1 && self.go_to(current - 1)
    }

    fn first(&mut self) -> bool {
        self.go_to(1)
    }

    fn last(&mut self) -> bool {
        let total = self.total();
        self.go_to(total)
    }
}

pub struct SlideController {
    state: NavigationState,
    stage: Stage,
    chrome: Chrome,
    animator: EntranceAnimator,
    timeline: Timeline,
    listeners: Vec<Box<dyn SlideChangeListener>>,
    titles: Vec<String>,
    options: ControllerOptions,
}

impl SlideController {
    pub fn new(deck: &Deck, options: ControllerOptions) -> Result<Self, ControllerError> {
        let state = NavigationState::new(deck.len())
            .ok_or(ControllerError::MissingElement("slide containers"))?;
        options.validate()?;

        let mut stage = Stage::new(state.total());
        stage.add_class(state.current(), &options.active_class);

        let mut chrome = Chrome::new(options.progress, options.counter_format.as_deref());
        chrome.on_navigate(&state);

        let animator = EntranceAnimator::new(deck, options.timing, options.reduced_motion);

        tracing::debug!(
            "Controller ready: {} slides, reduced_motion={}",
            state.total(),
            options.reduced_motion
        );

        Ok(Self {
            state,
            stage,
            chrome,
            animator,
            timeline: Timeline::new(),
            listeners: Vec::new(),
            titles: deck.slides().iter().map(|s| s.title().to_string()).collect(),
            options,
        })
    }

    /// Register a listener for successful navigations
    pub fn add_listener(&mut self, listener: impl SlideChangeListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Navigate to slide `n` (1-based)
    ///
    /// Out-of-range targets and the current slide are ignored. Re-selecting
    /// the current slide leaves its entrance animation and listeners alone.
    pub fn go_to(&mut self, n: usize) -> bool {
        let Some(from) = self.state.set(n) else {
            tracing::trace!("Ignored navigation to {} (total {})", n, self.state.total());
            return false;
        };

        self.stage.remove_all(&[
            self.options.active_class.as_str(),
            self.options.previous_class.as_str(),
        ]);
        self.stage.add_class(from, &self.options.previous_class);

        let now = Instant::now();
        let delay = if self.options.reduced_motion {
            Duration::ZERO
        } else {
            self.options.activation_delay
        };
        self.timeline.restart();
        self.timeline
            .schedule(now + delay, TimelineAction::Activate { slide: n });
        self.animator.trigger(n, now, &mut self.timeline);

        self.chrome.on_navigate(&self.state);

        let change = SlideChange {
            from,
            to: n,
            total: self.state.total(),
        };
        for listener in &mut self.listeners {
            listener.on_slide_change(&change);
        }
        true
    }

    pub fn jump_to_slide(&mut self, n: usize) -> bool {
        self.go_to(n)
    }

    pub fn current_slide(&self) -> usize {
        self.state.current()
    }

    pub fn total_slides(&self) -> usize {
        self.state.total()
    }

    pub fn current_slide_info(&self) -> SlideInfo {
        let title = self
            .titles
            .get(self.state.current() - 1)
            .cloned()
            .unwrap_or_else(|| crate::deck::UNTITLED.to_string());
        SlideInfo {
            current: self.state.current(),
            total: self.state.total(),
            title,
        }
    }

    /// Apply delayed effects that are due; true when anything changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let actions = self.timeline.drain_due(now);
        let changed = !actions.is_empty();
        for action in actions {
            match action {
                TimelineAction::Activate { slide } => {
                    self.stage.add_class(slide, &self.options.active_class);
                }
                TimelineAction::Reveal {
                    slide,
                    element,
                    phase,
                } => self.animator.apply(slide, element, phase),
            }
        }
        changed
    }

    /// Whether delayed effects are still pending
    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.timeline.pending() > 0
    }

    /// Cancel all pending work
    pub fn shutdown(&mut self) {
        self.timeline.shutdown();
    }

    #[cfg(test)]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    pub fn animator(&self) -> &EntranceAnimator {
        &self.animator
    }

    /// Slide to draw: the active one, or the outgoing one during the
    /// activation gap. The flag is true for the outgoing case.
    pub fn visible_slide(&self) -> (usize, bool) {
        match self.stage.find(&self.options.active_class) {
            Some(n) => (n, false),
            None => match self.stage.find(&self.options.previous_class) {
                Some(n) => (n, true),
                None => (self.state.current(), false),
            },
        }
    }
}

impl Navigator for SlideController {
    fn current(&self) -> usize {
        self.state.current()
    }

    fn total(&self) -> usize {
        self.state.total()
    }

    fn go_to(&mut self, n: usize) -> bool {
        SlideController::go_to(self, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn deck(n: usize) -> Deck {
        let source = (1..=n)
            .map(|i| format!("# Slide {}\n\n- one\n- two", i))
            .collect::<Vec<_>>()
            .join("\n---\n");
        Deck::from_markdown(&source, "---").unwrap()
    }

    fn controller(n: usize) -> SlideController {
        SlideController::new(&deck(n), ControllerOptions::default()).unwrap()
    }

    fn later() -> Instant {
        Instant::now() + Duration::from_secs(10)
    }

    #[test]
    fn starts_on_first_slide() {
        let c = controller(5);
        assert_eq!(c.current_slide(), 1);
        assert_eq!(c.total_slides(), 5);
        assert!(c.stage().has_class(1, "active"));
        assert!(c.chrome().controls.prev_disabled);
        assert!(!c.chrome().controls.next_disabled);
        assert_eq!(c.chrome().counter.as_ref().unwrap().text(), "1 / 5");
    }

    #[test]
    fn empty_deck_is_rejected() {
        let err = SlideController::new(&Deck::empty(), ControllerOptions::default())
            .err()
            .unwrap();
        assert_eq!(err, ControllerError::MissingElement("slide containers"));
        assert_eq!(err.to_string(), "Missing required element: slide containers");
    }

    #[test]
    fn identical_classes_are_rejected() {
        let options = ControllerOptions {
            previous_class: "active".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            SlideController::new(&deck(3), options),
            Err(ControllerError::InvalidOption(_))
        ));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut c = controller(5);
        assert!(!c.go_to(0));
        assert!(!c.go_to(6));
        assert_eq!(c.current_slide(), 1);
        assert!(c.stage().has_class(1, "active"));
    }

    #[test]
    fn reselecting_current_slide_changes_nothing() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut c = controller(3);
        assert!(c.go_to(2));
        c.tick(later());
        assert!(c.animator().is_settled(2));
        c.add_listener(move |change: &SlideChange| sink.borrow_mut().push(*change));

        assert!(!c.go_to(2));
        assert!(!c.is_animating());
        assert!(c.animator().is_settled(2));
        assert!(c.stage().has_class(2, "active"));
        assert!(c.stage().has_class(1, "prev"));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn go_to_updates_controls() {
        let mut c = controller(5);
        for n in [3, 5, 1] {
            assert!(c.go_to(n));
            assert_eq!(c.current_slide(), n);
            assert_eq!(c.chrome().controls.prev_disabled, n == 1);
            assert_eq!(c.chrome().controls.next_disabled, n == 5);
        }
        c.go_to(5);
        assert_eq!(c.chrome().controls.next_label, FINISH_LABEL);
        c.go_to(4);
        assert_eq!(c.chrome().controls.next_label, NEXT_LABEL);
    }

    #[test]
    fn next_walks_to_the_end() {
        let mut c = controller(6);
        for _ in 0..5 {
            assert!(c.next());
        }
        assert_eq!(c.current_slide(), 6);
        assert!(!c.next());
        assert_eq!(c.current_slide(), 6);
    }

    #[test]
    fn previous_stops_at_one() {
        let mut c = controller(4);
        assert!(!c.previous());
        assert_eq!(c.current_slide(), 1);
        c.last();
        assert!(c.previous());
        assert_eq!(c.current_slide(), 3);
        c.first();
        assert_eq!(c.current_slide(), 1);
    }

    #[test]
    fn progress_is_exact_fraction() {
        let mut c = controller(20);
        c.go_to(5);
        let progress = c.chrome().progress.as_ref().unwrap();
        assert_eq!(progress.fraction(), 0.25);
    }

    #[test]
    fn activation_is_delayed() {
        let mut c = controller(3);
        c.go_to(2);
        assert!(c.stage().has_class(1, "prev"));
        assert!(!c.stage().has_class(2, "active"));
        assert_eq!(c.visible_slide(), (1, true));

        assert!(c.tick(later()));
        assert!(c.stage().has_class(2, "active"));
        assert_eq!(c.visible_slide(), (2, false));
    }

    #[test]
    fn overlapping_navigation_cancels_stale_activation() {
        let mut c = controller(5);
        c.go_to(2);
        c.go_to(4);
        c.tick(later());
        assert_eq!(c.stage().find("active"), Some(4));
        assert!(!c.stage().has_class(2, "active"));
        assert!(c.stage().has_class(2, "prev"));
        assert!(!c.is_animating());
    }

    #[test]
    fn listeners_receive_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut c = controller(3);
        c.add_listener(move |change: &SlideChange| sink.borrow_mut().push(*change));

        c.next();
        c.go_to(9);
        c.last();
        assert_eq!(
            *seen.borrow(),
            vec![
                SlideChange { from: 1, to: 2, total: 3 },
                SlideChange { from: 2, to: 3, total: 3 },
            ]
        );
    }

    #[test]
    fn slide_info_reports_title() {
        let mut c = controller(3);
        c.jump_to_slide(2);
        assert_eq!(
            c.current_slide_info(),
            SlideInfo {
                current: 2,
                total: 3,
                title: "Slide 2".to_string()
            }
        );
    }

    #[test]
    fn reduced_motion_activates_on_next_tick() {
        let options = ControllerOptions {
            reduced_motion: true,
            ..Default::default()
        };
        let mut c = SlideController::new(&deck(3), options).unwrap();
        c.go_to(3);
        assert!(c.animator().is_settled(3));
        c.tick(Instant::now());
        assert!(c.stage().has_class(3, "active"));
    }

    #[test]
    fn shutdown_cancels_pending_work() {
        let mut c = controller(3);
        c.go_to(2);
        c.shutdown();
        assert!(!c.tick(later()));
        assert!(!c.stage().has_class(2, "active"));
    }
}
