//! Navigation chrome: progress indicator, slide counter, prev/next controls
//!
//! Each widget is an observer of [`NavigationState`]. The controller pushes
//! the new state after every successful navigation; the renderer only reads
//! the resulting values.

use super::state::NavigationState;

/// Default counter text, `1 / 12`
pub const DEFAULT_COUNTER_FORMAT: &str = "{current} / {total}";

pub const NEXT_LABEL: &str = "Next →";
pub const FINISH_LABEL: &str = "Finish";
pub const PREV_LABEL: &str = "← Prev";

/// Receives the navigation state after each change
pub trait NavigationObserver {
    fn on_navigate(&mut self, state: &NavigationState);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressIndicator {
    fraction: f64,
}

impl ProgressIndicator {
    /// Exact `current / total`
    pub fn fraction(&self) -> f64 {
        self.fraction
    }
}

impl NavigationObserver for ProgressIndicator {
    fn on_navigate(&mut self, state: &NavigationState) {
        self.fraction = state.progress();
    }
}

/// Counter text built from a `{current}`/`{total}` template
#[derive(Debug, Clone, PartialEq)]
pub struct SlideCounter {
    format: String,
    text: String,
}

impl SlideCounter {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl NavigationObserver for SlideCounter {
    fn on_navigate(&mut self, state: &NavigationState) {
        self.text = self
            .format
            .replace("{current}", &state.current().to_string())
            .replace("{total}", &state.total().to_string());
    }
}

/// Enabled state and labels of the previous/next controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavControls {
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub next_label: &'static str,
}

impl Default for NavControls {
    fn default() -> Self {
        Self {
            prev_disabled: true,
            next_disabled: false,
            next_label: NEXT_LABEL,
        }
    }
}

impl NavigationObserver for NavControls {
    fn on_navigate(&mut self, state: &NavigationState) {
        self.prev_disabled = state.is_first();
        self.next_disabled = state.is_last();
        self.next_label = if state.is_last() {
            FINISH_LABEL
        } else {
            NEXT_LABEL
        };
    }
}

/// The full set of chrome widgets; optional ones are skipped when disabled
#[derive(Debug, Clone)]
pub struct Chrome {
    pub progress: Option<ProgressIndicator>,
    pub counter: Option<SlideCounter>,
    pub controls: NavControls,
}

impl Chrome {
    pub fn new(progress: bool, counter_format: Option<&str>) -> Self {
        Self {
            progress: progress.then(ProgressIndicator::default),
            counter: counter_format.map(SlideCounter::new),
            controls: NavControls::default(),
        }
    }
}

impl NavigationObserver for Chrome {
    fn on_navigate(&mut self, state: &NavigationState) {
        if let Some(progress) = &mut self.progress {
            progress.on_navigate(state);
        }
        if let Some(counter) = &mut self.counter {
            counter.on_navigate(state);
        }
        self.controls.on_navigate(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_uses_template() {
        let mut counter = SlideCounter::new("Slide {current} of {total}");
        counter.on_navigate(&NavigationState::new(7).unwrap());
        assert_eq!(counter.text(), "Slide 1 of 7");
    }

    #[test]
    fn single_slide_disables_both_controls() {
        let mut controls = NavControls::default();
        controls.on_navigate(&NavigationState::new(1).unwrap());
        assert!(controls.prev_disabled);
        assert!(controls.next_disabled);
        assert_eq!(controls.next_label, FINISH_LABEL);
    }

    #[test]
    fn disabled_widgets_are_absent() {
        let mut chrome = Chrome::new(false, None);
        chrome.on_navigate(&NavigationState::new(3).unwrap());
        assert!(chrome.progress.is_none());
        assert!(chrome.counter.is_none());
        assert!(chrome.controls.prev_disabled);
    }
}
