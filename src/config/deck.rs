//! Deck configuration: slide separator, title, chrome toggles

use serde::Deserialize;

use crate::controller::DEFAULT_COUNTER_FORMAT;

#[derive(Debug, Clone)]
pub struct DeckConfig {
    /// Line that splits the markdown source into slides
    pub separator: String,
    /// Deck title override (default: first heading, then file name)
    pub title: Option<String>,
    /// Counter template with `{current}` and `{total}` placeholders
    pub counter_format: String,
    pub show_counter: bool,
    pub show_progress: bool,
    /// Class names toggled on slides by the controller
    pub active_class: String,
    pub previous_class: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            separator: "---".to_string(),
            title: None,
            counter_format: DEFAULT_COUNTER_FORMAT.to_string(),
            show_counter: true,
            show_progress: true,
            active_class: "active".to_string(),
            previous_class: "prev".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileDeck {
    pub separator: Option<String>,
    pub title: Option<String>,
    pub counter_format: Option<String>,
    pub show_counter: Option<bool>,
    pub show_progress: Option<bool>,
    pub active_class: Option<String>,
    pub previous_class: Option<String>,
}

impl DeckConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileDeck>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            separator: file
                .separator
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.separator),
            title: file.title.filter(|t| !t.is_empty()),
            counter_format: file.counter_format.unwrap_or(defaults.counter_format),
            show_counter: file.show_counter.unwrap_or(defaults.show_counter),
            show_progress: file.show_progress.unwrap_or(defaults.show_progress),
            active_class: file.active_class.unwrap_or(defaults.active_class),
            previous_class: file.previous_class.unwrap_or(defaults.previous_class),
        }
    }
}
