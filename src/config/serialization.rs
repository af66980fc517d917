//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// TOML basic string
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# slidedeck configuration

# Theme: auto, dracula, nord, gruvbox, light, high-contrast
theme = {theme}

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# UI tick interval in milliseconds (delayed slide effects land on ticks)
tick_ms = {tick_ms}

# ─────────────────────────────────────────────────────────────────────────────
# DECK
# ─────────────────────────────────────────────────────────────────────────────
# Slides are split on lines equal to the separator (outside code fences).

[deck]
separator = {separator}
{title}counter_format = {counter_format}
show_counter = {show_counter}
show_progress = {show_progress}
active_class = {active_class}
previous_class = {previous_class}

# ─────────────────────────────────────────────────────────────────────────────
# ANIMATION
# ─────────────────────────────────────────────────────────────────────────────
# List items and table rows enter one after another when a slide opens.
# reduced_motion shows them immediately (also SLIDEDECK_REDUCED_MOTION=1).

[animation]
reduced_motion = {reduced_motion}
activation_delay_ms = {activation_delay_ms}
item_stagger_ms = {item_stagger_ms}
item_transition_ms = {item_transition_ms}
row_stagger_ms = {row_stagger_ms}
row_transition_ms = {row_transition_ms}

# ─────────────────────────────────────────────────────────────────────────────
# INPUT
# ─────────────────────────────────────────────────────────────────────────────
# Dragging horizontally further than swipe_threshold cells changes slides.

[input]
mouse = {mouse}
swipe_threshold = {swipe_threshold}

# ─────────────────────────────────────────────────────────────────────────────
# LOGGING
# ─────────────────────────────────────────────────────────────────────────────
# RUST_LOG overrides level. File logs are JSON, one object per line.

[logging]
level = {log_level}
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"
file_prefix = {log_file_prefix}
"#,
            theme = quote(&self.theme),
            use_bg = self.use_theme_background,
            tick_ms = self.tick_ms,
            separator = quote(&self.deck.separator),
            title = self
                .deck
                .title
                .as_ref()
                .map(|t| format!("title = {}\n", quote(t)))
                .unwrap_or_else(|| "# title = \"My Talk\"\n".to_string()),
            counter_format = quote(&self.deck.counter_format),
            show_counter = self.deck.show_counter,
            show_progress = self.deck.show_progress,
            active_class = quote(&self.deck.active_class),
            previous_class = quote(&self.deck.previous_class),
            reduced_motion = self.animation.reduced_motion,
            activation_delay_ms = self.animation.activation_delay_ms,
            item_stagger_ms = self.animation.item_stagger_ms,
            item_transition_ms = self.animation.item_transition_ms,
            row_stagger_ms = self.animation.row_stagger_ms,
            row_transition_ms = self.animation.row_transition_ms,
            mouse = self.input.mouse,
            swipe_threshold = self.input.swipe_threshold,
            log_level = quote(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quote(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = quote(&self.logging.file_prefix),
        )
    }

    /// Write the default config if none exists yet
    ///
    /// Helps users discover the options. Failures are ignored since the
    /// file is optional.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Err(e) = Self::default().save() {
            tracing::debug!("Could not create config template: {}", e);
        }
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }
}
