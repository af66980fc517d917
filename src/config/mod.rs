//! Configuration for the presenter
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/slidedeck/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Command line flags are applied on top by `main` after loading.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::controller::ControllerOptions;
use crate::deck::{Deck, DeckError};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod deck;
mod interaction;
mod observability;
mod serialization;


pub use deck::{DeckConfig, FileDeck};
pub use interaction::{AnimationConfig, FileAnimation, FileInput, InputConfig};
pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_THEME: &str = "auto";
const DEFAULT_TICK_MS: u64 = 16;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: auto, dracula, nord, gruvbox, light, high-contrast
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// UI tick interval; delayed slide effects land on ticks
    pub tick_ms: u64,

    /// Deck parsing and chrome
    pub deck: DeckConfig,

    /// Entrance animation timing and reduced motion
    pub animation: AnimationConfig,

    /// Mouse and swipe handling
    pub input: InputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            use_theme_background: false,
            tick_ms: DEFAULT_TICK_MS,
            deck: DeckConfig::default(),
            animation: AnimationConfig::default(),
            input: InputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub tick_ms: Option<u64>,

    /// Optional [deck] section
    pub deck: Option<FileDeck>,

    /// Optional [animation] section
    pub animation: Option<FileAnimation>,

    /// Optional [input] section
    pub input: Option<FileInput>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// Truthy env values: "1" or "true"
fn env_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/slidedeck/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("slidedeck").join("config.toml"))
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed is fatal: the process
    /// prints what went wrong and exits rather than running on defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `slidedeck config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default
        let theme = env("SLIDEDECK_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        let use_theme_background = file.use_theme_background.unwrap_or(false);

        // Zero would spin the event loop
        let tick_ms = file.tick_ms.unwrap_or(DEFAULT_TICK_MS).max(1);

        let deck = DeckConfig::from_file(file.deck);

        // Reduced motion: env can only switch it on
        let mut animation = AnimationConfig::from_file(file.animation);
        if env("SLIDEDECK_REDUCED_MOTION").is_some_and(|v| env_flag(&v)) {
            animation.reduced_motion = true;
        }

        let input = InputConfig::from_file(file.input);

        // Log directory: env > file > default
        let mut logging = LoggingConfig::from_file(file.logging);
        if let Some(dir) = env("SLIDEDECK_LOG_DIR") {
            logging.file_dir = PathBuf::from(dir);
        }

        Self {
            theme,
            use_theme_background,
            tick_ms,
            deck,
            animation,
            input,
            logging,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Controller options derived from the [deck] and [animation] sections
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            slide_separator: self.deck.separator.clone(),
            active_class: self.deck.active_class.clone(),
            previous_class: self.deck.previous_class.clone(),
            counter_format: self
                .deck
                .show_counter
                .then(|| self.deck.counter_format.clone()),
            progress: self.deck.show_progress,
            activation_delay: Duration::from_millis(self.animation.activation_delay_ms),
            timing: self.animation.timing(),
            reduced_motion: self.animation.reduced_motion,
        }
    }

    /// Load a deck split on the configured slide separator
    pub fn load_deck(&self, path: &Path) -> Result<Deck, DeckError> {
        let options = self.controller_options();
        Deck::load(path, &options.slide_separator, self.deck.title.as_deref())
    }
}
