//! Interaction configuration: entrance animation and pointer input

use serde::Deserialize;
use std::time::Duration;

use crate::controller::AnimationTiming;
use crate::input::DEFAULT_SWIPE_THRESHOLD;

// ─────────────────────────────────────────────────────────────────────────────
// Animation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Show elements immediately and skip the activation delay
    pub reduced_motion: bool,
    pub activation_delay_ms: u64,
    pub item_stagger_ms: u64,
    pub item_transition_ms: u64,
    pub row_stagger_ms: u64,
    pub row_transition_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            activation_delay_ms: 50,
            item_stagger_ms: 100,
            item_transition_ms: 600,
            row_stagger_ms: 80,
            row_transition_ms: 400,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileAnimation {
    pub reduced_motion: Option<bool>,
    pub activation_delay_ms: Option<u64>,
    pub item_stagger_ms: Option<u64>,
    pub item_transition_ms: Option<u64>,
    pub row_stagger_ms: Option<u64>,
    pub row_transition_ms: Option<u64>,
}

impl AnimationConfig {
    pub fn from_file(file: Option<FileAnimation>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            reduced_motion: file.reduced_motion.unwrap_or(defaults.reduced_motion),
            activation_delay_ms: file
                .activation_delay_ms
                .unwrap_or(defaults.activation_delay_ms),
            item_stagger_ms: file.item_stagger_ms.unwrap_or(defaults.item_stagger_ms),
            item_transition_ms: file
                .item_transition_ms
                .unwrap_or(defaults.item_transition_ms),
            row_stagger_ms: file.row_stagger_ms.unwrap_or(defaults.row_stagger_ms),
            row_transition_ms: file
                .row_transition_ms
                .unwrap_or(defaults.row_transition_ms),
        }
    }

    pub fn timing(&self) -> AnimationTiming {
        AnimationTiming {
            item_stagger: Duration::from_millis(self.item_stagger_ms),
            item_transition: Duration::from_millis(self.item_transition_ms),
            row_stagger: Duration::from_millis(self.row_stagger_ms),
            row_transition: Duration::from_millis(self.row_transition_ms),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Input
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Capture the mouse (buttons, drag swipes, wheel scrolling)
    pub mouse: bool,
    /// Horizontal travel, in cells, for a drag to count as a swipe
    pub swipe_threshold: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileInput {
    pub mouse: Option<bool>,
    pub swipe_threshold: Option<u16>,
}

impl InputConfig {
    pub fn from_file(file: Option<FileInput>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            mouse: file.mouse.unwrap_or(defaults.mouse),
            swipe_threshold: file.swipe_threshold.unwrap_or(defaults.swipe_threshold),
        }
    }
}
