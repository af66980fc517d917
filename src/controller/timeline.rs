//! Delayed, cancellable controller tasks
//!
//! Slide activation and entrance animation steps run after fixed delays.
//! Instead of fire-and-forget timers, each navigation opens a new
//! generation: the previous generation's token is cancelled, so steps left
//! over from an overlapped navigation are dropped instead of racing the new
//! one.
//!
//! ```text
//! root token ──┬── gen 1 (cancelled by go_to)
//!              ├── gen 2 (cancelled by go_to)
//!              └── gen 3 (live)  ← schedule() attaches here
//! ```
//!
//! Tasks are evaluated by [`Timeline::drain_due`], called from the UI tick.

use super::animation::{ElementRef, RevealPhase};
use std::time::Instant;
use tokio_util::sync::CancellationToken;

/// Work a scheduled task performs when it comes due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineAction {
    /// Add the active class to a slide
    Activate { slide: usize },
    /// Move an element of a slide to a new reveal phase
    Reveal {
        slide: usize,
        element: ElementRef,
        phase: RevealPhase,
    },
}

#[derive(Debug)]
struct ScheduledTask {
    due: Instant,
    /// Insertion order, breaks ties between equal deadlines
    seq: u64,
    token: CancellationToken,
    action: TimelineAction,
}

#[derive(Debug)]
pub struct Timeline {
    root: CancellationToken,
    generation: CancellationToken,
    tasks: Vec<ScheduledTask>,
    seq: u64,
}

impl Timeline {
    pub fn new() -> Self {
        let root = CancellationToken::new();
        let generation = root.child_token();
        Self {
            root,
            generation,
            tasks: Vec::new(),
            seq: 0,
        }
    }

    /// Cancel everything scheduled so far and start a new generation
    pub fn restart(&mut self) {
        self.generation.cancel();
        self.generation = self.root.child_token();
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.token.is_cancelled());
        let dropped = before - self.tasks.len();
        if dropped > 0 {
            tracing::trace!("Cancelled {} stale slide task(s)", dropped);
        }
    }

    /// Schedule an action in the current generation
    ///
    /// Ignored once the timeline has been shut down.
    pub fn schedule(&mut self, due: Instant, action: TimelineAction) {
        if self.root.is_cancelled() {
            return;
        }
        self.seq += 1;
        self.tasks.push(ScheduledTask {
            due,
            seq: self.seq,
            token: self.generation.clone(),
            action,
        });
    }

    /// Remove and return every live task due at `now`, in deadline order
    pub fn drain_due(&mut self, now: Instant) -> Vec<TimelineAction> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.tasks)
                .into_iter()
                .partition(|t| t.due <= now || t.token.is_cancelled());
        self.tasks = pending;

        due.retain(|t| !t.token.is_cancelled());
        due.sort_by_key(|t| (t.due, t.seq));
        due.into_iter().map(|t| t.action).collect()
    }

    /// Earliest pending deadline
    #[cfg(test)]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.iter().map(|t| t.due).min()
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Cancel all pending and future tasks
    pub fn shutdown(&mut self) {
        self.root.cancel();
        self.tasks.clear();
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
