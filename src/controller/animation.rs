//! Staggered entrance animation
//!
//! When a slide becomes current, its list items and table rows start hidden
//! and are revealed one after another: items every 100 ms over 600 ms, rows
//! every 80 ms over 400 ms. Each step is a timeline task, so a newer
//! navigation cancels the remaining steps of an older one.

use super::timeline::{Timeline, TimelineAction};
use crate::deck::{Deck, ElementKind};
use std::time::{Duration, Instant};

/// Visibility of one animated element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Not yet visible (space is reserved)
    Hidden,
    /// Transition in progress
    Entering,
    /// Fully visible
    #[default]
    Shown,
}

/// Address of an animated element within a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef {
    pub kind: ElementKind,
    pub index: usize,
}

/// Stagger and transition durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    pub item_stagger: Duration,
    pub item_transition: Duration,
    pub row_stagger: Duration,
    pub row_transition: Duration,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            item_stagger: Duration::from_millis(100),
            item_transition: Duration::from_millis(600),
            row_stagger: Duration::from_millis(80),
            row_transition: Duration::from_millis(400),
        }
    }
}

impl AnimationTiming {
    fn for_kind(&self, kind: ElementKind) -> (Duration, Duration) {
        match kind {
            ElementKind::Item => (self.item_stagger, self.item_transition),
            ElementKind::Row => (self.row_stagger, self.row_transition),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct SlideReveal {
    items: Vec<RevealPhase>,
    rows: Vec<RevealPhase>,
}

impl SlideReveal {
    fn phases_mut(&mut self, kind: ElementKind) -> &mut Vec<RevealPhase> {
        match kind {
            ElementKind::Item => &mut self.items,
            ElementKind::Row => &mut self.rows,
        }
    }

    fn phases(&self, kind: ElementKind) -> &[RevealPhase] {
        match kind {
            ElementKind::Item => &self.items,
            ElementKind::Row => &self.rows,
        }
    }
}

/// Reveal state for every slide of a deck
#[derive(Debug, Clone)]
pub struct EntranceAnimator {
    timing: AnimationTiming,
    reduced_motion: bool,
    slides: Vec<SlideReveal>,
}

impl EntranceAnimator {
    /// All elements start shown; the opening slide is not animated
    pub fn new(deck: &Deck, timing: AnimationTiming, reduced_motion: bool) -> Self {
        let slides = deck
            .slides()
            .iter()
            .map(|s| SlideReveal {
                items: vec![RevealPhase::Shown; s.element_count(ElementKind::Item)],
                rows: vec![RevealPhase::Shown; s.element_count(ElementKind::Row)],
            })
            .collect();
        Self {
            timing,
            reduced_motion,
            slides,
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Hide the slide's elements and schedule their staggered reveal
    ///
    /// Under reduced motion everything is shown at once and nothing is
    /// scheduled.
    pub fn trigger(&mut self, slide: usize, now: Instant, timeline: &mut Timeline) {
        let Some(reveal) = slide.checked_sub(1).and_then(|i| self.slides.get_mut(i)) else {
            return;
        };

        for kind in [ElementKind::Item, ElementKind::Row] {
            let phases = reveal.phases_mut(kind);
            if self.reduced_motion {
                phases.fill(RevealPhase::Shown);
                continue;
            }
            phases.fill(RevealPhase::Hidden);

            let (stagger, transition) = self.timing.for_kind(kind);
            for index in 0..phases.len() {
                let element = ElementRef { kind, index };
                let start = now + stagger * index as u32;
                timeline.schedule(
                    start,
                    TimelineAction::Reveal {
                        slide,
                        element,
                        phase: RevealPhase::Entering,
                    },
                );
                timeline.schedule(
                    start + transition,
                    TimelineAction::Reveal {
                        slide,
                        element,
                        phase: RevealPhase::Shown,
                    },
                );
            }
        }
    }

    /// Apply a reveal step delivered by the timeline
    pub fn apply(&mut self, slide: usize, element: ElementRef, phase: RevealPhase) {
        if let Some(p) = slide
            .checked_sub(1)
            .and_then(|i| self.slides.get_mut(i))
            .and_then(|r| r.phases_mut(element.kind).get_mut(element.index))
        {
            *p = phase;
        }
    }

    /// Current phase of an element; unknown elements count as shown
    pub fn phase(&self, slide: usize, element: ElementRef) -> RevealPhase {
        slide
            .checked_sub(1)
            .and_then(|i| self.slides.get(i))
            .and_then(|r| r.phases(element.kind).get(element.index).copied())
            .unwrap_or_default()
    }

    /// Whether every element of the slide is fully shown
    #[cfg(test)]
    pub fn is_settled(&self, slide: usize) -> bool {
        slide
            .checked_sub(1)
            .and_then(|i| self.slides.get(i))
            .map_or(true, |r| {
                r.items
                    .iter()
                    .chain(r.rows.iter())
                    .all(|p| *p == RevealPhase::Shown)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Deck {
        Deck::from_markdown(
            "# Intro\n---\n## Items\n\n- a\n- b\n- c\n\n| x |\n|---|\n| 1 |\n| 2 |\n",
            "---",
        )
        .unwrap()
    }

    fn item(index: usize) -> ElementRef {
        ElementRef {
            kind: ElementKind::Item,
            index,
        }
    }

    fn row(index: usize) -> ElementRef {
        ElementRef {
            kind: ElementKind::Row,
            index,
        }
    }

    fn run_until(animator: &mut EntranceAnimator, timeline: &mut Timeline, at: Instant) {
        for action in timeline.drain_due(at) {
            if let TimelineAction::Reveal {
                slide,
                element,
                phase,
            } = action
            {
                animator.apply(slide, element, phase);
            }
        }
    }

    #[test]
    fn items_reveal_at_100ms_steps() {
        let deck = deck();
        let mut animator = EntranceAnimator::new(&deck, AnimationTiming::default(), false);
        let mut timeline = Timeline::new();
        let t0 = Instant::now();

        animator.trigger(2, t0, &mut timeline);
        assert_eq!(animator.phase(2, item(0)), RevealPhase::Hidden);
        assert!(!animator.is_settled(2));

        run_until(&mut animator, &mut timeline, t0 + Duration::from_millis(150));
        assert_eq!(animator.phase(2, item(0)), RevealPhase::Entering);
        assert_eq!(animator.phase(2, item(1)), RevealPhase::Entering);
        assert_eq!(animator.phase(2, item(2)), RevealPhase::Hidden);
        // Rows step every 80ms: 0 and 80 are due, 160 is not
        assert_eq!(animator.phase(2, row(0)), RevealPhase::Entering);
        assert_eq!(animator.phase(2, row(1)), RevealPhase::Entering);

        run_until(&mut animator, &mut timeline, t0 + Duration::from_millis(650));
        assert_eq!(animator.phase(2, item(0)), RevealPhase::Shown);
        assert_eq!(animator.phase(2, item(2)), RevealPhase::Entering);

        run_until(&mut animator, &mut timeline, t0 + Duration::from_secs(2));
        assert!(animator.is_settled(2));
        assert_eq!(timeline.pending(), 0);
    }

    #[test]
    fn reduced_motion_shows_everything() {
        let deck = deck();
        let mut animator = EntranceAnimator::new(&deck, AnimationTiming::default(), true);
        let mut timeline = Timeline::new();

        animator.trigger(2, Instant::now(), &mut timeline);
        assert!(animator.is_settled(2));
        assert_eq!(timeline.pending(), 0);
    }

    #[test]
    fn unknown_elements_are_shown() {
        let deck = deck();
        let animator = EntranceAnimator::new(&deck, AnimationTiming::default(), false);
        assert_eq!(animator.phase(9, item(0)), RevealPhase::Shown);
        assert_eq!(animator.phase(2, item(42)), RevealPhase::Shown);
    }
}
