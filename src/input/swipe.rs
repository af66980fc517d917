//! Swipe adapter
//!
//! A mouse drag stands in for a touch swipe: the gesture starts on left
//! button down and ends on button up. Only the start point is kept. Units
//! are terminal cells.

use crate::controller::Navigator;

/// Minimum horizontal travel for a drag to count as a swipe
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger/pointer moved left: go forward
    Left,
    /// Moved right: go back
    Right,
}

/// Classify a gesture delta
///
/// Horizontal travel must beat vertical travel and exceed the threshold.
pub fn classify(dx: i32, dy: i32, threshold: u16) -> Option<SwipeDirection> {
    if dx.abs() <= dy.abs() || dx.abs() <= i32::from(threshold) {
        return None;
    }
    if dx < 0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: u16,
    start: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    /// Record the gesture start
    pub fn begin(&mut self, column: u16, row: u16) {
        self.start = Some((column, row));
    }

    /// Finish the gesture and navigate if it was a swipe
    pub fn end(
        &mut self,
        column: u16,
        row: u16,
        nav: &mut impl Navigator,
    ) -> Option<SwipeDirection> {
        let (start_col, start_row) = self.start.take()?;
        let dx = i32::from(column) - i32::from(start_col);
        let dy = i32::from(row) - i32::from(start_row);

        let direction = classify(dx, dy, self.threshold)?;
        tracing::debug!("Swipe {:?} (dx={}, dy={})", direction, dx, dy);
        match direction {
            SwipeDirection::Left => nav.next(),
            SwipeDirection::Right => nav.previous(),
        };
        Some(direction)
    }

    /// Drop a gesture without acting on it
    pub fn cancel(&mut self) {
        self.start = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::testing::RecordingNavigator;

    #[test]
    fn leftward_swipe_goes_forward_once() {
        let mut nav = RecordingNavigator::new(2, 5);
        let mut tracker = SwipeTracker::new(50);
        tracker.begin(100, 10);
        let direction = tracker.end(40, 15, &mut nav);

        assert_eq!(direction, Some(SwipeDirection::Left));
        assert_eq!(nav.count("next"), 1);
        assert_eq!(nav.count("previous"), 0);
    }

    #[test]
    fn rightward_swipe_goes_back() {
        let mut nav = RecordingNavigator::new(2, 5);
        let mut tracker = SwipeTracker::new(50);
        tracker.begin(10, 10);
        tracker.end(80, 10, &mut nav);
        assert_eq!(nav.calls, vec!["previous"]);
    }

    #[test]
    fn short_or_vertical_drags_are_ignored() {
        assert_eq!(classify(-50, 0, 50), None);
        assert_eq!(classify(-70, 80, 50), None);
        assert_eq!(classify(60, -5, 50), Some(SwipeDirection::Right));
    }

    #[test]
    fn end_without_begin_does_nothing() {
        let mut nav = RecordingNavigator::new(2, 5);
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.end(0, 0, &mut nav), None);
        assert!(nav.calls.is_empty());
    }
}
