//! Bounded slide counter

/// Current position within a deck of `total` slides
///
/// Invariant: `1 <= current <= total`. The only mutator is [`set`](Self::set),
/// which refuses out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current: usize,
    total: usize,
}

impl NavigationState {
    /// Start at slide 1; `None` for an empty deck
    pub fn new(total: usize) -> Option<Self> {
        (total > 0).then_some(Self { current: 1, total })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether `n` names a slide of this deck
    pub fn contains(&self, n: usize) -> bool {
        (1..=self.total).contains(&n)
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Fraction of the deck reached, `current / total`
    pub fn progress(&self) -> f64 {
        self.current as f64 / self.total as f64
    }

    /// Move to `n`, returning the previous index when it changed
    ///
    /// Selecting the current slide is not a change.
    pub(super) fn set(&mut self, n: usize) -> Option<usize> {
        if !self.contains(n) || n == self.current {
            return None;
        }
        let previous = self.current;
        self.current = n;
        Some(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_deck_has_no_state() {
        assert!(NavigationState::new(0).is_none());
    }

    #[test]
    fn set_rejects_out_of_range() {
        let mut state = NavigationState::new(3).unwrap();
        assert_eq!(state.set(0), None);
        assert_eq!(state.set(4), None);
        assert_eq!(state.current(), 1);
        assert_eq!(state.set(3), Some(1));
        assert_eq!(state.current(), 3);
        assert_eq!(state.set(3), None);
    }

    #[test]
    fn progress_is_exact() {
        let mut state = NavigationState::new(20).unwrap();
        state.set(5);
        assert_eq!(state.progress(), 0.25);
    }
}
