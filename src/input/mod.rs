//! Input source adapters
//!
//! Each adapter turns a raw terminal event into calls on a [`Navigator`].
//! Adapters hold no navigation state of their own; the controller is passed
//! in for the duration of the call.
//!
//! [`Navigator`]: crate::controller::Navigator

mod buttons;
mod keyboard;
mod swipe;

pub use buttons::ButtonBar;
#[cfg(test)]
pub use buttons::NavButton;
pub use keyboard::{handle_key, KeyOutcome};
pub use swipe::{SwipeTracker, DEFAULT_SWIPE_THRESHOLD};

#[cfg(test)]
pub(crate) mod testing {
    use crate::controller::Navigator;

    /// Navigator that records calls instead of moving anything
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        pub current: usize,
        pub total: usize,
        pub calls: Vec<String>,
    }

    impl RecordingNavigator {
        pub fn new(current: usize, total: usize) -> Self {
            Self {
                current,
                total,
                calls: Vec::new(),
            }
        }

        pub fn count(&self, name: &str) -> usize {
            self.calls.iter().filter(|c| c.as_str() == name).count()
        }
    }

    impl Navigator for RecordingNavigator {
        fn current(&self) -> usize {
            self.current
        }

        fn total(&self) -> usize {
            self.total
        }

        fn go_to(&mut self, n: usize) -> bool {
            self.calls.push(format!("go_to({})", n));
            true
        }

        fn next(&mut self) -> bool {
            self.calls.push("next".to_string());
            true
        }

        fn previous(&mut self) -> bool {
            self.calls.push("previous".to_string());
            true
        }

        fn first(&mut self) -> bool {
            self.calls.push("first".to_string());
            true
        }

        fn last(&mut self) -> bool {
            self.calls.push("last".to_string());
            true
        }
    }
}
