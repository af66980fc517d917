// Slide change listeners - notified after every successful navigation

use serde::Serialize;

/// Payload delivered to listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

pub trait SlideChangeListener {
    fn on_slide_change(&mut self, change: &SlideChange);
}

impl<F> SlideChangeListener for F
where
    F: FnMut(&SlideChange),
{
    fn on_slide_change(&mut self, change: &SlideChange) {
        self(change)
    }
}

/// Writes each change to the tracing log
#[derive(Debug, Default)]
pub struct LogListener;

impl SlideChangeListener for LogListener {
    fn on_slide_change(&mut self, change: &SlideChange) {
        tracing::info!(
            from = change.from,
            to = change.to,
            "Slide {}/{}",
            change.to,
            change.total
        );
    }
}
