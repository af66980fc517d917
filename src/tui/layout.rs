// Width-dependent presentation decisions
//
// Render code asks a `Breakpoint` what to do (short button captions, footer
// hint, slide padding) and `slide_content` where to put the slide text.

use ratatui::layout::Rect;

/// Terminal width class, ordered narrow to wide
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Under 60 columns, e.g. a split pane next to speaker notes
    Compact,
    Normal,
    Wide,
    /// 140 columns and up: the content cap leaves side margins
    UltraWide,
}

/// Slide text never grows wider than this
pub const MAX_CONTENT_WIDTH: u16 = 100;

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Footer buttons use arrow glyphs instead of words
    pub fn arrow_buttons(self) -> bool {
        self == Breakpoint::Compact
    }

    /// Room for the `? help` hint beside the next button
    pub fn footer_hint(self) -> bool {
        self >= Breakpoint::Wide
    }

    /// Horizontal padding inside the slide frame
    pub fn slide_padding(self) -> u16 {
        match self {
            Breakpoint::Compact => 1,
            Breakpoint::Normal => 2,
            Breakpoint::Wide | Breakpoint::UltraWide => 4,
        }
    }
}

/// Area for slide text inside the frame: padded, capped and centered
pub fn slide_content(inner: Rect) -> Rect {
    let padding = Breakpoint::from_width(inner.width).slide_padding();
    let width = inner
        .width
        .saturating_sub(padding * 2)
        .min(MAX_CONTENT_WIDTH);
    let x = inner.x + inner.width.saturating_sub(width) / 2;
    Rect::new(x, inner.y, width, inner.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_follows_width() {
        assert!(Breakpoint::from_width(59).arrow_buttons());
        assert!(!Breakpoint::from_width(60).arrow_buttons());
        assert!(!Breakpoint::from_width(99).footer_hint());
        assert!(Breakpoint::from_width(100).footer_hint());
        assert!(Breakpoint::from_width(200).footer_hint());
    }

    #[test]
    fn narrow_frame_keeps_most_columns() {
        let content = slide_content(Rect::new(1, 1, 40, 20));
        assert_eq!(content, Rect::new(2, 1, 38, 20));

        let content = slide_content(Rect::new(0, 0, 80, 10));
        assert_eq!(content, Rect::new(2, 0, 76, 10));
    }

    #[test]
    fn wide_frame_caps_and_centers_text() {
        let content = slide_content(Rect::new(1, 1, 160, 30));
        assert_eq!(content.width, MAX_CONTENT_WIDTH);
        assert_eq!(content.x, 1 + 30);

        // Padding decides below the cap
        let content = slide_content(Rect::new(0, 0, 104, 5));
        assert_eq!(content, Rect::new(4, 0, 96, 5));
    }
}
