// Footer component
//
// Previous button, slide counter, next button and a key hint. The drawn
// button areas are stored on the App so mouse clicks can be hit-tested
// against exactly what is on screen.

use crate::controller::{NavControls, FINISH_LABEL, PREV_LABEL};
use crate::input::ButtonBar;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const HINT: &str = "? help";

/// Button captions for the available width
fn labels(controls: &NavControls, compact: bool) -> (&'static str, &'static str) {
    if compact {
        let next = if controls.next_label == FINISH_LABEL {
            "✓"
        } else {
            "→"
        };
        ("←", next)
    } else {
        (PREV_LABEL, controls.next_label)
    }
}

/// Areas of the two buttons inside the footer's inner row
///
/// Buttons are drawn as `[ label ]`, prev flush left and next flush right.
fn button_areas(inner: Rect, prev: &str, next: &str) -> ButtonBar {
    if inner.height == 0 {
        return ButtonBar::default();
    }
    let prev_w = (prev.width() as u16 + 4).min(inner.width);
    let next_w = (next.width() as u16 + 4).min(inner.width.saturating_sub(prev_w));
    ButtonBar {
        prev: Some(Rect::new(inner.x, inner.y, prev_w, 1)),
        next: Some(Rect::new(inner.right().saturating_sub(next_w), inner.y, next_w, 1)),
    }
}

fn button_style(app: &App, disabled: bool) -> Style {
    if disabled {
        Style::default().fg(app.theme.button_disabled)
    } else {
        Style::default()
            .fg(app.theme.button)
            .add_modifier(Modifier::BOLD)
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bp = Breakpoint::from_width(area.width);
    let controls = app.controller.chrome().controls.clone();
    let (prev_label, next_label) = labels(&controls, bp.arrow_buttons());
    let buttons = button_areas(inner, prev_label, next_label);

    if let Some(counter) = &app.controller.chrome().counter {
        f.render_widget(
            Paragraph::new(counter.text().to_string())
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.counter)),
            inner,
        );
    }

    if bp.footer_hint() {
        if let Some(next) = buttons.next {
            let w = HINT.width() as u16 + 2;
            let x = next.x.saturating_sub(w);
            let hint_area = Rect::new(x, inner.y, w, 1).intersection(inner);
            f.render_widget(
                Paragraph::new(HINT).style(Style::default().fg(app.theme.hint)),
                hint_area,
            );
        }
    }

    if let Some(prev) = buttons.prev {
        f.render_widget(
            Paragraph::new(format!("[ {} ]", prev_label))
                .style(button_style(app, controls.prev_disabled)),
            prev,
        );
    }
    if let Some(next) = buttons.next {
        f.render_widget(
            Paragraph::new(format!("[ {} ]", next_label))
                .style(button_style(app, controls.next_disabled)),
            next,
        );
    }

    app.buttons = buttons;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::NEXT_LABEL;

    #[test]
    fn buttons_sit_at_both_ends() {
        let inner = Rect::new(1, 20, 78, 1);
        let bar = button_areas(inner, PREV_LABEL, NEXT_LABEL);
        assert_eq!(bar.prev, Some(Rect::new(1, 20, 10, 1)));
        assert_eq!(bar.next, Some(Rect::new(69, 20, 10, 1)));
        assert_eq!(bar.hit(5, 20), Some(crate::input::NavButton::Previous));
        assert_eq!(bar.hit(78, 20), Some(crate::input::NavButton::Next));
        assert_eq!(bar.hit(40, 20), None);
    }

    #[test]
    fn compact_labels_follow_finish_state() {
        let mut controls = NavControls::default();
        assert_eq!(labels(&controls, true), ("←", "→"));
        controls.next_label = FINISH_LABEL;
        assert_eq!(labels(&controls, true), ("←", "✓"));
        assert_eq!(labels(&controls, false), (PREV_LABEL, FINISH_LABEL));
    }
}
