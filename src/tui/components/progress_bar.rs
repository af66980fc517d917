// Progress bar component
//
// One-row gauge filled to the fraction of the deck already reached.

use crate::tui::app::App;
use ratatui::{layout::Rect, style::Style, widgets::Gauge, Frame};

/// Render the deck progress gauge; nothing when progress is disabled
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(progress) = &app.controller.chrome().progress else {
        return;
    };

    // Label-less: the counter in the footer carries the numbers
    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.progress_fill)
                .bg(app.theme.background),
        )
        .ratio(progress.fraction().clamp(0.0, 1.0))
        .label("");

    f.render_widget(gauge, area);
}
