// Title bar component
//
// Renders the deck title and the title of the current slide.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
///
/// Shows the deck title, then the current slide's title after a divider.
/// The help key sits in the top-right border.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let info = app.controller.current_slide_info();

    let mut spans = vec![Span::styled(
        format!(" {}", app.deck.title()),
        Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
    )];
    if info.title != app.deck.title() {
        spans.push(Span::styled(" ──── ", Style::default().fg(theme.border)));
        spans.push(Span::styled(info.title, Style::default().fg(theme.text)));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.title))
            .title_top(Line::from(" ? ").right_aligned()),
    );

    f.render_widget(title, area);
}
