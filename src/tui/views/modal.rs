// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and current theme
// - Jump modal: go-to-slide prompt

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Jump(input) => render_jump(f, app, input),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn modal_block<'a>(app: &App, title: &'a str, hint: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight))
        .border_type(app.theme.border_type)
        .title(title)
        .title_bottom(Line::from(hint).centered())
}

fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.emphasis);
    let desc_style = Style::default().fg(app.theme.text);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Slides", header_style)),
        kb("→ ↓ Space", "Next slide"),
        kb("← ↑", "Previous slide"),
        kb("PgDn/PgUp", "Next / previous"),
        kb("l j / h k", "Next / previous"),
        kb("Home/End", "First / last slide"),
        kb("g", "Go to slide"),
        Line::raw(""),
        Line::from(Span::styled("  Display", header_style)),
        kb("f", "Toggle fullscreen"),
        kb("Esc", "Leave fullscreen"),
        kb("[ ]", "Scroll long slide"),
        kb("L", "Toggle logs"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("y", "Copy slide markdown"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled("  Mouse", header_style)),
        kb("Click", "Prev / next buttons"),
        kb("Drag", "Swipe to change slide"),
        kb("Scroll", "Scroll long slide"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name.as_str(), key_style),
            Span::styled(
                if app.controller.animator().reduced_motion() {
                    "  |  Reduced motion"
                } else {
                    ""
                },
                desc_style,
            ),
        ]),
    ]);

    let area = centered_rect(44, 30, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(modal_block(app, " Help ", " Press ? or Esc to close "));

    f.render_widget(paragraph, area);
}

fn render_jump(f: &mut Frame, app: &App, input: &str) {
    let total = app.controller.total_slides();
    let content = Text::from(vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                format!("  Slide (1-{}): ", total),
                Style::default().fg(app.theme.text),
            ),
            Span::styled(
                format!("{}▏", input),
                Style::default()
                    .fg(app.theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ]);

    let area = centered_rect(34, 5, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(modal_block(app, " Go to slide ", " Enter to jump · Esc "));

    f.render_widget(paragraph, area);
}
