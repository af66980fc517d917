// Views module - screen-level rendering logic
//
// One screen: the presentation. Normal mode stacks the shell around the
// slide; fullscreen mode gives the slide the whole terminal.

mod modal;

use super::app::App;
use crate::tui::components::{footer, progress_bar, slide_view, title_bar};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

const TITLE_HEIGHT: u16 = 3;
const LOGS_HEIGHT: u16 = 8;
const FOOTER_HEIGHT: u16 = 3;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    if app.use_theme_background {
        let bg_block = Block::default().style(Style::default().bg(app.theme.background));
        f.render_widget(bg_block, f.area());
    }

    if app.fullscreen {
        slide_view::render(f, f.area(), app);
    } else {
        draw_shell(f, app);
    }

    // Take modal temporarily to avoid borrow conflict with mutable app
    if let Some(modal_state) = app.modal.take() {
        modal::render(f, &modal_state, app);
        app.modal = Some(modal_state);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}

/// Title, slide, optional logs, optional progress, footer
fn draw_shell(f: &mut Frame, app: &mut App) {
    let show_progress = app.controller.chrome().progress.is_some();

    let mut constraints = vec![Constraint::Length(TITLE_HEIGHT), Constraint::Min(3)];
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    if show_progress {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(FOOTER_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    slide_view::render(f, chunks[1], app);

    let mut next = 2;
    if app.show_logs {
        let entries = app.log_buffer.get_all();
        app.logs_panel.render(f, chunks[next], &entries, &app.theme);
        next += 1;
    }
    if show_progress {
        progress_bar::render(f, chunks[next], app);
        next += 1;
    }
    footer::render(f, chunks[next], app);
}
