//! Logs panel component
//!
//! Shows the captured tracing output (toggle with `L`), pinned to the
//! newest entry.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::scroll::ScrollState;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    scroll: ScrollState,
}

impl LogsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, entries: &[LogEntry], theme: &Theme) {
        // Borders take two rows
        self.scroll
            .update_dimensions(entries.len(), area.height.saturating_sub(2) as usize);

        let (start, end) = self.scroll.visible_range();
        let items: Vec<ListItem> = entries[start..end]
            .iter()
            .map(|entry| ListItem::new(format_log_entry(entry)).style(log_level_style(entry.level, theme)))
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(" Logs "),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Minimal);
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "{} {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.highlight),
        LogLevel::Info => Style::default().fg(theme.text),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.hint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn entries_format_with_time_and_level() {
        let entry = LogEntry {
            timestamp: Local.with_ymd_and_hms(2026, 3, 1, 9, 5, 7).unwrap(),
            level: LogLevel::Warn,
            message: "Unknown theme".to_string(),
        };
        assert_eq!(format_log_entry(&entry), "09:05:07 WARN  Unknown theme");
    }
}
