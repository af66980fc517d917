// Slide view component
//
// Turns a parsed slide into styled, word-wrapped lines and draws the
// visible window of them. List items and table rows consult the entrance
// animator: hidden elements keep their rows as blank lines so nothing
// shifts when they appear, entering elements are drawn dim.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::controller::{ElementRef, EntranceAnimator, RevealPhase};
use crate::deck::{Block, ElementKind, Inline, InlineStyle, ListMarker, Slide};
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::layout;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const MORE_INDICATOR: &str = " ↓ more ";

/// A word with its style and whether whitespace preceded it
enum Token {
    Word {
        text: String,
        style: Style,
        space_before: bool,
    },
    Break,
}

fn inline_style(base: Style, style: InlineStyle, theme: &Theme) -> Style {
    let mut s = base;
    if style.bold {
        s = s.add_modifier(Modifier::BOLD);
    }
    if style.italic {
        s = s.add_modifier(Modifier::ITALIC).fg(theme.emphasis);
    }
    if style.strikethrough {
        s = s.add_modifier(Modifier::CROSSED_OUT);
    }
    if style.code {
        s = s.fg(theme.code).bg(theme.code_bg);
    }
    if style.link {
        s = s.fg(theme.link).add_modifier(Modifier::UNDERLINED);
    }
    s
}

fn tokenize(spans: &[Inline], base: Style, theme: &Theme) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pending_space = false;

    for inline in spans {
        if inline.text == "\n" {
            tokens.push(Token::Break);
            pending_space = false;
            continue;
        }
        let style = inline_style(base, inline.style, theme);
        let leading = inline.text.starts_with(char::is_whitespace);
        for (i, word) in inline.text.split_whitespace().enumerate() {
            tokens.push(Token::Word {
                text: word.to_string(),
                style,
                space_before: if i == 0 { leading || pending_space } else { true },
            });
        }
        pending_space = inline.text.ends_with(char::is_whitespace);
    }
    tokens
}

fn prefix_width(prefix: &[Span<'static>]) -> usize {
    prefix.iter().map(|s| s.content.width()).sum()
}

/// Word-wrap styled text to `width` columns
///
/// `first` prefixes the first line (bullet, quote bar), `rest` every
/// continuation line. Words wider than the line are left to overflow.
fn wrap_spans(
    spans: &[Inline],
    base: Style,
    theme: &Theme,
    width: usize,
    first: Vec<Span<'static>>,
    rest: Vec<Span<'static>>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut start = prefix_width(&first);
    let mut current = first;
    let mut used = start;

    for token in tokenize(spans, base, theme) {
        match token {
            Token::Break => {
                lines.push(Line::from(std::mem::replace(&mut current, rest.clone())));
                start = prefix_width(&rest);
                used = start;
            }
            Token::Word {
                text,
                style,
                space_before,
            } => {
                let w = text.width();
                let mut sep = usize::from(space_before && used > start);
                if used > start && used + sep + w > width {
                    lines.push(Line::from(std::mem::replace(&mut current, rest.clone())));
                    start = prefix_width(&rest);
                    used = start;
                    sep = 0;
                }
                if sep == 1 {
                    current.push(Span::styled(" ", style));
                }
                current.push(Span::styled(text, style));
                used += sep + w;
            }
        }
    }
    lines.push(Line::from(current));
    lines
}

fn with_modifier(lines: Vec<Line<'static>>, modifier: Modifier) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .map(|line| {
            Line::from(
                line.spans
                    .into_iter()
                    .map(|s| {
                        let style = s.style.add_modifier(modifier);
                        s.style(style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

/// Same number of rows, nothing drawn
fn blank(lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
    lines.iter().map(|_| Line::default()).collect()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Renders the blocks of one slide; element indices run across the slide
struct SlideRenderer<'a> {
    slide: &'a Slide,
    animator: &'a EntranceAnimator,
    theme: &'a Theme,
    width: usize,
    items: usize,
    rows: usize,
}

impl SlideRenderer<'_> {
    fn next_phase(&mut self, kind: ElementKind) -> RevealPhase {
        let counter = match kind {
            ElementKind::Item => &mut self.items,
            ElementKind::Row => &mut self.rows,
        };
        let element = ElementRef {
            kind,
            index: *counter,
        };
        *counter += 1;
        self.animator.phase(self.slide.number, element)
    }

    fn block(&mut self, block: &Block) -> Vec<Line<'static>> {
        let theme = self.theme;
        match block {
            Block::Heading { level, spans } => {
                let mut style = Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD);
                if *level == 1 {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                wrap_spans(spans, style, theme, self.width, vec![], vec![])
            }
            Block::Paragraph(spans) => {
                let style = Style::default().fg(theme.text);
                wrap_spans(spans, style, theme, self.width, vec![], vec![])
            }
            Block::ListItem {
                marker,
                depth,
                spans,
            } => {
                let phase = self.next_phase(ElementKind::Item);
                let marker = match marker {
                    ListMarker::Bullet => "• ".to_string(),
                    ListMarker::Number(n) => format!("{}. ", n),
                };
                let indent = " ".repeat(depth * 2);
                let first = vec![
                    Span::raw(indent.clone()),
                    Span::styled(marker.clone(), Style::default().fg(theme.bullet)),
                ];
                let rest = vec![Span::raw(format!("{}{}", indent, " ".repeat(marker.width())))];
                let lines = wrap_spans(
                    spans,
                    Style::default().fg(theme.text),
                    theme,
                    self.width,
                    first,
                    rest,
                );
                match phase {
                    RevealPhase::Hidden => blank(lines),
                    RevealPhase::Entering => with_modifier(lines, Modifier::DIM),
                    RevealPhase::Shown => lines,
                }
            }
            Block::Table { header, rows } => self.table(header, rows),
            Block::Code { code, .. } => {
                let style = Style::default().fg(theme.code).bg(theme.code_bg);
                code.lines()
                    .map(|l| Line::from(Span::styled(format!("  {}", l), style)))
                    .collect()
            }
            Block::Quote(spans) => {
                let bar = || vec![Span::styled("│ ", Style::default().fg(theme.quote))];
                let style = Style::default()
                    .fg(theme.quote)
                    .add_modifier(Modifier::ITALIC);
                wrap_spans(spans, style, theme, self.width, bar(), bar())
            }
            Block::Rule => vec![Line::from(Span::styled(
                "─".repeat(self.width),
                Style::default().fg(theme.rule),
            ))],
        }
    }

    fn table(&mut self, header: &[String], rows: &[Vec<String>]) -> Vec<Line<'static>> {
        let theme = self.theme;
        let columns = rows
            .iter()
            .map(Vec::len)
            .chain([header.len()])
            .max()
            .unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for row in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }
        let format_row = |cells: &[String]| -> String {
            widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad(cells.get(i).map(String::as_str).unwrap_or(""), *w))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = Vec::with_capacity(rows.len() + 2);
        let total_width = widths.iter().sum::<usize>() + 2 * columns.saturating_sub(1);
        lines.push(Line::from(Span::styled(
            format!("  {}", format_row(header)),
            Style::default()
                .fg(theme.table_header)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(total_width)),
            Style::default().fg(theme.rule),
        )));

        for row in rows {
            let text = format_row(row);
            let line = match self.next_phase(ElementKind::Row) {
                RevealPhase::Hidden => Line::default(),
                // Still sliding in from the left
                RevealPhase::Entering => Line::from(Span::styled(
                    text,
                    Style::default().fg(theme.text).add_modifier(Modifier::DIM),
                )),
                RevealPhase::Shown => {
                    Line::from(Span::styled(format!("  {}", text), Style::default().fg(theme.text)))
                }
            };
            lines.push(line);
        }
        lines
    }
}

/// Lay out a slide as styled lines `width` columns wide
///
/// `dimmed` draws everything faint (the outgoing slide between a
/// navigation and the next activation).
pub fn slide_lines(
    slide: &Slide,
    animator: &EntranceAnimator,
    theme: &Theme,
    width: usize,
    dimmed: bool,
) -> Vec<Line<'static>> {
    let mut renderer = SlideRenderer {
        slide,
        animator,
        theme,
        width: width.max(1),
        items: 0,
        rows: 0,
    };

    let mut lines = Vec::new();
    let mut previous: Option<&Block> = None;
    for block in &slide.blocks {
        let in_list = matches!(previous, Some(Block::ListItem { .. }))
            && matches!(block, Block::ListItem { .. });
        if previous.is_some() && !in_list {
            lines.push(Line::default());
        }
        lines.extend(renderer.block(block));
        previous = Some(block);
    }

    if dimmed {
        with_modifier(lines, Modifier::DIM)
    } else {
        lines
    }
}

/// Render the visible slide with overflow scrolling
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let mut block = ratatui::widgets::Block::default();
    if !app.fullscreen {
        block = block
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border));
    }
    let inner = block.inner(area);
    f.render_widget(block, area);

    let content = layout::slide_content(inner);

    let Some((slide, outgoing)) = app.visible_slide() else {
        return;
    };
    let lines = slide_lines(
        slide,
        app.controller.animator(),
        &app.theme,
        content.width as usize,
        outgoing,
    );

    app.slide_scroll
        .update_dimensions(lines.len(), content.height as usize);
    let (start, end) = app.slide_scroll.visible_range();
    let visible: Vec<Line> = lines[start..end].to_vec();

    f.render_widget(
        Paragraph::new(visible).style(Style::default().fg(app.theme.text)),
        content,
    );
    render_scrollbar(f, inner, &app.slide_scroll, ScrollbarStyle::Arrows);

    if app.slide_scroll.has_more_below() && inner.height > 0 {
        let w = (MORE_INDICATOR.width() as u16).min(inner.width);
        let indicator = Rect::new(
            inner.right().saturating_sub(w + 1),
            inner.bottom().saturating_sub(1),
            w,
            1,
        );
        f.render_widget(
            Paragraph::new(MORE_INDICATOR).style(
                Style::default()
                    .fg(app.theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            indicator,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{AnimationTiming, Timeline};
    use crate::deck::Deck;
    use std::time::{Duration, Instant};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(text).collect()
    }

    fn deck(md: &str) -> Deck {
        Deck::from_markdown(md, "---").unwrap()
    }

    #[test]
    fn wraps_paragraphs_at_width() {
        let deck = deck("one two three four five six");
        let animator = EntranceAnimator::new(&deck, AnimationTiming::default(), false);
        let lines = slide_lines(&deck.slides()[0], &animator, &Theme::default(), 10, false);
        assert_eq!(texts(&lines), vec!["one two", "three four", "five six"]);
    }

    #[test]
    fn list_items_keep_marker_and_hanging_indent() {
        let deck = deck("# Points\n\n- alpha beta gamma\n- delta\n");
        let animator = EntranceAnimator::new(&deck, AnimationTiming::default(), false);
        let lines = slide_lines(&deck.slides()[0], &animator, &Theme::default(), 12, false);
        assert_eq!(
            texts(&lines),
            vec!["Points", "", "• alpha beta", "  gamma", "• delta"]
        );
    }

    #[test]
    fn hidden_items_reserve_their_rows() {
        let deck = deck("# A\n---\n- first\n- second\n");
        let mut animator = EntranceAnimator::new(&deck, AnimationTiming::default(), false);
        let mut timeline = Timeline::new();
        let now = Instant::now();
        animator.trigger(2, now, &mut timeline);

        let slide = &deck.slides()[1];
        let hidden = slide_lines(slide, &animator, &Theme::default(), 40, false);
        assert_eq!(texts(&hidden), vec!["", ""]);

        for task in timeline.drain_due(now + Duration::from_millis(100)) {
            if let crate::controller::TimelineAction::Reveal {
                slide,
                element,
                phase,
            } = task
            {
                animator.apply(slide, element, phase);
            }
        }
        let lines = slide_lines(slide, &animator, &Theme::default(), 40, false);
        assert_eq!(texts(&lines), vec!["• first", "• second"]);
        assert!(lines[0].spans[1].style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn tables_align_columns() {
        let deck = deck("| Brand | Share |\n|---|---|\n| Acme | 40% |\n| B | 5% |\n");
        let animator = EntranceAnimator::new(&deck, AnimationTiming::default(), false);
        let lines = slide_lines(&deck.slides()[0], &animator, &Theme::default(), 40, false);
        assert_eq!(
            texts(&lines),
            vec![
                "  Brand  Share",
                "  ────────────",
                "  Acme   40%",
                "  B      5%"
            ]
        );
    }

    #[test]
    fn dimmed_slide_is_all_dim() {
        let deck = deck("# Old slide\n\ntext");
        let animator = EntranceAnimator::new(&deck, AnimationTiming::default(), false);
        let lines = slide_lines(&deck.slides()[0], &animator, &Theme::default(), 40, true);
        assert!(lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .all(|s| s.style.add_modifier.contains(Modifier::DIM)));
    }
}
