// Slide block parsing
//
// Each slide's markdown is parsed with pulldown-cmark into a flat list of
// blocks. Flat is enough for slides: nested lists keep a depth, tables keep
// plain-text cells, and inline formatting survives as styled spans.
//
// List items and table body rows are the animated elements of a slide;
// everything else appears with the slide itself.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Inline formatting flags for a run of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub link: bool,
}

/// A run of text with one style
///
/// A hard line break is stored as an inline whose text is `"\n"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inline {
    pub text: String,
    pub style: InlineStyle,
}

impl Inline {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: InlineStyle::default(),
        }
    }
}

/// Bullet or ordinal for a list item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    Number(u64),
}

/// A block-level element of a slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: u8,
        spans: Vec<Inline>,
    },
    Paragraph(Vec<Inline>),
    ListItem {
        marker: ListMarker,
        depth: usize,
        spans: Vec<Inline>,
    },
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Code {
        lang: Option<String>,
        code: String,
    },
    Quote(Vec<Inline>),
    Rule,
}

/// Kinds of elements that take part in the entrance animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// List items (cards, overview items, recommendations)
    Item,
    /// Table body rows
    Row,
}

/// Concatenate the text of a span list, dropping formatting
pub fn plain_text(spans: &[Inline]) -> String {
    spans
        .iter()
        .map(|s| if s.text == "\n" { " " } else { s.text.as_str() })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Table under construction
#[derive(Default)]
struct TableBuilder {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: String,
    in_head: bool,
}

/// Open list item; its text accumulates in the builder's spans
#[derive(Clone, Copy)]
struct OpenItem {
    marker: ListMarker,
    depth: usize,
}

/// Event-driven block builder
#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    spans: Vec<Inline>,
    style: InlineStyle,
    bold_depth: usize,
    italic_depth: usize,
    heading: Option<u8>,
    code: Option<(Option<String>, String)>,
    table: Option<TableBuilder>,
    quote_depth: usize,
    /// Next ordinal per open list (None = bullet list)
    lists: Vec<Option<u64>>,
    /// Open list items, innermost last
    items: Vec<OpenItem>,
}

impl BlockBuilder {
    fn push_text(&mut self, text: &str) {
        if let Some((_, code)) = &mut self.code {
            code.push_str(text);
            return;
        }
        if let Some(table) = &mut self.table {
            table.cell.push_str(text);
            return;
        }
        // Merge with the previous run when the style is unchanged
        if let Some(last) = self.spans.last_mut() {
            if last.style == self.style && last.text != "\n" {
                last.text.push_str(text);
                return;
            }
        }
        self.spans.push(Inline {
            text: text.to_string(),
            style: self.style,
        });
    }

    fn push_break(&mut self) {
        if self.table.is_none() && self.code.is_none() {
            self.spans.push(Inline::plain("\n"));
        }
    }

    /// Close the open list item, if it has collected any text
    fn flush_item(&mut self) {
        let Some(&OpenItem { marker, depth }) = self.items.last() else {
            return;
        };
        let spans = trim_spans(std::mem::take(&mut self.spans));
        if !spans.is_empty() {
            self.blocks.push(Block::ListItem {
                marker,
                depth,
                spans,
            });
        }
    }

    fn end_paragraph(&mut self) {
        if !self.items.is_empty() {
            // Loose list: paragraphs inside an item join with a space
            self.push_text(" ");
            return;
        }
        let spans = trim_spans(std::mem::take(&mut self.spans));
        if spans.is_empty() {
            return;
        }
        if self.quote_depth > 0 {
            self.blocks.push(Block::Quote(spans));
        } else {
            self.blocks.push(Block::Paragraph(spans));
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.heading = Some(heading_level(level));
                self.spans.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                let level = self.heading.take().unwrap_or(1);
                let spans = trim_spans(std::mem::take(&mut self.spans));
                self.blocks.push(Block::Heading { level, spans });
            }

            Event::Start(Tag::Paragraph) => {}
            Event::End(TagEnd::Paragraph) => self.end_paragraph(),

            Event::Start(Tag::BlockQuote) => self.quote_depth += 1,
            Event::End(TagEnd::BlockQuote) => {
                self.quote_depth = self.quote_depth.saturating_sub(1)
            }

            Event::Start(Tag::List(first)) => {
                // A nested list closes the parent item's text first
                self.flush_item();
                self.lists.push(first);
            }
            Event::End(TagEnd::List(_)) => {
                self.lists.pop();
            }
            Event::Start(Tag::Item) => {
                self.flush_item();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = ListMarker::Number(*n);
                        *n += 1;
                        marker
                    }
                    _ => ListMarker::Bullet,
                };
                self.items.push(OpenItem { marker, depth });
            }
            Event::End(TagEnd::Item) => {
                self.flush_item();
                self.spans.clear();
                self.items.pop();
            }

            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                    _ => None,
                };
                self.code = Some((lang, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((lang, code)) = self.code.take() {
                    self.blocks.push(Block::Code {
                        lang,
                        code: code.trim_end_matches('\n').to_string(),
                    });
                }
            }

            Event::Start(Tag::Table(_)) => self.table = Some(TableBuilder::default()),
            Event::End(TagEnd::Table) => {
                if let Some(table) = self.table.take() {
                    self.blocks.push(Block::Table {
                        header: table.header,
                        rows: table.rows,
                    });
                }
            }
            Event::Start(Tag::TableHead) => {
                if let Some(table) = &mut self.table {
                    table.in_head = true;
                }
            }
            Event::End(TagEnd::TableHead) => {
                if let Some(table) = &mut self.table {
                    table.header = std::mem::take(&mut table.row);
                    table.in_head = false;
                }
            }
            Event::Start(Tag::TableRow) => {}
            Event::End(TagEnd::TableRow) => {
                if let Some(table) = &mut self.table {
                    if !table.in_head {
                        let row = std::mem::take(&mut table.row);
                        table.rows.push(row);
                    }
                }
            }
            Event::Start(Tag::TableCell) => {}
            Event::End(TagEnd::TableCell) => {
                if let Some(table) = &mut self.table {
                    let cell = std::mem::take(&mut table.cell);
                    table.row.push(cell.trim().to_string());
                }
            }

            Event::Start(Tag::Strong) => {
                self.bold_depth += 1;
                self.style.bold = true;
            }
            Event::End(TagEnd::Strong) => {
                self.bold_depth = self.bold_depth.saturating_sub(1);
                self.style.bold = self.bold_depth > 0;
            }
            Event::Start(Tag::Emphasis) => {
                self.italic_depth += 1;
                self.style.italic = true;
            }
            Event::End(TagEnd::Emphasis) => {
                self.italic_depth = self.italic_depth.saturating_sub(1);
                self.style.italic = self.italic_depth > 0;
            }
            Event::Start(Tag::Strikethrough) => self.style.strikethrough = true,
            Event::End(TagEnd::Strikethrough) => self.style.strikethrough = false,
            Event::Start(Tag::Link { .. }) => self.style.link = true,
            Event::End(TagEnd::Link) => self.style.link = false,

            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => {
                let saved = self.style;
                self.style.code = true;
                self.push_text(&code);
                self.style = saved;
            }
            Event::SoftBreak => self.push_text(" "),
            Event::HardBreak => self.push_break(),
            Event::Rule => self.blocks.push(Block::Rule),

            // Raw HTML (speaker-note comments, layout divs) is not shown
            Event::Html(_) | Event::InlineHtml(_) => {}
            _ => {}
        }
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Strip leading/trailing whitespace runs from a span list
fn trim_spans(mut spans: Vec<Inline>) -> Vec<Inline> {
    while spans
        .first()
        .is_some_and(|s| s.text.trim().is_empty() && !s.style.code)
    {
        spans.remove(0);
    }
    while spans
        .last()
        .is_some_and(|s| s.text.trim().is_empty() && !s.style.code)
    {
        spans.pop();
    }
    if let Some(first) = spans.first_mut() {
        first.text = first.text.trim_start().to_string();
    }
    if let Some(last) = spans.last_mut() {
        last.text = last.text.trim_end().to_string();
    }
    spans
}

/// Parse one slide's markdown into blocks
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let mut builder = BlockBuilder::default();
    for event in Parser::new_ext(markdown, options) {
        builder.handle(event);
    }
    builder.blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_paragraphs() {
        let blocks = parse_blocks("## Market Overview\n\nThe market is **growing** fast.");
        assert_eq!(blocks.len(), 2);
        match &blocks[0] {
            Block::Heading { level, spans } => {
                assert_eq!(*level, 2);
                assert_eq!(plain_text(spans), "Market Overview");
            }
            other => panic!("expected heading, got {:?}", other),
        }
        match &blocks[1] {
            Block::Paragraph(spans) => {
                assert_eq!(plain_text(spans), "The market is growing fast.");
                assert!(spans.iter().any(|s| s.style.bold && s.text == "growing"));
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn list_items_with_numbering_and_depth() {
        let blocks = parse_blocks("3. first\n4. second\n   - nested\n");
        let items: Vec<_> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::ListItem {
                    marker,
                    depth,
                    spans,
                } => Some((*marker, *depth, plain_text(spans))),
                _ => None,
            })
            .collect();
        assert_eq!(
            items,
            vec![
                (ListMarker::Number(3), 0, "first".to_string()),
                (ListMarker::Number(4), 0, "second".to_string()),
                (ListMarker::Bullet, 1, "nested".to_string()),
            ]
        );
    }

    #[test]
    fn loose_list_items_join_paragraphs() {
        let blocks = parse_blocks("- one\n\n  more\n\n- two\n");
        let texts: Vec<_> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::ListItem { spans, .. } => Some(plain_text(spans)),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["one more".to_string(), "two".to_string()]);
    }

    #[test]
    fn tables_split_header_and_rows() {
        let md = "| Brand | Share |\n|---|---|\n| A | 40% |\n| B | 25% |\n";
        let blocks = parse_blocks(md);
        assert_eq!(
            blocks,
            vec![Block::Table {
                header: vec!["Brand".to_string(), "Share".to_string()],
                rows: vec![
                    vec!["A".to_string(), "40%".to_string()],
                    vec!["B".to_string(), "25%".to_string()],
                ],
            }]
        );
    }

    #[test]
    fn code_quote_rule_and_html() {
        let md = "```rust\nfn main() {}\n```\n\n> quoted\n\n***\n\n<!-- speaker note -->\n";
        let blocks = parse_blocks(md);
        assert_eq!(
            blocks[0],
            Block::Code {
                lang: Some("rust".to_string()),
                code: "fn main() {}".to_string()
            }
        );
        assert!(matches!(&blocks[1], Block::Quote(spans) if plain_text(spans) == "quoted"));
        assert_eq!(blocks[2], Block::Rule);
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn inline_code_keeps_its_style() {
        let blocks = parse_blocks("run `cargo` now");
        let Block::Paragraph(spans) = &blocks[0] else {
            panic!("expected paragraph");
        };
        assert!(spans.iter().any(|s| s.style.code && s.text == "cargo"));
    }
}
