//! Deck loading
//!
//! A deck is a single markdown file cut into slides by a separator line
//! (`---` unless configured otherwise). Slides get their 1-based position at
//! load time and never change afterwards: the deck is immutable for the life
//! of the presentation.

mod blocks;
mod split;

pub use blocks::{plain_text, Block, ElementKind, Inline, InlineStyle, ListMarker};

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Title reported for slides without any heading
pub const UNTITLED: &str = "Unknown";

/// Errors that can occur while loading a deck
#[derive(Debug)]
pub enum DeckError {
    /// Deck file could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Deck contains no slides after splitting
    Empty,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read deck {}: {}", path.display(), source)
            }
            Self::Empty => write!(f, "Deck contains no slides"),
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// A single slide of the deck
#[derive(Debug, Clone)]
pub struct Slide {
    /// 1-based position in the deck
    pub number: usize,
    /// Text of the first heading, if any
    pub heading: Option<String>,
    /// Raw markdown source of this slide
    pub source: String,
    /// Parsed block content
    pub blocks: Vec<Block>,
}

impl Slide {
    fn parse(number: usize, source: String) -> Self {
        let blocks = blocks::parse_blocks(&source);
        let heading = blocks.iter().find_map(|b| match b {
            Block::Heading { spans, .. } => Some(plain_text(spans)),
            _ => None,
        });
        Self {
            number,
            heading,
            source,
            blocks,
        }
    }

    /// Slide title for display and introspection
    pub fn title(&self) -> &str {
        match self.heading.as_deref() {
            Some(h) if !h.is_empty() => h,
            _ => UNTITLED,
        }
    }

    /// Number of animated elements of a kind on this slide
    pub fn element_count(&self, kind: ElementKind) -> usize {
        self.blocks
            .iter()
            .map(|b| match (kind, b) {
                (ElementKind::Item, Block::ListItem { .. }) => 1,
                (ElementKind::Row, Block::Table { rows, .. }) => rows.len(),
                _ => 0,
            })
            .sum()
    }
}

/// Summary row used by `slidedeck outline`
#[derive(Debug, Clone, Serialize)]
pub struct SlideSummary {
    pub number: usize,
    pub title: String,
    pub items: usize,
    pub rows: usize,
}

/// Ordered, fixed-size collection of slides
#[derive(Debug, Clone)]
pub struct Deck {
    title: String,
    slides: Vec<Slide>,
}

impl Deck {
    /// Load a deck from a markdown file
    ///
    /// The deck title is `title` when given, otherwise the first slide's
    /// heading, otherwise the file stem.
    pub fn load(path: &Path, separator: &str, title: Option<&str>) -> Result<Self, DeckError> {
        let source = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut deck = Self::from_markdown(&source, separator)?;

        deck.title = match title {
            Some(t) => t.to_string(),
            None => deck.slides[0].heading.clone().unwrap_or_else(|| {
                path.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "slides".to_string())
            }),
        };

        tracing::info!(
            "Loaded deck {} ({} slides, separator {:?})",
            path.display(),
            deck.len(),
            separator
        );
        Ok(deck)
    }

    /// Build a deck from markdown source
    pub fn from_markdown(source: &str, separator: &str) -> Result<Self, DeckError> {
        let slides: Vec<Slide> = split::split_slides(source, separator)
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| Slide::parse(i + 1, chunk))
            .collect();

        if slides.is_empty() {
            return Err(DeckError::Empty);
        }

        let title = slides[0].title().to_string();
        Ok(Self { title, slides })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of slides (always at least 1)
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by 1-based number
    pub fn slide(&self, number: usize) -> Option<&Slide> {
        number.checked_sub(1).and_then(|i| self.slides.get(i))
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            title: String::new(),
            slides: Vec::new(),
        }
    }

    pub fn summaries(&self) -> Vec<SlideSummary> {
        self.slides
            .iter()
            .map(|s| SlideSummary {
                number: s.number,
                title: s.title().to_string(),
                items: s.element_count(ElementKind::Item),
                rows: s.element_count(ElementKind::Row),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECK: &str = "\
# Vietnam Market Analysis

Opening remarks
---
## Overview

- Population
- Income
- Urbanisation
---
## Competitors

| Brand | Share |
|---|---|
| A | 40% |
| B | 25% |
---
Closing without heading
";

    #[test]
    fn positions_are_one_based() {
        let deck = Deck::from_markdown(DECK, "---").unwrap();
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.slide(1).unwrap().number, 1);
        assert_eq!(deck.slide(4).unwrap().number, 4);
        assert!(deck.slide(0).is_none());
        assert!(deck.slide(5).is_none());
    }

    #[test]
    fn titles_fall_back_to_unknown() {
        let deck = Deck::from_markdown(DECK, "---").unwrap();
        assert_eq!(deck.title(), "Vietnam Market Analysis");
        assert_eq!(deck.slide(2).unwrap().title(), "Overview");
        assert_eq!(deck.slide(4).unwrap().title(), UNTITLED);
    }

    #[test]
    fn counts_animated_elements() {
        let deck = Deck::from_markdown(DECK, "---").unwrap();
        let overview = deck.slide(2).unwrap();
        assert_eq!(overview.element_count(ElementKind::Item), 3);
        assert_eq!(overview.element_count(ElementKind::Row), 0);
        let competitors = deck.slide(3).unwrap();
        assert_eq!(competitors.element_count(ElementKind::Row), 2);
    }

    #[test]
    fn empty_source_is_an_error() {
        assert!(matches!(
            Deck::from_markdown("\n---\n\n", "---"),
            Err(DeckError::Empty)
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Deck::load(Path::new("/nonexistent/deck.md"), "---", None).unwrap_err();
        assert!(matches!(err, DeckError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/deck.md"));
    }

    #[test]
    fn summaries_list_every_slide() {
        let deck = Deck::from_markdown(DECK, "---").unwrap();
        let summaries = deck.summaries();
        assert_eq!(summaries.len(), 4);
        assert_eq!(summaries[2].title, "Competitors");
        assert_eq!(summaries[2].rows, 2);
    }
}
