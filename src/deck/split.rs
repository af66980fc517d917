// Slide splitting
//
// A deck file is cut into slides at every line whose trimmed text equals the
// separator. Lines inside fenced code blocks never split, so a `---` in a
// YAML snippet stays part of its slide.

/// Split deck source into per-slide markdown chunks
///
/// Chunks that contain only whitespace are dropped, which lets a deck start
/// or end with a separator line.
pub fn split_slides(source: &str, separator: &str) -> Vec<String> {
    let separator = separator.trim();
    let mut slides = Vec::new();
    let mut current = String::new();
    // Open fence marker ("```" or "~~~", possibly longer)
    let mut fence: Option<String> = None;

    for line in source.lines() {
        let trimmed = line.trim();

        if let Some(marker) = fence_marker(trimmed) {
            match &fence {
                None => fence = Some(marker),
                Some(open) if marker.starts_with(open.as_str()) && is_closing(trimmed) => {
                    fence = None;
                }
                _ => {}
            }
        }

        if fence.is_none() && !separator.is_empty() && trimmed == separator {
            push_chunk(&mut slides, &mut current);
            continue;
        }

        current.push_str(line);
        current.push('\n');
    }

    push_chunk(&mut slides, &mut current);
    slides
}

fn push_chunk(slides: &mut Vec<String>, current: &mut String) {
    let chunk = std::mem::take(current);
    if !chunk.trim().is_empty() {
        slides.push(chunk.trim_matches('\n').to_string());
    }
}

/// Return the fence run (e.g. "````") if the line opens or closes a fence
fn fence_marker(trimmed: &str) -> Option<String> {
    let first = trimmed.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }
    let run: String = trimmed.chars().take_while(|&c| c == first).collect();
    (run.chars().count() >= 3).then_some(run)
}

/// A closing fence carries nothing after the marker run
fn is_closing(trimmed: &str) -> bool {
    let first = trimmed.chars().next().unwrap_or(' ');
    trimmed.trim_start_matches(first).trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_separator_lines() {
        let source = "# One\n\nhello\n---\n# Two\n---\n# Three\n";
        let slides = split_slides(source, "---");
        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0], "# One\n\nhello");
        assert_eq!(slides[2], "# Three");
    }

    #[test]
    fn ignores_separator_inside_code_fence() {
        let source = "# Config\n\n```yaml\nkey: 1\n---\nother: 2\n```\n---\n# Next\n";
        let slides = split_slides(source, "---");
        assert_eq!(slides.len(), 2);
        assert!(slides[0].contains("other: 2"));
    }

    #[test]
    fn drops_blank_leading_and_trailing_slides() {
        let source = "---\n\n# Only\n\n---\n   \n";
        let slides = split_slides(source, "---");
        assert_eq!(slides, vec!["# Only".to_string()]);
    }

    #[test]
    fn custom_separator() {
        let source = "# A\n<!-- slide -->\n# B\n---\nstill B\n";
        let slides = split_slides(source, "<!-- slide -->");
        assert_eq!(slides.len(), 2);
        assert!(slides[1].contains("still B"));
    }

    #[test]
    fn tilde_fence_is_not_closed_by_backticks() {
        let source = "~~~\n```\n---\n~~~\n---\nB\n";
        let slides = split_slides(source, "---");
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[1], "B");
    }
}
