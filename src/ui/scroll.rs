use tui::style::Style;
use tui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Visual width of a styled line. Styles take no room.
pub fn line_width(line: &Line<'_>) -> usize {
    line.spans
        .iter()
        .flat_map(|span| span.content.chars())
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

/// Visual columns `start..end` of `line`.
///
/// Every span keeps its own style. A wide glyph that would straddle either
/// boundary is replaced by blank cells for the part inside the window, so the
/// result is never wider than `end - start` and glyphs are never split.
pub fn cut(line: &Line<'_>, start: usize, end: usize) -> Line<'static> {
    let mut spans = Vec::new();
    if end <= start {
        return Line::from(spans);
    }

    let mut col = 0usize;
    let mut last_kept = false;
    for span in &line.spans {
        let mut content = String::new();
        for c in span.content.chars() {
            let w = c.width().unwrap_or(0);
            if w == 0 {
                // Combining marks ride along with the glyph before them.
                if last_kept {
                    content.push(c);
                }
                continue;
            }
            let (glyph_start, glyph_end) = (col, col + w);
            col = glyph_end;
            if glyph_end <= start || glyph_start >= end {
                last_kept = false;
                continue;
            }
            if glyph_start >= start && glyph_end <= end {
                content.push(c);
                last_kept = true;
            } else {
                let visible = glyph_end.min(end) - glyph_start.max(start);
                content.push_str(&" ".repeat(visible));
                last_kept = false;
            }
        }
        if !content.is_empty() {
            spans.push(Span::styled(content, span.style));
        }
        if col >= end {
            break;
        }
    }
    Line::from(spans).style(line.style)
}

/// Largest horizontal offset that still fills the scrollable region.
pub fn max_scroll(total_width: usize, fixed_width: usize, width: usize) -> usize {
    let remaining = width.saturating_sub(fixed_width);
    total_width.saturating_sub(fixed_width + remaining)
}

/// Horizontally scroll a table row while keeping the first `fixed_width`
/// columns pinned in place.
pub fn scroll_line(line: &Line<'_>, fixed_width: usize, offset: usize, width: usize) -> Line<'static> {
    if width <= fixed_width {
        return cut(line, 0, width);
    }
    let remaining = width - fixed_width;
    let offset = offset.min(max_scroll(line_width(line), fixed_width, width));

    let mut pinned = cut(line, 0, fixed_width);
    let start = fixed_width + offset;
    let scrolled = cut(line, start, start + remaining);
    pinned.spans.extend(scrolled.spans);
    pinned
}

/// Convenience for single-style text.
pub fn styled_line(text: impl Into<String>, style: Style) -> Line<'static> {
    Line::from(Span::styled(text.into(), style))
}
