use nba_api::Action;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::ui::format::{action_clock, center, ellipsize};
use crate::ui::theme::Theme;

pub const QUARTERS: u8 = 4;

/// Room taken by the `MM:SS|` prefix plus a trailing column.
const CLOCK_PREFIX: usize = 6;

/// Play-by-play list for one team and one quarter.
pub struct GameLog<'a> {
    /// Already filtered to the selected quarter and team.
    pub actions: &'a [&'a Action],
    pub quarter: u8,
    pub offset: usize,
    /// Indices into `actions` that match the active search.
    pub matches: &'a [usize],
    /// Position in `matches` of the current match.
    pub cursor: Option<usize>,
    pub active: bool,
    pub theme: &'a Theme,
}

impl GameLog<'_> {
    pub fn lines(&self, width: usize, height: usize) -> Vec<Line<'static>> {
        if height < 3 {
            return Vec::new();
        }

        let mut lines = vec![Line::from(center("gamelog", width)), self.quarter_selector(width)];

        let current = self.cursor.and_then(|c| self.matches.get(c)).copied();
        let offset = self.offset.min(self.actions.len().saturating_sub(1));
        let desc_width = width.saturating_sub(CLOCK_PREFIX);

        for (idx, action) in self.actions.iter().enumerate().skip(offset).take(height - 2) {
            let text = format!(
                "{:<5}|{}",
                action_clock(&action.clock),
                ellipsize(&action.description, desc_width)
            );
            let style = if Some(idx) == current {
                self.theme.highlight.add_modifier(Modifier::BOLD)
            } else if self.matches.contains(&idx) {
                self.theme.highlight
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(text, style)));
        }
        lines
    }

    fn quarter_selector(&self, width: usize) -> Line<'static> {
        let mut spans = Vec::new();
        for q in 1..=QUARTERS {
            if q > 1 {
                spans.push(Span::styled(" | ", self.theme.faint));
            }
            let style = if q == self.quarter { self.theme.underline } else { self.theme.faint };
            spans.push(Span::styled(format!("{q}Q"), style));
        }
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let left = width.saturating_sub(used) / 2;
        spans.insert(0, Span::raw(" ".repeat(left)));
        Line::from(spans)
    }
}

impl Widget for GameLog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.theme.pane(self.active);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 {
            return;
        }
        let lines = self.lines(inner.width as usize, inner.height as usize);
        Paragraph::new(lines).render(inner, buf);
    }
}
