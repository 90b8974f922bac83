use nba_api::Game;
use tui::buffer::Buffer;
use tui::layout::{Alignment, Rect};
use tui::style::Style;
use tui::text::{Line, Span};
use tui::widgets::{Paragraph, Widget};

use crate::ui::format::{display_clock, period_label};
use crate::ui::theme::Theme;

/// Bordered box above the detail panes: game status and the score line.
pub struct ScoreHeader<'a> {
    pub game: &'a Game,
    pub theme: &'a Theme,
}

pub fn status_line(game: &Game) -> String {
    if !game.is_started() {
        "not started".to_string()
    } else if game.is_finished() {
        game.status_text.clone()
    } else {
        format!("{} ({})", period_label(game), display_clock(&game.clock))
    }
}

impl ScoreHeader<'_> {
    pub fn lines(&self) -> Vec<Line<'static>> {
        let (home, away) = (&self.game.home, &self.game.away);
        let (home_style, away_style) = if home.score > away.score {
            (self.theme.bold, Style::default())
        } else if away.score > home.score {
            (Style::default(), self.theme.bold)
        } else {
            (Style::default(), Style::default())
        };

        vec![
            Line::from(status_line(self.game)),
            Line::from(vec![
                Span::styled(format!("{} ({})", home.tricode, home.score), home_style),
                Span::raw(" | "),
                Span::styled(format!("{} ({})", away.tricode, away.score), away_style),
            ]),
        ]
    }
}

impl Widget for ScoreHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.theme.pane(false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let lines = self.lines();
        let top = inner.y + inner.height.saturating_sub(lines.len() as u16) / 2;
        let area = Rect::new(inner.x, top, inner.width, inner.bottom() - top);
        Paragraph::new(lines).alignment(Alignment::Center).render(area, buf);
    }
}
