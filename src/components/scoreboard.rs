use nba_api::Game;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Style;
use tui::text::{Line, Span};
use tui::widgets::{Paragraph, Widget};

use crate::ui::format::{card_score, center, game_status};
use crate::ui::theme::Theme;

/// Inner width of a card: wide enough for a centred status line.
pub const CARD_INNER_WIDTH: u16 = 11;
pub const CARD_WIDTH: u16 = CARD_INNER_WIDTH + 2;
pub const CARD_HEIGHT: u16 = 6;

/// Responsive grid of game cards.
pub struct ScoreboardGrid<'a> {
    pub games: &'a [Game],
    pub focus: usize,
    pub columns: usize,
    pub theme: &'a Theme,
}

/// First grid row to draw so that `focus_row` stays on screen.
pub fn first_visible_row(focus_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return focus_row;
    }
    (focus_row + 1).saturating_sub(visible_rows)
}

/// The four inner lines of a card. The leading team's tricode and score are
/// bold; a tie leaves both plain.
pub fn card_lines(game: &Game, theme: &Theme) -> Vec<Line<'static>> {
    let (home_style, away_style) = match game.home.score.cmp(&game.away.score) {
        std::cmp::Ordering::Greater => (theme.bold, Style::default()),
        std::cmp::Ordering::Less => (Style::default(), theme.bold),
        std::cmp::Ordering::Equal => (Style::default(), Style::default()),
    };
    let pair = |home: String, away: String| {
        Line::from(vec![
            Span::styled(home, home_style),
            Span::raw(" | "),
            Span::styled(away, away_style),
        ])
    };

    vec![
        Line::from(center(&game_status(game), CARD_INNER_WIDTH as usize)),
        pair(game.home.tricode.clone(), game.away.tricode.clone()),
        Line::from(" ---------"),
        pair(card_score(game.home.score), card_score(game.away.score)),
    ]
}

impl Widget for ScoreboardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = self.columns.max(1);
        let visible_rows = usize::from(area.height / CARD_HEIGHT);
        if visible_rows == 0 || area.width < CARD_WIDTH {
            return;
        }
        let first_row = first_visible_row(self.focus / columns, visible_rows);

        for (idx, game) in self.games.iter().enumerate() {
            let row = idx / columns;
            let column = idx % columns;
            if row < first_row || row >= first_row + visible_rows {
                continue;
            }
            let x = area.x + column as u16 * CARD_WIDTH;
            if x + CARD_WIDTH > area.right() {
                continue;
            }
            let y = area.y + (row - first_row) as u16 * CARD_HEIGHT;
            let card = Rect::new(x, y, CARD_WIDTH, CARD_HEIGHT);

            let block = self.theme.pane(idx == self.focus);
            let inner = block.inner(card);
            block.render(card, buf);
            Paragraph::new(card_lines(game, self.theme)).render(inner, buf);
        }
    }
}
