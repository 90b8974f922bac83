use nba_api::{Player, Statistics, TeamSnapshot};
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Style;
use tui::text::{Line, Span};
use tui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::components::badge::{StatKind, badge_prefix, emphasized};
use crate::ui::format::{display_clock, float_stat, int_stat, pct_stat, total_minutes, truncate};
use crate::ui::scroll::{max_scroll, scroll_line, styled_line};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct Column {
    title: &'static str,
    width: usize,
    align: Align,
}

const fn col(title: &'static str, width: usize, align: Align) -> Column {
    Column { title, width, align }
}

const COLUMNS: [Column; 21] = [
    col("PLAYER", 15, Align::Left),
    col("MIN", 5, Align::Left),
    col("FGM", 3, Align::Right),
    col("FGA", 3, Align::Right),
    col("FG%", 5, Align::Right),
    col("3PM", 3, Align::Right),
    col("3PA", 3, Align::Right),
    col("3P%", 5, Align::Right),
    col("FTM", 3, Align::Right),
    col("FTA", 3, Align::Right),
    col("FT%", 5, Align::Right),
    col("OREB", 4, Align::Right),
    col("DREB", 4, Align::Right),
    col("REB", 3, Align::Right),
    col("AST", 3, Align::Right),
    col("STL", 3, Align::Right),
    col("BLK", 3, Align::Right),
    col("TO", 3, Align::Right),
    col("PF", 3, Align::Right),
    col("PTS", 3, Align::Right),
    col("+/-", 4, Align::Right),
];

const SEPARATOR: &str = " ";

/// Name column plus its separator; never scrolls horizontally.
pub const FIXED_WIDTH: usize = 16;

/// Full width of one table row.
pub const TABLE_WIDTH: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < COLUMNS.len() {
        total += COLUMNS[i].width;
        i += 1;
    }
    total + COLUMNS.len() - 1
};

const HEADER_ROWS: usize = 2;
const TOTAL_ROWS: usize = 2;

/// Right-most horizontal offset for a table shown `content_width` columns wide.
pub fn max_column_offset(content_width: usize) -> usize {
    max_scroll(TABLE_WIDTH, FIXED_WIDTH, content_width)
}

#[derive(Debug, Clone, Copy, Default)]
struct Leaders {
    points: Option<i32>,
    rebounds: Option<i32>,
    assists: Option<i32>,
}

impl Leaders {
    fn of(players: &[&Player]) -> Self {
        let best = |pick: fn(&Statistics) -> Option<i32>| {
            players
                .iter()
                .filter_map(|p| p.statistics.as_ref().and_then(pick))
                .filter(|v| *v > 0)
                .max()
        };
        Self {
            points: best(|s| s.points),
            rebounds: best(|s| s.rebounds),
            assists: best(|s| s.assists),
        }
    }
}

/// One team's box score, scrollable both ways.
pub struct BoxScoreTable<'a> {
    pub team: &'a TeamSnapshot,
    pub row_offset: usize,
    pub column_offset: usize,
    pub decoration: bool,
    pub kawaii: bool,
    pub badge_cap: usize,
    pub active: bool,
    pub theme: &'a Theme,
}

impl BoxScoreTable<'_> {
    /// Every line of the table for a content area of `width` x `height`.
    pub fn lines(&self, width: usize, height: usize) -> Vec<Line<'static>> {
        let roster = self.team.roster().unwrap_or_default();
        let leaders = Leaders::of(&roster);
        let fit = |line: Line<'static>| scroll_line(&line, FIXED_WIDTH, self.column_offset, width);

        let mut lines = vec![
            fit(self.header_row()),
            styled_line("─".repeat(width), self.theme.rule),
        ];
        lines.truncate(height);
        if height <= HEADER_ROWS {
            return lines;
        }

        let totals = self.team.statistics.as_ref().filter(|_| height >= HEADER_ROWS + TOTAL_ROWS + 1);
        let footer = if totals.is_some() { TOTAL_ROWS } else { 0 };
        let body_height = height - HEADER_ROWS - footer;

        let offset = self.row_offset.min(roster.len().saturating_sub(1));
        for player in roster.iter().skip(offset).take(body_height) {
            lines.push(fit(self.player_row(player, leaders)));
        }

        if let Some(totals) = totals {
            while lines.len() < HEADER_ROWS + body_height {
                lines.push(Line::default());
            }
            lines.push(styled_line("─".repeat(width), self.theme.rule));
            lines.push(fit(self.total_row(totals)));
        }
        lines
    }

    fn header_row(&self) -> Line<'static> {
        let cells = COLUMNS
            .iter()
            .map(|c| (c.title.to_string(), self.theme.table_header))
            .collect();
        row(cells)
    }

    fn player_row(&self, player: &Player, leaders: Leaders) -> Line<'static> {
        let mut name = player.short_name();
        if self.kawaii
            && let Some(stats) = &player.statistics
        {
            name = format!("{}{name}", badge_prefix(stats, self.badge_cap));
        }

        let Some(stats) = &player.statistics else {
            return row(vec![(name, Style::default()), ("-".to_string(), Style::default())]);
        };

        let minutes = display_clock(stats.minutes.as_deref().unwrap_or_default());
        let mut cells = vec![(name, Style::default()), (minutes, Style::default())];
        cells.extend(self.stat_cells(stats, Some(leaders)));
        row(cells)
    }

    fn total_row(&self, totals: &Statistics) -> Line<'static> {
        let minutes = total_minutes(totals.minutes.as_deref().unwrap_or_default());
        let mut cells = vec![
            ("TOTAL".to_string(), self.theme.bold),
            (minutes, Style::default()),
        ];
        cells.extend(self.stat_cells(totals, None));
        if let Some(last) = cells.last_mut() {
            *last = ("-".to_string(), Style::default());
        }
        row(cells)
    }

    /// FGM through +/-, in column order.
    fn stat_cells(&self, s: &Statistics, leaders: Option<Leaders>) -> Vec<(String, Style)> {
        let plain = Style::default();
        let leader = |value: Option<i32>, best: fn(&Leaders) -> Option<i32>| -> Style {
            match leaders.as_ref().and_then(best) {
                Some(max) if self.decoration && value == Some(max) => self.theme.bold,
                _ => plain,
            }
        };
        let emphasis = |kind: StatKind, value: Option<i32>, base: Style| -> Style {
            if self.kawaii && leaders.is_some() && emphasized(kind, value) {
                base.patch(self.theme.underline)
            } else {
                base
            }
        };
        let plus_minus = match s.plus_minus {
            Some(v) if self.decoration && leaders.is_some() && v > 0.0 => self.theme.positive,
            Some(v) if self.decoration && leaders.is_some() && v < 0.0 => self.theme.negative,
            _ => plain,
        };

        vec![
            (int_stat(s.field_goals_made), plain),
            (int_stat(s.field_goals_attempted), plain),
            (pct_stat(s.field_goals_pct), plain),
            (int_stat(s.threes_made), plain),
            (int_stat(s.threes_attempted), plain),
            (pct_stat(s.threes_pct), plain),
            (int_stat(s.free_throws_made), plain),
            (int_stat(s.free_throws_attempted), plain),
            (pct_stat(s.free_throws_pct), plain),
            (int_stat(s.rebounds_offensive), plain),
            (int_stat(s.rebounds_defensive), plain),
            (
                int_stat(s.rebounds),
                emphasis(StatKind::Rebounds, s.rebounds, leader(s.rebounds, |l| l.rebounds)),
            ),
            (
                int_stat(s.assists),
                emphasis(StatKind::Assists, s.assists, leader(s.assists, |l| l.assists)),
            ),
            (int_stat(s.steals), emphasis(StatKind::Steals, s.steals, plain)),
            (int_stat(s.blocks), emphasis(StatKind::Blocks, s.blocks, plain)),
            (int_stat(s.turnovers), plain),
            (int_stat(s.fouls), plain),
            (
                int_stat(s.points),
                emphasis(StatKind::Points, s.points, leader(s.points, |l| l.points)),
            ),
            (float_stat(s.plus_minus), plus_minus),
        ]
    }
}

/// Lay cells out against `COLUMNS`. Padding goes into its own unstyled span
/// so styles only ever cover the value.
fn row(cells: Vec<(String, Style)>) -> Line<'static> {
    let mut spans = Vec::with_capacity(cells.len() * 3);
    for (i, ((text, style), column)) in cells.into_iter().zip(COLUMNS.iter()).enumerate() {
        if i > 0 {
            spans.push(Span::raw(SEPARATOR));
        }
        let text = truncate(&text, column.width);
        let pad = " ".repeat(column.width - text.width());
        match column.align {
            Align::Left => {
                spans.push(Span::styled(text, style));
                spans.push(Span::raw(pad));
            }
            Align::Right => {
                spans.push(Span::raw(pad));
                spans.push(Span::styled(text, style));
            }
        }
    }
    Line::from(spans)
}

impl Widget for BoxScoreTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.theme.pane(self.active);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let lines = self.lines(inner.width as usize, inner.height as usize);
        Paragraph::new(lines).render(inner, buf);
    }
}
