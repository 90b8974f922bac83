use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::Style;
use tui::text::Line;
use tui::widgets::Paragraph;
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, Screen};
use crate::components::box_score::BoxScoreTable;
use crate::components::game_log::GameLog;
use crate::components::score_header::ScoreHeader;
use crate::components::scoreboard::ScoreboardGrid;
use crate::state::detail::{DetailState, Focus};
use crate::state::network::ERROR_CHAR;
use crate::state::scoreboard::ScoreboardState;
use crate::ui::format::ellipsize;
use crate::ui::layout::{DetailLayout, LayoutAreas};
use crate::ui::theme::Theme;

const SCOREBOARD_HELP: &str =
    "<hjkli←↓↑→ >: move, <enter>: detail, <ctrl+w>: watch (browser), <q/esc>: quit";
const DETAIL_HELP: &str = "<hjkli←↓↑→ >: move, <ctrl+s>: switch team, <ctrl+b>: box, \
                           <ctrl+l>: log, <ctrl+q>: period, <ctrl+w>: watch, <ctrl+c>: quit";
const TOO_SMALL: &str = "Terminal too small. Please enlarge.";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &App)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        layout.update(f.area(), app.show_logs);

        match (app.screen, app.detail.as_ref()) {
            (Screen::Detail, Some(detail)) => draw_detail(f, layout.main, app, detail),
            _ => draw_scoreboard(f, layout.main, &app.scoreboard, &app.theme),
        }

        if let Some(logs) = layout.logs {
            draw_logs(f, logs, &app.theme);
        }
        draw_loading_spinner(f, f.area(), app);
    });
    if let Err(e) = result {
        error!("Failed to draw frame: {e}");
    }
}

fn draw_scoreboard(f: &mut Frame, area: Rect, state: &ScoreboardState, theme: &Theme) {
    let [updated_area, help_area, grid_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let width = usize::from(area.width);
    if let Some(updated) = state.last_updated {
        let text = format!("Last updated: {}", updated.format("%H:%M:%S"));
        f.render_widget(Paragraph::new(ellipsize(&text, width)), updated_area);
    }
    f.render_widget(
        Paragraph::new(ellipsize(SCOREBOARD_HELP, width)).style(theme.help),
        help_area,
    );

    if let Some(message) = state.error.as_deref() {
        f.render_widget(message_line(&format!("Error: {message}"), theme.error), grid_area);
    } else if state.last_updated.is_none() {
        f.render_widget(message_line("Loading...", Style::default()), grid_area);
    } else if state.games.is_empty() {
        f.render_widget(message_line("No games today.", theme.faint), grid_area);
    } else {
        f.render_widget(
            ScoreboardGrid {
                games: &state.games,
                focus: state.focus,
                columns: state.columns,
                theme,
            },
            grid_area,
        );
    }
}

fn draw_detail(f: &mut Frame, area: Rect, app: &App, detail: &DetailState) {
    let theme = &app.theme;
    let Some(box_score) = detail.box_score.as_ref() else {
        let (text, style) = match detail.error() {
            Some(message) => (format!("Error: {message}"), theme.error),
            None => ("Loading...".to_string(), Style::default()),
        };
        f.render_widget(message_line(&text, style), area);
        return;
    };

    let footer = detail_footer(detail, usize::from(area.width), theme);
    let Some(layout) = DetailLayout::compute(area, footer.len() as u16) else {
        f.render_widget(message_line(TOO_SMALL, Style::default()), area);
        return;
    };

    f.render_widget(detail_banner(detail, theme), layout.banner);
    f.render_widget(ScoreHeader { game: &box_score.game, theme }, layout.header);

    if let (Some(rect), Some(team)) = (layout.box_score, detail.current_team()) {
        f.render_widget(
            BoxScoreTable {
                team,
                row_offset: detail.box_offset,
                column_offset: detail.box_scroll_x,
                decoration: app.settings.decoration,
                kawaii: app.settings.kawaii,
                badge_cap: app.settings.badge_cap,
                active: detail.focus == Focus::BoxScore,
                theme,
            },
            rect,
        );
    }

    if let Some(rect) = layout.game_log {
        let actions = detail.visible_actions();
        let cursor = (!detail.search.matches.is_empty()).then_some(detail.search.cursor);
        f.render_widget(
            GameLog {
                actions: &actions,
                quarter: detail.quarter,
                offset: detail.log_offset,
                matches: &detail.search.matches,
                cursor,
                active: detail.focus == Focus::GameLog,
                theme,
            },
            rect,
        );
    }

    f.render_widget(Paragraph::new(footer), layout.footer);
}

fn detail_banner(detail: &DetailState, theme: &Theme) -> Paragraph<'static> {
    if let Some(message) = detail.error() {
        return Paragraph::new(format!("Error: {message}")).style(theme.error);
    }
    let tricode = detail.current_team().map_or("", |team| team.tricode.as_str());
    let updated = detail
        .last_updated
        .map_or_else(|| "--:--:--".to_string(), |t| t.format("%H:%M:%S").to_string());
    Paragraph::new(format!("Selected Team: {tricode} (Last Updated: {updated})"))
        .style(theme.underline)
}

/// Search prompt while searching; otherwise last-updated stamp and key help.
fn detail_footer(detail: &DetailState, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    if detail.search.active {
        return vec![Line::from(ellipsize(&format!("/{}", detail.search.query), width))];
    }
    let mut lines = Vec::with_capacity(2);
    if let Some(updated) = detail.last_updated {
        let text = format!("Last updated: {}", updated.to_rfc2822());
        lines.push(Line::from(ellipsize(&text, width)));
    }
    lines.push(Line::styled(ellipsize(DETAIL_HELP, width), theme.help));
    lines
}

fn message_line(text: &str, style: Style) -> Paragraph<'static> {
    Paragraph::new(text.to_string()).style(style)
}

fn draw_logs(f: &mut Frame, area: Rect, theme: &Theme) {
    let logger = TuiLoggerWidget::default()
        .block(theme.pane(false).title(" Logs "))
        .style_error(theme.error)
        .style_warn(theme.highlight)
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_target(false)
        .output_file(false)
        .output_line(false);
    f.render_widget(logger, area);
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App) {
    let Some(spinner_char) = app.loading.spinner_char(app.spinner_frame) else {
        return;
    };
    if area.width < 2 || area.height == 0 {
        return;
    }
    let style = match spinner_char {
        ERROR_CHAR => app.theme.error,
        _ => Style::default(),
    };
    let spinner = Paragraph::new(spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    f.render_widget(spinner, Rect::new(area.width - 2, area.y, 1, 1));
}
