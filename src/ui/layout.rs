use tui::layout::{Constraint, Layout, Rect, Size};

use crate::components::scoreboard::CARD_WIDTH;

pub const LOG_PANE_HEIGHT: u16 = 8;

/// Below this the detail screen shows an advisory instead of a layout.
pub const MIN_DETAIL_WIDTH: u16 = 30;
pub const MIN_DETAIL_HEIGHT: u16 = 10;

/// From this width on, box score and game log sit side by side.
pub const SIDE_BY_SIDE_WIDTH: u16 = 100;

const BANNER_HEIGHT: u16 = 1;
const MIN_HEADER_HEIGHT: u16 = 4;

/// Pre-computed layout areas for the main draw loop.
pub struct LayoutAreas {
    pub main: Rect,
    pub logs: Option<Rect>,
}

impl LayoutAreas {
    pub fn new(size: Size) -> Self {
        let rect = Rect::new(0, 0, size.width, size.height);
        Self::from_rect(rect, false)
    }

    pub fn update(&mut self, area: Rect, show_logs: bool) {
        *self = Self::from_rect(area, show_logs);
    }

    fn from_rect(area: Rect, show_logs: bool) -> Self {
        if !show_logs || area.height <= LOG_PANE_HEIGHT * 2 {
            return LayoutAreas { main: area, logs: None };
        }

        let [main, logs] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(LOG_PANE_HEIGHT)]).areas(area);
        LayoutAreas { main, logs: Some(logs) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneArrangement {
    SideBySide,
    Stacked,
}

impl PaneArrangement {
    pub fn for_width(width: u16) -> Self {
        if width >= SIDE_BY_SIDE_WIDTH {
            PaneArrangement::SideBySide
        } else {
            PaneArrangement::Stacked
        }
    }
}

/// Areas of the game detail screen, top to bottom: team banner, score header,
/// the box score / game log panes, footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLayout {
    pub banner: Rect,
    pub header: Rect,
    pub box_score: Option<Rect>,
    pub game_log: Option<Rect>,
    pub footer: Rect,
}

impl DetailLayout {
    /// `None` when the area is too small to lay anything out.
    ///
    /// Height left after the banner and footer is split one part header to
    /// eight parts main, with the header kept between 2 and 4+ rows.
    pub fn compute(area: Rect, footer_height: u16) -> Option<Self> {
        if area.width < MIN_DETAIL_WIDTH || area.height < MIN_DETAIL_HEIGHT {
            return None;
        }

        let footer_height = footer_height.min(area.height.saturating_sub(BANNER_HEIGHT));
        let available = area.height - BANNER_HEIGHT - footer_height;

        let unit = (available / 9).max(1);
        let mut header_height = unit.max(MIN_HEADER_HEIGHT);
        if header_height > available.saturating_sub(2) {
            header_height = available.saturating_sub(2).max(2);
        }
        let header_height = header_height.min(available);
        let main_height = available - header_height;

        let [banner, header, main, footer] = Layout::vertical([
            Constraint::Length(BANNER_HEIGHT),
            Constraint::Length(header_height),
            Constraint::Length(main_height),
            Constraint::Length(footer_height),
        ])
        .areas(area);

        let (box_score, game_log) = split_main(main);
        Some(DetailLayout { banner, header, box_score, game_log, footer })
    }
}

fn split_main(main: Rect) -> (Option<Rect>, Option<Rect>) {
    match PaneArrangement::for_width(main.width) {
        PaneArrangement::SideBySide if main.height >= 4 => {
            let box_width = box_pane_width(main.width);
            let left = Rect::new(main.x, main.y, box_width, main.height);
            let right = Rect::new(main.x + box_width, main.y, main.width - box_width, main.height);
            (Some(left), Some(right))
        }
        PaneArrangement::Stacked if main.height >= 6 => {
            let top_height = main.height / 2;
            let top = Rect::new(main.x, main.y, main.width, top_height);
            let bottom = Rect::new(main.x, main.y + top_height, main.width, main.height - top_height);
            (Some(top), Some(bottom))
        }
        _ => (None, None),
    }
}

/// Outer width of the box score pane for a given terminal width (6:4 split).
pub fn box_pane_width(width: u16) -> u16 {
    match PaneArrangement::for_width(width) {
        PaneArrangement::SideBySide => (u32::from(width) * 6 / 10) as u16,
        PaneArrangement::Stacked => width,
    }
}

/// Columns of the box score table visible inside its border.
pub fn box_content_width(width: u16) -> u16 {
    box_pane_width(width).saturating_sub(2)
}

/// Number of scoreboard cards per row. Never less than one.
///
/// `card_width` is raised to the drawn card width so that every column
/// reported here is one the grid can actually draw.
pub fn grid_columns(width: u16, card_width: u16) -> usize {
    let card_width = card_width.max(CARD_WIDTH);
    usize::from(width / card_width).max(1)
}
