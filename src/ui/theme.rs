use tui::style::{Color, Modifier, Style};
use tui::widgets::{Block, BorderType, Borders};

/// Styles shared by every screen. Built once at startup and handed to the
/// draw functions by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub active_border: Style,
    pub table_header: Style,
    pub rule: Style,
    pub bold: Style,
    pub faint: Style,
    pub underline: Style,
    pub positive: Style,
    pub negative: Style,
    pub highlight: Style,
    pub error: Style,
    pub help: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Indexed(240)),
            active_border: Style::default().fg(Color::Green),
            table_header: Style::default().add_modifier(Modifier::BOLD),
            rule: Style::default().fg(Color::Indexed(240)),
            bold: Style::default().add_modifier(Modifier::BOLD),
            faint: Style::default().add_modifier(Modifier::DIM),
            underline: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::UNDERLINED),
            positive: Style::default().fg(Color::Green),
            negative: Style::default().fg(Color::Red),
            highlight: Style::default().fg(Color::Black).bg(Color::Yellow),
            error: Style::default().fg(Color::Red),
            help: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Plain bordered block; green border when `active`.
    pub fn pane<'a>(&self, active: bool) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(if active { self.active_border } else { self.border })
    }
}
