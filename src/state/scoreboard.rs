use chrono::{DateTime, Local};
use nba_api::{Game, game_url};

use crate::state::messages::{Command, NetworkRequest, UserAction};
use crate::ui::layout::grid_columns;

/// View state of the scoreboard grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreboardState {
    pub games: Vec<Game>,
    pub focus: usize,
    pub columns: usize,
    pub card_width: u16,
    /// `None` until the first successful fetch.
    pub last_updated: Option<DateTime<Local>>,
    pub error: Option<String>,
}

impl ScoreboardState {
    pub fn new(card_width: u16, width: u16) -> Self {
        Self {
            games: Vec::new(),
            focus: 0,
            columns: grid_columns(width, card_width),
            card_width,
            last_updated: None,
            error: None,
        }
    }

    pub fn fetch_commands(&self) -> Vec<Command> {
        vec![Command::Fetch(NetworkRequest::LoadScoreboard)]
    }

    pub fn focused_game(&self) -> Option<&Game> {
        self.games.get(self.focus)
    }

    pub fn handle(mut self, action: UserAction) -> (Self, Vec<Command>) {
        let len = self.games.len();
        match action {
            UserAction::Left => self.focus = self.focus.saturating_sub(1),
            UserAction::Right => {
                if self.focus + 1 < len {
                    self.focus += 1;
                }
            }
            UserAction::Up => {
                if self.focus >= self.columns {
                    self.focus -= self.columns;
                }
            }
            UserAction::Down => {
                if self.focus + self.columns < len {
                    self.focus += self.columns;
                }
            }
            UserAction::Select => {
                if let Some(game) = self.focused_game() {
                    let id = game.id.clone();
                    return (self, vec![Command::SelectGame(id)]);
                }
            }
            UserAction::OpenInBrowser => {
                if let Some(game) = self.focused_game() {
                    let url = game_url(&game.id);
                    return (self, vec![Command::OpenUrl(url)]);
                }
            }
            UserAction::Quit | UserAction::Back => return (self, vec![Command::Quit]),
            _ => {}
        }
        (self, Vec::new())
    }

    pub fn on_games(mut self, games: Vec<Game>) -> Self {
        self.games = games;
        self.focus = self.focus.min(self.games.len().saturating_sub(1));
        self.last_updated = Some(Local::now());
        self.error = None;
        self
    }

    pub fn on_error(mut self, message: String) -> Self {
        self.error = Some(message);
        self
    }

    pub fn resize(mut self, width: u16) -> Self {
        self.columns = grid_columns(width, self.card_width);
        self
    }
}
