use crate::keys::map_key;
use crate::state::app_settings::AppSettings;
use crate::state::detail::{DetailState, Feed};
use crate::state::messages::{Command, NetworkRequest, NetworkResponse, UiEvent, UserAction};
use crate::state::network::LoadingState;
use crate::state::scoreboard::ScoreboardState;
use crate::ui::theme::Theme;
use log::{debug, error};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Scoreboard,
    Detail,
}

/// Root of the view state. Owned by the main loop; every event goes through
/// [`App::update`] or [`App::on_network_response`], which hand back the next
/// state.
pub struct App {
    pub settings: AppSettings,
    pub theme: Theme,
    pub screen: Screen,
    pub scoreboard: ScoreboardState,
    pub detail: Option<DetailState>,
    pub loading: LoadingState,
    pub spinner_frame: usize,
    pub show_logs: bool,
    pub width: u16,
}

impl App {
    pub fn new(settings: AppSettings, width: u16) -> Self {
        let scoreboard = ScoreboardState::new(settings.card_width, width);
        Self {
            settings,
            theme: Theme::default(),
            screen: Screen::Scoreboard,
            scoreboard,
            detail: None,
            loading: LoadingState::default(),
            spinner_frame: 0,
            show_logs: false,
            width,
        }
    }

    /// Whether the detail screen's search prompt owns the keyboard.
    pub fn searching(&self) -> bool {
        self.screen == Screen::Detail && self.detail.as_ref().is_some_and(|d| d.search.active)
    }

    pub fn update(mut self, event: UiEvent) -> (Self, Vec<Command>) {
        match event {
            UiEvent::AppStarted => {
                let commands = self.scoreboard.fetch_commands();
                (self, commands)
            }
            UiEvent::KeyPressed(key_event) => {
                match map_key(key_event, self.screen, self.searching()) {
                    Some(action) => self.on_action(action),
                    None => (self, Vec::new()),
                }
            }
            UiEvent::Resize(width) => (self.resize(width), Vec::new()),
            UiEvent::AnimationTick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                (self, Vec::new())
            }
            UiEvent::RefreshTick => {
                let commands = match (&self.screen, &self.detail) {
                    (Screen::Detail, Some(detail)) => detail.fetch_commands(),
                    _ => self.scoreboard.fetch_commands(),
                };
                (self, commands)
            }
        }
    }

    fn on_action(mut self, action: UserAction) -> (Self, Vec<Command>) {
        match (self.screen, action) {
            (_, UserAction::ToggleLogs) => {
                self.show_logs = !self.show_logs;
                (self, Vec::new())
            }
            (_, UserAction::Quit) => (self, vec![Command::Quit]),
            (Screen::Detail, UserAction::Back) => self.leave_detail(),
            (Screen::Scoreboard, _) => {
                let (scoreboard, commands) = self.scoreboard.handle(action);
                self.scoreboard = scoreboard;
                self.route(commands)
            }
            (Screen::Detail, _) => match self.detail.take() {
                Some(detail) => {
                    let (detail, commands) = detail.handle(action);
                    self.detail = Some(detail);
                    (self, commands)
                }
                None => (self, Vec::new()),
            },
        }
    }

    /// Turn screen signals into screen changes; pass everything else through.
    fn route(mut self, commands: Vec<Command>) -> (Self, Vec<Command>) {
        let mut out = Vec::with_capacity(commands.len());
        for command in commands {
            match command {
                Command::SelectGame(game_id) => {
                    let (app, more) = self.enter_detail(game_id);
                    self = app;
                    out.extend(more);
                }
                other => out.push(other),
            }
        }
        (self, out)
    }

    fn enter_detail(mut self, game_id: String) -> (Self, Vec<Command>) {
        debug!("showing game {game_id}");
        let detail = DetailState::new(game_id, self.width);
        let mut commands = detail.fetch_commands();
        commands.push(Command::ResetRefreshTimer);
        self.detail = Some(detail);
        self.screen = Screen::Detail;
        (self, commands)
    }

    fn leave_detail(mut self) -> (Self, Vec<Command>) {
        self.detail = None;
        self.screen = Screen::Scoreboard;
        let mut commands = self.scoreboard.fetch_commands();
        commands.push(Command::ResetRefreshTimer);
        (self, commands)
    }

    fn resize(mut self, width: u16) -> Self {
        self.width = width;
        self.scoreboard = self.scoreboard.resize(width);
        self.detail = self.detail.map(|d| d.resize(width));
        self
    }

    pub fn on_network_response(mut self, response: NetworkResponse) -> Self {
        match response {
            NetworkResponse::LoadingStateChanged { loading_state } => {
                self.loading = loading_state;
            }
            NetworkResponse::ScoreboardLoaded { games } => {
                self.scoreboard = self.scoreboard.on_games(games);
            }
            NetworkResponse::BoxScoreLoaded { game_id, box_score } => {
                self.detail = match self.detail {
                    Some(d) if d.game_id == game_id => Some(d.on_box_score(box_score)),
                    other => {
                        debug!("dropping box score for {game_id}, no longer shown");
                        other
                    }
                };
            }
            NetworkResponse::PlayByPlayLoaded { game_id, play_by_play } => {
                self.detail = match self.detail {
                    Some(d) if d.game_id == game_id => Some(d.on_play_by_play(play_by_play)),
                    other => {
                        debug!("dropping play-by-play for {game_id}, no longer shown");
                        other
                    }
                };
            }
            NetworkResponse::Error { request, message } => {
                error!("Network error: {message}");
                match request {
                    NetworkRequest::LoadScoreboard => {
                        self.scoreboard = self.scoreboard.on_error(message);
                    }
                    NetworkRequest::LoadBoxScore { game_id } => {
                        self.detail = match self.detail {
                            Some(d) if d.game_id == game_id => {
                                Some(d.on_error(Feed::BoxScore, message))
                            }
                            other => other,
                        };
                    }
                    NetworkRequest::LoadPlayByPlay { game_id } => {
                        self.detail = match self.detail {
                            Some(d) if d.game_id == game_id => {
                                Some(d.on_error(Feed::PlayByPlay, message))
                            }
                            other => other,
                        };
                    }
                }
            }
        }
        self
    }
}
