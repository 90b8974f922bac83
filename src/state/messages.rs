use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use nba_api::{BoxScore, Game, PlayByPlay};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkRequest {
    LoadScoreboard,
    LoadBoxScore { game_id: String },
    LoadPlayByPlay { game_id: String },
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    ScoreboardLoaded { games: Vec<Game> },
    BoxScoreLoaded { game_id: String, box_score: BoxScore },
    PlayByPlayLoaded { game_id: String, play_by_play: PlayByPlay },
    Error { request: NetworkRequest, message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    /// New terminal width.
    Resize(u16),
    AppStarted,
    AnimationTick,
    RefreshTick,
}

/// What a key press means on the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Quit,
    Back,
    Left,
    Right,
    Up,
    Down,
    Select,
    OpenInBrowser,
    ToggleSide,
    NextQuarter,
    FocusBoxScore,
    FocusGameLog,
    StartSearch,
    NextMatch,
    PrevMatch,
    SearchInput(char),
    SearchBackspace,
    SearchConfirm,
    SearchCancel,
    ToggleLogs,
}

/// Side effects requested by a reducer, carried out by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fetch(NetworkRequest),
    OpenUrl(String),
    /// Raised by the scoreboard; the root turns it into a detail screen.
    SelectGame(String),
    ResetRefreshTimer,
    Quit,
}
