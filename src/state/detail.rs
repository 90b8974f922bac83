use chrono::{DateTime, Local};
use log::debug;
use nba_api::{Action, BoxScore, PlayByPlay, TeamSnapshot, game_url};

use crate::components::box_score::max_column_offset;
use crate::components::game_log::QUARTERS;
use crate::state::messages::{Command, NetworkRequest, UserAction};
use crate::state::search::{filter_actions, search_actions};
use crate::ui::layout::box_content_width;

/// Longest search query accepted.
pub const QUERY_CHAR_LIMIT: usize = 156;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    BoxScore,
    GameLog,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Home,
    Away,
}

impl Side {
    pub fn toggle(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// The two feeds behind the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    BoxScore,
    PlayByPlay,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// The prompt is open and keys edit `query`.
    pub active: bool,
    pub query: String,
    /// Last confirmed query, re-run when new play-by-play arrives.
    pub confirmed: Option<String>,
    pub matches: Vec<usize>,
    pub cursor: usize,
}

impl SearchState {
    fn clear_results(&mut self) {
        self.matches.clear();
        self.cursor = 0;
        self.confirmed = None;
    }
}

/// View state of the game detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub game_id: String,
    pub box_score: Option<BoxScore>,
    pub play_by_play: Option<PlayByPlay>,
    pub side: Side,
    pub quarter: u8,
    pub focus: Focus,
    pub box_offset: usize,
    pub box_scroll_x: usize,
    pub log_offset: usize,
    pub search: SearchState,
    pub width: u16,
    pub last_updated: Option<DateTime<Local>>,
    /// Last failure of each feed, cleared only by that feed's next success.
    pub box_score_error: Option<String>,
    pub play_by_play_error: Option<String>,
}

impl DetailState {
    pub fn new(game_id: impl Into<String>, width: u16) -> Self {
        Self {
            game_id: game_id.into(),
            box_score: None,
            play_by_play: None,
            side: Side::Home,
            quarter: 1,
            focus: Focus::BoxScore,
            box_offset: 0,
            box_scroll_x: 0,
            log_offset: 0,
            search: SearchState::default(),
            width,
            last_updated: None,
            box_score_error: None,
            play_by_play_error: None,
        }
    }

    /// Fetches that (re)load everything this screen shows.
    pub fn fetch_commands(&self) -> Vec<Command> {
        vec![
            Command::Fetch(NetworkRequest::LoadBoxScore { game_id: self.game_id.clone() }),
            Command::Fetch(NetworkRequest::LoadPlayByPlay { game_id: self.game_id.clone() }),
        ]
    }

    pub fn current_team(&self) -> Option<&TeamSnapshot> {
        let game = &self.box_score.as_ref()?.game;
        Some(match self.side {
            Side::Home => &game.home,
            Side::Away => &game.away,
        })
    }

    /// Play-by-play for the selected quarter and team.
    pub fn visible_actions(&self) -> Vec<&Action> {
        match (&self.play_by_play, self.current_team()) {
            (Some(pbp), Some(team)) => filter_actions(&pbp.actions, self.quarter, team.id),
            _ => Vec::new(),
        }
    }

    pub fn roster_len(&self) -> usize {
        self.current_team()
            .and_then(TeamSnapshot::roster)
            .map_or(0, |roster| roster.len())
    }

    fn max_box_scroll_x(&self) -> usize {
        max_column_offset(box_content_width(self.width) as usize)
    }

    fn clamp_offsets(mut self) -> Self {
        let rows = self.roster_len();
        let actions = self.visible_actions().len();
        let max_x = self.max_box_scroll_x();
        self.box_offset = self.box_offset.min(rows.saturating_sub(1));
        self.log_offset = self.log_offset.min(actions.saturating_sub(1));
        self.box_scroll_x = self.box_scroll_x.min(max_x);
        self
    }

    pub fn handle(mut self, action: UserAction) -> (Self, Vec<Command>) {
        if self.search.active {
            return (self.handle_search(action), Vec::new());
        }

        match action {
            UserAction::StartSearch => {
                self.search.active = true;
                self.search.query.clear();
            }
            UserAction::NextMatch => self = self.step_match(true),
            UserAction::PrevMatch => self = self.step_match(false),
            UserAction::ToggleSide => {
                self.side = self.side.toggle();
                self = self.reset_log();
            }
            UserAction::NextQuarter => {
                self.quarter = self.quarter % QUARTERS + 1;
                self = self.reset_log();
            }
            UserAction::FocusBoxScore => self.focus = Focus::BoxScore,
            UserAction::FocusGameLog => self.focus = Focus::GameLog,
            UserAction::OpenInBrowser => {
                let url = self.watch_url();
                return (self, vec![Command::OpenUrl(url)]);
            }
            UserAction::Left | UserAction::Right | UserAction::Up | UserAction::Down => {
                self = self.navigate(action);
            }
            _ => {}
        }
        (self, Vec::new())
    }

    /// URL for the "watch" key.
    pub fn watch_url(&self) -> String {
        game_url(&self.game_id)
    }

    fn navigate(mut self, action: UserAction) -> Self {
        match (self.focus, action) {
            (Focus::BoxScore, UserAction::Left) => {
                self.box_scroll_x = self.box_scroll_x.saturating_sub(1);
            }
            (Focus::BoxScore, UserAction::Right) => {
                if self.box_scroll_x < self.max_box_scroll_x() {
                    self.box_scroll_x += 1;
                }
            }
            (Focus::BoxScore, UserAction::Up) => {
                self.box_offset = self.box_offset.saturating_sub(1);
            }
            (Focus::BoxScore, UserAction::Down) => {
                if self.box_offset + 1 < self.roster_len() {
                    self.box_offset += 1;
                }
            }
            (Focus::GameLog, UserAction::Up) => {
                self.log_offset = self.log_offset.saturating_sub(1);
            }
            (Focus::GameLog, UserAction::Down) => {
                if self.log_offset + 1 < self.visible_actions().len() {
                    self.log_offset += 1;
                }
            }
            _ => {}
        }
        self
    }

    fn handle_search(mut self, action: UserAction) -> Self {
        match action {
            UserAction::SearchInput(c) => {
                if self.search.query.chars().count() < QUERY_CHAR_LIMIT {
                    self.search.query.push(c);
                }
            }
            UserAction::SearchBackspace => {
                self.search.query.pop();
            }
            UserAction::SearchConfirm => {
                self.search.active = false;
                let query = std::mem::take(&mut self.search.query);
                let matches = search_actions(&self.visible_actions(), &query);
                self.search.confirmed = (!query.is_empty()).then_some(query);
                self.search.matches = matches;
                self.search.cursor = 0;
                if let Some(&first) = self.search.matches.first() {
                    self.log_offset = first;
                    self.focus = Focus::GameLog;
                }
            }
            UserAction::SearchCancel => {
                self.search.active = false;
                self.search.query.clear();
            }
            _ => {}
        }
        self
    }

    fn step_match(mut self, forward: bool) -> Self {
        let len = self.search.matches.len();
        if len == 0 {
            return self;
        }
        self.search.cursor = if forward {
            (self.search.cursor + 1) % len
        } else {
            (self.search.cursor + len - 1) % len
        };
        self.log_offset = self.search.matches[self.search.cursor];
        self.focus = Focus::GameLog;
        self
    }

    fn reset_log(mut self) -> Self {
        self.log_offset = 0;
        self.search.clear_results();
        self.clamp_offsets()
    }

    pub fn on_box_score(mut self, box_score: BoxScore) -> Self {
        self.box_score = Some(box_score);
        self.last_updated = Some(Local::now());
        self.box_score_error = None;
        self.refresh_matches().clamp_offsets()
    }

    pub fn on_play_by_play(mut self, play_by_play: PlayByPlay) -> Self {
        self.play_by_play = Some(play_by_play);
        self.last_updated = Some(Local::now());
        self.play_by_play_error = None;
        self.refresh_matches().clamp_offsets()
    }

    pub fn on_error(mut self, feed: Feed, message: String) -> Self {
        match feed {
            Feed::BoxScore => self.box_score_error = Some(message),
            Feed::PlayByPlay => self.play_by_play_error = Some(message),
        }
        self
    }

    /// The failure to show, box score first.
    pub fn error(&self) -> Option<&str> {
        self.box_score_error.as_deref().or(self.play_by_play_error.as_deref())
    }

    pub fn resize(mut self, width: u16) -> Self {
        self.width = width;
        self.clamp_offsets()
    }

    /// Re-run the confirmed query against fresh data without moving the view.
    fn refresh_matches(mut self) -> Self {
        let Some(query) = &self.search.confirmed else {
            return self;
        };
        let matches = search_actions(&self.visible_actions(), query);
        if matches != self.search.matches {
            debug!("search matches for {query:?} now {}", matches.len());
        }
        self.search.cursor = self.search.cursor.min(matches.len().saturating_sub(1));
        self.search.matches = matches;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nba_api::{Game, Player, Statistics};

    const HOME: i64 = 1;
    const AWAY: i64 = 2;

    fn roster(n: usize) -> Vec<Player> {
        (0..n)
            .map(|i| Player {
                id: i as i64,
                family_name: format!("P{i}"),
                statistics: Some(Statistics::default()),
                ..Player::default()
            })
            .collect()
    }

    fn box_score() -> BoxScore {
        let mut game = Game { id: "g1".into(), ..Game::default() };
        game.home.id = HOME;
        game.home.tricode = "OKC".into();
        game.home.players = Some(roster(5));
        game.away.id = AWAY;
        game.away.tricode = "DEN".into();
        game.away.players = Some(roster(2));
        BoxScore { game }
    }

    fn action(period: u8, team_id: i64, description: &str) -> Action {
        Action { period, team_id, description: description.into(), ..Action::default() }
    }

    fn play_by_play() -> PlayByPlay {
        PlayByPlay {
            game_id: "g1".into(),
            actions: vec![
                action(1, HOME, "Shai 3PT Jump Shot"),
                action(1, HOME, "Holmgren REBOUND"),
                action(1, AWAY, "Jokic layup"),
                action(1, HOME, "MISS shai layup"),
                action(2, HOME, "Dort dunk"),
                action(2, HOME, "Shai free throw"),
            ],
        }
    }

    fn loaded() -> DetailState {
        DetailState::new("g1", 120)
            .on_box_score(box_score())
            .on_play_by_play(play_by_play())
    }

    fn press(state: DetailState, actions: &[UserAction]) -> DetailState {
        actions.iter().fold(state, |s, a| s.handle(*a).0)
    }

    fn search(state: DetailState, query: &str) -> DetailState {
        let mut state = state.handle(UserAction::StartSearch).0;
        for c in query.chars() {
            state = state.handle(UserAction::SearchInput(c)).0;
        }
        state.handle(UserAction::SearchConfirm).0
    }

    #[test]
    fn test_fetch_commands() {
        let state = DetailState::new("g1", 80);
        assert_eq!(
            state.fetch_commands(),
            vec![
                Command::Fetch(NetworkRequest::LoadBoxScore { game_id: "g1".into() }),
                Command::Fetch(NetworkRequest::LoadPlayByPlay { game_id: "g1".into() }),
            ]
        );
        assert_eq!(state.watch_url(), "https://www.nba.com/game/g1");
    }

    #[test]
    fn test_quarter_cycle_wraps() {
        let mut state = loaded();
        let seen: Vec<u8> = (0..5)
            .map(|_| {
                state = state.clone().handle(UserAction::NextQuarter).0;
                state.quarter
            })
            .collect();
        assert_eq!(seen, vec![2, 3, 4, 1, 2]);
    }

    #[test]
    fn test_visible_actions_follow_quarter_and_side() {
        let state = press(loaded(), &[UserAction::FocusGameLog]);
        assert_eq!(state.visible_actions().len(), 3);

        let state = press(state, &[UserAction::NextQuarter]);
        let descriptions: Vec<&str> =
            state.visible_actions().iter().map(|a| a.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Dort dunk", "Shai free throw"]);

        let state = press(state, &[UserAction::ToggleSide]);
        assert!(state.visible_actions().is_empty());
    }

    #[test]
    fn test_box_navigation_is_idempotent_at_both_ends() {
        let state = press(loaded(), &[UserAction::Up]);
        assert_eq!(state.box_offset, 0);

        let state = press(state, &[UserAction::Down; 10]);
        assert_eq!(state.box_offset, 4);
        let state = press(state, &[UserAction::Down]);
        assert_eq!(state.box_offset, 4);
    }

    #[test]
    fn test_log_navigation_is_idempotent_at_both_ends() {
        let state = press(loaded(), &[UserAction::FocusGameLog, UserAction::Up]);
        assert_eq!(state.log_offset, 0);

        let state = press(state, &[UserAction::Down; 5]);
        assert_eq!(state.log_offset, 2);
        assert_eq!(state.box_offset, 0);
    }

    #[test]
    fn test_horizontal_scroll_saturates() {
        let state = loaded();
        let max = max_column_offset(box_content_width(state.width) as usize);
        assert!(max > 0);

        let at_edge = press(state, &vec![UserAction::Right; max + 5]);
        assert_eq!(at_edge.box_scroll_x, max);
        let again = press(at_edge.clone(), &[UserAction::Right]);
        assert_eq!(again, at_edge);

        let back = press(again, &[UserAction::Left; 200]);
        assert_eq!(back.box_scroll_x, 0);
    }

    #[test]
    fn test_log_focus_ignores_left_right() {
        let state = press(loaded(), &[UserAction::FocusGameLog, UserAction::Right, UserAction::Right]);
        assert_eq!(state.box_scroll_x, 0);
    }

    #[test]
    fn test_search_confirm_jumps_to_first_match() {
        let state = search(loaded(), "SHAI");
        assert!(!state.search.active);
        assert_eq!(state.search.matches, vec![0, 2]);
        assert_eq!(state.search.cursor, 0);
        assert_eq!(state.log_offset, 0);
        assert_eq!(state.focus, Focus::GameLog);
        assert_eq!(state.search.confirmed.as_deref(), Some("SHAI"));
    }

    #[test]
    fn test_search_without_matches_changes_nothing_else() {
        let state = press(loaded(), &[UserAction::Down]);
        let state = search(state, "curry");
        assert!(state.search.matches.is_empty());
        assert_eq!(state.focus, Focus::BoxScore);
        assert_eq!(state.box_offset, 1);
    }

    #[test]
    fn test_next_and_previous_match_wrap() {
        let state = search(loaded(), "shai");
        let state = press(state, &[UserAction::FocusBoxScore, UserAction::NextMatch]);
        assert_eq!(state.search.cursor, 1);
        assert_eq!(state.log_offset, 2);
        assert_eq!(state.focus, Focus::GameLog);

        let state = press(state, &[UserAction::NextMatch]);
        assert_eq!(state.search.cursor, 0);
        assert_eq!(state.log_offset, 0);

        let state = press(state, &[UserAction::PrevMatch]);
        assert_eq!(state.search.cursor, 1);
        assert_eq!(state.log_offset, 2);
    }

    #[test]
    fn test_match_keys_without_matches_are_inert() {
        let state = loaded();
        let after = press(state.clone(), &[UserAction::NextMatch, UserAction::PrevMatch]);
        assert_eq!(after, state);
    }

    #[test]
    fn test_cancel_has_no_side_effects() {
        let before = search(loaded(), "shai");
        let mut state = before.clone().handle(UserAction::StartSearch).0;
        for c in "dort".chars() {
            state = state.handle(UserAction::SearchInput(c)).0;
        }
        let state = state.handle(UserAction::SearchCancel).0;
        assert_eq!(state, before);
    }

    #[test]
    fn test_search_mode_captures_keys() {
        let state = press(loaded(), &[UserAction::StartSearch]);
        let (state, commands) = state.handle(UserAction::NextQuarter);
        assert!(commands.is_empty());
        assert_eq!(state.quarter, 1);

        let state = press(
            state,
            &[UserAction::SearchInput('a'), UserAction::SearchInput('b'), UserAction::SearchBackspace],
        );
        assert_eq!(state.search.query, "a");
    }

    #[test]
    fn test_query_length_is_capped() {
        let mut state = press(loaded(), &[UserAction::StartSearch]);
        for _ in 0..200 {
            state = state.handle(UserAction::SearchInput('x')).0;
        }
        assert_eq!(state.search.query.chars().count(), QUERY_CHAR_LIMIT);
    }

    #[test]
    fn test_side_and_quarter_reset_search() {
        let state = search(loaded(), "shai");
        let state = press(state, &[UserAction::Down]);
        let toggled = press(state.clone(), &[UserAction::ToggleSide]);
        assert_eq!(toggled.side, Side::Away);
        assert_eq!(toggled.log_offset, 0);
        assert!(toggled.search.matches.is_empty());
        assert_eq!(toggled.search.confirmed, None);

        let next = press(state, &[UserAction::NextQuarter]);
        assert_eq!(next.log_offset, 0);
        assert!(next.search.matches.is_empty());
    }

    #[test]
    fn test_toggle_side_clamps_box_offset() {
        let state = press(loaded(), &[UserAction::Down; 4]);
        assert_eq!(state.box_offset, 4);
        let state = press(state, &[UserAction::ToggleSide]);
        assert_eq!(state.box_offset, 1);
    }

    #[test]
    fn test_refresh_keeps_search_and_view() {
        let state = search(loaded(), "shai");
        let state = press(state, &[UserAction::NextMatch, UserAction::FocusBoxScore]);
        assert_eq!(state.search.cursor, 1);

        let mut fresh = play_by_play();
        fresh.actions.insert(0, action(1, HOME, "Shai steal"));
        let state = state.on_play_by_play(fresh);

        assert_eq!(state.search.matches, vec![0, 1, 3]);
        assert_eq!(state.search.cursor, 1);
        assert_eq!(state.log_offset, 2);
        assert_eq!(state.focus, Focus::BoxScore);
    }

    #[test]
    fn test_refresh_clamps_offsets_to_new_data() {
        let state = search(loaded(), "shai");
        let state = press(state, &[UserAction::NextMatch]);
        assert_eq!(state.log_offset, 2);
        assert_eq!(state.search.cursor, 1);

        let shorter = PlayByPlay {
            game_id: "g1".into(),
            actions: vec![action(1, HOME, "Holmgren dunk")],
        };
        let state = state.on_play_by_play(shorter);
        assert_eq!(state.log_offset, 0);
        assert!(state.search.matches.is_empty());
        assert_eq!(state.search.cursor, 0);
    }

    #[test]
    fn test_resize_clamps_horizontal_scroll() {
        let state = press(loaded(), &[UserAction::Right; 200]);
        let narrow_max = state.box_scroll_x;
        let state = state.resize(300);
        assert_eq!(state.box_scroll_x, 0);
        assert!(narrow_max > 0);
    }

    #[test]
    fn test_errors_are_kept_until_next_success() {
        let state = loaded().on_error(Feed::BoxScore, "boom".into());
        assert_eq!(state.error(), Some("boom"));
        assert!(state.box_score.is_some());
        let state = state.on_box_score(box_score());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_only_the_failed_feed_clears_its_error() {
        let state = loaded().on_error(Feed::PlayByPlay, "503".into());
        let state = state.on_box_score(box_score());
        assert_eq!(state.error(), Some("503"));
        let state = state.on_play_by_play(play_by_play());
        assert_eq!(state.error(), None);

        let state = state.on_error(Feed::BoxScore, "404".into());
        let state = state.on_play_by_play(play_by_play());
        assert_eq!(state.error(), Some("404"));

        let state = state.on_error(Feed::PlayByPlay, "timeout".into());
        assert_eq!(state.error(), Some("404"));
        let state = state.on_box_score(box_score());
        assert_eq!(state.error(), Some("timeout"));
    }
}
