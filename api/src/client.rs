use crate::cdn::{
    BoxScoreResponse, CdnAction, CdnGame, CdnPlayer, CdnStatistics, CdnTeam, PlayByPlayResponse,
    ScoreboardResponse,
};
use crate::{
    Action, BoxScore, Game, GameStatus, NbaClient, PlayByPlay, Player, Statistics, TeamSnapshot,
};
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const NBA_LIVE_DATA: &str = "https://cdn.nba.com/static/json/liveData";

/// NBA API client backed by the public live-data CDN.
#[derive(Debug, Clone)]
pub struct NbaApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for NbaApi {
    fn default() -> Self {
        Self::with_base_url(NBA_LIVE_DATA)
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    NotFound(String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl NbaApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another host serving the same paths (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent("nbatui/0.1 (terminal scoreboard)")
                .build()
                .unwrap_or_default(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => {
                // The CDN answers 403/404 for games whose feeds are not published yet.
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    Err(ApiError::NotFound(url.to_owned()))
                } else {
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }
}

impl NbaClient for NbaApi {
    /// Fetch today's games.
    async fn fetch_scoreboard(&self) -> ApiResult<Vec<Game>> {
        let url = format!("{}/scoreboard/todaysScoreboard_00.json", self.base_url);
        let raw: ScoreboardResponse = self.get(&url).await?;
        let games = raw
            .scoreboard
            .and_then(|s| s.games)
            .unwrap_or_default()
            .into_iter()
            .map(map_game)
            .collect();
        Ok(games)
    }

    /// Fetch the box score (game header, rosters, team totals).
    async fn fetch_box_score(&self, game_id: &str) -> ApiResult<BoxScore> {
        let url = format!("{}/boxscore/boxscore_{game_id}.json", self.base_url);
        let raw: BoxScoreResponse = self.get(&url).await?;
        let game = raw
            .game
            .ok_or_else(|| ApiError::Other(format!("box score for {game_id} has no game")))?;
        Ok(BoxScore { game: map_game(game) })
    }

    /// Fetch the full play-by-play for a game.
    async fn fetch_play_by_play(&self, game_id: &str) -> ApiResult<PlayByPlay> {
        let url = format!("{}/playbyplay/playbyplay_{game_id}.json", self.base_url);
        let raw: PlayByPlayResponse = self.get(&url).await?;
        Ok(map_play_by_play(game_id, raw))
    }
}

// ---------------------------------------------------------------------------
// Mapping: CDN wire types → clean domain types
// ---------------------------------------------------------------------------

fn map_game(raw: CdnGame) -> Game {
    let start_time = raw
        .game_time_utc
        .as_deref()
        .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
        .map(|dt| dt.with_timezone(&Utc));

    Game {
        id: raw.game_id.unwrap_or_default(),
        status: raw.game_status.map(GameStatus::from_code).unwrap_or_default(),
        status_text: raw.game_status_text.unwrap_or_default().trim().to_string(),
        period: raw.period.unwrap_or_default(),
        clock: raw.game_clock.unwrap_or_default(),
        start_time,
        home: raw.home_team.map(map_team).unwrap_or_default(),
        away: raw.away_team.map(map_team).unwrap_or_default(),
    }
}

fn map_team(raw: CdnTeam) -> TeamSnapshot {
    TeamSnapshot {
        id: raw.team_id.unwrap_or_default(),
        name: raw.team_name.unwrap_or_default(),
        tricode: raw.team_tricode.unwrap_or_default(),
        score: raw.score.unwrap_or_default(),
        players: raw
            .players
            .map(|players| players.into_iter().map(map_player).collect()),
        statistics: raw.statistics.map(map_statistics),
    }
}

fn map_player(raw: CdnPlayer) -> Player {
    Player {
        id: raw.person_id.unwrap_or_default(),
        first_name: raw.first_name.unwrap_or_default(),
        family_name: raw.family_name.unwrap_or_default(),
        active: raw.status.as_deref() != Some("INACTIVE"),
        statistics: raw.statistics.map(map_statistics),
    }
}

fn map_statistics(raw: CdnStatistics) -> Statistics {
    Statistics {
        minutes: raw.minutes.filter(|m| !m.is_empty()),
        points: raw.points,
        field_goals_made: raw.field_goals_made,
        field_goals_attempted: raw.field_goals_attempted,
        field_goals_pct: raw.field_goals_percentage,
        threes_made: raw.three_pointers_made,
        threes_attempted: raw.three_pointers_attempted,
        threes_pct: raw.three_pointers_percentage,
        free_throws_made: raw.free_throws_made,
        free_throws_attempted: raw.free_throws_attempted,
        free_throws_pct: raw.free_throws_percentage,
        rebounds_offensive: raw.rebounds_offensive,
        rebounds_defensive: raw.rebounds_defensive,
        rebounds: raw.rebounds_total,
        assists: raw.assists,
        steals: raw.steals,
        blocks: raw.blocks,
        turnovers: raw.turnovers,
        fouls: raw.fouls_personal,
        plus_minus: raw.plus_minus_points,
    }
}

fn map_play_by_play(game_id: &str, raw: PlayByPlayResponse) -> PlayByPlay {
    let game = raw.game.unwrap_or_default();
    PlayByPlay {
        game_id: game.game_id.unwrap_or_else(|| game_id.to_owned()),
        actions: game
            .actions
            .unwrap_or_default()
            .into_iter()
            .map(map_action)
            .collect(),
    }
}

fn map_action(raw: CdnAction) -> Action {
    Action {
        number: raw.action_number.unwrap_or_default(),
        clock: raw.clock.unwrap_or_default(),
        period: raw.period.unwrap_or_default(),
        team_id: raw.team_id.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
    }
}
