//! Raw wire types of the NBA live-data CDN, deserialized with serde.
//! These map to our clean domain types via the mapping functions in client.rs.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Scoreboard  (scoreboard/todaysScoreboard_00.json)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    pub scoreboard: Option<CdnScoreboard>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CdnScoreboard {
    pub game_date: Option<String>,
    pub games: Option<Vec<CdnGame>>,
}

/// Game header shared by the scoreboard and box score feeds. The box score
/// variant additionally carries rosters and team statistics.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CdnGame {
    pub game_id: Option<String>,
    pub game_status: Option<u8>,
    pub game_status_text: Option<String>,
    pub period: Option<u8>,
    pub game_clock: Option<String>,
    #[serde(rename = "gameTimeUTC")]
    pub game_time_utc: Option<String>,
    pub home_team: Option<CdnTeam>,
    pub away_team: Option<CdnTeam>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CdnTeam {
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub team_tricode: Option<String>,
    pub score: Option<u16>,
    pub players: Option<Vec<CdnPlayer>>,
    pub statistics: Option<CdnStatistics>,
}

// ---------------------------------------------------------------------------
// Box score  (boxscore/boxscore_{gameId}.json)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BoxScoreResponse {
    pub game: Option<CdnGame>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CdnPlayer {
    pub person_id: Option<i64>,
    pub first_name: Option<String>,
    pub family_name: Option<String>,
    /// "ACTIVE" or "INACTIVE".
    pub status: Option<String>,
    pub statistics: Option<CdnStatistics>,
}

/// Statistics block used for both players and team totals.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CdnStatistics {
    pub minutes: Option<String>,
    pub points: Option<i32>,
    pub field_goals_made: Option<i32>,
    pub field_goals_attempted: Option<i32>,
    pub field_goals_percentage: Option<f64>,
    pub three_pointers_made: Option<i32>,
    pub three_pointers_attempted: Option<i32>,
    pub three_pointers_percentage: Option<f64>,
    pub free_throws_made: Option<i32>,
    pub free_throws_attempted: Option<i32>,
    pub free_throws_percentage: Option<f64>,
    pub rebounds_offensive: Option<i32>,
    pub rebounds_defensive: Option<i32>,
    pub rebounds_total: Option<i32>,
    pub assists: Option<i32>,
    pub steals: Option<i32>,
    pub blocks: Option<i32>,
    pub turnovers: Option<i32>,
    pub fouls_personal: Option<i32>,
    pub plus_minus_points: Option<f64>,
}

// ---------------------------------------------------------------------------
// Play-by-play  (playbyplay/playbyplay_{gameId}.json)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct PlayByPlayResponse {
    pub game: Option<CdnPlayByPlayGame>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CdnPlayByPlayGame {
    pub game_id: Option<String>,
    pub actions: Option<Vec<CdnAction>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CdnAction {
    pub action_number: Option<u32>,
    pub clock: Option<String>,
    pub period: Option<u8>,
    pub team_id: Option<i64>,
    pub description: Option<String>,
}
