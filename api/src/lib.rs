pub mod cdn;
pub mod client;
pub mod mock;

use chrono::{DateTime, Utc};
use std::future::Future;

pub use client::{ApiError, ApiResult, NbaApi};
pub use mock::MockClient;

const GAME_PAGE_URL: &str = "https://www.nba.com/game";

/// Data source capability consumed by the UI.
///
/// Each call is a one-shot fetch of a full snapshot; callers replace what they
/// hold with the result instead of merging.
pub trait NbaClient: Clone + Send + Sync + 'static {
    fn fetch_scoreboard(&self) -> impl Future<Output = ApiResult<Vec<Game>>> + Send;

    fn fetch_box_score(&self, game_id: &str) -> impl Future<Output = ApiResult<BoxScore>> + Send;

    fn fetch_play_by_play(
        &self,
        game_id: &str,
    ) -> impl Future<Output = ApiResult<PlayByPlay>> + Send;
}

/// Public nba.com page for a game, used for "watch in browser".
pub fn game_url(game_id: &str) -> String {
    format!("{GAME_PAGE_URL}/{game_id}")
}

// ---------------------------------------------------------------------------
// Domain types, independent of the CDN wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Live,
    Final,
}

impl GameStatus {
    /// The live feed encodes status as 1 (scheduled), 2 (in progress), 3 (final).
    pub fn from_code(code: u8) -> Self {
        match code {
            2 => GameStatus::Live,
            3 => GameStatus::Final,
            _ => GameStatus::NotStarted,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Game {
    pub id: String,
    pub status: GameStatus,
    pub status_text: String,
    pub period: u8,
    /// Raw game clock, e.g. `PT05M23.00S`. Empty between periods.
    pub clock: String,
    pub start_time: Option<DateTime<Utc>>,
    pub home: TeamSnapshot,
    pub away: TeamSnapshot,
}

impl Game {
    pub fn is_started(&self) -> bool {
        self.status != GameStatus::NotStarted
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Final
    }

    pub fn is_overtime(&self) -> bool {
        self.period > 4
    }

    /// 1 for the first overtime period, 2 for the second, ...
    pub fn overtime_number(&self) -> u8 {
        self.period.saturating_sub(4)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamSnapshot {
    pub id: i64,
    pub name: String,
    pub tricode: String,
    pub score: u16,
    /// `None` until the box score feed reports a roster.
    pub players: Option<Vec<Player>>,
    pub statistics: Option<Statistics>,
}

impl TeamSnapshot {
    /// Players that dressed for the game, in feed order.
    pub fn roster(&self) -> Option<Vec<&Player>> {
        self.players
            .as_ref()
            .map(|players| players.iter().filter(|p| p.active).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub first_name: String,
    pub family_name: String,
    pub active: bool,
    pub statistics: Option<Statistics>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            id: 0,
            first_name: String::new(),
            family_name: String::new(),
            active: true,
            statistics: None,
        }
    }
}

impl Player {
    /// `"L.James"`, or just the family name when no first name is known.
    pub fn short_name(&self) -> String {
        match self.first_name.chars().next() {
            Some(initial) => format!("{initial}.{}", self.family_name),
            None => self.family_name.clone(),
        }
    }
}

/// Box score line for a player or a whole team.
///
/// Every field is optional: `None` means the feed has not reported it yet,
/// which is not the same thing as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    /// ISO-8601 duration, e.g. `PT36M10.01S`.
    pub minutes: Option<String>,
    pub points: Option<i32>,
    pub field_goals_made: Option<i32>,
    pub field_goals_attempted: Option<i32>,
    pub field_goals_pct: Option<f64>,
    pub threes_made: Option<i32>,
    pub threes_attempted: Option<i32>,
    pub threes_pct: Option<f64>,
    pub free_throws_made: Option<i32>,
    pub free_throws_attempted: Option<i32>,
    pub free_throws_pct: Option<f64>,
    pub rebounds_offensive: Option<i32>,
    pub rebounds_defensive: Option<i32>,
    pub rebounds: Option<i32>,
    pub assists: Option<i32>,
    pub steals: Option<i32>,
    pub blocks: Option<i32>,
    pub turnovers: Option<i32>,
    pub fouls: Option<i32>,
    pub plus_minus: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxScore {
    pub game: Game,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayByPlay {
    pub game_id: String,
    pub actions: Vec<Action>,
}

/// One play-by-play event. The feed delivers these in occurrence order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Action {
    pub number: u32,
    pub clock: String,
    pub period: u8,
    pub team_id: i64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_code() {
        assert_eq!(GameStatus::from_code(1), GameStatus::NotStarted);
        assert_eq!(GameStatus::from_code(2), GameStatus::Live);
        assert_eq!(GameStatus::from_code(3), GameStatus::Final);
        assert_eq!(GameStatus::from_code(0), GameStatus::NotStarted);
    }

    #[test]
    fn test_overtime_is_derived_from_period() {
        let mut game = Game { period: 4, ..Game::default() };
        assert!(!game.is_overtime());
        assert_eq!(game.overtime_number(), 0);

        game.period = 6;
        assert!(game.is_overtime());
        assert_eq!(game.overtime_number(), 2);
    }

    #[test]
    fn test_short_name() {
        let player = Player {
            first_name: "LeBron".into(),
            family_name: "James".into(),
            ..Player::default()
        };
        assert_eq!(player.short_name(), "L.James");

        let mononym = Player { family_name: "Nene".into(), ..Player::default() };
        assert_eq!(mononym.short_name(), "Nene");
    }

    #[test]
    fn test_roster_skips_inactive_players() {
        let team = TeamSnapshot {
            players: Some(vec![
                Player { id: 1, ..Player::default() },
                Player { id: 2, active: false, ..Player::default() },
                Player { id: 3, ..Player::default() },
            ]),
            ..TeamSnapshot::default()
        };
        let ids: Vec<i64> = team.roster().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(TeamSnapshot::default().roster().is_none());
    }

    #[test]
    fn test_game_url() {
        assert_eq!(game_url("0022300001"), "https://www.nba.com/game/0022300001");
    }
}
