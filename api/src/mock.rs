//! Canned data for running the UI without network access (`--mock`).

use crate::{
    Action, ApiError, ApiResult, BoxScore, Game, GameStatus, NbaClient, PlayByPlay, Player,
    Statistics, TeamSnapshot,
};

const LAKERS_ID: i64 = 1610612747;
const WARRIORS_ID: i64 = 1610612744;
const CELTICS_ID: i64 = 1610612738;
const HEAT_ID: i64 = 1610612748;

#[derive(Debug, Clone, Default)]
pub struct MockClient;

impl MockClient {
    pub fn new() -> Self {
        Self
    }

    fn games() -> Vec<Game> {
        vec![
            Game {
                id: "0012300001".into(),
                status: GameStatus::Live,
                status_text: "Q4 2:00".into(),
                period: 4,
                clock: "PT02M00.00S".into(),
                start_time: None,
                home: team(LAKERS_ID, "Lakers", "LAL", 102),
                away: team(WARRIORS_ID, "Warriors", "GSW", 99),
            },
            Game {
                id: "0012300002".into(),
                status: GameStatus::Final,
                status_text: "Final".into(),
                period: 4,
                clock: String::new(),
                start_time: None,
                home: team(CELTICS_ID, "Celtics", "BOS", 110),
                away: team(HEAT_ID, "Heat", "MIA", 105),
            },
        ]
    }
}

impl NbaClient for MockClient {
    async fn fetch_scoreboard(&self) -> ApiResult<Vec<Game>> {
        Ok(Self::games())
    }

    async fn fetch_box_score(&self, game_id: &str) -> ApiResult<BoxScore> {
        let mut game = Self::games()
            .into_iter()
            .find(|g| g.id == game_id)
            .ok_or_else(|| ApiError::NotFound(format!("mock game {game_id}")))?;

        game.home.players = Some(vec![
            player(2544, "LeBron", "James", line("PT35M00.00S", 30, 10, 8, 5.0)),
            player(1629029, "Anthony", "Davis", line("PT33M12.00S", 24, 12, 3, 2.0)),
            Player {
                id: 1630559,
                first_name: "Austin".into(),
                family_name: "Reaves".into(),
                active: true,
                statistics: None,
            },
        ]);
        game.home.statistics = Some(totals(game.home.score));

        game.away.players = Some(vec![
            player(201939, "Stephen", "Curry", line("PT34M00.00S", 28, 5, 6, -2.0)),
            player(203110, "Draymond", "Green", line("PT30M45.00S", 8, 9, 11, -4.0)),
        ]);
        game.away.statistics = Some(totals(game.away.score));

        Ok(BoxScore { game })
    }

    async fn fetch_play_by_play(&self, game_id: &str) -> ApiResult<PlayByPlay> {
        let actions = vec![
            action(1, "PT12M00.00S", 1, LAKERS_ID, "Jump Ball James vs. Green: Tip to Davis"),
            action(2, "PT11M45.00S", 1, LAKERS_ID, "James 26' 3PT Jump Shot (3 PTS)"),
            action(3, "PT11M30.00S", 1, WARRIORS_ID, "MISS Curry 27' 3PT Pullup Jump Shot"),
            action(4, "PT11M12.00S", 1, LAKERS_ID, "Davis 2' Driving Layup (2 PTS) (James 1 AST)"),
            action(5, "PT10M58.00S", 1, WARRIORS_ID, "Curry 25' 3PT Step Back Jump Shot (3 PTS)"),
            action(6, "PT11M40.00S", 2, LAKERS_ID, "Reaves 12' Floating Jump Shot (2 PTS)"),
            action(7, "PT11M02.00S", 2, WARRIORS_ID, "Green STEAL (1 STL)"),
            action(8, "PT09M20.00S", 3, LAKERS_ID, "James 1' Dunk (12 PTS)"),
            action(9, "PT02M00.00S", 4, WARRIORS_ID, "Curry 30' 3PT Jump Shot (28 PTS)"),
        ];
        Ok(PlayByPlay { game_id: game_id.to_owned(), actions })
    }
}

fn team(id: i64, name: &str, tricode: &str, score: u16) -> TeamSnapshot {
    TeamSnapshot {
        id,
        name: name.into(),
        tricode: tricode.into(),
        score,
        players: None,
        statistics: None,
    }
}

fn player(id: i64, first: &str, family: &str, statistics: Statistics) -> Player {
    Player {
        id,
        first_name: first.into(),
        family_name: family.into(),
        active: true,
        statistics: Some(statistics),
    }
}

fn line(minutes: &str, points: i32, rebounds: i32, assists: i32, plus_minus: f64) -> Statistics {
    Statistics {
        minutes: Some(minutes.into()),
        points: Some(points),
        rebounds: Some(rebounds),
        assists: Some(assists),
        field_goals_made: Some(points / 3),
        field_goals_attempted: Some(points / 2 + 4),
        field_goals_pct: Some(0.5),
        threes_made: Some(2),
        threes_attempted: Some(5),
        threes_pct: Some(0.4),
        free_throws_made: Some(4),
        free_throws_attempted: Some(5),
        free_throws_pct: Some(0.8),
        rebounds_offensive: Some(rebounds / 4),
        rebounds_defensive: Some(rebounds - rebounds / 4),
        steals: Some(1),
        blocks: Some(1),
        turnovers: Some(2),
        fouls: Some(2),
        plus_minus: Some(plus_minus),
    }
}

fn totals(points: u16) -> Statistics {
    Statistics {
        minutes: Some("PT240M00.00S".into()),
        points: Some(i32::from(points)),
        rebounds: Some(44),
        assists: Some(24),
        ..Statistics::default()
    }
}

fn action(number: u32, clock: &str, period: u8, team_id: i64, description: &str) -> Action {
    Action {
        number,
        clock: clock.into(),
        period,
        team_id,
        description: description.into(),
    }
}
