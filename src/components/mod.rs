pub mod badge;
pub mod box_score;
pub mod game_log;
pub mod score_header;
pub mod scoreboard;
