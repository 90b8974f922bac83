pub mod app_settings;
pub mod detail;
pub mod messages;
pub mod network;
pub mod refresher;
pub mod scoreboard;
pub mod search;
