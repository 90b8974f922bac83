use log::LevelFilter;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_RELOAD_SECS: u64 = 10;
pub const DEFAULT_BADGE_CAP: usize = 1;
pub const DEFAULT_CARD_WIDTH: u16 = 18;

#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub reload_interval: Duration,
    /// Team-leader bolding and plus/minus colours in the box score.
    pub decoration: bool,
    /// Badges and stat underlining.
    pub kawaii: bool,
    pub badge_cap: usize,
    /// Columns reserved per scoreboard card when working out the grid.
    pub card_width: u16,
    pub use_mock: bool,
    pub log_level: Option<LevelFilter>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            reload_interval: Duration::from_secs(DEFAULT_RELOAD_SECS),
            decoration: true,
            kawaii: false,
            badge_cap: DEFAULT_BADGE_CAP,
            card_width: DEFAULT_CARD_WIDTH,
            use_mock: false,
            log_level: None,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Run(AppSettings),
    Help,
    Version,
}

impl AppSettings {
    /// Defaults overridden by `NBATUI_*` environment variables.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(secs) = parsed::<u64>(&lookup, "NBATUI_RELOAD").filter(|s| *s > 0) {
            settings.reload_interval = Duration::from_secs(secs);
        }
        if let Some(on) = flag(&lookup, "NBATUI_NO_DECORATION") {
            settings.decoration = !on;
        }
        if let Some(on) = flag(&lookup, "NBATUI_KAWAII") {
            settings.kawaii = on;
        }
        if let Some(cap) = parsed::<usize>(&lookup, "NBATUI_BADGE_CAP") {
            settings.badge_cap = cap;
        }
        if let Some(width) = parsed::<u16>(&lookup, "NBATUI_CARD_WIDTH").filter(|w| *w > 0) {
            settings.card_width = width;
        }
        if let Some(on) = flag(&lookup, "NBATUI_MOCK") {
            settings.use_mock = on;
        }
        settings.log_level = parsed::<LevelFilter>(&lookup, "NBATUI_LOG");
        settings
    }

    /// Apply command-line flags on top of `self`.
    pub fn parse_args<I>(mut self, args: I) -> Result<CliCommand, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(CliCommand::Help),
                "-V" | "--version" => return Ok(CliCommand::Version),
                "--mock" => self.use_mock = true,
                "--no-decoration" => self.decoration = false,
                "--kawaii" => self.kawaii = true,
                "--reload" => {
                    let value = args.next().ok_or("--reload needs a number of seconds")?;
                    let secs = value
                        .parse::<u64>()
                        .ok()
                        .filter(|s| *s > 0)
                        .ok_or_else(|| format!("invalid reload interval: {value}"))?;
                    self.reload_interval = Duration::from_secs(secs);
                }
                _ => return Err(format!("Unknown argument: {arg}")),
            }
        }
        Ok(CliCommand::Run(self))
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    let value = lookup(key)?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
