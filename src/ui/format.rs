use chrono::Local;
use nba_api::Game;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of a clock once cut down for display (`MM:SS`).
const CLOCK_WIDTH: usize = 5;

pub fn int_stat(value: Option<i32>) -> String {
    value.map_or_else(|| "0".to_string(), |v| v.to_string())
}

/// Plus/minus arrives as a float but is always a whole number of points.
pub fn float_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "0".to_string(), |v| format!("{v:.0}"))
}

/// Fraction `0.0..=1.0` to a one-decimal percentage without the `%` sign.
pub fn pct_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "0.0".to_string(), |v| format!("{:.1}", v * 100.0))
}

/// Expand an ISO-8601 duration such as `PT36M10.01S` into `36:10.01`.
///
/// A zero duration becomes `0:00`. Anything that does not look like a
/// duration is returned unchanged, so already-formatted clocks pass through.
pub fn full_clock(raw: &str) -> String {
    let Some((minutes, seconds)) = parse_duration(raw) else {
        return raw.to_string();
    };
    if minutes == 0 && seconds == 0.0 {
        return "0:00".to_string();
    }
    format!("{minutes:02}:{seconds:05.2}")
}

/// `MM:SS` for display, or `-` when there is nothing meaningful to show.
///
/// The full clock is computed first and only then cut to five characters; a
/// full clock that is already five characters or shorter (`0:00`, empty) is
/// the "did not play" sentinel.
pub fn display_clock(raw: &str) -> String {
    let clock = full_clock(raw);
    if clock.chars().count() > CLOCK_WIDTH {
        clock.chars().take(CLOCK_WIDTH).collect()
    } else {
        "-".to_string()
    }
}

/// Team minutes run past 99 and would not fit the minutes column as a
/// clock, so only whole minutes are shown.
pub fn total_minutes(raw: &str) -> String {
    match parse_duration(raw) {
        Some((minutes, _)) => minutes.to_string(),
        None => "-".to_string(),
    }
}

/// Play-by-play clocks: `PT11M42.00S` becomes `11:42`, other text is kept.
pub fn action_clock(raw: &str) -> String {
    match parse_duration(raw) {
        Some((minutes, seconds)) => format!("{minutes:02}:{:02}", seconds as u32),
        None => raw.to_string(),
    }
}

fn parse_duration(raw: &str) -> Option<(u32, f64)> {
    let body = raw.strip_prefix("PT")?;
    let (minutes, rest) = match body.split_once('M') {
        Some((m, rest)) => (m.parse::<u32>().ok()?, rest),
        None => (0, body),
    };
    let seconds = match rest.strip_suffix('S') {
        Some(s) if !s.is_empty() => s.parse::<f64>().ok()?,
        Some(_) => return None,
        None if rest.is_empty() => 0.0,
        None => return None,
    };
    Some((minutes, seconds))
}

/// Scores on a scoreboard card always take three cells.
pub fn card_score(score: u16) -> String {
    let s = score.to_string();
    match s.len() {
        1 => format!(" {s} "),
        2 => format!(" {s}"),
        _ => s,
    }
}

/// One-line game status: tip-off time, `Final`, or period and clock.
pub fn game_status(game: &Game) -> String {
    if !game.is_started() {
        return game
            .start_time
            .map(|t| t.with_timezone(&Local).format("%I:%M %p").to_string())
            .unwrap_or_else(|| "Not Started".to_string());
    }
    if game.is_finished() {
        return "Final".to_string();
    }
    format!("{} ({})", period_label(game), display_clock(&game.clock))
}

pub fn period_label(game: &Game) -> String {
    if game.is_overtime() {
        format!("{}OT", game.overtime_number())
    } else {
        format!("{}Q", game.period)
    }
}

/// Pad `s` on both sides to `width` visual columns; the extra column goes right.
pub fn center(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    if padding == 0 {
        return s.to_string();
    }
    let left = padding / 2;
    let right = padding - left;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(right))
}

/// Cut `s` to at most `width` visual columns.
pub fn truncate(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Like [`truncate`] but marks the cut with `...` when there is room for it.
pub fn ellipsize(s: &str, width: usize) -> String {
    if s.width() <= width || width <= 3 {
        return truncate(s, width);
    }
    format!("{}...", truncate(s, width - 3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nba_api::GameStatus;

    #[test]
    fn test_missing_stats_use_sentinels() {
        assert_eq!(int_stat(None), "0");
        assert_eq!(int_stat(Some(17)), "17");
        assert_eq!(float_stat(None), "0");
        assert_eq!(float_stat(Some(-3.0)), "-3");
        assert_eq!(pct_stat(None), "0.0");
        assert_eq!(pct_stat(Some(0.456)), "45.6");
        assert_eq!(pct_stat(Some(1.0)), "100.0");
    }

    #[test]
    fn test_minutes_are_truncated_to_mm_ss() {
        assert_eq!(full_clock("PT36M10.01S"), "36:10.01");
        assert_eq!(display_clock("PT36M10.01S"), "36:10");
        assert_eq!(display_clock("PT05M03.00S"), "05:03");
    }

    #[test]
    fn test_zero_minutes_render_as_dash() {
        assert_eq!(full_clock("PT00M00.00S"), "0:00");
        assert_eq!(display_clock("PT00M00.00S"), "-");
        assert_eq!(display_clock(""), "-");
    }

    #[test]
    fn test_unparseable_clock_passes_through() {
        assert_eq!(full_clock("11:00"), "11:00");
        assert_eq!(display_clock("11:00"), "-");
        assert_eq!(full_clock("PTxxS"), "PTxxS");
    }

    #[test]
    fn test_total_and_action_clocks() {
        assert_eq!(total_minutes("PT240M00.00S"), "240");
        assert_eq!(total_minutes("PT265M00.00S"), "265");
        assert_eq!(total_minutes("garbage"), "-");
        assert_eq!(action_clock("PT11M42.00S"), "11:42");
        assert_eq!(action_clock("PT00M07.40S"), "00:07");
        assert_eq!(action_clock("11:00"), "11:00");
    }

    #[test]
    fn test_card_score_padding() {
        assert_eq!(card_score(9), " 9 ");
        assert_eq!(card_score(99), " 99");
        assert_eq!(card_score(102), "102");
    }

    #[test]
    fn test_game_status_lines() {
        let mut game = Game::default();
        assert_eq!(game_status(&game), "Not Started");

        game.status = GameStatus::Live;
        game.period = 2;
        game.clock = "PT04M31.00S".into();
        assert_eq!(game_status(&game), "2Q (04:31)");

        game.period = 5;
        assert_eq!(game_status(&game), "1OT (04:31)");

        game.clock = String::new();
        assert_eq!(game_status(&game), "1OT (-)");

        game.status = GameStatus::Final;
        assert_eq!(game_status(&game), "Final");
    }

    #[test]
    fn test_center_and_truncate() {
        assert_eq!(center("Final", 11), "   Final   ");
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("toolong", 3), "toolong");
        assert_eq!(truncate("👑L.James", 4), "👑L.");
        assert_eq!(ellipsize("Curry 3PT Jump Shot", 10), "Curry 3...");
        assert_eq!(ellipsize("short", 10), "short");
    }
}
