use nba_api::Statistics;

/// Achievement markers shown in front of a player's name in kawaii mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    TripleDouble,
    FiveByFive,
    Sniper,
    Ninja,
    Blocker,
    Alien,
    Playmaker,
    Rebounder,
}

impl Badge {
    /// Highest priority first.
    pub const ALL: [Badge; 8] = [
        Badge::TripleDouble,
        Badge::FiveByFive,
        Badge::Sniper,
        Badge::Ninja,
        Badge::Blocker,
        Badge::Alien,
        Badge::Playmaker,
        Badge::Rebounder,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            Badge::TripleDouble => "👑",
            Badge::FiveByFive => "💯",
            Badge::Sniper => "🎯",
            Badge::Ninja => "🥷",
            Badge::Blocker => "🔒",
            Badge::Alien => "👽",
            Badge::Playmaker => "🤝",
            Badge::Rebounder => "💪",
        }
    }

    fn earned_by(self, stats: &Statistics) -> bool {
        match self {
            Badge::TripleDouble => counting_stats(stats).filter(|v| *v >= 10).count() >= 3,
            Badge::FiveByFive => counting_stats(stats).filter(|v| *v >= 5).count() == 5,
            Badge::Sniper => {
                at_least(stats.threes_made, 8) && stats.threes_pct.is_some_and(|p| p >= 0.5)
            }
            Badge::Ninja => at_least(stats.steals, 5),
            Badge::Blocker => at_least(stats.blocks, 7),
            Badge::Alien => at_least(stats.points, 50),
            Badge::Playmaker => at_least(stats.assists, 20),
            Badge::Rebounder => at_least(stats.rebounds, 20),
        }
    }
}

/// Every badge `stats` earns, in priority order, at most `cap` of them.
pub fn badges(stats: &Statistics, cap: usize) -> Vec<Badge> {
    Badge::ALL
        .into_iter()
        .filter(|badge| badge.earned_by(stats))
        .take(cap)
        .collect()
}

/// Icons for a player's name column, empty when nothing was earned.
pub fn badge_prefix(stats: &Statistics, cap: usize) -> String {
    badges(stats, cap).into_iter().map(Badge::icon).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
}

/// Whether a single stat line deserves emphasis on its own.
pub fn emphasized(kind: StatKind, value: Option<i32>) -> bool {
    let Some(value) = value else {
        return false;
    };
    match kind {
        StatKind::Points | StatKind::Rebounds | StatKind::Assists => value >= 10,
        StatKind::Steals | StatKind::Blocks => value > 3,
    }
}

fn counting_stats(stats: &Statistics) -> impl Iterator<Item = i32> {
    [stats.points, stats.rebounds, stats.assists, stats.steals, stats.blocks]
        .into_iter()
        .flatten()
}

fn at_least(value: Option<i32>, threshold: i32) -> bool {
    value.is_some_and(|v| v >= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(pts: i32, reb: i32, ast: i32, stl: i32, blk: i32) -> Statistics {
        Statistics {
            points: Some(pts),
            rebounds: Some(reb),
            assists: Some(ast),
            steals: Some(stl),
            blocks: Some(blk),
            ..Statistics::default()
        }
    }

    fn top(stats: &Statistics) -> Option<Badge> {
        badges(stats, 1).into_iter().next()
    }

    #[test]
    fn test_triple_double_outranks_five_by_five() {
        let stats = line(25, 12, 11, 5, 5);
        assert_eq!(badges(&stats, 1), vec![Badge::TripleDouble]);
        assert_eq!(badges(&stats, 3), vec![Badge::TripleDouble, Badge::FiveByFive, Badge::Ninja]);
        assert_eq!(top(&stats), Some(Badge::TripleDouble));
    }

    #[test]
    fn test_missing_stats_never_earn_badges() {
        assert!(badges(&Statistics::default(), 8).is_empty());

        let partial = Statistics { points: Some(10), rebounds: Some(10), ..Statistics::default() };
        assert_eq!(top(&partial), None);
    }

    #[test]
    fn test_sniper_needs_volume_and_accuracy() {
        let mut stats = Statistics {
            threes_made: Some(8),
            threes_pct: Some(0.5),
            ..Statistics::default()
        };
        assert_eq!(top(&stats), Some(Badge::Sniper));

        stats.threes_pct = Some(0.49);
        assert_eq!(top(&stats), None);

        stats.threes_pct = None;
        assert_eq!(top(&stats), None);
    }

    #[test]
    fn test_single_stat_badges() {
        assert_eq!(top(&line(0, 0, 0, 5, 0)), Some(Badge::Ninja));
        assert_eq!(top(&line(0, 0, 0, 0, 7)), Some(Badge::Blocker));
        assert_eq!(top(&line(50, 0, 0, 0, 0)), Some(Badge::Alien));
        assert_eq!(top(&line(0, 0, 20, 0, 0)), Some(Badge::Playmaker));
        assert_eq!(top(&line(0, 20, 0, 0, 0)), Some(Badge::Rebounder));
        assert_eq!(top(&line(49, 9, 9, 4, 6)), None);
    }

    #[test]
    fn test_three_big_categories_make_a_triple_double() {
        assert_eq!(top(&line(49, 19, 19, 4, 6)), Some(Badge::TripleDouble));
        assert_eq!(top(&line(49, 19, 9, 4, 6)), None);
    }

    #[test]
    fn test_badge_prefix() {
        assert_eq!(badge_prefix(&line(52, 3, 2, 0, 0), 1), "👽");
        assert_eq!(badge_prefix(&line(1, 1, 1, 1, 1), 1), "");
        assert_eq!(badge_prefix(&line(30, 10, 10, 0, 0), 0), "");
    }

    #[test]
    fn test_emphasis_thresholds() {
        assert!(emphasized(StatKind::Points, Some(10)));
        assert!(!emphasized(StatKind::Points, Some(9)));
        assert!(emphasized(StatKind::Assists, Some(12)));
        assert!(!emphasized(StatKind::Steals, Some(3)));
        assert!(emphasized(StatKind::Blocks, Some(4)));
        assert!(!emphasized(StatKind::Rebounds, None));
    }
}
