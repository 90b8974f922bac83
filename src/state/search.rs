use nba_api::Action;

/// Actions for one quarter and one team, in feed order.
pub fn filter_actions(actions: &[Action], quarter: u8, team_id: i64) -> Vec<&Action> {
    actions
        .iter()
        .filter(|a| a.period == quarter && a.team_id == team_id)
        .collect()
}

/// Positions in `actions` whose description contains `query`, ignoring case.
/// An empty query matches nothing.
pub fn search_actions(actions: &[&Action], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();
    actions
        .iter()
        .enumerate()
        .filter(|(_, a)| a.description.to_lowercase().contains(&query))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(period: u8, team_id: i64, description: &str) -> Action {
        Action {
            period,
            team_id,
            description: description.into(),
            ..Action::default()
        }
    }

    fn sample() -> Vec<Action> {
        vec![
            action(1, 10, "Shai Gilgeous-Alexander 3PT Jump Shot"),
            action(1, 10, "Holmgren REBOUND"),
            action(1, 10, "MISS shai driving layup"),
            action(2, 10, "SHAI free throw 1 of 2"),
            action(1, 20, "Jokic hook shot"),
        ]
    }

    #[test]
    fn test_filter_by_quarter_and_team() {
        let actions = sample();
        let q1: Vec<&str> =
            filter_actions(&actions, 1, 10).iter().map(|a| a.description.as_str()).collect();
        assert_eq!(q1.len(), 3);
        assert!(q1.iter().all(|d| !d.contains("Jokic")));

        assert_eq!(filter_actions(&actions, 2, 10).len(), 1);
        assert!(filter_actions(&actions, 3, 10).is_empty());
    }

    #[test]
    fn test_only_selected_period_is_kept() {
        let actions = vec![action(1, 1, "team A first"), action(2, 2, "team B second")];
        let visible = filter_actions(&actions, 2, 2);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].description, "team B second");
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let actions = sample();
        let filtered = filter_actions(&actions, 1, 10);
        assert!(search_actions(&filtered, "").is_empty());
        assert!(search_actions(&[], "").is_empty());
    }

    #[test]
    fn test_search_ignores_case() {
        let actions = sample();
        let filtered = filter_actions(&actions, 1, 10);
        assert_eq!(search_actions(&filtered, "shai"), vec![0, 2]);
        assert_eq!(search_actions(&filtered, "Shai"), search_actions(&filtered, "shai"));
        assert_eq!(search_actions(&filtered, "SHAI"), vec![0, 2]);
    }

    #[test]
    fn test_no_match() {
        let actions = sample();
        let filtered = filter_actions(&actions, 1, 10);
        assert!(search_actions(&filtered, "curry").is_empty());
    }
}
