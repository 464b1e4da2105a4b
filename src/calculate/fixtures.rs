//! Fixture list selection: featured match, recent results, status tabs.

use crate::models::{Match, MatchStatus, Team};

/// Number of recent results on the home page.
pub const RECENT_RESULTS: usize = 3;

/// The match to headline: the first live one, else the next upcoming one.
pub fn featured_match(matches: &[Match]) -> Option<&Match> {
    matches
        .iter()
        .find(|m| m.status() == MatchStatus::Live)
        .or_else(|| {
            matches
                .iter()
                .filter(|m| m.status() == MatchStatus::Upcoming)
                .min_by_key(|m| m.date)
        })
}

/// Completed matches, most recent first, at most `n`.
pub fn recent_results(matches: &[Match], n: usize) -> Vec<&Match> {
    let mut done = by_status(matches, MatchStatus::Completed);
    done.truncate(n);
    done
}

/// Matches with `status`, in the order the fixtures page lists them:
/// upcoming soonest first, completed most recent first, live as stored.
pub fn by_status(matches: &[Match], status: MatchStatus) -> Vec<&Match> {
    let mut selected: Vec<&Match> = matches.iter().filter(|m| m.status() == status).collect();
    match status {
        MatchStatus::Upcoming => selected.sort_by_key(|m| m.date),
        MatchStatus::Completed => selected.sort_by(|a, b| b.date.cmp(&a.date)),
        MatchStatus::Live => {}
    }
    selected
}

/// Case-insensitive search over venue, team ids and team names.
/// An empty query matches everything.
pub fn search_matches<'a>(matches: &[&'a Match], teams: &[Team], query: &str) -> Vec<&'a Match> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return matches.to_vec();
    }

    let team_matches = |id: &crate::models::TeamId| {
        id.as_str().to_lowercase().contains(&query)
            || teams
                .iter()
                .find(|t| &t.id == id)
                .is_some_and(|t| t.name.to_lowercase().contains(&query))
    };

    matches
        .iter()
        .copied()
        .filter(|m| {
            m.venue.to_lowercase().contains(&query)
                || team_matches(&m.team1)
                || team_matches(&m.team2)
        })
        .collect()
}
