//! Read-only queries over the board's collections.
//!
//! Every function here is pure: it borrows its input, never reorders it and
//! returns results in input order. Misses are `None` or an empty `Vec`.

mod group;

pub use group::{group_matches_by_league, LeagueGroup, LeagueGroups};

use crate::enums::{MatchStatus, StatusTab};
use crate::model::{Country, League, Match, Team};

pub fn matches_by_status(matches: &[Match], status: MatchStatus) -> Vec<&Match> {
    matches.iter().filter(|m| m.status == status).collect()
}

/// Like [`matches_by_status`], for a raw status string passed back by a view.
/// An unrecognised status matches nothing.
pub fn matches_by_status_str<'a>(matches: &'a [Match], status: &str) -> Vec<&'a Match> {
    status
        .parse()
        .map(|status| matches_by_status(matches, status))
        .unwrap_or_default()
}

pub fn matches_by_league<'a>(matches: &'a [Match], league_id: &str) -> Vec<&'a Match> {
    matches.iter().filter(|m| m.league == league_id).collect()
}

pub fn leagues_by_country<'a>(leagues: &'a [League], country_id: &str) -> Vec<&'a League> {
    leagues.iter().filter(|l| l.country == country_id).collect()
}

pub fn featured_leagues(leagues: &[League]) -> Vec<&League> {
    leagues.iter().filter(|l| l.featured).collect()
}

pub fn find_team<'a>(teams: &'a [Team], team_id: &str) -> Option<&'a Team> {
    teams.iter().find(|t| t.id == team_id)
}

pub fn find_league<'a>(leagues: &'a [League], league_id: &str) -> Option<&'a League> {
    leagues.iter().find(|l| l.id == league_id)
}

pub fn find_country<'a>(countries: &'a [Country], country_id: &str) -> Option<&'a Country> {
    countries.iter().find(|c| c.id == country_id)
}

/// Narrow a match list to what the board shows for a league selection and a
/// status tab. The league filter applies first, then the tab; relative order
/// is preserved.
pub fn filter_matches<'a>(
    matches: &'a [Match],
    selected_league: Option<&str>,
    tab: StatusTab,
) -> Vec<&'a Match> {
    let status = tab.status();
    matches
        .iter()
        .filter(|m| selected_league.is_none_or(|league| m.league == league))
        .filter(|m| status.is_none_or(|status| m.status == status))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::fixture;

    fn ids(matches: &[&Match]) -> Vec<u32> {
        matches.iter().map(|m| m.id).collect()
    }

    fn store() -> crate::Store {
        fixture::load(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()).unwrap()
    }

    #[test]
    fn test_matches_by_status_partitions_fixture() {
        let store = store();
        let matches = store.matches();

        let live = matches_by_status(matches, MatchStatus::Live);
        assert_eq!(ids(&live), [1, 2, 3, 4, 5]);
        assert_eq!(matches_by_status(matches, MatchStatus::Upcoming).len(), 6);
        assert_eq!(matches_by_status(matches, MatchStatus::Finished).len(), 6);

        let mut seen = HashSet::new();
        for status in MatchStatus::iter() {
            let subset = matches_by_status(matches, status);
            assert!(subset.iter().all(|m| m.status == status));
            assert!(subset.windows(2).all(|w| w[0].id < w[1].id));
            seen.extend(ids(&subset));
        }
        let all: HashSet<u32> = matches.iter().map(|m| m.id).collect();
        assert_eq!(seen, all);
    }

    #[test]
    fn test_matches_by_status_str_ignores_unknown_status() {
        let store = store();
        assert_eq!(
            ids(&matches_by_status_str(store.matches(), "live")),
            [1, 2, 3, 4, 5]
        );
        assert!(matches_by_status_str(store.matches(), "postponed").is_empty());
        assert!(matches_by_status_str(store.matches(), "").is_empty());
    }

    #[test]
    fn test_matches_by_league() {
        let store = store();
        let matches = store.matches();

        for league in store.leagues() {
            let subset = matches_by_league(matches, &league.id);
            assert!(subset.iter().all(|m| m.league == league.id));
            let expected = matches.iter().filter(|m| m.league == league.id).count();
            assert_eq!(subset.len(), expected);
        }

        assert_eq!(ids(&matches_by_league(matches, "premier")), [3, 8, 13]);
        assert!(matches_by_league(matches, "segunda").is_empty());
        assert!(matches_by_league(matches, "mls").is_empty());
    }

    #[test]
    fn test_leagues_by_country() {
        let store = store();
        let spain = leagues_by_country(store.leagues(), "esp");
        let spain_ids: Vec<&str> = spain.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(spain_ids, ["laliga", "coparey", "segunda"]);
        assert!(spain.iter().all(|l| l.country == "esp"));

        assert!(leagues_by_country(store.leagues(), "usa").is_empty());
    }

    #[test]
    fn test_featured_leagues_is_idempotent() {
        let store = store();
        let first = featured_leagues(store.leagues());
        let second = featured_leagues(store.leagues());
        assert_eq!(first, second);

        let expected: Vec<&League> = store.leagues().iter().filter(|l| l.featured).collect();
        assert_eq!(first, expected);
        let featured_ids: Vec<&str> = first.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(
            featured_ids,
            ["laliga", "premier", "seriea", "bundesliga", "lpf", "ucl", "uel", "libertadores"]
        );
    }

    #[test]
    fn test_lookups_miss_without_panicking() {
        let store = store();
        assert!(find_team(store.teams(), "nonexistent-id").is_none());
        assert!(find_league(store.leagues(), "nonexistent-id").is_none());
        assert!(find_country(store.countries(), "nonexistent-id").is_none());

        let madrid = find_team(store.teams(), "real-madrid").unwrap();
        assert_eq!(madrid.short_name, "RMA");
        assert_eq!(find_league(store.leagues(), "ucl").unwrap().country, "int");
        assert_eq!(find_country(store.countries(), "arg").unwrap().name, "Argentina");
    }

    #[test]
    fn test_filter_matches_league_then_tab() {
        let store = store();
        let matches = store.matches();

        let ucl_live = filter_matches(matches, Some("ucl"), StatusTab::Live);
        assert_eq!(ids(&ucl_live), [1, 2]);
        assert_eq!(store.get_team(&ucl_live[0].home_team).unwrap().id, "real-madrid");
        assert_eq!(store.get_team(&ucl_live[0].away_team).unwrap().id, "man-city");
        assert_eq!(store.get_team(&ucl_live[1].home_team).unwrap().id, "barcelona");
        assert_eq!(store.get_team(&ucl_live[1].away_team).unwrap().id, "psg");

        assert_eq!(filter_matches(matches, None, StatusTab::All).len(), 17);
        assert_eq!(
            ids(&filter_matches(matches, None, StatusTab::Finished)),
            [12, 13, 14, 15, 16, 17]
        );
        assert_eq!(
            ids(&filter_matches(matches, Some("premier"), StatusTab::All)),
            [3, 8, 13]
        );
        assert!(filter_matches(matches, Some("ucl"), StatusTab::Upcoming).is_empty());
        assert!(filter_matches(matches, Some("nowhere"), StatusTab::All).is_empty());
    }
}
