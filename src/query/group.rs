use std::collections::HashMap;

use serde::Serialize;

use crate::model::Match;

/// Matches sharing one league id, in the order they were encountered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueGroup<'a> {
    pub league_id: &'a str,
    pub matches: Vec<&'a Match>,
}

/// Matches partitioned by league id.
///
/// Keys keep first-encounter order: the first group is the league of the
/// first match scanned.
#[derive(Debug, Clone, Default)]
pub struct LeagueGroups<'a> {
    groups: Vec<LeagueGroup<'a>>,
    index: HashMap<&'a str, usize>,
}

impl<'a> LeagueGroups<'a> {
    pub fn get(&self, league_id: &str) -> Option<&[&'a Match]> {
        self.index
            .get(league_id)
            .map(|&i| self.groups[i].matches.as_slice())
    }

    pub fn league_ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.iter().map(|g| g.league_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LeagueGroup<'a>> {
        self.groups.iter()
    }

    pub fn first(&self) -> Option<&LeagueGroup<'a>> {
        self.groups.first()
    }

    /// Number of distinct leagues.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of matches across all groups.
    pub fn match_count(&self) -> usize {
        self.groups.iter().map(|g| g.matches.len()).sum()
    }

    fn push(&mut self, fixture: &'a Match) {
        let league_id = fixture.league.as_str();
        match self.index.get(league_id) {
            Some(&i) => self.groups[i].matches.push(fixture),
            None => {
                self.index.insert(league_id, self.groups.len());
                self.groups.push(LeagueGroup {
                    league_id,
                    matches: vec![fixture],
                });
            }
        }
    }
}

impl<'a> IntoIterator for LeagueGroups<'a> {
    type Item = LeagueGroup<'a>;
    type IntoIter = std::vec::IntoIter<LeagueGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, 'g> IntoIterator for &'g LeagueGroups<'a> {
    type Item = &'g LeagueGroup<'a>;
    type IntoIter = std::slice::Iter<'g, LeagueGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl Serialize for LeagueGroups<'_> {
    /// Serializes as an object keyed by league id, in group order.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.groups.iter().map(|g| (g.league_id, &g.matches)))
    }
}

/// Partition `matches` by their raw `league` field in a single pass.
///
/// League ids are not resolved, so a match pointing at an unknown league still
/// gets its own group. Nothing is sorted or deduplicated.
pub fn group_matches_by_league<'a, I>(matches: I) -> LeagueGroups<'a>
where
    I: IntoIterator<Item = &'a Match>,
{
    matches
        .into_iter()
        .fold(LeagueGroups::default(), |mut groups, fixture| {
            groups.push(fixture);
            groups
        })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::fixture;
    use crate::query::matches_by_league;

    fn store() -> crate::Store {
        fixture::load(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()).unwrap()
    }

    fn ids(matches: &[&Match]) -> Vec<u32> {
        matches.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_group_full_fixture() {
        let store = store();
        let groups = group_matches_by_league(store.matches());

        assert_eq!(groups.match_count(), store.matches().len());
        assert_eq!(groups.first().map(|g| g.league_id), Some("ucl"));
        assert_eq!(ids(groups.get("ucl").unwrap()), [1, 2]);

        let keys: Vec<&str> = groups.league_ids().collect();
        assert_eq!(
            keys,
            [
                "ucl",
                "premier",
                "lpf",
                "seriea",
                "laliga",
                "bundesliga",
                "ligue1",
                "libertadores",
                "uel",
                "coparey"
            ]
        );
        assert_eq!(ids(groups.get("premier").unwrap()), [3, 8, 13]);
        assert_eq!(ids(groups.get("lpf").unwrap()), [4, 16]);

        for group in &groups {
            assert!(group.matches.iter().all(|m| m.league == group.league_id));
            assert!(group.matches.windows(2).all(|w| w[0].id < w[1].id));
        }
    }

    #[test]
    fn test_group_keeps_input_order_not_store_order() {
        let store = store();
        let reversed: Vec<&Match> = store.matches().iter().rev().collect();
        let groups = group_matches_by_league(reversed);

        assert_eq!(groups.first().map(|g| g.league_id), Some("coparey"));
        assert_eq!(ids(groups.get("premier").unwrap()), [13, 8, 3]);
        assert_eq!(groups.match_count(), 17);
    }

    #[test]
    fn test_group_single_league_round_trip() {
        let store = store();
        for league in store.leagues() {
            let subset = matches_by_league(store.matches(), &league.id);
            if subset.is_empty() {
                continue;
            }
            let groups = group_matches_by_league(subset.iter().copied());
            assert_eq!(groups.len(), 1);
            assert_eq!(groups.get(&league.id).unwrap(), subset.as_slice());
        }
    }

    #[test]
    fn test_group_does_not_resolve_or_dedup() {
        let store = store();
        let mut orphan = store.matches()[0].clone();
        orphan.league = "no-such-league".to_string();
        let first = &store.matches()[0];
        let list = vec![first, &orphan, first];

        let groups = group_matches_by_league(list);
        assert_eq!(groups.len(), 2);
        assert_eq!(ids(groups.get("ucl").unwrap()), [1, 1]);
        assert_eq!(groups.get("no-such-league").unwrap().len(), 1);
    }

    #[test]
    fn test_group_empty_list() {
        let groups = group_matches_by_league(std::iter::empty());
        assert!(groups.is_empty());
        assert_eq!(groups.match_count(), 0);
        assert!(groups.get("ucl").is_none());
    }

    #[test]
    fn test_groups_serialize_as_ordered_object() {
        let store = store();
        let groups = group_matches_by_league(matches_by_league(store.matches(), "ucl"));
        let value = serde_json::to_value(&groups).unwrap();
        assert_eq!(value["ucl"][1]["homeTeam"], "barcelona");
    }
}
