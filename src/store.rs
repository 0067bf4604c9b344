use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::enums::{MatchStatus, StatusTab};
use crate::error::{PizarraError, Result};
use crate::model::{Country, League, Match, Team};
use crate::query::{self, LeagueGroups};

/// The board's dataset: countries, leagues, teams and matches.
///
/// A `Store` is validated once in [`Store::try_new`] and never changes
/// afterwards. Collections are only handed out as shared slices.
///
/// # Examples
///
/// ```
/// # fn example() -> pizarra::Result<()> {
/// use pizarra::{fixture, MatchStatus};
///
/// let store = fixture::load_today()?;
/// let live = store.get_matches_by_status(MatchStatus::Live);
/// println!("{} matches in play", live.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    countries: Vec<Country>,
    leagues: Vec<League>,
    teams: Vec<Team>,
    matches: Vec<Match>,
}

impl Store {
    /// Build a store, rejecting duplicate ids, dangling references and
    /// scores or minutes that contradict a match's status.
    #[instrument(skip_all, fields(matches = matches.len()))]
    pub fn try_new(
        countries: Vec<Country>,
        leagues: Vec<League>,
        teams: Vec<Team>,
        matches: Vec<Match>,
    ) -> Result<Self> {
        let country_ids = unique_ids("country", countries.iter().map(|c| c.id.as_str()))?;
        let league_ids = unique_ids("league", leagues.iter().map(|l| l.id.as_str()))?;
        let team_ids = unique_ids("team", teams.iter().map(|t| t.id.as_str()))?;

        let mut match_ids = HashSet::new();
        for m in &matches {
            if !match_ids.insert(m.id) {
                return Err(PizarraError::DuplicateId {
                    collection: "match",
                    id: m.id.to_string(),
                });
            }
        }

        for league in &leagues {
            if !country_ids.contains(league.country.as_str()) {
                return Err(PizarraError::DanglingReference {
                    entity: "league",
                    id: league.id.clone(),
                    field: "country",
                    target: league.country.clone(),
                });
            }
        }

        for m in &matches {
            validate_match(m, &league_ids, &team_ids)?;
        }

        debug!(
            countries = countries.len(),
            leagues = leagues.len(),
            teams = teams.len(),
            "store validated"
        );
        Ok(Self {
            countries,
            leagues,
            teams,
            matches,
        })
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn leagues(&self) -> &[League] {
        &self.leagues
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Matches with the given status, in store order.
    #[instrument(skip(self))]
    pub fn get_matches_by_status(&self, status: MatchStatus) -> Vec<&Match> {
        let result = query::matches_by_status(&self.matches, status);
        debug!(count = result.len(), "matches by status");
        result
    }

    /// Matches for a status string coming back from a view. Unknown statuses match nothing.
    #[instrument(skip(self))]
    pub fn get_matches_by_status_str(&self, status: &str) -> Vec<&Match> {
        query::matches_by_status_str(&self.matches, status)
    }

    /// Matches played in a league, in store order.
    #[instrument(skip(self))]
    pub fn get_matches_by_league(&self, league_id: &str) -> Vec<&Match> {
        let result = query::matches_by_league(&self.matches, league_id);
        debug!(count = result.len(), "matches by league");
        result
    }

    #[instrument(skip(self))]
    pub fn get_leagues_by_country(&self, country_id: &str) -> Vec<&League> {
        query::leagues_by_country(&self.leagues, country_id)
    }

    pub fn get_featured_leagues(&self) -> Vec<&League> {
        query::featured_leagues(&self.leagues)
    }

    pub fn get_team(&self, team_id: &str) -> Option<&Team> {
        query::find_team(&self.teams, team_id)
    }

    pub fn get_league(&self, league_id: &str) -> Option<&League> {
        query::find_league(&self.leagues, league_id)
    }

    pub fn get_country(&self, country_id: &str) -> Option<&Country> {
        query::find_country(&self.countries, country_id)
    }

    /// Group any match list by league id. See [`query::group_matches_by_league`].
    pub fn group_matches_by_league<'a, I>(&self, matches: I) -> LeagueGroups<'a>
    where
        I: IntoIterator<Item = &'a Match>,
    {
        query::group_matches_by_league(matches)
    }

    /// Matches visible for a league selection and status tab, in store order.
    #[instrument(skip(self))]
    pub fn get_filtered_matches(
        &self,
        selected_league: Option<&str>,
        tab: StatusTab,
    ) -> Vec<&Match> {
        let result = query::filter_matches(&self.matches, selected_league, tab);
        debug!(count = result.len(), "filtered matches");
        result
    }
}

fn unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PizarraError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(seen)
}

fn validate_match(m: &Match, league_ids: &HashSet<&str>, team_ids: &HashSet<&str>) -> Result<()> {
    let dangling = |field: &'static str, target: &str| PizarraError::DanglingReference {
        entity: "match",
        id: m.id.to_string(),
        field,
        target: target.to_string(),
    };

    if !league_ids.contains(m.league.as_str()) {
        return Err(dangling("league", &m.league));
    }
    if !team_ids.contains(m.home_team.as_str()) {
        return Err(dangling("homeTeam", &m.home_team));
    }
    if !team_ids.contains(m.away_team.as_str()) {
        return Err(dangling("awayTeam", &m.away_team));
    }
    if m.home_team == m.away_team {
        return Err(PizarraError::DuplicateTeams {
            match_id: m.id,
            team: m.home_team.clone(),
        });
    }

    let started = m.status.has_started();
    if m.home_score.is_some() != started || m.away_score.is_some() != started {
        return Err(PizarraError::ScoreStatusMismatch {
            match_id: m.id,
            status: m.status,
        });
    }
    if m.minute.is_some() != m.is_live() {
        return Err(PizarraError::MinuteStatusMismatch {
            match_id: m.id,
            status: m.status,
        });
    }
    Ok(())
}
