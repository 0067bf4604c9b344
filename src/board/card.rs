use serde::Serialize;

use crate::enums::{MatchStatus, TeamSide};
use crate::model::{Match, MatchEvent, Team};
use crate::store::Store;

/// Printed in place of a score that does not exist yet.
pub const NO_SCORE: &str = "-";
pub const FINAL_LABEL: &str = "FINAL";

/// Everything a view needs to draw one match.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCard<'a> {
    #[serde(rename = "match")]
    pub fixture: &'a Match,
    /// `None` when the team id does not resolve; views leave the slot blank.
    pub home: Option<&'a Team>,
    pub away: Option<&'a Team>,
    pub status_label: String,
    pub home_score: String,
    pub away_score: String,
    pub home_goals: Vec<&'a MatchEvent>,
    pub away_goals: Vec<&'a MatchEvent>,
    pub home_red_cards: usize,
    pub away_red_cards: usize,
    pub expanded: bool,
    /// Full event list by minute, only filled while expanded.
    pub timeline: Vec<&'a MatchEvent>,
}

impl<'a> MatchCard<'a> {
    pub fn new(store: &'a Store, fixture: &'a Match, expanded: bool) -> Self {
        let expanded = expanded && fixture.has_events();
        Self {
            fixture,
            home: store.get_team(&fixture.home_team),
            away: store.get_team(&fixture.away_team),
            status_label: status_label(fixture),
            home_score: score_text(fixture.score(TeamSide::Home)),
            away_score: score_text(fixture.score(TeamSide::Away)),
            home_goals: fixture.goals(TeamSide::Home),
            away_goals: fixture.goals(TeamSide::Away),
            home_red_cards: fixture.red_cards(TeamSide::Home),
            away_red_cards: fixture.red_cards(TeamSide::Away),
            expanded,
            timeline: if expanded {
                fixture.timeline()
            } else {
                Vec::new()
            },
        }
    }

    pub fn home_name(&self) -> &'a str {
        team_name(self.home)
    }

    pub fn away_name(&self) -> &'a str {
        team_name(self.away)
    }

    pub fn is_live(&self) -> bool {
        self.fixture.is_live()
    }
}

/// Minute while live, `FINAL` once finished, kickoff time before that.
pub fn status_label(fixture: &Match) -> String {
    match fixture.status {
        MatchStatus::Live => fixture
            .minute
            .map(|minute| format!("{minute}'"))
            .unwrap_or_default(),
        MatchStatus::Finished => FINAL_LABEL.to_string(),
        MatchStatus::Upcoming => fixture.kickoff(),
    }
}

pub fn score_text(score: Option<u8>) -> String {
    score.map_or_else(|| NO_SCORE.to_string(), |s| s.to_string())
}

/// Team name, or an empty string when the team is unknown.
pub fn team_name(team: Option<&Team>) -> &str {
    team.map(|t| t.name.as_str()).unwrap_or_default()
}
