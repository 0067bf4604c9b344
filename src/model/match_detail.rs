use chrono::{NaiveDate, NaiveTime};
use itertools::Itertools;
use serde::{Serialize, Serializer};

use crate::enums::{MatchStatus, TeamSide};

/// Kickoff times are written as `HH:MM`.
pub const KICKOFF_FORMAT: &str = "%H:%M";

/// A single fixture on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: u32,
    /// References [`League::id`](crate::model::League::id).
    pub league: String,
    pub home_team: String,
    pub away_team: String,
    /// `None` until the match has started.
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
    pub status: MatchStatus,
    /// Elapsed minute, only set while live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<u8>,
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_kickoff")]
    pub time: NaiveTime,
    /// Not guaranteed to be in chronological order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<MatchEvent>,
}

impl Match {
    pub fn is_live(&self) -> bool {
        self.status == MatchStatus::Live
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Team id playing on the given side.
    pub fn team_id(&self, side: TeamSide) -> &str {
        match side {
            TeamSide::Home => &self.home_team,
            TeamSide::Away => &self.away_team,
        }
    }

    pub fn score(&self, side: TeamSide) -> Option<u8> {
        match side {
            TeamSide::Home => self.home_score,
            TeamSide::Away => self.away_score,
        }
    }

    /// Kickoff as printed on the board.
    pub fn kickoff(&self) -> String {
        self.time.format(KICKOFF_FORMAT).to_string()
    }

    /// Events ordered by minute. Events sharing a minute keep their stored order.
    pub fn timeline(&self) -> Vec<&MatchEvent> {
        self.events.iter().sorted_by_key(|e| e.minute).collect()
    }

    /// Goals scored by one side, ordered by minute.
    pub fn goals(&self, side: TeamSide) -> Vec<&MatchEvent> {
        self.timeline()
            .into_iter()
            .filter(|e| e.side == side && e.is_goal())
            .collect()
    }

    pub fn red_cards(&self, side: TeamSide) -> usize {
        self.events
            .iter()
            .filter(|e| e.side == side && matches!(e.kind, MatchEventKind::RedCard { .. }))
            .count()
    }
}

/// Something that happened during a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEvent {
    pub minute: u8,
    #[serde(rename = "team")]
    pub side: TeamSide,
    #[serde(flatten)]
    pub kind: MatchEventKind,
}

impl MatchEvent {
    pub fn goal(minute: u8, side: TeamSide, player: impl Into<String>) -> Self {
        Self {
            minute,
            side,
            kind: MatchEventKind::Goal {
                player: player.into(),
            },
        }
    }

    pub fn red_card(minute: u8, side: TeamSide, player: impl Into<String>) -> Self {
        Self {
            minute,
            side,
            kind: MatchEventKind::RedCard {
                player: player.into(),
            },
        }
    }

    pub fn substitution(
        minute: u8,
        side: TeamSide,
        player_in: impl Into<String>,
        player_out: impl Into<String>,
    ) -> Self {
        Self {
            minute,
            side,
            kind: MatchEventKind::Substitution {
                player_in: player_in.into(),
                player_out: player_out.into(),
            },
        }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self.kind, MatchEventKind::Goal { .. })
    }
}

/// Event payload, keyed by event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MatchEventKind {
    Goal {
        player: String,
    },
    RedCard {
        player: String,
    },
    Substitution {
        #[serde(rename = "playerIn")]
        player_in: String,
        #[serde(rename = "playerOut")]
        player_out: String,
    },
}

fn serialize_kickoff<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format(KICKOFF_FORMAT))
}
