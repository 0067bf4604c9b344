use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};

use crate::error::{PizarraError, Result};

/// Where a match stands. Fixture data; nothing moves a match between states.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchStatus {
    Live,
    Upcoming,
    Finished,
}

impl MatchStatus {
    /// Whether a match in this status carries a score.
    pub fn has_started(self) -> bool {
        matches!(self, MatchStatus::Live | MatchStatus::Finished)
    }
}

/// Which side of a match an event belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

/// Status tab shown above the match list.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StatusTab {
    #[default]
    All,
    Live,
    Upcoming,
    Finished,
}

impl StatusTab {
    /// The status this tab narrows to, `None` for [`StatusTab::All`].
    pub fn status(self) -> Option<MatchStatus> {
        match self {
            StatusTab::All => None,
            StatusTab::Live => Some(MatchStatus::Live),
            StatusTab::Upcoming => Some(MatchStatus::Upcoming),
            StatusTab::Finished => Some(MatchStatus::Finished),
        }
    }

    /// Tab caption as printed on the board.
    pub fn label(self) -> &'static str {
        match self {
            StatusTab::All => "TODOS",
            StatusTab::Live => "EN VIVO",
            StatusTab::Upcoming => "PRÓXIMOS",
            StatusTab::Finished => "FINALIZADOS",
        }
    }

    /// Parse a tab id coming back from a view (`all`, `live`, `upcoming`, `finished`).
    pub fn parse_param(value: &str) -> Result<Self> {
        value.parse().map_err(|_| PizarraError::UnknownTab {
            value: value.to_string(),
        })
    }
}

impl From<MatchStatus> for StatusTab {
    fn from(status: MatchStatus) -> Self {
        match status {
            MatchStatus::Live => StatusTab::Live,
            MatchStatus::Upcoming => StatusTab::Upcoming,
            MatchStatus::Finished => StatusTab::Finished,
        }
    }
}
