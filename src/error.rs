use crate::enums::MatchStatus;

/// All errors that can occur while building or querying the match board.
#[derive(thiserror::Error, Debug)]
pub enum PizarraError {
    /// Two records in one collection share the same id.
    #[error("duplicate {collection} id: {id}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },

    /// A foreign key does not resolve to a record of the target collection.
    #[error("{entity} {id}: {field} references unknown id {target}")]
    DanglingReference {
        entity: &'static str,
        id: String,
        field: &'static str,
        target: String,
    },

    /// Scores are present on a match that has not started, or missing on one that has.
    #[error("match {match_id}: scores do not agree with status {status}")]
    ScoreStatusMismatch { match_id: u32, status: MatchStatus },

    /// A minute is set on a match that is not live, or missing on a live one.
    #[error("match {match_id}: minute does not agree with status {status}")]
    MinuteStatusMismatch { match_id: u32, status: MatchStatus },

    /// Home and away sides reference the same team.
    #[error("match {match_id}: {team} cannot play itself")]
    DuplicateTeams { match_id: u32, team: String },

    /// A kickoff time is not in `HH:MM` form.
    #[error("failed to parse kickoff time: {0}")]
    TimeParse(#[from] chrono::ParseError),

    /// A view passed a status tab that does not exist.
    #[error("unknown status tab: {value}")]
    UnknownTab { value: String },
}

pub type Result<T> = std::result::Result<T, PizarraError>;
