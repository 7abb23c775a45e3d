use thiserror::Error;

use crate::model::MatchId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("match with ID {match_id} not found")]
    NotFound { match_id: MatchId },
    #[error("no more matches left to simulate")]
    Exhausted,
    #[error(
        "predictions are only available once a team has played {required} matches (most played: {played})"
    )]
    PreconditionNotMet { required: u32, played: u32 },
}

pub type LeagueResult<T> = Result<T, LeagueError>;
