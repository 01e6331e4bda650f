// Errors for the operations that can actually fail.
// Schedule generation and standings never fail, they degrade to empty or partial output instead.

use crate::types::{ChampionshipId, GameId, TeamId};

#[derive(Debug, thiserror::Error)]
#[derive(PartialEq, Eq)]
pub enum TournamentError {
    #[error("a championship needs at least 2 teams, got {0}")]
    NotEnoughTeams(usize),
    #[error("team id {0} is used more than once")]
    DuplicateTeam(TeamId),
    #[error("championship {0} already exists")]
    DuplicateChampionship(ChampionshipId),
    #[error("no championship with id {0}")]
    UnknownChampionship(ChampionshipId),
    #[error("no active championship")]
    NoActiveChampionship,
    #[error("no match with id {0}")]
    UnknownGame(GameId),
    #[error("championship {0} is already finished")]
    AlreadyFinished(ChampionshipId),
    #[error("championship {0} still has unplayed matches")]
    Incomplete(ChampionshipId),
    #[error("invalid application snapshot: {0}")]
    Snapshot(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}
