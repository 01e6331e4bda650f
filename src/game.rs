// A single fixture between two teams.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{GameId, Goals, RoundNumber, TeamId};

#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub home_id: TeamId,
    pub away_id: TeamId,
    pub round: RoundNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    pub home_score: Option<Goals>,
    pub away_score: Option<Goals>,
}

// Basics.
impl Game {
    pub fn build(id: String, home_id: &str, away_id: &str, round: RoundNumber) -> Self {
        Self {
            id: id,
            home_id: home_id.to_string(),
            away_id: away_id.to_string(),
            round: round,
            ..Default::default()
        }
    }

    pub fn with_stage(mut self, stage: &str) -> Self {
        self.stage = Some(stage.to_string());
        return self;
    }
}

// Functional.
impl Game {
    // Both scores have been recorded.
    pub fn is_played(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }

    // Get the score as (home, away) if the game has been played.
    pub fn score(&self) -> Option<(Goals, Goals)> {
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    // Both scores are always replaced together.
    pub fn set_score(&mut self, home: Goals, away: Goals) {
        self.home_score = Some(home);
        self.away_score = Some(away);
    }

    // Check if the team plays in this game.
    pub fn involves(&self, team_id: &str) -> bool {
        self.home_id == team_id || self.away_id == team_id
    }

    // Get the result for home and away teams, if the game has been played.
    pub fn results(&self) -> Option<(GameResult, GameResult)> {
        let (home, away) = self.score()?;
        let results = if home > away {
            (GameResult::Win, GameResult::Loss)
        }
        else if away > home {
            (GameResult::Loss, GameResult::Win)
        }
        else {
            (GameResult::Draw, GameResult::Draw)
        };

        return Some(results);
    }
}

// Outcome of a game from one team's point of view.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameResult::Win => "W",
            GameResult::Draw => "D",
            GameResult::Loss => "L",
        };
        write!(f, "{s}")
    }
}
