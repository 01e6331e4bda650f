// A championship is a fixed set of teams and the games generated for them.
pub mod season;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::{
    config::ScheduleConfig, error::TournamentError, game::Game, team::Team,
    types::{ChampionshipId, Goals, RoundNumber},
};

use self::season::{compute_cup_standings, compute_standings, display_standings, schedule_generator::generate_schedule, team::StandingRow};

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionType {
    League,
    Cup,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChampionshipStatus {
    #[default] InProgress,
    Finished,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Championship {
    pub id: ChampionshipId,
    pub name: String,
    #[serde(rename = "type")]
    pub competition_type: CompetitionType,
    pub status: ChampionshipStatus,
    pub teams: Vec<Team>,
    pub matches: Vec<Game>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

// Basics.
impl Championship {
    // Build a championship and generate its schedule.
    pub fn build(
        id: &str,
        name: &str,
        competition_type: CompetitionType,
        teams: Vec<Team>,
        config: &ScheduleConfig,
        created_at: OffsetDateTime,
    ) -> Result<Self, TournamentError> {
        validate_teams(&teams)?;

        let matches = generate_schedule(&teams, competition_type, config);
        info!(championship = id, ?competition_type, teams = teams.len(), matches = matches.len(), "created championship");

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            competition_type: competition_type,
            status: ChampionshipStatus::InProgress,
            teams: teams,
            matches: matches,
            created_at: created_at,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.status == ChampionshipStatus::Finished
    }
}

// Functional.
impl Championship {
    // Replace both scores of a game.
    pub fn record_score(&mut self, game_id: &str, home: Goals, away: Goals) -> Result<&Game, TournamentError> {
        if self.is_finished() {
            return Err(TournamentError::AlreadyFinished(self.id.clone()));
        }

        let game = self.matches.iter_mut()
            .find(|game| game.id == game_id)
            .ok_or_else(|| TournamentError::UnknownGame(game_id.to_string()))?;

        game.set_score(home, away);
        debug!(championship = %self.id, game = game_id, home, away, "recorded score");
        Ok(game)
    }

    // Close the championship. Every game must have been played.
    pub fn finish(&mut self) -> Result<(), TournamentError> {
        if !self.is_complete() {
            return Err(TournamentError::Incomplete(self.id.clone()));
        }

        self.status = ChampionshipStatus::Finished;
        info!(championship = %self.id, "championship finished");
        Ok(())
    }

    // Get the table, league or cup style depending on the championship.
    pub fn standings(&self) -> Vec<StandingRow> {
        match self.competition_type {
            CompetitionType::League => compute_standings(&self.teams, &self.matches),
            CompetitionType::Cup => compute_cup_standings(&self.teams, &self.matches),
        }
    }

    // The top of the table, once every game has been played.
    pub fn champion(&self) -> Option<StandingRow> {
        if !self.is_complete() { return None; }
        self.standings().into_iter().next()
    }

    pub fn total_rounds(&self) -> RoundNumber {
        self.matches.iter().map(|game| game.round).max().unwrap_or(0)
    }

    pub fn matches_in_round(&self, round: RoundNumber) -> Vec<&Game> {
        self.matches.iter().filter(|game| game.round == round).collect()
    }

    // A round with no games is not complete.
    pub fn is_round_complete(&self, round: RoundNumber) -> bool {
        let games = self.matches_in_round(round);
        !games.is_empty() && games.iter().all(|game| game.is_played())
    }

    // Check if every game has been played.
    pub fn is_complete(&self) -> bool {
        !self.matches.is_empty() && self.matches.iter().all(Game::is_played)
    }

    // Get the name of a team, or the id if the team is unknown.
    fn team_name<'a>(&'a self, team_id: &'a str) -> &'a str {
        self.teams.iter()
            .find(|team| team.id == team_id)
            .map_or(team_id, |team| team.name.as_str())
    }

    pub fn display_standings(&self) -> String {
        display_standings(&self.standings())
    }

    // Get the schedule as text, grouped by round.
    pub fn display_schedule(&self) -> String {
        let mut s = String::new();
        for round in 1..=self.total_rounds() {
            let games = self.matches_in_round(round);
            if games.is_empty() { continue; }

            if !s.is_empty() { s += "\n"; }
            s += &format!("Round {round}");
            if let Some(stage) = games[0].stage.as_deref() {
                s += &format!(" ({stage})");
            }

            for game in games {
                let score = match game.score() {
                    Some((home, away)) => format!("{home}-{away}"),
                    None => "-".to_string(),
                };
                s += &format!("\n\t{} {score} {}", self.team_name(&game.home_id), self.team_name(&game.away_id));
            }
        }

        return s;
    }
}

// A championship needs at least 2 teams and no id twice.
fn validate_teams(teams: &[Team]) -> Result<(), TournamentError> {
    if teams.len() < 2 {
        return Err(TournamentError::NotEnoughTeams(teams.len()));
    }

    let mut seen = HashSet::new();
    for team in teams.iter() {
        if !seen.insert(team.id.as_str()) {
            return Err(TournamentError::DuplicateTeam(team.id.clone()));
        }
    }

    Ok(())
}
