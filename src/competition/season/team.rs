// Standings data for teams.

use serde::{Deserialize, Serialize};

use crate::{game::GameResult, team::Team, types::{convert, Goals, Points, TeamId}};

pub const POINTS_FOR_WIN: Points = 3;
pub const POINTS_FOR_DRAW: Points = 1;

// How many of the latest results a row shows.
pub const FORM_LENGTH: usize = 5;

// One line of the table.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub team_id: TeamId,
    pub team_name: String,
    pub is_human: bool,
    pub played: u16,
    pub won: u16,
    pub drawn: u16,
    pub lost: u16,
    #[serde(rename = "gf")]
    pub goals_for: Goals,
    #[serde(rename = "ga")]
    pub goals_against: Goals,
    #[serde(rename = "gd")]
    pub goal_difference: i32,
    pub points: Points,

    // Latest result first.
    pub last_five: Vec<GameResult>,
}

// Basics.
impl StandingRow {
    pub fn build(team_id: &str, team_name: &str, is_human: bool) -> Self {
        Self {
            team_id: team_id.to_string(),
            team_name: team_name.to_string(),
            is_human: is_human,
            ..Default::default()
        }
    }

    // Display the latest results as a string, e.g. "WDL".
    pub fn form(&self) -> String {
        self.last_five.iter().map(|result| result.to_string()).collect()
    }
}

// Running totals for a team while games are folded in.
#[derive(Debug)]
#[derive(Clone)]
pub struct TeamSeason {
    row: StandingRow,
    history: Vec<GameResult>,   // Oldest first.
}

// Basics.
impl TeamSeason {
    pub fn build(team: &Team) -> Self {
        Self {
            row: StandingRow::build(&team.id, &team.name, team.is_human),
            history: Vec::new(),
        }
    }
}

// Functional.
impl TeamSeason {
    fn add_goals(&mut self, goals_for: Goals, goals_against: Goals) {
        self.row.played = self.row.played.saturating_add(1);
        self.row.goals_for = self.row.goals_for.saturating_add(goals_for);
        self.row.goals_against = self.row.goals_against.saturating_add(goals_against);
        self.row.goal_difference = convert::u16_to_i32(self.row.goals_for) - convert::u16_to_i32(self.row.goals_against);
    }

    // Update the team data after a league game.
    pub fn update(&mut self, goals_for: Goals, goals_against: Goals, result: GameResult) {
        self.add_goals(goals_for, goals_against);

        match result {
            GameResult::Win => {
                self.row.won = self.row.won.saturating_add(1);
                self.row.points = self.row.points.saturating_add(POINTS_FOR_WIN);
            },
            GameResult::Draw => {
                self.row.drawn = self.row.drawn.saturating_add(1);
                self.row.points = self.row.points.saturating_add(POINTS_FOR_DRAW);
            },
            GameResult::Loss => self.row.lost = self.row.lost.saturating_add(1),
        }

        self.history.push(result);
    }

    // Update the team data after a cup game.
    // Only wins are counted as such; draws give the point but no draw, losses are not counted.
    pub fn update_cup(&mut self, goals_for: Goals, goals_against: Goals, result: GameResult) {
        self.add_goals(goals_for, goals_against);

        match result {
            GameResult::Win => {
                self.row.won = self.row.won.saturating_add(1);
                self.row.points = self.row.points.saturating_add(POINTS_FOR_WIN);
            },
            GameResult::Draw => self.row.points = self.row.points.saturating_add(POINTS_FOR_DRAW),
            GameResult::Loss => {},
        }
    }

    // Finish the row, keeping only the latest results with the newest first.
    pub fn into_row(self) -> StandingRow {
        let mut row = self.row;
        let skip = self.history.len().saturating_sub(FORM_LENGTH);
        row.last_five = self.history.into_iter().skip(skip).rev().collect();
        return row;
    }
}
