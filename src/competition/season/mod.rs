// Standings are derived from the games every time they are needed, never stored.
pub mod team;
pub mod ranking;
pub mod schedule_generator;

use std::collections::HashMap;

use ordinal::Ordinal;
use tracing::warn;

use crate::{game::{Game, GameResult}, team::Team, types::Goals};

use self::{ranking::{sort_rows, RankCriteria, DEFAULT_CRITERIA}, team::{StandingRow, TeamSeason}};

// How a played game is folded into the table.
#[derive(Debug)]
#[derive(Clone, Copy, PartialEq, Eq)]
enum Tally {
    League,
    Cup,
}

// Compute the league table with the default ranking criteria.
pub fn compute_standings(teams: &[Team], games: &[Game]) -> Vec<StandingRow> {
    compute_standings_with(teams, games, &DEFAULT_CRITERIA)
}

// Compute the league table with custom ranking criteria.
// Games are folded in list order, so the list should be in round order for the form to make sense.
pub fn compute_standings_with(teams: &[Team], games: &[Game], criteria: &[RankCriteria]) -> Vec<StandingRow> {
    let mut rows = tally(teams, games, Tally::League);
    sort_rows(&mut rows, criteria);
    return rows;
}

// Compute a simplified table for a cup tier.
// For display only, it does not decide who advances.
pub fn compute_cup_standings(teams: &[Team], games: &[Game]) -> Vec<StandingRow> {
    let mut rows = tally(teams, games, Tally::Cup);
    sort_rows(&mut rows, &DEFAULT_CRITERIA);
    return rows;
}

// Fold every played game into per-team totals. Rows come out in team list order.
// A repeated team id gets one row, at the place of its first occurrence.
fn tally(teams: &[Team], games: &[Game], mode: Tally) -> Vec<StandingRow> {
    let mut seasons: Vec<TeamSeason> = Vec::with_capacity(teams.len());
    let mut index: HashMap<&str, usize> = HashMap::new();
    for team in teams.iter() {
        if index.contains_key(team.id.as_str()) {
            warn!(team = %team.id, "team id is listed more than once, keeping the first entry");
            continue;
        }
        index.insert(team.id.as_str(), seasons.len());
        seasons.push(TeamSeason::build(team));
    }

    for game in games.iter() {
        let (Some((home_goals, away_goals)), Some((home_result, away_result))) = (game.score(), game.results()) else {
            continue;
        };

        let (Some(&home), Some(&away)) = (index.get(game.home_id.as_str()), index.get(game.away_id.as_str())) else {
            warn!(game = %game.id, home = %game.home_id, away = %game.away_id, "game references an unknown team, skipping it");
            continue;
        };

        update_side(&mut seasons[home], home_goals, away_goals, home_result, mode);
        update_side(&mut seasons[away], away_goals, home_goals, away_result, mode);
    }

    return seasons.into_iter().map(TeamSeason::into_row).collect();
}

fn update_side(season: &mut TeamSeason, goals_for: Goals, goals_against: Goals, result: GameResult, mode: Tally) {
    match mode {
        Tally::League => season.update(goals_for, goals_against, result),
        Tally::Cup => season.update_cup(goals_for, goals_against, result),
    }
}

// Get the table as text, one team per line.
pub fn display_standings(rows: &[StandingRow]) -> String {
    let mut s = String::from("Pos\tTeam\tP\tW\tD\tL\tGF\tGA\tGD\tPts\tForm");
    for (i, row) in rows.iter().enumerate() {
        s += &format!(
            "\n{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:+}\t{}\t{}",
            Ordinal(i + 1), row.team_name, row.played, row.won, row.drawn, row.lost,
            row.goals_for, row.goals_against, row.goal_difference, row.points, row.form()
        );
    }

    return s;
}
