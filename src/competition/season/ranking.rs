// Functions for ranking teams within a championship.

use std::{cmp::Ordering, collections::HashMap};

use serde::{Deserialize, Serialize};

use crate::competition::season::team::StandingRow;

// What ranking criteria a table is sorted by.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Eq, Hash, PartialEq)]
#[derive(Clone, Copy)]
pub enum RankCriteria {
    Points,
    TotalWins,
    GoalDifference,
    GoalsScored,
    GoalsConceded,  // Lower is better.
    Draws,
    TotalLosses,    // Lower is better.
}

// Points, then wins, then goal difference, then goals scored.
pub const DEFAULT_CRITERIA: [RankCriteria; 4] = [
    RankCriteria::Points,
    RankCriteria::TotalWins,
    RankCriteria::GoalDifference,
    RankCriteria::GoalsScored,
];

type CmpFunc = fn (&StandingRow, &StandingRow) -> Ordering;

// Compare functions here.

fn compare_points(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.points.cmp(&a.points)
}

fn compare_total_wins(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.won.cmp(&a.won)
}

fn compare_goal_difference(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.goal_difference.cmp(&a.goal_difference)
}

fn compare_goals_scored(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.goals_for.cmp(&a.goals_for)
}

fn compare_goals_conceded(a: &StandingRow, b: &StandingRow) -> Ordering {
    a.goals_against.cmp(&b.goals_against)
}

fn compare_draws(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.drawn.cmp(&a.drawn)
}

fn compare_total_losses(a: &StandingRow, b: &StandingRow) -> Ordering {
    a.lost.cmp(&b.lost)
}

// Get the available sort functions.
pub fn get_sort_functions() -> HashMap<RankCriteria, CmpFunc> {
    let mut functions: HashMap<RankCriteria, CmpFunc> = HashMap::new();
    functions.insert(RankCriteria::Points, compare_points);
    functions.insert(RankCriteria::TotalWins, compare_total_wins);
    functions.insert(RankCriteria::GoalDifference, compare_goal_difference);
    functions.insert(RankCriteria::GoalsScored, compare_goals_scored);
    functions.insert(RankCriteria::GoalsConceded, compare_goals_conceded);
    functions.insert(RankCriteria::Draws, compare_draws);
    functions.insert(RankCriteria::TotalLosses, compare_total_losses);
    return functions;
}

// Sort the rows by the criteria, in priority order.
// The sort is stable, so rows that tie on everything keep their current order.
pub fn sort_rows(rows: &mut [StandingRow], criteria: &[RankCriteria]) {
    let sort_functions = get_sort_functions();

    rows.sort_by(|a, b| {
        let mut order = Ordering::Equal;
        for criterium in criteria.iter() {
            if let Some(compare) = sort_functions.get(criterium) {
                order = compare(a, b);
            }

            if order.is_ne() { break; }
        }
        order
    });
}
