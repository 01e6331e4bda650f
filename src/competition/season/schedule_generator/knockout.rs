// Cup schedules. Only the first tier of the bracket is drawn, winners are not advanced.

use tracing::{debug, warn};

use crate::{config::ScheduleConfig, game::Game, types::{convert, TeamId}};

#[derive(Debug)]
#[derive(Clone, PartialEq, Eq)]
pub struct KnockoutPair {
    pub home: TeamId,
    pub away: TeamId,
}

// Basics.
impl KnockoutPair {
    fn build(home: &TeamId, away: &TeamId) -> Self {
        Self {
            home: home.clone(),
            away: away.clone(),
        }
    }

    // Pair neighbouring teams. An odd team out is left without a pair.
    pub fn draw(team_ids: &[TeamId]) -> Vec<Self> {
        if let Some(left_out) = team_ids.chunks_exact(2).remainder().first() {
            debug!(team = %left_out, "odd team count, team left out of the cup draw");
        }

        team_ids.chunks_exact(2).map(|pair| Self::build(&pair[0], &pair[1])).collect()
    }
}

// Functional.
impl KnockoutPair {
    // Generate the games for the pair, one per leg. Home advantage alternates between legs.
    fn generate_games(&self, pair_index: usize, legs: u8, single_leg_label: &str) -> Vec<Game> {
        if legs <= 1 {
            let game = Game::build(format!("cup-0-{pair_index}"), &self.home, &self.away, 1);
            return vec![game.with_stage(single_leg_label)];
        }

        let mut games = Vec::new();
        for leg in 1..=legs {
            let round = u16::from(leg);
            let id = format!("cup-leg{leg}-{pair_index}");
            let stage = format!("Leg {leg}");

            let game = if leg % 2 == 1 {
                Game::build(id, &self.home, &self.away, round)
            }
            else {
                Game::build(id, &self.away, &self.home, round)
            };
            games.push(game.with_stage(&stage));
        }

        return games;
    }
}

// Generate a cup schedule: first legs of every pair, then the return legs.
pub fn generate_cup(team_ids: &[TeamId], config: &ScheduleConfig) -> Vec<Game> {
    if team_ids.len() < 2 {
        warn!(teams = team_ids.len(), "not enough teams for a cup");
        return Vec::new();
    }

    let pairs = KnockoutPair::draw(team_ids);
    let mut games: Vec<Game> = pairs.iter().enumerate()
        .flat_map(|(i, pair)| pair.generate_games(i, config.cup_legs, &config.cup_stage_label))
        .collect();

    // Keep the games in round order.
    games.sort_by_key(|game| game.round);

    debug!(pairs = convert::usize_to_u16(pairs.len()), legs = config.cup_legs, "drew cup pairs");
    return games;
}
