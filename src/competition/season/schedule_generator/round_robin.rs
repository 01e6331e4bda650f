// League schedules with the circle method.

use tracing::{debug, warn};

use crate::{config::ScheduleConfig, game::Game, types::{convert, RoundNumber, TeamId}};

// One pairing of the first leg. Later legs reuse these with home and away possibly swapped.
#[derive(Debug)]
#[derive(Clone, PartialEq, Eq)]
struct Pairing<'a> {
    round_index: usize,
    pair_index: usize,
    home: &'a str,
    away: &'a str,
}

impl Pairing<'_> {
    // Build the game for the given leg. Legs are counted from 1.
    fn to_game(&self, leg: RoundNumber, rounds_per_leg: RoundNumber) -> Game {
        let offset = (leg - 1).saturating_mul(rounds_per_leg);
        let round = offset.saturating_add(convert::usize_to_u16(self.round_index + 1));
        let first_leg_id = format!("match-{}-{}", self.round_index, self.pair_index);

        // Odd legs keep the first leg's home team, even legs swap it.
        match leg {
            1 => Game::build(first_leg_id, self.home, self.away, round),
            2 => Game::build(format!("match-ret-{first_leg_id}"), self.away, self.home, round),
            _ if leg % 2 == 1 => Game::build(format!("match-leg{leg}-{}-{}", self.round_index, self.pair_index), self.home, self.away, round),
            _ => Game::build(format!("match-leg{leg}-{}-{}", self.round_index, self.pair_index), self.away, self.home, round),
        }
    }
}

// Get how many rounds one leg takes. An odd team count gets a bye slot.
pub fn rounds_per_leg(teams: usize) -> RoundNumber {
    if teams < 2 { return 0; }
    let slots = teams + teams % 2;
    convert::usize_to_u16(slots - 1)
}

// Move the last slot to index 1. Index 0 never moves.
fn rotate<T>(slots: &mut Vec<T>) {
    if slots.len() < 3 { return; }
    if let Some(last) = slots.pop() {
        slots.insert(1, last);
    }
}

// Pair every team with every other team exactly once.
fn first_leg_pairings(team_ids: &[TeamId]) -> Vec<Pairing<'_>> {
    // None is the bye.
    let mut slots: Vec<Option<&str>> = team_ids.iter().map(|id| Some(id.as_str())).collect();
    if slots.len() % 2 != 0 {
        slots.push(None);
    }

    let size = slots.len();
    let mut pairings = Vec::new();
    for round_index in 0..size.saturating_sub(1) {
        for pair_index in 0..size / 2 {
            if let (Some(home), Some(away)) = (slots[pair_index], slots[size - 1 - pair_index]) {
                pairings.push(Pairing { round_index, pair_index, home, away });
            }
        }
        rotate(&mut slots);
    }

    return pairings;
}

// Generate a league schedule.
// Plays the configured number of legs, then keeps adding legs until there are at least `min_rounds` rounds.
pub fn generate_league(team_ids: &[TeamId], config: &ScheduleConfig) -> Vec<Game> {
    if team_ids.len() < 2 {
        warn!(teams = team_ids.len(), "not enough teams for a league");
        return Vec::new();
    }

    let pairings = first_leg_pairings(team_ids);
    let rounds_per_leg = rounds_per_leg(team_ids.len());
    let legs = RoundNumber::from(config.legs.max(1));

    let mut games = Vec::with_capacity(pairings.len() * usize::from(legs));
    let mut leg: RoundNumber = 1;
    loop {
        games.extend(pairings.iter().map(|pairing| pairing.to_game(leg, rounds_per_leg)));

        let total_rounds = leg.saturating_mul(rounds_per_leg);
        if leg >= legs && total_rounds >= config.min_rounds { break; }
        if leg == RoundNumber::MAX { break; }
        leg += 1;
    }

    if leg > legs {
        debug!(legs = leg, min_rounds = config.min_rounds, "extended league to reach the minimum round count");
    }

    return games;
}
