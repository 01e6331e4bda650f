// Fixture generation for both league and cup championships.

mod knockout;
mod round_robin;

use tracing::{debug, warn};

use crate::{competition::CompetitionType, config::ScheduleConfig, game::Game, team::{team_ids, Team}};

pub use self::knockout::{generate_cup, KnockoutPair};
pub use self::round_robin::{generate_league, rounds_per_leg};

// Generate the complete match list for a championship.
// Called once when the championship is created. Fewer than 2 teams gives an empty schedule.
pub fn generate_schedule(teams: &[Team], competition_type: CompetitionType, config: &ScheduleConfig) -> Vec<Game> {
    if teams.len() < 2 {
        warn!(teams = teams.len(), "not enough teams to generate a schedule");
        return Vec::new();
    }

    let ids = team_ids(teams);
    let games = match competition_type {
        CompetitionType::League => generate_league(&ids, config),
        CompetitionType::Cup => generate_cup(&ids, config),
    };

    debug!(?competition_type, teams = teams.len(), games = games.len(), "generated schedule");
    return games;
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn teams(count: usize) -> Vec<Team> {
        (0..count).map(|i| Team::build(&format!("T{i}"), &format!("Team {i}"), i == 0)).collect()
    }

    #[test]
    fn too_few_teams_gives_empty_schedule() {
        let config = ScheduleConfig::default();
        assert!(generate_schedule(&[], CompetitionType::League, &config).is_empty());
        assert!(generate_schedule(&teams(1), CompetitionType::League, &config).is_empty());
        assert!(generate_schedule(&teams(1), CompetitionType::Cup, &config).is_empty());
    }

    #[test]
    fn league_dispatch_uses_configured_legs() {
        let config = ScheduleConfig { legs: 1, ..Default::default() };
        let games = generate_schedule(&teams(6), CompetitionType::League, &config);
        assert_eq!(games.len(), 15);
    }

    #[test]
    fn cup_dispatch_pairs_neighbours() {
        let config = ScheduleConfig::default();
        let games = generate_schedule(&teams(4), CompetitionType::Cup, &config);
        let pairs: Vec<(&str, &str)> = games.iter().map(|g| (g.home_id.as_str(), g.away_id.as_str())).collect();
        assert_eq!(pairs, vec![("T0", "T1"), ("T2", "T3")]);
    }

    #[test]
    fn match_ids_are_unique_for_every_format() {
        let configs = [
            ScheduleConfig { legs: 1, ..Default::default() },
            ScheduleConfig::default(),
            ScheduleConfig { legs: 1, min_rounds: 20, ..Default::default() },
            ScheduleConfig { cup_legs: 2, ..Default::default() },
        ];

        for config in configs.iter() {
            for competition_type in [CompetitionType::League, CompetitionType::Cup] {
                let games = generate_schedule(&teams(7), competition_type, config);
                let ids: HashSet<&String> = games.iter().map(|g| &g.id).collect();
                assert_eq!(ids.len(), games.len(), "{competition_type:?} with {config:?}");
            }
        }
    }
}
