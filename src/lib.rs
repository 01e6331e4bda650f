pub mod app_data;
pub mod competition;
pub mod config;
pub mod error;
pub mod game;
pub mod team;
pub mod types;

pub use app_data::AppData;
pub use competition::{
    season::{
        compute_cup_standings, compute_standings, compute_standings_with, display_standings,
        ranking::{RankCriteria, DEFAULT_CRITERIA},
        schedule_generator::generate_schedule,
        team::StandingRow,
    },
    Championship, ChampionshipStatus, CompetitionType,
};
pub use config::ScheduleConfig;
pub use error::{ConfigError, TournamentError};
pub use game::{Game, GameResult};
pub use team::Team;
