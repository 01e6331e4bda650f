use std::{fs, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use league_table_lib::{Championship, CompetitionType, ScheduleConfig, Team};
use serde::Deserialize;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Generate league and cup schedules and print standings")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a championship from a setup file and print it as JSON.
    Create {
        setup: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the schedule as text instead of JSON.
        #[arg(long)]
        text: bool,
    },
    /// Print the table of a championship saved as JSON.
    Standings {
        championship: PathBuf,
    },
}

#[derive(Deserialize)]
struct Setup {
    id: String,
    name: String,
    #[serde(rename = "type")]
    competition_type: CompetitionType,
    teams: Vec<Team>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Create { setup, config, text } => {
            let config = match config {
                Some(path) => ScheduleConfig::load(&path).with_context(|| format!("loading {}", path.display()))?,
                None => ScheduleConfig::default(),
            };
            let setup: Setup = serde_json::from_str(&fs::read_to_string(&setup).with_context(|| format!("reading {}", setup.display()))?)?;

            let championship = Championship::build(&setup.id, &setup.name, setup.competition_type, setup.teams, &config, OffsetDateTime::now_utc())?;
            if text {
                println!("{}", championship.display_schedule());
            }
            else {
                println!("{}", serde_json::to_string_pretty(&championship)?);
            }
        },
        Command::Standings { championship } => {
            let json = fs::read_to_string(&championship).with_context(|| format!("reading {}", championship.display()))?;
            let championship: Championship = serde_json::from_str(&json)?;

            println!("{}", championship.display_standings());
            if let Some(champion) = championship.champion() {
                println!("\nChampion: {}", champion.team_name);
            }
        },
    }

    Ok(())
}
