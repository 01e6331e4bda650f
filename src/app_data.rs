// Application state: every championship plus the one being looked at.
// The surrounding UI calls these operations instead of mutating globals.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::info;

use crate::{
    competition::{Championship, CompetitionType},
    config::ScheduleConfig, error::TournamentError, game::Game, team::Team,
    types::{ChampionshipId, Goals},
};

#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, PartialEq, Eq)]
pub struct AppData {
    pub championships: Vec<Championship>,
    pub active: Option<ChampionshipId>,
    #[serde(default)]
    pub config: ScheduleConfig,
}

// Basics.
impl AppData {
    // Build the thing.
    pub fn build(config: ScheduleConfig) -> Self {
        Self {
            championships: Vec::new(),
            active: None,
            config: config,
        }
    }

    // Restore the state from a snapshot made with to_json.
    pub fn from_json(json: &str) -> Result<Self, TournamentError> {
        let data: Self = serde_json::from_str(json).map_err(|e| TournamentError::Snapshot(e.to_string()))?;

        if let Some(id) = data.active.as_deref() {
            if data.championship(id).is_none() {
                return Err(TournamentError::UnknownChampionship(id.to_string()));
            }
        }

        return Ok(data);
    }

    // Take a snapshot for whoever persists the state.
    pub fn to_json(&self) -> Result<String, TournamentError> {
        serde_json::to_string(self).map_err(|e| TournamentError::Snapshot(e.to_string()))
    }
}

// Functional.
impl AppData {
    pub fn championship(&self, id: &str) -> Option<&Championship> {
        self.championships.iter().find(|c| c.id == id)
    }

    fn championship_mut(&mut self, id: &str) -> Result<&mut Championship, TournamentError> {
        self.championships.iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| TournamentError::UnknownChampionship(id.to_string()))
    }

    // Create a championship and make it the active one.
    pub fn create_championship(
        &mut self,
        id: &str,
        name: &str,
        competition_type: CompetitionType,
        teams: Vec<Team>,
        created_at: OffsetDateTime,
    ) -> Result<&Championship, TournamentError> {
        if self.championship(id).is_some() {
            return Err(TournamentError::DuplicateChampionship(id.to_string()));
        }

        let championship = Championship::build(id, name, competition_type, teams, &self.config, created_at)?;
        self.championships.push(championship);
        self.active = Some(id.to_string());

        return self.championship_mut(id).map(|c| &*c);
    }

    // Delete a whole championship. Clears the active one if it was deleted.
    pub fn delete_championship(&mut self, id: &str) -> Result<Championship, TournamentError> {
        let index = self.championships.iter()
            .position(|c| c.id == id)
            .ok_or_else(|| TournamentError::UnknownChampionship(id.to_string()))?;

        if self.active.as_deref() == Some(id) {
            self.active = None;
        }

        info!(championship = id, "deleted championship");
        Ok(self.championships.remove(index))
    }

    pub fn set_active(&mut self, id: &str) -> Result<(), TournamentError> {
        if self.championship(id).is_none() {
            return Err(TournamentError::UnknownChampionship(id.to_string()));
        }

        self.active = Some(id.to_string());
        Ok(())
    }

    pub fn active_championship(&self) -> Option<&Championship> {
        self.championship(self.active.as_deref()?)
    }

    // Record a score in the active championship.
    pub fn update_score(&mut self, game_id: &str, home: Goals, away: Goals) -> Result<&Game, TournamentError> {
        let id = self.active.clone().ok_or(TournamentError::NoActiveChampionship)?;
        self.championship_mut(&id)?.record_score(game_id, home, away)
    }
}
