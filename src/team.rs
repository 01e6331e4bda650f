// Participants of a championship.

use serde::{Deserialize, Serialize};

use crate::types::TeamId;

#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub is_human: bool,
}

// Basics.
impl Team {
    pub fn build(id: &str, name: &str, is_human: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            is_human: is_human,
        }
    }

    // Build AI-controlled teams whose id and name are the same string.
    pub fn build_many(names: &[&str]) -> Vec<Self> {
        names.iter().map(|name| Self::build(name, name, false)).collect()
    }
}

// Get the ids of the teams, keeping their order.
pub fn team_ids(teams: &[Team]) -> Vec<TeamId> {
    teams.iter().map(|team| team.id.clone()).collect()
}
