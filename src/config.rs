// Scheduling parameters.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, types::RoundNumber};

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScheduleConfig {
    // How many times each league team meets every other team. 1 = single round robin.
    pub legs: u8,

    // Keep appending legs until the league has at least this many rounds. 0 disables it.
    pub min_rounds: RoundNumber,

    // 1 = single match per cup pair, 2 = home and away.
    pub cup_legs: u8,

    // Stage label for single-leg cup matches.
    pub cup_stage_label: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            legs: 2,
            min_rounds: 0,
            cup_legs: 1,
            cup_stage_label: "Quarterfinals".to_string(),
        }
    }
}

// Basics.
impl ScheduleConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        return Ok(config);
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    // Make sure the config does not have illegal values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.legs == 0 {
            return Err(ConfigError::Invalid("legs must be at least 1"));
        }
        if !(1..=2).contains(&self.cup_legs) {
            return Err(ConfigError::Invalid("cup_legs must be 1 or 2"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = ScheduleConfig::from_json_str(r#"{"min_rounds": 10}"#).unwrap();
        assert_eq!(config.min_rounds, 10);
        assert_eq!(config.legs, 2);
        assert_eq!(config.cup_legs, 1);
        assert_eq!(config.cup_stage_label, "Quarterfinals");
    }

    #[test]
    fn zero_legs_is_rejected() {
        let result = ScheduleConfig::from_json_str(r#"{"legs": 0}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn three_cup_legs_is_rejected() {
        let result = ScheduleConfig::from_json_str(r#"{"cup_legs": 3}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = ScheduleConfig::from_json_str("{legs: }");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = ScheduleConfig::load("/nonexistent/league-table.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
