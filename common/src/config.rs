use serde::Deserialize;
use std::{error::Error, fs};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    pub project_name: String,
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            project_name: "storkpool".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Point values for the prediction scorer. The tier boundaries (whole days,
/// minute buckets) are fixed in the scoring code; only the awarded points
/// are configurable.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScoringConfig {
    pub date_exact: i32,
    pub date_one_day: i32,
    pub date_two_days: i32,
    pub date_three_days: i32,
    pub time_exact: i32,
    pub time_within_hour: i32,
    pub time_within_two_hours: i32,
    pub time_within_four_hours: i32,
    pub eye_color_match: i32,
    pub sex_match: i32,
    pub hair_color_match: i32,
    pub closest_bonus: i32,
    pub runner_up_bonus: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            date_exact: 50,
            date_one_day: 30,
            date_two_days: 20,
            date_three_days: 10,
            time_exact: 40,
            time_within_hour: 20,
            time_within_two_hours: 15,
            time_within_four_hours: 10,
            eye_color_match: 20,
            sex_match: 20,
            hair_color_match: 15,
            closest_bonus: 30,
            runner_up_bonus: 15,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub common: CommonConfig,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn load(config_path: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let contents = fs::read_to_string(config_path)?;
        let config = serde_yml::from_str(&contents)?;

        Ok(config)
    }
}
