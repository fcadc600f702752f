use chrono::{serde::ts_seconds, DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use strum_macros::Display as EnumDisplay;

pub type ModelId = i64;

pub type GenericError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumDisplay)]
pub enum WeightUnit {
    #[serde(rename = "kg")]
    #[strum(to_string = "kg")]
    Kg,
    #[serde(rename = "g")]
    #[strum(to_string = "g")]
    G,
}

/// One participant's guess, created once at submission time. The scorer
/// never writes to it; final scores travel as separate [`ScoredPrediction`]
/// values.
///
/// Weight and length are optional because a malformed submission must still
/// take part in every category it can: a missing value only forfeits the
/// closeness bonus for that dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: ModelId,
    pub event_id: ModelId,
    pub participant_name: String,
    pub participant_email: String,
    pub birth_date: NaiveDate,
    pub birth_time: NaiveTime,
    pub weight_value: Option<f64>,
    pub weight_unit: Option<WeightUnit>,
    pub length_cm: Option<f64>,
    pub eye_color: String,
    pub sex: String,
    pub hair_color: Option<String>,
    #[serde(with = "ts_seconds")]
    pub submitted_at: DateTime<Utc>,
}

impl Prediction {
    /// Submission-edge validation. The scorer itself never calls this:
    /// records that slipped through degrade per category instead of failing.
    pub fn validate(&self) -> Result<(), String> {
        if self.participant_name.trim().is_empty() {
            return Err("participant name must not be empty".to_string());
        }
        if !self.participant_email.contains('@') {
            return Err(format!(
                "invalid participant email: {}",
                self.participant_email
            ));
        }
        if let Some(weight) = self.weight_value {
            if weight <= 0.0 {
                return Err(format!("predicted weight must be positive, got {}", weight));
            }
        }
        if let Some(length) = self.length_cm {
            if length <= 0.0 {
                return Err(format!("predicted length must be positive, got {}", length));
            }
        }
        Ok(())
    }
}

/// The recorded birth attributes for one event. Created with every field
/// empty and filled in once by the "birth recorded" action; `recorded` is
/// the set-once flag that gates scoring.
///
/// Every attribute stays optional: scoring degrades category by category
/// when the report is only partially filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthReport {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub weight_value: Option<f64>,
    pub weight_unit: Option<WeightUnit>,
    pub length_cm: Option<f64>,
    pub eye_color: Option<String>,
    pub sex: Option<String>,
    pub hair_color: Option<String>,
    pub recorded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabyEvent {
    pub id: ModelId,
    pub name: String,
    pub public_identifier: String,
    #[serde(default)]
    pub report: BirthReport,
    #[serde(default)]
    pub scoring_completed: bool,
}

/// A prediction decorated with its final score. Scoring returns fresh
/// values; the caller decides what to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPrediction {
    pub prediction: Prediction,
    pub score: i32,
}

/// Result of one full scoring run: every prediction with its final score,
/// ordered best first, plus the winner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringOutcome {
    pub winner: ScoredPrediction,
    pub results: Vec<ScoredPrediction>,
}
