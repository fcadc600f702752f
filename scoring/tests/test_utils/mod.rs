#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use common::generate_unique_id;
use scoring::model::{BabyEvent, BirthReport, Prediction, WeightUnit};

/// A fully recorded birth: 2025-06-15 14:30, 3.15 kg, 50 cm, brown eyes,
/// girl, black hair.
pub fn recorded_report() -> BirthReport {
    BirthReport {
        date: NaiveDate::from_ymd_opt(2025, 6, 15),
        time: NaiveTime::from_hms_opt(14, 30, 0),
        weight_value: Some(3.15),
        weight_unit: Some(WeightUnit::Kg),
        length_cm: Some(50.0),
        eye_color: Some("brown".to_string()),
        sex: Some("girl".to_string()),
        hair_color: Some("black".to_string()),
        recorded: true,
    }
}

/// A prediction that matches [`recorded_report`] in every category.
pub fn perfect_prediction(event_id: i64, name: &str) -> Prediction {
    Prediction {
        id: generate_unique_id(),
        event_id,
        participant_name: name.to_string(),
        participant_email: format!("{}@example.com", name),
        birth_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        birth_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
        weight_value: Some(3.15),
        weight_unit: Some(WeightUnit::Kg),
        length_cm: Some(50.0),
        eye_color: "brown".to_string(),
        sex: "girl".to_string(),
        hair_color: Some("black".to_string()),
        submitted_at: Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap(),
    }
}

pub fn sample_event(id: i64, report: BirthReport) -> BabyEvent {
    BabyEvent {
        id,
        name: "Waiting for Robin".to_string(),
        public_identifier: "robin-2025".to_string(),
        report,
        scoring_completed: false,
    }
}
