use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::Serialize;
use std::collections::HashMap;

use crate::{
    model::{Prediction, WeightUnit},
    units::{minute_of_day, to_grams},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageWeight {
    pub value: f64,
    pub unit: WeightUnit,
}

/// Descriptive statistics over a prediction collection, for display only.
/// Every field is `None` when the collection is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PredictionSummary {
    pub average_date: Option<NaiveDate>,
    pub average_time: Option<NaiveTime>,
    pub average_weight: Option<AverageWeight>,
    pub average_length_cm: Option<f64>,
    pub top_eye_color: Option<String>,
    pub top_sex: Option<String>,
    pub top_hair_color: Option<String>,
}

pub fn summarize(predictions: &[Prediction]) -> PredictionSummary {
    if predictions.is_empty() {
        return PredictionSummary::default();
    }

    let timestamps: Vec<i64> = predictions
        .iter()
        .map(|p| p.birth_date.and_time(NaiveTime::MIN).and_utc().timestamp())
        .collect();
    let mean_timestamp = mean(&timestamps.iter().map(|&t| t as f64).collect::<Vec<_>>());
    let average_date =
        mean_timestamp.and_then(|t| DateTime::from_timestamp(t as i64, 0).map(|dt| dt.date_naive()));

    let minutes: Vec<f64> = predictions
        .iter()
        .map(|p| minute_of_day(p.birth_time) as f64)
        .collect();
    let average_time = mean(&minutes).and_then(|m| {
        NaiveTime::from_hms_opt((m / 60.0).floor() as u32, (m % 60.0).floor() as u32, 0)
    });

    // Malformed records are left out of the numeric means only; they still
    // count for every other average and mode.
    let grams: Vec<f64> = predictions
        .iter()
        .filter_map(|p| p.weight_value.map(|value| to_grams(value, p.weight_unit)))
        .collect();
    let average_weight = mean(&grams).map(|mean_grams| {
        if mean_grams > 1000.0 {
            AverageWeight {
                value: mean_grams / 1000.0,
                unit: WeightUnit::Kg,
            }
        } else {
            AverageWeight {
                value: mean_grams,
                unit: WeightUnit::G,
            }
        }
    });

    let lengths: Vec<f64> = predictions.iter().filter_map(|p| p.length_cm).collect();
    let average_length_cm = mean(&lengths).map(|m| (m * 10.0).round() / 10.0);

    let eye_colors: Vec<&str> = predictions.iter().map(|p| p.eye_color.as_str()).collect();
    let sexes: Vec<&str> = predictions.iter().map(|p| p.sex.as_str()).collect();
    let hair_colors: Vec<&str> = predictions
        .iter()
        .filter_map(|p| p.hair_color.as_deref())
        .collect();

    PredictionSummary {
        average_date,
        average_time,
        average_weight,
        average_length_cm,
        top_eye_color: mode(&eye_colors),
        top_sex: mode(&sexes),
        top_hair_color: mode(&hair_colors),
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Most frequent value, empty strings excluded. Ties go to the value seen
/// first in iteration order.
fn mode(values: &[&str]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &value in values {
        if !value.is_empty() {
            *counts.entry(value).or_default() += 1;
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for &value in values {
        if value.is_empty() {
            continue;
        }
        let count = counts[value];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value.to_string())
}
