use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::model::WeightUnit;

/// Convert a weight to grams for comparison. A missing unit means the value
/// is taken as grams already; well-formed records always carry a unit, so
/// this is leniency, not data loss.
pub fn to_grams(value: f64, unit: Option<WeightUnit>) -> f64 {
    match unit {
        Some(WeightUnit::Kg) => value * 1000.0,
        Some(WeightUnit::G) | None => value,
    }
}

/// Absolute weight difference in grams. A prediction without a weight value
/// is infinitely far away: it can never win a closeness bonus, but it stays
/// in the collection.
pub fn weight_diff_grams(
    value: Option<f64>,
    unit: Option<WeightUnit>,
    actual_grams: f64,
) -> f64 {
    match value {
        Some(value) => (to_grams(value, unit) - actual_grams).abs(),
        None => f64::INFINITY,
    }
}

/// Absolute length difference in centimeters, infinite when the predicted
/// value is missing.
pub fn length_diff_cm(value: Option<f64>, actual_cm: f64) -> f64 {
    match value {
        Some(value) => (value - actual_cm).abs(),
        None => f64::INFINITY,
    }
}

pub fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Linear difference between two times of day, in minutes. There is no
/// midnight rollover: 23:50 vs 00:10 is 1420 minutes apart, not 20.
pub fn minutes_between(a: NaiveTime, b: NaiveTime) -> i64 {
    (minute_of_day(a) - minute_of_day(b)).abs()
}

pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    a.signed_duration_since(b).num_days().abs()
}
