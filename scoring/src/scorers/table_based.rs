use async_trait::async_trait;
use common::config::ScoringConfig;
use std::cmp::Ordering;

use crate::{
    model::{BirthReport, Prediction, ScoredPrediction},
    scorers::Scorer,
    units::{days_between, length_diff_cm, minutes_between, to_grams, weight_diff_grams},
};

/// Scorer driven by the configured point tables.
///
/// Scoring is a two-pass computation: [`base_score`](Self::base_score) is
/// per prediction and needs no knowledge of the rest of the collection,
/// while [`apply_closeness_bonuses`](Self::apply_closeness_bonuses) ranks
/// the whole collection and is therefore non-incremental: a late
/// submission means re-running the full pass.
pub struct TableBasedScorer {
    config: ScoringConfig,
}

impl TableBasedScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Category-additive score against the report, excluding the weight and
    /// length closeness bonuses. Every category checks its own report field
    /// and contributes zero when that field is still empty, so a partially
    /// recorded birth scores whatever it can.
    pub fn base_score(&self, prediction: &Prediction, report: &BirthReport) -> i32 {
        let mut score = 0;

        if let Some(actual_date) = report.date {
            score += match days_between(prediction.birth_date, actual_date) {
                0 => self.config.date_exact,
                1 => self.config.date_one_day,
                2 => self.config.date_two_days,
                3 => self.config.date_three_days,
                _ => 0,
            };
        }

        if let Some(actual_time) = report.time {
            score += match minutes_between(prediction.birth_time, actual_time) {
                0 => self.config.time_exact,
                1..=60 => self.config.time_within_hour,
                61..=120 => self.config.time_within_two_hours,
                121..=240 => self.config.time_within_four_hours,
                _ => 0,
            };
        }

        if let Some(actual_eye_color) = &report.eye_color {
            if prediction.eye_color == *actual_eye_color {
                score += self.config.eye_color_match;
            }
        }

        if let Some(actual_sex) = &report.sex {
            if prediction.sex == *actual_sex {
                score += self.config.sex_match;
            }
        }

        // Hair color only counts when both sides actually reported one.
        if let (Some(predicted), Some(actual)) = (&prediction.hair_color, &report.hair_color) {
            if !predicted.is_empty() && !actual.is_empty() && predicted == actual {
                score += self.config.hair_color_match;
            }
        }

        score
    }

    /// Award the closest/runner-up bonuses for weight and length across the
    /// whole collection and return the updated scores.
    ///
    /// The two rankings are independent, so one prediction may collect both
    /// bonuses. Ties keep the input order (the sort is stable), which means
    /// the earlier submission takes the higher bonus. The step is skipped
    /// entirely when the report has no weight or no length yet.
    pub fn apply_closeness_bonuses(
        &self,
        scored: Vec<ScoredPrediction>,
        report: &BirthReport,
    ) -> Vec<ScoredPrediction> {
        let (Some(actual_weight), Some(actual_unit), Some(actual_length)) =
            (report.weight_value, report.weight_unit, report.length_cm)
        else {
            return scored;
        };

        let actual_grams = to_grams(actual_weight, Some(actual_unit));

        let weight_diffs: Vec<f64> = scored
            .iter()
            .map(|entry| {
                weight_diff_grams(
                    entry.prediction.weight_value,
                    entry.prediction.weight_unit,
                    actual_grams,
                )
            })
            .collect();
        let length_diffs: Vec<f64> = scored
            .iter()
            .map(|entry| length_diff_cm(entry.prediction.length_cm, actual_length))
            .collect();

        let mut scored = scored;
        let bonuses = [self.config.closest_bonus, self.config.runner_up_bonus];

        for (&bonus, index) in bonuses.iter().zip(rank_ascending(&weight_diffs)) {
            scored[index].score += bonus;
        }
        for (&bonus, index) in bonuses.iter().zip(rank_ascending(&length_diffs)) {
            scored[index].score += bonus;
        }

        scored
    }
}

/// Indices of the finite diffs, smallest first. Infinite diffs (missing
/// values) are left out: they never win a bonus, not even in a collection
/// of one. The sort is stable, so equal diffs keep their input order.
fn rank_ascending(diffs: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..diffs.len()).filter(|&i| diffs[i].is_finite()).collect();
    order.sort_by(|&a, &b| diffs[a].partial_cmp(&diffs[b]).unwrap_or(Ordering::Equal));
    order
}

#[async_trait]
impl Scorer for TableBasedScorer {
    async fn score_event(
        &self,
        predictions: &[Prediction],
        report: &BirthReport,
    ) -> Vec<ScoredPrediction> {
        let scored = predictions
            .iter()
            .map(|prediction| ScoredPrediction {
                prediction: prediction.clone(),
                score: self.base_score(prediction, report),
            })
            .collect();

        self.apply_closeness_bonuses(scored, report)
    }
}
