use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::Instant;
#[cfg(not(test))]
use tracing::{info, trace, warn};
#[cfg(test)]
use {println as info, println as trace, println as warn};

use crate::{
    model::{GenericError, ModelId, ScoringOutcome},
    scorers::Scorer,
    storage::EventStorage,
};

/// Runs one full scoring pass for an event: fetch, score, rank, persist.
///
/// The closeness bonuses are relative to the whole collection, so a run
/// always recomputes every score from the same snapshot of predictions.
/// Gating new submissions while a run is in flight is the caller's job.
pub struct Processor<S: Scorer> {
    scorer: S,
    storage: Arc<dyn EventStorage>,
}

impl<S: Scorer> Processor<S> {
    pub fn new(scorer: S, storage: Arc<dyn EventStorage>) -> Self {
        info!("Initializing new Processor");
        Self { scorer, storage }
    }

    /// Score every prediction of the event and persist the results.
    ///
    /// Returns `Ok(None)` when there is nothing to do yet: the birth has
    /// not been recorded, or no predictions were submitted. Re-running on
    /// an already-scored event is safe: same inputs, same scores.
    pub async fn score_event(
        &self,
        event_id: ModelId,
    ) -> Result<Option<ScoringOutcome>, GenericError> {
        trace!("Starting scoring run for event {}", event_id);
        let started = Instant::now();

        let event = self.storage.get_event(event_id).await?;

        if !event.report.recorded {
            info!(
                "Birth not recorded yet for event {}, nothing to score",
                event_id
            );
            return Ok(None);
        }
        if event.scoring_completed {
            warn!(
                "Event {} was already scored, recomputing all scores",
                event_id
            );
        }

        let predictions = self.storage.list_predictions(event_id).await?;
        if predictions.is_empty() {
            info!("No predictions submitted for event {}", event_id);
            return Ok(None);
        }
        info!(
            "Scoring {} predictions for event {}",
            predictions.len(),
            event_id
        );

        let mut results = self.scorer.score_event(&predictions, &event.report).await;

        let scores: Vec<(ModelId, i32)> = results
            .iter()
            .map(|entry| (entry.prediction.id, entry.score))
            .collect();
        self.storage.save_scores(event_id, &scores).await?;
        self.storage.mark_scoring_completed(event_id).await?;

        // Leaderboard order: best first, equal scores keep submission order.
        results.sort_by(|a, b| b.score.cmp(&a.score));
        let winner = match results.first() {
            Some(winner) => winner.clone(),
            None => return Ok(None),
        };
        info!(
            "Winner for event {} is {} with {} points",
            event_id, winner.prediction.participant_name, winner.score
        );

        counter!("scoring_runs_total").increment(1);
        counter!("predictions_scored_total").increment(results.len() as u64);
        histogram!("scoring_run_duration_seconds").record(started.elapsed().as_secs_f64());

        Ok(Some(ScoringOutcome { winner, results }))
    }
}
