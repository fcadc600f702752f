use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{BabyEvent, GenericError, ModelId, Prediction};
use crate::storage::EventStorage;

// In-memory implementation, used by tests and the processor binary.
#[derive(Default)]
pub struct InMemoryEventStorage {
    events: Arc<Mutex<HashMap<ModelId, BabyEvent>>>,
    // Submission order matters, so predictions live in a Vec.
    predictions: Arc<Mutex<Vec<Prediction>>>,
    scores: Arc<Mutex<HashMap<ModelId, i32>>>,
}

impl InMemoryEventStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_event(&self, event: BabyEvent) {
        let mut events = self.events.lock().await;
        events.insert(event.id, event);
    }

    pub async fn insert_prediction(&self, prediction: Prediction) {
        let mut predictions = self.predictions.lock().await;
        predictions.push(prediction);
    }

    /// The score last saved for a prediction, if any run stored one.
    pub async fn score_of(&self, prediction_id: ModelId) -> Option<i32> {
        let scores = self.scores.lock().await;
        scores.get(&prediction_id).copied()
    }
}

#[async_trait]
impl EventStorage for InMemoryEventStorage {
    async fn get_event(&self, event_id: ModelId) -> Result<BabyEvent, GenericError> {
        let events = self.events.lock().await;
        events
            .get(&event_id)
            .cloned()
            .ok_or_else(|| format!("event {} not found", event_id).into())
    }

    async fn list_predictions(
        &self,
        event_id: ModelId,
    ) -> Result<Vec<Prediction>, GenericError> {
        let predictions = self.predictions.lock().await;
        Ok(predictions
            .iter()
            .filter(|p| p.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn save_scores(
        &self,
        _event_id: ModelId,
        scores: &[(ModelId, i32)],
    ) -> Result<(), GenericError> {
        let mut stored = self.scores.lock().await;
        for &(prediction_id, score) in scores {
            stored.insert(prediction_id, score);
        }
        Ok(())
    }

    async fn mark_scoring_completed(&self, event_id: ModelId) -> Result<(), GenericError> {
        let mut events = self.events.lock().await;
        let event = events
            .get_mut(&event_id)
            .ok_or_else(|| format!("event {} not found", event_id))?;
        event.scoring_completed = true;
        Ok(())
    }
}
