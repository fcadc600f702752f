pub mod in_memory;

pub use in_memory::*;

use crate::model::{BabyEvent, GenericError, ModelId, Prediction};
use async_trait::async_trait;

/// Storage seam for one prediction event. The engine only ever reads the
/// event and its predictions and writes back `(prediction id, score)` pairs
/// plus the event-level completion flag; everything else about persistence
/// belongs to the implementor.
///
/// `list_predictions` must return predictions in submission order; the
/// closeness pass breaks ties in favor of the earlier submission.
#[async_trait]
pub trait EventStorage: Send + Sync {
    async fn get_event(&self, event_id: ModelId) -> Result<BabyEvent, GenericError>;

    async fn list_predictions(
        &self,
        event_id: ModelId,
    ) -> Result<Vec<Prediction>, GenericError>;

    async fn save_scores(
        &self,
        event_id: ModelId,
        scores: &[(ModelId, i32)],
    ) -> Result<(), GenericError>;

    async fn mark_scoring_completed(&self, event_id: ModelId) -> Result<(), GenericError>;
}
