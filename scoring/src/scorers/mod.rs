pub mod table_based;

pub use table_based::*;

use crate::model::{BirthReport, Prediction, ScoredPrediction};
use async_trait::async_trait;

#[async_trait]
pub trait Scorer: Send + Sync {
    async fn score_event(
        &self,
        predictions: &[Prediction],
        report: &BirthReport,
    ) -> Vec<ScoredPrediction>;
}
