mod test_utils;

use async_trait::async_trait;
use common::config::ScoringConfig;
use common::TestError;
use mockall::mock;
use std::sync::Arc;

use scoring::{
    model::{BabyEvent, BirthReport, GenericError, ModelId, Prediction},
    processor::Processor,
    scorers::TableBasedScorer,
    storage::{EventStorage, InMemoryEventStorage},
};

use test_utils::{perfect_prediction, recorded_report, sample_event};

mock! {
    pub Storage {}

    #[async_trait]
    impl EventStorage for Storage {
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
}

fn scorer() -> TableBasedScorer {
    TableBasedScorer::new(ScoringConfig::default())
}

#[tokio::test]
async fn full_run_scores_persists_and_picks_the_winner() {
    let event_id = 7;
    let storage = Arc::new(InMemoryEventStorage::new());
    storage.insert_event(sample_event(event_id, recorded_report())).await;

    let alice = perfect_prediction(event_id, "alice");
    let mut bob = perfect_prediction(event_id, "bob");
    bob.sex = "boy".to_string();
    let (alice_id, bob_id) = (alice.id, bob.id);
    storage.insert_prediction(alice).await;
    storage.insert_prediction(bob).await;

    let processor = Processor::new(scorer(), storage.clone());
    let outcome = processor.score_event(event_id).await.unwrap().unwrap();

    // alice: 145 base + 30 + 30 (ties on both measurements go to the
    // earlier submission); bob: 125 base + 15 + 15.
    assert_eq!(outcome.winner.prediction.id, alice_id);
    assert_eq!(outcome.winner.score, 205);
    assert_eq!(outcome.results.len(), 2);
    assert_eq!(outcome.results[1].score, 155);

    // Scores were persisted and the event flagged as scored.
    assert_eq!(storage.score_of(alice_id).await, Some(205));
    assert_eq!(storage.score_of(bob_id).await, Some(155));
    assert!(storage.get_event(event_id).await.unwrap().scoring_completed);
}

#[tokio::test]
async fn unrecorded_birth_means_nothing_to_score() {
    let event_id = 8;
    let storage = Arc::new(InMemoryEventStorage::new());
    storage
        .insert_event(sample_event(event_id, BirthReport::default()))
        .await;
    let prediction = perfect_prediction(event_id, "alice");
    let prediction_id = prediction.id;
    storage.insert_prediction(prediction).await;

    let processor = Processor::new(scorer(), storage.clone());
    let outcome = processor.score_event(event_id).await.unwrap();

    assert!(outcome.is_none());
    assert_eq!(storage.score_of(prediction_id).await, None);
    assert!(!storage.get_event(event_id).await.unwrap().scoring_completed);
}

#[tokio::test]
async fn event_without_predictions_is_skipped() {
    let event_id = 9;
    let storage = Arc::new(InMemoryEventStorage::new());
    storage.insert_event(sample_event(event_id, recorded_report())).await;

    let processor = Processor::new(scorer(), storage.clone());
    let outcome = processor.score_event(event_id).await.unwrap();

    assert!(outcome.is_none());
    assert!(!storage.get_event(event_id).await.unwrap().scoring_completed);
}

#[tokio::test]
async fn rescoring_a_scored_event_is_deterministic() {
    let event_id = 10;
    let storage = Arc::new(InMemoryEventStorage::new());
    let mut event = sample_event(event_id, recorded_report());
    event.scoring_completed = true;
    storage.insert_event(event).await;
    storage.insert_prediction(perfect_prediction(event_id, "alice")).await;

    let processor = Processor::new(scorer(), storage.clone());
    let first = processor.score_event(event_id).await.unwrap().unwrap();
    let second = processor.score_event(event_id).await.unwrap().unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn equal_scores_leave_the_earlier_submission_on_top() {
    let event_id = 11;
    let report = BirthReport {
        weight_value: Some(3.15),
        weight_unit: Some(scoring::model::WeightUnit::Kg),
        length_cm: Some(50.0),
        recorded: true,
        ..BirthReport::default()
    };
    let storage = Arc::new(InMemoryEventStorage::new());
    storage.insert_event(sample_event(event_id, report)).await;

    // alice wins weight and is runner-up on length; bob mirrors her.
    let mut alice = perfect_prediction(event_id, "alice");
    alice.weight_value = Some(3.16);
    alice.length_cm = Some(52.0);
    let mut bob = perfect_prediction(event_id, "bob");
    bob.weight_value = Some(3.17);
    bob.length_cm = Some(51.0);
    let alice_id = alice.id;
    storage.insert_prediction(alice).await;
    storage.insert_prediction(bob).await;

    let processor = Processor::new(scorer(), storage);
    let outcome = processor.score_event(event_id).await.unwrap().unwrap();

    assert_eq!(outcome.results[0].score, outcome.results[1].score);
    assert_eq!(outcome.winner.prediction.id, alice_id);
}

#[tokio::test]
async fn storage_errors_bubble_up() {
    let mut storage = MockStorage::new();
    storage
        .expect_get_event()
        .returning(|_| Err(Box::new(TestError::mock_failure("storage offline"))));

    let processor = Processor::new(scorer(), Arc::new(storage));
    let result = processor.score_event(1).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn failed_score_write_aborts_before_the_completed_flag() {
    let event_id = 12;
    let event = sample_event(event_id, recorded_report());
    let prediction = perfect_prediction(event_id, "alice");
    let prediction_id = prediction.id;

    let mut storage = MockStorage::new();
    storage
        .expect_get_event()
        .returning(move |_| Ok(event.clone()));
    storage
        .expect_list_predictions()
        .returning(move |_| Ok(vec![prediction.clone()]));
    storage
        .expect_save_scores()
        .withf(move |&id, scores| {
            // Single prediction: full base score plus both top bonuses.
            id == 12 && scores == [(prediction_id, 205)]
        })
        .returning(|_, _| Err(Box::new(TestError::mock_failure("write failed"))));
    storage.expect_mark_scoring_completed().times(0);

    let processor = Processor::new(scorer(), Arc::new(storage));
    let result = processor.score_event(event_id).await;

    assert!(result.is_err());
}
