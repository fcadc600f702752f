use std::error::Error;
use std::sync::Arc;

use serde::Deserialize;

use scoring::{
    executable_utils::initialize_executable,
    model::{BabyEvent, Prediction},
    processor::Processor,
    scorers::TableBasedScorer,
    statistics,
    storage::InMemoryEventStorage,
};

#[derive(Debug, Deserialize)]
struct EventFile {
    event: BabyEvent,
    predictions: Vec<Prediction>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    println!("Starting processor...");
    let (args, config) = initialize_executable()?;

    let contents = std::fs::read_to_string(&args.event_file)?;
    let EventFile { event, predictions } = serde_yml::from_str(&contents)?;
    let event_id = event.id;
    let event_name = event.name.clone();

    // Malformed submissions are reported but kept: they still take part in
    // every category they can.
    for prediction in &predictions {
        if let Err(reason) = prediction.validate() {
            tracing::warn!("Prediction {} failed validation: {}", prediction.id, reason);
        }
    }

    let summary = statistics::summarize(&predictions);

    let storage = Arc::new(InMemoryEventStorage::new());
    storage.insert_event(event).await;
    for prediction in predictions {
        storage.insert_prediction(prediction).await;
    }

    let processor = Processor::new(TableBasedScorer::new(config.scoring), storage);

    let Some(outcome) = processor.score_event(event_id).await? else {
        println!("Nothing to score yet for event {}", event_id);
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!();
    println!("Leaderboard for {}:", event_name);
    for (position, entry) in outcome.results.iter().enumerate() {
        println!(
            "{:>3}. {:<24} {:>4} points",
            position + 1,
            entry.prediction.participant_name,
            entry.score
        );
    }
    println!();
    println!(
        "Winner: {} ({} points)",
        outcome.winner.prediction.participant_name, outcome.winner.score
    );

    println!();
    println!("What the crowd predicted:");
    if let Some(date) = summary.average_date {
        println!("  average date:          {}", date);
    }
    if let Some(time) = summary.average_time {
        println!("  average time:          {}", time.format("%H:%M"));
    }
    if let Some(weight) = &summary.average_weight {
        println!("  average weight:        {:.2} {}", weight.value, weight.unit);
    }
    if let Some(length) = summary.average_length_cm {
        println!("  average length:        {} cm", length);
    }
    if let Some(eye_color) = &summary.top_eye_color {
        println!("  most voted eye color:  {}", eye_color);
    }
    if let Some(sex) = &summary.top_sex {
        println!("  most voted sex:        {}", sex);
    }
    if let Some(hair_color) = &summary.top_hair_color {
        println!("  most voted hair color: {}", hair_color);
    }

    Ok(())
}
