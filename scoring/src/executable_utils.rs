use clap::Parser;
use common::config::Config;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the event file (event + predictions) to score
    pub event_file: String,

    /// Path to config file; built-in point tables are used when not given
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the outcome as JSON instead of a leaderboard
    #[arg(long)]
    pub json: bool,
}

pub fn initialize_executable() -> Result<(Args, Config), Box<dyn Error + Send + Sync>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            println!("Loading config from: {}", path);
            Config::load(path)?
        }
        None => Config::default(),
    };

    // Initialize tracing; RUST_LOG wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.common.log_level)),
        )
        .init();

    Ok((args, config))
}
