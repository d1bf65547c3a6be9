//! `study` — drill a study set from the terminal.

mod commands;
mod config;
mod input;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use study_core::SettingsOverrides;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "study", version, about = "Drill a study set with flashcards, match, or learn mode")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible shuffles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Mismatch cooldown in the match game, in milliseconds
    #[arg(long, global = true)]
    cooldown_ms: Option<u64>,

    /// Wrong options per learn question
    #[arg(long, global = true)]
    distractors: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Flip through cards one at a time
    Flashcards {
        /// Study set JSON file
        set: PathBuf,
    },

    /// Pair every term with its definition against the clock
    Match {
        /// Study set JSON file
        set: PathBuf,
    },

    /// Answer multiple-choice questions
    Learn {
        /// Study set JSON file
        set: PathBuf,
    },
}

impl Cli {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            match_cooldown_ms: self.cooldown_ms,
            clock_tick_ms: None,
            distractor_count: self.distractors,
            seed: self.seed,
        }
    }
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never interleave with the session on stdout.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = config::load_settings(cli.config.as_deref())?.merge(&cli.overrides());
    tracing::debug!(?settings, "effective settings");

    let event = match &cli.command {
        Commands::Flashcards { set } => {
            let set = config::load_set(set)?;
            commands::flashcards::execute(&set).await?
        }
        Commands::Match { set } => {
            let set = config::load_set(set)?;
            commands::matching::execute(&set, &settings).await?
        }
        Commands::Learn { set } => {
            let set = config::load_set(set)?;
            commands::learn::execute(&set, &settings).await?
        }
    };

    tracing::info!(event = %serde_json::to_string(&event)?, "session ended");
    Ok(())
}
