//! Echolist CLI - Voice-Command Todo Assistant
//!
//! Interactive terminal host for the voicecmd engine. Each typed line
//! stands in for a finalized speech transcript and runs one full
//! classify -> match -> execute pipeline against an in-memory todo store.

mod output;
mod repl;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use todos::InMemoryTodoStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicecmd::{EngineConfig, Language, VoicePipeline};

/// Echolist - bilingual voice-command todo assistant
#[derive(Parser)]
#[command(name = "echolist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive todo assistant driven by voice-style commands")]
#[command(long_about = r#"
Echolist hosts the voice-command intent resolution engine in a terminal.
Each line you type is treated as a finalized speech transcript, classified
against the English or Urdu pattern tables, fuzzy-matched against your
todos, and executed.

Examples:
  echolist                                  # English REPL
  echolist --lang ur                        # Urdu REPL
  echolist once "add todo: Buy milk"        # Single command, then exit
"#)]
struct Cli {
    /// Recognition language (en or ur)
    #[arg(short, long, env = "ECHOLIST_LANG", default_value = "en")]
    lang: Language,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single transcript through the pipeline and exit
    Once {
        /// The transcript to process, e.g. "add todo: Buy milk"
        transcript: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("echolist={},voicecmd={},warn", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let store = Arc::new(InMemoryTodoStore::new());
    let config = match cli.lang {
        Language::En => EngineConfig::english(),
        Language::Ur => EngineConfig::urdu(),
    };
    let pipeline = VoicePipeline::new(store, config);

    match cli.command {
        Some(Commands::Once { transcript }) => {
            let outcome = pipeline.handle_transcript(&transcript).await;
            output::print_outcome(&outcome);
            if !outcome.success {
                std::process::exit(1);
            }
        }
        None => {
            let mut repl = repl::EcholistRepl::new(pipeline)?;
            repl.run().await?;
        }
    }

    Ok(())
}
