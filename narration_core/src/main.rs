//! Guide - command-line shell around the narration engine.
//!
//! Loads a knowledge base and aligns pre-generated narration with the
//! landmarks it mentions.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use landmark_atlas::KnowledgeBase;
use narration_core::{
    build_context, ChatMessage, GuideConfig, GuidePrompt, ScriptedGenerator, TravelGuide,
    TurnRequest,
};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "guide")]
#[command(version)]
#[command(about = "Align travel narration with the landmarks it mentions")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "GUIDE_CONFIG")]
    config: Option<PathBuf>,

    /// Knowledge base file (.json or .toml), overrides the configuration
    #[arg(short, long, env = "GUIDE_KNOWLEDGE_BASE")]
    knowledge_base: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available locations
    Locations,

    /// Show a location's city info and landmarks
    Landmarks {
        location: String,
    },

    /// Print the system prompt for a location
    Prompt {
        location: String,
    },

    /// Align narration text with landmark mentions
    Timeline {
        /// Location to match against, defaults to the configured location
        location: Option<String>,

        /// Read narration from a file instead of stdin
        #[arg(short, long)]
        text_file: Option<PathBuf>,
    },

    /// Show the configured generator and loaded locations
    Health,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("guide={0},narration_core={0},landmark_atlas={0}", log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => GuideConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GuideConfig::default(),
    };

    let Some(kb_path) = cli.knowledge_base.clone().or_else(|| config.knowledge_base.clone()) else {
        bail!("no knowledge base given, pass --knowledge-base or set it in the config");
    };
    let knowledge_base = KnowledgeBase::load(&kb_path)
        .with_context(|| format!("failed to load knowledge base {}", kb_path.display()))?;

    match cli.command {
        Commands::Locations => {
            let summaries: BTreeMap<_, _> = knowledge_base
                .location_summaries()
                .into_iter()
                .map(|(key, city)| (key.as_str(), city))
                .collect();
            print_json(&summaries)?;
        }
        Commands::Landmarks { location } => {
            let entry = knowledge_base.require(&location)?;
            print_json(entry)?;
        }
        Commands::Prompt { location } => {
            let context = build_context(&knowledge_base, &location);
            let prompt = GuidePrompt::new(config.persona.as_str(), context);
            println!("{}", prompt.render());
        }
        Commands::Timeline {
            location,
            text_file,
        } => {
            let text = read_narration(text_file.as_ref())?;
            let generator = ScriptedGenerator::new(text);
            let guide = TravelGuide::new(Arc::new(knowledge_base), config, generator);

            let mut request =
                TurnRequest::new(vec![ChatMessage::user("Tell me about this place.")]);
            request.location = location;

            print_json(&guide.respond(&request)?)?;
        }
        Commands::Health => {
            let generator = ScriptedGenerator::default();
            let guide = TravelGuide::new(Arc::new(knowledge_base), config, generator);
            print_json(&guide.health())?;
        }
    }

    Ok(())
}

fn read_narration(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read narration {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read narration from stdin")?;
            Ok(text)
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
