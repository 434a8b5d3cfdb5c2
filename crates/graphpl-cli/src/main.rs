#![allow(clippy::doc_markdown)]
//! graphpl CLI - command line and REPL front end for the graph engine.

mod repl;
mod repl_commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use graphpl_core::{EngineConfig, GraphEngine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::repl::{OutputFormat, ReplConfig};

/// graphpl - a feature-configurable graph algorithms engine
#[derive(Parser, Debug)]
#[command(name = "graphpl")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(long, env = "GRAPHPL_CONFIG")]
    config: Option<PathBuf>,

    /// Legacy `kName 0|1` feature file (replaces the [features] section)
    #[arg(short, long)]
    features: Option<PathBuf>,

    /// Edge-list file to load at startup (overrides `graph_file`)
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Print algorithm results as JSON
    #[arg(long)]
    json: bool,

    /// Run a command and exit (repeatable); starts the REPL when absent
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,
}

fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let config = EngineConfig::load_with_legacy(args.config.as_deref(), args.features.as_deref())
        .context("Failed to load configuration")?;
    init_tracing(&config.logging.level);

    let mut engine = GraphEngine::new(config.features)?;

    if let Some(path) = args.graph.as_ref().or(config.graph_file.as_ref()) {
        let report = engine
            .load_file(path)
            .with_context(|| format!("Failed to load graph from {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            edges = report.edges_loaded,
            skipped = report.skipped.len(),
            "Graph file loaded"
        );
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut repl_config = ReplConfig::new(format);

    if args.commands.is_empty() {
        repl::run(&mut engine, &mut repl_config)?;
        return Ok(ExitCode::SUCCESS);
    }

    let failures = repl::run_batch(&mut engine, &args.commands, &mut repl_config);
    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
