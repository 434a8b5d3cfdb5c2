//! Interactive REPL and batch runner.

use colored::Colorize;
use graphpl_core::GraphEngine;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::repl_commands::{handle_command, print_help, CommandResult};

/// How algorithm results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Session settings.
#[derive(Debug, Clone, Default)]
pub struct ReplConfig {
    pub format: OutputFormat,
}

impl ReplConfig {
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

/// Runs each command in order and stops at `quit`.
///
/// Returns the number of commands that failed.
pub fn run_batch(engine: &mut GraphEngine, commands: &[String], config: &mut ReplConfig) -> usize {
    let mut failures = 0;
    for command in commands {
        match handle_command(engine, command, config) {
            CommandResult::Continue => {}
            CommandResult::Quit => break,
            CommandResult::Error(msg) => {
                eprintln!("{}", msg.red());
                failures += 1;
            }
        }
    }
    failures
}

/// Runs the interactive loop until `quit`, Ctrl-C or Ctrl-D.
pub fn run(engine: &mut GraphEngine, config: &mut ReplConfig) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!(
        "{} {}",
        "graphpl".bold().cyan(),
        env!("CARGO_PKG_VERSION").dimmed()
    );
    print_help(engine.features());

    loop {
        match rl.readline(&format!("{} ", "graphpl>".green())) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                match handle_command(engine, line, config) {
                    CommandResult::Continue => {}
                    CommandResult::Quit => break,
                    CommandResult::Error(msg) => eprintln!("{}", msg.red()),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    tracing::info!("REPL session closed");
    Ok(())
}
