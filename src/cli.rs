use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::ArgAction;
use reqval::Config;

mod complete;
mod list;
mod parse;
mod pattern;
mod terminal;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The validator declaration file
    #[arg(short, long, default_value = "validators.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command.run(&self.config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Parse a requirement into typed arguments
    Parse(parse::Parse),

    /// Show how a pattern literal is read and test inputs against it
    Pattern(pattern::Pattern),

    /// List the validators declared in the config file
    List(list::List),

    /// Generate shell completions
    Completions(complete::Command),
}

impl Command {
    fn run(self, config: &Path) -> anyhow::Result<()> {
        match self {
            Self::Parse(command) => command.run(config)?,
            Self::Pattern(command) => command.run()?,
            Self::List(command) => command.run(config)?,
            Self::Completions(command) => command.run(),
        }
        Ok(())
    }
}

/// Loads the declaration file. A missing file reads as an empty one.
fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    Config::load(path).with_context(|| format!("Failed to load {}", path.display()))
}
