use std::path::Path;

use clap::Parser;
use reqval::Declaration;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "List the validators declared in the config file")]
pub struct List {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl List {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, config_path: &Path) -> anyhow::Result<()> {
        let config = super::load_config(config_path)?;
        let declarations = config.declarations();

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(declarations)?),
            OutputFormat::Table if declarations.is_empty() => {
                println!(
                    "{}",
                    format!("No validators declared in {}", config_path.display()).dim()
                );
            }
            OutputFormat::Table => print_table(declarations),
        }
        Ok(())
    }
}

fn print_table(declarations: &[Declaration]) {
    let width = declarations
        .iter()
        .map(|d| d.name().len())
        .max()
        .unwrap_or_default()
        .max("NAME".len());

    println!("{}", format!("{:<width$}  PRIORITY  TYPE", "NAME").dim());
    for declaration in declarations {
        println!(
            "{}  {:>8}  {}",
            format!("{:<width$}", declaration.name()).label(),
            declaration.priority(),
            declaration.requirement_type()
        );
    }
}
