use std::path::Path;

use anyhow::Context;
use clap::Parser;
use reqval::{
    Arg, RequirementType,
    requirement::{self, NoDocument},
};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Parse a requirement into typed arguments")]
pub struct Parse {
    /// The requirement text, e.g. "[1, 5]" or "/ab+c/i"
    requirement: String,

    /// Requirement type, e.g. "number" or "[integer, integer]"
    #[arg(long = "type", value_name = "TYPE", conflicts_with = "validator")]
    requirement_type: Option<RequirementType>,

    /// Use the requirement type declared for this validator
    #[arg(long, value_name = "NAME")]
    validator: Option<String>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Parse {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, config: &Path) -> anyhow::Result<()> {
        let requirement_type = self.resolve_type(config)?;
        let args = requirement::parse_text(&self.requirement, &requirement_type, &NoDocument)
            .with_context(|| format!("Failed to parse requirement as {requirement_type}"))?;

        match self.output {
            OutputFormat::Pretty => print_pretty(&requirement_type, &args),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&args)?),
        }
        Ok(())
    }

    /// An explicit `--type` wins, then the declared type of `--validator`.
    fn resolve_type(&self, config: &Path) -> anyhow::Result<RequirementType> {
        if let Some(requirement_type) = &self.requirement_type {
            return Ok(requirement_type.clone());
        }
        let Some(name) = &self.validator else {
            return Ok(RequirementType::default());
        };

        let config = super::load_config(config)?;
        let declaration = config
            .find(name)
            .with_context(|| format!("No validator named {name} is declared"))?;
        tracing::debug!(
            validator = %name,
            requirement_type = %declaration.requirement_type(),
            "using declared type"
        );
        Ok(declaration.requirement_type().clone())
    }
}

fn print_pretty(requirement_type: &RequirementType, args: &[Arg]) {
    println!("{} {}", "type:".dim(), requirement_type.to_string().label());
    for (index, arg) in args.iter().enumerate() {
        println!(
            "  {} {} {arg}",
            format!("[{index}]").dim(),
            format!("{:<9}", variant_name(arg)).dim()
        );
    }
}

const fn variant_name(arg: &Arg) -> &'static str {
    match arg {
        Arg::String(_) => "string",
        Arg::Integer(_) => "integer",
        Arg::Number(_) => "number",
        Arg::Reference(_) => "reference",
        Arg::Regexp(_) => "regexp",
        Arg::List(_) => "list",
    }
}
