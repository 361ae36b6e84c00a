//! `reqval`: inspect how requirements are parsed and declared.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
