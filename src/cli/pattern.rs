use clap::Parser;
use reqval::requirement::regexp;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Show how a pattern literal is read and test inputs against it")]
pub struct Pattern {
    /// A bare pattern, or a literal in /pattern/flags syntax
    literal: String,

    /// Inputs to test against the pattern
    inputs: Vec<String>,
}

impl Pattern {
    pub fn run(self) -> anyhow::Result<()> {
        let literal = regexp::normalize_literal(&self.literal);
        let pattern = reqval::Pattern::new(literal.pattern, literal.flags)?;

        let flags = pattern.flags().to_string();
        println!("{} {}", "pattern:".dim(), pattern.source().label());
        println!(
            "{}   {}",
            "flags:".dim(),
            if flags.is_empty() {
                "(none)".dim()
            } else {
                flags.label()
            }
        );

        for input in &self.inputs {
            if pattern.is_match(input) {
                println!("{} {input}", "match   ".pass());
            } else {
                println!("{} {input}", "no match".fail());
            }
        }
        Ok(())
    }
}
