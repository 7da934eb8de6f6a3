//! Command implementations for prodgen.
//!
//! Each handler returns the JSON it would print, so handlers can be tested
//! without capturing stdout. [`dispatch`] prints the result.

mod generate;
mod io;
mod parse;

#[cfg(test)]
mod tests;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;
use crate::generator::CommandGenerator;
use crate::service::ContentService;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;

    match cli.command {
        Command::Parse(args) => {
            let output = parse::cmd_parse(&args, &config)?;
            io::print_json(&output)
        }
        Command::Prompt(args) => {
            let output = generate::cmd_prompt(&args, &config)?;
            io::print_json(&output)
        }
        Command::Generate(args) => {
            let service = backend_service(&config);
            let output = generate::cmd_generate(&args, &service)?;
            io::print_json(&output)
        }
        Command::Complete(args) => {
            let service = backend_service(&config);
            let output = generate::cmd_complete(&args, &service)?;
            match &args.output {
                Some(path) => io::write_json(path, &output),
                None => io::print_json(&output),
            }
        }
    }
}

fn backend_service(config: &Config) -> ContentService<CommandGenerator> {
    ContentService::new(
        CommandGenerator::new(config.generation.clone()),
        config.extraction,
    )
}
