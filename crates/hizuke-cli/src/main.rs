//! Hizuke CLI Application
//!
//! Command-line front end for the hizuke milestone date calculator.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, CliConfig};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        today,
        base_url,
        strict,
        command,
    } = Args::parse();

    let cli = Cli::new(
        CliConfig {
            today,
            base_url,
            strict,
        },
        TerminalRenderer::new(!no_color),
    );

    info!("Hizuke started");

    match command {
        Render(args) => cli.render(args),
        Resolve(args) => cli.resolve(args),
        Show(args) => cli.show(args),
        Encode(args) => cli.encode(args),
        Edit(args) => cli.edit(args),
    }
}
