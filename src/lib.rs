//! rtable library root.
//! Exposes the table core, the CLI parser, and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::{Plain, Styler, Table};
pub use models::Cell;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());

    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => {
            let cfg = Config::load_from(&path)?;
            cli::commands::config::handle(&cli.command, &cfg, &path)
        }
        Commands::Render { .. } => {
            let cfg = Config::load_from(&path)?;
            cli::commands::render::handle(&cli.command, &cfg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}
