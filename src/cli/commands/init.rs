use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes a default configuration file at the configured path
/// (`~/.rtable/rtable.conf` unless `--config` is given).
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let path = Config::resolve_path(cli.config.as_deref());

    info("Initializing rtable…");
    Config::init_at(&path, force)?;
    success(format!("Config file: {}", path.display()));

    Ok(())
}
