mod config;
mod extract;

use anyhow::Result;
pub use config::handle_config;
pub use extract::{handle_extract, resolve_options};

use crate::{
	cli::{Cli, Commands},
	config::Config,
};

/// Dispatches the parsed command line to its handler
pub fn handle_command(cli: Cli) -> Result<()> {
	let config_path = match cli.config {
		Some(path) => path,
		None => Config::get_config_path()?,
	};

	match cli.command {
		Some(Commands::Config { show, yes }) => handle_config(&config_path, show, yes),
		None => handle_extract(&config_path, cli.extract),
	}
}
