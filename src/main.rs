use anyhow::Result;
use daily_extract::{cli::Cli, commands::handle_command, logging::init_logging};

fn main() -> Result<()> {
	let cli = Cli::parse_args();
	init_logging(cli.verbose);

	handle_command(cli)
}
