use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use crate::{
	cli::ExtractArgs,
	config::Config,
	error::ConfigError,
	extract::{self, DateRange, ExtractOptions},
};

/// Handles the default command - extracts dream and journal sections
pub fn handle_extract(config_path: &Path, args: ExtractArgs) -> Result<()> {
	let config = Config::load_from(config_path).context("Failed to load configuration")?;
	let options = resolve_options(args, &config, Local::now().date_naive())?;

	println!("Extracting notes from {}", options.range);

	let report = extract::run(&options)?;

	println!("Found {} notes in the specified date range.", report.notes_found);
	println!("Content extracted and saved to {}", report.output_file.display());
	Ok(())
}

/// Merges flags over config values and checks them. Flags win; the range is
/// checked before the vault directory.
pub fn resolve_options(args: ExtractArgs, config: &Config, today: NaiveDate) -> Result<ExtractOptions, ConfigError> {
	let range = DateRange::resolve(args.start_date, args.end_date, today, config.vault.lookback_days)?;

	let vault_path = args.vault_path.unwrap_or_else(|| config.vault.vault_path());
	if !vault_path.is_dir() {
		return Err(ConfigError::NotADirectory(vault_path));
	}

	Ok(ExtractOptions {
		range,
		vault_path,
		output_file: args.output_file.unwrap_or_else(|| config.vault.output_file.clone()),
		extension: config.vault.extension.clone(),
		headings: config.headings.clone(),
	})
}
