//! Command-line interface for daily-extract.
//!
//! Without a subcommand the extraction runs:
//! - --start_date / --end_date: inclusive date range (YYYY-MM-DD)
//! - --vault_path: directory of daily notes
//! - --output_file: combined document, overwritten on every run
//!
//! The `config` subcommand writes or shows the configuration file.

use std::{ffi::OsString, path::PathBuf};

use chrono::NaiveDate;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand, error::ErrorKind};

use crate::utils::parse_date;

/// Main CLI structure parsed by clap.
#[derive(Parser, Debug)]
#[command(name = "daily-extract", version)]
#[command(about = "Extract Dreams and My Journal sections from daily notes", long_about = None)]
pub struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[command(flatten)]
	pub extract: ExtractArgs,

	/// Configuration file (defaults to the platform config directory)
	#[arg(long, global = true, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// More log output on stderr (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = ArgAction::Count, global = true)]
	pub verbose: u8,
}

impl Cli {
	/// Parses the process arguments, exiting with a usage error on failure.
	pub fn parse_args() -> Self { Self::try_parse_args_from(std::env::args_os()).unwrap_or_else(|err| err.exit()) }

	/// Like `try_parse_from`, but also rejects extraction flags given
	/// together with a subcommand. `--config` and `-v` work everywhere.
	pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
	where
		I: IntoIterator<Item = T>,
		T: Into<OsString> + Clone,
	{
		let cli = Self::try_parse_from(args)?;
		if cli.command.is_some() && cli.extract.is_set() {
			return Err(Self::command().error(
				ErrorKind::ArgumentConflict,
				"--start_date, --end_date, --vault_path and --output_file cannot be used with a subcommand",
			));
		}
		Ok(cli)
	}
}

/// Flags of the extraction run. Unset values come from the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct ExtractArgs {
	/// First day to include (default: end_date minus the lookback, 30 days)
	#[arg(long = "start_date", alias = "start-date", value_name = "YYYY-MM-DD", value_parser = parse_date)]
	pub start_date: Option<NaiveDate>,

	/// Last day to include (default: today)
	#[arg(long = "end_date", alias = "end-date", value_name = "YYYY-MM-DD", value_parser = parse_date)]
	pub end_date: Option<NaiveDate>,

	/// Directory holding the daily notes
	#[arg(long = "vault_path", alias = "vault-path", value_name = "DIR")]
	pub vault_path: Option<PathBuf>,

	/// Output file name
	#[arg(long = "output_file", alias = "output-file", value_name = "FILE")]
	pub output_file: Option<PathBuf>,
}

impl ExtractArgs {
	/// True when any extraction flag was given.
	pub fn is_set(&self) -> bool {
		self.start_date.is_some() || self.end_date.is_some() || self.vault_path.is_some() || self.output_file.is_some()
	}
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Generate a default configuration file, or show the current one
	Config {
		/// Print the effective configuration instead of writing a file
		#[arg(short, long)]
		show: bool,
		/// Overwrite an existing file without asking
		#[arg(short, long)]
		yes:  bool,
	},
}
