//! Configuration error taxonomy.
//!
//! Anything in here is the user's to fix (bad flag, bad config value, wrong
//! directory). I/O failures travel as `anyhow::Error` with path context.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors caused by invalid user input or configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
	InvalidDate(String),

	#[error("start_date ({start}) cannot be after end_date ({end}).")]
	InvertedRange { start: NaiveDate, end: NaiveDate },

	#[error("{} is not a valid directory.", .0.display())]
	NotADirectory(PathBuf),

	#[error("cannot look back {days} days from {end}")]
	LookbackOutOfRange { end: NaiveDate, days: u32 },

	#[error("{0}")]
	Invalid(String),
}
