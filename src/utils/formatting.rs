//! Date parsing and formatting utilities.

use chrono::NaiveDate;

use crate::error::ConfigError;

/// Date format constants for consistent formatting across the application.
pub mod date_formats {
	/// Date only format, also the daily note file stem: "2024-01-15"
	pub const DATE_ONLY: &str = "%Y-%m-%d";
}

/// Formats a date as date only.
/// Returns: "2024-01-15"
pub fn format_date_only(date: &NaiveDate) -> String { date.format(date_formats::DATE_ONLY).to_string() }

/// Parses a `YYYY-MM-DD` string. Used as the clap value parser for date flags.
pub fn parse_date(input: &str) -> Result<NaiveDate, ConfigError> {
	NaiveDate::parse_from_str(input.trim(), date_formats::DATE_ONLY)
		.map_err(|_| ConfigError::InvalidDate(input.to_string()))
}
