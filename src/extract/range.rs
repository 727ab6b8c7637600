use std::fmt;

use chrono::{Days, NaiveDate};

use crate::{error::ConfigError, utils::format_date_only};

/// Inclusive range of calendar days. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
	start: NaiveDate,
	end:   NaiveDate,
}

impl DateRange {
	pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ConfigError> {
		if start > end {
			return Err(ConfigError::InvertedRange { start, end });
		}
		Ok(Self { start, end })
	}

	/// Fills in missing bounds: `end` defaults to `today`, `start` to
	/// `lookback_days` before `end`.
	pub fn resolve(
		start: Option<NaiveDate>,
		end: Option<NaiveDate>,
		today: NaiveDate,
		lookback_days: u32,
	) -> Result<Self, ConfigError> {
		let end = end.unwrap_or(today);
		let start = match start {
			Some(start) => start,
			None => end
				.checked_sub_days(Days::new(u64::from(lookback_days)))
				.ok_or(ConfigError::LookbackOutOfRange { end, days: lookback_days })?,
		};
		Self::new(start, end)
	}

	pub fn start(&self) -> NaiveDate { self.start }

	pub fn end(&self) -> NaiveDate { self.end }

	pub fn contains(&self, date: NaiveDate) -> bool { self.start <= date && date <= self.end }
}

impl fmt::Display for DateRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} to {}", format_date_only(&self.start), format_date_only(&self.end))
	}
}
