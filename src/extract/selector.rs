//! Picks the daily notes of a vault that fall inside a date range.

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;

use super::DateRange;
use crate::{error::ConfigError, utils::date_formats};

/// A daily note file and the date its name carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyNote {
	pub date: NaiveDate,
	pub path: PathBuf,
}

/// Lists notes named `YYYY-MM-DD.<extension>` directly inside `vault`, keeps
/// those within `range` and returns them oldest first.
///
/// Names that do not match the pattern, dates that do not exist (such as
/// `2023-02-30`) and entries that are not regular files are skipped.
pub fn select_notes(vault: &Path, range: &DateRange, extension: &str) -> Result<Vec<DailyNote>> {
	if !vault.is_dir() {
		return Err(ConfigError::NotADirectory(vault.to_path_buf()).into());
	}

	let pattern = Regex::new(&format!(r"^([0-9]{{4}}-[0-9]{{2}}-[0-9]{{2}})\.{}$", regex::escape(extension)))
		.context("Failed to build note name pattern")?;

	let entries = fs::read_dir(vault).with_context(|| format!("Failed to list {}", vault.display()))?;

	let mut notes = Vec::new();
	for entry in entries {
		let entry = entry.with_context(|| format!("Failed to list {}", vault.display()))?;
		let file_name = entry.file_name();
		let Some(name) = file_name.to_str() else {
			log::debug!("skipping non UTF-8 entry {:?}", entry.path());
			continue;
		};

		let Some(date) = note_date(&pattern, name) else {
			log::trace!("skipping {name}: not a daily note name");
			continue;
		};

		if !range.contains(date) {
			continue;
		}

		let path = entry.path();
		if !path.is_file() {
			log::debug!("skipping {name}: not a regular file");
			continue;
		}

		notes.push(DailyNote { date, path });
	}

	notes.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.path.cmp(&b.path)));
	log::info!("selected {} notes from {} for {range}", notes.len(), vault.display());
	Ok(notes)
}

fn note_date(pattern: &Regex, name: &str) -> Option<NaiveDate> {
	let stem = pattern.captures(name)?.get(1)?.as_str();
	match NaiveDate::parse_from_str(stem, date_formats::DATE_ONLY) {
		Ok(date) => Some(date),
		Err(_) => {
			log::debug!("skipping {name}: {stem} is not a calendar date");
			None
		}
	}
}
