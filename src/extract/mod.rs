//! Dream and journal extraction pipeline.
//!
//! Selects the daily notes of a vault inside a date range, parses each note
//! into level-2 sections, turns recognized sections into dated blocks and
//! writes all blocks into a single document.

mod aggregate;
mod range;
mod sections;
mod selector;
mod writer;

use std::{
	fs,
	path::{Path, PathBuf},
};

pub use aggregate::{BlockKind, OutputBlock, aggregate};
use anyhow::{Context, Result};
pub use range::DateRange;
pub use sections::{Section, parse_sections};
pub use selector::{DailyNote, select_notes};
pub use writer::{render_document, write_document};

use crate::config::HeadingsConfig;

/// Everything a run needs, already resolved from flags and config.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
	pub range:       DateRange,
	pub vault_path:  PathBuf,
	pub output_file: PathBuf,
	pub extension:   String,
	pub headings:    HeadingsConfig,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractReport {
	pub notes_found: usize,
	pub blocks:      usize,
	pub output_file: PathBuf,
}

/// Runs the whole pipeline. The output file is only written once every
/// selected note has been read, so a failing note leaves it untouched.
pub fn run(options: &ExtractOptions) -> Result<ExtractReport> {
	let notes = select_notes(&options.vault_path, &options.range, &options.extension)?;
	let blocks = collect_blocks(&notes, &options.headings)?;
	write_document(&options.output_file, &blocks)?;

	Ok(ExtractReport { notes_found: notes.len(), blocks: blocks.len(), output_file: options.output_file.clone() })
}

/// Reads `notes` in order and returns their blocks, oldest note first.
pub fn collect_blocks(notes: &[DailyNote], headings: &HeadingsConfig) -> Result<Vec<OutputBlock>> {
	let mut blocks = Vec::new();
	for note in notes {
		let text = read_note(&note.path)?;
		let note_blocks = aggregate(note.date, &parse_sections(&text), headings);
		for block in &note_blocks {
			log::debug!("{}: {} block, {} bytes", note.path.display(), block.kind, block.body.len());
		}
		blocks.extend(note_blocks);
	}
	Ok(blocks)
}

fn read_note(path: &Path) -> Result<String> {
	fs::read_to_string(path).with_context(|| format!("Failed to read note {}", path.display()))
}
