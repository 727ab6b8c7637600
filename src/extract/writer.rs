use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::OutputBlock;

/// Renders blocks in order, separated by a blank line.
pub fn render_document(blocks: &[OutputBlock]) -> String {
	blocks.iter().map(OutputBlock::render).collect::<Vec<_>>().join("\n")
}

/// Replaces the contents of `path` with the rendered document.
pub fn write_document(path: &Path, blocks: &[OutputBlock]) -> Result<()> {
	fs::write(path, render_document(blocks)).with_context(|| format!("Failed to write {}", path.display()))?;
	log::info!("wrote {} blocks to {}", blocks.len(), path.display());
	Ok(())
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;

	use super::*;
	use crate::extract::BlockKind;

	fn block(kind: BlockKind, day: u32, title: &str, body: &str) -> OutputBlock {
		OutputBlock {
			kind,
			date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
			title: title.to_string(),
			body: body.to_string(),
		}
	}

	#[test]
	fn blocks_are_separated_by_blank_line() {
		let blocks = [block(BlockKind::Dream, 1, "Dreams", "A"), block(BlockKind::Journal, 2, "My Journal", "B")];
		assert_eq!(render_document(&blocks), "## Dreams - 2024-01-01\n\nA\n\n## My Journal - 2024-01-02\n\nB\n");
	}

	#[test]
	fn no_blocks_renders_empty() {
		assert_eq!(render_document(&[]), "");
	}

	#[test]
	fn existing_file_is_overwritten() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("out.md");
		fs::write(&path, "stale content that is much longer than the new output\n").unwrap();

		write_document(&path, &[block(BlockKind::Dream, 3, "Dreams", "C")]).unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "## Dreams - 2024-01-03\n\nC\n");
	}

	#[test]
	fn unwritable_target_reports_path() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing").join("out.md");
		let err = write_document(&path, &[]).unwrap_err();
		assert!(err.to_string().contains("out.md"));
	}
}
