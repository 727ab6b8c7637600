use serde::{Deserialize, Serialize};

use super::defaults::{default_dream_labels, default_dream_title, default_journal_label, default_journal_title};
use crate::extract::BlockKind;

/// Recognized section headings and the titles used for output blocks.
///
/// Matching is exact and case-sensitive: `Dreams` does not match `dreams`
/// or `Dreams:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingsConfig {
	/// Headings collected into the dream block
	#[serde(default = "default_dream_labels")]
	pub dream: Vec<String>,

	/// Heading collected into the journal block
	#[serde(default = "default_journal_label")]
	pub journal: String,

	/// Title of dream blocks in the output
	#[serde(default = "default_dream_title")]
	pub dream_title: String,

	/// Title of journal blocks in the output
	#[serde(default = "default_journal_title")]
	pub journal_title: String,
}

impl HeadingsConfig {
	/// Maps a section heading to the block it belongs to. Dream labels take
	/// precedence when a heading is listed under both kinds.
	pub fn classify(&self, heading: &str) -> Option<BlockKind> {
		if self.dream.iter().any(|label| label == heading) {
			Some(BlockKind::Dream)
		} else if self.journal == heading {
			Some(BlockKind::Journal)
		} else {
			None
		}
	}

	pub fn title(&self, kind: BlockKind) -> &str {
		match kind {
			BlockKind::Dream => &self.dream_title,
			BlockKind::Journal => &self.journal_title,
		}
	}
}

impl Default for HeadingsConfig {
	fn default() -> Self {
		Self {
			dream:         default_dream_labels(),
			journal:       default_journal_label(),
			dream_title:   default_dream_title(),
			journal_title: default_journal_title(),
		}
	}
}
