use std::fmt;

use chrono::NaiveDate;

use super::Section;
use crate::{config::HeadingsConfig, utils::format_date_only};

/// The two kinds of content collected from a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
	Dream,
	Journal,
}

impl BlockKind {
	/// Emission order within a single note.
	pub const ORDER: [BlockKind; 2] = [BlockKind::Dream, BlockKind::Journal];
}

impl fmt::Display for BlockKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			BlockKind::Dream => "dream",
			BlockKind::Journal => "journal",
		})
	}
}

/// One labeled block of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputBlock {
	pub kind:  BlockKind,
	pub date:  NaiveDate,
	pub title: String,
	pub body:  String,
}

impl OutputBlock {
	/// `## <title> - <date>`, a blank line, the body and a trailing newline.
	pub fn render(&self) -> String { format!("## {} - {}\n\n{}\n", self.title, format_date_only(&self.date), self.body) }
}

/// Builds the blocks contributed by one note: at most one dream block followed
/// by at most one journal block. Several sections of the same kind are joined
/// with a blank line, in document order.
pub fn aggregate(date: NaiveDate, sections: &[Section], headings: &HeadingsConfig) -> Vec<OutputBlock> {
	BlockKind::ORDER
		.into_iter()
		.filter_map(|kind| {
			let bodies: Vec<&str> = sections
				.iter()
				.filter(|section| headings.classify(&section.heading) == Some(kind))
				.map(|section| section.body.as_str())
				.collect();

			if bodies.is_empty() {
				return None;
			}

			Some(OutputBlock { kind, date, title: headings.title(kind).to_string(), body: bodies.join("\n\n") })
		})
		.collect()
}
