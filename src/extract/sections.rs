//! Splits note text into level-2 heading sections.
//!
//! `## Heading` opens a section. The section runs until the next `#` or `##`
//! line; anything under a level-1 heading is not captured. Deeper headings
//! (`###` and below) are ordinary body lines.

use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##\s+(.*)$").expect("valid heading regex"));

static SECTION_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,2}\s+").expect("valid boundary regex"));

/// A level-2 heading and the text beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	/// Heading text with the `##` marker and surrounding whitespace removed.
	pub heading: String,
	/// Body lines joined with `\n`, trimmed at both ends.
	pub body:    String,
}

/// Parses `text` into its level-2 sections, in document order.
pub fn parse_sections(text: &str) -> Vec<Section> {
	let mut sections = Vec::new();
	let mut current: Option<(String, Vec<&str>)> = None;

	for line in text.lines() {
		if SECTION_BOUNDARY.is_match(line) {
			if let Some((heading, body)) = current.take() {
				sections.push(finish(heading, &body));
			}
			if let Some(caps) = SECTION_HEADING.captures(line) {
				current = Some((caps[1].trim().to_string(), Vec::new()));
			}
			continue;
		}

		if let Some((_, body)) = current.as_mut() {
			body.push(line);
		}
	}

	if let Some((heading, body)) = current {
		sections.push(finish(heading, &body));
	}

	sections
}

fn finish(heading: String, body: &[&str]) -> Section { Section { heading, body: body.join("\n").trim().to_string() } }
