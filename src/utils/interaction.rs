//! User interaction utilities.

use std::io::{Write, stdin, stdout};

/// Prompts user for confirmation. Returns true if user confirms.
///
/// # Examples
/// ```no_run
/// use daily_extract::utils::confirm;
///
/// if confirm("Overwrite existing config?") {
///     // User confirmed
/// }
/// ```
pub fn confirm(prompt: &str) -> bool {
	print!("{prompt} (y/N): ");
	stdout().flush().ok();
	let mut input = String::new();
	stdin().read_line(&mut input).ok();
	matches!(input.trim(), "y" | "Y" | "yes" | "Yes")
}
