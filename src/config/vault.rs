use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults::{default_extension, default_lookback_days, default_output_file, default_vault_path};

/// Where daily notes live and where the extract goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
	/// Daily notes directory. Unset means `<documents>/Daily notes`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub path: Option<PathBuf>,

	/// Output file, relative paths resolve against the working directory
	#[serde(default = "default_output_file")]
	pub output_file: PathBuf,

	/// Daily note file extension, without the dot
	#[serde(default = "default_extension")]
	pub extension: String,

	/// Days before end_date used when start_date is not given
	#[serde(default = "default_lookback_days")]
	pub lookback_days: u32,
}

impl VaultConfig {
	/// The configured vault directory, or the platform default.
	pub fn vault_path(&self) -> PathBuf { self.path.clone().unwrap_or_else(default_vault_path) }
}

impl Default for VaultConfig {
	fn default() -> Self {
		Self {
			path:          None,
			output_file:   default_output_file(),
			extension:     default_extension(),
			lookback_days: default_lookback_days(),
		}
	}
}
