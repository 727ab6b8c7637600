mod defaults;
mod headings;
mod vault;

use std::{
	env,
	ffi::OsString,
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
pub use headings::HeadingsConfig;
use serde::{Deserialize, Serialize};
pub use vault::VaultConfig;

use crate::error::ConfigError;

/// Longest lookback accepted from the config file, about a century.
const MAX_LOOKBACK_DAYS: u32 = 36_500;

/// Configuration for daily-extract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
	#[serde(default)]
	pub vault:    VaultConfig,
	#[serde(default)]
	pub headings: HeadingsConfig,
}

impl Config {
	/// Loads configuration from the default config file path.
	/// A missing file yields the built-in defaults.
	pub fn load() -> Result<Self> {
		let config_path = Self::get_config_path()?;
		Self::load_from(&config_path)
	}

	/// Loads and validates configuration from `path`, falling back to defaults
	/// when the file does not exist.
	pub fn load_from(path: &Path) -> Result<Self> {
		if !path.exists() {
			log::debug!("no config file at {}, using defaults", path.display());
			return Ok(Self::default());
		}

		let config_str = fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file {}", path.display()))?;

		let config: Self = toml::from_str(&config_str)
			.with_context(|| format!("Failed to parse config file {}", path.display()))?;
		config.validate()?;
		log::debug!("loaded config from {}", path.display());
		Ok(config)
	}

	/// Writes the configuration to `path` with inline comments, creating the
	/// parent directory if needed.
	pub fn save_to(&self, path: &Path) -> Result<()> {
		// Ensure parent directory exists
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent).context("Failed to create config directory")?;
		}

		fs::write(path, self.to_toml_with_comments()).context("Failed to write config file")?;

		Ok(())
	}

	/// Generates TOML string with helpful inline comments for each field
	fn to_toml_with_comments(&self) -> String {
		format!(
			r###"# daily-extract configuration file
# Command-line flags take precedence over these values

[vault]
# Directory holding YYYY-MM-DD daily notes
{vault_path}
# Where the combined extract is written (overwritten on every run)
output_file = {output_file}
# Daily note extension, without the dot
extension = {extension}
# Days before end_date used when --start_date is omitted
lookback_days = {lookback_days}

[headings]
# Level-2 headings collected as dreams (exact, case-sensitive match)
dream = {dream}
# Level-2 heading collected as the journal entry
journal = {journal}
# Block titles written to the output, e.g. "## Dreams - 2024-01-01"
dream_title = {dream_title}
journal_title = {journal_title}
"###,
			vault_path = match self.vault.path {
				Some(ref path) => format!("path = {}", quoted(&path.to_string_lossy())),
				None => format!("# path = {}", quoted(&self.vault.vault_path().to_string_lossy())),
			},
			output_file = quoted(&self.vault.output_file.to_string_lossy()),
			extension = quoted(&self.vault.extension),
			lookback_days = self.vault.lookback_days,
			dream = toml::Value::Array(self.headings.dream.iter().cloned().map(toml::Value::String).collect()),
			journal = quoted(&self.headings.journal),
			dream_title = quoted(&self.headings.dream_title),
			journal_title = quoted(&self.headings.journal_title),
		)
	}

	/// Returns the platform-specific configuration file path following XDG spec.
	/// Priority order:
	/// 1. $XDG_CONFIG_HOME/daily-extract/config.toml (absolute values only)
	/// 2. ~/.config/daily-extract/config.toml (Unix)
	/// 3. ~/Library/Application Support/daily-extract/config.toml (macOS
	///    fallback)
	/// 4. %APPDATA%\daily-extract\config.toml (Windows)
	pub fn get_config_path() -> Result<PathBuf> {
		let config_dir = if let Some(xdg_config) = xdg_config_home(env::var_os("XDG_CONFIG_HOME")) {
			xdg_config
		} else if cfg!(target_os = "macos") {
			let home = dirs::home_dir().context("Failed to get home directory")?;
			let xdg_path = home.join(".config");
			if xdg_path.exists() {
				xdg_path
			} else {
				dirs::config_dir().unwrap_or_else(|| home.join("Library/Application Support"))
			}
		} else {
			dirs::config_dir().context("Failed to get config directory")?
		};

		Ok(config_dir.join(defaults::APP_DIR).join(defaults::CONFIG_FILE))
	}

	/// Validates the configuration values.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let extension = &self.vault.extension;
		if extension.is_empty() || extension.contains(['.', '/', '\\']) {
			return Err(invalid(format!("vault.extension must be a bare extension like \"md\", got {extension:?}")));
		}

		if self.vault.lookback_days > MAX_LOOKBACK_DAYS {
			return Err(invalid(format!("vault.lookback_days must be at most {MAX_LOOKBACK_DAYS}")));
		}

		if self.headings.dream.is_empty() {
			return Err(invalid("headings.dream must list at least one heading"));
		}

		if self.headings.dream.iter().any(|label| label.trim().is_empty()) {
			return Err(invalid("headings.dream must not contain blank headings"));
		}

		for (key, value) in [
			("headings.journal", &self.headings.journal),
			("headings.dream_title", &self.headings.dream_title),
			("headings.journal_title", &self.headings.journal_title),
		] {
			if value.trim().is_empty() {
				return Err(invalid(format!("{key} must not be blank")));
			}
		}

		Ok(())
	}
}

/// `$XDG_CONFIG_HOME` counts only when set to an absolute path.
fn xdg_config_home(value: Option<OsString>) -> Option<PathBuf> {
	value.map(PathBuf::from).filter(|path| path.is_absolute())
}

fn invalid(message: impl Into<String>) -> ConfigError { ConfigError::Invalid(message.into()) }

/// Renders a string as a TOML basic string, escaping as needed.
fn quoted(value: &str) -> String { toml::Value::String(value.to_string()).to_string() }
