use std::path::PathBuf;

pub const APP_DIR: &str = "daily-extract";

pub const CONFIG_FILE: &str = "config.toml";

pub fn default_output_file() -> PathBuf { PathBuf::from("journalinganddreams.md") }

pub fn default_extension() -> String { "md".to_string() }

pub const fn default_lookback_days() -> u32 { 30 }

pub fn default_dream_labels() -> Vec<String> { vec!["Dreams".to_string(), "[[My Dream Journal]]".to_string()] }

pub fn default_journal_label() -> String { "[[My Journal]]".to_string() }

pub fn default_dream_title() -> String { "Dreams".to_string() }

pub fn default_journal_title() -> String { "My Journal".to_string() }

/// `<documents>/Daily notes`, falling back to `./Daily notes`.
pub fn default_vault_path() -> PathBuf {
	dirs::document_dir().unwrap_or_else(|| PathBuf::from(".")).join("Daily notes")
}
