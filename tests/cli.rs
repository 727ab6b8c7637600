use std::{
	fs,
	path::Path,
	process::{Command, Output},
};

fn daily_extract(workdir: &Path, args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_daily-extract"))
		.current_dir(workdir)
		.env("XDG_CONFIG_HOME", workdir.join("xdg"))
		.env_remove("RUST_LOG")
		.args(args)
		.output()
		.unwrap()
}

fn stdout(output: &Output) -> String { String::from_utf8_lossy(&output.stdout).into_owned() }

fn stderr(output: &Output) -> String { String::from_utf8_lossy(&output.stderr).into_owned() }

#[test]
fn end_to_end_run_reports_and_writes() {
	let work = tempfile::tempdir().unwrap();
	let vault = work.path().join("vault");
	fs::create_dir(&vault).unwrap();
	fs::write(vault.join("2024-01-01.md"), "## Dreams\nFlying over mountains.\n## [[My Journal]]\nHad coffee.\n").unwrap();

	let output = daily_extract(
		work.path(),
		&["--start_date", "2024-01-01", "--end_date", "2024-01-01", "--vault_path", vault.to_str().unwrap()],
	);

	assert!(output.status.success(), "stderr: {}", stderr(&output));
	let out = stdout(&output);
	assert!(out.contains("Extracting notes from 2024-01-01 to 2024-01-01"));
	assert!(out.contains("Found 1 notes in the specified date range."));
	assert!(out.contains("Content extracted and saved to journalinganddreams.md"));
	assert_eq!(
		fs::read_to_string(work.path().join("journalinganddreams.md")).unwrap(),
		"## Dreams - 2024-01-01\n\nFlying over mountains.\n\n## My Journal - 2024-01-01\n\nHad coffee.\n"
	);
}

#[test]
fn inverted_range_exits_with_status_one_and_writes_nothing() {
	let work = tempfile::tempdir().unwrap();

	let output = daily_extract(
		work.path(),
		&["--start_date", "2024-02-01", "--end_date", "2024-01-01", "--vault_path", ".", "--output_file", "out.md"],
	);

	assert_eq!(output.status.code(), Some(1));
	assert!(stderr(&output).contains("cannot be after end_date"));
	assert!(!work.path().join("out.md").exists());
}

#[test]
fn missing_vault_exits_with_status_one() {
	let work = tempfile::tempdir().unwrap();

	let output = daily_extract(work.path(), &["--vault_path", "no-such-dir", "--output_file", "out.md"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(stderr(&output).contains("no-such-dir is not a valid directory."));
	assert!(!work.path().join("out.md").exists());
}

#[test]
fn malformed_date_is_rejected_by_argument_parser() {
	let work = tempfile::tempdir().unwrap();

	let output = daily_extract(work.path(), &["--start_date", "01/02/2024"]);

	assert!(!output.status.success());
	assert!(stderr(&output).contains("Invalid date format: 01/02/2024. Use YYYY-MM-DD."));
}

#[test]
fn config_file_supplies_vault_and_labels() {
	let work = tempfile::tempdir().unwrap();
	let vault = work.path().join("notes");
	fs::create_dir(&vault).unwrap();
	fs::write(vault.join("2024-05-05.md"), "## Sleep\nsnoring\n## Diary\nlunch\n## Dreams\nnot collected\n").unwrap();

	let config_path = work.path().join("custom.toml");
	fs::write(
		&config_path,
		format!(
			"[vault]\npath = {vault:?}\noutput_file = \"mine.md\"\n\n[headings]\ndream = [\"Sleep\"]\njournal = \"Diary\"\n",
			vault = vault.to_str().unwrap()
		),
	)
	.unwrap();

	let output = daily_extract(
		work.path(),
		&["--config", config_path.to_str().unwrap(), "--start_date", "2024-05-01", "--end_date", "2024-05-31"],
	);

	assert!(output.status.success(), "stderr: {}", stderr(&output));
	assert_eq!(
		fs::read_to_string(work.path().join("mine.md")).unwrap(),
		"## Dreams - 2024-05-05\n\nsnoring\n\n## My Journal - 2024-05-05\n\nlunch\n"
	);
}

#[test]
fn config_subcommand_writes_default_file() {
	let work = tempfile::tempdir().unwrap();
	let config_path = work.path().join("conf").join("config.toml");

	let output = daily_extract(work.path(), &["config", "--config", config_path.to_str().unwrap()]);

	assert!(output.status.success(), "stderr: {}", stderr(&output));
	let text = fs::read_to_string(&config_path).unwrap();
	assert!(text.contains("[headings]"));
	assert!(text.contains("[[My Journal]]"));
}

#[test]
fn global_flags_before_config_subcommand_are_accepted() {
	let work = tempfile::tempdir().unwrap();
	let config_path = work.path().join("before.toml");

	let output = daily_extract(work.path(), &["--config", config_path.to_str().unwrap(), "-v", "config", "--show"]);

	assert!(output.status.success(), "stderr: {}", stderr(&output));
	assert!(stdout(&output).contains("Current configuration:"));
	assert!(!config_path.exists());
}
