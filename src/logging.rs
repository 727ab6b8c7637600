//! Stderr logging bootstrap.
//!
//! `-v` flags pick the base level; `RUST_LOG` overrides it.

use log::LevelFilter;

/// Maps the `-v` count to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

/// Installs the global logger. Must not panic; a second call is a no-op.
pub fn init_logging(verbosity: u8) {
	let mut builder = env_logger::Builder::new();
	builder.filter_level(level_for(verbosity)).format_timestamp(None).format_target(false).parse_default_env();

	if builder.try_init().is_err() {
		log::debug!("logger already initialized");
	}
}
