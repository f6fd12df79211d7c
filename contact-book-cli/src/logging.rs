//! Logger setup for CLI output.
//!
//! All user-facing output goes through the `log` macros. At the default
//! level `info` records print as bare lines on stdout, so commands read
//! like plain `println!` output while still honouring `--quiet`.

use std::io::Write;

use log::{Level, LevelFilter};

pub(crate) fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .parse_default_env();

    if verbose {
        builder.format_timestamp_millis().format_module_path(true);
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        });
    }

    builder.init();
}

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
