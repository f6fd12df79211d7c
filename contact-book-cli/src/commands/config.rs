use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use contact_book_core::ValidationPolicy;

use crate::settings::{self, Settings};

/// Show the resolved database path and validation profile with their sources.
pub(crate) fn run_config_show(
    settings: &Settings,
    db_override: Option<PathBuf>,
    profile_override: Option<ValidationPolicy>,
) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "Contact Book Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let (db_path, db_source) = settings::resolve_db_path(db_override, settings);
    let db_state = if db_path.exists() { "exists" } else { "will be created" };
    log::info!(
        "  {} {} {}",
        "database:".if_supports_color(Stdout, |t| t.cyan()),
        db_path.display(),
        format!("({}, {})", db_source, db_state).if_supports_color(Stdout, |t| t.dimmed()),
    );

    let (policy, policy_source) = settings::resolve_policy(profile_override, settings);
    log::info!(
        "  {} {} {}",
        "profile:".if_supports_color(Stdout, |t| t.cyan()),
        policy,
        format!("({})", policy_source).if_supports_color(Stdout, |t| t.dimmed()),
    );
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}
