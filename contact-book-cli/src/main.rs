//! contact-book CLI
//!
//! Command-line front end for the contact store: add, edit, delete,
//! list, and search contacts kept in a local SQLite database.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use std::path::Path;

use clap::Parser;

use contact_book_core::ValidationPolicy;
use contact_book_db::ContactStore;

use cli_types::{Cli, Commands, ConfigAction};
use settings::{Settings, SettingsError};
use commands::add::run_add;
use commands::config::{run_config_path, run_config_show};
use commands::delete::run_delete;
use commands::edit::run_edit;
use commands::list::{run_list, run_show};
pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli, settings::load_settings) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(
    cli: Cli,
    load_settings: impl FnOnce() -> Result<Settings, SettingsError>,
) -> Result<(), CliError> {
    // Must work even when the settings file itself is broken
    if let Commands::Config {
        action: ConfigAction::Path,
    } = cli.command
    {
        run_config_path();
        return Ok(());
    }

    let settings = load_settings().map_err(|e| CliError::config(e.to_string()))?;
    let (db_path, _) = settings::resolve_db_path(cli.db.clone(), &settings);
    let (policy, _) = settings::resolve_policy(cli.profile, &settings);

    match cli.command {
        Commands::Add { name, phone, email } => with_store(&db_path, policy, |store| {
            run_add(store, &name, phone.as_deref(), email.as_deref())
        }),
        Commands::Edit {
            id,
            name,
            phone,
            email,
        } => with_store(&db_path, policy, |store| {
            run_edit(store, id, name.as_deref(), phone.as_deref(), email.as_deref())
        }),
        Commands::Delete { id, confirm } => {
            with_store(&db_path, policy, |store| run_delete(store, id, confirm))
        }
        Commands::List { filter } => {
            with_store(&db_path, policy, |store| run_list(store, filter.as_deref()))
        }
        Commands::Show { id } => with_store(&db_path, policy, |store| run_show(store, id)),
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => run_config_show(&settings, cli.db, cli.profile),
                ConfigAction::Path => run_config_path(),
            }
            Ok(())
        }
    }
}

/// Open the store, run one command against it, and close it again.
fn with_store(
    db_path: &Path,
    policy: ValidationPolicy,
    f: impl FnOnce(&ContactStore) -> Result<(), CliError>,
) -> Result<(), CliError> {
    let store =
        ContactStore::open(db_path, policy).map_err(|e| CliError::database(e.to_string()))?;
    let result = f(&store);
    if let Err(e) = store.shutdown() {
        log::warn!("Failed to close database: {}", e);
    }
    result
}
