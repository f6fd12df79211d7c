//! Application settings (database location, validation profile).
//!
//! The settings file is `~/.config/contact-book/settings.toml`. Every
//! value can be overridden from the command line; anything left unset
//! falls back to `contacts.db` in the working directory and the strict
//! validation profile.

use std::path::{Path, PathBuf};

use contact_book_core::ValidationPolicy;
use contact_book_db::DEFAULT_DB_FILE;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Settings {
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub validation: ValidationSettings,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StoreSettings {
    pub database: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ValidationSettings {
    pub profile: Option<ValidationPolicy>,
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingSource {
    CommandLine,
    SettingsFile,
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandLine => write!(f, "command line"),
            Self::SettingsFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Canonical path to the settings file: `~/.config/contact-book/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("contact-book").join("settings.toml")
}

/// Load settings from the canonical path.
pub(crate) fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&settings_path())
}

/// Load settings from `path`. A missing file yields the defaults.
pub(crate) fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&contents).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `store.database` in `settings.toml`
/// 3. `contacts.db` in the current directory
pub(crate) fn resolve_db_path(
    cli_override: Option<PathBuf>,
    settings: &Settings,
) -> (PathBuf, SettingSource) {
    if let Some(p) = cli_override {
        return (p, SettingSource::CommandLine);
    }
    if let Some(p) = settings.store.database.clone() {
        return (p, SettingSource::SettingsFile);
    }
    (PathBuf::from(DEFAULT_DB_FILE), SettingSource::Default)
}

/// Resolve the validation profile: CLI, then settings file, then strict.
pub(crate) fn resolve_policy(
    cli_override: Option<ValidationPolicy>,
    settings: &Settings,
) -> (ValidationPolicy, SettingSource) {
    if let Some(p) = cli_override {
        return (p, SettingSource::CommandLine);
    }
    if let Some(p) = settings.validation.profile {
        return (p, SettingSource::SettingsFile);
    }
    (ValidationPolicy::default(), SettingSource::Default)
}
