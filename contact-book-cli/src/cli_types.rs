//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use contact_book_core::{ContactId, ValidationPolicy};

#[derive(Parser)]
#[command(name = "contact-book")]
#[command(about = "Manage contacts stored in a local SQLite database", long_about = None)]
pub(crate) struct Cli {
    /// Database file (defaults to contacts.db in the current directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Validation profile: strict (letters-only names) or lenient
    #[arg(long, global = true)]
    pub profile: Option<ValidationPolicy>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Add a new contact
    Add {
        /// Full name
        name: String,

        /// Phone number (digits only)
        #[arg(short, long)]
        phone: Option<String>,

        /// Email address
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Change an existing contact; omitted fields keep their current value
    Edit {
        /// Contact id (see `list`)
        id: ContactId,

        /// Full name
        #[arg(short, long)]
        name: Option<String>,

        /// Phone number (pass "" to clear)
        #[arg(short, long)]
        phone: Option<String>,

        /// Email address (pass "" to clear)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Delete a contact
    Delete {
        /// Contact id (see `list`)
        id: ContactId,

        /// Actually delete; without this flag the contact is only shown
        #[arg(long)]
        confirm: bool,
    },

    /// List contacts, optionally filtered by name, phone, or email
    List {
        /// Substring to search for
        filter: Option<String>,
    },

    /// Show a single contact
    Show {
        /// Contact id
        id: ContactId,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the resolved database path and validation profile
    Show,

    /// Print the settings file path
    Path,
}
