use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use contact_book_core::ContactId;
use contact_book_db::{ContactStore, WriteOutcome};

use super::log_contact;
use crate::CliError;

/// Delete a contact. Without `confirm` the contact is only shown.
pub(crate) fn run_delete(store: &ContactStore, id: ContactId, confirm: bool) -> Result<(), CliError> {
    let contact = store
        .get(id)
        .map_err(|e| CliError::operation("Failed to load contact", e))?
        .ok_or(CliError::NotFound(id))?;

    if !confirm {
        log::warn!("This will permanently delete:");
        log_contact(&contact);
        crate::log_blank();
        log::info!("Re-run with --confirm to proceed:");
        log::info!("  contact-book delete {} --confirm", id);
        return Ok(());
    }

    let outcome = store
        .delete(id)
        .map_err(|e| CliError::operation("Failed to delete contact", e))?;
    if outcome == WriteOutcome::NotFound {
        return Err(CliError::NotFound(id));
    }

    log::info!(
        "{} Deleted contact #{} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        id,
        contact.name.if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}
