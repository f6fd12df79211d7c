use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use contact_book_core::{Contact, ContactId};
use contact_book_db::ContactStore;

use super::{log_contact, or_dash, truncate_str};
use crate::CliError;

const NAME_WIDTH: usize = 28;
const PHONE_WIDTH: usize = 16;
const EMAIL_WIDTH: usize = 32;

/// List contacts as a table, ordered by name.
pub(crate) fn run_list(store: &ContactStore, filter: Option<&str>) -> Result<(), CliError> {
    let contacts = store
        .list(filter)
        .map_err(|e| CliError::operation("Failed to list contacts", e))?;

    let filtered = filter.is_some_and(|f| !f.is_empty());
    if contacts.is_empty() {
        log::info!("{}", empty_message(filtered));
        return Ok(());
    }

    let id_width = contacts
        .iter()
        .map(|c| c.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    log::info!(
        "{}",
        format!(
            "{:>id_width$}  {:<NAME_WIDTH$}  {:<PHONE_WIDTH$}  {}",
            "ID", "Name", "Phone", "Email"
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    for contact in &contacts {
        log::info!("{}", format_row(contact, id_width));
    }

    crate::log_blank();
    let summary = match filter {
        Some(f) if filtered => format!("{} contact(s) matching '{}'", contacts.len(), f),
        _ => format!("{} contact(s)", contacts.len()),
    };
    log::info!("{}", summary.if_supports_color(Stdout, |t| t.dimmed()));
    Ok(())
}

/// Show a single contact.
pub(crate) fn run_show(store: &ContactStore, id: ContactId) -> Result<(), CliError> {
    let contact = store
        .get(id)
        .map_err(|e| CliError::operation("Failed to load contact", e))?
        .ok_or(CliError::NotFound(id))?;
    log_contact(&contact);
    Ok(())
}

fn empty_message(filtered: bool) -> &'static str {
    if filtered {
        "No contact found matching your search."
    } else {
        "No contacts yet. Add one with 'contact-book add <NAME>'."
    }
}

fn format_row(contact: &Contact, id_width: usize) -> String {
    format!(
        "{:>id_width$}  {:<NAME_WIDTH$}  {:<PHONE_WIDTH$}  {}",
        contact.id,
        truncate_str(&contact.name, NAME_WIDTH),
        truncate_str(or_dash(&contact.phone), PHONE_WIDTH),
        truncate_str(or_dash(&contact.email), EMAIL_WIDTH),
    )
}
