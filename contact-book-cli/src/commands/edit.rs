use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use contact_book_core::ContactId;
use contact_book_db::{ContactStore, WriteOutcome};

use super::or_dash;
use crate::CliError;

/// Overlay the given fields on an existing contact and save all three.
pub(crate) fn run_edit(
    store: &ContactStore,
    id: ContactId,
    name: Option<&str>,
    phone: Option<&str>,
    email: Option<&str>,
) -> Result<(), CliError> {
    let current = store
        .get(id)
        .map_err(|e| CliError::operation("Failed to load contact", e))?
        .ok_or(CliError::NotFound(id))?;

    let before = current.fields();
    let mut after = before.clone();
    if let Some(name) = name {
        after = after.name(name);
    }
    if let Some(phone) = phone {
        after = after.phone(phone);
    }
    if let Some(email) = email {
        after = after.email(email);
    }

    if after == before {
        log::info!("Nothing to change for contact #{}.", id);
        return Ok(());
    }

    let outcome = store
        .update(id, &after)
        .map_err(|e| CliError::operation("Failed to update contact", e))?;
    if outcome == WriteOutcome::NotFound {
        return Err(CliError::NotFound(id));
    }

    log::info!(
        "{} Updated contact #{}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        id,
    );
    let changes = [
        ("Name", &before.name, &after.name),
        ("Phone", &before.phone, &after.phone),
        ("Email", &before.email, &after.email),
    ];
    for (label, old, new) in changes {
        if old != new {
            log::info!(
                "  {}: {} {} {}",
                label,
                or_dash(old).if_supports_color(Stdout, |t| t.dimmed()),
                "\u{2192}",
                or_dash(new),
            );
        }
    }
    Ok(())
}
