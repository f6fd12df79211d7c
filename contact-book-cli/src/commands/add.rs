use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use contact_book_core::ContactFields;
use contact_book_db::ContactStore;

use crate::CliError;

/// Add a new contact and print its id.
pub(crate) fn run_add(
    store: &ContactStore,
    name: &str,
    phone: Option<&str>,
    email: Option<&str>,
) -> Result<(), CliError> {
    let fields = ContactFields::new(name, phone.unwrap_or_default(), email.unwrap_or_default());
    let id = store
        .add(&fields)
        .map_err(|e| CliError::operation("Failed to add contact", e))?;

    log::info!(
        "{} Added contact #{} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        id,
        fields.name.if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}
