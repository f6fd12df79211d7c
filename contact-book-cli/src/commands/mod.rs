pub(crate) mod add;
pub(crate) mod config;
pub(crate) mod delete;
pub(crate) mod edit;
pub(crate) mod list;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use contact_book_core::Contact;

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}

/// Placeholder shown for empty optional fields.
pub(crate) fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

/// Log one contact as a short multi-line card.
pub(crate) fn log_contact(contact: &Contact) {
    log::info!(
        "  #{} {}",
        contact.id.if_supports_color(Stdout, |t| t.dimmed()),
        contact.name.if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("    Phone: {}", or_dash(&contact.phone));
    log::info!("    Email: {}", or_dash(&contact.email));
}
