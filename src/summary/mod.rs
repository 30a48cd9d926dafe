//! Spoken-style summarization of emails and calendar state.
//!
//! Both entry points are pure functions of their inputs — the calendar
//! summarizer takes the current moment as an explicit argument rather than
//! reading the wall clock, so identical inputs always produce identical
//! reports.

mod calendar;
mod emails;

pub use calendar::summarize_events;
pub use emails::summarize_emails;

use crate::types::Email;

/// Max characters of body narrated as a preview in detailed tiers.
pub(crate) const BODY_PREVIEW_CHARS: usize = 100;

/// Display name for an email's sender.
///
/// Uses the sender name from the message when present, otherwise derives
/// one from the address ("sarah.chen@acme.com" → "Sarah Chen").
pub(crate) fn sender_display_name(email: &Email) -> String {
    if !email.from_name.trim().is_empty() {
        return email.from_name.trim().to_string();
    }
    name_from_email(&email.from_email)
}

/// Derive a display name from an email address (best-effort).
fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(|c: char| c == '.' || c == '_' || c == '-' || c == '+')
        .filter(|s| !s.is_empty())
        .map(|s| {
            let mut chars = s.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate body text to a preview, appending an ellipsis when cut.
/// Char-boundary safe.
pub(crate) fn body_preview(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= BODY_PREVIEW_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(BODY_PREVIEW_CHARS).collect();
    format!("{}...", cut)
}
