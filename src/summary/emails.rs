//! Email digest rendering.

use crate::timeutil::format_clock_time;
use crate::types::{Email, Preferences, SummaryLength};

use super::{body_preview, sender_display_name};

/// Fixed interaction hint closing every email summary.
const EMAIL_FOLLOW_UPS: &str =
    "You can say: respond, respond later, ignore, or mark as important.";

/// Render an email digest: counts, a narrated subset sized by the
/// verbosity tier, and the follow-up hint.
///
/// The narrated subset is re-sorted by (importance, then recency) before
/// truncation, independent of any ranking already applied upstream.
pub fn summarize_emails(emails: &[Email], preferences: &Preferences) -> String {
    let total = emails.len();
    let unread = emails.iter().filter(|e| !e.is_read).count();
    let important = emails.iter().filter(|e| e.is_important).count();

    let mut lines = vec![format!(
        "You have {} {} in your inbox, {} unread, with {} marked as important.",
        total,
        if total == 1 { "email" } else { "emails" },
        unread,
        important
    )];

    // Narration order is its own sort, not the upstream ranking: importance
    // first, then recency. Stable, so upstream order survives full ties.
    let mut narrated: Vec<&Email> = emails.iter().collect();
    narrated.sort_by(|a, b| {
        b.is_important
            .cmp(&a.is_important)
            .then(b.timestamp.cmp(&a.timestamp))
    });
    if let Some(limit) = preferences.summary_length.narrate_limit() {
        narrated.truncate(limit);
    }

    let detailed = matches!(
        preferences.summary_length,
        SummaryLength::Detailed | SummaryLength::Everything
    );

    for (idx, email) in narrated.iter().enumerate() {
        lines.push(email_line(idx + 1, email, detailed));
    }

    lines.push(EMAIL_FOLLOW_UPS.to_string());
    lines.join("\n")
}

/// One narrated email: index, sender, time, subject, then conditional
/// markers in fixed order, then (detailed tiers) a body preview.
fn email_line(index: usize, email: &Email, detailed: bool) -> String {
    let mut line = format!(
        "{}. From {} at {}: {}.",
        index,
        sender_display_name(email),
        format_clock_time(email.timestamp),
        email.subject
    );

    let markers: [(bool, &str); 3] = [
        (email.is_important, "(Important)"),
        (!email.is_read, "(Unread)"),
        (email.has_attachments, "(Has attachments)"),
    ];
    for (condition, marker) in markers {
        if condition {
            line.push(' ');
            line.push_str(marker);
        }
    }

    if detailed && !email.body.trim().is_empty() {
        line.push_str(&format!(" Preview: {}", body_preview(&email.body)));
    }

    line
}
