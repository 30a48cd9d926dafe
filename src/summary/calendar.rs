//! Calendar digest rendering.

use chrono::{DateTime, Days, Utc};

use crate::error::AssistantError;
use crate::timeutil::{find_overlaps, format_clock_time, format_duration};
use crate::types::{CalendarEvent, Preferences, RsvpStatus, SummaryLength};

/// Fixed interaction hint closing every calendar summary.
const CALENDAR_FOLLOW_UPS: &str =
    "You can say: accept, decline, maybe, or find me a new time.";

/// Sentence used instead of the count sentence when today is empty.
/// The two are mutually exclusive branches, never both.
const NO_EVENTS_TODAY: &str = "You have no events scheduled for today.";

/// Render a calendar digest for today and tomorrow, relative to `now`.
///
/// `now` is an explicit argument so the function stays pure; day buckets
/// are midnight-aligned in the frame of the supplied timestamps.
///
/// Returns an error only when an event carries an inverted interval
/// (end before start), which is an input-contract violation.
pub fn summarize_events(
    events: &[CalendarEvent],
    preferences: &Preferences,
    now: DateTime<Utc>,
) -> Result<String, AssistantError> {
    let today = now.date_naive();
    let tomorrow = today + Days::new(1);

    // Today + tomorrow scope, chronologically sorted. Conflict detection
    // and the priorities section both run over this list.
    let mut scope: Vec<&CalendarEvent> = events
        .iter()
        .filter(|e| {
            let day = e.start.date_naive();
            day == today || day == tomorrow
        })
        .collect();
    scope.sort_by(|a, b| a.start.cmp(&b.start));

    let today_events: Vec<&&CalendarEvent> = scope
        .iter()
        .filter(|e| e.start.date_naive() == today)
        .collect();
    let tomorrow_events: Vec<&&CalendarEvent> = scope
        .iter()
        .filter(|e| e.start.date_naive() == tomorrow)
        .collect();

    let verbosity = preferences.summary_length;
    let mut lines: Vec<String> = Vec::new();

    if today_events.is_empty() {
        lines.push(NO_EVENTS_TODAY.to_string());
    } else {
        lines.push(format!(
            "You have {} {} scheduled for today.",
            today_events.len(),
            if today_events.len() == 1 { "event" } else { "events" }
        ));
        for (idx, event) in today_events.iter().enumerate() {
            lines.push(event_line(idx + 1, event)?);
        }
    }

    // Tomorrow's bucket is suppressed entirely at concise; its per-item
    // detail is suppressed again below detailed.
    if verbosity != SummaryLength::Concise && !tomorrow_events.is_empty() {
        lines.push(format!(
            "You have {} {} scheduled for tomorrow.",
            tomorrow_events.len(),
            if tomorrow_events.len() == 1 { "event" } else { "events" }
        ));
        if matches!(verbosity, SummaryLength::Detailed | SummaryLength::Everything) {
            for (idx, event) in tomorrow_events.iter().enumerate() {
                lines.push(event_line(idx + 1, event)?);
            }
        }
    }

    let scope_owned: Vec<CalendarEvent> = scope.iter().map(|e| (*e).clone()).collect();
    let conflicts = find_overlaps(&scope_owned);
    if !conflicts.is_empty() {
        lines.push("Heads up, some of your events overlap.".to_string());
        for conflict in &conflicts {
            lines.push(format!(
                "{} and {} overlap starting at {}.",
                conflict.first.title,
                conflict.second.title,
                format_clock_time(conflict.overlap_start)
            ));
        }
    }

    // Priorities stop at tomorrow's boundary: only events starting today
    // qualify, even though the conflict scan looks a day further out.
    if verbosity != SummaryLength::Concise {
        let priorities: Vec<&str> = scope
            .iter()
            .filter(|e| e.is_important && e.start.date_naive() == today)
            .map(|e| e.title.as_str())
            .collect();
        if !priorities.is_empty() {
            lines.push(format!("Your top priorities: {}.", priorities.join(", ")));
        }
    }

    lines.push(CALENDAR_FOLLOW_UPS.to_string());
    Ok(lines.join("\n"))
}

/// One narrated event: index, start time, title, optional location,
/// duration, and (only when the user hasn't responded) an invitation note.
fn event_line(index: usize, event: &CalendarEvent) -> Result<String, AssistantError> {
    let mut line = format!(
        "{}. {}: {}",
        index,
        format_clock_time(event.start),
        event.title
    );
    if let Some(location) = event.location.as_deref() {
        if !location.is_empty() {
            line.push_str(&format!(" at {}", location));
        }
    }
    line.push_str(&format!(", {}.", format_duration(event.start, event.end)?));
    if event.rsvp == RsvpStatus::NeedsAction {
        line.push_str(" You haven't responded to this invitation.");
    }
    Ok(line)
}
