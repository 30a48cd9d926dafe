//! Time formatting and interval overlap detection.
//!
//! Spoken-style clock and duration rendering, plus the all-pairs overlap
//! scan behind schedule-conflict detection. Item counts are tens, not
//! thousands, so the O(n²) scan is fine.

use chrono::{DateTime, Timelike, Utc};

use crate::error::AssistantError;
use crate::types::CalendarEvent;

/// A pair of events whose time intervals overlap.
///
/// Derived, never cached — recomputed on every summarization call.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConflict {
    pub first: CalendarEvent,
    pub second: CalendarEvent,
    pub overlap_start: DateTime<Utc>,
    pub overlap_end: DateTime<Utc>,
}

/// Render a timestamp as 12-hour clock time with a lowercase am/pm suffix.
///
/// No leading zero on the hour, zero-padded minutes, hour 0 maps to 12.
/// Example: 13:05 → "1:05 pm".
pub fn format_clock_time(ts: DateTime<Utc>) -> String {
    let (is_pm, hour12) = ts.hour12();
    let suffix = if is_pm { "pm" } else { "am" };
    format!("{}:{:02} {}", hour12, ts.minute(), suffix)
}

/// Render the duration between `start` and `end` as spoken English.
///
/// Under an hour: "N minutes". Otherwise hours plus (if nonzero) minutes,
/// with singular/plural agreement ("1 hour", "2 hours and 30 minutes").
/// `end < start` is an input-contract violation, not clamped.
pub fn format_duration(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<String, AssistantError> {
    if end < start {
        return Err(AssistantError::InvalidInterval { start, end });
    }

    let total_minutes = (end - start).num_minutes();
    if total_minutes < 60 {
        return Ok(format!(
            "{} {}",
            total_minutes,
            pluralize(total_minutes, "minute")
        ));
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let mut out = format!("{} {}", hours, pluralize(hours, "hour"));
    if minutes > 0 {
        out.push_str(&format!(" and {} {}", minutes, pluralize(minutes, "minute")));
    }
    Ok(out)
}

/// Report every pair of events whose half-open intervals [start, end)
/// intersect.
///
/// Pairs come out in outer/inner traversal order (ascending by the first
/// event's position, then the second's). That order governs conflict
/// listing in the calendar summary, so it is part of the contract.
pub fn find_overlaps(events: &[CalendarEvent]) -> Vec<ScheduleConflict> {
    let mut conflicts = Vec::new();
    for i in 0..events.len() {
        for j in (i + 1)..events.len() {
            let a = &events[i];
            let b = &events[j];
            if a.start < b.end && b.start < a.end {
                conflicts.push(ScheduleConflict {
                    first: a.clone(),
                    second: b.clone(),
                    overlap_start: a.start.max(b.start),
                    overlap_end: a.end.min(b.end),
                });
            }
        }
    }
    conflicts
}

fn pluralize(n: i64, unit: &str) -> String {
    if n == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}
