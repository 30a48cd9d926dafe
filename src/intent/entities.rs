//! Per-entity capture patterns for the intent parser.
//!
//! Each entity has its own compile-once regex so capture behavior can be
//! unit-tested independently of intent detection. Patterns run over the
//! lowercased, trimmed utterance, so captured entities come out lowercase.
//!
//! The schedule patterns use bounded lookahead anchored on keywords
//! ("at"/"on", "with", "at"/"in"). Their boundaries overlap on purpose:
//! "schedule lunch at noon" yields when="noon" AND where="noon". That is
//! the shipped extraction behavior; changing the boundary handling is a
//! versioned behavior change, not a cleanup.

use std::sync::OnceLock;

use regex::Regex;

// Compile-once regex patterns via OnceLock.
fn re_respond_message() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"respond:?\s*(.*)$").unwrap())
}

fn re_later_time() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"later at\s+(.+)$").unwrap())
}

fn re_schedule_what() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"schedule\s+(.+?)(?:\s+(?:at|on|with|in)\s+.*)?$").unwrap())
}

fn re_schedule_when() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(?:at|on)\s+(.+?)(?:\s+(?:with|in)\s+.*)?$").unwrap())
}

fn re_schedule_with() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bwith\s+(.+?)(?:\s+(?:at|in)\s+.*)?$").unwrap())
}

fn re_schedule_where_anchor() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(?:at|in)\s+").unwrap())
}

fn re_reprioritize_id() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"reprioritize\s*(.*)$").unwrap())
}

fn capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Message text following the "respond" token (optional colon). Empty
/// string when nothing follows.
pub fn respond_message(text: &str) -> String {
    capture(re_respond_message(), text)
}

/// Time from a "later at <time>" pattern, absent when not specified.
pub fn respond_later_time(text: &str) -> Option<String> {
    re_later_time()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// What to schedule: the text after "schedule", up to the first keyword.
pub fn schedule_what(text: &str) -> String {
    capture(re_schedule_what(), text)
}

/// When to schedule: text after the first "at"/"on", up to "with"/"in".
pub fn schedule_when(text: &str) -> String {
    capture(re_schedule_when(), text)
}

/// Who to invite: text after "with", up to "at"/"in".
pub fn schedule_with_whom(text: &str) -> String {
    capture(re_schedule_with(), text)
}

/// Where to meet: everything after the LAST "at"/"in" anchor.
pub fn schedule_where(text: &str) -> String {
    re_schedule_where_anchor()
        .find_iter(text)
        .last()
        .map(|m| text[m.end()..].trim().to_string())
        .unwrap_or_default()
}

/// Item id: trailing text after the "reprioritize" keyword.
pub fn reprioritize_id(text: &str) -> String {
    capture(re_reprioritize_id(), text)
}
