//! Utterance-to-intent parsing (ordered rule cascade).
//!
//! Matching is a flat decision list evaluated in order; the first matching
//! rule wins. The order itself is part of the contract: an utterance
//! containing both "ignore" and "schedule" resolves to Ignore because the
//! ignore rule sits earlier in the list. Do not reorder for cleanliness.

pub mod entities;

use serde::Serialize;

/// The closed set of actions an utterance can request, with extracted
/// entities attached to the variant they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    ReadEmails,
    ReadAgenda,
    Ignore,
    Respond {
        /// Message text following the "respond" token; empty if none.
        message: String,
    },
    RespondLater {
        /// Time from a "later at <time>" pattern, absent if unspecified.
        time: Option<String>,
    },
    SetImportant {
        important: bool,
    },
    CalendarResponse {
        reply: CalendarReply,
    },
    Schedule {
        what: String,
        when: String,
        with_whom: String,
        location: String,
    },
    Reprioritize {
        id: String,
    },
    Unknown,
}

/// RSVP action extracted from a calendar-response utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarReply {
    Accept,
    Decline,
    Maybe,
    Reschedule,
}

type RuleFn = fn(&str) -> Option<Intent>;

/// The ordered decision list. First match wins; tests enumerate this
/// table to pin the order.
pub const RULES: &[(&str, RuleFn)] = &[
    ("read_emails", rule_read_emails),
    ("read_agenda", rule_read_agenda),
    ("ignore", rule_ignore),
    ("respond", rule_respond),
    ("respond_later", rule_respond_later),
    ("set_important", rule_set_important),
    ("calendar_response", rule_calendar_response),
    ("schedule", rule_schedule),
    ("reprioritize", rule_reprioritize),
];

/// Parse a raw utterance into an intent.
///
/// Input is lowercased and trimmed before matching; unrecognized text maps
/// to `Intent::Unknown`, never an error.
pub fn parse(utterance: &str) -> Intent {
    let text = utterance.trim().to_lowercase();
    for (_, rule) in RULES {
        if let Some(intent) = rule(&text) {
            return intent;
        }
    }
    Intent::Unknown
}

// ---- Rule 1: read emails ----
fn rule_read_emails(text: &str) -> Option<Intent> {
    if text.contains("read me my emails") || text.contains("read my emails") {
        return Some(Intent::ReadEmails);
    }
    None
}

// ---- Rule 2: read agenda ----
fn rule_read_agenda(text: &str) -> Option<Intent> {
    const TRIGGERS: &[&str] = &[
        "tell me what i have to do today",
        "what do i have to do today",
        "read my agenda",
        "read my calendar",
    ];
    if TRIGGERS.iter().any(|t| text.contains(t)) {
        return Some(Intent::ReadAgenda);
    }
    None
}

// ---- Rule 3: ignore ----
fn rule_ignore(text: &str) -> Option<Intent> {
    if text.contains("ignore") {
        return Some(Intent::Ignore);
    }
    None
}

// ---- Rule 4: respond (immediate) ----
fn rule_respond(text: &str) -> Option<Intent> {
    if text.contains("respond") && !text.contains("respond later") {
        return Some(Intent::Respond {
            message: entities::respond_message(text),
        });
    }
    None
}

// ---- Rule 5: respond later ----
fn rule_respond_later(text: &str) -> Option<Intent> {
    if text.contains("respond later") {
        return Some(Intent::RespondLater {
            time: entities::respond_later_time(text),
        });
    }
    None
}

// ---- Rule 6: mark (not) important ----
fn rule_set_important(text: &str) -> Option<Intent> {
    if text.contains("mark") && text.contains("important") {
        return Some(Intent::SetImportant {
            important: !text.contains("not important"),
        });
    }
    None
}

// ---- Rule 7: calendar response ----
fn rule_calendar_response(text: &str) -> Option<Intent> {
    const TRIGGERS: &[&str] = &["accept", "decline", "maybe", "find me a new time"];
    if !TRIGGERS.iter().any(|t| text.contains(t)) {
        return None;
    }
    // Fallback chain when several keywords appear: decline, then maybe,
    // then the reschedule phrase, defaulting to accept.
    let reply = if text.contains("decline") {
        CalendarReply::Decline
    } else if text.contains("maybe") {
        CalendarReply::Maybe
    } else if text.contains("find me a new time") {
        CalendarReply::Reschedule
    } else {
        CalendarReply::Accept
    };
    Some(Intent::CalendarResponse { reply })
}

// ---- Rule 8: schedule ----
fn rule_schedule(text: &str) -> Option<Intent> {
    if text.contains("schedule") {
        return Some(Intent::Schedule {
            what: entities::schedule_what(text),
            when: entities::schedule_when(text),
            with_whom: entities::schedule_with_whom(text),
            location: entities::schedule_where(text),
        });
    }
    None
}

// ---- Rule 9: reprioritize ----
fn rule_reprioritize(text: &str) -> Option<Intent> {
    if text.contains("reprioritize") {
        return Some(Intent::Reprioritize {
            id: entities::reprioritize_id(text),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_is_pinned() {
        let names: Vec<&str> = RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "read_emails",
                "read_agenda",
                "ignore",
                "respond",
                "respond_later",
                "set_important",
                "calendar_response",
                "schedule",
                "reprioritize",
            ]
        );
    }

    // Rule 1

    #[test]
    fn test_read_emails_with_surrounding_text() {
        assert_eq!(parse("could you read me my emails please"), Intent::ReadEmails);
        assert_eq!(parse("READ MY EMAILS"), Intent::ReadEmails);
    }

    // Rule 2

    #[test]
    fn test_read_agenda_variants() {
        assert_eq!(parse("tell me what i have to do today"), Intent::ReadAgenda);
        assert_eq!(parse("what do i have to do today"), Intent::ReadAgenda);
        assert_eq!(parse("read my agenda"), Intent::ReadAgenda);
        assert_eq!(parse("read my calendar"), Intent::ReadAgenda);
    }

    // Rule 3, including precedence over later rules

    #[test]
    fn test_ignore_wins_over_schedule() {
        assert_eq!(parse("ignore the schedule request"), Intent::Ignore);
    }

    // Rules 4 and 5

    #[test]
    fn test_respond_captures_message() {
        assert_eq!(
            parse("respond: sounds great"),
            Intent::Respond {
                message: "sounds great".to_string()
            }
        );
    }

    #[test]
    fn test_respond_with_empty_message() {
        assert_eq!(
            parse("respond"),
            Intent::Respond {
                message: String::new()
            }
        );
    }

    #[test]
    fn test_respond_later_with_time() {
        assert_eq!(
            parse("respond later at 5pm"),
            Intent::RespondLater {
                time: Some("5pm".to_string())
            }
        );
    }

    #[test]
    fn test_respond_later_without_time() {
        assert_eq!(parse("i'll respond later"), Intent::RespondLater { time: None });
    }

    // Rule 6

    #[test]
    fn test_mark_important() {
        assert_eq!(
            parse("mark it as important"),
            Intent::SetImportant { important: true }
        );
    }

    #[test]
    fn test_mark_not_important() {
        assert_eq!(
            parse("mark that as not important"),
            Intent::SetImportant { important: false }
        );
    }

    // Rule 7, including the fallback chain

    #[test]
    fn test_calendar_response_accept() {
        assert_eq!(
            parse("accept the invite"),
            Intent::CalendarResponse {
                reply: CalendarReply::Accept
            }
        );
    }

    #[test]
    fn test_calendar_response_decline_beats_maybe() {
        assert_eq!(
            parse("maybe no, decline it"),
            Intent::CalendarResponse {
                reply: CalendarReply::Decline
            }
        );
    }

    #[test]
    fn test_calendar_response_maybe_beats_reschedule() {
        assert_eq!(
            parse("maybe, or find me a new time"),
            Intent::CalendarResponse {
                reply: CalendarReply::Maybe
            }
        );
    }

    #[test]
    fn test_calendar_response_reschedule() {
        assert_eq!(
            parse("find me a new time"),
            Intent::CalendarResponse {
                reply: CalendarReply::Reschedule
            }
        );
    }

    // Rule 8

    #[test]
    fn test_schedule_extracts_all_entities() {
        assert_eq!(
            parse("schedule team sync at 3pm with marketing in room b"),
            Intent::Schedule {
                what: "team sync".to_string(),
                when: "3pm".to_string(),
                with_whom: "marketing".to_string(),
                location: "room b".to_string(),
            }
        );
    }

    #[test]
    fn test_schedule_with_missing_entities() {
        assert_eq!(
            parse("schedule coffee"),
            Intent::Schedule {
                what: "coffee".to_string(),
                when: String::new(),
                with_whom: String::new(),
                location: String::new(),
            }
        );
    }

    // Rule 9

    #[test]
    fn test_reprioritize() {
        assert_eq!(
            parse("reprioritize msg-42"),
            Intent::Reprioritize {
                id: "msg-42".to_string()
            }
        );
    }

    // Fallback

    #[test]
    fn test_unknown() {
        assert_eq!(parse("play some music"), Intent::Unknown);
        assert_eq!(parse(""), Intent::Unknown);
    }
}
