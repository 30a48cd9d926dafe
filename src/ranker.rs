//! Priority ranking for emails and calendar events.
//!
//! A single stable, multi-key comparator shared by both item kinds:
//! priority-contact membership, then importance flag, then recency.
//! The comparator is pure — no wall-clock reads, no side effects.

use chrono::{DateTime, Utc};

use crate::types::{CalendarEvent, Email, Preferences};

/// The three keys the ranker compares on, abstracted over item kind.
pub trait Prioritized {
    /// Counterparty address: sender for emails, organizer for events.
    fn participant_email(&self) -> &str;
    fn is_important(&self) -> bool;
    /// Timestamp used for the recency key.
    fn sort_timestamp(&self) -> DateTime<Utc>;
}

impl Prioritized for Email {
    fn participant_email(&self) -> &str {
        &self.from_email
    }
    fn is_important(&self) -> bool {
        self.is_important
    }
    fn sort_timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl Prioritized for CalendarEvent {
    fn participant_email(&self) -> &str {
        &self.organizer_email
    }
    fn is_important(&self) -> bool {
        self.is_important
    }
    fn sort_timestamp(&self) -> DateTime<Utc> {
        self.start
    }
}

/// Order items by the three-key comparator, short-circuiting at the first
/// key that discriminates:
///
/// 1. Priority-contact membership (in `preferences.priority_contacts` first)
/// 2. Importance flag (important first)
/// 3. Recency (greater timestamp first)
///
/// The sort is stable: items equal on all three keys keep their input order.
pub fn rank<T: Prioritized>(mut items: Vec<T>, preferences: &Preferences) -> Vec<T> {
    items.sort_by(|a, b| {
        let a_contact = preferences.priority_contacts.contains(a.participant_email());
        let b_contact = preferences.priority_contacts.contains(b.participant_email());
        b_contact
            .cmp(&a_contact)
            .then(b.is_important().cmp(&a.is_important()))
            .then(b.sort_timestamp().cmp(&a.sort_timestamp()))
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 9, hour, 0, 0).unwrap()
    }

    fn make_email(id: &str, from: &str, important: bool, hour: u32) -> Email {
        Email {
            id: id.to_string(),
            timestamp: ts(hour),
            from_email: from.to_string(),
            from_name: String::new(),
            subject: format!("Subject {}", id),
            body: String::new(),
            is_read: false,
            is_important: important,
            has_attachments: false,
        }
    }

    fn prefs_with(contacts: &[&str]) -> Preferences {
        Preferences {
            priority_contacts: contacts.iter().map(|s| s.to_string()).collect(),
            ..Preferences::default()
        }
    }

    fn ids(items: &[Email]) -> Vec<&str> {
        items.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_priority_contact_sorts_first() {
        let emails = vec![
            make_email("a", "stranger@other.com", true, 12),
            make_email("b", "boss@company.com", false, 8),
        ];
        let ranked = rank(emails, &prefs_with(&["boss@company.com"]));
        assert_eq!(ids(&ranked), vec!["b", "a"]);
    }

    #[test]
    fn test_importance_breaks_contact_tie() {
        let emails = vec![
            make_email("a", "x@other.com", false, 12),
            make_email("b", "y@other.com", true, 8),
        ];
        let ranked = rank(emails, &Preferences::default());
        assert_eq!(ids(&ranked), vec!["b", "a"]);
    }

    #[test]
    fn test_recency_breaks_importance_tie() {
        let emails = vec![
            make_email("a", "x@other.com", false, 8),
            make_email("b", "y@other.com", false, 12),
        ];
        let ranked = rank(emails, &Preferences::default());
        assert_eq!(ids(&ranked), vec!["b", "a"]);
    }

    #[test]
    fn test_stable_on_full_tie() {
        let emails = vec![
            make_email("first", "x@other.com", false, 9),
            make_email("second", "y@other.com", false, 9),
            make_email("third", "z@other.com", false, 9),
        ];
        let ranked = rank(emails, &Preferences::default());
        assert_eq!(ids(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_events_rank_on_organizer_and_start() {
        let make_event = |id: &str, organizer: &str, hour: u32| CalendarEvent {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            start: ts(hour),
            end: ts(hour + 1),
            organizer_email: organizer.to_string(),
            location: None,
            rsvp: crate::types::RsvpStatus::Accepted,
            is_important: false,
        };
        let events = vec![
            make_event("late", "x@other.com", 15),
            make_event("vip", "boss@company.com", 9),
        ];
        let ranked = rank(events, &prefs_with(&["boss@company.com"]));
        assert_eq!(ranked[0].id, "vip");
    }
}
