//! Domain types shared across the interpretation core.
//!
//! All types here are plain data. The core never mutates fetched items in
//! place — ranking and summarization produce new ordered views. Serde
//! derives match the camelCase convention of the UI layer these types
//! cross into.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How much detail the user wants spoken back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Concise,
    #[default]
    Medium,
    Detailed,
    Everything,
}

impl SummaryLength {
    /// Number of emails narrated at this tier. None means all of them.
    pub fn narrate_limit(&self) -> Option<usize> {
        match self {
            SummaryLength::Concise => Some(3),
            SummaryLength::Medium => Some(5),
            SummaryLength::Detailed => Some(7),
            SummaryLength::Everything => None,
        }
    }
}

/// Per-session user settings, supplied by the caller on every invocation.
/// The core keeps no implicit state of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub summary_length: SummaryLength,
    /// Email addresses the user has designated for preferential ranking.
    #[serde(default)]
    pub priority_contacts: HashSet<String>,
}

/// An email as delivered by the email source collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub from_email: String,
    /// Sender display name. May be empty; the summarizer then derives one
    /// from the address.
    #[serde(default)]
    pub from_name: String,
    pub subject: String,
    #[serde(default)]
    pub body: String,
    pub is_read: bool,
    pub is_important: bool,
    #[serde(default)]
    pub has_attachments: bool,
}

/// The user's own RSVP on a calendar event (Google Calendar vocabulary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RsvpStatus {
    Accepted,
    Declined,
    Tentative,
    NeedsAction,
}

/// A calendar event as delivered by the calendar source collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub organizer_email: String,
    #[serde(default)]
    pub location: Option<String>,
    pub rsvp: RsvpStatus,
    /// High-importance flag (surfaced in the top-priorities section).
    pub is_important: bool,
}

/// The single output of the core: a spoken-style response message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub message: String,
}

impl Response {
    pub fn new(message: impl Into<String>) -> Self {
        Response {
            message: message.into(),
        }
    }
}
