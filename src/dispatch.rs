//! Command dispatch: one handler per intent.
//!
//! `Assistant::interpret` is the single entry point of the core. Each
//! invocation is independent — preferences arrive as an argument, nothing
//! is retained between calls. The only awaited work is the two source
//! fetches; every other handler is a pure template over its entities.

use std::sync::Arc;

use chrono::Utc;

use crate::error::AssistantError;
use crate::intent::{self, CalendarReply, Intent};
use crate::ranker::rank;
use crate::sources::{CalendarSource, EmailSource};
use crate::summary::{summarize_emails, summarize_events};
use crate::types::{Preferences, Response};
use crate::wake;

/// Apology spoken when the email source fails. The voice interaction must
/// always receive some response, never a propagated error.
const EMAIL_FETCH_APOLOGY: &str =
    "I'm sorry, I couldn't read your emails at this time. Please try again later.";

/// Apology spoken when the calendar source fails.
const AGENDA_FETCH_APOLOGY: &str =
    "I'm sorry, I couldn't read your agenda at this time. Please try again later.";

const UNKNOWN_MESSAGE: &str =
    "Sorry, I didn't understand that. You can ask me to read your emails or your agenda.";

/// The orchestration engine tying parser, ranker, and summarizer together
/// over the two source collaborators.
pub struct Assistant {
    email: Arc<dyn EmailSource>,
    calendar: Arc<dyn CalendarSource>,
}

impl Assistant {
    pub fn new(email: Arc<dyn EmailSource>, calendar: Arc<dyn CalendarSource>) -> Self {
        Assistant { email, calendar }
    }

    /// Interpret one utterance and produce a spoken-style response.
    ///
    /// Strips the wake phrase when present, parses the intent, and routes
    /// it to its handler. Never returns an error: fetch failures degrade
    /// to a fixed apology, unrecognized text to a "didn't understand"
    /// message.
    pub async fn interpret(&self, utterance: &str, preferences: &Preferences) -> Response {
        let command = wake::strip_wake_phrase(utterance).unwrap_or(utterance);
        let intent = intent::parse(command);
        log::debug!("parsed intent: {:?}", intent);
        self.dispatch(intent, preferences).await
    }

    async fn dispatch(&self, intent: Intent, preferences: &Preferences) -> Response {
        let message = match intent {
            Intent::ReadEmails => match self.email_briefing(preferences).await {
                Ok(message) => message,
                Err(err) => {
                    log::warn!("email briefing failed: {}", err);
                    EMAIL_FETCH_APOLOGY.to_string()
                }
            },
            Intent::ReadAgenda => match self.agenda_briefing(preferences).await {
                Ok(message) => message,
                Err(err) => {
                    log::warn!("agenda briefing failed: {}", err);
                    AGENDA_FETCH_APOLOGY.to_string()
                }
            },
            Intent::Ignore => "Okay, I'll ignore that.".to_string(),
            Intent::Respond { message } => format!("Okay, I'll respond: {}", message),
            Intent::RespondLater { time } => match time {
                Some(time) => format!("Okay, I'll remind you to respond at {}.", time),
                None => "Okay, I'll remind you to respond later.".to_string(),
            },
            Intent::SetImportant { important } => {
                if important {
                    "Okay, I've marked it as important.".to_string()
                } else {
                    "Okay, I've marked it as not important.".to_string()
                }
            }
            Intent::CalendarResponse { reply } => match reply {
                CalendarReply::Accept => "Okay, I've accepted the invitation.".to_string(),
                CalendarReply::Decline => "Okay, I've declined the invitation.".to_string(),
                CalendarReply::Maybe => "Okay, I've marked you as maybe attending.".to_string(),
                CalendarReply::Reschedule => {
                    "Okay, I'll look for a new time that works.".to_string()
                }
            },
            Intent::Schedule {
                what,
                when,
                with_whom,
                location,
            } => schedule_confirmation(&what, &when, &with_whom, &location),
            Intent::Reprioritize { id } => {
                format!("Okay, I've moved {} to the top of your priorities.", id)
            }
            Intent::Unknown => UNKNOWN_MESSAGE.to_string(),
        };
        Response::new(message)
    }

    async fn email_briefing(&self, preferences: &Preferences) -> Result<String, AssistantError> {
        let emails = self.email.fetch_emails(preferences).await?;
        let ranked = rank(emails, preferences);
        Ok(summarize_emails(&ranked, preferences))
    }

    async fn agenda_briefing(&self, preferences: &Preferences) -> Result<String, AssistantError> {
        let events = self.calendar.fetch_events(preferences).await?;
        let ranked = rank(events, preferences);
        summarize_events(&ranked, preferences, Utc::now())
    }
}

/// Build the schedule confirmation by folding an ordered list of
/// (condition, fragment) pairs — field order and conditional inclusion
/// stay declarative. Each included fragment carries one trailing space.
fn schedule_confirmation(what: &str, when: &str, with_whom: &str, location: &str) -> String {
    let fragments: [(bool, String); 4] = [
        (!what.is_empty(), format!("{} ", what)),
        (!when.is_empty(), format!("at {} ", when)),
        (!with_whom.is_empty(), format!("with {} ", with_whom)),
        (!location.is_empty(), format!("in {} ", location)),
    ];

    let mut message = String::from("Scheduling ");
    for (condition, fragment) in fragments {
        if condition {
            message.push_str(&fragment);
        }
    }
    message.push_str("Should I send the invitation?");
    message
}
