//! Collaborator contracts for the email and calendar providers.
//!
//! Transport, OAuth, and retry policy live behind these traits in the
//! excluded provider layer. The core only consumes the fetched items and
//! catches `SourceError` at the dispatch boundary.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{CalendarEvent, Email, Preferences};

/// Failure surfaced by a source collaborator.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Provider error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Authorization expired or revoked")]
    AuthExpired,
}

/// Read-side contract of the email provider.
#[async_trait]
pub trait EmailSource: Send + Sync {
    async fn fetch_emails(&self, preferences: &Preferences) -> Result<Vec<Email>, SourceError>;
}

/// Read-side contract of the calendar provider.
#[async_trait]
pub trait CalendarSource: Send + Sync {
    async fn fetch_events(
        &self,
        preferences: &Preferences,
    ) -> Result<Vec<CalendarEvent>, SourceError>;
}
