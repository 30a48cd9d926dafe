//! Error types for the interpretation core.
//!
//! Errors are classified by where they surface:
//! - Source: a collaborator fetch failed (caught at the dispatch boundary,
//!   converted to a spoken apology — never propagated to the caller)
//! - InvalidInterval: an input-contract violation on duration math

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::sources::SourceError;

/// Error types raised inside the interpretation core.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// A collaborator (email or calendar source) failed to deliver items.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Duration requested over an interval whose end precedes its start.
    /// Callers are required to validate intervals; this is not clamped.
    #[error("Invalid interval: end {end} precedes start {start}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}
