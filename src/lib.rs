//! voicedesk — voice-command interpretation core.
//!
//! Turns a free-text utterance into a structured intent, routes it to the
//! right handler, and produces a spoken-style response summarizing emails
//! or calendar state, with priority ordering and conflict detection.
//!
//! Data flows one way: raw text → intent parser → dispatcher → (fetch via
//! source collaborator) → priority ranker → summarizer → response text.
//! Every core function is pure over its inputs; the only awaited work is
//! the two source fetches behind [`sources::EmailSource`] and
//! [`sources::CalendarSource`].
//!
//! Transport to the providers, OAuth, speech I/O, and the UI live outside
//! this crate, behind the source traits.

pub mod dispatch;
pub mod error;
pub mod intent;
pub mod ranker;
pub mod sources;
pub mod summary;
pub mod timeutil;
pub mod types;
pub mod wake;

pub use dispatch::Assistant;
pub use error::AssistantError;
pub use types::{
    CalendarEvent, Email, Preferences, Response, RsvpStatus, SummaryLength,
};

/// Initialize env_logger for embedding binaries that don't set up their
/// own logging. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env().try_init();
}
