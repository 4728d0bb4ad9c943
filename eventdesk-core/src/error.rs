//! Error types for the eventdesk ecosystem.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::event::Venue;

/// Errors that can occur in eventdesk operations.
#[derive(Error, Debug)]
pub enum EventDeskError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Another event is already scheduled at {venue} on {date} at the same time")]
    SchedulingClash {
        date: NaiveDate,
        time: Option<NaiveTime>,
        venue: Venue,
    },

    #[error("\"{0}\" is already registered for this event")]
    DuplicateParticipant(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Storage bootstrap error: {0}")]
    Bootstrap(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for eventdesk operations.
pub type EventDeskResult<T> = Result<T, EventDeskError>;
