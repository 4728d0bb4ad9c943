//! Scanning for events that are about to start.
//!
//! The scan is a pure function over a snapshot of the collection; the
//! caller owns the already-notified set and whatever schedules the polling.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};

use crate::event::EventRecord;

/// How far ahead of an event's start the notice fires.
pub const DEFAULT_LEAD_MINUTES: i64 = 10;

/// How often the watch loop re-scans the collection.
pub const DEFAULT_POLL_SECONDS: u64 = 60;

/// Events starting after `now` and no later than `now + lead`, skipping
/// ids already in `notified`. Date-only events have no start instant and
/// are never due.
pub fn due_for_notice<'a>(
    events: &'a [EventRecord],
    notified: &HashSet<String>,
    now: NaiveDateTime,
    lead: Duration,
) -> Vec<&'a EventRecord> {
    let threshold = now + lead;
    events
        .iter()
        .filter(|ev| !notified.contains(&ev.id))
        .filter(|ev| {
            ev.start()
                .is_some_and(|start| start > now && start <= threshold)
        })
        .collect()
}
