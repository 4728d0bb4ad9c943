//! Summary report data derived from the record store.
//!
//! These functions only aggregate; rendering belongs to the presentation
//! layer.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

use crate::event::{EventRecord, ParticipantType, Venue};

/// One row of the upcoming-schedule report.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRow {
    pub name: String,
    pub category: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub venue: Venue,
    pub organizer: String,
    pub participant_count: usize,
}

/// One row of the participant roster, flattened across events.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow {
    pub event: String,
    pub participant: String,
    pub kind: ParticipantType,
}

/// Events occupying the same date and venue (any time).
#[derive(Debug, Clone, PartialEq)]
pub struct ClashGroup {
    pub date: NaiveDate,
    pub venue: Venue,
    pub event_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_events: usize,
    pub total_participants: usize,
    /// Name and registration count of the most popular event
    pub busiest: Option<(String, usize)>,
    pub clashes: Vec<ClashGroup>,
}

/// Schedule rows sorted by date (stable for equal dates).
pub fn upcoming_schedule(events: &[EventRecord]) -> Vec<ScheduleRow> {
    let mut rows: Vec<ScheduleRow> = events
        .iter()
        .map(|ev| ScheduleRow {
            name: ev.name.clone(),
            category: ev.category.to_string(),
            date: ev.date,
            time: ev.time,
            venue: ev.venue,
            organizer: ev.organizer.to_string(),
            participant_count: ev.participant_count(),
        })
        .collect();
    rows.sort_by_key(|row| row.date);
    rows
}

/// Every registration as an (event, participant, type) row, in store order.
pub fn participant_roster(events: &[EventRecord]) -> Vec<RosterRow> {
    events
        .iter()
        .flat_map(|ev| {
            ev.participants.iter().map(|p| RosterRow {
                event: ev.name.clone(),
                participant: p.full_name.clone(),
                kind: p.kind,
            })
        })
        .collect()
}

pub fn statistics(events: &[EventRecord]) -> Statistics {
    let total_participants = events.iter().map(EventRecord::participant_count).sum();
    let busiest = events
        .iter()
        .max_by_key(|ev| ev.participant_count())
        .map(|ev| (ev.name.clone(), ev.participant_count()));

    // Group by date + venue; a group with more than one event is a clash
    // cell regardless of times
    let mut cells: BTreeMap<(NaiveDate, Venue), Vec<String>> = BTreeMap::new();
    for ev in events {
        cells
            .entry((ev.date, ev.venue))
            .or_default()
            .push(ev.name.clone());
    }
    let clashes = cells
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|((date, venue), event_names)| ClashGroup {
            date,
            venue,
            event_names,
        })
        .collect();

    Statistics {
        total_events: events.len(),
        total_participants,
        busiest,
        clashes,
    }
}
