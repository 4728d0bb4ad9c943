//! Collision and clash checks over the event collection.
//!
//! All lookups are linear scans: the collection is small and human-entered,
//! and the store re-sorts it on every mutation anyway.

use chrono::{NaiveDate, NaiveTime};

use crate::event::{EventRecord, Venue};

/// Find an event by identifier, case-insensitively.
pub fn find_by_id<'a>(events: &'a [EventRecord], id: &str) -> Option<&'a EventRecord> {
    events.iter().find(|ev| ev.id.eq_ignore_ascii_case(id))
}

/// Find an event by name, case-insensitively.
pub fn find_by_name<'a>(events: &'a [EventRecord], name: &str) -> Option<&'a EventRecord> {
    events.iter().find(|ev| ev.name.eq_ignore_ascii_case(name))
}

/// Whether another event already occupies the same date, time, and venue.
///
/// Time uses equality-or-both-absent semantics: two date-only events at the
/// same date/venue clash, while a timed and an untimed event do not. The
/// event with `exclude_id` is skipped so an edit never clashes with itself.
pub fn has_scheduling_clash(
    events: &[EventRecord],
    exclude_id: &str,
    date: NaiveDate,
    time: Option<NaiveTime>,
    venue: Venue,
) -> bool {
    events
        .iter()
        .filter(|ev| !ev.id.eq_ignore_ascii_case(exclude_id))
        .any(|ev| ev.date == date && ev.time == time && ev.venue == venue)
}

/// Append `" (N)"` to `base`, with N starting at 2, until the name no
/// longer collides with any stored event.
pub fn free_name(events: &[EventRecord], base: &str) -> String {
    let mut suffix = 2;
    loop {
        let candidate = format!("{base} ({suffix})");
        if find_by_name(events, &candidate).is_none() {
            return candidate;
        }
        suffix += 1;
    }
}

/// Whether a participant with this full name is already registered,
/// case-insensitively.
pub fn is_registered(event: &EventRecord, full_name: &str) -> bool {
    event
        .participants
        .iter()
        .any(|p| p.full_name.eq_ignore_ascii_case(full_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Category, Organizer};

    fn event(id: &str, name: &str, date: (i32, u32, u32), time: Option<(u32, u32)>, venue: Venue) -> EventRecord {
        EventRecord {
            id: id.to_string(),
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: time.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
            venue,
            organizer: Organizer::Sam,
            category: Category::Sports,
            participants: vec![],
        }
    }

    #[test]
    fn lookups_ignore_case() {
        let events = vec![event("EVT-0001", "Athletics", (2025, 5, 1), None, Venue::Library)];
        assert!(find_by_id(&events, "evt-0001").is_some());
        assert!(find_by_name(&events, "ATHLETICS").is_some());
        assert!(find_by_id(&events, "EVT-0002").is_none());
    }

    #[test]
    fn clash_requires_all_three_to_match() {
        let events = vec![event(
            "EVT-0001",
            "Athletics",
            (2025, 5, 1),
            Some((10, 0)),
            Venue::Library,
        )];
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let time = NaiveTime::from_hms_opt(10, 0, 0);

        assert!(has_scheduling_clash(&events, "EVT-0002", date, time, Venue::Library));
        // Any one field differing clears the clash
        assert!(!has_scheduling_clash(&events, "EVT-0002", date, time, Venue::Gallery));
        assert!(!has_scheduling_clash(
            &events,
            "EVT-0002",
            date.succ_opt().unwrap(),
            time,
            Venue::Library
        ));
        assert!(!has_scheduling_clash(
            &events,
            "EVT-0002",
            date,
            NaiveTime::from_hms_opt(11, 0, 0),
            Venue::Library
        ));
    }

    #[test]
    fn event_never_clashes_with_itself() {
        let events = vec![event(
            "EVT-0001",
            "Athletics",
            (2025, 5, 1),
            Some((10, 0)),
            Venue::Library,
        )];
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let time = NaiveTime::from_hms_opt(10, 0, 0);
        assert!(!has_scheduling_clash(&events, "EVT-0001", date, time, Venue::Library));
        // The exclusion is case-insensitive like every id comparison
        assert!(!has_scheduling_clash(&events, "evt-0001", date, time, Venue::Library));
    }

    #[test]
    fn untimed_events_clash_only_with_untimed() {
        let events = vec![event("EVT-0001", "Athletics", (2025, 5, 1), None, Venue::Library)];
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();

        assert!(has_scheduling_clash(&events, "EVT-0002", date, None, Venue::Library));
        assert!(!has_scheduling_clash(
            &events,
            "EVT-0002",
            date,
            NaiveTime::from_hms_opt(10, 0, 0),
            Venue::Library
        ));
    }

    #[test]
    fn free_name_skips_taken_suffixes() {
        let events = vec![
            event("EVT-0001", "Athletics", (2025, 5, 1), None, Venue::Library),
            event("EVT-0002", "Athletics (2)", (2025, 5, 2), None, Venue::Gallery),
        ];
        assert_eq!(free_name(&events, "Athletics"), "Athletics (3)");
        assert_eq!(free_name(&events, "Chess Night"), "Chess Night (2)");
    }

    #[test]
    fn registration_check_ignores_case() {
        let mut ev = event("EVT-0001", "Athletics", (2025, 5, 1), None, Venue::Library);
        ev.participants.push(crate::event::Participant {
            id: "PAR-00001".into(),
            full_name: "Jane Doe".into(),
            kind: crate::event::ParticipantType::Student,
        });
        assert!(is_registered(&ev, "jane doe"));
        assert!(!is_registered(&ev, "John Doe"));
    }
}
