//! In-memory record store and its mutating workflows.
//!
//! The store holds the authoritative event collection for the session. All
//! mutations operate on it first; the caller then hands the full collection
//! to the persistence gateway. Collisions on id or name are not errors:
//! they come back as outcome variants carrying a ready-made resolution, and
//! the caller decides whether to take it or abort. There is no silent
//! overwrite.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::conflict;
use crate::error::{EventDeskError, EventDeskResult};
use crate::event::{Category, EventRecord, Organizer, Participant, ParticipantType, Venue};
use crate::ids;

/// The mutable fields of an event, as read from the scheduling form.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub venue: Venue,
    pub organizer: Organizer,
    pub category: Category,
}

impl EventDraft {
    fn into_record(self) -> EventRecord {
        EventRecord {
            id: self.id,
            name: self.name,
            date: self.date,
            time: self.time,
            venue: self.venue,
            organizer: self.organizer,
            category: self.category,
            participants: Vec::new(),
        }
    }
}

/// Result of an add workflow that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added,
    /// The draft's id is taken; `next_free` is the next free identifier.
    DuplicateId { next_free: String },
    /// The draft's name is taken; `suggestion` carries a `" (N)"` rename.
    DuplicateName { suggestion: String },
}

/// Result of an update workflow that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Updated,
    DuplicateId { next_free: String },
    DuplicateName { suggestion: String },
}

/// The authoritative in-memory collection of events for the session.
pub struct EventStore {
    events: Vec<EventRecord>,
}

impl EventStore {
    pub fn new(events: Vec<EventRecord>) -> Self {
        let mut store = EventStore { events };
        store.sort();
        store
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&EventRecord> {
        conflict::find_by_id(&self.events, id)
    }

    /// The next free event identifier, recomputed from the collection.
    pub fn next_event_id(&self) -> String {
        ids::format_event_id(ids::next_number(self.events.iter().map(|ev| ev.id.as_str())))
    }

    /// The next free participant identifier within one event.
    pub fn next_participant_id(&self, event_id: &str) -> EventDeskResult<String> {
        let event = self
            .get(event_id)
            .ok_or_else(|| EventDeskError::EventNotFound(event_id.to_string()))?;
        Ok(ids::format_participant_id(ids::next_number(
            event.participants.iter().map(|p| p.id.as_str()),
        )))
    }

    /// The highest participant number seen anywhere in the store.
    ///
    /// Used only to seed new sessions; per-event allocation remains the
    /// authority and cross-event uniqueness is not guaranteed.
    pub fn max_participant_number(&self) -> u32 {
        self.events
            .iter()
            .flat_map(|ev| ev.participants.iter())
            .map(|p| ids::trailing_number(&p.id))
            .max()
            .unwrap_or(0)
    }

    /// Add a new event.
    ///
    /// Validation failures (empty name, malformed id, past date/time,
    /// scheduling clash) are errors and leave the store untouched. Id and
    /// name collisions come back as conflict outcomes for the caller to
    /// resolve.
    pub fn add(&mut self, draft: EventDraft, now: NaiveDateTime) -> EventDeskResult<AddOutcome> {
        validate_draft(&draft)?;
        reject_past(&draft, now)?;
        self.check_clash(&draft, &draft.id)?;

        if conflict::find_by_id(&self.events, &draft.id).is_some() {
            return Ok(AddOutcome::DuplicateId {
                next_free: self.next_event_id(),
            });
        }
        if conflict::find_by_name(&self.events, &draft.name).is_some() {
            return Ok(AddOutcome::DuplicateName {
                suggestion: conflict::free_name(&self.events, &draft.name),
            });
        }

        self.events.push(draft.into_record());
        self.sort();
        Ok(AddOutcome::Added)
    }

    /// Replace the mutable fields of the event identified by `original_id`.
    ///
    /// Past dates are allowed here (editing an event that already happened
    /// is legitimate); everything else follows the add rules, with the
    /// edited event excluded from its own conflict checks.
    pub fn update(&mut self, original_id: &str, draft: EventDraft) -> EventDeskResult<UpdateOutcome> {
        let pos = self
            .position(original_id)
            .ok_or_else(|| EventDeskError::EventNotFound(original_id.to_string()))?;
        validate_draft(&draft)?;
        self.check_clash(&draft, original_id)?;

        if !draft.id.eq_ignore_ascii_case(original_id)
            && conflict::find_by_id(&self.events, &draft.id).is_some()
        {
            return Ok(UpdateOutcome::DuplicateId {
                next_free: self.next_event_id(),
            });
        }
        let current_name = &self.events[pos].name;
        if !draft.name.eq_ignore_ascii_case(current_name)
            && conflict::find_by_name(&self.events, &draft.name).is_some()
        {
            return Ok(UpdateOutcome::DuplicateName {
                suggestion: conflict::free_name(&self.events, &draft.name),
            });
        }

        let event = &mut self.events[pos];
        event.id = draft.id;
        event.name = draft.name;
        event.date = draft.date;
        event.time = draft.time;
        event.venue = draft.venue;
        event.organizer = draft.organizer;
        event.category = draft.category;
        self.sort();
        Ok(UpdateOutcome::Updated)
    }

    /// Delete an event, cascading to all of its participants.
    pub fn delete(&mut self, id: &str) -> EventDeskResult<EventRecord> {
        let pos = self
            .position(id)
            .ok_or_else(|| EventDeskError::EventNotFound(id.to_string()))?;
        Ok(self.events.remove(pos))
    }

    /// Register a participant for an event, allocating its id from the
    /// event's own participant sequence.
    pub fn register(
        &mut self,
        event_id: &str,
        full_name: &str,
        kind: ParticipantType,
    ) -> EventDeskResult<Participant> {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(EventDeskError::Validation(
                "Participant name is required.".into(),
            ));
        }
        let pos = self
            .position(event_id)
            .ok_or_else(|| EventDeskError::EventNotFound(event_id.to_string()))?;
        if conflict::is_registered(&self.events[pos], full_name) {
            return Err(EventDeskError::DuplicateParticipant(full_name.to_string()));
        }

        let number = ids::next_number(self.events[pos].participants.iter().map(|p| p.id.as_str()));
        let participant = Participant {
            id: ids::format_participant_id(number),
            full_name: full_name.to_string(),
            kind,
        };
        self.events[pos].participants.push(participant.clone());
        Ok(participant)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|ev| ev.id.eq_ignore_ascii_case(id))
    }

    fn check_clash(&self, draft: &EventDraft, exclude_id: &str) -> EventDeskResult<()> {
        if conflict::has_scheduling_clash(&self.events, exclude_id, draft.date, draft.time, draft.venue)
        {
            return Err(EventDeskError::SchedulingClash {
                date: draft.date,
                time: draft.time,
                venue: draft.venue,
            });
        }
        Ok(())
    }

    // Stable sort: equal dates keep insertion order, so report views are
    // reproducible.
    fn sort(&mut self) {
        self.events.sort_by_key(|ev| ev.date);
    }
}

fn validate_draft(draft: &EventDraft) -> EventDeskResult<()> {
    if draft.name.trim().is_empty() {
        return Err(EventDeskError::Validation("Event name is required.".into()));
    }
    if !ids::is_valid_event_id(&draft.id) {
        return Err(EventDeskError::Validation(
            "Event ID must follow the pattern EVT-0001.".into(),
        ));
    }
    Ok(())
}

fn reject_past(draft: &EventDraft, now: NaiveDateTime) -> EventDeskResult<()> {
    let past = match draft.time {
        Some(time) => draft.date < now.date() || (draft.date == now.date() && time < now.time()),
        None => draft.date < now.date(),
    };
    if past {
        return Err(EventDeskError::Validation(
            "Event date/time cannot be in the past.".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Category, Organizer, Venue};
    use chrono::{NaiveDate, NaiveTime};

    fn past_safe_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn draft(id: &str, name: &str, date: (i32, u32, u32), time: Option<(u32, u32)>, venue: Venue) -> EventDraft {
        EventDraft {
            id: id.to_string(),
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: time.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
            venue,
            organizer: Organizer::Sam,
            category: Category::Sports,
        }
    }

    fn store_with_athletics() -> EventStore {
        let mut store = EventStore::new(vec![]);
        let outcome = store
            .add(
                draft("EVT-0001", "Athletics", (2025, 5, 1), Some((10, 0)), Venue::Library),
                past_safe_now(),
            )
            .unwrap();
        assert_eq!(outcome, AddOutcome::Added);
        store
    }

    #[test]
    fn add_rejects_clashing_schedule() {
        let mut store = store_with_athletics();
        // Same date/time/venue, venue given in a different case at the
        // parsing boundary still normalizes to the same variant
        let result = store.add(
            draft("EVT-0002", "Chess Night", (2025, 5, 1), Some((10, 0)), Venue::Library),
            past_safe_now(),
        );
        assert!(matches!(result, Err(EventDeskError::SchedulingClash { .. })));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_rejects_past_date_time() {
        let mut store = EventStore::new(vec![]);
        let now = NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        let result = store.add(
            draft("EVT-0001", "Athletics", (2025, 4, 30), Some((10, 0)), Venue::Library),
            now,
        );
        assert!(matches!(result, Err(EventDeskError::Validation(_))));

        // Today is allowed as long as the time is still ahead
        let result = store.add(
            draft("EVT-0001", "Athletics", (2025, 5, 1), Some((13, 0)), Venue::Library),
            now,
        );
        assert_eq!(result.unwrap(), AddOutcome::Added);
    }

    #[test]
    fn add_rejects_malformed_id() {
        let mut store = EventStore::new(vec![]);
        let result = store.add(
            draft("EVT-1", "Athletics", (2025, 5, 1), None, Venue::Library),
            past_safe_now(),
        );
        assert!(matches!(result, Err(EventDeskError::Validation(_))));
    }

    #[test]
    fn duplicate_id_offers_fresh_identifier() {
        let mut store = store_with_athletics();
        let mut attempt = draft("EVT-0001", "Chess Night", (2025, 6, 1), None, Venue::Gallery);

        let outcome = store.add(attempt.clone(), past_safe_now()).unwrap();
        let AddOutcome::DuplicateId { next_free } = outcome else {
            panic!("expected a duplicate-id outcome");
        };
        assert_eq!(next_free, "EVT-0002");
        assert!(store.get(&next_free).is_none());

        attempt.id = next_free.clone();
        assert_eq!(store.add(attempt, past_safe_now()).unwrap(), AddOutcome::Added);
        // The original event's identifier is untouched
        assert!(store.get("EVT-0001").is_some());
        assert!(store.get("EVT-0002").is_some());
    }

    #[test]
    fn duplicate_name_offers_suffixed_rename() {
        let mut store = store_with_athletics();
        let mut attempt = draft("EVT-0002", "athletics", (2025, 6, 1), None, Venue::Gallery);

        let outcome = store.add(attempt.clone(), past_safe_now()).unwrap();
        let AddOutcome::DuplicateName { suggestion } = outcome else {
            panic!("expected a duplicate-name outcome");
        };
        assert_eq!(suggestion, "athletics (2)");

        attempt.name = suggestion;
        assert_eq!(store.add(attempt, past_safe_now()).unwrap(), AddOutcome::Added);
    }

    #[test]
    fn update_replaces_fields_and_keeps_participants() {
        let mut store = store_with_athletics();
        store
            .register("EVT-0001", "Jane Doe", ParticipantType::Student)
            .unwrap();

        let outcome = store
            .update(
                "EVT-0001",
                draft("EVT-0001", "Athletics", (2025, 5, 2), Some((14, 0)), Venue::Gallery),
            )
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Updated);

        let event = store.get("EVT-0001").unwrap();
        assert_eq!(event.venue, Venue::Gallery);
        assert_eq!(event.participant_count(), 1);
    }

    #[test]
    fn update_does_not_clash_with_itself() {
        let mut store = store_with_athletics();
        // Re-submitting the same schedule must not be flagged
        let outcome = store.update(
            "EVT-0001",
            draft("EVT-0001", "Athletics", (2025, 5, 1), Some((10, 0)), Venue::Library),
        );
        assert_eq!(outcome.unwrap(), UpdateOutcome::Updated);
    }

    #[test]
    fn update_flags_taken_id_and_name() {
        let mut store = store_with_athletics();
        store
            .add(
                draft("EVT-0002", "Chess Night", (2025, 6, 1), None, Venue::Gallery),
                past_safe_now(),
            )
            .unwrap();

        let outcome = store
            .update(
                "EVT-0002",
                draft("EVT-0001", "Chess Night", (2025, 6, 1), None, Venue::Gallery),
            )
            .unwrap();
        assert!(matches!(outcome, UpdateOutcome::DuplicateId { .. }));

        let outcome = store
            .update(
                "EVT-0002",
                draft("EVT-0002", "Athletics", (2025, 6, 1), None, Venue::Gallery),
            )
            .unwrap();
        assert!(matches!(
            outcome,
            UpdateOutcome::DuplicateName { suggestion } if suggestion == "Athletics (2)"
        ));
    }

    #[test]
    fn delete_cascades_and_resets_allocation() {
        let mut store = store_with_athletics();
        store
            .register("EVT-0001", "Jane Doe", ParticipantType::Student)
            .unwrap();

        let removed = store.delete("EVT-0001").unwrap();
        assert_eq!(removed.participant_count(), 1);
        assert!(store.is_empty());
        // Deleting the only event resets the effective next number to 1
        assert_eq!(store.next_event_id(), "EVT-0001");
    }

    #[test]
    fn register_allocates_per_event_and_rejects_duplicates() {
        let mut store = store_with_athletics();
        store
            .add(
                draft("EVT-0002", "Chess Night", (2025, 6, 1), None, Venue::Gallery),
                past_safe_now(),
            )
            .unwrap();

        let first = store
            .register("EVT-0001", "Jane Doe", ParticipantType::Student)
            .unwrap();
        assert_eq!(first.id, "PAR-00001");

        // Same name on the same event is rejected, case-insensitively
        let dup = store.register("EVT-0001", "jane doe", ParticipantType::Staff);
        assert!(matches!(dup, Err(EventDeskError::DuplicateParticipant(_))));

        // The same name on a different event is fine, and numbering starts
        // from that event's own sequence
        let other = store
            .register("EVT-0002", "Jane Doe", ParticipantType::Student)
            .unwrap();
        assert_eq!(other.id, "PAR-00001");

        let second = store
            .register("EVT-0001", "John Doe", ParticipantType::Staff)
            .unwrap();
        assert_eq!(second.id, "PAR-00002");

        assert_eq!(store.max_participant_number(), 2);
    }

    #[test]
    fn register_requires_a_name() {
        let mut store = store_with_athletics();
        let result = store.register("EVT-0001", "   ", ParticipantType::Student);
        assert!(matches!(result, Err(EventDeskError::Validation(_))));
    }

    #[test]
    fn events_stay_sorted_by_date_with_stable_ties() {
        let mut store = EventStore::new(vec![]);
        for (id, name, day, venue) in [
            ("EVT-0001", "Late", (2025, 7, 1), Venue::Gallery),
            ("EVT-0002", "Early", (2025, 5, 1), Venue::Gallery),
            ("EVT-0003", "Also early", (2025, 5, 1), Venue::Library),
        ] {
            store
                .add(draft(id, name, day, None, venue), past_safe_now())
                .unwrap();
        }

        let names: Vec<_> = store.events().iter().map(|ev| ev.name.as_str()).collect();
        assert_eq!(names, vec!["Early", "Also early", "Late"]);
    }
}
