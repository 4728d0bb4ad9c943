//! Terminal rendering for eventdesk types.
//!
//! Extension trait plus helpers that add colored, aligned output on top of
//! the core types using owo_colors.

use eventdesk_core::event::{EventRecord, ParticipantType};
use eventdesk_core::report::{RosterRow, ScheduleRow, Statistics};
use owo_colors::OwoColorize;

use chrono::{NaiveDate, NaiveTime};

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventRecord {
    fn render(&self) -> String {
        format!(
            "{}  {:<16}  {:<34}  {:<28}  {:<7}  {:<14}  {}",
            self.id.cyan(),
            date_time_label(self.date, self.time),
            self.name,
            self.venue.to_string(),
            self.organizer.to_string(),
            self.category.to_string(),
            participant_count_label(self.participant_count()).dimmed(),
        )
    }
}

impl Render for ParticipantType {
    fn render(&self) -> String {
        match self {
            ParticipantType::Student => self.as_str().green().to_string(),
            ParticipantType::Staff => self.as_str().yellow().to_string(),
        }
    }
}

impl Render for ScheduleRow {
    fn render(&self) -> String {
        format!(
            "{:<16}  {:<34}  {:<13}  {:<28}  {:<7}  {}",
            date_time_label(self.date, self.time),
            self.name,
            self.category,
            self.venue.to_string(),
            self.organizer,
            participant_count_label(self.participant_count).dimmed(),
        )
    }
}

impl Render for RosterRow {
    fn render(&self) -> String {
        format!(
            "{:<34}  {:<28}  {}",
            self.event,
            self.participant,
            self.kind.render()
        )
    }
}

/// `2025-05-01 10:00` for timed events, the bare date otherwise.
pub fn date_time_label(date: NaiveDate, time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => format!("{date} {}", t.format("%H:%M")),
        None => date.to_string(),
    }
}

fn participant_count_label(count: usize) -> String {
    match count {
        1 => "1 participant".to_string(),
        n => format!("{n} participants"),
    }
}

/// Totals footer shared by the list view and the stats report.
pub fn totals_line(stats: &Statistics) -> String {
    format!(
        "{} · {}",
        format!("{} events", stats.total_events).bold(),
        format!("{} participants", stats.total_participants).bold(),
    )
}

pub fn empty_state(message: &str) -> String {
    format!("  {}", message.dimmed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_time_label_with_and_without_time() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        assert_eq!(
            date_time_label(date, NaiveTime::from_hms_opt(9, 5, 0)),
            "2025-05-01 09:05"
        );
        assert_eq!(date_time_label(date, None), "2025-05-01");
    }

    #[test]
    fn participant_counts_pluralize() {
        assert_eq!(participant_count_label(1), "1 participant");
        assert_eq!(participant_count_label(0), "0 participants");
        assert_eq!(participant_count_label(4), "4 participants");
    }
}
