//! Event and participant record types.
//!
//! These types represent scheduled events in a presentation-agnostic way.
//! The CLI works exclusively with them for storage, conflict checks, and
//! report generation.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EventDeskError;

/// A scheduled event with its metadata and registered participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Identifier in the form `EVT-0001`
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    /// Clock time with minute precision; `None` for date-only events
    pub time: Option<NaiveTime>,
    pub venue: Venue,
    pub organizer: Organizer,
    pub category: Category,
    /// Registrations in insertion order, owned exclusively by this event
    pub participants: Vec<Participant>,
}

impl EventRecord {
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Combined start instant, available only when a time is set.
    pub fn start(&self) -> Option<NaiveDateTime> {
        self.time.map(|t| self.date.and_time(t))
    }
}

/// A participant registered for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Identifier in the form `PAR-00001`, allocated per event
    pub id: String,
    pub full_name: String,
    pub kind: ParticipantType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParticipantType {
    Student,
    Staff,
}

impl ParticipantType {
    pub const ALL: [ParticipantType; 2] = [ParticipantType::Student, ParticipantType::Staff];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantType::Student => "Student",
            ParticipantType::Staff => "Staff",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Venue {
    Gallery,
    Library,
    #[serde(rename = "Innovation Hub")]
    InnovationHub,
    #[serde(rename = "Bintumani Conference Center")]
    BintumaniConferenceCenter,
}

impl Venue {
    pub const ALL: [Venue; 4] = [
        Venue::Gallery,
        Venue::Library,
        Venue::InnovationHub,
        Venue::BintumaniConferenceCenter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Venue::Gallery => "Gallery",
            Venue::Library => "Library",
            Venue::InnovationHub => "Innovation Hub",
            Venue::BintumaniConferenceCenter => "Bintumani Conference Center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Organizer {
    Sam,
    Ruben,
    Mtheus,
    Bruno,
}

impl Organizer {
    pub const ALL: [Organizer; 4] = [
        Organizer::Sam,
        Organizer::Ruben,
        Organizer::Mtheus,
        Organizer::Bruno,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Organizer::Sam => "Sam",
            Organizer::Ruben => "Ruben",
            Organizer::Mtheus => "Mtheus",
            Organizer::Bruno => "Bruno",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Seminar,
    Sports,
    Workshop,
    #[serde(rename = "Cultural Show")]
    CulturalShow,
    Exhibition,
    Orientation,
    #[serde(rename = "Career Fair")]
    CareerFair,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Seminar,
        Category::Sports,
        Category::Workshop,
        Category::CulturalShow,
        Category::Exhibition,
        Category::Orientation,
        Category::CareerFair,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Seminar => "Seminar",
            Category::Sports => "Sports",
            Category::Workshop => "Workshop",
            Category::CulturalShow => "Cultural Show",
            Category::Exhibition => "Exhibition",
            Category::Orientation => "Orientation",
            Category::CareerFair => "Career Fair",
        }
    }

    /// Category mapped from a known event name, if any.
    pub fn for_name(name: &str) -> Option<Category> {
        EVENT_CATALOG
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, c)| *c)
    }
}

/// Event names offered by the scheduling form, each with its fixed category.
pub const EVENT_CATALOG: &[(&str, Category)] = &[
    ("AI & Machine Learning Seminar", Category::Seminar),
    ("University Football League Finals", Category::Sports),
    ("Modern Web Development Workshop", Category::Workshop),
    ("Inter-Faculty Cultural Night", Category::CulturalShow),
    ("Athletics", Category::Sports),
    ("Campus Art & Creative Expo", Category::Exhibition),
    ("New Student Orientation Week", Category::Orientation),
    ("Annual Job & Career Fair", Category::CareerFair),
];

macro_rules! impl_display_fromstr {
    ($ty:ident, $label:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = EventDeskError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| {
                        EventDeskError::Validation(format!(
                            concat!("Unknown ", $label, ": \"{}\""),
                            s
                        ))
                    })
            }
        }
    };
}

impl_display_fromstr!(Venue, "venue");
impl_display_fromstr!(Organizer, "organizer");
impl_display_fromstr!(Category, "category");
impl_display_fromstr!(ParticipantType, "participant type");
