pub mod add;
pub mod delete;
pub mod list;
pub mod login;
pub mod register;
pub mod report;
pub mod theme;
pub mod update;
pub mod watch;

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};

/// Parse a strict `YYYY-MM-DD` form date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\" (expected YYYY-MM-DD)", input))
}

/// Parse a strict `HH:MM` form time; an empty input means no time.
pub fn parse_time(input: &str) -> Result<Option<NaiveTime>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map(Some)
        .map_err(|_| anyhow::anyhow!("Could not parse time: \"{}\" (expected HH:MM)", input))
}
