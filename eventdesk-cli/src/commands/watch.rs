use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use chrono::{Duration, Local};
use eventdesk_core::db::Database;
use eventdesk_core::event::EventRecord;
use eventdesk_core::reminders;
use notify_rust::Notification;
use owo_colors::OwoColorize;

use crate::render::date_time_label;

/// Poll the database and raise a notice for every event starting within
/// the lead window. Each event is notified once per watch session; ctrl-c
/// stops the loop.
pub async fn run(dir: &Path, lead_minutes: i64, interval_secs: u64) -> Result<()> {
    let db = Database::open(dir)?;
    let lead = Duration::minutes(lead_minutes);
    let mut notified: HashSet<String> = HashSet::new();
    let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval_secs));

    println!(
        "  Watching {} ({}min lead, every {}s). Ctrl-C to stop.",
        db.events_path().display(),
        lead_minutes,
        interval_secs
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // Re-read a fresh snapshot each tick; the gateway's lock
                // keeps this serialized with any mutating command
                let events = db.load();
                let now = Local::now().naive_local();
                for event in reminders::due_for_notice(&events, &notified, now, lead) {
                    notify(event);
                    notified.insert(event.id.clone());
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!("  Watch stopped.");
                return Ok(());
            }
        }
    }
}

fn notify(event: &EventRecord) {
    let summary = format!("Upcoming event: {}", event.name);
    let body = format!(
        "{} @ {}",
        date_time_label(event.date, event.time),
        event.venue
    );

    // Desktop notification when the environment supports it, terminal
    // line either way
    if Notification::new()
        .summary(&summary)
        .body(&body)
        .show()
        .is_err()
    {
        eprintln!("  {} {body}", summary.yellow());
    } else {
        println!("  {} {}", summary.yellow(), body.dimmed());
    }
}
