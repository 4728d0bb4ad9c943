use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use eventdesk_core::db::Database;
use eventdesk_core::report;
use owo_colors::OwoColorize;

use crate::render::{Render, date_time_label, empty_state, totals_line};

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportView {
    /// Events sorted by date with their registration counts
    Upcoming,
    /// Every registration across all events
    Roster,
    /// Totals, busiest event, and date/venue conflicts
    Stats,
}

pub fn run(dir: &Path, view: ReportView) -> Result<()> {
    let db = Database::open(dir)?;
    let events = db.load();

    match view {
        ReportView::Upcoming => {
            let rows = report::upcoming_schedule(&events);
            if rows.is_empty() {
                println!("{}", empty_state("No events scheduled yet."));
                return Ok(());
            }
            println!("  {}", "Upcoming Schedule".bold());
            for row in rows {
                println!("  {}", row.render());
            }
        }
        ReportView::Roster => {
            let rows = report::participant_roster(&events);
            if rows.is_empty() {
                println!("{}", empty_state("No participants have registered yet."));
                return Ok(());
            }
            println!("  {}", "Participant Roster".bold());
            for row in rows {
                println!("  {}", row.render());
            }
        }
        ReportView::Stats => {
            let stats = report::statistics(&events);
            println!("  {}", "Statistics".bold());
            println!("  {}", totals_line(&stats));
            match &stats.busiest {
                Some((name, count)) => {
                    println!("  Busiest event: {} ({count} registered)", name.bold());
                }
                None => println!("  Busiest event: N/A"),
            }

            println!();
            println!("  {}", "Date/Venue Conflicts".bold());
            if stats.clashes.is_empty() {
                println!("{}", empty_state("No venue clashes detected."));
            } else {
                for clash in &stats.clashes {
                    println!(
                        "  {} @ {} → {}",
                        date_time_label(clash.date, None),
                        clash.venue,
                        clash.event_names.join(", ").yellow()
                    );
                }
            }
        }
    }

    Ok(())
}
