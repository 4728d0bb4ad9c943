use std::path::Path;

use anyhow::Result;
use eventdesk_core::db::Database;
use eventdesk_core::report;
use eventdesk_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::{Render, empty_state, totals_line};

pub fn run(dir: &Path) -> Result<()> {
    let db = Database::open(dir)?;
    let store = EventStore::new(db.load());

    if store.is_empty() {
        println!("{}", empty_state("No events scheduled yet."));
        return Ok(());
    }

    println!(
        "  {}",
        format!(
            "{:<8}  {:<16}  {:<34}  {:<28}  {:<7}  {:<14}",
            "ID", "DATE & TIME", "NAME", "VENUE", "ORG", "CATEGORY"
        )
        .dimmed()
    );
    for event in store.events() {
        println!("  {}", event.render());
    }

    println!();
    println!("  {}", totals_line(&report::statistics(store.events())));
    Ok(())
}
