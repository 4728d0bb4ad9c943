use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::Confirm;
use eventdesk_core::db::Database;
use eventdesk_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run(dir: &Path, id: &str, yes: bool) -> Result<()> {
    let db = Database::open(dir)?;
    let mut store = EventStore::new(db.load());

    let Some(event) = store.get(id) else {
        anyhow::bail!("Event not found: {id}");
    };

    let prompt = match event.participant_count() {
        0 => format!("  Delete event \"{}\"?", event.name),
        n => format!(
            "  Delete event \"{}\" and its {} registration(s)?",
            event.name, n
        ),
    };
    if !yes && !Confirm::new().with_prompt(prompt).default(false).interact()? {
        println!("  Delete cancelled.");
        return Ok(());
    }

    let removed = store.delete(id)?;
    db.save(store.events()).context("Failed to save events")?;
    println!("{}", format!("  Deleted: {} — {}", removed.id, removed.name).red());
    Ok(())
}
