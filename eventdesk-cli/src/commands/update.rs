use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::{Confirm, Select};
use eventdesk_core::db::Database;
use eventdesk_core::event::{EventRecord, Organizer, Venue};
use eventdesk_core::store::{EventDraft, EventStore, UpdateOutcome};
use owo_colors::OwoColorize;

use crate::render::date_time_label;

pub struct UpdateArgs {
    pub id: String,
    pub new_id: Option<String>,
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
    pub organizer: Option<String>,
    pub yes: bool,
}

pub fn run(dir: &Path, args: UpdateArgs) -> Result<()> {
    let db = Database::open(dir)?;
    let mut store = EventStore::new(db.load());

    let Some(original) = store.get(&args.id).cloned() else {
        anyhow::bail!("Event not found: {}", args.id);
    };

    // Unspecified fields keep their current values: the update is a full
    // replace of the mutable field set
    let mut draft = EventDraft {
        id: args.new_id.unwrap_or_else(|| original.id.clone()),
        name: match args.name {
            Some(n) => super::add::catalog_entry(&n)?.0,
            None => original.name.clone(),
        },
        date: match args.date {
            Some(d) => super::parse_date(&d)?,
            None => original.date,
        },
        time: match args.time.as_deref() {
            Some("none") => None,
            Some(t) => super::parse_time(t)?,
            None => original.time,
        },
        venue: match args.venue {
            Some(v) => v.parse::<Venue>()?,
            None => original.venue,
        },
        organizer: match args.organizer {
            Some(o) => o.parse::<Organizer>()?,
            None => original.organizer,
        },
        category: original.category,
    };
    // Renaming re-derives the category from the catalog mapping
    if let Some(mapped) = eventdesk_core::event::Category::for_name(&draft.name) {
        draft.category = mapped;
    }

    let changes = field_changes(&original, &draft);
    if changes.is_empty() {
        println!("  No changes to update.");
        return Ok(());
    }

    println!("  You are about to apply the following changes:");
    for (field, old, new) in &changes {
        println!("    {}: {} → {}", field.dimmed(), old.red(), new.green());
    }
    if !args.yes
        && !Confirm::new()
            .with_prompt("  Proceed?")
            .default(true)
            .interact()?
    {
        println!("  Update cancelled.");
        return Ok(());
    }

    loop {
        match store.update(&args.id, draft.clone())? {
            UpdateOutcome::Updated => break,
            UpdateOutcome::DuplicateId { next_free } => {
                if !resolve(
                    args.yes,
                    "Another event already uses this ID.",
                    &format!("Use the next free ID ({next_free})"),
                )? {
                    println!("  Update cancelled.");
                    return Ok(());
                }
                draft.id = next_free;
            }
            UpdateOutcome::DuplicateName { suggestion } => {
                if !resolve(
                    args.yes,
                    "Another event already uses this name.",
                    &format!("Rename to \"{suggestion}\""),
                )? {
                    println!("  Update cancelled.");
                    return Ok(());
                }
                draft.name = suggestion;
            }
        }
    }

    db.save(store.events()).context("Failed to save events")?;
    println!("{}", format!("  Updated: {}", args.id).green());
    Ok(())
}

/// Field-by-field differences between the stored event and the draft.
fn field_changes(
    original: &EventRecord,
    draft: &EventDraft,
) -> Vec<(&'static str, String, String)> {
    let mut changes = Vec::new();

    if original.id != draft.id {
        changes.push(("id", original.id.clone(), draft.id.clone()));
    }
    if original.name != draft.name {
        changes.push(("name", original.name.clone(), draft.name.clone()));
    }
    if original.date != draft.date || original.time != draft.time {
        changes.push((
            "schedule",
            date_time_label(original.date, original.time),
            date_time_label(draft.date, draft.time),
        ));
    }
    if original.venue != draft.venue {
        changes.push(("venue", original.venue.to_string(), draft.venue.to_string()));
    }
    if original.organizer != draft.organizer {
        changes.push((
            "organizer",
            original.organizer.to_string(),
            draft.organizer.to_string(),
        ));
    }
    if original.category != draft.category {
        changes.push((
            "category",
            original.category.to_string(),
            draft.category.to_string(),
        ));
    }

    changes
}

fn resolve(non_interactive: bool, problem: &str, resolution: &str) -> Result<bool> {
    if non_interactive {
        anyhow::bail!("{problem}");
    }
    let choice = Select::new()
        .with_prompt(format!("  {problem}"))
        .items(&[resolution, "Cancel"])
        .default(0)
        .interact()?;
    Ok(choice == 0)
}
