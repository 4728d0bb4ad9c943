use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use dialoguer::{Confirm, Input, Select};
use eventdesk_core::db::Database;
use eventdesk_core::event::{Category, EVENT_CATALOG, Organizer, Venue};
use eventdesk_core::store::{AddOutcome, EventDraft, EventStore};
use owo_colors::OwoColorize;

use super::register;

pub struct AddArgs {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
    pub organizer: Option<String>,
    pub id: Option<String>,
}

pub fn run(dir: &Path, args: AddArgs) -> Result<()> {
    let db = Database::open(dir)?;
    let mut store = EventStore::new(db.load());

    let interactive = args.name.is_none() || args.date.is_none();

    // --- Name (catalog only; the category is fixed by the mapping) ---
    let (name, category) = match args.name {
        Some(n) => catalog_entry(&n)?,
        None => prompt_name()?,
    };

    // --- Date / time ---
    let date = match args.date {
        Some(d) => super::parse_date(&d)?,
        None => prompt_with_retry("  Date (YYYY-MM-DD)", super::parse_date)?,
    };
    let time = match args.time {
        Some(t) => super::parse_time(&t)?,
        None if interactive => {
            prompt_with_retry("  Time (HH:MM, empty for none)", super::parse_time)?
        }
        None => None,
    };

    // --- Venue / organizer ---
    let venue = match args.venue {
        Some(v) => v.parse::<Venue>()?,
        None => prompt_choice("  Venue", &Venue::ALL)?,
    };
    let organizer = match args.organizer {
        Some(o) => o.parse::<Organizer>()?,
        None => prompt_choice("  Organizer", &Organizer::ALL)?,
    };

    let mut draft = EventDraft {
        id: args.id.unwrap_or_else(|| store.next_event_id()),
        name,
        date,
        time,
        venue,
        organizer,
        category,
    };

    // Collision outcomes loop back with the offered resolution until the
    // draft lands or the user cancels.
    let added_id = loop {
        match store.add(draft.clone(), Local::now().naive_local())? {
            AddOutcome::Added => break draft.id,
            AddOutcome::DuplicateId { next_free } => {
                if !resolve_conflict(
                    interactive,
                    "An event with this ID already exists.",
                    &format!("Use the next free ID ({next_free})"),
                )? {
                    println!("  Add cancelled.");
                    return Ok(());
                }
                draft.id = next_free;
            }
            AddOutcome::DuplicateName { suggestion } => {
                if !resolve_conflict(
                    interactive,
                    "An event with this name already exists.",
                    &format!("Rename to \"{suggestion}\""),
                )? {
                    println!("  Add cancelled.");
                    return Ok(());
                }
                draft.name = suggestion;
            }
        }
    };

    db.save(store.events()).context("Failed to save events")?;
    println!("{}", format!("  Created: {added_id}").green());

    // Scheduling usually continues straight into registration
    if interactive
        && Confirm::new()
            .with_prompt("  Register participants now?")
            .default(true)
            .interact()?
    {
        register::session(&db, &mut store, &added_id)?;
    }

    Ok(())
}

/// Look up a catalog name (case-insensitive) and its fixed category.
pub(crate) fn catalog_entry(input: &str) -> Result<(String, Category)> {
    EVENT_CATALOG
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(input.trim()))
        .map(|(n, c)| (n.to_string(), *c))
        .ok_or_else(|| {
            let known: Vec<_> = EVENT_CATALOG.iter().map(|(n, _)| *n).collect();
            anyhow::anyhow!(
                "Unknown event name: \"{}\". Known names: {}",
                input,
                known.join(", ")
            )
        })
}

fn prompt_name() -> Result<(String, Category)> {
    let items: Vec<&str> = EVENT_CATALOG.iter().map(|(n, _)| *n).collect();
    let selection = Select::new()
        .with_prompt("  Event name")
        .items(&items)
        .default(0)
        .interact()?;
    let (name, category) = EVENT_CATALOG[selection];
    Ok((name.to_string(), category))
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T>(prompt: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

fn prompt_choice<T: Copy + ToString>(prompt: &str, choices: &[T]) -> Result<T> {
    let items: Vec<String> = choices.iter().map(T::to_string).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(choices[selection])
}

/// Offer the two-option resolution for a collision: take the suggestion or
/// cancel. Non-interactive invocations refuse instead of guessing.
fn resolve_conflict(interactive: bool, problem: &str, resolution: &str) -> Result<bool> {
    if !interactive {
        anyhow::bail!("{problem} Re-run without flags to resolve interactively.");
    }
    let choice = Select::new()
        .with_prompt(format!("  {problem}"))
        .items(&[resolution, "Cancel"])
        .default(0)
        .interact()?;
    Ok(choice == 0)
}
