use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::{Input, Select};
use eventdesk_core::EventDeskError;
use eventdesk_core::db::Database;
use eventdesk_core::event::ParticipantType;
use eventdesk_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(dir: &Path, event_id: &str, name: Option<String>, kind: Option<String>) -> Result<()> {
    let db = Database::open(dir)?;
    let mut store = EventStore::new(db.load());

    if store.get(event_id).is_none() {
        anyhow::bail!("Event not found: {event_id}");
    }

    match name {
        // One-shot registration from flags
        Some(full_name) => {
            let kind = match kind {
                Some(k) => k.parse::<ParticipantType>()?,
                None => ParticipantType::Student,
            };
            let participant = store.register(event_id, &full_name, kind)?;
            db.save(store.events()).context("Failed to save events")?;
            println!(
                "{}",
                format!("  Registered: {} — {}", participant.id, participant.full_name).green()
            );
            Ok(())
        }
        None => session(&db, &mut store, event_id),
    }
}

/// Interactive loop registering participants one after another. An empty
/// name ends the session.
pub fn session(db: &Database, store: &mut EventStore, event_id: &str) -> Result<()> {
    loop {
        let preview = store.next_participant_id(event_id)?;
        println!("  Next ID: {}", preview.cyan());

        let full_name: String = Input::new()
            .with_prompt("  Full name (empty to finish)")
            .allow_empty(true)
            .interact_text()?;
        if full_name.trim().is_empty() {
            return Ok(());
        }

        let kind = prompt_kind()?;

        match store.register(event_id, &full_name, kind) {
            Ok(participant) => {
                // Persist after every registration so nothing is lost if
                // the session is cut short
                db.save(store.events()).context("Failed to save events")?;
                println!(
                    "  {} {} — {} ({})",
                    "Registered:".green(),
                    participant.id,
                    participant.full_name,
                    participant.kind.render(),
                );
            }
            Err(e @ EventDeskError::DuplicateParticipant(_)) => {
                eprintln!("  {}", e.to_string().red());
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn prompt_kind() -> Result<ParticipantType> {
    let items: Vec<&str> = ParticipantType::ALL.iter().map(|k| k.as_str()).collect();
    let selection = Select::new()
        .with_prompt("  Type")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(ParticipantType::ALL[selection])
}
