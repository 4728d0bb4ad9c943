//! Flat-file persistence for the event collection.
//!
//! The whole collection is serialized to one JSON file and rewritten after
//! every mutation; there is no incremental or append persistence. A coarse
//! lock serializes file access so a concurrent reader (the watch loop) and
//! a mutating command never interleave a load with a half-finished save.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{EventDeskError, EventDeskResult};
use crate::event::EventRecord;

pub const DEFAULT_DATA_DIR: &str = "data";
const EVENTS_FILE: &str = "events.json";

pub struct Database {
    dir: PathBuf,
    file_lock: Mutex<()>,
}

impl Database {
    /// Open the database, bootstrapping the data directory and an empty
    /// events file when absent so `load` never needs first-run handling.
    ///
    /// A directory that cannot be created is fatal: no later operation
    /// could succeed.
    pub fn open(dir: impl Into<PathBuf>) -> EventDeskResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            EventDeskError::Bootstrap(format!("Could not create {}: {e}", dir.display()))
        })?;

        let db = Database {
            dir,
            file_lock: Mutex::new(()),
        };
        if !db.events_path().exists() {
            db.save(&[])?;
        }
        Ok(db)
    }

    pub fn events_path(&self) -> PathBuf {
        self.dir.join(EVENTS_FILE)
    }

    pub fn data_dir(&self) -> &Path {
        &self.dir
    }

    /// Load the full event collection.
    ///
    /// Never fails outward: a missing file and unreadable or corrupt
    /// contents all degrade to an empty collection, so the application
    /// proceeds with a blank slate instead of refusing to start. That
    /// trades data-loss visibility for availability.
    pub fn load(&self) -> Vec<EventRecord> {
        let _guard = self.file_lock.lock();

        let Ok(content) = std::fs::read_to_string(self.events_path()) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Serialize `events` and overwrite the backing file in one operation.
    ///
    /// Writes to a temp file and renames over the target so a failed write
    /// never leaves a truncated collection behind. Failures propagate: the
    /// triggering user action must surface them, since the in-memory and
    /// on-disk states would otherwise diverge silently.
    pub fn save(&self, events: &[EventRecord]) -> EventDeskResult<()> {
        let _guard = self.file_lock.lock();

        let content = serde_json::to_string_pretty(events)
            .map_err(|e| EventDeskError::Serialization(e.to_string()))?;

        let path = self.events_path();
        let temp = path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}
