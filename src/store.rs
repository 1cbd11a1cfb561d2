use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{GatherError, Result};
use crate::models::{Event, Ticket};

/// Flat JSON document holding the local copy of events and tickets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

pub fn store_path(data_dir: &Path) -> PathBuf {
    data_dir.join("gather.json")
}

/// Missing file means an empty store, not an error.
pub fn load_store(path: &Path) -> Result<Store> {
    if !path.exists() {
        return Ok(Store::default());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_store(path: &Path, store: &Store) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(store)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

impl Store {
    pub fn event(&self, id: &str) -> Result<&Event> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| GatherError::UnknownEvent(id.to_string()))
    }

    /// Confirmation codes are matched case-insensitively; people read them
    /// off a phone screen.
    pub fn ticket_by_code(&self, code: &str) -> Result<&Ticket> {
        self.tickets
            .iter()
            .find(|t| t.confirmation_code.eq_ignore_ascii_case(code))
            .ok_or_else(|| GatherError::UnknownTicket(code.to_string()))
    }

    /// Events starting at or after `now`, soonest first.
    pub fn upcoming(&self, now: NaiveDateTime) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.starts_at >= now)
            .collect();
        events.sort_by_key(|e| e.starts_at);
        events
    }

    /// Every event, soonest first.
    pub fn all_events(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().collect();
        events.sort_by_key(|e| e.starts_at);
        events
    }
}
