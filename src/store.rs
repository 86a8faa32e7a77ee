//! Persistence boundary for rosters and week assignments.
//!
//! Storage is keyed by an opaque user identity so several rosters can
//! share one backend. Week persistence is replace-all: the week's date
//! range is cleared and reinserted as one step, kept separate from the
//! pure generation core. Days with no stored assignments are absent
//! from fetch results.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{week_dates, Agent, Assignment, WeekSchedule};

/// Error type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Storage abstraction for rosters and weekly assignments.
pub trait RosterStore {
    /// Lists the user's agents in insertion order.
    fn agents(&self, user_id: &str) -> Result<Vec<Agent>>;

    /// Creates or updates an agent.
    fn upsert_agent(&mut self, user_id: &str, agent: &Agent) -> Result<()>;

    /// Deletes an agent by id.
    fn delete_agent(&mut self, user_id: &str, agent_id: &str) -> Result<()>;

    /// Loads the stored assignments for the week starting at `week_start`.
    fn week(&self, user_id: &str, week_start: NaiveDate) -> Result<WeekSchedule>;

    /// Replaces the week's assignments wholesale.
    ///
    /// Every stored assignment dated within the week is deleted, then
    /// the given schedule's assignments are inserted in date order.
    fn replace_week(
        &mut self,
        user_id: &str,
        week_start: NaiveDate,
        schedule: &WeekSchedule,
    ) -> Result<()>;
}

/// Per-user stored state, shared by both backends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UserData {
    agents: Vec<Agent>,
    assignments: Vec<Assignment>,
}

impl UserData {
    fn upsert(&mut self, agent: &Agent) {
        match self.agents.iter_mut().find(|a| a.id == agent.id) {
            Some(existing) => *existing = agent.clone(),
            None => self.agents.push(agent.clone()),
        }
    }

    fn delete(&mut self, agent_id: &str) -> bool {
        let before = self.agents.len();
        self.agents.retain(|a| a.id != agent_id);
        self.agents.len() != before
    }

    fn week(&self, week_start: NaiveDate) -> WeekSchedule {
        let dates = week_dates(week_start);
        let mut schedule = WeekSchedule::new();
        for assignment in &self.assignments {
            if dates.contains(&assignment.date) {
                let mut day = schedule.assignments_on(assignment.date).to_vec();
                day.push(assignment.clone());
                schedule.insert_day(assignment.date, day);
            }
        }
        schedule
    }

    fn replace_week(&mut self, week_start: NaiveDate, schedule: &WeekSchedule) {
        let dates = week_dates(week_start);
        self.assignments.retain(|a| !dates.contains(&a.date));
        for date in dates {
            self.assignments
                .extend(schedule.assignments_on(date).iter().cloned());
        }
    }
}

/// In-memory store backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: HashMap<String, UserData>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RosterStore for MemoryStore {
    fn agents(&self, user_id: &str) -> Result<Vec<Agent>> {
        Ok(self
            .users
            .get(user_id)
            .map(|u| u.agents.clone())
            .unwrap_or_default())
    }

    fn upsert_agent(&mut self, user_id: &str, agent: &Agent) -> Result<()> {
        self.users.entry(user_id.to_string()).or_default().upsert(agent);
        Ok(())
    }

    fn delete_agent(&mut self, user_id: &str, agent_id: &str) -> Result<()> {
        let deleted = self
            .users
            .get_mut(user_id)
            .is_some_and(|u| u.delete(agent_id));
        if deleted {
            Ok(())
        } else {
            Err(StoreError::NotFound(format!("agent '{agent_id}'")))
        }
    }

    fn week(&self, user_id: &str, week_start: NaiveDate) -> Result<WeekSchedule> {
        Ok(self
            .users
            .get(user_id)
            .map(|u| u.week(week_start))
            .unwrap_or_default())
    }

    fn replace_week(
        &mut self,
        user_id: &str,
        week_start: NaiveDate,
        schedule: &WeekSchedule,
    ) -> Result<()> {
        self.users
            .entry(user_id.to_string())
            .or_default()
            .replace_week(week_start, schedule);
        tracing::debug!(
            "replaced week {week_start} for '{user_id}': {} assignments",
            schedule.assignment_count()
        );
        Ok(())
    }
}

/// JSON-file store backend.
///
/// Keeps one JSON document per user under the root directory
/// (`<root>/<user_id>.json`), written whole on every mutation.
#[derive(Debug)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Creates the store, creating the root directory if needed.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        fs::create_dir_all(root.as_ref())?;
        Ok(Self {
            root: root.as_ref().to_path_buf(),
        })
    }

    fn user_path(&self, user_id: &str) -> PathBuf {
        self.root.join(format!("{user_id}.json"))
    }

    fn load(&self, user_id: &str) -> Result<UserData> {
        let path = self.user_path(user_id);
        if !path.exists() {
            return Ok(UserData::default());
        }
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn save(&self, user_id: &str, data: &UserData) -> Result<()> {
        fs::write(
            self.user_path(user_id),
            serde_json::to_string_pretty(data)?,
        )?;
        Ok(())
    }
}

impl RosterStore for JsonFileStore {
    fn agents(&self, user_id: &str) -> Result<Vec<Agent>> {
        Ok(self.load(user_id)?.agents)
    }

    fn upsert_agent(&mut self, user_id: &str, agent: &Agent) -> Result<()> {
        let mut data = self.load(user_id)?;
        data.upsert(agent);
        self.save(user_id, &data)
    }

    fn delete_agent(&mut self, user_id: &str, agent_id: &str) -> Result<()> {
        let mut data = self.load(user_id)?;
        if !data.delete(agent_id) {
            return Err(StoreError::NotFound(format!("agent '{agent_id}'")));
        }
        self.save(user_id, &data)
    }

    fn week(&self, user_id: &str, week_start: NaiveDate) -> Result<WeekSchedule> {
        Ok(self.load(user_id)?.week(week_start))
    }

    fn replace_week(
        &mut self,
        user_id: &str,
        week_start: NaiveDate,
        schedule: &WeekSchedule,
    ) -> Result<()> {
        let mut data = self.load(user_id)?;
        data.replace_week(week_start, schedule);
        self.save(user_id, &data)?;
        tracing::debug!(
            "replaced week {week_start} for '{user_id}': {} assignments",
            schedule.assignment_count()
        );
        Ok(())
    }
}
