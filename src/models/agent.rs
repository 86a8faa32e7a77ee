//! Agent model.
//!
//! Agents are the schedulable workers of the roster. Each agent has a
//! fixed set of weekly days off and a disabled flag; disabled agents are
//! excluded from generation entirely.

use serde::{Deserialize, Serialize};

/// A schedulable contact-center agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique agent identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Weekly days off as day-of-week indices (0 = Sunday .. 6 = Saturday).
    pub days_off: Vec<u8>,
    /// When true, the agent is excluded from all generation.
    #[serde(default)]
    pub disabled: bool,
}

impl Agent {
    /// Creates a new agent with no days off.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            days_off: Vec::new(),
            disabled: false,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a weekly day off (0 = Sunday .. 6 = Saturday).
    pub fn with_day_off(mut self, day: u8) -> Self {
        self.days_off.push(day);
        self
    }

    /// Sets the full days-off set.
    pub fn with_days_off(mut self, days: impl IntoIterator<Item = u8>) -> Self {
        self.days_off = days.into_iter().collect();
        self
    }

    /// Marks the agent as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Whether the given day of week is one of this agent's days off.
    pub fn is_off(&self, day_of_week: u8) -> bool {
        self.days_off.contains(&day_of_week)
    }

    /// Whether the agent can be scheduled on the given day of week.
    ///
    /// Disabled agents are never available.
    pub fn is_available_on(&self, day_of_week: u8) -> bool {
        !self.disabled && !self.is_off(day_of_week)
    }
}
