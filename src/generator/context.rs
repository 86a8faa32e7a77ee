//! Weekly fairness context.
//!
//! Mutable per-agent duty counters accumulated across the seven days of
//! one generation run. The context is built once from the roster at the
//! start of generation and dropped when it returns; agents added to the
//! roster mid-run are not retroactively tracked, and nothing persists
//! between runs — fairness resets every week.

use std::collections::HashMap;

use super::rank;
use crate::models::Agent;

/// Weekly call-day target per agent.
pub(crate) const CALL_TARGET: u32 = 3;
/// Weekly written-communication-day target per agent.
pub(crate) const WRITTEN_TARGET: u32 = 2;

/// Per-agent duty counters for one week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentWeekStats {
    /// Days on any call shift.
    pub call_days: u32,
    /// Days on messaging or comments.
    pub written_days: u32,
    /// Days on a late call shift.
    pub late_days: u32,
    /// Days on messaging.
    pub messaging_days: u32,
    /// Days on comments.
    pub comments_days: u32,
    /// Whether the agent has already taken a comments day this week.
    pub has_comments: bool,
}

/// Fairness state for one generation run.
///
/// Owns the week key used for rank scores and the per-agent counters.
/// Counter accessors return zeroed stats for ids the context has never
/// seen, so selection rules never fail on an unknown agent.
#[derive(Debug, Clone)]
pub struct WeekContext {
    week_key: String,
    stats: HashMap<String, AgentWeekStats>,
}

impl WeekContext {
    /// Builds a context with zeroed counters for the given roster.
    pub fn new(week_key: impl Into<String>, agents: &[Agent]) -> Self {
        Self {
            week_key: week_key.into(),
            stats: agents
                .iter()
                .map(|a| (a.id.clone(), AgentWeekStats::default()))
                .collect(),
        }
    }

    /// The ISO week-start key used for rank scores.
    pub fn week_key(&self) -> &str {
        &self.week_key
    }

    /// Current stats for an agent.
    pub fn stats(&self, agent_id: &str) -> AgentWeekStats {
        self.stats.get(agent_id).copied().unwrap_or_default()
    }

    /// Call days worked so far this week.
    pub fn call_days(&self, agent_id: &str) -> u32 {
        self.stats(agent_id).call_days
    }

    /// Written-communication days worked so far this week.
    pub fn written_days(&self, agent_id: &str) -> u32 {
        self.stats(agent_id).written_days
    }

    /// Late days worked so far this week.
    pub fn late_days(&self, agent_id: &str) -> u32 {
        self.stats(agent_id).late_days
    }

    /// Whether the agent has already taken a comments day this week.
    pub fn has_comments(&self, agent_id: &str) -> bool {
        self.stats(agent_id).has_comments
    }

    /// Remaining call days to the weekly target.
    pub fn call_need(&self, agent_id: &str) -> u32 {
        CALL_TARGET.saturating_sub(self.call_days(agent_id))
    }

    /// Remaining written days to the weekly target.
    pub fn written_need(&self, agent_id: &str) -> u32 {
        WRITTEN_TARGET.saturating_sub(self.written_days(agent_id))
    }

    /// Tie-break score for an agent in the given slot context.
    pub fn rank(&self, agent_id: &str, context: &str) -> u32 {
        rank::rank(agent_id, &self.week_key, context)
    }

    /// Records a day-call assignment.
    pub fn record_call(&mut self, agent_id: &str) {
        self.entry(agent_id).call_days += 1;
    }

    /// Records a late-call assignment (counts as both call and late).
    pub fn record_late_call(&mut self, agent_id: &str) {
        let stats = self.entry(agent_id);
        stats.call_days += 1;
        stats.late_days += 1;
    }

    /// Records a comments assignment.
    pub fn record_comments(&mut self, agent_id: &str) {
        let stats = self.entry(agent_id);
        stats.written_days += 1;
        stats.comments_days += 1;
        stats.has_comments = true;
    }

    /// Records a messaging assignment.
    pub fn record_messaging(&mut self, agent_id: &str) {
        let stats = self.entry(agent_id);
        stats.written_days += 1;
        stats.messaging_days += 1;
    }

    fn entry(&mut self, agent_id: &str) -> &mut AgentWeekStats {
        self.stats.entry(agent_id.to_string()).or_default()
    }
}
