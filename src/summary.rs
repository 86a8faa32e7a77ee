//! Weekly workload report.
//!
//! Aggregates a produced week into per-shift and per-agent counts for
//! the summary surface: how the week's assignments distribute across
//! shifts, how many days each agent works, and each agent's mix of call,
//! written, and late duty.

use std::collections::HashMap;

use crate::models::{Agent, ShiftCatalog, ShiftKind, WeekSchedule};

/// Per-agent duty mix for one week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentLoad {
    /// Days on any call shift.
    pub call: u32,
    /// Days on messaging or comments.
    pub written: u32,
    /// Days on a late call shift.
    pub late: u32,
}

/// Aggregated week metrics.
#[derive(Debug, Clone, Default)]
pub struct WeekSummary {
    /// Total assignments across the week.
    pub total_assignments: usize,
    /// Assignment count per shift name.
    pub shift_distribution: HashMap<String, usize>,
    /// Worked days per agent name.
    pub agent_workload: HashMap<String, usize>,
    /// Call/written/late mix per agent name.
    pub agent_load: HashMap<String, AgentLoad>,
}

impl WeekSummary {
    /// Aggregates a week schedule.
    ///
    /// Assignments referencing a shift or agent unknown to the catalog
    /// or roster (possible after manual edits) are counted under their
    /// raw ids; unknown shifts contribute to no duty-mix counters.
    pub fn calculate(schedule: &WeekSchedule, agents: &[Agent], catalog: &ShiftCatalog) -> Self {
        let mut summary = Self::default();

        for (_, assignments) in schedule.days() {
            for assignment in assignments {
                summary.total_assignments += 1;

                let shift = catalog.by_id(&assignment.shift_id);
                let shift_name = shift
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| assignment.shift_id.clone());
                *summary.shift_distribution.entry(shift_name).or_default() += 1;

                let agent_name = agents
                    .iter()
                    .find(|a| a.id == assignment.agent_id)
                    .map(|a| a.name.clone())
                    .unwrap_or_else(|| assignment.agent_id.clone());
                *summary
                    .agent_workload
                    .entry(agent_name.clone())
                    .or_default() += 1;

                if let Some(shift) = shift {
                    let load = summary.agent_load.entry(agent_name).or_default();
                    match shift.kind {
                        ShiftKind::Call => {
                            load.call += 1;
                            if shift.is_late() {
                                load.late += 1;
                            }
                        }
                        ShiftKind::Messaging | ShiftKind::Comments => load.written += 1,
                    }
                }
            }
        }

        summary
    }

    /// Number of agents with at least one assignment.
    pub fn active_agents(&self) -> usize {
        self.agent_workload.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn sample() -> (WeekSchedule, Vec<Agent>, ShiftCatalog) {
        let agents = vec![
            Agent::new("a1").with_name("Ana"),
            Agent::new("a2").with_name("Ben"),
        ];
        let mut schedule = WeekSchedule::new();
        schedule.insert_day(
            date(15),
            vec![
                Assignment::new(date(15), "a1", "call-9-18"),
                Assignment::new(date(15), "a2", "messaging-9-18"),
            ],
        );
        schedule.insert_day(
            date(16),
            vec![
                Assignment::new(date(16), "a1", "call-12-21"),
                Assignment::new(date(16), "a2", "comments-9-18"),
            ],
        );
        (schedule, agents, ShiftCatalog::standard())
    }

    #[test]
    fn test_totals_and_distribution() {
        let (schedule, agents, catalog) = sample();
        let summary = WeekSummary::calculate(&schedule, &agents, &catalog);

        assert_eq!(summary.total_assignments, 4);
        assert_eq!(summary.shift_distribution["Call 9:00-18:00"], 1);
        assert_eq!(summary.shift_distribution["Call 12:00-21:00"], 1);
        assert_eq!(summary.shift_distribution["Messaging 9:00-18:00"], 1);
        assert_eq!(summary.shift_distribution["Comments 9:00-18:00"], 1);
    }

    #[test]
    fn test_agent_workload_and_load() {
        let (schedule, agents, catalog) = sample();
        let summary = WeekSummary::calculate(&schedule, &agents, &catalog);

        assert_eq!(summary.agent_workload["Ana"], 2);
        assert_eq!(summary.agent_workload["Ben"], 2);

        let ana = summary.agent_load["Ana"];
        assert_eq!(ana, AgentLoad { call: 2, written: 0, late: 1 });

        let ben = summary.agent_load["Ben"];
        assert_eq!(ben, AgentLoad { call: 0, written: 2, late: 0 });
    }

    #[test]
    fn test_active_agents() {
        let (schedule, agents, catalog) = sample();
        let summary = WeekSummary::calculate(&schedule, &agents, &catalog);
        assert_eq!(summary.active_agents(), 2);
    }

    #[test]
    fn test_unknown_references_counted_by_raw_id() {
        let (mut schedule, agents, catalog) = sample();
        schedule.insert_day(
            date(17),
            vec![Assignment::new(date(17), "ghost", "night-0-8")],
        );

        let summary = WeekSummary::calculate(&schedule, &agents, &catalog);
        assert_eq!(summary.total_assignments, 5);
        assert_eq!(summary.shift_distribution["night-0-8"], 1);
        assert_eq!(summary.agent_workload["ghost"], 1);
        // Unknown shift contributes no duty mix.
        assert!(!summary.agent_load.contains_key("ghost"));
    }

    #[test]
    fn test_empty_schedule() {
        let summary =
            WeekSummary::calculate(&WeekSchedule::new(), &[], &ShiftCatalog::standard());
        assert_eq!(summary.total_assignments, 0);
        assert_eq!(summary.active_agents(), 0);
        assert!(summary.shift_distribution.is_empty());
    }
}
