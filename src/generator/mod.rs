//! Weekly schedule generation.
//!
//! # Algorithm
//!
//! For each of the seven dates starting at the given week start:
//!
//! 1. Filter the roster to agents available that day — not disabled and
//!    the day not in their days-off set. An empty pool yields an empty
//!    day.
//! 2. Fill the day's slots in fixed priority order: day call (3),
//!    comments (1, once per agent per week), the two late calls (1 each,
//!    once per agent per week, with a Sunday-only relaxation for the
//!    12-21 slot), then messaging absorbing the remainder.
//!
//! Duty counters accumulate in a [`WeekContext`] owned by the call, so
//! fairness resets every week and nothing outlives the invocation. Every
//! ordering decision is a stable sort over integer counters with a pure
//! hash tie-break, making generation a deterministic function of
//! (roster, week start): regenerating an unchanged week reproduces the
//! same assignments, ids and order included.
//!
//! # Complexity
//! O(agents × 7) with small constant-size sorts per slot.

mod context;
mod day;
mod rank;
mod rules;

pub use context::{AgentWeekStats, WeekContext};
pub use rank::{djb2, rank};
pub use rules::{
    FewestCallDays, FewestWrittenDays, MostCallNeed, MostWrittenNeed, RankOrder, RulePipeline,
    RuleScore, SelectionRule,
};

use chrono::NaiveDate;

use crate::models::{week_dates, weekday_index, Agent, ShiftCatalog, WeekSchedule};

/// Weekly roster generator.
///
/// Holds the shift catalog the slot-filling steps are wired to.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_roster::generator::WeekScheduler;
/// use u_roster::models::Agent;
///
/// let roster = vec![
///     Agent::new("a1").with_name("Ana"),
///     Agent::new("a2").with_name("Ben").with_day_off(2),
/// ];
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let schedule = WeekScheduler::new().generate(&roster, monday);
/// assert_eq!(schedule.dates().len(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct WeekScheduler {
    catalog: ShiftCatalog,
}

impl WeekScheduler {
    /// Creates a scheduler over the standard catalog.
    pub fn new() -> Self {
        Self {
            catalog: ShiftCatalog::standard(),
        }
    }

    /// The catalog this scheduler assigns from.
    pub fn catalog(&self) -> &ShiftCatalog {
        &self.catalog
    }

    /// Generates the week starting at `week_start`.
    ///
    /// Pure with respect to its inputs: the same roster and start date
    /// always produce the same schedule. The roster may be empty, in
    /// which case every day maps to an empty list. Week alignment is not
    /// enforced; any start date yields that date plus the next six.
    pub fn generate(&self, agents: &[Agent], week_start: NaiveDate) -> WeekSchedule {
        let week_key = week_start.to_string();
        let mut ctx = WeekContext::new(&week_key, agents);
        let mut schedule = WeekSchedule::new();

        for date in week_dates(week_start) {
            let day_of_week = weekday_index(date);
            let mut pool: Vec<Agent> = agents
                .iter()
                .filter(|a| a.is_available_on(day_of_week))
                .cloned()
                .collect();

            if pool.is_empty() {
                schedule.insert_day(date, Vec::new());
                continue;
            }

            let assignments = day::fill_day(&self.catalog, &mut pool, &mut ctx, date, day_of_week);
            schedule.insert_day(date, assignments);
        }

        tracing::debug!(
            "generated week {week_key}: {} assignments",
            schedule.assignment_count()
        );
        schedule
    }
}

impl Default for WeekScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates the week starting at `week_start` from the standard catalog.
///
/// Equivalent to `WeekScheduler::new().generate(agents, week_start)`.
pub fn generate_weekly_schedule(agents: &[Agent], week_start: NaiveDate) -> WeekSchedule {
    WeekScheduler::new().generate(agents, week_start)
}
