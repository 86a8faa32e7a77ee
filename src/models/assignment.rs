//! Assignment and week schedule models.
//!
//! An assignment binds one agent to one shift on one calendar date. Its
//! id is derived from the (date, agent, shift) triple, so regenerating
//! the same week yields identical ids and the triple naturally
//! deduplicates.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Day-of-week index of a date (0 = Sunday .. 6 = Saturday).
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// The seven consecutive dates of the week starting at `week_start`.
pub fn week_dates(week_start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|offset| week_start + Days::new(offset as u64))
}

/// One agent bound to one shift on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Stable identifier: `"{date}-{agent_id}-{shift_id}"`.
    pub id: String,
    /// Assigned agent id.
    pub agent_id: String,
    /// Assigned shift id.
    pub shift_id: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Day-of-week cache (0 = Sunday .. 6 = Saturday).
    pub day_of_week: u8,
}

impl Assignment {
    /// Creates an assignment, deriving the id and day-of-week from the date.
    pub fn new(date: NaiveDate, agent_id: impl Into<String>, shift_id: impl Into<String>) -> Self {
        let agent_id = agent_id.into();
        let shift_id = shift_id.into();
        Self {
            id: format!("{date}-{agent_id}-{shift_id}"),
            day_of_week: weekday_index(date),
            agent_id,
            shift_id,
            date,
        }
    }
}

/// A generated week: date-ordered map of per-day assignment lists.
///
/// Keys are the seven consecutive dates of the generation week; a date
/// with no available agents maps to an empty list. Within one date's
/// list each agent appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    days: BTreeMap<NaiveDate, Vec<Assignment>>,
}

impl WeekSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or overwrites) a day's assignment list.
    pub fn insert_day(&mut self, date: NaiveDate, assignments: Vec<Assignment>) {
        self.days.insert(date, assignments);
    }

    /// Replaces one day's list wholesale, returning the previous list.
    ///
    /// This is the manual-override hook: the generator has no awareness
    /// of replaced days, and a later full regeneration overwrites them.
    pub fn replace_day(
        &mut self,
        date: NaiveDate,
        assignments: Vec<Assignment>,
    ) -> Option<Vec<Assignment>> {
        self.days.insert(date, assignments)
    }

    /// Assignments for a given date (empty if the date is absent).
    pub fn assignments_on(&self, date: NaiveDate) -> &[Assignment] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All assignments for a given agent, in date order.
    pub fn assignments_for_agent(&self, agent_id: &str) -> Vec<&Assignment> {
        self.days
            .values()
            .flatten()
            .filter(|a| a.agent_id == agent_id)
            .collect()
    }

    /// All assignments for a given shift, in date order.
    pub fn assignments_for_shift(&self, shift_id: &str) -> Vec<&Assignment> {
        self.days
            .values()
            .flatten()
            .filter(|a| a.shift_id == shift_id)
            .collect()
    }

    /// The schedule's dates in ascending order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.keys().copied().collect()
    }

    /// Iterates days in date order.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[Assignment])> + '_ {
        self.days.iter().map(|(d, a)| (*d, a.as_slice()))
    }

    /// Total number of assignments across all days.
    pub fn assignment_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Whether the schedule holds no assignments at all.
    pub fn is_empty(&self) -> bool {
        self.assignment_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_schedule() -> WeekSchedule {
        let mut s = WeekSchedule::new();
        let mon = date(2024, 1, 15);
        let tue = date(2024, 1, 16);
        s.insert_day(
            mon,
            vec![
                Assignment::new(mon, "a1", "call-9-18"),
                Assignment::new(mon, "a2", "messaging-9-18"),
            ],
        );
        s.insert_day(tue, vec![Assignment::new(tue, "a1", "comments-9-18")]);
        s
    }

    #[test]
    fn test_assignment_id_format() {
        let a = Assignment::new(date(2024, 1, 15), "7", "call-9-18");
        assert_eq!(a.id, "2024-01-15-7-call-9-18");
        assert_eq!(a.agent_id, "7");
        assert_eq!(a.shift_id, "call-9-18");
    }

    #[test]
    fn test_day_of_week_cache() {
        // 2024-01-15 is a Monday, 2024-01-21 a Sunday.
        assert_eq!(Assignment::new(date(2024, 1, 15), "a", "s").day_of_week, 1);
        assert_eq!(Assignment::new(date(2024, 1, 21), "a", "s").day_of_week, 0);
    }

    #[test]
    fn test_weekday_index() {
        assert_eq!(weekday_index(date(2024, 1, 14)), 0); // Sunday
        assert_eq!(weekday_index(date(2024, 1, 15)), 1); // Monday
        assert_eq!(weekday_index(date(2024, 1, 20)), 6); // Saturday
    }

    #[test]
    fn test_week_dates() {
        let dates = week_dates(date(2024, 1, 1));
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], date(2024, 1, 1));
        assert_eq!(dates[6], date(2024, 1, 7));
    }

    #[test]
    fn test_week_dates_across_month_boundary() {
        let dates = week_dates(date(2024, 1, 29));
        assert_eq!(dates[6], date(2024, 2, 4));
    }

    #[test]
    fn test_queries() {
        let s = sample_schedule();
        assert_eq!(s.assignment_count(), 3);
        assert_eq!(s.assignments_on(date(2024, 1, 15)).len(), 2);
        assert!(s.assignments_on(date(2024, 1, 17)).is_empty());

        let a1 = s.assignments_for_agent("a1");
        assert_eq!(a1.len(), 2);
        assert_eq!(a1[0].shift_id, "call-9-18");
        assert_eq!(a1[1].shift_id, "comments-9-18");

        assert_eq!(s.assignments_for_shift("messaging-9-18").len(), 1);
    }

    #[test]
    fn test_dates_sorted() {
        let mut s = WeekSchedule::new();
        s.insert_day(date(2024, 1, 16), Vec::new());
        s.insert_day(date(2024, 1, 15), Vec::new());
        assert_eq!(s.dates(), vec![date(2024, 1, 15), date(2024, 1, 16)]);
    }

    #[test]
    fn test_replace_day() {
        let mut s = sample_schedule();
        let mon = date(2024, 1, 15);
        let replacement = vec![Assignment::new(mon, "a3", "call-9-18")];
        let previous = s.replace_day(mon, replacement.clone());

        assert_eq!(previous.map(|p| p.len()), Some(2));
        assert_eq!(s.assignments_on(mon), replacement.as_slice());
    }

    #[test]
    fn test_empty_schedule() {
        let s = WeekSchedule::new();
        assert!(s.is_empty());
        assert_eq!(s.assignment_count(), 0);
        assert!(s.dates().is_empty());
    }

    #[test]
    fn test_serde_iso_date_keys() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"2024-01-15\""));

        let back: WeekSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
