//! Spreadsheet row projection.
//!
//! Flattens a week into one serializable row per assignment for
//! external spreadsheet writers. Empty days produce a single blank
//! placeholder row so every date of the week still appears in the
//! sheet. The file format itself is left to the consumer.

use serde::Serialize;

use crate::models::{Agent, ShiftCatalog, WeekSchedule};

/// One spreadsheet row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportRow {
    /// ISO date.
    pub date: String,
    /// Short weekday name (Mon..Sun).
    pub day: String,
    /// Shift display name (raw shift id if unknown).
    pub shift: String,
    /// Shift kind (call/messaging/comments).
    pub kind: String,
    /// Shift start time (HH:MM).
    pub start: String,
    /// Shift end time (HH:MM).
    pub end: String,
    /// Agent display name (raw agent id if unknown).
    pub agent: String,
}

/// Builds the export rows for a week, in date order.
pub fn week_rows(
    schedule: &WeekSchedule,
    agents: &[Agent],
    catalog: &ShiftCatalog,
) -> Vec<ExportRow> {
    let mut rows = Vec::new();

    for (date, assignments) in schedule.days() {
        if assignments.is_empty() {
            rows.push(ExportRow {
                date: date.to_string(),
                day: date.format("%a").to_string(),
                ..ExportRow::default()
            });
            continue;
        }

        for assignment in assignments {
            let shift = catalog.by_id(&assignment.shift_id);
            let agent = agents.iter().find(|a| a.id == assignment.agent_id);
            rows.push(ExportRow {
                date: date.to_string(),
                day: date.format("%a").to_string(),
                shift: shift
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| assignment.shift_id.clone()),
                kind: shift.map(|s| s.kind.to_string()).unwrap_or_default(),
                start: shift
                    .map(|s| s.start.format("%H:%M").to_string())
                    .unwrap_or_default(),
                end: shift
                    .map(|s| s.end.format("%H:%M").to_string())
                    .unwrap_or_default(),
                agent: agent
                    .map(|a| a.name.clone())
                    .unwrap_or_else(|| assignment.agent_id.clone()),
            });
        }
    }

    rows
}
