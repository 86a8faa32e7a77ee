//! Roster and schedule validation.
//!
//! `validate_roster` checks input integrity before generation;
//! `audit_schedule` checks a produced (or hand-edited) week against the
//! rostering invariants. The generation core itself never errors on
//! degenerate input, so both checks are optional guard rails for the
//! surrounding system.

use std::collections::{HashMap, HashSet};

use crate::models::{weekday_index, Agent, ShiftCatalog, ShiftKind, WeekSchedule};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A roster validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of roster validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two agents share the same ID.
    DuplicateId,
    /// An agent has an empty ID.
    EmptyId,
    /// A days-off entry is outside 0..=6.
    InvalidDayOff,
    /// The same day appears twice in an agent's days off.
    DuplicateDayOff,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster before generation.
///
/// Checks:
/// 1. No empty agent IDs
/// 2. No duplicate agent IDs
/// 3. Days-off indices within 0..=6
/// 4. No repeated days-off entries per agent
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(agents: &[Agent]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for agent in agents {
        if agent.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Agent '{}' has an empty id", agent.name),
            ));
        }

        if !seen.insert(agent.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate agent ID: {}", agent.id),
            ));
        }

        let mut days = HashSet::new();
        for &day in &agent.days_off {
            if day > 6 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDayOff,
                    format!("Agent '{}' has day off {day} outside 0..=6", agent.id),
                ));
            }
            if !days.insert(day) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateDayOff,
                    format!("Agent '{}' repeats day off {day}", agent.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// An invariant breach found in a week schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity id (agent or assignment).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    /// Agent holds more than one shift on the same date.
    DoubleBooked,
    /// Assignment falls on the agent's day off.
    DayOffConflict,
    /// A disabled agent appears in the schedule.
    DisabledAgent,
    /// Assignment references an agent not in the roster.
    UnknownAgent,
    /// More than one comments day in the week for one agent.
    CommentsRepeat,
    /// A second late day not explained by the Sunday 12-21 relaxation.
    LateRepeat,
    /// Cached day-of-week does not match the assignment date.
    DayOfWeekMismatch,
}

impl Violation {
    fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

/// Audits a week schedule against the rostering invariants.
///
/// Intended for schedules that may have been hand-edited after
/// generation; a freshly generated week always audits clean. Returns
/// every violation found (empty = clean).
pub fn audit_schedule(
    schedule: &WeekSchedule,
    agents: &[Agent],
    catalog: &ShiftCatalog,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let by_id: HashMap<&str, &Agent> = agents.iter().map(|a| (a.id.as_str(), a)).collect();

    // Per-day checks.
    for (date, assignments) in schedule.days() {
        let mut seen_today = HashSet::new();
        for assignment in assignments {
            if !seen_today.insert(assignment.agent_id.as_str()) {
                violations.push(Violation::new(
                    ViolationType::DoubleBooked,
                    &assignment.agent_id,
                    format!("Agent '{}' booked twice on {date}", assignment.agent_id),
                ));
            }

            if assignment.day_of_week != weekday_index(assignment.date) {
                violations.push(Violation::new(
                    ViolationType::DayOfWeekMismatch,
                    &assignment.id,
                    format!(
                        "Assignment '{}' caches day {} for date {}",
                        assignment.id, assignment.day_of_week, assignment.date
                    ),
                ));
            }

            match by_id.get(assignment.agent_id.as_str()) {
                None => violations.push(Violation::new(
                    ViolationType::UnknownAgent,
                    &assignment.agent_id,
                    format!("Assignment '{}' references unknown agent", assignment.id),
                )),
                Some(agent) => {
                    if agent.disabled {
                        violations.push(Violation::new(
                            ViolationType::DisabledAgent,
                            &agent.id,
                            format!("Disabled agent '{}' scheduled on {date}", agent.id),
                        ));
                    }
                    if agent.is_off(weekday_index(date)) {
                        violations.push(Violation::new(
                            ViolationType::DayOffConflict,
                            &agent.id,
                            format!("Agent '{}' scheduled on a day off ({date})", agent.id),
                        ));
                    }
                }
            }
        }
    }

    // Per-week checks: comments once, late once outside the Sunday
    // 12-21 relaxation.
    let mut comments: HashMap<&str, u32> = HashMap::new();
    let mut late: HashMap<&str, Vec<(u8, &str)>> = HashMap::new();
    for (_, assignments) in schedule.days() {
        for assignment in assignments {
            let Some(shift) = catalog.by_id(&assignment.shift_id) else {
                continue;
            };
            if shift.kind == ShiftKind::Comments {
                *comments.entry(assignment.agent_id.as_str()).or_default() += 1;
            }
            if shift.kind == ShiftKind::Call && shift.is_late() {
                late.entry(assignment.agent_id.as_str())
                    .or_default()
                    .push((assignment.day_of_week, assignment.shift_id.as_str()));
            }
        }
    }

    for (agent_id, count) in comments {
        if count > 1 {
            violations.push(Violation::new(
                ViolationType::CommentsRepeat,
                agent_id,
                format!("Agent '{agent_id}' has {count} comments days this week"),
            ));
        }
    }

    for (agent_id, days) in late {
        let allowed = if days.len() == 2 {
            days.iter()
                .any(|&(dow, shift_id)| dow == 0 && shift_id == catalog.call_noon.id)
        } else {
            days.len() <= 1
        };
        if !allowed {
            violations.push(Violation::new(
                ViolationType::LateRepeat,
                agent_id,
                format!("Agent '{agent_id}' has {} late days this week", days.len()),
            ));
        }
    }

    violations
}
