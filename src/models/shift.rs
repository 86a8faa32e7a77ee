//! Shift catalog model.
//!
//! The five daily shifts are fixed configuration, not generated data.
//! The generation pipeline is hard-wired to this exact catalog shape, so
//! the catalog is a struct with one named field per shift rather than a
//! list: a differently-shaped catalog is an API change, not a data
//! substitution.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Work category of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftKind {
    /// Voice call duty.
    Call,
    /// Chat/messaging duty.
    Messaging,
    /// Comment-queue duty.
    Comments,
}

impl ShiftKind {
    /// Whether this kind counts as written communication.
    pub fn is_written(self) -> bool {
        matches!(self, ShiftKind::Messaging | ShiftKind::Comments)
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShiftKind::Call => "call",
            ShiftKind::Messaging => "messaging",
            ShiftKind::Comments => "comments",
        })
    }
}

/// Target headcount of a shift slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Headcount {
    /// Fill with up to exactly this many agents.
    Fixed(u32),
    /// Absorb every agent still unassigned for the day.
    Remaining,
}

/// A daily shift definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique shift identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Start time of day.
    pub start: NaiveTime,
    /// End time of day.
    pub end: NaiveTime,
    /// Work category.
    pub kind: ShiftKind,
    /// Target headcount per day.
    pub headcount: Headcount,
}

impl Shift {
    /// Creates a shift definition.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: NaiveTime,
        end: NaiveTime,
        kind: ShiftKind,
        headcount: Headcount,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start,
            end,
            kind,
            headcount,
        }
    }

    /// Whether this is a late shift (starts at 11:00 or later).
    pub fn is_late(&self) -> bool {
        self.start.hour() >= 11
    }
}

/// The fixed five-shift daily catalog.
///
/// One named field per shift; the generation steps address these fields
/// directly, in this order: day call, comments, the two late calls, then
/// messaging as the absorbing remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCatalog {
    /// Call 9:00-18:00, three agents per day.
    pub call_day: Shift,
    /// Call 11:00-20:00, one agent per day (late).
    pub call_eleven: Shift,
    /// Call 12:00-21:00, one agent per day (late).
    pub call_noon: Shift,
    /// Messaging 9:00-18:00, absorbs the remaining pool.
    pub messaging: Shift,
    /// Comments 9:00-18:00, one agent per day.
    pub comments: Shift,
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("hard-coded shift time is valid")
}

impl ShiftCatalog {
    /// Creates the standard catalog.
    pub fn standard() -> Self {
        Self {
            call_day: Shift::new(
                "call-9-18",
                "Call 9:00-18:00",
                hm(9, 0),
                hm(18, 0),
                ShiftKind::Call,
                Headcount::Fixed(3),
            ),
            call_eleven: Shift::new(
                "call-11-20",
                "Call 11:00-20:00",
                hm(11, 0),
                hm(20, 0),
                ShiftKind::Call,
                Headcount::Fixed(1),
            ),
            call_noon: Shift::new(
                "call-12-21",
                "Call 12:00-21:00",
                hm(12, 0),
                hm(21, 0),
                ShiftKind::Call,
                Headcount::Fixed(1),
            ),
            messaging: Shift::new(
                "messaging-9-18",
                "Messaging 9:00-18:00",
                hm(9, 0),
                hm(18, 0),
                ShiftKind::Messaging,
                Headcount::Remaining,
            ),
            comments: Shift::new(
                "comments-9-18",
                "Comments 9:00-18:00",
                hm(9, 0),
                hm(18, 0),
                ShiftKind::Comments,
                Headcount::Fixed(1),
            ),
        }
    }

    /// All shifts in assignment-step order.
    pub fn all(&self) -> [&Shift; 5] {
        [
            &self.call_day,
            &self.comments,
            &self.call_eleven,
            &self.call_noon,
            &self.messaging,
        ]
    }

    /// Looks up a shift by id.
    pub fn by_id(&self, id: &str) -> Option<&Shift> {
        self.all().into_iter().find(|s| s.id == id)
    }
}

impl Default for ShiftCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_ids() {
        let catalog = ShiftCatalog::standard();
        assert_eq!(catalog.call_day.id, "call-9-18");
        assert_eq!(catalog.call_eleven.id, "call-11-20");
        assert_eq!(catalog.call_noon.id, "call-12-21");
        assert_eq!(catalog.messaging.id, "messaging-9-18");
        assert_eq!(catalog.comments.id, "comments-9-18");
    }

    #[test]
    fn test_headcounts() {
        let catalog = ShiftCatalog::standard();
        assert_eq!(catalog.call_day.headcount, Headcount::Fixed(3));
        assert_eq!(catalog.call_eleven.headcount, Headcount::Fixed(1));
        assert_eq!(catalog.call_noon.headcount, Headcount::Fixed(1));
        assert_eq!(catalog.comments.headcount, Headcount::Fixed(1));
        assert_eq!(catalog.messaging.headcount, Headcount::Remaining);
    }

    #[test]
    fn test_late_shifts() {
        let catalog = ShiftCatalog::standard();
        assert!(!catalog.call_day.is_late());
        assert!(catalog.call_eleven.is_late());
        assert!(catalog.call_noon.is_late());
        assert!(!catalog.messaging.is_late());
        assert!(!catalog.comments.is_late());
    }

    #[test]
    fn test_written_kinds() {
        assert!(!ShiftKind::Call.is_written());
        assert!(ShiftKind::Messaging.is_written());
        assert!(ShiftKind::Comments.is_written());
    }

    #[test]
    fn test_by_id() {
        let catalog = ShiftCatalog::standard();
        assert_eq!(catalog.by_id("call-12-21").map(|s| s.start.hour()), Some(12));
        assert!(catalog.by_id("call-0-0").is_none());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ShiftKind::Call.to_string(), "call");
        assert_eq!(ShiftKind::Messaging.to_string(), "messaging");
        assert_eq!(ShiftKind::Comments.to_string(), "comments");
    }
}
