//! Weekly rostering for contact-center teams.
//!
//! Assigns agents to a fixed catalog of daily shifts over a 7-day week,
//! balancing call duty, written-communication duty, and late-shift duty
//! across agents with fixed weekly days off. Regenerating a week with
//! the same roster reproduces the same schedule, ids and order included:
//! every ordering decision is either a stable counter sort or a pure
//! hash tie-break seeded by week and slot.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Agent`, `Shift`, `ShiftCatalog`,
//!   `Assignment`, `WeekSchedule`
//! - **`generator`**: The generation core — weekly fairness context,
//!   selection rules, per-day slot filling
//! - **`summary`**: Aggregated per-week workload report
//! - **`validation`**: Roster input checks and schedule invariant audits
//! - **`store`**: Persistence boundary for agents and week assignments
//! - **`export`**: Flat row projection for spreadsheet consumers
//! - **`seed`**: Default demo roster

pub mod export;
pub mod generator;
pub mod models;
pub mod seed;
pub mod store;
pub mod summary;
pub mod validation;

pub use generator::{generate_weekly_schedule, WeekScheduler};
