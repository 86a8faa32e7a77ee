//! Default demo roster.
//!
//! Fifteen agents with two fixed days off each, together covering every
//! day of the week. Used as seed data by management surfaces and as the
//! standard scenario fixture in tests.

use crate::models::Agent;

/// The default 15-agent roster.
pub fn default_roster() -> Vec<Agent> {
    vec![
        Agent::new("1").with_name("Alice Johnson").with_days_off([0, 3]),
        Agent::new("2").with_name("Bob Smith").with_days_off([1, 4]),
        Agent::new("3").with_name("Carol Davis").with_days_off([2, 5]),
        Agent::new("4").with_name("David Wilson").with_days_off([0, 6]),
        Agent::new("5").with_name("Eva Brown").with_days_off([1, 5]),
        Agent::new("6").with_name("Frank Miller").with_days_off([2, 6]),
        Agent::new("7").with_name("Grace Lee").with_days_off([0, 4]),
        Agent::new("8").with_name("Henry Clark").with_days_off([1, 3]),
        Agent::new("9").with_name("Ivy Martinez").with_days_off([2, 4]),
        Agent::new("10").with_name("Jack Taylor").with_days_off([3, 6]),
        Agent::new("11").with_name("Kate Anderson").with_days_off([0, 5]),
        Agent::new("12").with_name("Liam Thomas").with_days_off([1, 6]),
        Agent::new("13").with_name("Mia Jackson").with_days_off([2, 3]),
        Agent::new("14").with_name("Niko Lemke").with_days_off([4, 5]),
        Agent::new("15").with_name("Olivia White").with_days_off([0, 1]),
    ]
}
