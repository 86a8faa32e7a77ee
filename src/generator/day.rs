//! Per-day slot filling.
//!
//! Fills one day's shifts in fixed priority order, removing each chosen
//! agent from the day's remaining pool so nobody is double-booked:
//!
//! 1. **Day call** (9-18): up to three agents, fewest call days first.
//! 2. **Comments** (9-18): one agent who has not yet taken a comments
//!    day this week, fewest written days first.
//! 3. **Late calls** (11-20, then 12-21): one agent each, restricted to
//!    agents without a late day this week. On Sundays only, the 12-21
//!    slot relaxes that restriction when nobody eligible remains, so
//!    Sunday late coverage survives a week in which every remaining
//!    agent already worked a late shift.
//! 4. **Messaging** (9-18): every agent still in the pool, unsorted and
//!    unfiltered.
//!
//! Under-supply never errors: slots fill partially or stay empty and
//! the day proceeds.

use chrono::NaiveDate;

use super::context::WeekContext;
use super::rules::{
    FewestCallDays, FewestWrittenDays, MostCallNeed, MostWrittenNeed, RankOrder, RulePipeline,
};
use crate::models::{Agent, Assignment, ShiftCatalog};

const SUNDAY: u8 = 0;

/// Fills one day's assignment list from the available pool.
///
/// `pool` holds the day's available agents in roster order; chosen
/// agents are removed as each slot fills, and `ctx` counters are updated
/// as assignments are finalized. The returned list preserves step order,
/// then selection order within each step.
pub(crate) fn fill_day(
    catalog: &ShiftCatalog,
    pool: &mut Vec<Agent>,
    ctx: &mut WeekContext,
    date: NaiveDate,
    day_of_week: u8,
) -> Vec<Assignment> {
    let mut assignments = Vec::new();

    // Step 1: day call, up to three agents.
    let order = call_order(slot_context(&catalog.call_day.id, day_of_week));
    for agent in take(pool, ctx, &order, 3, |_, _| true) {
        assignments.push(Assignment::new(date, &agent.id, &catalog.call_day.id));
        ctx.record_call(&agent.id);
    }

    // Step 2: comments, one agent, at most one comments day per agent per week.
    let order = comments_order(slot_context(&catalog.comments.id, day_of_week));
    for agent in take(pool, ctx, &order, 1, |a, c| !c.has_comments(&a.id)) {
        assignments.push(Assignment::new(date, &agent.id, &catalog.comments.id));
        ctx.record_comments(&agent.id);
    }

    // Step 3a: late call 11-20, one agent without a late day this week.
    let order = call_order(slot_context(&catalog.call_eleven.id, day_of_week));
    for agent in take(pool, ctx, &order, 1, |a, c| c.late_days(&a.id) == 0) {
        assignments.push(Assignment::new(date, &agent.id, &catalog.call_eleven.id));
        ctx.record_late_call(&agent.id);
    }

    // Step 3b: late call 12-21, re-evaluated against the smaller pool.
    let order = call_order(slot_context(&catalog.call_noon.id, day_of_week));
    let mut picked = take(pool, ctx, &order, 1, |a, c| c.late_days(&a.id) == 0);
    if picked.is_empty() && day_of_week == SUNDAY && !pool.is_empty() {
        // Sunday-only relaxation: keep the 12-21 slot covered even when
        // every remaining agent already worked a late shift this week.
        // Applies to no other slot and no other day.
        let fallback = call_order(fallback_context(&catalog.call_noon.id, day_of_week));
        picked = take(pool, ctx, &fallback, 1, |_, _| true);
        tracing::debug!(
            "sunday fallback filled {} on {date}",
            catalog.call_noon.id
        );
    }
    for agent in picked {
        assignments.push(Assignment::new(date, &agent.id, &catalog.call_noon.id));
        ctx.record_late_call(&agent.id);
    }

    // Step 4: messaging absorbs the rest of the pool, in pool order.
    for agent in pool.drain(..) {
        assignments.push(Assignment::new(date, &agent.id, &catalog.messaging.id));
        ctx.record_messaging(&agent.id);
    }

    assignments
}

fn slot_context(shift_id: &str, day_of_week: u8) -> String {
    format!("{shift_id}:{day_of_week}")
}

fn fallback_context(shift_id: &str, day_of_week: u8) -> String {
    format!("fallback-{shift_id}:{day_of_week}")
}

fn call_order(context: String) -> RulePipeline {
    RulePipeline::new()
        .with_rule(FewestCallDays)
        .with_rule(MostCallNeed)
        .with_rule(RankOrder::new(context))
}

fn comments_order(context: String) -> RulePipeline {
    RulePipeline::new()
        .with_rule(FewestWrittenDays)
        .with_rule(MostWrittenNeed)
        .with_rule(RankOrder::new(context))
}

/// Removes and returns up to `count` eligible agents from the pool, in
/// pipeline order.
fn take(
    pool: &mut Vec<Agent>,
    ctx: &WeekContext,
    order: &RulePipeline,
    count: usize,
    eligible: impl Fn(&Agent, &WeekContext) -> bool,
) -> Vec<Agent> {
    let candidates: Vec<Agent> = pool
        .iter()
        .filter(|a| eligible(a, ctx))
        .cloned()
        .collect();

    let picked: Vec<Agent> = order
        .sort_indices(&candidates, ctx)
        .into_iter()
        .take(count)
        .map(|i| candidates[i].clone())
        .collect();

    for agent in &picked {
        pool.retain(|a| a.id != agent.id);
    }
    picked
}
