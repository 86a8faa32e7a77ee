//! Selection rules for slot filling.
//!
//! Each rule scores an agent against the weekly fairness context; lower
//! scores select first. Rules compose into a sequential pipeline where
//! a later rule is consulted only when every earlier rule ties. The
//! final rule in every pipeline is the deterministic rank tie-break, so
//! full ties are only possible on identical hashes; the stable sort
//! keeps pool order in that case.

use std::fmt::Debug;

use super::context::WeekContext;
use crate::models::Agent;

/// Score returned by a selection rule.
///
/// **Lower score = selected first.**
pub type RuleScore = f64;

/// A rule scoring an agent for one slot.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name for diagnostics.
    fn name(&self) -> &'static str;

    /// Scores the agent; lower = selected first.
    fn evaluate(&self, agent: &Agent, ctx: &WeekContext) -> RuleScore;
}

/// Fewest call days first — spreads call duty across the week.
#[derive(Debug, Clone, Copy)]
pub struct FewestCallDays;

impl SelectionRule for FewestCallDays {
    fn name(&self) -> &'static str {
        "FEWEST_CALL_DAYS"
    }

    fn evaluate(&self, agent: &Agent, ctx: &WeekContext) -> RuleScore {
        ctx.call_days(&agent.id) as f64
    }
}

/// Greatest remaining call need first.
///
/// Need is the distance to the weekly call-day target, floored at zero;
/// negated so that more need sorts earlier.
#[derive(Debug, Clone, Copy)]
pub struct MostCallNeed;

impl SelectionRule for MostCallNeed {
    fn name(&self) -> &'static str {
        "MOST_CALL_NEED"
    }

    fn evaluate(&self, agent: &Agent, ctx: &WeekContext) -> RuleScore {
        -(ctx.call_need(&agent.id) as f64)
    }
}

/// Fewest written-communication days first.
#[derive(Debug, Clone, Copy)]
pub struct FewestWrittenDays;

impl SelectionRule for FewestWrittenDays {
    fn name(&self) -> &'static str {
        "FEWEST_WRITTEN_DAYS"
    }

    fn evaluate(&self, agent: &Agent, ctx: &WeekContext) -> RuleScore {
        ctx.written_days(&agent.id) as f64
    }
}

/// Greatest remaining written need first.
#[derive(Debug, Clone, Copy)]
pub struct MostWrittenNeed;

impl SelectionRule for MostWrittenNeed {
    fn name(&self) -> &'static str {
        "MOST_WRITTEN_NEED"
    }

    fn evaluate(&self, agent: &Agent, ctx: &WeekContext) -> RuleScore {
        -(ctx.written_need(&agent.id) as f64)
    }
}

/// Deterministic rank tie-break for one slot context.
#[derive(Debug, Clone)]
pub struct RankOrder {
    context: String,
}

impl RankOrder {
    /// Creates the tie-break rule for a slot context key.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

impl SelectionRule for RankOrder {
    fn name(&self) -> &'static str {
        "RANK"
    }

    fn evaluate(&self, agent: &Agent, ctx: &WeekContext) -> RuleScore {
        ctx.rank(&agent.id, &self.context) as f64
    }
}

/// A sequential rule pipeline.
///
/// Compares agents rule by rule; the first rule with a non-tied score
/// decides. All scores here are integer-valued, so the epsilon only
/// guards against representation noise.
#[derive(Debug)]
pub struct RulePipeline {
    rules: Vec<Box<dyn SelectionRule>>,
    epsilon: f64,
}

impl RulePipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Appends a rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns indices into `agents` in selection order.
    ///
    /// The sort is stable: agents tied on every rule keep their input
    /// order.
    pub fn sort_indices(&self, agents: &[Agent], ctx: &WeekContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..agents.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&agents[a], &agents[b], ctx));
        indices
    }

    fn compare(&self, a: &Agent, b: &Agent, ctx: &WeekContext) -> std::cmp::Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, ctx);
            let score_b = rule.evaluate(b, ctx);
            if (score_a - score_b).abs() > self.epsilon {
                return score_a
                    .partial_cmp(&score_b)
                    .unwrap_or(std::cmp::Ordering::Equal);
            }
        }
        std::cmp::Ordering::Equal
    }
}

impl Default for RulePipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Agent> {
        vec![Agent::new("a1"), Agent::new("a2"), Agent::new("a3")]
    }

    #[test]
    fn test_fewest_call_days() {
        let agents = roster();
        let mut ctx = WeekContext::new("2024-01-01", &agents);
        ctx.record_call("a1");
        ctx.record_call("a1");
        ctx.record_call("a2");

        assert!(
            FewestCallDays.evaluate(&agents[2], &ctx) < FewestCallDays.evaluate(&agents[1], &ctx)
        );
        assert!(
            FewestCallDays.evaluate(&agents[1], &ctx) < FewestCallDays.evaluate(&agents[0], &ctx)
        );
    }

    #[test]
    fn test_most_call_need() {
        let agents = roster();
        let mut ctx = WeekContext::new("2024-01-01", &agents);
        ctx.record_call("a1");

        // a2 needs 3 call days, a1 needs 2 → a2 scores lower.
        assert!(MostCallNeed.evaluate(&agents[1], &ctx) < MostCallNeed.evaluate(&agents[0], &ctx));
    }

    #[test]
    fn test_fewest_written_days() {
        let agents = roster();
        let mut ctx = WeekContext::new("2024-01-01", &agents);
        ctx.record_messaging("a1");

        assert!(
            FewestWrittenDays.evaluate(&agents[1], &ctx)
                < FewestWrittenDays.evaluate(&agents[0], &ctx)
        );
    }

    #[test]
    fn test_rank_order_matches_context() {
        let agents = roster();
        let ctx = WeekContext::new("2024-01-01", &agents);
        let rule = RankOrder::new("call-9-18:0");
        assert_eq!(
            rule.evaluate(&agents[0], &ctx),
            ctx.rank("a1", "call-9-18:0") as f64
        );
    }

    #[test]
    fn test_pipeline_first_rule_decides() {
        let agents = roster();
        let mut ctx = WeekContext::new("2024-01-01", &agents);
        ctx.record_call("a1");

        let pipeline = RulePipeline::new()
            .with_rule(FewestCallDays)
            .with_rule(RankOrder::new("call-9-18:0"));

        let order = pipeline.sort_indices(&agents, &ctx);
        // a1 has a call day, so it sorts after a2/a3 regardless of rank.
        assert_eq!(order[2], 0);
    }

    #[test]
    fn test_pipeline_falls_through_to_rank() {
        let agents = roster();
        let ctx = WeekContext::new("2024-01-01", &agents);

        let pipeline = RulePipeline::new()
            .with_rule(FewestCallDays)
            .with_rule(RankOrder::new("call-9-18:0"));

        // All call counts tie at zero; rank decides.
        let order = pipeline.sort_indices(&agents, &ctx);
        let ranks: Vec<u32> = order
            .iter()
            .map(|&i| ctx.rank(&agents[i].id, "call-9-18:0"))
            .collect();
        assert!(ranks[0] <= ranks[1] && ranks[1] <= ranks[2]);
    }

    #[test]
    fn test_empty_pipeline_keeps_input_order() {
        let agents = roster();
        let ctx = WeekContext::new("2024-01-01", &agents);
        let pipeline = RulePipeline::new();
        assert_eq!(pipeline.sort_indices(&agents, &ctx), vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_is_deterministic() {
        let agents = roster();
        let ctx = WeekContext::new("2024-01-01", &agents);
        let pipeline = RulePipeline::new()
            .with_rule(FewestCallDays)
            .with_rule(MostCallNeed)
            .with_rule(RankOrder::new("call-11-20:4"));

        assert_eq!(
            pipeline.sort_indices(&agents, &ctx),
            pipeline.sort_indices(&agents, &ctx)
        );
    }
}
