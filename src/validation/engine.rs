//! Rule Engine
//!
//! Runs the priority-ordered rule chain for one region. The first rule
//! that passes the region short-circuits the chain and clears every
//! failure collected so far; otherwise all failures are returned in
//! priority order.

use super::context::RegionContext;
use super::outcome::{Diagnostic, RuleOutcome};
use super::rules::Rule;

/// Immutable, priority-sorted rule chain
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    pub fn new() -> Self {
        Self::with_rules(Rule::ALL)
    }

    /// Build an engine from any set of rules; order is by priority
    pub fn with_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut rules: Vec<Rule> = rules.into_iter().collect();
        rules.sort_by_key(Rule::priority);
        Self { rules }
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate a region; empty when it passes, otherwise every failure
    pub fn evaluate<L>(&self, ctx: &RegionContext<'_, L>) -> Vec<RuleOutcome> {
        let mut failures = Vec::new();

        for rule in &self.rules {
            if !rule.can_handle(ctx) {
                continue;
            }

            let outcome = rule.evaluate(ctx);
            log::trace!(
                "Rule {:?} on region '{}': {}",
                rule,
                ctx.name(),
                if outcome.is_valid() { "valid" } else { "invalid" }
            );

            if outcome.is_valid() {
                return Vec::new();
            }
            failures.push(outcome);
        }

        failures
    }

    /// Evaluate a region and synthesize its diagnostics
    pub fn diagnostics<L: Clone>(&self, ctx: &RegionContext<'_, L>) -> Vec<Diagnostic<L>> {
        self.evaluate(ctx)
            .iter()
            .filter_map(|outcome| outcome.to_diagnostic(ctx.location()))
            .collect()
    }
}
