//! Region Rules
//!
//! The four naming rules. Each owns one diagnostic category and decides
//! for itself whether it applies to a given region.

use crate::descriptors::{self, DiagnosticDescriptor};
use crate::policy::PatternMatch;

use super::context::RegionContext;
use super::outcome::{EMPTY_NAME_ARGUMENT, RuleOutcome};

/// A naming rule in the evaluation chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Nameless region while empty names are disallowed
    Empty,
    /// Nothing configured: name must be in the built-in set
    NoConfig,
    /// Name must be in the configured name list
    AllowedNames,
    /// Name must match one of the configured patterns
    Pattern,
}

impl Rule {
    /// Every rule; evaluation order comes from `priority`, not from this list
    pub const ALL: [Rule; 4] = [Rule::Pattern, Rule::AllowedNames, Rule::NoConfig, Rule::Empty];

    /// Evaluation order key; lower runs first
    pub fn priority(&self) -> u32 {
        match self {
            Rule::Empty => 0,
            Rule::NoConfig => 1,
            Rule::AllowedNames => 2,
            Rule::Pattern => 5,
        }
    }

    /// Category reported when this rule fails
    pub fn descriptor(&self) -> &'static DiagnosticDescriptor {
        match self {
            Rule::Empty => &descriptors::EMPTY,
            Rule::NoConfig => &descriptors::NO_CONFIG,
            Rule::AllowedNames => &descriptors::INVALID_NAME,
            Rule::Pattern => &descriptors::INVALID_PATTERN,
        }
    }

    /// Whether this rule has an opinion about the region at all
    pub fn can_handle<L>(&self, ctx: &RegionContext<'_, L>) -> bool {
        let config = ctx.config();
        match self {
            Rule::Empty => ctx.is_empty() && !config.allow_empty_names(),
            Rule::NoConfig => !ctx.is_empty() && !ctx.has_any_custom_config(),
            Rule::AllowedNames => {
                !ctx.is_empty()
                    && config.has_custom_region_config()
                    && !config.allowed_region_names().is_empty()
            }
            Rule::Pattern => {
                !ctx.is_empty()
                    && config.has_custom_pattern_config()
                    && !config.allowed_patterns().is_empty()
            }
        }
    }

    /// Decide pass or fail for a region this rule can handle
    pub fn evaluate<L>(&self, ctx: &RegionContext<'_, L>) -> RuleOutcome {
        let name = ctx.name();
        let config = ctx.config();

        let passed = match self {
            Rule::Empty => return RuleOutcome::invalid(self.descriptor(), EMPTY_NAME_ARGUMENT),
            // Without custom config the name set holds the defaults
            Rule::NoConfig | Rule::AllowedNames => config.allowed_region_names().contains(name),
            Rule::Pattern => config
                .allowed_patterns()
                .iter()
                .any(|pattern| pattern.matches(name) == PatternMatch::Matched),
        };

        if passed {
            RuleOutcome::Valid
        } else {
            RuleOutcome::invalid(self.descriptor(), name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options;
    use crate::policy::{AllowedPattern, RegionConfig};
    use std::collections::HashMap;
    use std::time::Duration;

    fn config(pairs: &[(&str, &str)]) -> RegionConfig {
        let lookup: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RegionConfig::resolve(&lookup)
    }

    #[test]
    fn test_priorities_are_distinct() {
        let mut priorities: Vec<_> = Rule::ALL.iter().map(Rule::priority).collect();
        priorities.sort_unstable();
        priorities.dedup();
        assert_eq!(priorities, vec![0, 1, 2, 5]);
    }

    #[test]
    fn test_empty_rule_only_when_disallowed() {
        let allowed = RegionConfig::default();
        let disallowed = config(&[(options::ALLOW_EMPTY, "false")]);

        assert!(!Rule::Empty.can_handle(&RegionContext::new(" ", (), &allowed)));
        assert!(Rule::Empty.can_handle(&RegionContext::new(" ", (), &disallowed)));
        assert!(!Rule::Empty.can_handle(&RegionContext::new("Main", (), &disallowed)));

        let outcome = Rule::Empty.evaluate(&RegionContext::new("", (), &disallowed));
        assert_eq!(
            outcome,
            RuleOutcome::invalid(&descriptors::EMPTY, EMPTY_NAME_ARGUMENT)
        );
    }

    #[test]
    fn test_no_config_rule_steps_aside_for_custom_config() {
        let custom = config(&[(options::ALLOWED_REGEX_PATTERN, "^x")]);
        let ctx = RegionContext::new("Anything", (), &custom);
        assert!(!Rule::NoConfig.can_handle(&ctx));
        assert!(!Rule::AllowedNames.can_handle(&ctx));
        assert!(Rule::Pattern.can_handle(&ctx));
    }

    #[test]
    fn test_no_config_rule_checks_defaults() {
        let defaults = RegionConfig::default();
        assert!(Rule::NoConfig
            .evaluate(&RegionContext::new("private_fields", (), &defaults))
            .is_valid());
        assert_eq!(
            Rule::NoConfig
                .evaluate(&RegionContext::new("MyRegion", (), &defaults))
                .descriptor(),
            Some(&descriptors::NO_CONFIG)
        );
    }

    #[test]
    fn test_allowed_names_rule_skips_empty_list() {
        let empty_list = config(&[(options::ALLOWED_REGION_NAME, ";")]);
        let ctx = RegionContext::new("Main", (), &empty_list);
        assert!(!Rule::AllowedNames.can_handle(&ctx));
        assert!(!Rule::NoConfig.can_handle(&ctx));
    }

    #[test]
    fn test_pattern_rule_needs_one_match() {
        let patterns = config(&[(options::ALLOWED_REGEX_PATTERN, "^Public; ^Private")]);
        assert!(Rule::Pattern
            .evaluate(&RegionContext::new("Private Fields", (), &patterns))
            .is_valid());
        assert_eq!(
            Rule::Pattern
                .evaluate(&RegionContext::new("Protected Fields", (), &patterns))
                .descriptor(),
            Some(&descriptors::INVALID_PATTERN)
        );
    }

    fn exhausted(source: &str) -> AllowedPattern {
        AllowedPattern::compile_with_budget(source, false, Duration::ZERO).expect("compile")
    }

    #[test]
    fn test_timed_out_pattern_falls_through_to_next() {
        let config = RegionConfig::default().with_patterns(vec![
            exhausted("^Main"),
            AllowedPattern::compile("^Main", false).expect("compile"),
        ]);
        let ctx = RegionContext::new("Main Fields", (), &config);

        assert!(Rule::Pattern.can_handle(&ctx));
        assert!(Rule::Pattern.evaluate(&ctx).is_valid());
    }

    #[test]
    fn test_only_timed_out_patterns_fail() {
        let name = format!("Main {}", "x".repeat(4_096));
        let config = RegionConfig::default().with_patterns(vec![exhausted("^Main x+$")]);
        let ctx = RegionContext::new(&name, (), &config);

        assert_eq!(
            Rule::Pattern.evaluate(&ctx),
            RuleOutcome::invalid(&descriptors::INVALID_PATTERN, name.as_str())
        );
    }
}
