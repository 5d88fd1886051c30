//! Behavior of the full rule chain across configurations
use std::collections::HashMap;

use region_ruler::descriptors::{EMPTY, INVALID_NAME, INVALID_PATTERN, NO_CONFIG};
use region_ruler::options::{
    ALLOW_EMPTY, ALLOWED_REGEX_PATTERN, ALLOWED_REGION_NAME, CASE_SENSITIVE,
};
use region_ruler::policy::DEFAULT_REGION_NAMES;
use region_ruler::{RegionConfig, RegionContext, RuleEngine, RuleOutcome};

fn config(pairs: &[(&str, &str)]) -> RegionConfig {
    let lookup: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    RegionConfig::resolve(&lookup)
}

fn evaluate(config: &RegionConfig, name: &str) -> Vec<RuleOutcome> {
    RuleEngine::new().evaluate(&RegionContext::new(name, (), config))
}

fn ids(outcomes: &[RuleOutcome]) -> Vec<&'static str> {
    outcomes
        .iter()
        .filter_map(|o| o.descriptor().map(|d| d.id))
        .collect()
}

#[test]
fn test_every_default_name_passes_without_config() {
    let config = config(&[]);
    for name in DEFAULT_REGION_NAMES {
        assert!(evaluate(&config, name).is_empty(), "{} should pass", name);
        assert!(
            evaluate(&config, &name.to_lowercase()).is_empty(),
            "{} should pass in lower case",
            name
        );
    }
}

#[test]
fn test_unknown_names_fail_once_without_config() {
    let config = config(&[]);
    for name in ["MyRegion", "Public Fields", "Fields", "HELPERS2", "Main Method"] {
        let outcomes = evaluate(&config, name);
        assert_eq!(outcomes, vec![RuleOutcome::invalid(&NO_CONFIG, name)]);
    }
}

#[test]
fn test_empty_name_disallowed_reports_empty_only() {
    let configs = [
        config(&[(ALLOW_EMPTY, "false")]),
        config(&[(ALLOW_EMPTY, "false"), (ALLOWED_REGION_NAME, "Main")]),
        config(&[
            (ALLOW_EMPTY, "false"),
            (ALLOWED_REGION_NAME, "Main"),
            (ALLOWED_REGEX_PATTERN, "^M"),
            (CASE_SENSITIVE, "true"),
        ]),
    ];

    for config in &configs {
        for name in ["", "   ", "\t"] {
            let outcomes = evaluate(config, name);
            assert_eq!(outcomes.len(), 1);
            assert_eq!(outcomes[0].descriptor(), Some(&EMPTY));
        }
    }
}

#[test]
fn test_empty_name_allowed_always_passes() {
    let configs = [
        config(&[]),
        config(&[(ALLOW_EMPTY, "true")]),
        config(&[(ALLOWED_REGION_NAME, "Main"), (ALLOWED_REGEX_PATTERN, "^M")]),
    ];

    for config in &configs {
        assert!(evaluate(config, "").is_empty());
        assert!(evaluate(config, "  ").is_empty());
    }
}

#[test]
fn test_name_member_short_circuits_pattern_rule() {
    let config = config(&[
        (ALLOWED_REGION_NAME, "Helpers"),
        (ALLOWED_REGEX_PATTERN, "^never$"),
    ]);
    assert!(evaluate(&config, "Helpers").is_empty());
}

#[test]
fn test_failing_both_lists_reports_two_in_order() {
    let config = config(&[
        (ALLOWED_REGION_NAME, "Helpers"),
        (ALLOWED_REGEX_PATTERN, "^Public"),
    ]);

    let outcomes = evaluate(&config, "MyRegion");
    assert_eq!(
        outcomes,
        vec![
            RuleOutcome::invalid(&INVALID_NAME, "MyRegion"),
            RuleOutcome::invalid(&INVALID_PATTERN, "MyRegion"),
        ]
    );
}

#[test]
fn test_case_sensitivity_flag() {
    let sensitive = config(&[(ALLOWED_REGION_NAME, "helpers"), (CASE_SENSITIVE, "true")]);
    let insensitive = config(&[(ALLOWED_REGION_NAME, "helpers")]);

    assert_eq!(ids(&evaluate(&sensitive, "Helpers")), vec!["RR2001"]);
    assert!(evaluate(&insensitive, "Helpers").is_empty());
}

#[test]
fn test_case_sensitive_defaults_need_exact_spelling() {
    let config = config(&[(CASE_SENSITIVE, "true")]);
    assert!(evaluate(&config, "HELPERS").is_empty());
    assert_eq!(ids(&evaluate(&config, "Helpers")), vec!["RR1999"]);
}

#[test]
fn test_malformed_pattern_does_not_hide_valid_ones() {
    let config = config(&[(ALLOWED_REGEX_PATTERN, "(Public; ^Private [A-Z][a-z]+$")]);

    assert_eq!(config.allowed_patterns().len(), 1);
    assert!(evaluate(&config, "Private Fields").is_empty());
    assert_eq!(ids(&evaluate(&config, "Public Fields")), vec!["RR2002"]);
}

#[test]
fn test_all_malformed_patterns_flag_nothing() {
    let config = config(&[(ALLOWED_REGEX_PATTERN, "(;)")]);
    assert!(evaluate(&config, "Anything At All").is_empty());
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let engine = RuleEngine::new();
    let config = config(&[
        (ALLOWED_REGION_NAME, "Helpers;Main"),
        (ALLOWED_REGEX_PATTERN, "^Public;^Private"),
    ]);
    let ctx = RegionContext::new("Protected Fields", "Program.cs:14", &config);

    let first = engine.diagnostics(&ctx);
    for _ in 0..50 {
        assert_eq!(engine.diagnostics(&ctx), first);
    }
    assert_eq!(first.len(), 2);
}

#[test]
fn test_allowed_names_scenario() {
    let config = config(&[(ALLOWED_REGION_NAME, "Helpers")]);

    assert!(evaluate(&config, "Helpers").is_empty());
    assert_eq!(
        evaluate(&config, "MyRegion"),
        vec![RuleOutcome::invalid(&INVALID_NAME, "MyRegion")]
    );
}

#[test]
fn test_spaced_name_is_not_a_default_name() {
    // Default names use underscores; the spaced form only passes via patterns.
    let unconfigured = config(&[]);
    assert_eq!(ids(&evaluate(&unconfigured, "Public Fields")), vec!["RR1999"]);
    assert!(evaluate(&unconfigured, "public_fields").is_empty());

    let patterned = config(&[(ALLOWED_REGEX_PATTERN, "^(Public|Private) Fields$")]);
    assert!(evaluate(&patterned, "Public Fields").is_empty());
    assert!(evaluate(&patterned, "Private Fields").is_empty());
    assert_eq!(ids(&evaluate(&patterned, "Protected Fields")), vec!["RR2002"]);
}

#[test]
fn test_ignore_case_names_agree_with_patterns() {
    let names = config(&[(ALLOWED_REGION_NAME, "STRASSE;OFFICE")]);
    assert_eq!(
        evaluate(&names, "Straße"),
        vec![RuleOutcome::invalid(&INVALID_NAME, "Straße")]
    );
    assert_eq!(ids(&evaluate(&names, "oﬃce")), vec!["RR2001"]);
    assert!(evaluate(&names, "strasse").is_empty());

    let patterns = config(&[(ALLOWED_REGEX_PATTERN, "^STRASSE$")]);
    assert_eq!(ids(&evaluate(&patterns, "Straße")), vec!["RR2002"]);
}
