//! Region Naming Policy
//!
//! Resolves the raw options of one source unit into an immutable,
//! validated `RegionConfig`. Resolution never fails: malformed patterns are
//! dropped and unparseable booleans fall back to their defaults.

pub mod comparer;
pub mod defaults;
pub mod pattern;

pub use comparer::{NameComparer, NameSet};
pub use defaults::DEFAULT_REGION_NAMES;
pub use pattern::{AllowedPattern, MATCH_TIMEOUT, PatternMatch};

use crate::options::{self, OptionLookup};

/// Resolved naming policy for one analyzed source unit
#[derive(Debug, Clone)]
pub struct RegionConfig {
    allowed_region_names: NameSet,
    allowed_patterns: Vec<AllowedPattern>,
    has_custom_region_config: bool,
    has_custom_pattern_config: bool,
    case_sensitive: bool,
    allow_empty_names: bool,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self::resolve(&std::collections::HashMap::<String, String>::new())
    }
}

impl RegionConfig {
    /// Build the configuration from an option lookup
    pub fn resolve(lookup: &impl OptionLookup) -> Self {
        let case_sensitive = bool_option(lookup, options::CASE_SENSITIVE, false);
        let allow_empty_names = bool_option(lookup, options::ALLOW_EMPTY, true);
        let comparer = NameComparer::from_case_sensitive(case_sensitive);

        let (allowed_region_names, has_custom_region_config) =
            match non_blank(lookup, options::ALLOWED_REGION_NAME) {
                Some(value) => (NameSet::new(comparer, options::split_list(value)), true),
                None => (NameSet::new(comparer, DEFAULT_REGION_NAMES.iter().copied()), false),
            };

        let (allowed_patterns, has_custom_pattern_config) =
            match non_blank(lookup, options::ALLOWED_REGEX_PATTERN) {
                Some(value) => (compile_patterns(value, case_sensitive), true),
                None => (Vec::new(), false),
            };

        let config = Self {
            allowed_region_names,
            allowed_patterns,
            has_custom_region_config,
            has_custom_pattern_config,
            case_sensitive,
            allow_empty_names,
        };

        log::debug!(
            "Resolved region policy: {} names (custom: {}), {} patterns (custom: {}), case_sensitive={}, allow_empty={}",
            config.allowed_region_names.len(),
            config.has_custom_region_config,
            config.allowed_patterns.len(),
            config.has_custom_pattern_config,
            config.case_sensitive,
            config.allow_empty_names
        );

        config
    }

    /// Replace the pattern list with already compiled patterns
    #[cfg(test)]
    pub(crate) fn with_patterns(mut self, patterns: Vec<AllowedPattern>) -> Self {
        self.allowed_patterns = patterns;
        self.has_custom_pattern_config = true;
        self
    }

    pub fn allowed_region_names(&self) -> &NameSet {
        &self.allowed_region_names
    }

    pub fn allowed_patterns(&self) -> &[AllowedPattern] {
        &self.allowed_patterns
    }

    pub fn has_custom_region_config(&self) -> bool {
        self.has_custom_region_config
    }

    pub fn has_custom_pattern_config(&self) -> bool {
        self.has_custom_pattern_config
    }

    pub fn has_any_custom_config(&self) -> bool {
        self.has_custom_region_config || self.has_custom_pattern_config
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn comparer(&self) -> NameComparer {
        self.allowed_region_names.comparer()
    }

    pub fn allow_empty_names(&self) -> bool {
        self.allow_empty_names
    }
}

fn non_blank<'a>(lookup: &'a impl OptionLookup, key: &str) -> Option<&'a str> {
    lookup.get(key).filter(|value| !value.trim().is_empty())
}

fn bool_option(lookup: &impl OptionLookup, key: &str, default: bool) -> bool {
    match lookup.get(key) {
        Some(raw) => options::parse_bool(raw).unwrap_or_else(|| {
            log::warn!(
                "Ignoring non-boolean value '{}' for {}; using {}",
                raw,
                key,
                default
            );
            default
        }),
        None => default,
    }
}

fn compile_patterns(value: &str, case_sensitive: bool) -> Vec<AllowedPattern> {
    options::split_list(value)
        .filter_map(|source| match AllowedPattern::compile(source, case_sensitive) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                log::warn!("Dropping invalid region name pattern '{}': {}", source, e);
                None
            }
        })
        .collect()
}
