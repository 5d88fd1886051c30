//! Allowed-name patterns with a per-attempt time budget.
//!
//! The `regex` engine matches in time linear in the input, so a hostile
//! name cannot trigger catastrophic backtracking. The budget is still
//! enforced: an attempt that runs past it counts as a non-match.

use std::time::{Duration, Instant};

use regex::{Regex, RegexBuilder};

/// Time budget for a single match attempt
pub const MATCH_TIMEOUT: Duration = Duration::from_millis(100);

/// Upper bound on the compiled program size of one pattern
const COMPILED_SIZE_LIMIT: usize = 1 << 20;
/// Upper bound on the lazy DFA cache of one pattern
const DFA_SIZE_LIMIT: usize = 1 << 20;

/// Result of one bounded match attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternMatch {
    Matched,
    NotMatched,
    TimedOut,
}

/// A compiled allowed-name pattern
#[derive(Debug, Clone)]
pub struct AllowedPattern {
    source: String,
    regex: Regex,
    budget: Duration,
}

impl AllowedPattern {
    /// Compile `source`, failing on malformed or oversized patterns
    pub fn compile(source: &str, case_sensitive: bool) -> Result<Self, regex::Error> {
        Self::compile_with_budget(source, case_sensitive, MATCH_TIMEOUT)
    }

    pub fn compile_with_budget(
        source: &str,
        case_sensitive: bool,
        budget: Duration,
    ) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(!case_sensitive)
            .size_limit(COMPILED_SIZE_LIMIT)
            .dfa_size_limit(DFA_SIZE_LIMIT)
            .build()?;

        Ok(Self {
            source: source.to_string(),
            regex,
            budget,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Try to find the pattern anywhere in `name` within the budget
    pub fn matches(&self, name: &str) -> PatternMatch {
        let started = Instant::now();
        let found = self.regex.is_match(name);
        let elapsed = started.elapsed();

        if elapsed > self.budget {
            log::warn!(
                "Pattern '{}' exceeded its {:?} budget on '{}' ({:?}); treating as no match",
                self.source,
                self.budget,
                name,
                elapsed
            );
            PatternMatch::TimedOut
        } else if found {
            PatternMatch::Matched
        } else {
            PatternMatch::NotMatched
        }
    }
}
