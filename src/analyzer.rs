//! Region Analyzer
//!
//! Host-facing entry point. Resolves the policy once per source unit and
//! evaluates every region the host found in it.

use crate::descriptors::{DiagnosticDescriptor, SUPPORTED_DIAGNOSTICS};
use crate::options::OptionLookup;
use crate::policy::RegionConfig;
use crate::validation::{Diagnostic, RegionContext, RuleEngine};

/// Stateless analyzer, shareable across worker threads
#[derive(Debug, Clone, Default)]
pub struct RegionAnalyzer {
    engine: RuleEngine,
}

impl RegionAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn supported_diagnostics(&self) -> &'static [&'static DiagnosticDescriptor] {
        &SUPPORTED_DIAGNOSTICS
    }

    /// Analyze one source unit's regions against its options
    ///
    /// Diagnostics come back in region order, and in rule priority order
    /// within a region.
    pub fn analyze_unit<S, L, I>(
        &self,
        options: &impl OptionLookup,
        regions: I,
    ) -> Vec<Diagnostic<L>>
    where
        S: AsRef<str>,
        L: Clone,
        I: IntoIterator<Item = (S, L)>,
    {
        let config = RegionConfig::resolve(options);
        regions
            .into_iter()
            .flat_map(|(name, location)| self.analyze_region(&config, name.as_ref(), location))
            .collect()
    }

    /// Analyze a single region against an already resolved policy
    pub fn analyze_region<L: Clone>(
        &self,
        config: &RegionConfig,
        name: &str,
        location: L,
    ) -> Vec<Diagnostic<L>> {
        let ctx = RegionContext::new(name, location, config);
        self.engine.diagnostics(&ctx)
    }
}
