//! Per-region view handed to every rule.

use crate::policy::RegionConfig;

/// One region occurrence together with the unit's resolved policy
#[derive(Debug, Clone)]
pub struct RegionContext<'a, L> {
    name: &'a str,
    location: L,
    config: &'a RegionConfig,
}

impl<'a, L> RegionContext<'a, L> {
    pub fn new(name: &'a str, location: L, config: &'a RegionConfig) -> Self {
        Self {
            name,
            location,
            config,
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn config(&self) -> &'a RegionConfig {
        self.config
    }

    /// Name is empty or whitespace only
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
    }

    pub fn has_any_custom_config(&self) -> bool {
        self.config.has_any_custom_config()
    }
}
