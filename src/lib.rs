//! Region Ruler
//!
//! Validates `#region` names against a configurable naming policy and
//! reports one diagnostic per violation.
//!
//! This library provides:
//! - Option resolution into an immutable per-unit policy
//! - A priority-ordered chain of naming rules
//! - Diagnostic synthesis for the host to report
//! - A small `#region` scanner and command line host

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod descriptors;
pub mod options;
pub mod parser;
pub mod policy;
pub mod validation;

// Re-exports for clean public API
pub use analyzer::RegionAnalyzer;
pub use config::Config;
pub use descriptors::{DiagnosticDescriptor, Severity};
pub use options::{OptionLookup, OptionSet};
pub use policy::RegionConfig;
pub use validation::{Diagnostic, RegionContext, Rule, RuleEngine, RuleOutcome};
