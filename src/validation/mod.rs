//! Validation Engine
//!
//! Region naming rules, the engine that chains them, and the diagnostics
//! they produce.

pub mod context;
pub mod engine;
pub mod outcome;
pub mod rules;

pub use context::RegionContext;
pub use engine::RuleEngine;
pub use outcome::{Diagnostic, EMPTY_NAME_ARGUMENT, RuleOutcome};
pub use rules::Rule;
