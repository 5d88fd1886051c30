//! Rule outcomes and the diagnostic records synthesized from them.

use serde::Serialize;

use crate::descriptors::DiagnosticDescriptor;

/// Argument reported for regions without a name
pub const EMPTY_NAME_ARGUMENT: &str = "[empty]";

/// Verdict of one rule for one region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Valid,
    Invalid {
        descriptor: &'static DiagnosticDescriptor,
        name: String,
    },
}

impl RuleOutcome {
    pub fn invalid(descriptor: &'static DiagnosticDescriptor, name: impl Into<String>) -> Self {
        RuleOutcome::Invalid {
            descriptor,
            name: name.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, RuleOutcome::Valid)
    }

    pub fn descriptor(&self) -> Option<&'static DiagnosticDescriptor> {
        match self {
            RuleOutcome::Valid => None,
            RuleOutcome::Invalid { descriptor, .. } => Some(*descriptor),
        }
    }

    /// Pair an invalid outcome with the region's location
    pub fn to_diagnostic<L: Clone>(&self, location: &L) -> Option<Diagnostic<L>> {
        match self {
            RuleOutcome::Valid => None,
            RuleOutcome::Invalid { descriptor, name } => {
                let argument = if name.trim().is_empty() {
                    EMPTY_NAME_ARGUMENT.to_string()
                } else {
                    name.clone()
                };
                Some(Diagnostic {
                    descriptor: *descriptor,
                    location: location.clone(),
                    argument,
                })
            }
        }
    }
}

/// A diagnostic ready to be reported by the host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic<L> {
    pub descriptor: &'static DiagnosticDescriptor,
    pub location: L,
    pub argument: String,
}

impl<L> Diagnostic<L> {
    pub fn id(&self) -> &'static str {
        self.descriptor.id
    }

    pub fn message(&self) -> String {
        self.descriptor.format_message(&self.argument)
    }
}
