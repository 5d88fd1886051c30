//! Diagnostic Descriptors
//!
//! Static metadata for the four diagnostic categories the rule chain emits.

use serde::Serialize;

/// Severity of a reported diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
        }
    }
}

/// Identity and wording of one diagnostic category
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub message_template: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub enabled_by_default: bool,
    pub description: &'static str,
}

impl DiagnosticDescriptor {
    /// Render the message template with `{0}` replaced by `argument`
    pub fn format_message(&self, argument: &str) -> String {
        self.message_template.replace("{0}", argument)
    }
}

/// Region name is not in the default set and nothing is configured
pub static NO_CONFIG: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "RR1999",
    title: "No .editorconfig configuration",
    message_template: "Region name '{0}' does not match default rules. Configure .editorconfig to customize allowed region names",
    category: "Structure",
    severity: Severity::Warning,
    enabled_by_default: true,
    description: "No custom configuration found in .editorconfig. Region name must match default naming rules or configure region_ruler.allowed_region_name or region_ruler.allowed_regex_pattern in .editorconfig.",
};

/// Region name is not a member of the configured name list
pub static INVALID_NAME: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "RR2001",
    title: "Invalid #region name",
    message_template: "Region name '{0}' is not in the allowed names list",
    category: "Structure",
    severity: Severity::Warning,
    enabled_by_default: true,
    description: "Region name must be in the configured allowed names list.",
};

/// Region name matches none of the configured patterns
pub static INVALID_PATTERN: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "RR2002",
    title: "Invalid #region pattern",
    message_template: "Region name '{0}' does not match any allowed regex pattern",
    category: "Structure",
    severity: Severity::Warning,
    enabled_by_default: true,
    description: "Region name must match at least one of the configured regex patterns.",
};

/// Region has no name while empty names are disallowed
pub static EMPTY: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "RR2003",
    title: "Empty #region name",
    message_template: "Region name cannot be empty",
    category: "Structure",
    severity: Severity::Warning,
    enabled_by_default: true,
    description: "Region must have a name when empty names are not allowed.",
};

/// Every descriptor this crate can report, in id order
pub static SUPPORTED_DIAGNOSTICS: [&DiagnosticDescriptor; 4] =
    [&NO_CONFIG, &INVALID_NAME, &INVALID_PATTERN, &EMPTY];
