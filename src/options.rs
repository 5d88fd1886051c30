//! Option Lookup
//!
//! Raw, string-keyed analysis options for one source unit.
//!
//! This module handles:
//! - The `OptionLookup` seam the resolver reads from
//! - Loading options from TOML files into dotted keys
//! - `KEY=VALUE` overrides from the command line

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Prefix shared by every option key
pub const KEY_PREFIX: &str = "region_ruler.";

/// Delimited list of exact allowed region names
pub const ALLOWED_REGION_NAME: &str = "region_ruler.allowed_region_name";
/// Delimited list of allowed region name patterns
pub const ALLOWED_REGEX_PATTERN: &str = "region_ruler.allowed_regex_pattern";
/// Whether nameless regions are permitted
pub const ALLOW_EMPTY: &str = "region_ruler.allow_empty";
/// Whether name and pattern comparison is case sensitive
pub const CASE_SENSITIVE: &str = "region_ruler.case_sensitive";

/// Read-only key/value view of the options for one analyzed unit
pub trait OptionLookup {
    fn get(&self, key: &str) -> Option<&str>;
}

impl OptionLookup for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

impl OptionLookup for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }
}

impl<T: OptionLookup + ?Sized> OptionLookup for &T {
    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }
}

/// Parse a boolean option the lenient way: `true`/`false` in any case
pub fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Split a delimited list option on `,` and `;`, dropping blank tokens
pub fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split([',', ';'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Owned, ordered set of options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSet {
    values: BTreeMap<String, String>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse options file {}", path.display()))
    }

    /// Flatten a TOML document into dotted keys
    ///
    /// `[region_ruler] allow_empty = false` becomes
    /// `region_ruler.allow_empty = "false"`. Arrays of scalars are joined
    /// with `;` so they read back as a delimited list.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(text)?;
        let mut set = Self::new();
        flatten_table("", &table, &mut set.values)?;
        Ok(set)
    }

    /// Insert or replace an option; keys without the prefix get it added
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let key = key.trim();
        let key = if key.starts_with(KEY_PREFIX) {
            key.to_string()
        } else {
            format!("{KEY_PREFIX}{key}")
        };
        self.values.insert(key, value.into());
    }

    /// Apply a `KEY=VALUE` override
    pub fn parse_assignment(&mut self, assignment: &str) -> Result<()> {
        let Some((key, value)) = assignment.split_once('=') else {
            bail!("Expected KEY=VALUE, got '{}'", assignment);
        };
        if key.trim().is_empty() {
            bail!("Missing option key in '{}'", assignment);
        }
        self.insert(key, value.trim());
        Ok(())
    }

    /// Overlay another set on top of this one
    pub fn merge(&mut self, other: OptionSet) {
        self.values.extend(other.values);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl OptionLookup for OptionSet {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OptionSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn flatten_table(
    prefix: &str,
    table: &toml::Table,
    out: &mut BTreeMap<String, String>,
) -> Result<()> {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            toml::Value::Table(inner) => flatten_table(&full_key, inner, out)?,
            toml::Value::Array(items) => {
                let parts = items
                    .iter()
                    .map(|item| {
                        scalar_to_string(item)
                            .with_context(|| format!("Unsupported array item in '{}'", full_key))
                    })
                    .collect::<Result<Vec<_>>>()?;
                out.insert(full_key, parts.join(";"));
            }
            scalar => {
                let text = scalar_to_string(scalar)
                    .with_context(|| format!("Unsupported value for '{}'", full_key))?;
                out.insert(full_key, text);
            }
        }
    }

    Ok(())
}

fn scalar_to_string(value: &toml::Value) -> Result<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Datetime(d) => Ok(d.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => bail!("expected a scalar value"),
    }
}
