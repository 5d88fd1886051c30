//! Name comparison modes and the name set built on top of them.

use std::borrow::Cow;
use std::collections::HashSet;

/// How region names are compared against allowed names and patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameComparer {
    /// Exact, code point by code point
    Ordinal,
    /// Code point comparison after simple (one-to-one) upper-casing
    OrdinalIgnoreCase,
}

impl NameComparer {
    pub fn from_case_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            NameComparer::Ordinal
        } else {
            NameComparer::OrdinalIgnoreCase
        }
    }

    /// Canonical form of `name` under this comparer
    pub fn key<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            NameComparer::Ordinal => Cow::Borrowed(name),
            NameComparer::OrdinalIgnoreCase => Cow::Owned(name.chars().map(simple_upper).collect()),
        }
    }
}

/// Upper-case one char, leaving it alone when the mapping expands (`ß` -> `SS`)
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Set of names that answers membership through a `NameComparer`
#[derive(Debug, Clone)]
pub struct NameSet {
    comparer: NameComparer,
    keys: HashSet<String>,
}

impl NameSet {
    pub fn new<'a>(comparer: NameComparer, names: impl IntoIterator<Item = &'a str>) -> Self {
        let keys = names
            .into_iter()
            .map(|name| comparer.key(name).into_owned())
            .collect();

        Self { comparer, keys }
    }

    pub fn contains(&self, name: &str) -> bool {
        let key = self.comparer.key(name);
        self.keys.contains(&*key)
    }

    pub fn comparer(&self) -> NameComparer {
        self.comparer
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
