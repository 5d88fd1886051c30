//! Region Directive Scanner
//!
//! Minimal host-side extraction of `#region` directives from source text,
//! used by the command line tool. The rule engine never parses source
//! itself; it only sees the names and locations produced here.

pub mod lexer;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

pub use lexer::{LineKind, classify_line};

/// Where a region directive was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub path: PathBuf,
    /// 1-based line number
    pub line: usize,
    /// 1-based column of the `#`
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path.display(), self.line, self.column)
    }
}

/// A `#region` directive and its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionDirective {
    pub name: String,
    pub line: usize,
    pub column: usize,
}

impl RegionDirective {
    pub fn location(&self, path: impl Into<PathBuf>) -> SourceLocation {
        SourceLocation {
            path: path.into(),
            line: self.line,
            column: self.column,
        }
    }
}

/// Find every `#region` directive in `text`, in source order
pub fn scan_regions(text: &str) -> Vec<RegionDirective> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| match classify_line(line) {
            LineKind::RegionStart { name, column } => Some(RegionDirective {
                name: name.to_string(),
                line: idx + 1,
                column,
            }),
            LineKind::RegionEnd | LineKind::Other => None,
        })
        .collect()
}
