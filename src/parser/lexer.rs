//! Directive Lexer
//!
//! Classifies a single source line as a region directive or not.
//! No position tracking beyond the line, no multi-line state.

/// Kind of preprocessor-style directive found on a line
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    /// `#region <name>`; name is trimmed and may be empty
    RegionStart { name: &'a str, column: usize },
    /// `#endregion [<label>]`
    RegionEnd,
    /// Anything else
    Other,
}

const REGION_KEYWORD: &str = "#region";
const END_REGION_KEYWORD: &str = "#endregion";

/// Classify one line of source text
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim_start();
    let column = line[..line.len() - trimmed.len()].chars().count() + 1;

    if let Some(rest) = keyword_rest(trimmed, REGION_KEYWORD) {
        LineKind::RegionStart {
            name: rest.trim(),
            column,
        }
    } else if keyword_rest(trimmed, END_REGION_KEYWORD).is_some() {
        LineKind::RegionEnd
    } else {
        LineKind::Other
    }
}

/// Text after `keyword` when the keyword stands alone as a token
fn keyword_rest<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(keyword)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest),
        Some(_) => None,
    }
}
