pub mod bulk;
pub mod expand;
pub mod paired;

use std::borrow::Cow;

use super::PLACEHOLDER;
use crate::Value;

/// A finished statement: SQL text with `?` markers and one argument per marker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub sql: String,
    pub args: Vec<Value>,
}

/// Placeholder tuples for the common row widths, indexed by arity - 1.
const BIND_PARAMETER_PATTERNS: [&str; 9] = [
    "(?)",
    "(?, ?)",
    "(?, ?, ?)",
    "(?, ?, ?, ?)",
    "(?, ?, ?, ?, ?)",
    "(?, ?, ?, ?, ?, ?)",
    "(?, ?, ?, ?, ?, ?, ?)",
    "(?, ?, ?, ?, ?, ?, ?, ?)",
    "(?, ?, ?, ?, ?, ?, ?, ?, ?)",
];

/// Returns `(?, ?, ..., ?)` with `arity` markers.
///
/// Arity 0 yields `()`.
pub fn placeholder_pattern(arity: usize) -> Cow<'static, str> {
    match arity.checked_sub(1).and_then(|i| BIND_PARAMETER_PATTERNS.get(i)) {
        Some(pattern) => Cow::Borrowed(pattern),
        None => Cow::Owned(generate_placeholder_pattern(arity)),
    }
}

/// Builds the placeholder tuple for any arity without the lookup table.
pub fn generate_placeholder_pattern(arity: usize) -> String {
    format!("({})", placeholder_list(arity))
}

/// `?, ?, ?` without the surrounding parentheses.
pub(crate) fn placeholder_list(count: usize) -> String {
    vec![PLACEHOLDER; count].join(", ")
}

/// Checks every row against the arity of the first one.
pub(crate) fn check_arity(rows: &[Vec<Value>]) -> crate::Result<usize> {
    let arity = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != arity) {
        return Err(crate::Error::ArityMismatch);
    }
    Ok(arity)
}
