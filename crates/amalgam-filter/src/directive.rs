//! Preprocessor directive recognition.

use serde::{Deserialize, Serialize};

/// Prefix of an include directive.
pub const INCLUDE_PREFIX: &str = "#include";

/// Prefix that opens a conditional-compilation block.
pub const CONDITIONAL_OPEN_PREFIX: &str = "#ifdef";

/// Prefix that closes a conditional-compilation block.
pub const CONDITIONAL_CLOSE_PREFIX: &str = "#endif";

/// Directive kind of a single line.
///
/// Recognition is by literal prefix at column zero. `#ifndef`, `#if` and
/// `#else` are not conditional openers here; they pass through as plain lines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Directive {
    Include,
    ConditionalOpen,
    ConditionalClose,
    None,
}

impl Directive {
    pub fn of(line: &str) -> Self {
        if line.starts_with(INCLUDE_PREFIX) {
            Directive::Include
        } else if line.starts_with(CONDITIONAL_OPEN_PREFIX) {
            Directive::ConditionalOpen
        } else if line.starts_with(CONDITIONAL_CLOSE_PREFIX) {
            Directive::ConditionalClose
        } else {
            Directive::None
        }
    }
}
