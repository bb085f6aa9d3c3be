//! Strip rules for dropping lines from bundled output.

use serde::{Deserialize, Serialize};

/// Error types for rule validation
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RuleError {
    /// An empty substring or prefix would strip every line.
    #[error("Empty pattern in '{set}' would strip every line")]
    EmptyPattern { set: &'static str },
}

/// A single strip rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "pattern")]
pub enum StripRule {
    /// Line contains the pattern anywhere.
    #[serde(rename = "contains")]
    Contains(String),

    /// Line starts with the pattern.
    #[serde(rename = "starts_with")]
    StartsWith(String),

    /// Line is exactly the pattern.
    #[serde(rename = "exact")]
    Exact(String),
}

impl StripRule {
    /// Check whether this rule drops the given line.
    pub fn matches(&self, line: &str) -> bool {
        match self {
            StripRule::Contains(p) => line.contains(p.as_str()),
            StripRule::StartsWith(p) => line.starts_with(p.as_str()),
            StripRule::Exact(p) => line == p,
        }
    }
}

/// The three rule sets applied to every line that is not an include.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineFilterRules {
    /// Substrings that drop a line wherever they occur.
    #[serde(default)]
    pub strip_any: Vec<String>,

    /// Prefixes that drop a line.
    #[serde(default)]
    pub strip_starts: Vec<String>,

    /// Exact lines to drop.
    #[serde(default)]
    pub strip_exact: Vec<String>,
}

impl LineFilterRules {
    /// All rules in evaluation order: substrings, then prefixes, then exact.
    pub fn rules(&self) -> impl Iterator<Item = StripRule> + '_ {
        let any = self.strip_any.iter().cloned().map(StripRule::Contains);
        let starts = self.strip_starts.iter().cloned().map(StripRule::StartsWith);
        let exact = self.strip_exact.iter().cloned().map(StripRule::Exact);
        any.chain(starts).chain(exact)
    }

    /// First rule that drops `line`, if any.
    pub fn matching_rule(&self, line: &str) -> Option<StripRule> {
        if let Some(p) = self.strip_any.iter().find(|p| line.contains(p.as_str())) {
            return Some(StripRule::Contains(p.clone()));
        }
        if let Some(p) = self.strip_starts.iter().find(|p| line.starts_with(p.as_str())) {
            return Some(StripRule::StartsWith(p.clone()));
        }
        self.strip_exact
            .iter()
            .find(|p| line == p.as_str())
            .map(|p| StripRule::Exact(p.clone()))
    }

    /// Whether any rule drops `line`.
    pub fn is_stripped(&self, line: &str) -> bool {
        self.matching_rule(line).is_some()
    }

    /// Reject patterns that would match every line.
    pub fn validate(&self) -> Result<(), RuleError> {
        if self.strip_any.iter().any(|p| p.is_empty()) {
            return Err(RuleError::EmptyPattern { set: "strip_any" });
        }
        if self.strip_starts.iter().any(|p| p.is_empty()) {
            return Err(RuleError::EmptyPattern { set: "strip_starts" });
        }
        Ok(())
    }
}
