//! Per-line decision types.

use crate::rules::StripRule;
use serde::{Deserialize, Serialize};

/// What the bundler does with one input line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "detail")]
pub enum LineAction {
    /// Include directive moved to the deduplicated include block.
    #[serde(rename = "COLLECT_INCLUDE")]
    CollectInclude,

    /// Dropped by a strip rule.
    #[serde(rename = "STRIP")]
    Strip(StripRule),

    /// Conditional block opener, kept in content.
    #[serde(rename = "OPEN_CONDITIONAL")]
    OpenConditional,

    /// Conditional block closer, kept in content.
    #[serde(rename = "CLOSE_CONDITIONAL")]
    CloseConditional,

    /// Ordinary line kept in content.
    #[serde(rename = "KEEP")]
    Keep,

    /// Empty line, dropped.
    #[serde(rename = "DROP_EMPTY")]
    DropEmpty,
}

impl LineAction {
    /// Whether the line ends up in the content section.
    pub fn keeps_line(&self) -> bool {
        matches!(
            self,
            LineAction::OpenConditional | LineAction::CloseConditional | LineAction::Keep
        )
    }

    /// Short machine-readable code.
    pub fn to_code(&self) -> String {
        match self {
            LineAction::CollectInclude => "COLLECT_INCLUDE".to_string(),
            LineAction::Strip(StripRule::Contains(p)) => format!("STRIP:contains:{}", p),
            LineAction::Strip(StripRule::StartsWith(p)) => format!("STRIP:starts_with:{}", p),
            LineAction::Strip(StripRule::Exact(p)) => format!("STRIP:exact:{:?}", p),
            LineAction::OpenConditional => "OPEN_CONDITIONAL".to_string(),
            LineAction::CloseConditional => "CLOSE_CONDITIONAL".to_string(),
            LineAction::Keep => "KEEP".to_string(),
            LineAction::DropEmpty => "DROP_EMPTY".to_string(),
        }
    }
}
