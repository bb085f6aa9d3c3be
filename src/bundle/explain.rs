//! Explain output for line decisions
//!
//! Shows what the bundler does with every line of a single header, for
//! diagnosing why a line disappears or an include stays in place.

use amalgam_filter::{
    classify_line, next_conditional_state, split_lines, LineAction, LineFilterRules,
};
use serde::{Deserialize, Serialize};

/// Decision for one line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainedLine {
    /// 1-based line number
    pub line_no: usize,
    pub text: String,
    /// Flag value before this line was classified
    pub inside_conditional: bool,
    pub action: LineAction,
}

/// Explanation of one header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainOutput {
    pub file: String,
    pub lines: Vec<ExplainedLine>,
    /// Flag value after the last line
    pub ends_inside_conditional: bool,
}

impl ExplainOutput {
    /// Classify every line of `text`, starting with the flag cleared
    pub fn explain(file: &str, text: &str, rules: &LineFilterRules) -> Self {
        let mut inside = false;
        let mut lines = Vec::new();

        for (idx, line) in split_lines(text).enumerate() {
            let action = classify_line(line, inside, rules);
            let next = next_conditional_state(inside, &action);
            lines.push(ExplainedLine {
                line_no: idx + 1,
                text: line.to_string(),
                inside_conditional: inside,
                action,
            });
            inside = next;
        }

        Self {
            file: file.to_string(),
            lines,
            ends_inside_conditional: inside,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// One line per input line: number, decision code, text
    pub fn to_human(&self) -> String {
        let mut out = format!("{}:\n", self.file);
        for line in &self.lines {
            let marker = if line.inside_conditional { '|' } else { ' ' };
            out.push_str(&format!(
                "{:>5} {} {:<24} {}\n",
                line.line_no,
                marker,
                line.action.to_code(),
                line.text
            ));
        }
        if self.ends_inside_conditional {
            out.push_str("warning: file ends inside an open conditional block\n");
        }
        out
    }
}
