//! Line collection across all input headers

use amalgam_filter::{
    classify_line, next_conditional_state, split_lines, LineAction, LineFilterRules,
};
use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::config::ConditionalScope;

/// Marker comment framing each header's content
pub fn file_marker(name: &str) -> String {
    format!("// --- {} --- //", name)
}

/// Output of collecting every input header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collected {
    /// Content lines, framed per file by marker comments
    pub content: Vec<String>,
    /// Unique include directives, sorted
    pub includes: BTreeSet<String>,
    /// Headers that ended inside an open conditional block
    pub leaked_conditionals: Vec<String>,
}

/// Per-file line counts, for logging
#[derive(Debug, Default, Clone, Copy)]
struct FileStats {
    kept: usize,
    includes: usize,
    stripped: usize,
}

/// Collects filtered lines, one header at a time
///
/// Owns the "inside conditional block" flag for the run. With
/// [`ConditionalScope::Run`] the flag carries over file boundaries.
pub struct Collector<'a> {
    rules: &'a LineFilterRules,
    scope: ConditionalScope,
    inside_conditional: bool,
    collected: Collected,
}

impl<'a> Collector<'a> {
    pub fn new(rules: &'a LineFilterRules, scope: ConditionalScope) -> Self {
        Self {
            rules,
            scope,
            inside_conditional: false,
            collected: Collected::default(),
        }
    }

    /// Current value of the conditional flag
    pub fn inside_conditional(&self) -> bool {
        self.inside_conditional
    }

    /// Filter one header's text and append it
    pub fn add_file(&mut self, name: &str, text: &str) {
        if self.scope == ConditionalScope::File {
            self.inside_conditional = false;
        }

        let mut stats = FileStats::default();
        let marker = file_marker(name);
        self.collected.content.push(marker.clone());

        for line in split_lines(text) {
            let action = classify_line(line, self.inside_conditional, self.rules);
            match &action {
                LineAction::CollectInclude => {
                    self.collected.includes.insert(line.to_string());
                    stats.includes += 1;
                }
                a if a.keeps_line() => {
                    self.collected.content.push(line.to_string());
                    stats.kept += 1;
                }
                LineAction::Strip(_) => stats.stripped += 1,
                _ => {}
            }
            self.inside_conditional = next_conditional_state(self.inside_conditional, &action);
        }

        // Closing marker carries its own newline: a blank line separates files.
        self.collected.content.push(format!("{}\n", marker));

        debug!(
            file = name,
            kept = stats.kept,
            includes = stats.includes,
            stripped = stats.stripped,
            "Collected header"
        );

        if self.inside_conditional {
            warn!(
                file = name,
                scope = ?self.scope,
                "Header ends inside an open conditional block"
            );
            self.collected.leaked_conditionals.push(name.to_string());
        }
    }

    pub fn finish(self) -> Collected {
        self.collected
    }
}
