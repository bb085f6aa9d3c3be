//! Line filter rules and classification for single-header bundling.
//!
//! Every input line is classified in isolation against the rule sets and a
//! single "inside conditional block" flag owned by the caller, producing a
//! [`LineAction`].

mod action;
mod directive;
mod lines;
mod rules;

pub use action::LineAction;
pub use directive::{
    Directive, CONDITIONAL_CLOSE_PREFIX, CONDITIONAL_OPEN_PREFIX, INCLUDE_PREFIX,
};
pub use lines::{split_lines, Lines};
pub use rules::{LineFilterRules, RuleError, StripRule};

/// Classify one line (trailing newline already removed).
///
/// Decision order:
/// 1. include directive outside a conditional block is collected;
/// 2. a strip rule drops the line;
/// 3. conditional opener / closer is kept and toggles the flag;
/// 4. a non-empty line is kept, an empty one dropped.
///
/// An include inside a conditional block falls through to the later steps
/// and is normally kept in place.
pub fn classify_line(line: &str, inside_conditional: bool, rules: &LineFilterRules) -> LineAction {
    let directive = Directive::of(line);

    if directive == Directive::Include && !inside_conditional {
        return LineAction::CollectInclude;
    }

    if let Some(rule) = rules.matching_rule(line) {
        return LineAction::Strip(rule);
    }

    match directive {
        Directive::ConditionalOpen => LineAction::OpenConditional,
        Directive::ConditionalClose => LineAction::CloseConditional,
        _ if line.is_empty() => LineAction::DropEmpty,
        _ => LineAction::Keep,
    }
}

/// Apply an action to the conditional flag.
pub fn next_conditional_state(inside_conditional: bool, action: &LineAction) -> bool {
    match action {
        LineAction::OpenConditional => true,
        LineAction::CloseConditional => false,
        _ => inside_conditional,
    }
}
