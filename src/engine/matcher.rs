//! Match resolver: finds the rule whose pattern ends the text before the
//! trigger, skipping hits that are glued to a preceding word character.

use super::rules::{Rule, RuleTable};
use crate::util::{char_len, is_word_char};

/// A rule that matched, and the column where its pattern starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    pub rule: &'a Rule,
    pub start_column: usize,
}

/// Scan `table` in order and return the first acceptable suffix match
///
/// `text_before` is the line up to, not including, the trigger character.
/// A suffix preceded by an alphanumeric or `_` is rejected and the scan moves
/// on to the next (shorter) rule.
pub fn resolve<'a>(text_before: &str, table: &'a RuleTable) -> Option<RuleMatch<'a>> {
    for rule in table.iter() {
        let Some(prefix) = text_before.strip_suffix(rule.pattern.as_str()) else {
            continue;
        };

        if let Some(preceding) = prefix.chars().next_back() {
            if is_word_char(preceding) {
                tracing::trace!(
                    pattern = %rule.pattern,
                    preceding = %preceding,
                    "suffix match inside a word, skipping"
                );
                continue;
            }
        }

        return Some(RuleMatch {
            rule,
            start_column: char_len(prefix),
        });
    }
    None
}
