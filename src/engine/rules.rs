//! Rule table: the merged, longest-first list of substitutions for one
//! language.

use crate::config::{LanguageRules, WILDCARD_SCOPE};
use crate::util::char_len;

/// A single typo -> correction substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Literal text that must end the line before the trigger (never a regex)
    pub pattern: String,
    /// Replacement template; may span lines and contain one `$1`
    pub replacement: String,
}

impl Rule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Rules ordered by descending pattern length
///
/// Scanning in this order makes the first hit the longest one, so `cin`
/// always beats `in` without any backtracking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Merge the wildcard scope with `language`'s scope and sort
    ///
    /// Language-specific entries replace wildcard entries with the same
    /// pattern. Empty patterns are dropped.
    pub fn build(language_specific: &LanguageRules, language: &str) -> Self {
        let mut merged = language_specific
            .get(WILDCARD_SCOPE)
            .cloned()
            .unwrap_or_default();

        if language != WILDCARD_SCOPE {
            if let Some(scope) = language_specific.get(language) {
                merged.extend(scope.iter().map(|(p, r)| (p.clone(), r.clone())));
            }
        }

        let table = Self::from_rules(merged.into_iter().map(|(p, r)| Rule::new(p, r)));
        tracing::trace!(language, rules = table.len(), "built rule table");
        table
    }

    /// Sort arbitrary rules into match order
    ///
    /// The sort is stable, so equal-length patterns keep their input order.
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut rules: Vec<Rule> = rules.into_iter().filter(|r| !r.pattern.is_empty()).collect();
        rules.sort_by_key(|r| std::cmp::Reverse(char_len(&r.pattern)));
        Self { rules }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up the rule for an exact pattern
    pub fn get(&self, pattern: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.pattern == pattern)
    }
}
