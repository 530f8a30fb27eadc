//! Trigger filter: decides whether a change notification is worth a match
//! attempt at all.

use std::collections::HashSet;

use super::host::{ChangeEvent, DocumentId};
use super::session::SessionState;
use crate::position::Position;

/// Characters whose insertion may start a substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSet {
    chars: HashSet<char>,
}

impl TriggerSet {
    /// Build from configured entries; anything that isn't exactly one char is ignored
    pub fn from_config(entries: &[String]) -> Self {
        let chars = entries
            .iter()
            .filter_map(|entry| {
                let mut chars = entry.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(ch),
                    _ => None,
                }
            })
            .collect();
        Self { chars }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl FromIterator<char> for TriggerSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

/// Why an event was not considered for substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Disabled,
    Busy,
    MultipleChanges,
    NotSingleChar,
    NotTrigger,
    NoActiveView,
    LineUnavailable,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::Disabled => "disabled",
            SkipReason::Busy => "busy",
            SkipReason::MultipleChanges => "multiple_changes",
            SkipReason::NotSingleChar => "not_single_char",
            SkipReason::NotTrigger => "not_trigger",
            SkipReason::NoActiveView => "no_active_view",
            SkipReason::LineUnavailable => "line_unavailable",
        }
    }
}

/// An event that passed the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub document: DocumentId,
    /// Where the trigger character now sits
    pub position: Position,
    pub ch: char,
}

/// Gate a change notification; pure, no side effects
pub fn check(
    event: &ChangeEvent,
    session: &SessionState,
    triggers: &TriggerSet,
    active_document: Option<DocumentId>,
) -> Result<Trigger, SkipReason> {
    if !session.is_enabled() {
        return Err(SkipReason::Disabled);
    }
    if session.is_busy() {
        return Err(SkipReason::Busy);
    }

    let [change] = event.changes.as_slice() else {
        return Err(SkipReason::MultipleChanges);
    };

    let mut chars = change.text.chars();
    let ch = match (chars.next(), chars.next()) {
        (Some(ch), None) => ch,
        _ => return Err(SkipReason::NotSingleChar),
    };

    if !triggers.contains(ch) {
        return Err(SkipReason::NotTrigger);
    }

    if active_document != Some(event.document) {
        return Err(SkipReason::NoActiveView);
    }

    Ok(Trigger {
        document: event.document,
        position: change.range.start,
        ch,
    })
}
