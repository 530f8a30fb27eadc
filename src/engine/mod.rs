//! Live substitution engine
//!
//! Watches single-character insertions and, when the text before a trigger
//! character ends with a configured typo, replaces it with the correction.
//!
//! # Pipeline
//!
//! ```text
//! ChangeEvent → trigger::check → RuleTable::build → matcher::resolve
//!             → planner::plan → apply::apply (under the busy guard)
//! ```
//!
//! Each step before `apply` is pure and works on a snapshot of the trigger
//! line, so the document is only touched inside the guarded edit.

pub mod apply;
pub mod host;
pub mod matcher;
pub mod planner;
pub mod rules;
pub mod session;
pub mod trigger;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

pub use apply::{ApplyError, Substitution};
pub use host::{ChangeEvent, ChangeListener, DocumentId, EditError, EditorHost, TextChange, TextEdit};
pub use matcher::RuleMatch;
pub use planner::{CursorOffset, SubstitutionPlan, CURSOR_PLACEHOLDER};
pub use rules::{Rule, RuleTable};
pub use session::{BusyGuard, SessionState};
pub use trigger::{SkipReason, Trigger, TriggerSet};

use crate::position::{Position, TextRange};
use crate::util::{leading_whitespace, prefix_chars};

/// Language id used when the host cannot name one
pub const FALLBACK_LANGUAGE: &str = "plaintext";

pub const INDICATOR_ON: &str = "⚡ AutoCorrect";
pub const INDICATOR_OFF: &str = "⊘ AutoCorrect";
pub const TOOLTIP_ON: &str = "AutoCorrect is on (click to turn off)";
pub const TOOLTIP_OFF: &str = "AutoCorrect is off (click to turn on)";
pub const TOGGLE_MESSAGE_DURATION: Duration = Duration::from_millis(2000);

/// What happened to one change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skipped(SkipReason),
    NoMatch,
    Applied { pattern: String, cursor: Position },
    Failed(ApplyError),
}

/// The substitution engine for one host session
#[derive(Debug, Default)]
pub struct Engine {
    session: SessionState,
}

impl Engine {
    pub fn new(enabled: bool) -> Self {
        Self {
            session: SessionState::new(enabled),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn is_enabled(&self) -> bool {
        self.session.is_enabled()
    }

    /// Push the current on/off state to the host's indicator
    pub fn sync_indicator(&self, host: &mut dyn EditorHost) {
        if self.session.is_enabled() {
            host.set_indicator(INDICATOR_ON, TOOLTIP_ON);
        } else {
            host.set_indicator(INDICATOR_OFF, TOOLTIP_OFF);
        }
    }

    /// The toggle command: flip the enabled flag and tell the user
    pub fn toggle(&self, host: &mut dyn EditorHost) -> bool {
        let enabled = self.session.toggle();
        tracing::info!(enabled, "autocorrect toggled");
        self.sync_indicator(host);
        let message = if enabled {
            "AutoCorrect enabled"
        } else {
            "AutoCorrect disabled"
        };
        host.show_status_message(message.to_string(), TOGGLE_MESSAGE_DURATION);
        enabled
    }

    /// Run the whole pipeline for one change notification
    pub fn handle_change(&self, event: &ChangeEvent, host: &mut dyn EditorHost) -> Outcome {
        let substitution = match self.prepare(event, host) {
            Ok(Some(substitution)) => substitution,
            Ok(None) => return Outcome::NoMatch,
            Err(reason) => {
                tracing::trace!(reason = reason.as_str(), "autocorrect skip");
                return Outcome::Skipped(reason);
            }
        };

        tracing::debug!(
            pattern = %substitution.pattern,
            range_start = %substitution.range.start,
            multiline = substitution.plan.is_multiline(),
            "applying substitution"
        );

        match apply::apply(host, &self.session, &substitution) {
            Ok(cursor) => Outcome::Applied {
                pattern: substitution.pattern,
                cursor,
            },
            Err(err) => {
                tracing::warn!(pattern = %substitution.pattern, error = %err, "substitution not applied");
                Outcome::Failed(err)
            }
        }
    }

    /// Filter, match and plan against a snapshot of the trigger line
    fn prepare(
        &self,
        event: &ChangeEvent,
        host: &dyn EditorHost,
    ) -> Result<Option<Substitution>, SkipReason> {
        let config = host.configuration();
        let triggers = TriggerSet::from_config(&config.trigger_chars);
        let trigger = trigger::check(event, &self.session, &triggers, host.active_document())?;

        let line = host
            .line_text(trigger.document, trigger.position.line)
            .ok_or(SkipReason::LineUnavailable)?;
        let version = host
            .document_version(trigger.document)
            .ok_or(SkipReason::LineUnavailable)?;
        let language = host
            .document_language(trigger.document)
            .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());

        let text_before = prefix_chars(&line, trigger.position.column);
        let table = RuleTable::build(&config.language_specific, &language);
        let Some(found) = matcher::resolve(text_before, &table) else {
            return Ok(None);
        };

        // Continuation lines follow the trigger line's own indentation, even
        // when the pattern itself starts inside it
        let indentation = leading_whitespace(text_before);
        let plan = planner::plan(&found.rule.replacement, trigger.ch, indentation);
        let start = Position::new(trigger.position.line, found.start_column);

        Ok(Some(Substitution {
            document: trigger.document,
            range: TextRange::new(start, trigger.position),
            plan,
            pattern: found.rule.pattern.clone(),
            replacement: found.rule.replacement.clone(),
            version,
        }))
    }
}

impl ChangeListener for Engine {
    fn on_document_change(&self, event: &ChangeEvent, host: &mut dyn EditorHost) {
        self.handle_change(event, host);
    }
}
