//! Edit applicator: performs the replacement under the busy guard, then moves
//! the cursor and shows feedback.

use std::time::Duration;

use super::host::{DocumentId, EditError, EditorHost, TextEdit};
use super::planner::SubstitutionPlan;
use super::session::SessionState;
use crate::position::{Position, TextRange};

/// Hint drawn at the cursor after a multi-line expansion
pub const ANNOTATION_LABEL: &str = "Code block expanded";
pub const ANNOTATION_DURATION: Duration = Duration::from_millis(1000);
pub const STATUS_MESSAGE_DURATION: Duration = Duration::from_millis(2500);

/// Everything needed to perform one substitution, computed from a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub document: DocumentId,
    /// The matched span: pattern start up to the trigger character
    pub range: TextRange,
    pub plan: SubstitutionPlan,
    pub pattern: String,
    pub replacement: String,
    /// Document version the plan was computed against
    pub version: u64,
}

impl Substitution {
    /// Where the cursor lands once the edit is in
    pub fn cursor_target(&self) -> Position {
        self.plan.cursor.resolve(self.range.start)
    }

    fn status_message(&self) -> String {
        if self.plan.is_multiline() {
            "Expanded code block.".to_string()
        } else {
            format!("Corrected: \"{}\" -> \"{}\"", self.pattern, self.replacement)
        }
    }
}

/// Why a substitution was not applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// Another edit of ours is still in flight
    Busy,
    /// The host rejected the replacement
    Edit(EditError),
}

impl std::fmt::Display for ApplyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplyError::Busy => write!(f, "another substitution is in progress"),
            ApplyError::Edit(e) => write!(f, "edit rejected: {}", e),
        }
    }
}

impl std::error::Error for ApplyError {}

/// Replace the matched span and reposition the cursor
///
/// The busy flag is held while the host applies the edit, so the change
/// notification the edit produces is ignored. On failure nothing else
/// happens; the flag is released either way.
pub fn apply(
    host: &mut dyn EditorHost,
    session: &SessionState,
    substitution: &Substitution,
) -> Result<Position, ApplyError> {
    {
        let Some(_guard) = session.try_acquire() else {
            return Err(ApplyError::Busy);
        };

        let edit = TextEdit {
            document: substitution.document,
            range: substitution.range,
            text: substitution.plan.text.clone(),
            version: substitution.version,
        };
        host.apply_edit(&edit).map_err(ApplyError::Edit)?;
    }

    let cursor = substitution.cursor_target();
    host.set_cursor(cursor);
    host.reveal(cursor);

    if substitution.plan.is_multiline() {
        host.clear_annotations();
        host.show_annotation(cursor, ANNOTATION_LABEL, ANNOTATION_DURATION);
    }
    host.show_status_message(substitution.status_message(), STATUS_MESSAGE_DURATION);

    Ok(cursor)
}
