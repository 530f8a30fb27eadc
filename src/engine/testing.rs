//! In-memory host used by the engine's unit tests.

use std::rc::Rc;
use std::time::Duration;

use super::host::{DocumentId, EditError, EditorHost, TextEdit};
use super::session::SessionState;
use crate::config::AutocorrectConfig;
use crate::position::Position;

/// Host method invocations, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    ApplyEdit,
    SetCursor,
    Reveal,
    ShowAnnotation,
    ClearAnnotations,
    ShowStatus,
    SetIndicator,
}

#[derive(Debug)]
pub struct FakeHost {
    pub config: AutocorrectConfig,
    pub language: String,
    pub lines: Vec<String>,
    pub version: u64,
    pub active: Option<DocumentId>,
    pub cursor: Option<Position>,
    pub revealed: Option<Position>,
    pub annotations: Vec<(Position, String)>,
    pub status: Option<String>,
    pub indicator: Option<(String, String)>,
    pub reject_edits: Option<EditError>,
    pub watch_session: Option<Rc<SessionState>>,
    pub busy_during_edit: Option<bool>,
    pub calls: Vec<HostCall>,
}

impl FakeHost {
    pub const DOC: DocumentId = DocumentId(7);

    pub fn with_lines(lines: &[&str]) -> Self {
        Self {
            config: AutocorrectConfig::default(),
            language: "plaintext".to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
            version: 0,
            active: Some(Self::DOC),
            cursor: None,
            revealed: None,
            annotations: Vec::new(),
            status: None,
            indicator: None,
            reject_edits: None,
            watch_session: None,
            busy_during_edit: None,
            calls: Vec::new(),
        }
    }

    pub fn with_rules(mut self, scope: &str, rules: &[(&str, &str)]) -> Self {
        self.config.language_specific.insert(
            scope.to_string(),
            rules
                .iter()
                .map(|(p, r)| (p.to_string(), r.to_string()))
                .collect(),
        );
        self
    }

    fn char_offset(&self, pos: Position) -> Option<usize> {
        let line = self.lines.get(pos.line)?;
        if pos.column > line.chars().count() {
            return None;
        }
        let before: usize = self.lines[..pos.line]
            .iter()
            .map(|l| l.chars().count() + 1)
            .sum();
        Some(before + pos.column)
    }
}

impl EditorHost for FakeHost {
    fn configuration(&self) -> &AutocorrectConfig {
        &self.config
    }

    fn active_document(&self) -> Option<DocumentId> {
        self.active
    }

    fn document_language(&self, document: DocumentId) -> Option<String> {
        (document == Self::DOC).then(|| self.language.clone())
    }

    fn document_version(&self, document: DocumentId) -> Option<u64> {
        (document == Self::DOC).then_some(self.version)
    }

    fn line_text(&self, document: DocumentId, line: usize) -> Option<String> {
        if document != Self::DOC {
            return None;
        }
        self.lines.get(line).cloned()
    }

    fn apply_edit(&mut self, edit: &TextEdit) -> Result<(), EditError> {
        self.calls.push(HostCall::ApplyEdit);
        self.busy_during_edit = self.watch_session.as_ref().map(|s| s.is_busy());

        if let Some(err) = self.reject_edits.clone() {
            return Err(err);
        }
        if edit.document != Self::DOC {
            return Err(EditError::DocumentNotFound(edit.document));
        }
        if edit.version != self.version {
            return Err(EditError::VersionMismatch {
                expected: edit.version,
                actual: self.version,
            });
        }
        let (Some(start), Some(end)) = (
            self.char_offset(edit.range.start),
            self.char_offset(edit.range.end),
        ) else {
            return Err(EditError::RangeOutOfBounds(edit.range));
        };

        let mut chars: Vec<char> = self.lines.join("\n").chars().collect();
        chars.splice(start..end, edit.text.chars());
        let text: String = chars.into_iter().collect();
        self.lines = text.split('\n').map(str::to_string).collect();
        self.version += 1;
        Ok(())
    }

    fn set_cursor(&mut self, pos: Position) {
        self.calls.push(HostCall::SetCursor);
        self.cursor = Some(pos);
    }

    fn reveal(&mut self, pos: Position) {
        self.calls.push(HostCall::Reveal);
        self.revealed = Some(pos);
    }

    fn show_annotation(&mut self, pos: Position, label: &str, _duration: Duration) {
        self.calls.push(HostCall::ShowAnnotation);
        self.annotations.push((pos, label.to_string()));
    }

    fn clear_annotations(&mut self) {
        self.calls.push(HostCall::ClearAnnotations);
        self.annotations.clear();
    }

    fn show_status_message(&mut self, text: String, _duration: Duration) {
        self.calls.push(HostCall::ShowStatus);
        self.status = Some(text);
    }

    fn set_indicator(&mut self, text: &str, tooltip: &str) {
        self.calls.push(HostCall::SetIndicator);
        self.indicator = Some((text.to_string(), tooltip.to_string()));
    }
}
