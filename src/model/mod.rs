//! Application model - the complete state of the editor session
//!
//! `AppModel` is a headless host for the substitution engine: it owns one
//! document and its view, implements [`EditorHost`], and reports every
//! buffer mutation to its change listeners before the mutating call returns.

pub mod document;
pub mod language;
pub mod status_bar;
pub mod ui;
pub mod view;

pub use document::{Document, EditOperation};
pub use language::{language_from_extension, language_from_path, PLAIN_TEXT};
pub use status_bar::{
    sync_status_bar, RenderedSegment, SegmentContent, SegmentId, SegmentPosition, StatusBar,
    StatusBarLayout, StatusSegment, TransientMessage,
};
pub use ui::UiState;
pub use view::{Annotation, EditorView, Viewport};

use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::config::AutocorrectConfig;
use crate::engine::{
    ChangeEvent, ChangeListener, DocumentId, EditError, EditorHost, Engine, TextChange, TextEdit,
};
use crate::messages::Direction;
use crate::position::{Position, TextRange};
use crate::util::char_len;

/// The complete application model
pub struct AppModel {
    /// The document being edited
    pub document: Document,
    /// Cursor, viewport and annotations for the document
    pub view: EditorView,
    /// UI state (status bar, transient message)
    pub ui: UiState,
    /// Configuration handed to the engine on every event
    pub config: AutocorrectConfig,
    /// Where `config` was loaded from, for reloading
    pub config_path: Option<PathBuf>,
    /// The substitution engine; also registered as a listener
    pub engine: Rc<Engine>,
    listeners: Vec<Rc<dyn ChangeListener>>,
}

impl std::fmt::Debug for AppModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppModel")
            .field("document", &self.document.id)
            .field("view", &self.view)
            .field("config", &self.config)
            .field("config_path", &self.config_path)
            .field("engine", &self.engine)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl AppModel {
    /// Create a model editing `document`, with the engine attached
    pub fn new(document: Document, config: AutocorrectConfig) -> Self {
        let engine = Rc::new(Engine::new(config.enabled));
        let view = EditorView::new(document.id);
        let listener: Rc<dyn ChangeListener> = engine.clone();

        let mut model = Self {
            document,
            view,
            ui: UiState::new(),
            config,
            config_path: None,
            engine,
            listeners: vec![listener],
        };
        model.sync_indicator();
        sync_status_bar(&mut model);
        model
    }

    /// Remember where the configuration came from (builder pattern)
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Register another change listener
    pub fn add_listener(&mut self, listener: Rc<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    /// Deliver a change notification to every listener, in registration order
    ///
    /// Listeners receive the model as their host and may edit it, which
    /// notifies again before this returns.
    fn notify(&mut self, event: ChangeEvent) {
        let listeners = self.listeners.clone();
        for listener in listeners {
            listener.on_document_change(&event, self);
        }
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert `text` at the cursor as the user would type it
    pub fn insert_text(&mut self, text: &str) -> Result<(), EditError> {
        let at = self.view.cursor;
        let start = self
            .document
            .position_to_offset(at)
            .ok_or(EditError::RangeOutOfBounds(TextRange::point(at)))?;
        let change = self.document.replace(TextRange::point(at), text)?;

        self.move_cursor_to(self.document.offset_to_position(start + char_len(text)));
        self.notify(ChangeEvent::single(self.document.id, change));
        Ok(())
    }

    pub fn insert_char(&mut self, ch: char) -> Result<(), EditError> {
        let mut buf = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut buf))
    }

    /// Delete the character before the cursor (joins lines at column 0)
    pub fn delete_backward(&mut self) -> Result<(), EditError> {
        let end = self.view.cursor;
        let Some(offset) = self.document.position_to_offset(end) else {
            return Err(EditError::RangeOutOfBounds(TextRange::point(end)));
        };
        if offset == 0 {
            return Ok(());
        }

        let start = self.document.offset_to_position(offset - 1);
        let change = self.document.replace(TextRange::new(start, end), "")?;
        self.move_cursor_to(start);
        self.notify(ChangeEvent::single(self.document.id, change));
        Ok(())
    }

    /// Revert the last edit
    ///
    /// History replays are not reported to listeners, so undoing a
    /// correction never re-triggers it.
    pub fn undo(&mut self) -> bool {
        match self.document.undo() {
            Some((_, cursor)) => {
                self.move_cursor_to(cursor);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.document.redo() {
            Some((_, cursor)) => {
                self.move_cursor_to(cursor);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    pub fn move_cursor_to(&mut self, pos: Position) {
        self.view.cursor = pos;
        self.view.viewport.reveal(pos);
    }

    /// Move one step, wrapping across line ends horizontally and clamping
    /// the column vertically
    pub fn move_cursor(&mut self, direction: Direction) {
        let Position { line, column } = self.view.cursor;
        let last_line = self.document.line_count().saturating_sub(1);

        let target = match direction {
            Direction::Left if column > 0 => Position::new(line, column - 1),
            Direction::Left if line > 0 => {
                Position::new(line - 1, self.document.line_length(line - 1))
            }
            Direction::Right if column < self.document.line_length(line) => {
                Position::new(line, column + 1)
            }
            Direction::Right if line < last_line => Position::new(line + 1, 0),
            Direction::Up if line > 0 => {
                Position::new(line - 1, column.min(self.document.line_length(line - 1)))
            }
            Direction::Down if line < last_line => {
                Position::new(line + 1, column.min(self.document.line_length(line + 1)))
            }
            _ => self.view.cursor,
        };
        self.move_cursor_to(target);
    }

    pub fn move_cursor_line_end(&mut self) {
        let line = self.view.cursor.line;
        self.move_cursor_to(Position::new(line, self.document.line_length(line)));
    }

    pub fn move_cursor_document_end(&mut self) {
        let end = self.document.offset_to_position(self.document.buffer.len_chars());
        self.move_cursor_to(end);
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Flip autocorrect on or off, returning the new state
    pub fn toggle_autocorrect(&mut self) -> bool {
        let engine = Rc::clone(&self.engine);
        engine.toggle(self)
    }

    /// Push the engine's current state to the status bar indicator
    pub fn sync_indicator(&mut self) {
        let engine = Rc::clone(&self.engine);
        engine.sync_indicator(self);
    }

    /// Re-read the configuration file, if the model has one
    ///
    /// The session's on/off state is left alone; it belongs to the toggle.
    pub fn reload_config(&mut self) -> bool {
        let Some(path) = self.config_path.clone() else {
            tracing::debug!("No config path to reload from");
            return false;
        };
        self.config = AutocorrectConfig::load_from(&path);
        self.ui
            .set_transient("Configuration reloaded", Duration::from_millis(2000));
        true
    }

    /// Expire annotations and status messages
    /// Returns true if anything disappeared (needs redraw)
    pub fn tick(&mut self, now: Instant) -> bool {
        let annotations = self.view.expire_annotations(now);
        let message = self.ui.expire_transient(now);
        annotations || message
    }

    /// Current transient status text, if any
    pub fn status_text(&self) -> Option<&str> {
        self.ui.transient_text()
    }

    /// Text and tooltip of the autocorrect indicator
    pub fn indicator(&self) -> (&str, Option<&str>) {
        let segment = self.ui.status_bar.get_segment(SegmentId::Autocorrect);
        (
            segment.map(|s| s.content.display_text()).unwrap_or(""),
            segment.and_then(|s| s.tooltip.as_deref()),
        )
    }

    /// Whole buffer as a string
    pub fn text(&self) -> String {
        self.document.buffer.to_string()
    }
}

impl EditorHost for AppModel {
    fn configuration(&self) -> &AutocorrectConfig {
        &self.config
    }

    fn active_document(&self) -> Option<DocumentId> {
        Some(self.view.document_id)
    }

    fn document_language(&self, document: DocumentId) -> Option<String> {
        (document == self.document.id).then(|| self.document.language.clone())
    }

    fn document_version(&self, document: DocumentId) -> Option<u64> {
        (document == self.document.id).then_some(self.document.version)
    }

    fn line_text(&self, document: DocumentId, line: usize) -> Option<String> {
        if document != self.document.id {
            return None;
        }
        self.document.line_text(line).map(|l| l.into_owned())
    }

    fn apply_edit(&mut self, edit: &TextEdit) -> Result<(), EditError> {
        if edit.document != self.document.id {
            return Err(EditError::DocumentNotFound(edit.document));
        }
        if edit.version != self.document.version {
            return Err(EditError::VersionMismatch {
                expected: edit.version,
                actual: self.document.version,
            });
        }

        let change: TextChange = self.document.replace(edit.range, &edit.text)?;
        self.notify(ChangeEvent::single(edit.document, change));
        Ok(())
    }

    fn set_cursor(&mut self, pos: Position) {
        self.view.cursor = pos;
    }

    fn reveal(&mut self, pos: Position) {
        self.view.viewport.reveal(pos);
    }

    fn show_annotation(&mut self, pos: Position, label: &str, duration: Duration) {
        self.view
            .add_annotation(Annotation::new(pos, label, duration));
    }

    fn clear_annotations(&mut self) {
        self.view.clear_annotations();
    }

    fn show_status_message(&mut self, text: String, duration: Duration) {
        self.ui.set_transient(text, duration);
    }

    fn set_indicator(&mut self, text: &str, tooltip: &str) {
        let bar = &mut self.ui.status_bar;
        bar.update_segment(SegmentId::Autocorrect, SegmentContent::Text(text.to_string()));
        bar.set_tooltip(SegmentId::Autocorrect, tooltip);
    }
}
