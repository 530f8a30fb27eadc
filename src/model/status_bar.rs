//! Status bar model - segments and layout
//!
//! Implements a structured, segment-based status bar. The autocorrect
//! indicator is a persistent segment; correction notices go through the
//! transient message slot.

use std::time::{Duration, Instant};

/// Identifier for status bar segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentId {
    /// File name display
    FileName,
    /// Transient status messages (e.g., "Corrected: ...")
    StatusMessage,
    /// Language id of the document (e.g., "rust")
    Language,
    /// Cursor position (e.g., "Ln 42, Col 15")
    CursorPosition,
    /// Autocorrect on/off indicator
    Autocorrect,
}

/// Position of a segment in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    Left,
    Right,
}

/// Content of a segment
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentContent {
    /// Empty/hidden segment
    Empty,
    /// Text content
    Text(String),
}

impl SegmentContent {
    /// Get the display text for this content
    pub fn display_text(&self) -> &str {
        match self {
            SegmentContent::Empty => "",
            SegmentContent::Text(s) => s,
        }
    }

    /// Check if this content is empty (nothing to display)
    pub fn is_empty(&self) -> bool {
        match self {
            SegmentContent::Empty => true,
            SegmentContent::Text(s) => s.is_empty(),
        }
    }

    /// Get the character width of this content
    pub fn char_width(&self) -> usize {
        match self {
            SegmentContent::Empty => 0,
            SegmentContent::Text(s) => s.chars().count(),
        }
    }
}

/// A single segment in the status bar
#[derive(Debug, Clone)]
pub struct StatusSegment {
    pub id: SegmentId,
    pub position: SegmentPosition,
    pub content: SegmentContent,
    /// Hover text, if any
    pub tooltip: Option<String>,
}

impl StatusSegment {
    /// Create a new segment with the given ID and content
    pub fn new(id: SegmentId, content: SegmentContent) -> Self {
        let position = match id {
            SegmentId::FileName | SegmentId::StatusMessage => SegmentPosition::Left,
            SegmentId::Language | SegmentId::CursorPosition | SegmentId::Autocorrect => {
                SegmentPosition::Right
            }
        };

        Self {
            id,
            position,
            content,
            tooltip: None,
        }
    }
}

/// The complete status bar state
#[derive(Debug, Clone)]
pub struct StatusBar {
    segments: Vec<StatusSegment>,
    /// Spacing between segments (character units)
    pub separator_spacing: usize,
    /// Padding on each side (character units)
    pub padding: usize,
}

impl StatusBar {
    /// Create a new status bar with default segments
    pub fn new() -> Self {
        Self {
            segments: vec![
                StatusSegment::new(
                    SegmentId::FileName,
                    SegmentContent::Text("Untitled".into()),
                ),
                StatusSegment::new(SegmentId::StatusMessage, SegmentContent::Empty),
                StatusSegment::new(SegmentId::Language, SegmentContent::Empty),
                StatusSegment::new(
                    SegmentId::CursorPosition,
                    SegmentContent::Text("Ln 1, Col 1".into()),
                ),
                StatusSegment::new(SegmentId::Autocorrect, SegmentContent::Empty),
            ],
            separator_spacing: 2,
            padding: 2,
        }
    }

    /// Get a segment by ID
    pub fn get_segment(&self, id: SegmentId) -> Option<&StatusSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    fn get_segment_mut(&mut self, id: SegmentId) -> Option<&mut StatusSegment> {
        self.segments.iter_mut().find(|s| s.id == id)
    }

    /// Update a segment's content
    pub fn update_segment(&mut self, id: SegmentId, content: SegmentContent) {
        if let Some(segment) = self.get_segment_mut(id) {
            segment.content = content;
        }
    }

    /// Update a segment's tooltip
    pub fn set_tooltip(&mut self, id: SegmentId, tooltip: impl Into<String>) {
        if let Some(segment) = self.get_segment_mut(id) {
            segment.tooltip = Some(tooltip.into());
        }
    }

    /// Display text of a segment ("" when hidden or missing)
    pub fn segment_text(&self, id: SegmentId) -> &str {
        self.get_segment(id)
            .map(|s| s.content.display_text())
            .unwrap_or("")
    }

    /// Iterate over visible segments (non-empty content)
    pub fn visible_segments(&self) -> impl Iterator<Item = &StatusSegment> {
        self.segments.iter().filter(|s| !s.content.is_empty())
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Transient Message
// =============================================================================

/// A transient status message that auto-expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    /// The message text
    pub text: String,
    /// When this message expires
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a new transient message with the given duration
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

// =============================================================================
// Layout
// =============================================================================

/// A rendered segment with calculated position
#[derive(Debug, Clone)]
pub struct RenderedSegment {
    pub id: SegmentId,
    /// X position in character units
    pub x: usize,
    /// Width in character units
    pub width: usize,
    pub text: String,
}

/// Complete layout of the status bar
#[derive(Debug, Clone)]
pub struct StatusBarLayout {
    pub left: Vec<RenderedSegment>,
    pub right: Vec<RenderedSegment>,
}

impl StatusBarLayout {
    /// Render into a single line of `width` characters
    pub fn to_line(&self, width: usize) -> String {
        let mut line: Vec<char> = vec![' '; width];
        for seg in self.left.iter().chain(&self.right) {
            for (i, ch) in seg.text.chars().enumerate() {
                if let Some(cell) = line.get_mut(seg.x + i) {
                    *cell = ch;
                }
            }
        }
        line.into_iter().collect::<String>().trim_end().to_string()
    }
}

impl StatusBar {
    /// Calculate the layout for rendering
    ///
    /// # Arguments
    /// * `available_width` - Total available width in character units
    pub fn layout(&self, available_width: usize) -> StatusBarLayout {
        let mut left_segments = Vec::new();
        let mut right_segments = Vec::new();

        let mut left_x = self.padding;
        for seg in self
            .visible_segments()
            .filter(|s| s.position == SegmentPosition::Left)
        {
            let width = seg.content.char_width();
            left_segments.push(RenderedSegment {
                id: seg.id,
                x: left_x,
                width,
                text: seg.content.display_text().to_string(),
            });
            left_x += width + self.separator_spacing;
        }

        // Position right segments from the right edge, backwards
        let mut right_x = available_width.saturating_sub(self.padding);
        let right_segs: Vec<_> = self
            .visible_segments()
            .filter(|s| s.position == SegmentPosition::Right)
            .collect();

        for (i, seg) in right_segs.iter().rev().enumerate() {
            if i > 0 {
                right_x = right_x.saturating_sub(self.separator_spacing);
            }
            let width = seg.content.char_width();
            right_x = right_x.saturating_sub(width);
            right_segments.push(RenderedSegment {
                id: seg.id,
                x: right_x,
                width,
                text: seg.content.display_text().to_string(),
            });
        }
        right_segments.reverse();

        StatusBarLayout {
            left: left_segments,
            right: right_segments,
        }
    }
}

// =============================================================================
// Sync Function
// =============================================================================

use super::AppModel;

/// Synchronize status bar segments with current document/view state
pub fn sync_status_bar(model: &mut AppModel) {
    let filename = model.document.display_name();
    model
        .ui
        .status_bar
        .update_segment(SegmentId::FileName, SegmentContent::Text(filename));

    let language = model.document.language.clone();
    model
        .ui
        .status_bar
        .update_segment(SegmentId::Language, SegmentContent::Text(language));

    let cursor = model.view.cursor;
    let cursor_text = format!("Ln {}, Col {}", cursor.line + 1, cursor.column + 1);
    model
        .ui
        .status_bar
        .update_segment(SegmentId::CursorPosition, SegmentContent::Text(cursor_text));

    let message = match &model.ui.transient_message {
        Some(msg) => SegmentContent::Text(msg.text.clone()),
        None => SegmentContent::Empty,
    };
    model
        .ui
        .status_bar
        .update_segment(SegmentId::StatusMessage, message);
}
