use serde::Serialize;
use crate::errors::DocumentError;
use crate::timestamp::Timestamp;

// @module: In-memory subtitle document model and pure edit operations

/// Edit state of a single subtitle line.
///
/// `Modified` carries the replacement text; the original text is always kept
/// on the line itself so an edit can be reverted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineState {
    /// Line is unchanged and will be exported as-is
    Enabled,

    /// Line is deleted and will be skipped on export
    Removed,

    /// Line text was edited; `updated_text` replaces the original on export
    Modified {
        updated_text: String,
    },
}

// @struct: Single subtitle line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtitleLine {
    // @field: 1-based stable position, independent of the numeric label in the file
    pub id: usize,

    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms
    pub end_time_ms: u64,

    // @field: Text as loaded from the file
    pub original_text: String,

    // @field: Edit state
    pub state: LineState,
}

impl SubtitleLine {
    /// Creates a new enabled subtitle line
    pub fn new(id: usize, start_time_ms: u64, end_time_ms: u64, original_text: String) -> Self {
        SubtitleLine {
            id,
            start_time_ms,
            end_time_ms,
            original_text,
            state: LineState::Enabled,
        }
    }

    /// Text to display and export: the updated text when the line is
    /// modified, the original text otherwise.
    pub fn effective_text(&self) -> &str {
        match &self.state {
            LineState::Modified { updated_text } => updated_text,
            _ => &self.original_text,
        }
    }

    /// Returns a copy of this line with its text set.
    ///
    /// Editing a modified line back to its original text reverts the line to
    /// enabled instead of keeping a modification with unchanged content.
    pub fn with_text(&self, new_text: &str) -> Self {
        let state = if matches!(self.state, LineState::Modified { .. }) && new_text == self.original_text {
            LineState::Enabled
        } else {
            LineState::Modified { updated_text: new_text.to_string() }
        };
        SubtitleLine { state, ..self.clone() }
    }

    /// Returns a copy of this line with the given state (used by delete/undo)
    pub fn with_state(&self, state: LineState) -> Self {
        SubtitleLine { state, ..self.clone() }
    }

    /// Returns a copy of this line with both times shifted by `delta_ms`.
    /// Times that would go below zero clamp to zero.
    pub fn shifted_by(&self, delta_ms: i64) -> Self {
        SubtitleLine {
            start_time_ms: shift_clamped(self.start_time_ms, delta_ms),
            end_time_ms: shift_clamped(self.end_time_ms, delta_ms),
            ..self.clone()
        }
    }

    /// Canonical SRT start timestamp
    pub fn format_start_time(&self) -> String {
        Timestamp::format_millis(self.start_time_ms)
    }

    /// Canonical SRT end timestamp
    pub fn format_end_time(&self) -> String {
        Timestamp::format_millis(self.end_time_ms)
    }
}

fn shift_clamped(time_ms: u64, delta_ms: i64) -> u64 {
    (time_ms as i64 + delta_ms).max(0) as u64
}

/// A loaded subtitle file: ordered lines plus the current selection.
///
/// Every operation returns a new document value and never mutates the
/// receiver, so callers can detect changes by comparing values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtitleDocument {
    // @field: Source filename
    pub filename: String,

    // @field: Ordered subtitle lines
    pub lines: Vec<SubtitleLine>,

    // @field: Index of the currently selected line, if any
    pub selected_line_index: Option<usize>,
}

impl SubtitleDocument {
    /// Create a new document from parsed lines
    pub fn new(filename: String, lines: Vec<SubtitleLine>) -> Self {
        SubtitleDocument {
            filename,
            lines,
            selected_line_index: None,
        }
    }

    /// Returns a copy with the selection changed.
    /// A non-null index must be a valid position in `lines`.
    pub fn with_selected_index(&self, index: Option<usize>) -> Result<Self, DocumentError> {
        if let Some(index) = index {
            if index >= self.lines.len() {
                return Err(DocumentError::IndexOutOfRange { index, len: self.lines.len() });
            }
        }
        Ok(SubtitleDocument {
            selected_line_index: index,
            ..self.clone()
        })
    }

    /// Returns a copy with the whole line sequence replaced
    pub fn with_lines(&self, lines: Vec<SubtitleLine>) -> Self {
        SubtitleDocument { lines, ..self.clone() }
    }

    /// Returns a copy with one line replaced by position
    pub fn with_line_at(&self, line: SubtitleLine, index: usize) -> Result<Self, DocumentError> {
        if index >= self.lines.len() {
            return Err(DocumentError::IndexOutOfRange { index, len: self.lines.len() });
        }
        let mut lines = self.lines.clone();
        lines[index] = line;
        Ok(self.with_lines(lines))
    }

    /// Returns a copy with the currently selected line replaced
    pub fn with_selected_line(&self, line: SubtitleLine) -> Result<Self, DocumentError> {
        let index = self.selected_line_index.ok_or(DocumentError::NoLineSelected)?;
        self.with_line_at(line, index)
    }

    /// Returns a copy with every line's times shifted by `delta_ms`,
    /// clamping at zero. A large negative delta can collapse several lines
    /// to start == end == 0; no end-before-start check is applied.
    pub fn shifted_by(&self, delta_ms: i64) -> Self {
        let lines = self.lines.iter().map(|line| line.shifted_by(delta_ms)).collect();
        self.with_lines(lines)
    }
}
