/*!
 * Tests for the document model and pure edit operations
 */

use anyhow::Result;
use subedit::errors::DocumentError;
use subedit::subtitle_document::{LineState, SubtitleDocument, SubtitleLine};

fn sample_document() -> SubtitleDocument {
    SubtitleDocument::new(
        "movie.srt".to_string(),
        vec![
            SubtitleLine::new(1, 1_000, 2_000, "First.".to_string()),
            SubtitleLine::new(2, 3_000, 4_000, "Second.".to_string()),
            SubtitleLine::new(3, 5_000, 6_000, "Third.".to_string()),
        ],
    )
}

/// Test selecting a valid line index
#[test]
fn test_with_selected_index_withValidIndex_shouldSelect() -> Result<()> {
    let doc = sample_document();
    let selected = doc.with_selected_index(Some(1))?;

    assert_eq!(selected.selected_line_index, Some(1));
    // The original document value is untouched
    assert_eq!(doc.selected_line_index, None);
    Ok(())
}

/// Test selecting an out-of-range index fails
#[test]
fn test_with_selected_index_withOutOfRangeIndex_shouldFail() {
    let doc = sample_document();
    let result = doc.with_selected_index(Some(3));

    assert_eq!(result.unwrap_err(), DocumentError::IndexOutOfRange { index: 3, len: 3 });
}

/// Test clearing the selection always succeeds
#[test]
fn test_with_selected_index_withNone_shouldClearSelection() -> Result<()> {
    let doc = sample_document().with_selected_index(Some(0))?;
    let cleared = doc.with_selected_index(None)?;

    assert_eq!(cleared.selected_line_index, None);
    Ok(())
}

/// Test replacing the selected line without a selection fails
#[test]
fn test_with_selected_line_withNoSelection_shouldFail() {
    let doc = sample_document();
    let line = doc.lines[0].with_text("Edited.");

    let result = doc.with_selected_line(line);
    assert_eq!(result.unwrap_err(), DocumentError::NoLineSelected);
}

/// Test replacing the selected line
#[test]
fn test_with_selected_line_withSelection_shouldReplaceLine() -> Result<()> {
    let doc = sample_document().with_selected_index(Some(1))?;
    let edited = doc.lines[1].with_text("Edited.");

    let updated = doc.with_selected_line(edited)?;

    assert_eq!(updated.lines[1].effective_text(), "Edited.");
    assert_eq!(doc.lines[1].effective_text(), "Second.");
    Ok(())
}

/// Test replacing one line by position
#[test]
fn test_with_line_at_withOutOfRangeIndex_shouldFail() {
    let doc = sample_document();
    let line = doc.lines[0].clone();

    let result = doc.with_line_at(line, 9);
    assert_eq!(result.unwrap_err(), DocumentError::IndexOutOfRange { index: 9, len: 3 });
}

/// Test editing marks the line modified and keeps the original text
#[test]
fn test_with_text_withNewText_shouldBecomeModified() {
    let line = SubtitleLine::new(1, 0, 1_000, "Original.".to_string());
    let edited = line.with_text("Changed.");

    assert_eq!(edited.state, LineState::Modified { updated_text: "Changed.".to_string() });
    assert_eq!(edited.original_text, "Original.");
    assert_eq!(edited.effective_text(), "Changed.");
}

/// Test editing a modified line back to its original text reverts to enabled
#[test]
fn test_with_text_withOriginalTextAgain_shouldRevertToEnabled() {
    let line = SubtitleLine::new(1, 0, 1_000, "Original.".to_string());
    let edited = line.with_text("Changed.");
    let reverted = edited.with_text("Original.");

    assert_eq!(reverted.state, LineState::Enabled);
    assert_eq!(reverted.effective_text(), "Original.");
}

/// Test state transitions used by delete and undo
#[test]
fn test_with_state_withRemoveAndUndo_shouldTransition() {
    let line = SubtitleLine::new(1, 0, 1_000, "Text.".to_string());

    let removed = line.with_state(LineState::Removed);
    assert_eq!(removed.state, LineState::Removed);

    let restored = removed.with_state(LineState::Enabled);
    assert_eq!(restored.state, LineState::Enabled);
    assert_eq!(line.state, LineState::Enabled);
}

/// Test shifting forward moves every line
#[test]
fn test_shifted_by_withPositiveDelta_shouldShiftAllLines() {
    let doc = sample_document();
    let shifted = doc.shifted_by(500);

    assert_eq!(shifted.lines[0].start_time_ms, 1_500);
    assert_eq!(shifted.lines[0].end_time_ms, 2_500);
    assert_eq!(shifted.lines[2].start_time_ms, 5_500);
    // Source document keeps its times
    assert_eq!(doc.lines[0].start_time_ms, 1_000);
}

/// Test shifting below zero clamps at zero
#[test]
fn test_shifted_by_withLargeNegativeDelta_shouldClampToZero() {
    let doc = sample_document();
    let shifted = doc.shifted_by(-3_500);

    assert_eq!(shifted.lines[0].start_time_ms, 0);
    assert_eq!(shifted.lines[0].end_time_ms, 0);
    assert_eq!(shifted.lines[1].start_time_ms, 0);
    assert_eq!(shifted.lines[1].end_time_ms, 500);
    assert_eq!(shifted.lines[2].start_time_ms, 1_500);
}

/// Test replacing the whole line sequence
#[test]
fn test_with_lines_withNewSequence_shouldReplaceLines() {
    let doc = sample_document();
    let replacement = vec![SubtitleLine::new(1, 0, 1_000, "Only.".to_string())];

    let updated = doc.with_lines(replacement);

    assert_eq!(updated.lines.len(), 1);
    assert_eq!(updated.filename, "movie.srt");
    assert_eq!(doc.lines.len(), 3);
}
