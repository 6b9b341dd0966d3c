use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use crate::line_chunker::{derive_result_line, split_by_matches, LineChunk};
use crate::regex_matcher::{find_matches, merge_matches, merge_with_annotations, RegexMatch};
use crate::subtitle_document::{LineState, SubtitleLine};

// @module: Built-in content filter categories and the per-line filter engine

/// Label attached to closed-caption matches
pub const CLOSED_CAPTIONS_LABEL: &str = "cc";

/// Label attached to lyrics matches
pub const LYRICS_LABEL: &str = "lyrics";

/// Label attached to speaker-label matches
pub const SPEAKER_LABELS_LABEL: &str = "speaker";

// @const: Closed captions patterns.
// Bracketed text is common for character names and sound effects; the second
// pattern catches whole standalone "- [...]" lines shown next to dialog.
static CLOSED_CAPTIONS_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?s)\[.*?\]").unwrap(),
        Regex::new(r"(?m)^- ?\[[^\]]+\]\s*$").unwrap(),
    ]
});

// @const: Lyrics pattern. Lyrics are wrapped in a pair of music note markers.
static LYRICS_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![Regex::new(r"(?s)♪.*?♪").unwrap()]
});

// @const: Speaker labels pattern, caption-style uppercase tags like "WOMAN:"
static SPEAKER_LABELS_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![Regex::new(r"(?m)^[A-Z][A-Z\s.\-']+:").unwrap()]
});

/// Which filter categories are active
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Remove bracketed hearing-impaired text
    #[serde(default = "default_true")]
    pub closed_captions: bool,

    /// Remove lyrics wrapped in music note markers
    #[serde(default = "default_true")]
    pub lyrics: bool,

    /// Remove caption-style speaker labels
    #[serde(default = "default_true")]
    pub speaker_labels: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            closed_captions: true,
            lyrics: true,
            speaker_labels: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Per-line filter preview: the annotated chunks and the text that remains
/// once every matched chunk is removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineFilterResult {
    // @field: Ordered chunks covering the whole line
    pub chunks: Vec<LineChunk>,

    // @field: Line text with matched spans removed; empty means the whole
    // line is removable
    pub result_line: String,
}

/// A filter preview tied to the document line it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredLine {
    // @field: Id of the source line
    pub line_id: usize,

    // @field: Ordered chunks covering the whole line
    pub chunks: Vec<LineChunk>,

    // @field: Line text with matched spans removed
    pub result_line: String,
}

/// Run the enabled filter categories over one line of text.
///
/// Returns `None` when there is nothing to report: no category matched
/// anywhere in the line. Otherwise returns the chunked line plus the
/// resulting text, which may be empty when the whole line is removable.
pub fn filter_line(text: &str, config: &FilterConfig) -> Option<LineFilterResult> {
    // Collect matches per category, collapsing same-category overlaps
    let closed_captions_matches = if config.closed_captions {
        category_matches(text, &CLOSED_CAPTIONS_REGEXES)
    } else {
        Vec::new()
    };
    let lyrics_matches = if config.lyrics {
        category_matches(text, &LYRICS_REGEXES)
    } else {
        Vec::new()
    };
    let speaker_labels_matches = if config.speaker_labels {
        category_matches(text, &SPEAKER_LABELS_REGEXES)
    } else {
        Vec::new()
    };

    // Merge across categories, keeping the category as the span annotation
    let merged = merge_with_annotations(&[
        (CLOSED_CAPTIONS_LABEL, closed_captions_matches),
        (LYRICS_LABEL, lyrics_matches),
        (SPEAKER_LABELS_LABEL, speaker_labels_matches),
    ]);

    let chunks = split_by_matches(text, &merged);

    // Nothing to report: zero chunks, or one plain chunk covering the line
    let has_match = match chunks.as_slice() {
        [] => false,
        [only] => only.types.is_some(),
        _ => true,
    };
    if !has_match {
        return None;
    }

    let result_line = derive_result_line(&chunks);
    Some(LineFilterResult { chunks, result_line })
}

// Run every pattern of one category and merge the per-pattern match lists
fn category_matches(text: &str, patterns: &[Regex]) -> Vec<RegexMatch> {
    let matches_per_regex: Vec<Vec<RegexMatch>> = patterns
        .iter()
        .map(|pattern| find_matches(text, pattern))
        .collect();
    merge_matches(&matches_per_regex)
}

/// Run the filter over every enabled line, skipping lines with nothing to
/// report. Filtering operates on the original text, before any modification.
pub fn filter_document(lines: &[SubtitleLine], config: &FilterConfig) -> Vec<FilteredLine> {
    lines
        .iter()
        .filter(|line| line.state == LineState::Enabled)
        .filter_map(|line| {
            filter_line(&line.original_text, config).map(|result| FilteredLine {
                line_id: line.id,
                chunks: result.chunks,
                result_line: result.result_line,
            })
        })
        .collect()
}

/// Apply one accepted filter result to its line: a non-empty result becomes
/// the line's updated text, an empty result removes the line.
pub fn apply_result_to_line(line: &SubtitleLine, result_line: &str) -> SubtitleLine {
    if result_line.is_empty() {
        line.with_state(LineState::Removed)
    } else {
        line.with_text(result_line)
    }
}

/// Apply every previewed result to the matching lines ("apply to all")
pub fn apply_results(lines: &[SubtitleLine], results: &[FilteredLine]) -> Vec<SubtitleLine> {
    lines
        .iter()
        .map(|line| {
            match results.iter().find(|result| result.line_id == line.id) {
                Some(result) => apply_result_to_line(line, &result.result_line),
                None => line.clone(),
            }
        })
        .collect()
}
