use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use crate::regex_matcher::AnnotatedRegexMatch;

// @module: Splitting a line into styled/unstyled chunks around match spans

// @const: Runs of 2+ whitespace characters, collapsed when deriving the result line
static WHITESPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// A contiguous run of a line's text. `types` carries the labels of the
/// filter categories that matched it; `None` means plain unmatched text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineChunk {
    // @field: Chunk text
    pub text: String,

    // @field: Covering labels, None for plain text
    pub types: Option<Vec<&'static str>>,
}

/// Split `text` into ordered chunks around the annotated match spans.
///
/// Gaps before, between and after matches become plain chunks, so
/// concatenating every chunk's text in order always reconstructs the
/// original string exactly.
pub fn split_by_matches(text: &str, matches: &[AnnotatedRegexMatch]) -> Vec<LineChunk> {
    let mut sorted: Vec<&AnnotatedRegexMatch> = matches.iter().collect();
    sorted.sort_by_key(|m| m.start);

    let mut chunks: Vec<LineChunk> = Vec::new();
    let mut last_index = 0;
    for annotated in sorted {
        // Plain chunk for any gap before this match
        if annotated.start > last_index {
            chunks.push(LineChunk {
                text: text[last_index..annotated.start].to_string(),
                types: None,
            });
        }

        chunks.push(LineChunk {
            text: text[annotated.start..annotated.end].to_string(),
            types: Some(annotated.types.clone()),
        });

        last_index = annotated.end;
    }

    // Trailing remainder after the last match
    if last_index < text.len() {
        chunks.push(LineChunk {
            text: text[last_index..].to_string(),
            types: None,
        });
    }

    chunks
}

/// Derive the text that remains once every matched chunk is removed:
/// plain chunks joined without separators, whitespace runs collapsed to a
/// single space, then trimmed.
pub fn derive_result_line(chunks: &[LineChunk]) -> String {
    let joined: String = chunks
        .iter()
        .filter(|chunk| chunk.types.is_none())
        .map(|chunk| chunk.text.as_str())
        .collect();

    WHITESPACE_RUN_REGEX.replace_all(&joined, " ").trim().to_string()
}
