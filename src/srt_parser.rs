use regex::Regex;
use once_cell::sync::Lazy;
use log::warn;
use crate::subtitle_document::{LineState, SubtitleLine};
use crate::timestamp::Timestamp;

// @module: Lenient SRT parsing and serialization

// @const: Timing line regex, comma-decimal dialect.
// Hour/minute/second fields may be 1 or 2 digits, the fraction 1-4 digits;
// Timestamp::correct_format normalizes the widths afterwards.
static COMMA_TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}:\d{1,2}:\d{1,2},\d{1,4}) --> (\d{1,2}:\d{1,2}:\d{1,2},\d{1,4})$")
        .unwrap()
});

// @const: Timing line regex, dot-decimal dialect
static DOT_TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}:\d{1,2}:\d{1,2}\.\d{1,4}) --> (\d{1,2}:\d{1,2}:\d{1,2}\.\d{1,4})$")
        .unwrap()
});

/// Parse raw SRT text into subtitle lines.
///
/// The comma-decimal dialect is tried first; when it yields no blocks at all
/// the parser retries with the dot-decimal dialect. `\r\n` and `\n` line
/// endings are both accepted. The numeric label of each block is untrusted
/// and discarded; lines are identified by their 1-based sequence position.
///
/// Malformed or unparsable input yields an empty sequence, never an error.
pub fn from_srt(content: &str) -> Vec<SubtitleLine> {
    let lines = parse_with_dialect(content, &COMMA_TIMING_REGEX);
    if lines.is_empty() {
        return parse_with_dialect(content, &DOT_TIMING_REGEX);
    }
    lines
}

// State machine over the text, one block at a time: numeric label line,
// timing line, one or more text lines, blank separator.
fn parse_with_dialect(content: &str, timing_regex: &Regex) -> Vec<SubtitleLine> {
    let content = content.replace('\r', "");

    fn finalize(
        times: &mut Option<(u64, u64)>,
        text: &mut String,
        label_seen: &mut bool,
        out: &mut Vec<SubtitleLine>,
    ) {
        if let Some((start_ms, end_ms)) = times.take() {
            if text.trim().is_empty() {
                warn!("Skipping subtitle block {} with empty text", out.len() + 1);
            } else {
                let id = out.len() + 1;
                out.push(SubtitleLine::new(id, start_ms, end_ms, text.clone()));
            }
        }
        *label_seen = false;
        text.clear();
    }

    let mut lines: Vec<SubtitleLine> = Vec::new();
    let mut label_seen = false;
    let mut current_times: Option<(u64, u64)> = None;
    let mut current_text = String::new();
    let mut line_count = 0;

    for raw_line in content.lines() {
        line_count += 1;
        let trimmed = raw_line.trim();

        // A blank line closes the current block
        if trimmed.is_empty() {
            finalize(&mut current_times, &mut current_text, &mut label_seen, &mut lines);
            continue;
        }

        // Numeric label opens a new block
        if !label_seen && current_times.is_none() && trimmed.parse::<u64>().is_ok() {
            label_seen = true;
            continue;
        }

        // Timing line follows the label
        if label_seen && current_times.is_none() {
            if let Some(caps) = timing_regex.captures(trimmed) {
                let start = Timestamp::parse(&caps[1]);
                let end = Timestamp::parse(&caps[2]);
                match (start, end) {
                    (Ok(start_ts), Ok(end_ts)) => {
                        current_times = Some((start_ts.to_millis(), end_ts.to_millis()));
                        continue;
                    }
                    _ => {
                        warn!("Invalid timestamp at line {}: {}", line_count, trimmed);
                    }
                }
            }
        }

        // Anything after the timing line is subtitle text
        if current_times.is_some() {
            if !current_text.is_empty() {
                current_text.push('\n');
            }
            current_text.push_str(trimmed);
        } else {
            warn!("Unexpected text at line {} outside a subtitle block: {}", line_count, trimmed);
        }
    }

    // Close the last block if the file has no trailing blank line
    finalize(&mut current_times, &mut current_text, &mut label_seen, &mut lines);

    lines
}

/// Serialize subtitle lines back to SRT text.
///
/// Blocks are emitted in document order, renumbered sequentially from 1.
/// Removed lines are skipped entirely; modified lines export their updated
/// text. Lines are joined with CRLF, blocks separated by a blank line, and
/// the file ends with a single trailing CRLF.
pub fn to_srt(lines: &[SubtitleLine]) -> String {
    let blocks: Vec<String> = lines
        .iter()
        .filter(|line| line.state != LineState::Removed)
        .enumerate()
        .map(|(position, line)| {
            format!(
                "{}\r\n{} --> {}\r\n{}",
                position + 1,
                line.format_start_time(),
                line.format_end_time(),
                line.effective_text().replace('\n', "\r\n"),
            )
        })
        .collect();

    if blocks.is_empty() {
        return String::new();
    }
    blocks.join("\r\n\r\n") + "\r\n"
}
