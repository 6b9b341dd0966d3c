use std::collections::BTreeSet;
use regex::Regex;
use serde::Serialize;

// @module: Regex match spans and interval merging

/// A half-open match span `[start, end)` over a line's byte positions.
/// The exclusive end makes a span directly usable as a slice bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegexMatch {
    // @field: Start offset, inclusive
    pub start: usize,

    // @field: End offset, exclusive
    pub end: usize,
}

impl RegexMatch {
    pub fn new(start: usize, end: usize) -> Self {
        RegexMatch { start, end }
    }
}

/// A match span annotated with the labels of the match groups covering it.
/// Labels appear in the groups' input order and the set is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedRegexMatch {
    // @field: Start offset, inclusive
    pub start: usize,

    // @field: End offset, exclusive
    pub end: usize,

    // @field: Labels of the covering groups, in group input order
    pub types: Vec<&'static str>,
}

/// Find every non-overlapping occurrence of `pattern` in `text`, left to right
pub fn find_matches(text: &str, pattern: &Regex) -> Vec<RegexMatch> {
    pattern
        .find_iter(text)
        .map(|found| RegexMatch::new(found.start(), found.end()))
        .collect()
}

/// Merge several match lists into one minimal disjoint covering set.
///
/// All matches are flattened, sorted by start and swept left to right;
/// a match whose start falls on or before the open interval's current end
/// extends it, so touching spans merge as well as overlapping ones.
pub fn merge_matches(match_lists: &[Vec<RegexMatch>]) -> Vec<RegexMatch> {
    let mut all_matches: Vec<RegexMatch> = match_lists.iter().flatten().copied().collect();
    all_matches.sort_by_key(|m| m.start);

    let mut merged: Vec<RegexMatch> = Vec::new();
    for current in all_matches {
        match merged.last_mut() {
            Some(last) if current.start <= last.end => {
                last.end = last.end.max(current.end);
            }
            _ => merged.push(current),
        }
    }
    merged
}

/// Merge labeled match groups into an ordered run-length encoding of which
/// label set covers each span.
///
/// The sorted set of all distinct start/end values across the groups forms
/// the breakpoints. For each adjacent breakpoint pair, a group covers the
/// sub-span iff one of its matches fully contains it; sub-spans covered by
/// no group are dropped. Adjacent output spans with the same label set
/// (order-independent comparison) and contiguous boundaries are coalesced,
/// so the encoding is minimal no matter how many source regexes fed a label.
pub fn merge_with_annotations(
    groups: &[(&'static str, Vec<RegexMatch>)],
) -> Vec<AnnotatedRegexMatch> {
    // Breakpoints come only from the matches' own boundaries; sampling
    // anywhere else would break the containment test below.
    let points: BTreeSet<usize> = groups
        .iter()
        .flat_map(|(_, matches)| matches.iter().flat_map(|m| [m.start, m.end]))
        .collect();
    let points: Vec<usize> = points.into_iter().collect();

    let mut result: Vec<AnnotatedRegexMatch> = Vec::new();

    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);

        let types: Vec<&'static str> = groups
            .iter()
            .filter(|(_, matches)| {
                matches.iter().any(|m| start >= m.start && end <= m.end)
            })
            .map(|(label, _)| *label)
            .collect();

        if types.is_empty() {
            continue;
        }

        // Merge with the previous span when it carries the same label set
        match result.last_mut() {
            Some(last) if last.end == start && same_label_set(&last.types, &types) => {
                last.end = end;
            }
            _ => result.push(AnnotatedRegexMatch { start, end, types }),
        }
    }

    result
}

// Set equality over label lists, ignoring order
fn same_label_set(a: &[&'static str], b: &[&'static str]) -> bool {
    a.len() == b.len() && a.iter().all(|label| b.contains(label))
}
