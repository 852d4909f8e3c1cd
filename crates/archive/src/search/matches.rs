//! Line-level literal matching.
//!
//! The query is matched as literal bytes with `memchr::memmem`, never as a
//! pattern, so regex metacharacters have no meaning. Matching is
//! ASCII-case-insensitive, non-overlapping and left-to-right within each
//! line. ASCII lowercasing keeps byte lengths stable, so recorded offsets
//! always index into the stored line text.

use memchr::memmem;
use serde::Serialize;

/// One occurrence of the query on one line.
///
/// `line_text` is the line trimmed of leading and trailing whitespace, and
/// `start..end` are byte offsets into that trimmed text: matching runs on
/// the trimmed line, so `line_text[start..end]` always equals the query
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMatch {
    /// 1-based line number within the file.
    pub line_number: u32,
    pub line_text: String,
    pub start: usize,
    pub end: usize,
}

/// Finds every match of `query` in `content`, line by line.
///
/// An empty query matches nothing.
pub fn find_line_matches(content: &str, query: &str) -> Vec<LineMatch> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_ascii_lowercase();
    let finder = memmem::Finder::new(needle.as_bytes());
    let mut matches = Vec::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.len() < needle.len() {
            continue;
        }
        let haystack = line.to_ascii_lowercase();
        for start in finder.find_iter(haystack.as_bytes()) {
            matches.push(LineMatch {
                line_number: (index + 1) as u32,
                line_text: line.to_string(),
                start,
                end: start + needle.len(),
            });
        }
    }

    matches
}
