//! The search scan itself.

use serde::Serialize;

use crate::cancel::CancellationToken;
use crate::content::{is_binary_sentinel, ContentReader};

use super::filter::SearchIndex;
use super::matches::{find_line_matches, LineMatch};

/// All matches for one file, in line order.
///
/// `path` refers back to the tree node; results never own tree data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSearchResult {
    pub path: String,
    pub matches: Vec<LineMatch>,
}

/// Aggregated outcome of one search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// The query that was executed.
    pub query: String,
    /// Matching files in scan order (tree pre-order, directories-first).
    pub results: Vec<FileSearchResult>,
    /// Total count of files with at least one match.
    pub file_count: usize,
    /// Total match count across all files.
    pub match_count: usize,
}

impl SearchOutcome {
    fn empty(query: &str) -> Self {
        Self {
            query: query.to_string(),
            results: Vec::new(),
            file_count: 0,
            match_count: 0,
        }
    }
}

/// Scans every searchable file for the query.
///
/// Files are read one at a time, in index order, with the cancellation
/// token checked between reads; `None` means the search was superseded
/// and its partial results must be discarded. An empty query returns an
/// empty outcome without performing any content reads.
///
/// A file is skipped without aborting the scan when its content is the
/// binary sentinel or its read fails; partial results are preferred over
/// no results.
pub async fn run_search(
    index: &SearchIndex,
    query: &str,
    reader: &dyn ContentReader,
    token: &CancellationToken,
) -> Option<SearchOutcome> {
    token.is_cancelled()?;

    let mut outcome = SearchOutcome::empty(query);
    if query.is_empty() {
        return Some(outcome);
    }

    for path in index.targets() {
        token.is_cancelled()?;

        let content = match reader.read_text(path).await {
            Ok(content) => content,
            Err(error) => {
                log::warn!("search skipping {path}: {error}");
                continue;
            }
        };
        if is_binary_sentinel(&content) {
            continue;
        }

        let matches = find_line_matches(&content, query);
        if matches.is_empty() {
            continue;
        }
        outcome.file_count += 1;
        outcome.match_count += matches.len();
        outcome.results.push(FileSearchResult {
            path: path.clone(),
            matches,
        });
    }

    token.is_cancelled()?;
    log::debug!(
        "search {:?}: {} matches in {} files over {} candidates",
        query,
        outcome.match_count,
        outcome.file_count,
        index.len()
    );
    Some(outcome)
}
